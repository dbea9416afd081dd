//! Behaviour tests for loading and saving map files.

use std::cell::RefCell;

use camino::Utf8PathBuf;
use courier_core::RoadGraph;
use courier_data::{MapFileError, load_graph, save_graph};
use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

struct MapWorld {
    scratch: TempDir,
    path: RefCell<Option<Utf8PathBuf>>,
    network: RefCell<RoadGraph>,
    loaded: RefCell<Option<Result<RoadGraph, MapFileError>>>,
}

impl MapWorld {
    fn scratch_root(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.scratch.path().to_path_buf())
            .unwrap_or_else(|path| panic!("non-UTF-8 temp dir {}", path.display()))
    }

    fn loaded_graph(&self) -> RoadGraph {
        match self.loaded.borrow().as_ref() {
            Some(Ok(graph)) => graph.clone(),
            Some(Err(err)) => panic!("map failed to load: {err}"),
            None => panic!("no map was loaded"),
        }
    }

    fn load_error(&self) -> String {
        match self.loaded.borrow().as_ref() {
            Some(Err(err)) => {
                let expected = self.path.borrow();
                assert_eq!(Some(err.path()), expected.as_deref());
                format!("{err:?}")
            }
            Some(Ok(_)) => panic!("map loaded unexpectedly"),
            None => panic!("no map was loaded"),
        }
    }
}

#[fixture]
fn world() -> MapWorld {
    let scratch = TempDir::new().unwrap_or_else(|err| panic!("failed to create temp dir: {err}"));
    MapWorld {
        scratch,
        path: RefCell::new(None),
        network: RefCell::new(RoadGraph::new()),
        loaded: RefCell::new(None),
    }
}

fn fixture_path(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[given("the downtown map file")]
fn downtown(#[from(world)] world: &MapWorld) {
    world.path.replace(Some(fixture_path("downtown.json")));
}

#[given("the negative road map file")]
fn negative_road(#[from(world)] world: &MapWorld) {
    world.path.replace(Some(fixture_path("negative_road.json")));
}

#[given("a path with no map file")]
fn missing(#[from(world)] world: &MapWorld) {
    world.path.replace(Some(world.scratch_root().join("nowhere.json")));
}

#[given("a road network A-B 5 and B-C 2.5")]
fn small_network(#[from(world)] world: &MapWorld) {
    let mut network = world.network.borrow_mut();
    for (a, b, minutes) in [("A", "B", 5.0), ("B", "C", 2.5)] {
        network
            .add_edge(a, b, minutes)
            .unwrap_or_else(|err| panic!("invalid road: {err}"));
    }
}

fn load_chosen_path(world: &MapWorld) {
    let path = world
        .path
        .borrow()
        .clone()
        .unwrap_or_else(|| panic!("no map path chosen"));
    world.loaded.replace(Some(load_graph(&path)));
}

#[when("I load the road graph")]
fn load(#[from(world)] world: &MapWorld) {
    load_chosen_path(world);
}

#[when("I save it to a nested folder and load it back")]
fn save_and_reload(#[from(world)] world: &MapWorld) {
    let path = world.scratch_root().join("maps/saved/network.json");
    save_graph(&path, &world.network.borrow())
        .unwrap_or_else(|err| panic!("failed to save map: {err}"));
    world.path.replace(Some(path));
    load_chosen_path(world);
}

#[then("the graph has 9 intersections and 12 roads")]
fn nine_and_twelve(#[from(world)] world: &MapWorld) {
    let graph = world.loaded_graph();
    assert_eq!(graph.node_count(), 9);
    assert_eq!(graph.edge_count(), 12);
    assert!(graph.is_connected());
}

#[then("intersection E sits at 300, 300")]
fn e_position(#[from(world)] world: &MapWorld) {
    assert_eq!(
        world.loaded_graph().coord("E"),
        Some(Coord { x: 300.0, y: 300.0 })
    );
}

#[then("the reloaded road from C to B takes 2.5 minutes")]
fn reloaded_weight(#[from(world)] world: &MapWorld) {
    let graph = world.loaded_graph();
    assert_eq!(graph.edge_weight("C", "B"), Some(2.5));
    assert_eq!(graph.summary(), world.network.borrow().summary());
}

#[then("loading fails with a read error naming the file")]
fn read_error(#[from(world)] world: &MapWorld) {
    assert!(world.load_error().starts_with("Read"));
}

#[then("loading fails with an invalid road network error")]
fn graph_error(#[from(world)] world: &MapWorld) {
    assert!(world.load_error().starts_with("Graph"));
}

#[scenario(path = "tests/features/map_files.feature", index = 0)]
fn loading_the_downtown_map(#[from(world)] world: MapWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/map_files.feature", index = 1)]
fn saving_and_reloading(#[from(world)] world: MapWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/map_files.feature", index = 2)]
fn loading_a_missing_file(#[from(world)] world: MapWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/map_files.feature", index = 3)]
fn loading_a_negative_road(#[from(world)] world: MapWorld) {
    let _ = world;
}
