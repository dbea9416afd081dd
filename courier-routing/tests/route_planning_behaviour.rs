//! Behaviour tests for planning routes with `PathFinder`.

use std::cell::RefCell;

use courier_core::RoadGraph;
use courier_core::test_support::sample_graph;
use courier_routing::{Algorithm, ComparisonReport, PathFinder};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct RouteWorld {
    graph: RefCell<RoadGraph>,
    route: RefCell<Option<Vec<String>>>,
    report: RefCell<Option<ComparisonReport>>,
}

impl RouteWorld {
    fn plan(&self, algorithm: Algorithm) {
        let graph = self.graph.borrow();
        let route = PathFinder::new(&graph).find(algorithm, "A", "I");
        self.route.replace(route);
    }

    fn route_time(&self) -> f64 {
        let graph = self.graph.borrow();
        let route = self.route.borrow();
        PathFinder::new(&graph).route_time(route.as_deref().unwrap_or_default())
    }
}

#[fixture]
fn world() -> RouteWorld {
    RouteWorld::default()
}

#[given("the sample map")]
fn the_sample_map(#[from(world)] world: &RouteWorld) {
    world.graph.replace(sample_graph());
}

#[given("the road between E and F is closed")]
fn close_road(#[from(world)] world: &RouteWorld) {
    assert!(world.graph.borrow_mut().remove_edge("E", "F"));
}

#[when("I plan a route from A to I with dijkstra")]
fn plan_dijkstra(#[from(world)] world: &RouteWorld) {
    world.plan(Algorithm::Dijkstra);
}

#[when("I plan a route from A to I with bfs")]
fn plan_bfs(#[from(world)] world: &RouteWorld) {
    world.plan(Algorithm::BreadthFirst);
}

#[when("I plan a route from A to I with astar")]
fn plan_astar(#[from(world)] world: &RouteWorld) {
    world.plan(Algorithm::AStar);
}

#[when("I compare all strategies from A to I")]
fn compare_all(#[from(world)] world: &RouteWorld) {
    let graph = world.graph.borrow();
    let report = PathFinder::new(&graph).compare_algorithms("A", "I");
    world.report.replace(Some(report));
}

#[then("the route is A, B, E, F, I")]
fn route_via_e(#[from(world)] world: &RouteWorld) {
    assert_eq!(
        world.route.borrow().as_deref(),
        Some(&["A", "B", "E", "F", "I"].map(str::to_owned)[..])
    );
}

#[then("the route is A, B, C, F, I")]
fn route_via_c(#[from(world)] world: &RouteWorld) {
    assert_eq!(
        world.route.borrow().as_deref(),
        Some(&["A", "B", "C", "F", "I"].map(str::to_owned)[..])
    );
}

#[then("the route takes 18 minutes")]
fn takes_eighteen(#[from(world)] world: &RouteWorld) {
    assert_eq!(world.route_time(), 18.0);
}

#[then("the route takes 19 minutes")]
fn takes_nineteen(#[from(world)] world: &RouteWorld) {
    assert_eq!(world.route_time(), 19.0);
}

#[then("every strategy finds a route")]
fn every_strategy_finds(#[from(world)] world: &RouteWorld) {
    let report = world.report.borrow();
    let runs = report.as_ref().map(|r| r.runs.as_slice()).unwrap_or_default();
    assert_eq!(runs.len(), Algorithm::ALL.len());
    assert!(runs.iter().all(|run| run.found()));
}

#[then("the best route takes 18 minutes")]
fn best_takes_eighteen(#[from(world)] world: &RouteWorld) {
    let report = world.report.borrow();
    let best = report.as_ref().and_then(ComparisonReport::best);
    assert_eq!(best.map(|run| run.route_time), Some(18.0));
}

macro_rules! register_route_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/route_planning.feature", name = $title)]
        fn $fn_name(#[from(world)] world: RouteWorld) {
            let _ = world;
        }
    };
}

register_route_scenario!(fastest_route, "fastest route from A to I");
register_route_scenario!(fewest_roads, "fewest roads from A to I");
register_route_scenario!(guided_search, "guided search matches the fastest route");
register_route_scenario!(
    comparison_picks_fastest,
    "comparing every strategy picks a fastest route"
);
register_route_scenario!(closed_road_reroutes, "a closed road reroutes traffic");
