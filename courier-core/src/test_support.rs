//! Sample maps shared by unit, behaviour and property tests.

use geo::Coord;

use crate::RoadGraph;

/// Intersections of the nine-node sample map as `(id, column, row)`.
pub const SAMPLE_INTERSECTIONS: [(&str, u8, u8); 9] = [
    ("A", 0, 0),
    ("B", 1, 0),
    ("C", 2, 0),
    ("D", 0, 1),
    ("E", 1, 1),
    ("F", 2, 1),
    ("G", 0, 2),
    ("H", 1, 2),
    ("I", 2, 2),
];

/// Roads of the nine-node sample map in insertion order.
pub const SAMPLE_ROADS: [(&str, &str, f64); 12] = [
    ("A", "B", 5.0),
    ("B", "C", 7.0),
    ("A", "D", 6.0),
    ("B", "E", 4.0),
    ("C", "F", 3.0),
    ("D", "E", 8.0),
    ("E", "F", 5.0),
    ("D", "G", 9.0),
    ("E", "H", 6.0),
    ("F", "I", 4.0),
    ("G", "H", 7.0),
    ("H", "I", 5.0),
];

/// The nine-node sample map with one coordinate unit per grid step.
///
/// Every road takes at least three minutes while no two intersections are
/// further than `2 * sqrt(2)` units apart, so the Euclidean heuristic is
/// admissible.
#[must_use]
pub fn sample_graph() -> RoadGraph {
    sample_graph_with_spacing(1.0, Coord { x: 0.0, y: 0.0 })
}

/// The nine-node sample map laid out in editor pixels (200 px spacing from
/// `(100, 100)`).
#[must_use]
pub fn sample_graph_in_pixels() -> RoadGraph {
    sample_graph_with_spacing(200.0, Coord { x: 100.0, y: 100.0 })
}

#[expect(
    clippy::float_arithmetic,
    reason = "sample coordinates are scaled grid positions"
)]
#[expect(
    clippy::expect_used,
    reason = "sample data is static and known to be valid"
)]
fn sample_graph_with_spacing(spacing: f64, origin: Coord<f64>) -> RoadGraph {
    let mut graph = RoadGraph::new();
    for (id, col, row) in SAMPLE_INTERSECTIONS {
        let location = Coord {
            x: origin.x + f64::from(col) * spacing,
            y: origin.y + f64::from(row) * spacing,
        };
        graph
            .add_node(id, Some(location))
            .expect("sample intersection ids are non-empty");
    }
    for (a, b, weight) in SAMPLE_ROADS {
        graph
            .add_edge(a, b, weight)
            .expect("sample roads have valid weights");
    }
    graph
}

/// Five intersections where depth-first variants disagree:
/// `A-B(1) A-C(2) B-D(1) C-D(2) D-E(1)`.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "sample data is static and known to be valid"
)]
pub fn branching_graph() -> RoadGraph {
    let mut graph = RoadGraph::new();
    for (a, b, weight) in [
        ("A", "B", 1.0),
        ("A", "C", 2.0),
        ("B", "D", 1.0),
        ("C", "D", 2.0),
        ("D", "E", 1.0),
    ] {
        graph
            .add_edge(a, b, weight)
            .expect("sample roads have valid weights");
    }
    graph
}
