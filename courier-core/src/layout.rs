//! Quick-build helpers that lay out regular road networks.
//!
//! Both builders skip intersections and roads that already exist, so they
//! can extend a hand-drawn map without clobbering it.

use geo::Coord;

use crate::{GraphError, RoadGraph};

/// A rectangular grid of intersections named `G{row}{col}` (1-based).
///
/// Grids with more than nine rows or columns separate the two numbers with
/// an underscore (`G10_2`) so every name stays unique.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Number of rows.
    pub rows: u16,
    /// Number of columns.
    pub cols: u16,
    /// Position of `G11`.
    pub origin: Coord<f64>,
    /// Distance between neighbouring columns (`x`) and rows (`y`).
    pub spacing: Coord<f64>,
    /// Travel time for every generated road.
    pub weight: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            origin: Coord { x: 100.0, y: 100.0 },
            spacing: Coord { x: 150.0, y: 150.0 },
            weight: 5.0,
        }
    }
}

/// A straight chain of intersections named `L{i}` (1-based) along the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainLayout {
    /// Number of intersections.
    pub count: u16,
    /// Position of `L1`.
    pub origin: Coord<f64>,
    /// Distance between consecutive intersections.
    pub spacing: f64,
    /// Travel time for every generated road.
    pub weight: f64,
}

impl Default for ChainLayout {
    fn default() -> Self {
        Self {
            count: 5,
            origin: Coord { x: 100.0, y: 300.0 },
            spacing: 120.0,
            weight: 4.0,
        }
    }
}

/// Add a grid, returning the identifiers of newly created intersections.
///
/// # Errors
/// Returns [`GraphError::InvalidWeight`] when the layout weight is invalid.
///
/// # Examples
///
/// ```
/// use courier_core::{GridLayout, RoadGraph, add_grid};
///
/// let mut graph = RoadGraph::new();
/// let added = add_grid(&mut graph, &GridLayout { rows: 2, cols: 2, ..GridLayout::default() })?;
/// assert_eq!(added, ["G11", "G12", "G21", "G22"]);
/// assert_eq!(graph.edge_count(), 4);
/// # Ok::<(), courier_core::GraphError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "grid positions are offsets from the origin"
)]
pub fn add_grid(graph: &mut RoadGraph, layout: &GridLayout) -> Result<Vec<String>, GraphError> {
    let mut added = Vec::new();
    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let id = grid_id(layout, row, col);
            if graph.contains_node(&id) {
                continue;
            }
            let position = Coord {
                x: layout.origin.x + f64::from(col) * layout.spacing.x,
                y: layout.origin.y + f64::from(row) * layout.spacing.y,
            };
            graph.add_node(&id, Some(position))?;
            added.push(id);
        }
    }
    for row in 0..layout.rows {
        for col in 1..layout.cols {
            connect(
                graph,
                &grid_id(layout, row, col - 1),
                &grid_id(layout, row, col),
                layout.weight,
            )?;
        }
    }
    for row in 1..layout.rows {
        for col in 0..layout.cols {
            connect(
                graph,
                &grid_id(layout, row - 1, col),
                &grid_id(layout, row, col),
                layout.weight,
            )?;
        }
    }
    Ok(added)
}

/// Add a chain, returning the identifiers of newly created intersections.
///
/// # Errors
/// Returns [`GraphError::InvalidWeight`] when the layout weight is invalid.
#[expect(
    clippy::float_arithmetic,
    reason = "chain positions are offsets from the origin"
)]
pub fn add_chain(graph: &mut RoadGraph, layout: &ChainLayout) -> Result<Vec<String>, GraphError> {
    let mut added = Vec::new();
    for position in 0..layout.count {
        let id = chain_id(position);
        if graph.contains_node(&id) {
            continue;
        }
        let location = Coord {
            x: layout.origin.x + f64::from(position) * layout.spacing,
            y: layout.origin.y,
        };
        graph.add_node(&id, Some(location))?;
        added.push(id);
    }
    for position in 1..layout.count {
        connect(
            graph,
            &chain_id(position - 1),
            &chain_id(position),
            layout.weight,
        )?;
    }
    Ok(added)
}

fn grid_id(layout: &GridLayout, row: u16, col: u16) -> String {
    let (row_label, col_label) = (u32::from(row) + 1, u32::from(col) + 1);
    if layout.rows > 9 || layout.cols > 9 {
        format!("G{row_label}_{col_label}")
    } else {
        format!("G{row_label}{col_label}")
    }
}

fn chain_id(position: u16) -> String {
    format!("L{}", u32::from(position) + 1)
}

fn connect(graph: &mut RoadGraph, a: &str, b: &str, weight: f64) -> Result<(), GraphError> {
    if graph.has_edge(a, b) {
        return Ok(());
    }
    graph.add_edge(a, b, weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn grid_wires_rows_and_columns() {
        let mut graph = RoadGraph::new();
        let added = add_grid(&mut graph, &GridLayout::default()).expect("valid grid");
        assert_eq!(added.len(), 9);
        assert_eq!(graph.edge_count(), 12);
        assert!(graph.has_edge("G11", "G12"));
        assert!(graph.has_edge("G11", "G21"));
        assert!(!graph.has_edge("G11", "G22"));
        assert_eq!(graph.coord("G23"), Some(Coord { x: 400.0, y: 250.0 }));
        assert!(graph.is_connected());
    }

    #[rstest]
    fn grid_keeps_existing_roads() {
        let mut graph = RoadGraph::new();
        graph.add_edge("G11", "G12", 1.0).expect("valid road");
        let added = add_grid(&mut graph, &GridLayout::default()).expect("valid grid");
        assert_eq!(added.len(), 7);
        assert_eq!(graph.edge_weight("G11", "G12"), Some(1.0));
        assert_eq!(graph.edge_weight("G12", "G13"), Some(5.0));
    }

    #[rstest]
    fn large_grids_use_separated_names() {
        let mut graph = RoadGraph::new();
        let layout = GridLayout {
            rows: 11,
            cols: 2,
            ..GridLayout::default()
        };
        let added = add_grid(&mut graph, &layout).expect("valid grid");
        assert_eq!(added.len(), 22);
        assert!(graph.has_edge("G1_1", "G1_2"));
        assert!(graph.has_edge("G10_2", "G11_2"));
        assert_eq!(graph.edge_count(), 11 + 2 * 10);
    }

    #[rstest]
    fn chain_links_consecutive_nodes() {
        let mut graph = RoadGraph::new();
        let added = add_chain(&mut graph, &ChainLayout::default()).expect("valid chain");
        assert_eq!(added, ["L1", "L2", "L3", "L4", "L5"]);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors("L3"), vec!["L2", "L4"]);
        assert_eq!(graph.coord("L2"), Some(Coord { x: 220.0, y: 300.0 }));
    }

    #[rstest]
    fn invalid_weight_is_reported() {
        let mut graph = RoadGraph::new();
        let layout = ChainLayout {
            weight: -1.0,
            ..ChainLayout::default()
        };
        assert!(add_chain(&mut graph, &layout).is_err());
    }

    #[rstest]
    fn empty_layouts_add_nothing() {
        let mut graph = RoadGraph::new();
        let layout = GridLayout {
            rows: 0,
            ..GridLayout::default()
        };
        assert!(add_grid(&mut graph, &layout).expect("valid grid").is_empty());
        assert!(graph.is_empty());
    }
}
