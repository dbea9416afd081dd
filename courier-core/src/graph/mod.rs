//! Weighted, undirected road graph.
//!
//! Intersections live in dense index slots and roads are stored as per-node
//! adjacency lists of `(neighbour, minutes)`. Both directions of a road are
//! always written and removed together, so `weight(a, b) == weight(b, a)`
//! holds in every reachable state.
//!
//! Read queries take string identifiers and never fail: an unknown node
//! simply has no neighbours and no edges. Pathfinding code can use the
//! [`NodeIndex`] accessors to avoid repeated hashing.

mod error;

pub use error::GraphError;

use std::collections::{HashMap, VecDeque};

use geo::Coord;

/// Dense handle for a node slot inside a [`RoadGraph`].
///
/// Indices stay valid until the node is removed. A removed node's slot is
/// left vacant and never reused, so a stale index resolves to nothing rather
/// than to a different intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Return the raw slot position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct NodeSlot {
    id: String,
    coord: Option<Coord<f64>>,
    adjacency: Vec<(NodeIndex, f64)>,
}

/// Intersections joined by roads weighted with travel time in minutes.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use courier_core::RoadGraph;
///
/// # fn main() -> Result<(), courier_core::GraphError> {
/// let mut graph = RoadGraph::new();
/// graph.add_node("A", Some(Coord { x: 0.0, y: 0.0 }))?;
/// graph.add_edge("A", "B", 5.0)?;
///
/// assert_eq!(graph.edge_weight("B", "A"), Some(5.0));
/// assert_eq!(graph.neighbors("A"), vec!["B"]);
/// assert!(graph.coord("B").is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadGraph {
    slots: Vec<Option<NodeSlot>>,
    index: HashMap<String, NodeIndex>,
    edge_count: usize,
}

/// Snapshot of a graph's size and connectivity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GraphSummary {
    /// Number of intersections.
    pub nodes: usize,
    /// Number of undirected roads.
    pub edges: usize,
    /// Whether every intersection is reachable from every other.
    pub connected: bool,
    /// Intersection identifiers in insertion order.
    pub node_ids: Vec<String>,
}

impl RoadGraph {
    /// Construct an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node or overwrite the coordinate of an existing one.
    ///
    /// The node keeps its roads and its position in node order when it
    /// already exists.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyNodeId`] when `id` is empty.
    pub fn add_node(
        &mut self,
        id: &str,
        coord: Option<Coord<f64>>,
    ) -> Result<NodeIndex, GraphError> {
        let node = self.ensure_node(id)?;
        if let Some(slot) = self.slot_mut(node) {
            slot.coord = coord;
        }
        Ok(node)
    }

    /// Insert or update the road between `a` and `b`.
    ///
    /// Missing endpoints are created without coordinates. Updating an
    /// existing road changes its weight in place and keeps neighbour order.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyNodeId`] for an empty identifier and
    /// [`GraphError::InvalidWeight`] for a negative or non-finite weight.
    /// The graph is left untouched on error.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<(), GraphError> {
        if a.is_empty() || b.is_empty() {
            return Err(GraphError::EmptyNodeId);
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: a.to_owned(),
                to: b.to_owned(),
                weight,
            });
        }
        let from = self.ensure_node(a)?;
        let to = self.ensure_node(b)?;
        let inserted = self.link(from, to, weight);
        if from != to {
            self.link(to, from, weight);
        }
        if inserted {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Remove the road between `a` and `b` in both directions.
    ///
    /// Returns `true` when a road was removed.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> bool {
        let (Some(from), Some(to)) = (self.index_of(a), self.index_of(b)) else {
            return false;
        };
        let removed = self.unlink(from, to);
        if from != to {
            self.unlink(to, from);
        }
        if removed {
            self.edge_count = self.edge_count.saturating_sub(1);
        }
        removed
    }

    /// Remove a node together with every road touching it.
    ///
    /// Returns `true` when the node existed.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(node) = self.index.remove(id) else {
            return false;
        };
        let Some(slot) = self.slots.get_mut(node.0).and_then(Option::take) else {
            return false;
        };
        for &(neighbour, _) in &slot.adjacency {
            if neighbour != node {
                self.unlink(neighbour, node);
            }
        }
        self.edge_count = self.edge_count.saturating_sub(slot.adjacency.len());
        true
    }

    /// Return adjacent node identifiers in road insertion order.
    ///
    /// Unknown nodes have no neighbours.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.index_of(id).map_or_else(Vec::new, |node| {
            self.adjacent(node)
                .filter_map(|(neighbour, _)| self.node_id(neighbour))
                .collect()
        })
    }

    /// Return the travel time between `a` and `b`, or `None` when no road
    /// joins them.
    #[must_use]
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let from = self.index_of(a)?;
        let to = self.index_of(b)?;
        self.weight_between(from, to)
    }

    /// Report whether a road joins `a` and `b`.
    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Report whether `id` names a node.
    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Return the coordinate of `id`, if the node exists and has one.
    #[must_use]
    pub fn coord(&self, id: &str) -> Option<Coord<f64>> {
        self.index_of(id).and_then(|node| self.coord_at(node))
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Number of undirected roads; each road counts once.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Report whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Report whether every node is reachable from the first one.
    ///
    /// An empty graph is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.node_indices().next() else {
            return true;
        };
        let mut visited = vec![false; self.node_bound()];
        let mut queue = VecDeque::from([start]);
        let mut reached = 0_usize;
        if let Some(seen) = visited.get_mut(start.0) {
            *seen = true;
            reached += 1;
        }
        while let Some(current) = queue.pop_front() {
            for (neighbour, _) in self.adjacent(current) {
                if let Some(seen) = visited.get_mut(neighbour.0)
                    && !*seen
                {
                    *seen = true;
                    reached += 1;
                    queue.push_back(neighbour);
                }
            }
        }
        reached == self.node_count()
    }

    /// Node identifiers in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().flatten().map(|slot| slot.id.as_str())
    }

    /// Each undirected road once, as `(a, b, minutes)`.
    ///
    /// Roads are grouped by whichever endpoint comes first in node order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.node_indices().flat_map(move |node| {
            self.adjacent(node)
                .filter(move |(neighbour, _)| neighbour.0 >= node.0)
                .filter_map(move |(neighbour, weight)| {
                    Some((self.node_id(node)?, self.node_id(neighbour)?, weight))
                })
        })
    }

    /// Summarise size and connectivity.
    #[must_use]
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            nodes: self.node_count(),
            edges: self.edge_count(),
            connected: self.is_connected(),
            node_ids: self.node_ids().map(str::to_owned).collect(),
        }
    }

    /// Resolve an identifier to its slot.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Resolve a slot back to its identifier.
    #[must_use]
    pub fn node_id(&self, node: NodeIndex) -> Option<&str> {
        self.slot(node).map(|slot| slot.id.as_str())
    }

    /// Return the coordinate stored in a slot.
    #[must_use]
    pub fn coord_at(&self, node: NodeIndex) -> Option<Coord<f64>> {
        self.slot(node).and_then(|slot| slot.coord)
    }

    /// Iterate `(neighbour, minutes)` pairs of a slot in road insertion order.
    pub fn adjacent(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.slot(node)
            .into_iter()
            .flat_map(|slot| slot.adjacency.iter().copied())
    }

    /// Return the travel time between two slots.
    #[must_use]
    pub fn weight_between(&self, from: NodeIndex, to: NodeIndex) -> Option<f64> {
        self.adjacent(from)
            .find(|(neighbour, _)| *neighbour == to)
            .map(|(_, weight)| weight)
    }

    /// Occupied slots in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(position, _)| NodeIndex(position))
    }

    /// Upper bound (exclusive) on slot positions, for sizing per-node tables.
    #[must_use]
    pub fn node_bound(&self) -> usize {
        self.slots.len()
    }

    fn ensure_node(&mut self, id: &str) -> Result<NodeIndex, GraphError> {
        if id.is_empty() {
            return Err(GraphError::EmptyNodeId);
        }
        if let Some(existing) = self.index_of(id) {
            return Ok(existing);
        }
        let node = NodeIndex(self.slots.len());
        self.slots.push(Some(NodeSlot {
            id: id.to_owned(),
            coord: None,
            adjacency: Vec::new(),
        }));
        self.index.insert(id.to_owned(), node);
        Ok(node)
    }

    fn slot(&self, node: NodeIndex) -> Option<&NodeSlot> {
        self.slots.get(node.0).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, node: NodeIndex) -> Option<&mut NodeSlot> {
        self.slots.get_mut(node.0).and_then(Option::as_mut)
    }

    /// Set `from -> to`; returns `true` when the entry is new.
    fn link(&mut self, from: NodeIndex, to: NodeIndex, weight: f64) -> bool {
        let Some(slot) = self.slot_mut(from) else {
            return false;
        };
        if let Some(entry) = slot.adjacency.iter_mut().find(|(n, _)| *n == to) {
            entry.1 = weight;
            return false;
        }
        slot.adjacency.push((to, weight));
        true
    }

    /// Drop `from -> to`; returns `true` when an entry was removed.
    fn unlink(&mut self, from: NodeIndex, to: NodeIndex) -> bool {
        let Some(slot) = self.slot_mut(from) else {
            return false;
        };
        let before = slot.adjacency.len();
        slot.adjacency.retain(|(n, _)| *n != to);
        slot.adjacency.len() != before
    }
}
