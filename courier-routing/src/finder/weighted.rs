//! Travel-time optimal searches: Dijkstra and A*.
//!
//! Both share one best-first loop over a binary heap. Entries are ordered by
//! priority and then by insertion sequence so equal priorities pop in the
//! order they were pushed. Stale entries are skipped on pop instead of being
//! removed from the heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use courier_core::NodeIndex;
use geo::{Distance, Euclidean, Point};

use super::{PathFinder, trace};

#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: f64,
    sequence: u64,
    cost: f64,
    node: NodeIndex,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the max-heap pops the lowest priority first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PathFinder<'_> {
    /// Minimum travel-time path from `start` to `end` (Dijkstra).
    #[must_use]
    pub fn shortest_path_weighted(&self, start: &str, end: &str) -> Option<Vec<String>> {
        let (source, target) = self.endpoints(start, end)?;
        let path = self.best_first(source, target, |_| 0.0)?;
        Some(self.to_ids(&path))
    }

    /// Minimum travel-time path guided by straight-line distance to `end`.
    ///
    /// The heuristic is `heuristic_scale * euclidean(node, end)` and falls
    /// back to zero when either intersection has no coordinate. The result
    /// matches [`Self::shortest_path_weighted`] in travel time whenever the
    /// heuristic never overestimates the remaining time.
    #[must_use]
    pub fn a_star_search(&self, start: &str, end: &str) -> Option<Vec<String>> {
        let (source, target) = self.endpoints(start, end)?;
        let goal = self.graph.coord_at(target).map(Point::from);
        let scale = self.config.heuristic_scale;
        let path = self.best_first(source, target, |node| {
            heuristic(goal, self.graph.coord_at(node).map(Point::from), scale)
        })?;
        Some(self.to_ids(&path))
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "path costs accumulate road weights"
    )]
    fn best_first(
        &self,
        source: NodeIndex,
        target: NodeIndex,
        estimate: impl Fn(NodeIndex) -> f64,
    ) -> Option<Vec<NodeIndex>> {
        let bound = self.graph.node_bound();
        let mut best = vec![f64::INFINITY; bound];
        let mut parents: Vec<Option<NodeIndex>> = vec![None; bound];
        let mut heap = BinaryHeap::new();
        let mut sequence = 0_u64;

        *best.get_mut(source.index())? = 0.0;
        heap.push(Entry {
            priority: estimate(source),
            sequence,
            cost: 0.0,
            node: source,
        });

        while let Some(Entry { cost, node, .. }) = heap.pop() {
            if node == target {
                return Some(trace(&parents, target));
            }
            if best.get(node.index()).is_some_and(|&known| cost > known) {
                continue;
            }
            for (neighbour, weight) in self.graph.adjacent(node) {
                let candidate = cost + weight;
                let Some(known) = best.get_mut(neighbour.index()) else {
                    continue;
                };
                if candidate >= *known {
                    continue;
                }
                *known = candidate;
                if let Some(parent) = parents.get_mut(neighbour.index()) {
                    *parent = Some(node);
                }
                sequence = sequence.wrapping_add(1);
                heap.push(Entry {
                    priority: candidate + estimate(neighbour),
                    sequence,
                    cost: candidate,
                    node: neighbour,
                });
            }
        }
        None
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the heuristic scales a planar distance"
)]
fn heuristic(goal: Option<Point<f64>>, here: Option<Point<f64>>, scale: f64) -> f64 {
    match (goal, here) {
        (Some(target), Some(point)) => scale * Euclidean.distance(point, target),
        _ => 0.0,
    }
}
