//! Breadth-first searches.

use std::collections::VecDeque;

use courier_core::NodeIndex;

use super::{PathFinder, trace};

impl PathFinder<'_> {
    /// Path with the fewest roads from `start` to `end`, ignoring travel time.
    ///
    /// Neighbours are explored in road insertion order, so among equally
    /// short paths the one discovered first wins.
    #[must_use]
    pub fn shortest_path_by_hops(&self, start: &str, end: &str) -> Option<Vec<String>> {
        let (source, target) = self.endpoints(start, end)?;
        let parents = self.explore(source, Some(target));
        if source != target && parents.get(target.index()).copied().flatten().is_none() {
            return None;
        }
        Some(self.to_ids(&trace(&parents, target)))
    }

    /// Fewest-road path from `start` to every reachable intersection.
    ///
    /// Entries appear in discovery order and begin with `start` itself. An
    /// unknown `start` yields an empty list.
    #[must_use]
    pub fn breadth_first_tree(&self, start: &str) -> Vec<(String, Vec<String>)> {
        let Some(source) = self.graph.index_of(start) else {
            return Vec::new();
        };
        let mut order = Vec::new();
        let parents = self.explore_recording(source, None, &mut order);
        order
            .into_iter()
            .filter_map(|node| {
                let id = self.graph.node_id(node)?.to_owned();
                Some((id, self.to_ids(&trace(&parents, node))))
            })
            .collect()
    }

    fn explore(&self, source: NodeIndex, target: Option<NodeIndex>) -> Vec<Option<NodeIndex>> {
        self.explore_recording(source, target, &mut Vec::new())
    }

    /// Breadth-first sweep from `source`, marking nodes when enqueued.
    ///
    /// Stops once `target` is dequeued. `order` receives nodes in discovery
    /// order.
    fn explore_recording(
        &self,
        source: NodeIndex,
        target: Option<NodeIndex>,
        order: &mut Vec<NodeIndex>,
    ) -> Vec<Option<NodeIndex>> {
        let bound = self.graph.node_bound();
        let mut parents = vec![None; bound];
        let mut seen = vec![false; bound];
        if let Some(flag) = seen.get_mut(source.index()) {
            *flag = true;
        }
        order.push(source);
        let mut queue = VecDeque::from([source]);
        while let Some(current) = queue.pop_front() {
            if Some(current) == target {
                break;
            }
            for (neighbour, _) in self.graph.adjacent(current) {
                let Some(flag) = seen.get_mut(neighbour.index()) else {
                    continue;
                };
                if *flag {
                    continue;
                }
                *flag = true;
                if let Some(parent) = parents.get_mut(neighbour.index()) {
                    *parent = Some(current);
                }
                order.push(neighbour);
                queue.push_back(neighbour);
            }
        }
        parents
    }
}
