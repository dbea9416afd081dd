//! Depth-first searches.
//!
//! [`PathFinder::depth_first_path`] keeps an explicit stack of frames, one
//! per node on the current path, each remembering how far through its
//! neighbour list it has got. Only nodes on the current path count as
//! visited, so a dead end in one branch never hides a node from a sibling.
//!
//! A neighbour is only entered when the target is still reachable from it
//! without crossing the current path. Any branch that fails that check
//! would have been fully explored and abandoned, so skipping it keeps the
//! same paths in the same order while keeping each step polynomial.

use std::collections::VecDeque;

use courier_core::{NodeIndex, RoadGraph};

use super::PathFinder;

/// One level of the depth-first walk.
struct Frame {
    node: NodeIndex,
    cursor: usize,
}

/// Walks simple paths from a source in depth order.
struct SimplePaths<'f, 'g> {
    finder: &'f PathFinder<'g>,
    frames: Vec<Frame>,
    on_path: Vec<bool>,
}

impl<'f, 'g> SimplePaths<'f, 'g> {
    fn new(finder: &'f PathFinder<'g>, source: NodeIndex) -> Self {
        let mut on_path = vec![false; finder.graph.node_bound()];
        if let Some(flag) = on_path.get_mut(source.index()) {
            *flag = true;
        }
        Self {
            finder,
            frames: vec![Frame {
                node: source,
                cursor: 0,
            }],
            on_path,
        }
    }

    fn current_path(&self) -> Vec<NodeIndex> {
        self.frames.iter().map(|frame| frame.node).collect()
    }

    /// Advance to the next simple path ending at `target`.
    ///
    /// The first call reports the trivial path when the source is the
    /// target; later calls resume by backtracking from the last match.
    fn next_to(&mut self, target: NodeIndex, resume: bool) -> Option<Vec<NodeIndex>> {
        if resume {
            self.backtrack();
        } else if self.frames.last().is_some_and(|frame| frame.node == target) {
            return Some(self.current_path());
        }
        while let Some(frame) = self.frames.last_mut() {
            let next = self
                .finder
                .graph
                .adjacent(frame.node)
                .skip(frame.cursor)
                .enumerate()
                .find(|&(_, (neighbour, _))| {
                    !self.on_path.get(neighbour.index()).copied().unwrap_or(true)
                        && reaches(self.finder.graph, &self.on_path, neighbour, target)
                });
            let Some((offset, (neighbour, _))) = next else {
                self.backtrack();
                continue;
            };
            frame.cursor = frame.cursor.saturating_add(offset).saturating_add(1);
            if let Some(flag) = self.on_path.get_mut(neighbour.index()) {
                *flag = true;
            }
            self.frames.push(Frame {
                node: neighbour,
                cursor: 0,
            });
            if neighbour == target {
                return Some(self.current_path());
            }
        }
        None
    }

    fn backtrack(&mut self) {
        if let Some(frame) = self.frames.pop()
            && let Some(flag) = self.on_path.get_mut(frame.node.index())
        {
            *flag = false;
        }
    }
}

impl PathFinder<'_> {
    /// First path from `start` to `end` in depth order.
    ///
    /// Neighbours are tried in road insertion order and each branch treats
    /// only its own ancestors as visited. The result is a simple path but not
    /// necessarily short in hops or minutes.
    #[must_use]
    pub fn depth_first_path(&self, start: &str, end: &str) -> Option<Vec<String>> {
        let (source, target) = self.endpoints(start, end)?;
        let path = SimplePaths::new(self, source).next_to(target, false)?;
        Some(self.to_ids(&path))
    }

    /// Depth-first path using one visited set shared by all branches.
    ///
    /// Nodes are marked when popped and neighbours are pushed in insertion
    /// order, so the last neighbour is explored first. This can return a
    /// different path from [`Self::depth_first_path`] on the same graph.
    #[must_use]
    pub fn depth_first_path_iterative(&self, start: &str, end: &str) -> Option<Vec<String>> {
        let (source, target) = self.endpoints(start, end)?;
        let mut visited = vec![false; self.graph.node_bound()];
        // Each entry is a node plus the arena slot of the entry it came from.
        let mut arena: Vec<(NodeIndex, Option<usize>)> = vec![(source, None)];
        let mut stack = vec![0_usize];
        while let Some(entry) = stack.pop() {
            let Some(&(node, _)) = arena.get(entry) else {
                continue;
            };
            let Some(flag) = visited.get_mut(node.index()) else {
                continue;
            };
            if *flag {
                continue;
            }
            *flag = true;
            if node == target {
                return Some(self.to_ids(&unwind(&arena, entry)));
            }
            for (neighbour, _) in self.graph.adjacent(node) {
                if visited.get(neighbour.index()).copied().unwrap_or(true) {
                    continue;
                }
                stack.push(arena.len());
                arena.push((neighbour, Some(entry)));
            }
        }
        None
    }

    /// Every simple path from `start` to `end` in depth order.
    ///
    /// The number of simple paths grows exponentially with map size; use
    /// this on small maps only. `start == end` yields the single trivial
    /// path.
    #[must_use]
    pub fn all_simple_paths(&self, start: &str, end: &str) -> Vec<Vec<String>> {
        let Some((source, target)) = self.endpoints(start, end) else {
            return Vec::new();
        };
        if source == target {
            return vec![self.to_ids(&[source])];
        }
        let mut walker = SimplePaths::new(self, source);
        let mut paths = Vec::new();
        let mut resume = false;
        while let Some(path) = walker.next_to(target, resume) {
            paths.push(self.to_ids(&path));
            resume = true;
        }
        paths
    }
}

fn unwind(arena: &[(NodeIndex, Option<usize>)], entry: usize) -> Vec<NodeIndex> {
    let mut path = Vec::new();
    let mut cursor = Some(entry);
    while let Some(&(node, parent)) = cursor.and_then(|slot| arena.get(slot)) {
        path.push(node);
        cursor = parent;
    }
    path.reverse();
    path
}

/// Whether `target` can be reached from `from` without stepping on a
/// node of the current path.
fn reaches(graph: &RoadGraph, on_path: &[bool], from: NodeIndex, target: NodeIndex) -> bool {
    if from == target {
        return true;
    }
    let mut blocked = on_path.to_vec();
    if let Some(flag) = blocked.get_mut(from.index()) {
        *flag = true;
    }
    let mut queue = VecDeque::from([from]);
    while let Some(current) = queue.pop_front() {
        for (neighbour, _) in graph.adjacent(current) {
            if neighbour == target {
                return true;
            }
            let Some(flag) = blocked.get_mut(neighbour.index()) else {
                continue;
            };
            if !*flag {
                *flag = true;
                queue.push_back(neighbour);
            }
        }
    }
    false
}
