//! Static transition tables.

use super::state::Phase;
use std::collections::{HashSet, VecDeque};

/// Read-only view over a game's adjacency list.
///
/// Membership is all that matters; the order successors are listed in is
/// irrelevant to transition checks.
#[derive(Clone, Copy, Debug)]
pub struct TransitionTable<P: 'static> {
    edges: &'static [(P, &'static [P])],
}

impl<P: Phase> TransitionTable<P> {
    pub const fn new(edges: &'static [(P, &'static [P])]) -> Self {
        Self { edges }
    }

    /// Phases declared as keys, in declaration order.
    pub fn phases(&self) -> impl Iterator<Item = P> + '_ {
        self.edges.iter().map(|(phase, _)| *phase)
    }

    /// Raw adjacency entries.
    pub fn edges(&self) -> &'static [(P, &'static [P])] {
        self.edges
    }

    /// Successors of `phase`, empty if it is terminal or undeclared.
    pub fn successors(&self, phase: P) -> &'static [P] {
        self.edges
            .iter()
            .find(|(key, _)| *key == phase)
            .map(|(_, next)| *next)
            .unwrap_or(&[])
    }

    /// Whether `to` is a direct successor of `from`.
    pub fn allows(&self, from: P, to: P) -> bool {
        self.successors(from).contains(&to)
    }

    pub fn contains(&self, phase: P) -> bool {
        self.edges.iter().any(|(key, _)| *key == phase)
    }

    pub fn is_terminal(&self, phase: P) -> bool {
        self.successors(phase).is_empty()
    }

    /// Phases with an edge into `phase`.
    pub fn predecessors(&self, phase: P) -> Vec<P> {
        self.edges
            .iter()
            .filter(|(_, next)| next.contains(&phase))
            .map(|(key, _)| *key)
            .collect()
    }

    /// Every phase reachable from `start` (including `start`), breadth first.
    pub fn reachable_from(&self, start: P) -> Vec<P> {
        let mut seen = HashSet::from([start]);
        let mut order = vec![start];
        let mut queue = VecDeque::from([start]);

        while let Some(phase) = queue.pop_front() {
            for next in self.successors(phase) {
                if seen.insert(*next) {
                    order.push(*next);
                    queue.push_back(*next);
                }
            }
        }

        order
    }

    /// Whether some terminal phase is reachable from `start`.
    pub fn reaches_terminal(&self, start: P) -> bool {
        self.reachable_from(start)
            .into_iter()
            .any(|phase| self.is_terminal(phase))
    }
}
