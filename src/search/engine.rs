use crate::graph::Graph;
use super::frontier::{Frontier, Strategy};
use super::route::reconstruct;

use std::time::{Duration, Instant};


/// One record of the search tree
/// Records are append-only and immutable after creation; parents are
/// reached through arena handles, so a record can be shared by any number
/// of frontier entries and descendants without duplication
#[derive(Debug)]
pub(super) struct SearchState {
    pub vertex: usize,
    pub parent: usize, // handle into the arena, usize::MAX for the root
    pub cost: f64, // accumulated path cost from the source, km
    pub heuristic: f64, // admissible lower bound on the remaining cost, km
}

impl SearchState {
    /// Lower bound on the cost of any complete path through this state
    fn bound(&self) -> f64 {
        self.cost + self.heuristic
    }
}


/// When to stop a query
/// Policies are mutually exclusive; the deadline is only polled when a
/// goal state is admitted, so a returned route is always fully formed
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TerminationPolicy {
    /// Run the frontier dry - the returned route is provably optimal
    Exhaustive,
    /// Stop at the first route found
    FirstSolution,
    /// Stop once the best route has been improved this many times
    Improvements(usize),
    /// Stop at the first route found after the deadline passes
    Deadline(Duration),
}


/// A complete route between two vertices
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub cost_km: f64,
    pub vertices: Vec<usize>, // dense indices, source first
}


/// Counters describing one query, for diagnostics
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchStats {
    pub expanded: usize, // states whose neighbors were generated
    pub generated: usize, // states created, root included
    pub dominated: usize, // states discarded at the admission test
    pub pruned: usize, // states cut by the branch-and-bound bound
    pub improvements: usize, // times the best route was replaced
    pub deadline_hit: bool,
}


/// Branch-and-bound shortest path search
/// https://en.wikipedia.org/wiki/Branch_and_bound
///
/// One expansion loop serves all three strategies; the heuristic is the
/// haversine distance to the destination, which never overestimates the
/// remaining cost as long as edge weights are at least the great-circle
/// distances between their endpoints. Uninformed strategies still carry
/// the heuristic for pruning - only the exploration order ignores it.
pub struct BranchAndBound {
    pub strategy: Strategy,
    pub termination: TerminationPolicy,
}

impl Default for BranchAndBound {
    fn default() -> Self {
        Self {
            strategy: Strategy::BestFirst,
            termination: TerminationPolicy::Exhaustive,
        }
    }
}

impl BranchAndBound {

    pub fn new(strategy: Strategy, termination: TerminationPolicy) -> Self {
        Self { strategy, termination }
    }

    /// Find a route between two dense vertex indices
    /// Returns None when the destination is unreachable from the source -
    /// a normal outcome, not an error; callers decide how to report it
    pub fn plan(&self, graph: &Graph, source: usize, destination: usize) -> Option<Route> {
        self.plan_with_stats(graph, source, destination).0
    }

    /// Same as [`plan`](Self::plan), also returning the query counters
    pub fn plan_with_stats(
        &self,
        graph: &Graph,
        source: usize,
        destination: usize,
    ) -> (Option<Route>, SearchStats) {

        let deadline = match self.termination {
            TerminationPolicy::Deadline(limit) => Some(Instant::now() + limit),
            _ => None,
        };

        let goal = graph.coord(destination);
        let heuristic = |vertex: usize| graph.coord(vertex).distance_to(&goal);

        // Arena of search states; frontier entries and parent links are
        // handles into it, so it only ever appends
        let mut arena: Vec<SearchState> = Vec::new();

        // Best accumulated cost seen per vertex, only ever lowered
        // States arriving at or above it are dominated and dropped
        let mut best_known = vec![f64::INFINITY; graph.vertex_count()];

        // Handle of the best goal state admitted so far
        let mut incumbent: Option<usize> = None;

        let mut frontier = Frontier::new(self.strategy);
        let mut stats = SearchStats::default();

        // Seed with the root state
        arena.push(SearchState {
            vertex: source,
            parent: usize::MAX,
            cost: 0.0,
            heuristic: heuristic(source),
        });
        frontier.push(0, arena[0].bound());
        stats.generated += 1;

        'search: while let Some(handle) = frontier.pop() {

            let (vertex, cost, bound) = {
                let state = &arena[handle];
                (state.vertex, state.cost, state.bound())
            };

            // Admission test - drop states dominated by a cheaper visit
            if cost >= best_known[vertex] {
                stats.dominated += 1;
                continue;
            }
            best_known[vertex] = cost;

            if vertex == destination {
                // best_known already guarantees strict improvement here
                if incumbent.is_none_or(|best| cost < arena[best].cost) {
                    incumbent = Some(handle);
                    stats.improvements += 1;
                }

                match self.termination {
                    TerminationPolicy::Exhaustive => {}
                    TerminationPolicy::FirstSolution => break 'search,
                    TerminationPolicy::Improvements(budget) => {
                        if stats.improvements >= budget {
                            break 'search;
                        }
                    }
                    TerminationPolicy::Deadline(_) => {
                        if deadline.is_some_and(|limit| Instant::now() >= limit) {
                            stats.deadline_hit = true;
                            break 'search;
                        }
                    }
                }

                // A goal state is never expanded
                continue;
            }

            // Branch-and-bound cut - no completion through this state can
            // beat the best route already found
            if let Some(best) = incumbent {
                if bound > arena[best].cost {
                    stats.pruned += 1;
                    continue;
                }
            }

            stats.expanded += 1;
            for (&neighbor, &weight) in graph.neighbors(vertex).iter() {
                let next = SearchState {
                    vertex: neighbor,
                    parent: handle,
                    cost: cost + weight,
                    heuristic: heuristic(neighbor),
                };
                let next_bound = next.bound();
                arena.push(next);
                frontier.push(arena.len() - 1, next_bound);
                stats.generated += 1;
            }
        }

        let route = incumbent.map(|best| Route {
            cost_km: arena[best].cost,
            vertices: reconstruct(&arena, best),
        });

        (route, stats)
    }
}
