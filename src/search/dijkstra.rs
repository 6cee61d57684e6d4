use crate::graph::Graph;
use super::Route;

use std::cmp::Ordering;
use std::collections::BinaryHeap;


/// Queue entry - cost from the source plus the vertex it reaches
#[derive(Debug)]
struct QueueEntry {
    vertex: usize,
    cost: f64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}
impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl Eq for QueueEntry {}


/// Shortest route using Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Uninformed single-pair shortest path over the same graph the
/// branch-and-bound engine searches; handy as an independent reference
/// when the heuristic is in doubt. Returns None when the destination is
/// unreachable.
pub fn dijkstra(graph: &Graph, source: usize, destination: usize) -> Option<Route> {

    let vertex_count = graph.vertex_count();
    let mut distances = vec![f64::INFINITY; vertex_count];
    let mut parents = vec![usize::MAX; vertex_count];

    let mut queue = BinaryHeap::new();
    distances[source] = 0.0;
    queue.push(QueueEntry { vertex: source, cost: 0.0 });

    while let Some(QueueEntry { vertex, cost }) = queue.pop() {

        // A cheaper path to this vertex was already settled
        if cost > distances[vertex] {
            continue;
        }

        // The destination is settled, every other entry only gets worse
        if vertex == destination {
            break;
        }

        for (&neighbor, &weight) in graph.neighbors(vertex).iter() {
            let next = cost + weight;
            if next < distances[neighbor] {
                distances[neighbor] = next;
                parents[neighbor] = vertex;
                queue.push(QueueEntry { vertex: neighbor, cost: next });
            }
        }
    }

    if distances[destination].is_infinite() {
        return None;
    }

    // Trace back from the destination, then put the route in source order
    let mut vertices = Vec::new();
    let mut current = destination;
    while current != usize::MAX {
        vertices.push(current);
        current = parents[current];
    }
    vertices.reverse();

    Some(Route { cost_km: distances[destination], vertices })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn weighted_graph(edges: &[(i64, i64, f64)], vertex_ids: &[i64]) -> Graph {
        let mut builder = GraphBuilder::new(false);
        for &id in vertex_ids {
            builder.add_vertex(id, 0.0, 0.0);
        }
        for &(u, v, weight) in edges {
            builder.add_edge_weighted(u, v, weight).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_dijkstra_finds_cheapest_route() {
        // Diamond: 1 -> 2 -> 4 costs 6, 1 -> 3 -> 4 costs 4
        let graph = weighted_graph(
            &[(1, 2, 1.0), (2, 4, 5.0), (1, 3, 3.0), (3, 4, 1.0)],
            &[1, 2, 3, 4],
        );

        let route = dijkstra(&graph, 0, 3).unwrap();
        assert_eq!(route.cost_km, 4.0);
        assert_eq!(route.vertices, vec![0, 2, 3]);
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let graph = weighted_graph(&[(1, 2, 1.0)], &[1, 2, 3]);
        assert_eq!(dijkstra(&graph, 0, 2), None);
    }

    #[test]
    fn test_dijkstra_source_is_destination() {
        let graph = weighted_graph(&[(1, 2, 1.0)], &[1, 2]);
        let route = dijkstra(&graph, 1, 1).unwrap();
        assert_eq!(route.cost_km, 0.0);
        assert_eq!(route.vertices, vec![1]);
    }
}
