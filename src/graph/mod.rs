use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::geo::Coord;

use kdtree::KdTree;
use kdtree::distance::squared_euclidean;


/// Sparse weighted graph over geographic vertices
///
/// Vertices live under dense `0..N` indices; external ids from the data
/// source are remapped on insert and can be recovered per index.
/// Adjacency maps each vertex to its neighbors and outgoing edge weights.
pub struct Graph {
    coords: Vec<Coord>,
    adjacency: Vec<FxIndexMap<usize, f64>>,
    ids: Vec<i64>, // dense index -> external id
    index_of: FxIndexMap<i64, usize>, // external id -> dense index
    tree: KdTree<f64, usize, [f64; 2]>, // vertex coordinates for nearest lookups
}

impl Graph {

    /// Build a graph from `(id, lon, lat)` vertex triples and `(u, v)` edge pairs
    /// Edge weights are the haversine distances between the endpoints
    pub fn build(
        vertices: &[(i64, f64, f64)],
        edges: &[(i64, i64)],
        undirected: bool,
    ) -> Result<Self, GraphError> {
        let mut builder = GraphBuilder::new(undirected);
        for &(id, lon, lat) in vertices {
            builder.add_vertex(id, lon, lat);
        }
        for &(u, v) in edges {
            builder.add_edge(u, v)?;
        }
        builder.build()
    }

    pub fn vertex_count(&self) -> usize {
        self.coords.len()
    }

    pub fn coord(&self, vertex: usize) -> Coord {
        self.coords[vertex]
    }

    /// Neighbors of a vertex with their outgoing edge weights
    pub fn neighbors(&self, vertex: usize) -> &FxIndexMap<usize, f64> {
        &self.adjacency[vertex]
    }

    /// External id of a dense vertex index
    pub fn external_id(&self, vertex: usize) -> i64 {
        self.ids[vertex]
    }

    /// Dense index of an external id
    pub fn index_of(&self, id: i64) -> Result<usize, GraphError> {
        self.index_of
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownVertex(id))
    }

    /// Snap a coordinate to the nearest graph vertex
    /// Comparison is squared euclidean in degree space, fine for snapping
    /// a clicked point to the road network it came from
    pub fn nearest_vertex(&self, coord: &Coord) -> Result<Option<usize>, GraphError> {
        let found = self.tree.nearest(&[coord.lon, coord.lat], 1, &squared_euclidean)?;
        Ok(found.first().map(|&(_, &index)| index))
    }
}


/// Incremental construction of a [`Graph`]
///
/// Vertices must be registered before edges reference them; an edge naming
/// an unregistered id fails fast with [`GraphError::UnknownVertex`] so the
/// search never sees a dangling reference.
pub struct GraphBuilder {
    coords: Vec<Coord>,
    adjacency: Vec<FxIndexMap<usize, f64>>,
    ids: Vec<i64>,
    index_of: FxIndexMap<i64, usize>,
    undirected: bool,
}

impl GraphBuilder {

    pub fn new(undirected: bool) -> Self {
        Self {
            coords: Vec::new(),
            adjacency: Vec::new(),
            ids: Vec::new(),
            index_of: FxIndexMap::default(),
            undirected,
        }
    }

    /// Register a vertex and return its dense index
    /// Re-registering an id remaps the id to the newer vertex
    pub fn add_vertex(&mut self, id: i64, lon: f64, lat: f64) -> usize {
        let index = self.coords.len();
        self.coords.push(Coord::new(lon, lat));
        self.adjacency.push(FxIndexMap::default());
        self.ids.push(id);
        self.index_of.insert(id, index);
        index
    }

    /// Insert an edge weighted by the haversine distance between its endpoints
    /// For an undirected graph both arcs are inserted with the same weight
    pub fn add_edge(&mut self, u: i64, v: i64) -> Result<(), GraphError> {
        let u_index = self.lookup(u)?;
        let v_index = self.lookup(v)?;
        let weight = self.coords[u_index].distance_to(&self.coords[v_index]);
        self.insert_arc(u_index, v_index, weight);
        Ok(())
    }

    /// Insert an edge with an explicit non-negative weight
    pub fn add_edge_weighted(&mut self, u: i64, v: i64, weight: f64) -> Result<(), GraphError> {
        let u_index = self.lookup(u)?;
        let v_index = self.lookup(v)?;
        self.insert_arc(u_index, v_index, weight);
        Ok(())
    }

    pub fn build(self) -> Result<Graph, GraphError> {
        let mut tree = KdTree::new(2);
        for (index, coord) in self.coords.iter().enumerate() {
            tree.add([coord.lon, coord.lat], index)?;
        }

        Ok(Graph {
            coords: self.coords,
            adjacency: self.adjacency,
            ids: self.ids,
            index_of: self.index_of,
            tree,
        })
    }

    fn lookup(&self, id: i64) -> Result<usize, GraphError> {
        self.index_of
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownVertex(id))
    }

    // Duplicate insertion overwrites - last write wins
    fn insert_arc(&mut self, u: usize, v: usize, weight: f64) {
        self.adjacency[u].insert(v, weight);
        if self.undirected {
            self.adjacency[v].insert(u, weight);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_maps_ids_to_dense_indices() {
        let graph = Graph::build(
            &[(100, 0.0, 0.0), (250, 1.0, 0.0), (431, 2.0, 0.0)],
            &[(100, 250), (250, 431)],
            false,
        )
        .unwrap();

        assert_eq!(graph.vertex_count(), 3);
        for (index, id) in [(0, 100), (1, 250), (2, 431)] {
            assert_eq!(graph.index_of(id).unwrap(), index);
            assert_eq!(graph.external_id(index), id);
        }
    }

    #[test]
    fn test_edge_weight_is_haversine_distance() {
        let graph = Graph::build(
            &[(1, 0.0, 0.0), (2, 1.0, 0.0)],
            &[(1, 2)],
            false,
        )
        .unwrap();

        let expected = graph.coord(0).distance_to(&graph.coord(1));
        assert_eq!(graph.neighbors(0).get(&1), Some(&expected));
        // directed build, no reverse arc
        assert!(graph.neighbors(1).is_empty());
    }

    #[test]
    fn test_undirected_inserts_both_arcs() {
        let graph = Graph::build(
            &[(1, 0.0, 0.0), (2, 1.0, 0.0)],
            &[(1, 2)],
            true,
        )
        .unwrap();

        let forward = graph.neighbors(0).get(&1).copied();
        let backward = graph.neighbors(1).get(&0).copied();
        assert!(forward.is_some());
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_duplicate_edge_overwrites() {
        let mut builder = GraphBuilder::new(false);
        builder.add_vertex(1, 0.0, 0.0);
        builder.add_vertex(2, 1.0, 0.0);
        builder.add_edge_weighted(1, 2, 5.0).unwrap();
        builder.add_edge_weighted(1, 2, 3.0).unwrap();

        let graph = builder.build().unwrap();
        assert_eq!(graph.neighbors(0).len(), 1);
        assert_eq!(graph.neighbors(0).get(&1), Some(&3.0));
    }

    #[test]
    fn test_unknown_vertex_fails_fast() {
        let mut builder = GraphBuilder::new(false);
        builder.add_vertex(1, 0.0, 0.0);

        let result = builder.add_edge(1, 99);
        assert_eq!(result, Err(GraphError::UnknownVertex(99)));
    }

    #[test]
    fn test_index_of_unknown_id() {
        let graph = Graph::build(&[(1, 0.0, 0.0)], &[], false).unwrap();
        assert_eq!(graph.index_of(7), Err(GraphError::UnknownVertex(7)));
    }

    #[test]
    fn test_nearest_vertex_snaps_to_closest() {
        let graph = Graph::build(
            &[(1, 0.0, 0.0), (2, 1.0, 1.0), (3, 5.0, 5.0)],
            &[],
            false,
        )
        .unwrap();

        let nearest = graph.nearest_vertex(&Coord::new(1.2, 0.9)).unwrap();
        assert_eq!(nearest, Some(1));
    }
}
