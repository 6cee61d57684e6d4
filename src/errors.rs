
#[derive(Debug, PartialEq)]
pub enum GraphError {
    UnknownVertex(i64), // Edge or query endpoint references an id outside the vertex set
    KdTreeError(String),
}


impl From<kdtree::ErrorKind> for GraphError {
    fn from(error: kdtree::ErrorKind) -> Self {
        GraphError::KdTreeError(error.to_string())
    }
}
