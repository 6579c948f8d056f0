use spotter_core::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// The node is not part of the indexed tree.
    #[error("node {0} is not part of the index")]
    NodeNotIndexed(NodeId),
}

pub type Result<T> = std::result::Result<T, IndexError>;
