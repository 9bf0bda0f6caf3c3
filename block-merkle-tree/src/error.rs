use thiserror::Error;

/// Alias for `core::result::Result<T, MerkleTreeError>`.
pub type Result<T> = core::result::Result<T, MerkleTreeError>;

/// Errors from Merkle tree construction, proof generation, and proof
/// deserialization.
///
/// A well-formed but incorrect proof is NOT an error; verification
/// returns `Ok(false)` for it.
#[derive(Debug, Error)]
pub enum MerkleTreeError {
    /// Empty leaf list, or a transaction id that does not decode to a
    /// 32-byte hash.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The transaction id is not a leaf of this tree.
    #[error("transaction {0} is not part of the tree")]
    NotFound(String),
    /// Structurally malformed proof material (bad side tag, bad hex,
    /// decode failure).
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
