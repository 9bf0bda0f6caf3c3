//! Bitcoin-style block Merkle tree with double SHA-256 inclusion proofs.
//!
//! A [`MerkleTree`] is built once from an ordered list of hex-string
//! transaction ids, exactly as a Bitcoin block commits to its
//! transactions: each id is decoded and byte-order reversed into its
//! canonical 32-byte form, odd-sized levels duplicate their last
//! element, and every parent is `SHA-256(SHA-256(left || right))`.
//!
//! # Core types
//!
//! - [`MerkleTree`] — the tree itself (root, levels, proof generation,
//!   proof verification).
//! - [`MerkleProof`] — a compact inclusion proof (recompute the root
//!   from a single leaf, verify against a claimed root).
//! - [`ProofStep`] / [`Side`] — one sibling hash plus which side of the
//!   authenticated node it sits on.
//!
//! # Example
//!
//! ```
//! use block_merkle_tree::MerkleTree;
//!
//! let txids = [
//!     "5277cf3790381c2cc2b071038d8c35b3b601207c92f8aec15978a5f01ecf8319",
//!     "182c2ed191a35ea496ce84c42d8beee6f9d82b9f063de2e45a54692bb043696a",
//! ];
//! let tree = MerkleTree::from_txids(txids)?;
//! let proof = tree.path(txids[0])?;
//! assert!(tree.verify_proof(&proof, txids[0])?);
//! # Ok::<(), block_merkle_tree::MerkleTreeError>(())
//! ```

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
mod proof;
mod tree;
mod verify;


pub use error::{MerkleTreeError, Result};
pub use hash::{canonical_to_txid, double_sha256, parent_hash, txid_to_canonical};
pub use proof::{MerkleProof, ProofStep, Side};
pub use tree::MerkleTree;
