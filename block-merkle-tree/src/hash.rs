//! Double SHA-256 hashing and transaction-id byte-order conversion.
//!
//! Transaction ids are displayed big-endian but hashed little-endian
//! (the Bitcoin txid convention), so every id crosses through
//! [`txid_to_canonical`] exactly once at tree construction time. The
//! reversal is easy to get silently wrong, which is why it lives here
//! as a standalone, independently tested function rather than inline
//! string manipulation.

use sha2::{Digest, Sha256};

use crate::{MerkleTreeError, Result};

/// Compute `SHA-256(SHA-256(data))`.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Merge two sibling hashes into their parent:
/// `double_sha256(left || right)`.
///
/// The input is the raw 64-byte concatenation, left then right, with
/// no separator or length prefix.
pub fn parent_hash(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut input = [0u8; 64];
    input[..32].copy_from_slice(left);
    input[32..].copy_from_slice(right);
    double_sha256(&input)
}

/// Decode a big-endian display-form transaction id into its canonical
/// little-endian 32-byte form (reverse byte order of the decoded hex).
///
/// Hex case is accepted either way. Returns
/// [`MerkleTreeError::InvalidInput`] if the string is not valid hex or
/// does not decode to exactly 32 bytes.
pub fn txid_to_canonical(txid: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(txid)
        .map_err(|e| MerkleTreeError::InvalidInput(format!("transaction id is not hex: {}", e)))?;
    let mut hash: [u8; 32] = bytes.try_into().map_err(|b: Vec<u8>| {
        MerkleTreeError::InvalidInput(format!(
            "transaction id must decode to 32 bytes, got {}",
            b.len()
        ))
    })?;
    hash.reverse();
    Ok(hash)
}

/// Encode a canonical 32-byte hash as its big-endian display form
/// (lowercase hex, byte order reversed).
///
/// Inverse of [`txid_to_canonical`].
pub fn canonical_to_txid(hash: &[u8; 32]) -> String {
    let mut display = *hash;
    display.reverse();
    hex::encode(display)
}
