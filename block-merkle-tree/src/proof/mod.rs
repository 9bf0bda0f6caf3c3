//! Inclusion proof types and their serialization boundaries.
//!
//! A [`MerkleProof`] is the ordered list of sibling hashes needed to
//! recompute the root from a single leaf, leaf level first. Two wire
//! forms are supported: compact bincode
//! ([`MerkleProof::encode_to_vec`] / [`MerkleProof::decode_from_slice`])
//! and a textual `(hex, "left"/"right")` fixture form
//! ([`MerkleProof::from_parts`] / [`MerkleProof::to_parts`]). Malformed
//! material is rejected at these boundaries; in-memory steps are
//! well-formed by construction.

use bincode::{Decode, Encode};

use crate::{MerkleTreeError, Result};

#[cfg(test)]
mod tests;

/// Maximum accepted size of an encoded proof. A proof holds one
/// 33-byte step per tree level, so even a billion-leaf tree stays
/// far below this.
const MAX_PROOF_BYTES: usize = 64 * 1024;

/// Which side of the authenticated node a sibling hash sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum Side {
    /// The sibling is the left input of the parent hash.
    Left,
    /// The sibling is the right input of the parent hash.
    Right,
}

impl Side {
    /// The textual tag used in the fixture form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// Parse a textual tag. Anything other than exactly `"left"` or
    /// `"right"` is rejected.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(MerkleTreeError::InvalidProof(format!(
                "unknown position tag {:?} (expected \"left\" or \"right\")",
                other
            ))),
        }
    }
}

/// One proof step: a sibling hash and the side it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct ProofStep {
    /// The sibling's canonical 32-byte hash.
    pub data: [u8; 32],
    /// Which side of the node being authenticated the sibling sits on.
    pub position: Side,
}

/// An inclusion proof: sibling steps ordered from the leaf level up to
/// (but not including) the root.
///
/// A single-leaf tree produces an empty proof.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MerkleProof {
    steps: Vec<ProofStep>,
}

impl MerkleProof {
    /// Construct a proof from pre-computed steps.
    pub fn new(steps: Vec<ProofStep>) -> Self {
        MerkleProof { steps }
    }

    /// The ordered proof steps, leaf level first.
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Number of steps; equals the tree height minus one.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` for the empty proof of a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// An unknown side tag, truncated input, or trailing garbage is
    /// rejected as [`MerkleTreeError::InvalidProof`].
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<MAX_PROOF_BYTES>();
        let (proof, read): (Self, usize) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("decode error: {}", e)))?;
        if read != bytes.len() {
            return Err(MerkleTreeError::InvalidProof(format!(
                "proof has {} trailing bytes",
                bytes.len() - read
            )));
        }
        Ok(proof)
    }

    /// Build a proof from `(sibling hex, position tag)` pairs, the form
    /// used for transport fixtures.
    ///
    /// The hex is the sibling's canonical form (not display-reversed)
    /// and must decode to exactly 32 bytes; the tag must be `"left"` or
    /// `"right"`. Anything else is [`MerkleTreeError::InvalidProof`].
    pub fn from_parts<'a, I>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let steps = parts
            .into_iter()
            .map(|(data_hex, tag)| {
                let bytes = hex::decode(data_hex).map_err(|e| {
                    MerkleTreeError::InvalidProof(format!("step data is not hex: {}", e))
                })?;
                let data: [u8; 32] = bytes.try_into().map_err(|b: Vec<u8>| {
                    MerkleTreeError::InvalidProof(format!(
                        "step data must be 32 bytes, got {}",
                        b.len()
                    ))
                })?;
                Ok(ProofStep {
                    data,
                    position: Side::from_tag(tag)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(MerkleProof { steps })
    }

    /// Render the proof as `(sibling hex, position tag)` pairs.
    ///
    /// Inverse of [`MerkleProof::from_parts`].
    pub fn to_parts(&self) -> Vec<(String, &'static str)> {
        self.steps
            .iter()
            .map(|step| (hex::encode(step.data), step.position.as_str()))
            .collect()
    }
}
