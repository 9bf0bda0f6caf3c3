use crate::{
    MerkleTreeError, Result,
    hash::{canonical_to_txid, parent_hash, txid_to_canonical},
    proof::{MerkleProof, ProofStep, Side},
};

/// A Bitcoin-style block Merkle tree.
///
/// Built once from an ordered list of hex-string transaction ids and
/// immutable thereafter. The tree owns every level, level 0 (the
/// canonical leaves) through the single-element root level. Odd-sized
/// levels are padded with a value copy of their last element before
/// pairing, and the stored level keeps that padding entry, so every
/// non-root level has even length.
///
/// All query methods are pure reads; a `&MerkleTree` can be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    levels: Vec<Vec<[u8; 32]>>,
}

impl MerkleTree {
    /// Build a tree from an ordered list of big-endian hex transaction
    /// ids.
    ///
    /// Each id is converted to its canonical little-endian 32-byte
    /// form; parents are `double_sha256(left || right)`. Returns
    /// [`MerkleTreeError::InvalidInput`] for an empty list or an id
    /// that does not decode to 32 bytes.
    pub fn from_txids<I, S>(txids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let leaves = txids
            .into_iter()
            .map(|txid| txid_to_canonical(txid.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        if leaves.is_empty() {
            return Err(MerkleTreeError::InvalidInput(
                "cannot build a tree from an empty transaction list".to_string(),
            ));
        }

        let mut levels = vec![leaves];
        while levels.last().expect("at least one level").len() > 1 {
            let current = levels.last_mut().expect("at least one level");
            if current.len() % 2 == 1 {
                let last = *current.last().expect("non-empty level");
                current.push(last);
            }
            let next = current
                .chunks(2)
                .map(|pair| parent_hash(&pair[0], &pair[1]))
                .collect();
            levels.push(next);
        }
        Ok(MerkleTree { levels })
    }

    /// The canonical 32-byte root hash.
    ///
    /// A single-leaf tree's root is that leaf's canonical form (no
    /// hashing applied).
    pub fn root(&self) -> [u8; 32] {
        self.levels.last().expect("at least one level")[0]
    }

    /// The root in display form: byte-order reversed, lowercase hex,
    /// directly comparable to a published block merkle root.
    pub fn root_hex(&self) -> String {
        canonical_to_txid(&self.root())
    }

    /// Read-only view of every level, leaves first, root last.
    ///
    /// Levels include the padding duplicates appended to odd-sized
    /// levels during construction.
    pub fn levels(&self) -> &[Vec<[u8; 32]>] {
        &self.levels
    }

    /// Number of leaf entries in level 0, padding included.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Generate the inclusion proof for a transaction id.
    ///
    /// If the same leaf value appears at several positions the proof
    /// is for the first one. Returns [`MerkleTreeError::NotFound`] if
    /// the id is not a leaf of this tree, and
    /// [`MerkleTreeError::InvalidInput`] if it does not decode.
    pub fn path(&self, txid: &str) -> Result<MerkleProof> {
        let target = txid_to_canonical(txid)?;
        let mut index = self.levels[0]
            .iter()
            .position(|leaf| *leaf == target)
            .ok_or_else(|| MerkleTreeError::NotFound(txid.to_ascii_lowercase()))?;

        let mut steps = Vec::with_capacity(self.levels.len() - 1);
        for level in &self.levels[..self.levels.len() - 1] {
            // Even index: the node is a left child, its sibling sits to
            // the right. Padding guarantees the sibling exists.
            let (sibling, position) = if index % 2 == 0 {
                (level[index + 1], Side::Right)
            } else {
                (level[index - 1], Side::Left)
            };
            steps.push(ProofStep {
                data: sibling,
                position,
            });
            index /= 2;
        }
        Ok(MerkleProof::new(steps))
    }

    /// Verify an inclusion proof for `txid` against this tree's root.
    ///
    /// Returns `Ok(false)` for a well-formed but incorrect proof
    /// (wrong leaf, truncated, reordered); errors are reserved for
    /// undecodable input.
    pub fn verify_proof(&self, proof: &MerkleProof, txid: &str) -> Result<bool> {
        proof.verify(txid, &self.root())
    }
}
