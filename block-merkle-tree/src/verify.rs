//! Proof verification — pure functions, no tree required.
//!
//! A verifier holding only a transaction id, a proof, and a claimed
//! root can confirm membership without the leaf set: fold the sibling
//! steps over the leaf's canonical hash and compare the result to the
//! root.

use crate::{
    Result,
    hash::{parent_hash, txid_to_canonical},
    proof::{MerkleProof, Side},
};

impl MerkleProof {
    /// Recompute the root implied by this proof for `txid`.
    ///
    /// Each step merges the running hash with the recorded sibling:
    /// `Side::Right` puts the sibling on the right of the
    /// concatenation, `Side::Left` on the left.
    pub fn compute_root(&self, txid: &str) -> Result<[u8; 32]> {
        let mut current = txid_to_canonical(txid)?;
        for step in self.steps() {
            current = match step.position {
                Side::Right => parent_hash(&current, &step.data),
                Side::Left => parent_hash(&step.data, &current),
            };
        }
        Ok(current)
    }

    /// Verify this proof for `txid` against a claimed root.
    ///
    /// Returns `Ok(true)` iff the recomputed root equals
    /// `expected_root` byte-for-byte. A mismatch — wrong leaf,
    /// truncated or reordered steps, wrong root — is `Ok(false)`,
    /// never an error.
    pub fn verify(&self, txid: &str, expected_root: &[u8; 32]) -> Result<bool> {
        Ok(self.compute_root(txid)? == *expected_root)
    }
}
