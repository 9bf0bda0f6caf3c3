use super::*;
use crate::MerkleTree;

const TXIDS: [&str; 4] = [
    "5277cf3790381c2cc2b071038d8c35b3b601207c92f8aec15978a5f01ecf8319",
    "182c2ed191a35ea496ce84c42d8beee6f9d82b9f063de2e45a54692bb043696a",
    "707e86e5e2356cb53a2edf0be391d56cfc998bcfa05a13a5772ef474c5eba105",
    "711e15a9a819de4d1269d71de9744dedf9b6c32bba36bb0196f003f6507d4bb4",
];

fn sample_proof() -> MerkleProof {
    let tree = MerkleTree::from_txids(TXIDS).expect("valid txids");
    tree.path(TXIDS[2]).expect("leaf is in tree")
}

// ── Side tags ────────────────────────────────────────────────────────

#[test]
fn test_side_tag_roundtrip() {
    assert_eq!(Side::from_tag("left").expect("valid tag"), Side::Left);
    assert_eq!(Side::from_tag("right").expect("valid tag"), Side::Right);
    assert_eq!(Side::Left.as_str(), "left");
    assert_eq!(Side::Right.as_str(), "right");
}

#[test]
fn test_side_rejects_unknown_tags() {
    for tag in ["LEFT", "Right", "up", ""] {
        let err = Side::from_tag(tag).expect_err("unknown tag");
        assert!(matches!(err, MerkleTreeError::InvalidProof(_)));
    }
}

// ── Bincode codec ────────────────────────────────────────────────────

#[test]
fn test_encode_decode_roundtrip() {
    let proof = sample_proof();
    let bytes = proof.encode_to_vec().expect("encode proof");
    let decoded = MerkleProof::decode_from_slice(&bytes).expect("decode proof");
    assert_eq!(proof, decoded);
}

#[test]
fn test_encode_decode_roundtrip_empty_proof() {
    let proof = MerkleProof::new(Vec::new());
    let bytes = proof.encode_to_vec().expect("encode empty proof");
    let decoded = MerkleProof::decode_from_slice(&bytes).expect("decode empty proof");
    assert!(decoded.is_empty());
}

#[test]
fn test_decode_rejects_truncated_bytes() {
    let bytes = sample_proof().encode_to_vec().expect("encode proof");
    let err = MerkleProof::decode_from_slice(&bytes[..bytes.len() - 3]).expect_err("truncated");
    assert!(matches!(err, MerkleTreeError::InvalidProof(_)));
}

#[test]
fn test_decode_rejects_trailing_bytes() {
    let mut bytes = sample_proof().encode_to_vec().expect("encode proof");
    bytes.push(0x00);
    let err = MerkleProof::decode_from_slice(&bytes).expect_err("trailing byte");
    assert!(matches!(err, MerkleTreeError::InvalidProof(_)));
}

#[test]
fn test_decode_rejects_unknown_side_variant() {
    let mut bytes = sample_proof().encode_to_vec().expect("encode proof");
    // The final byte is the last step's Side variant index; force an
    // out-of-range variant.
    let last = bytes.len() - 1;
    bytes[last] = 0x07;
    let err = MerkleProof::decode_from_slice(&bytes).expect_err("bad variant");
    assert!(matches!(err, MerkleTreeError::InvalidProof(_)));
}

// ── Fixture form ─────────────────────────────────────────────────────

#[test]
fn test_parts_roundtrip() {
    let proof = sample_proof();
    let parts = proof.to_parts();
    let borrowed: Vec<(&str, &str)> = parts
        .iter()
        .map(|(data, tag)| (data.as_str(), *tag))
        .collect();
    let rebuilt = MerkleProof::from_parts(borrowed).expect("valid parts");
    assert_eq!(proof, rebuilt);
}

#[test]
fn test_parts_verify_like_the_original() {
    let tree = MerkleTree::from_txids(TXIDS).expect("valid txids");
    let parts = tree.path(TXIDS[1]).expect("leaf is in tree").to_parts();
    let borrowed: Vec<(&str, &str)> = parts
        .iter()
        .map(|(data, tag)| (data.as_str(), *tag))
        .collect();
    let proof = MerkleProof::from_parts(borrowed).expect("valid parts");
    assert!(
        tree.verify_proof(&proof, TXIDS[1])
            .expect("well-formed proof")
    );
}

#[test]
fn test_from_parts_rejects_bad_tag() {
    let data = hex::encode([0u8; 32]);
    let err = MerkleProof::from_parts([(data.as_str(), "sideways")]).expect_err("bad tag");
    assert!(matches!(err, MerkleTreeError::InvalidProof(_)));
}

#[test]
fn test_from_parts_rejects_bad_hex() {
    let err = MerkleProof::from_parts([("not hex at all", "left")]).expect_err("bad hex");
    assert!(matches!(err, MerkleTreeError::InvalidProof(_)));
}

#[test]
fn test_from_parts_rejects_short_data() {
    let err = MerkleProof::from_parts([("deadbeef", "left")]).expect_err("short data");
    assert!(matches!(err, MerkleTreeError::InvalidProof(_)));
}
