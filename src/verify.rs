// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Digests over stored ledger bytes, for audit tooling.

/// BLAKE3 digest of a stored value.
pub fn state_digest(bytes: &[u8]) -> [u8; 32] {
    *blake3::hash(bytes).as_bytes()
}

pub fn digest_hex(digest: &[u8; 32]) -> String {
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
