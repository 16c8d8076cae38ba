use sha2::{Digest, Sha256};

/// Hex characters kept from the digest.
pub const ADDRESS_HASH_LEN: usize = 7;

/// Short opaque identifier for a network address.
///
/// SHA-256 of the textual address, lower-hex, truncated. Same input, same hash.
pub fn hash_address(addr: &str) -> String {
    let digest = Sha256::digest(addr.as_bytes());
    let mut hex = format!("{digest:x}");
    hex.truncate(ADDRESS_HASH_LEN);
    hex
}
