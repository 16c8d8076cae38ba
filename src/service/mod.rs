pub mod address_hash;
pub mod visits;
