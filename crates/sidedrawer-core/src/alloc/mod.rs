//! Hashing using AHash.

pub use ahash::RandomState;
