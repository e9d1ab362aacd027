//! Shared utilities.
//!
//! Hashing, output writes and path resolution used by every task.

pub mod fs;
pub mod hash;
pub mod path;
