//! Session tokens and PIN hashing.

pub mod password;
pub mod token;

pub use password::{hash_pin, verify_pin};
pub use token::{SessionData, TokenService};
