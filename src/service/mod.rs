pub mod accounts;
pub mod categories;
pub mod credentials;
pub mod logo;

pub use accounts::{AccountStore, Session};
pub use categories::CategoryStore;
pub use credentials::CredentialStore;
