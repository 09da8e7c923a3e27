//! Credentials for settings repository remotes.
//!
//! A remote is identified by its host name or, for SSH remotes, by the path of
//! the key file. Each identity maps to exactly one vault entry whose key is
//! `ics-` followed by the key-file path when present, otherwise the host:
//!
//! ```text
//! ics-github.com            alice@hunter2
//! ics-/home/me/.ssh/id_rsa  passphrase123
//! ```
//!
//! Host entries store username and password together (see [`encoding`]); SSH
//! key entries store only the passphrase.

pub mod encoding;
mod store;
mod types;
mod vault_store;

pub use store::{CredentialsStore, KEY_PREFIX, lookup_key};
pub use types::{CredentialError, Credentials};
pub use vault_store::VaultCredentialsStore;
