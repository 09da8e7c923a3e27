//! Secret vaults that back the credential store.
//!
//! A vault persists opaque secrets by string key. The credential adapter in
//! [`crate::credentials`] never talks to a storage backend directly; it is
//! handed a [`SecretVault`] at construction time so that the OS keychain, a
//! JSON file, or an in-memory test double can be substituted freely.

mod error;
mod file;
mod memory;
mod os_keyring;
mod secret_vault;

pub use error::VaultError;
pub use file::FileVault;
pub use memory::MemoryVault;
pub use os_keyring::KeyringVault;
pub use secret_vault::SecretVault;
