//! The vault abstraction consumed by the credential adapter.

use super::VaultError;

/// A store of opaque secrets addressed by exact key strings.
///
/// Implementations decide how secrets are persisted and how concurrent
/// writers are ordered; callers only get "one call, one vault operation".
pub trait SecretVault {
  /// Looks up the secret stored under `key`.
  ///
  /// # Returns
  /// * `Ok(Some(bytes))` when an entry exists.
  /// * `Ok(None)` when there is no entry for `key`.
  ///
  /// # Errors
  /// Returns `Err(VaultError)` when the backend cannot be read.
  fn get_secret(&self, key: &str) -> Result<Option<Vec<u8>>, VaultError>;

  /// Stores `value` under `key`, or deletes the entry when `value` is `None`.
  ///
  /// Existing entries are overwritten unconditionally. Deleting an entry that
  /// does not exist succeeds.
  ///
  /// # Errors
  /// Returns `Err(VaultError)` when the backend cannot be written.
  fn set_secret(&self, key: &str, value: Option<&[u8]>) -> Result<(), VaultError>;
}

impl<V: SecretVault + ?Sized> SecretVault for &V {
  fn get_secret(&self, key: &str) -> Result<Option<Vec<u8>>, VaultError> {
    (**self).get_secret(key)
  }

  fn set_secret(&self, key: &str, value: Option<&[u8]>) -> Result<(), VaultError> {
    (**self).set_secret(key, value)
  }
}

impl<V: SecretVault + ?Sized> SecretVault for Box<V> {
  fn get_secret(&self, key: &str) -> Result<Option<Vec<u8>>, VaultError> {
    (**self).get_secret(key)
  }

  fn set_secret(&self, key: &str, value: Option<&[u8]>) -> Result<(), VaultError> {
    (**self).set_secret(key, value)
  }
}
