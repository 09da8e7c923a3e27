//! OS secure store vault.
//!
//! Maps vault keys onto `keyring` entries: macOS Keychain, Windows Credential
//! Manager, or the Linux kernel keyring depending on the platform.

use tracing::trace;

use super::{SecretVault, VaultError};

/// Service name under which entries are filed in the OS store.
const DEFAULT_SERVICE: &str = "repo-keychain";

/// A [`SecretVault`] backed by the platform keychain.
#[derive(Debug, Clone)]
pub struct KeyringVault {
  service: String,
}

impl KeyringVault {
  /// Creates a vault filing entries under `service`.
  pub fn new(service: impl Into<String>) -> Self {
    Self {
      service: service.into(),
    }
  }

  /// Service name used for every entry.
  pub fn service(&self) -> &str {
    &self.service
  }

  fn entry(&self, key: &str) -> Result<keyring::Entry, VaultError> {
    keyring::Entry::new(&self.service, key).map_err(backend_error)
  }
}

impl Default for KeyringVault {
  fn default() -> Self {
    Self::new(DEFAULT_SERVICE)
  }
}

impl SecretVault for KeyringVault {
  fn get_secret(&self, key: &str) -> Result<Option<Vec<u8>>, VaultError> {
    trace!(service = %self.service, key, "reading keyring entry");
    match self.entry(key)?.get_secret() {
      Ok(bytes) => Ok(Some(bytes)),
      Err(keyring::Error::NoEntry) => Ok(None),
      Err(err) => Err(backend_error(err)),
    }
  }

  fn set_secret(&self, key: &str, value: Option<&[u8]>) -> Result<(), VaultError> {
    let entry = self.entry(key)?;
    match value {
      Some(bytes) => {
        trace!(service = %self.service, key, "writing keyring entry");
        entry.set_secret(bytes).map_err(backend_error)
      }
      None => {
        trace!(service = %self.service, key, "deleting keyring entry");
        match entry.delete_credential() {
          Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
          Err(err) => Err(backend_error(err)),
        }
      }
    }
  }
}

fn backend_error(err: keyring::Error) -> VaultError {
  VaultError::Backend(err.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_service_name() {
    assert_eq!(KeyringVault::default().service(), "repo-keychain");
  }

  #[test]
  fn test_custom_service_name() {
    assert_eq!(KeyringVault::new("settings-sync").service(), "settings-sync");
  }
}
