//! In-process vault.
//!
//! Nothing outlives the process. Used as a test double and by library callers
//! that only need credentials for the lifetime of one process.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{SecretVault, VaultError};

/// A [`SecretVault`] backed by a mutex-guarded hash map.
#[derive(Debug, Default)]
pub struct MemoryVault {
  entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryVault {
  /// Creates an empty vault.
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of stored entries. Counts through a poisoned lock.
  pub fn len(&self) -> usize {
    self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
  }

  /// Whether the vault holds no entries.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, VaultError> {
    self
      .entries
      .lock()
      .map_err(|_| VaultError::Backend("memory vault lock poisoned".to_string()))
  }
}

impl SecretVault for MemoryVault {
  fn get_secret(&self, key: &str) -> Result<Option<Vec<u8>>, VaultError> {
    Ok(self.lock()?.get(key).cloned())
  }

  fn set_secret(&self, key: &str, value: Option<&[u8]>) -> Result<(), VaultError> {
    let mut entries = self.lock()?;
    match value {
      Some(bytes) => {
        entries.insert(key.to_string(), bytes.to_vec());
      }
      None => {
        entries.remove(key);
      }
    }
    Ok(())
  }
}
