//! Vault test double that records every call
//!
//! Wraps a [`MemoryVault`] and counts reads and writes so tests can assert
//! how many vault operations the credential store performed.

use std::cell::{Cell, RefCell};

use repo_keychain::vault::{MemoryVault, SecretVault, VaultError};

/// A vault that counts calls and can be told to fail
#[derive(Default)]
pub struct RecordingVault {
  inner: MemoryVault,
  reads: Cell<usize>,
  writes: Cell<usize>,
  keys: RefCell<Vec<String>>,
  failure: RefCell<Option<String>>,
}

impl RecordingVault {
  pub fn new() -> Self {
    Self::default()
  }

  /// Make every subsequent call fail with a backend error
  pub fn fail_with(&self, message: &str) {
    *self.failure.borrow_mut() = Some(message.to_string());
  }

  pub fn reads(&self) -> usize {
    self.reads.get()
  }

  pub fn writes(&self) -> usize {
    self.writes.get()
  }

  pub fn calls(&self) -> usize {
    self.reads() + self.writes()
  }

  /// Keys passed to the vault, in call order
  pub fn keys(&self) -> Vec<String> {
    self.keys.borrow().clone()
  }

  /// Raw stored value, bypassing the counters
  pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
    self.inner.get_secret(key).ok().flatten()
  }

  fn record(&self, key: &str) -> Result<(), VaultError> {
    self.keys.borrow_mut().push(key.to_string());
    match self.failure.borrow().as_ref() {
      Some(message) => Err(VaultError::Backend(message.clone())),
      None => Ok(()),
    }
  }
}

impl SecretVault for RecordingVault {
  fn get_secret(&self, key: &str) -> Result<Option<Vec<u8>>, VaultError> {
    self.reads.set(self.reads.get() + 1);
    self.record(key)?;
    self.inner.get_secret(key)
  }

  fn set_secret(&self, key: &str, value: Option<&[u8]>) -> Result<(), VaultError> {
    self.writes.set(self.writes.get() + 1);
    self.record(key)?;
    self.inner.set_secret(key, value)
  }
}
