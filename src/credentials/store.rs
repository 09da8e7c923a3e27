//! Credential store abstractions.
//!
//! Defines the [`CredentialsStore`] trait so the code that resolves remote
//! credentials does not care whether they end up in the OS keychain, a file,
//! or memory.

use super::{CredentialError, Credentials};

/// Prefix shared by every lookup key written by this crate.
pub const KEY_PREFIX: &str = "ics-";

/// Persists one set of credentials per host or SSH key file.
pub trait CredentialsStore {
  /// Retrieves credentials for `host`, or for `ssh_key_file` when given.
  ///
  /// # Arguments
  /// * `host` - Remote host name (e.g., `github.com`). Without a host nothing
  ///   is looked up.
  /// * `ssh_key_file` - Path of the SSH key whose passphrase is wanted.
  ///
  /// # Returns
  /// * `Ok(Some(Credentials))` when an entry exists.
  /// * `Ok(None)` when there is no entry, or no host was given.
  ///
  /// # Errors
  /// Returns `Err(CredentialError)` when the backing vault fails or the stored
  /// entry cannot be decoded.
  fn get(&self, host: Option<&str>, ssh_key_file: Option<&str>) -> Result<Option<Credentials>, CredentialError>;

  /// Removes the entry stored for `host`. Removing a missing entry succeeds.
  ///
  /// # Errors
  /// Returns `Err(CredentialError)` when the backing vault fails.
  fn reset(&self, host: &str) -> Result<(), CredentialError>;

  /// Stores `credentials` for `ssh_key_file` if given, otherwise for `host`.
  ///
  /// Existing entries are overwritten.
  ///
  /// # Errors
  /// Returns [`CredentialError::MissingPassphrase`] when an SSH key entry has
  /// no password, or `Err(CredentialError)` when the backing vault fails.
  ///
  /// # Panics
  /// Panics when both `host` and `ssh_key_file` are `None`; callers must
  /// supply at least one of them.
  fn save(&self, host: Option<&str>, credentials: &Credentials, ssh_key_file: Option<&str>)
  -> Result<(), CredentialError>;
}

/// Builds the vault key for an account (a host name or SSH key-file path).
pub fn lookup_key(account: &str) -> String {
  format!("{KEY_PREFIX}{account}")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lookup_key_is_prefixed() {
    assert_eq!(lookup_key("github.com"), "ics-github.com");
    assert_eq!(lookup_key("/home/me/.ssh/id_rsa"), "ics-/home/me/.ssh/id_rsa");
  }

  #[test]
  fn test_lookup_key_is_deterministic() {
    assert_eq!(lookup_key("example.com"), lookup_key("example.com"));
    assert_ne!(lookup_key("example.com"), lookup_key("example.org"));
  }
}
