//! Strongly typed credentials and related errors.
//!
//! These types are shared between the vault-backed store, the blob encoding
//! and the CLI so that callers can reason about usernames, passwords and
//! failure modes consistently.

use std::fmt;

use crate::vault::VaultError;

/// A username and secret for a settings repository remote.
///
/// For HTTPS remotes this is a login and password (or token). For SSH remotes
/// the username is the key-file path and the password is the key passphrase.
/// Either half may be absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
  /// Login name, or the SSH key-file path for passphrase entries
  pub username: Option<String>,
  /// Password, token, or SSH key passphrase
  pub password: Option<String>,
}

impl Credentials {
  /// Creates credentials with both a username and a password.
  pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      username: Some(username.into()),
      password: Some(password.into()),
    }
  }

  /// Creates credentials that carry only a password.
  pub fn password_only(password: impl Into<String>) -> Self {
    Self {
      username: None,
      password: Some(password.into()),
    }
  }

  /// Login name, if any.
  pub fn username(&self) -> Option<&str> {
    self.username.as_deref()
  }

  /// Password, if any.
  pub fn password(&self) -> Option<&str> {
    self.password.as_deref()
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("password", &self.password.as_ref().map(|_| "<redacted>"))
      .finish()
  }
}

/// Errors that can occur during credential operations.
#[derive(Debug)]
pub enum CredentialError {
  /// The underlying vault failed
  Vault(VaultError),
  /// A stored blob could not be decoded into credentials
  MalformedBlob(String),
  /// An SSH key entry was saved without a passphrase
  MissingPassphrase,
}

impl fmt::Display for CredentialError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Vault(_) => write!(f, "vault operation failed"),
      Self::MalformedBlob(msg) => write!(f, "stored credentials are malformed: {msg}"),
      Self::MissingPassphrase => write!(f, "an SSH key entry requires a passphrase"),
    }
  }
}

impl std::error::Error for CredentialError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Vault(err) => Some(err),
      _ => None,
    }
  }
}

impl From<VaultError> for CredentialError {
  fn from(err: VaultError) -> Self {
    Self::Vault(err)
  }
}
