//! Errors raised by secret vault backends.

use std::fmt;

/// Errors that can occur while reading or writing a vault.
///
/// "No entry" is not an error: lookups return `Ok(None)` and deleting an
/// absent entry succeeds.
#[derive(Debug)]
pub enum VaultError {
  /// Reading or writing the backing storage failed
  Io(std::io::Error),
  /// The backing storage exists but its contents could not be understood
  Corrupted(String),
  /// The platform secret store rejected the operation
  Backend(String),
}

impl fmt::Display for VaultError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(_) => write!(f, "vault I/O failed"),
      Self::Corrupted(msg) => write!(f, "vault contents are corrupted: {msg}"),
      Self::Backend(msg) => write!(f, "vault backend error: {msg}"),
    }
  }
}

impl std::error::Error for VaultError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(err) => Some(err),
      _ => None,
    }
  }
}

impl From<std::io::Error> for VaultError {
  fn from(err: std::io::Error) -> Self {
    Self::Io(err)
  }
}
