//! [`CredentialsStore`] on top of a [`SecretVault`].
//!
//! Host entries hold the composite `username@password` blob from
//! [`super::encoding`]. SSH key entries hold only the passphrase, because the
//! key-file path already names the entry and doubles as the username.

use tracing::{debug, info};

use super::encoding::{join_data, split_data};
use super::store::lookup_key;
use super::{CredentialError, Credentials, CredentialsStore};
use crate::vault::SecretVault;

/// Credential store that delegates all persistence to a vault.
///
/// Holds no state of its own; every call is a single vault operation.
#[derive(Debug)]
pub struct VaultCredentialsStore<V> {
  vault: V,
}

impl<V: SecretVault> VaultCredentialsStore<V> {
  /// Creates a store writing to `vault`.
  pub fn new(vault: V) -> Self {
    Self { vault }
  }

  /// The vault this store writes to.
  pub fn vault(&self) -> &V {
    &self.vault
  }

  /// Returns the underlying vault.
  pub fn into_inner(self) -> V {
    self.vault
  }
}

impl<V: SecretVault> CredentialsStore for VaultCredentialsStore<V> {
  fn get(&self, host: Option<&str>, ssh_key_file: Option<&str>) -> Result<Option<Credentials>, CredentialError> {
    let Some(host) = host else {
      debug!("no host given, skipping credential lookup");
      return Ok(None);
    };

    let key = lookup_key(ssh_key_file.unwrap_or(host));
    debug!(%key, "looking up credentials");

    let Some(blob) = self.vault.get_secret(&key)? else {
      debug!(%key, "no stored credentials");
      return Ok(None);
    };

    let data = String::from_utf8(blob)
      .map_err(|_| CredentialError::MalformedBlob(format!("entry {key} is not valid UTF-8")))?;

    match ssh_key_file {
      None => split_data(&data).map(Some),
      Some(key_file) => Ok(Some(Credentials {
        username: Some(key_file.to_string()),
        password: Some(data),
      })),
    }
  }

  fn reset(&self, host: &str) -> Result<(), CredentialError> {
    let key = lookup_key(host);
    info!(%key, "clearing stored credentials");
    self.vault.set_secret(&key, None)?;
    Ok(())
  }

  fn save(
    &self,
    host: Option<&str>,
    credentials: &Credentials,
    ssh_key_file: Option<&str>,
  ) -> Result<(), CredentialError> {
    let Some(account) = ssh_key_file.or(host) else {
      panic!("saving credentials requires a host or an SSH key file");
    };
    let key = lookup_key(account);

    let data = match ssh_key_file {
      None => join_data(credentials),
      Some(_) => credentials
        .password
        .clone()
        .ok_or(CredentialError::MissingPassphrase)?,
    };

    info!(%key, ssh_key = ssh_key_file.is_some(), "storing credentials");
    self.vault.set_secret(&key, Some(data.as_bytes()))?;
    Ok(())
  }
}
