//! CLI subcommand handlers.
//!
//! This module groups the implementations for each `repo-keychain`
//! subcommand, keeping `cli.rs` focused on argument parsing while the handlers
//! share vault construction and target formatting.

pub mod completions;
pub mod get;
pub mod reset;
pub mod save;
pub mod version;

use anyhow::Context;
use tracing::debug;

use crate::cli::{TargetArgs, VaultKind, VaultOptions};
use crate::credentials::VaultCredentialsStore;
use crate::vault::{FileVault, KeyringVault, SecretVault};

/// Store type shared by the handlers.
pub(crate) type CliStore = VaultCredentialsStore<Box<dyn SecretVault>>;

/// Build the credential store for the vault selected on the command line.
///
/// # Errors
/// Returns an error when the file vault is selected but no location can be
/// derived (no `--store` and no home directory).
pub(crate) fn open_store(options: &VaultOptions) -> anyhow::Result<CliStore> {
  let vault: Box<dyn SecretVault> = match options.kind {
    VaultKind::File => {
      let path = options
        .store_path()
        .context("cannot locate the credential file; pass --store or set REPO_KEYCHAIN_STORE")?;
      debug!(path = %path.display(), "using file vault");
      Box::new(FileVault::new(path))
    }
    VaultKind::Keyring => {
      debug!("using OS keyring vault");
      Box::new(KeyringVault::default())
    }
  };

  Ok(VaultCredentialsStore::new(vault))
}

/// Human-readable name of the entry a command targets.
pub(crate) fn describe_target(target: &TargetArgs) -> String {
  match (&target.ssh_key_file, &target.host) {
    (Some(key_file), _) => format!("SSH key {key_file}"),
    (None, Some(host)) => format!("host {host}"),
    (None, None) => "(no host)".to_string(),
  }
}
