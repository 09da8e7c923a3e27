//! `repo-keychain reset` handler.

use std::process;

use anyhow::Context;

use super::open_store;
use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::credentials::CredentialsStore;

/// Clear the entry stored for `host`.
///
/// Clearing a host without an entry succeeds. Exits with status 2 when the
/// vault cannot be written.
pub(crate) fn handle_reset_command(host: &str, cli: &Cli, colors: &ColorScheme) {
  match clear(host, cli) {
    Ok(()) => {
      if !cli.behavior.quiet {
        println!("{} Cleared credentials for host {}", colors.success("✓"), host);
      }
    }
    Err(e) => {
      eprintln!("{} {}", colors.error("✗"), colors.error("Failed to clear credentials"));
      eprintln!("  {e:#}");
      process::exit(2);
    }
  }
}

fn clear(host: &str, cli: &Cli) -> anyhow::Result<()> {
  let store = open_store(&cli.vault)?;
  store
    .reset(host)
    .with_context(|| format!("reset for host {host} failed"))
}
