//! `repo-keychain save` handler.
//!
//! Stores a username and password for a host, or a passphrase for an SSH key
//! file. The password comes from `--password` or, to keep it out of shell
//! history, from the first line of standard input.

use std::io::{self, BufRead};
use std::process;

use anyhow::Context;

use super::{describe_target, open_store};
use crate::cli::{Cli, TargetArgs};
use crate::color::ColorScheme;
use crate::credentials::{Credentials, CredentialsStore};

/// Store credentials for the given target.
///
/// Exits with status 2 when the password cannot be read or the vault cannot
/// be written.
///
/// # Arguments
/// * `target` - Host and optional SSH key file identifying the entry.
/// * `user` - Username stored with host entries.
/// * `password` - Password given on the command line.
/// * `password_stdin` - Read the password from stdin instead.
/// * `cli` - Parsed CLI settings carrying the vault selection.
/// * `colors` - Shared color scheme used to render output consistently.
pub(crate) fn handle_save_command(
  target: &TargetArgs,
  user: Option<&str>,
  password: Option<&str>,
  password_stdin: bool,
  cli: &Cli,
  colors: &ColorScheme,
) {
  let result = resolve_password(password, password_stdin).and_then(|password| {
    let credentials = Credentials {
      username: user.map(str::to_string),
      password,
    };
    store_credentials(target, &credentials, cli)
  });

  match result {
    Ok(()) => {
      if !cli.behavior.quiet {
        println!(
          "{} Stored credentials for {}",
          colors.success("✓"),
          describe_target(target)
        );
      }
    }
    Err(e) => {
      eprintln!("{} {}", colors.error("✗"), colors.error("Failed to store credentials"));
      eprintln!("  {e:#}");
      process::exit(2);
    }
  }
}

fn resolve_password(flag: Option<&str>, from_stdin: bool) -> anyhow::Result<Option<String>> {
  if from_stdin {
    read_password(io::stdin().lock()).map(Some)
  } else {
    Ok(flag.map(str::to_string))
  }
}

/// Read a password from the first line of `reader`, without its line ending.
fn read_password(mut reader: impl BufRead) -> anyhow::Result<String> {
  let mut line = String::new();
  reader
    .read_line(&mut line)
    .context("failed to read password from standard input")?;
  Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn store_credentials(target: &TargetArgs, credentials: &Credentials, cli: &Cli) -> anyhow::Result<()> {
  let store = open_store(&cli.vault)?;
  store
    .save(target.host.as_deref(), credentials, target.ssh_key_file.as_deref())
    .with_context(|| format!("saving {} failed", describe_target(target)))
}
