//! `repo-keychain get` handler.
//!
//! Prints the stored credentials for a host or SSH key file. The password is
//! masked unless `--show-password` is given, in both text and JSON output.

use std::process;

use anyhow::Context;
use serde::Serialize;

use super::{describe_target, open_store};
use crate::cli::{Cli, TargetArgs};
use crate::color::ColorScheme;
use crate::credentials::{Credentials, CredentialsStore};

/// Look up and print credentials.
///
/// Exits with status 1 when nothing is stored and 2 when the vault cannot be
/// read or the entry cannot be decoded.
///
/// # Arguments
/// * `target` - Host and optional SSH key file identifying the entry.
/// * `json` - Emit a JSON document instead of colored text.
/// * `show_password` - Print the password in clear text.
/// * `cli` - Parsed CLI settings carrying the vault selection.
/// * `colors` - Shared color scheme used to render output consistently.
pub(crate) fn handle_get_command(
  target: &TargetArgs,
  json: bool,
  show_password: bool,
  cli: &Cli,
  colors: &ColorScheme,
) {
  let credentials = match lookup(target, cli) {
    Ok(credentials) => credentials,
    Err(e) => {
      eprintln!("{} {}", colors.error("✗"), colors.error("Failed to read credentials"));
      eprintln!("  {e:#}");
      process::exit(2);
    }
  };

  let Some(credentials) = credentials else {
    eprintln!(
      "{} No credentials stored for {}",
      colors.warning("⚠"),
      describe_target(target)
    );
    if target.host.is_none() {
      eprintln!("  {}", colors.info("Lookups need --host, including SSH key entries"));
    }
    process::exit(1);
  };

  if json {
    let output = CredentialsOutput::new(target, &credentials, show_password);
    match serde_json::to_string_pretty(&output) {
      Ok(rendered) => println!("{rendered}"),
      Err(e) => {
        eprintln!("{} Failed to render JSON: {e}", colors.error("✗"));
        process::exit(2);
      }
    }
  } else {
    print!("{}", render_credentials(&credentials, show_password, colors));
  }
}

fn lookup(target: &TargetArgs, cli: &Cli) -> anyhow::Result<Option<Credentials>> {
  let store = open_store(&cli.vault)?;
  store
    .get(target.host.as_deref(), target.ssh_key_file.as_deref())
    .with_context(|| format!("lookup for {} failed", describe_target(target)))
}

/// JSON shape printed by `get --json`.
#[derive(Debug, Serialize)]
struct CredentialsOutput<'a> {
  host: Option<&'a str>,
  ssh_key_file: Option<&'a str>,
  username: Option<&'a str>,
  has_password: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  password: Option<&'a str>,
}

impl<'a> CredentialsOutput<'a> {
  fn new(target: &'a TargetArgs, credentials: &'a Credentials, show_password: bool) -> Self {
    Self {
      host: target.host.as_deref(),
      ssh_key_file: target.ssh_key_file.as_deref(),
      username: credentials.username(),
      has_password: credentials.password.is_some(),
      password: credentials.password().filter(|_| show_password),
    }
  }
}

/// Render credentials as labelled lines, masking the password on request.
fn render_credentials(credentials: &Credentials, show_password: bool, colors: &ColorScheme) -> String {
  let mut out = String::new();

  let username = match credentials.username() {
    Some(name) => name.to_string(),
    None => colors.dimmed("(not set)"),
  };
  out.push_str(&format!("{}: {}\n", colors.emphasis("Username"), username));

  match credentials.password() {
    Some(password) if show_password => {
      out.push_str(&format!("{}: {}\n", colors.emphasis("Password"), password));
    }
    Some(password) => {
      out.push_str(&format!("{}: {}\n", colors.emphasis("Password"), colors.dimmed("********")));
      out.push_str(&format!(
        "  {}: {} characters\n",
        colors.dimmed("Length"),
        colors.number(password.chars().count())
      ));
    }
    None => {
      out.push_str(&format!("{}: {}\n", colors.emphasis("Password"), colors.dimmed("(not set)")));
    }
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cli::ColorOption;

  fn plain() -> ColorScheme {
    ColorScheme::new(ColorOption::Never)
  }

  #[test]
  fn test_render_masks_password() {
    let output = render_credentials(&Credentials::new("alice", "hunter2"), false, &plain());

    assert!(!output.contains("hunter2"));
    insta::assert_snapshot!(output, @r"
    Username: alice
    Password: ********
      Length: 7 characters
    ");
  }

  #[test]
  fn test_render_shows_password_on_request() {
    let output = render_credentials(&Credentials::new("alice", "hunter2"), true, &plain());

    insta::assert_snapshot!(output, @r"
    Username: alice
    Password: hunter2
    ");
  }

  #[test]
  fn test_render_missing_halves() {
    let output = render_credentials(&Credentials::default(), false, &plain());

    insta::assert_snapshot!(output, @r"
    Username: (not set)
    Password: (not set)
    ");
  }

  #[test]
  fn test_json_output_hides_password_by_default() {
    let target = TargetArgs {
      host: Some("github.com".to_string()),
      ssh_key_file: None,
    };
    let creds = Credentials::new("alice", "hunter2");

    let hidden = serde_json::to_value(CredentialsOutput::new(&target, &creds, false)).unwrap();
    assert_eq!(
      hidden,
      serde_json::json!({
        "host": "github.com",
        "ssh_key_file": null,
        "username": "alice",
        "has_password": true
      })
    );

    let shown = serde_json::to_value(CredentialsOutput::new(&target, &creds, true)).unwrap();
    assert_eq!(shown["password"], "hunter2");
  }
}
