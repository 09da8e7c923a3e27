//! Command-line interface definitions for repo-keychain.
//!
//! This module defines the CLI structure using clap derives and dispatches the
//! parsed command to its handler in [`crate::commands`].

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::color::ColorScheme;
use crate::commands::completions::handle_completions_command;
use crate::commands::get::handle_get_command;
use crate::commands::reset::handle_reset_command;
use crate::commands::save::handle_save_command;
use crate::commands::version::handle_version_command;

/// repo-keychain - Store credentials for settings repository remotes
#[derive(Debug, Parser)]
#[command(
  name = "repo-keychain",
  version,
  about = "Store credentials for settings repository remotes",
  long_about = "Saves, looks up and clears the password for a repository host, or the passphrase\n\
                for an SSH key file, in the OS keychain or a local credential file.",
  styles = get_clap_styles()
)]
pub struct Cli {
  /// Subcommand to execute
  #[command(subcommand)]
  pub command: Command,

  /// Vault options
  #[command(flatten)]
  pub vault: VaultOptions,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Look up the credentials stored for a host or SSH key file
  Get {
    #[command(flatten)]
    target: TargetArgs,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Print the password instead of masking it
    #[arg(long)]
    show_password: bool,
  },

  /// Store credentials for a host or SSH key file
  Save {
    #[command(flatten)]
    target: TargetArgs,

    /// Username for the host (ignored for SSH key entries)
    #[arg(short, long, value_name = "USER")]
    user: Option<String>,

    /// Password, token, or SSH key passphrase
    #[arg(long, value_name = "PASSWORD", conflicts_with = "password_stdin")]
    password: Option<String>,

    /// Read the password from the first line of standard input
    #[arg(long)]
    password_stdin: bool,
  },

  /// Remove the credentials stored for a host
  Reset {
    /// Host whose entry should be cleared
    #[arg(long, value_name = "HOST")]
    host: String,
  },

  /// Display version and build information
  Version {
    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Show only version number
    #[arg(long)]
    short: bool,
  },

  /// Generate shell completion scripts
  Completions {
    /// Target shell for completions
    #[arg(value_enum)]
    shell: Shell,
  },
}

/// Identifies the entry a command operates on
#[derive(Debug, Clone, Parser)]
pub struct TargetArgs {
  /// Repository host (e.g. github.com)
  #[arg(long, value_name = "HOST")]
  pub host: Option<String>,

  /// SSH key file whose passphrase is stored instead of a host password
  #[arg(long, value_name = "PATH")]
  pub ssh_key_file: Option<String>,
}

/// Vault options
#[derive(Debug, Parser)]
pub struct VaultOptions {
  /// Secret vault backing the credential store
  #[arg(
    long = "vault",
    env = "REPO_KEYCHAIN_VAULT",
    value_enum,
    default_value = "file",
    value_name = "KIND"
  )]
  pub kind: VaultKind,

  /// Credential file used by the file vault
  /// [default: ~/.config/repo-keychain/credentials.json]
  #[arg(long, env = "REPO_KEYCHAIN_STORE", value_name = "PATH")]
  pub store: Option<PathBuf>,
}

/// Available vault backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VaultKind {
  /// JSON credential file
  File,
  /// OS keychain (Keychain, Credential Manager, kernel keyring)
  Keyring,
}

impl VaultOptions {
  /// Resolve the file vault location, falling back to the per-user default.
  pub fn store_path(&self) -> Option<PathBuf> {
    self.store.clone().or_else(default_store_path)
  }
}

fn default_store_path() -> Option<PathBuf> {
  std::env::var_os("HOME")
    .or_else(|| std::env::var_os("USERPROFILE"))
    .map(|home| {
      PathBuf::from(home)
        .join(".config")
        .join("repo-keychain")
        .join("credentials.json")
    })
}

/// Behavior options
#[derive(Debug, Parser)]
pub struct BehaviorOptions {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Colorize output
  #[arg(long, value_enum, default_value = "auto", value_name = "WHEN")]
  pub color: ColorOption,
}

/// Color output options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorOption {
  Auto,
  Always,
  Never,
}

/// Shells supported by `repo-keychain completions`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
  Bash,
  Zsh,
  Fish,
  Powershell,
  Elvish,
}

impl Cli {
  /// Validate CLI arguments
  ///
  /// Returns an error if the CLI configuration is invalid.
  pub fn validate(&self) -> Result<(), String> {
    if let Command::Save {
      target,
      password,
      password_stdin,
      ..
    } = &self.command
    {
      if target.host.is_none() && target.ssh_key_file.is_none() {
        return Err("save requires --host or --ssh-key-file".to_string());
      }

      if target.ssh_key_file.is_some() && password.is_none() && !password_stdin {
        return Err("--ssh-key-file requires a passphrase via --password or --password-stdin".to_string());
      }
    }

    Ok(())
  }
}

/// Parse CLI arguments, initialize shared services, and dispatch to the chosen
/// command.
pub fn run() {
  let cli = Cli::parse();

  init_tracing(&cli.behavior);

  let colors = ColorScheme::new(cli.behavior.color);

  if let Err(e) = cli.validate() {
    eprintln!("{} {}", colors.error("Error:"), e);
    process::exit(4); // Invalid arguments exit code
  }

  match &cli.command {
    Command::Get {
      target,
      json,
      show_password,
    } => {
      handle_get_command(target, *json, *show_password, &cli, &colors);
    }
    Command::Save {
      target,
      user,
      password,
      password_stdin,
    } => {
      handle_save_command(target, user.as_deref(), password.as_deref(), *password_stdin, &cli, &colors);
    }
    Command::Reset { host } => {
      handle_reset_command(host, &cli, &colors);
    }
    Command::Version { json, short } => {
      handle_version_command(*json, *short, &colors);
    }
    Command::Completions { shell } => {
      handle_completions_command(*shell);
    }
  }
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Get custom styles for clap help output
fn get_clap_styles() -> clap::builder::Styles {
  use clap::builder::styling::{AnsiColor, Effects};

  clap::builder::Styles::styled()
    .header(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::BrightCyan.on_default())
    .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
    .valid(AnsiColor::BrightGreen.on_default())
    .invalid(AnsiColor::BrightRed.on_default())
}
