//! repo-keychain - Store credentials for settings repository remotes
//!
//! This is the main entry point for the CLI application.

fn main() {
  repo_keychain::cli::run();
}
