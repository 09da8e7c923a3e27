//! Sample credentials shared by the integration tests

use repo_keychain::credentials::Credentials;

pub const HOST: &str = "github.com";
pub const SSH_KEY_FILE: &str = "id_rsa_path";

/// Login and password for a plain HTTPS remote
pub fn https_credentials() -> Credentials {
  Credentials::new("alice", "hunter2")
}

/// Key file and passphrase for an SSH remote
pub fn ssh_credentials() -> Credentials {
  Credentials::new(SSH_KEY_FILE, "passphrase123")
}

/// Values that exercise the blob escaping rules
pub fn awkward_credentials() -> Vec<Credentials> {
  vec![
    Credentials::new("me@corp.example", "p@ss@word"),
    Credentials::new(r"DOMAIN\user", r"back\slash"),
    Credentials::new(r"\!", "!"),
    Credentials::new("", ""),
    Credentials::password_only("token-only"),
    Credentials {
      username: Some("no-password".to_string()),
      password: None,
    },
    Credentials::default(),
  ]
}
