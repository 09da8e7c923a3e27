//! End-to-end tests for the vault-backed credential store
//!
//! These tests drive the public store API against a recording vault and a
//! real file vault, covering the save/get/reset workflows and failure paths.

mod common;

use common::fixtures::{self, HOST, SSH_KEY_FILE};
use common::recording_vault::RecordingVault;
use repo_keychain::credentials::{CredentialError, Credentials, CredentialsStore, VaultCredentialsStore};
use repo_keychain::vault::{FileVault, VaultError};

#[test]
fn test_save_then_get_host_credentials() {
  let vault = RecordingVault::new();
  let store = VaultCredentialsStore::new(&vault);

  store.save(Some(HOST), &fixtures::https_credentials(), None).unwrap();
  let found = store.get(Some(HOST), None).unwrap();

  assert_eq!(found, Some(Credentials::new("alice", "hunter2")));
  assert_eq!(vault.keys(), vec!["ics-github.com", "ics-github.com"]);
}

#[test]
fn test_save_then_get_ssh_key_passphrase() {
  let vault = RecordingVault::new();
  let store = VaultCredentialsStore::new(&vault);

  store
    .save(Some(HOST), &fixtures::ssh_credentials(), Some(SSH_KEY_FILE))
    .unwrap();

  assert_eq!(
    store.get(Some(HOST), Some(SSH_KEY_FILE)).unwrap(),
    Some(Credentials::new("id_rsa_path", "passphrase123"))
  );
  assert_eq!(vault.raw("ics-id_rsa_path"), Some(b"passphrase123".to_vec()));
}

#[test]
fn test_host_and_key_entries_do_not_collide() {
  let vault = RecordingVault::new();
  let store = VaultCredentialsStore::new(&vault);

  store
    .save(Some(HOST), &fixtures::ssh_credentials(), Some(SSH_KEY_FILE))
    .unwrap();

  assert_eq!(store.get(Some(HOST), None).unwrap(), None);
}

#[test]
fn test_get_without_host_never_touches_vault() {
  let vault = RecordingVault::new();
  let store = VaultCredentialsStore::new(&vault);

  assert_eq!(store.get(None, None).unwrap(), None);
  assert_eq!(store.get(None, Some(SSH_KEY_FILE)).unwrap(), None);

  assert_eq!(vault.calls(), 0);
}

#[test]
fn test_each_operation_is_one_vault_call() {
  let vault = RecordingVault::new();
  let store = VaultCredentialsStore::new(&vault);

  store.save(Some(HOST), &fixtures::https_credentials(), None).unwrap();
  assert_eq!((vault.reads(), vault.writes()), (0, 1));

  store.get(Some(HOST), None).unwrap();
  assert_eq!((vault.reads(), vault.writes()), (1, 1));

  store.reset(HOST).unwrap();
  assert_eq!((vault.reads(), vault.writes()), (1, 2));
}

#[test]
fn test_reset_then_get_is_none() {
  let vault = RecordingVault::new();
  let store = VaultCredentialsStore::new(&vault);
  store.save(Some(HOST), &fixtures::https_credentials(), None).unwrap();

  store.reset(HOST).unwrap();

  assert_eq!(store.get(Some(HOST), None).unwrap(), None);
}

#[test]
fn test_reset_unknown_host_succeeds() {
  let vault = RecordingVault::new();
  let store = VaultCredentialsStore::new(&vault);

  store.reset("never-saved.example").unwrap();
  store.reset("never-saved.example").unwrap();

  assert_eq!(vault.writes(), 2);
}

#[test]
fn test_reset_ignores_key_file_entries() {
  let vault = RecordingVault::new();
  let store = VaultCredentialsStore::new(&vault);
  store
    .save(Some(HOST), &fixtures::ssh_credentials(), Some(SSH_KEY_FILE))
    .unwrap();

  store.reset(HOST).unwrap();

  assert!(store.get(Some(HOST), Some(SSH_KEY_FILE)).unwrap().is_some());
  assert_eq!(vault.keys().last().map(String::as_str), Some("ics-github.com"));
}

#[test]
fn test_awkward_values_round_trip_through_store() {
  let vault = RecordingVault::new();
  let store = VaultCredentialsStore::new(&vault);

  for credentials in fixtures::awkward_credentials() {
    store.save(Some(HOST), &credentials, None).unwrap();
    assert_eq!(store.get(Some(HOST), None).unwrap(), Some(credentials));
  }
}

#[test]
fn test_vault_faults_propagate_unchanged() {
  let vault = RecordingVault::new();
  vault.fail_with("keychain is locked");
  let store = VaultCredentialsStore::new(&vault);

  let err = store.get(Some(HOST), None).unwrap_err();
  match err {
    CredentialError::Vault(VaultError::Backend(message)) => assert_eq!(message, "keychain is locked"),
    other => panic!("unexpected error: {other:?}"),
  }

  assert!(store.reset(HOST).is_err());
  assert!(store.save(Some(HOST), &fixtures::https_credentials(), None).is_err());
}

#[test]
fn test_missing_passphrase_writes_nothing() {
  let vault = RecordingVault::new();
  let store = VaultCredentialsStore::new(&vault);
  let credentials = Credentials {
    username: Some(SSH_KEY_FILE.to_string()),
    password: None,
  };

  let err = store.save(Some(HOST), &credentials, Some(SSH_KEY_FILE)).unwrap_err();

  assert!(matches!(err, CredentialError::MissingPassphrase));
  assert_eq!(vault.calls(), 0);
}

#[test]
#[should_panic]
fn test_save_without_host_or_key_file_panics() {
  let vault = RecordingVault::new();
  let store = VaultCredentialsStore::new(&vault);

  let _ = store.save(None, &fixtures::https_credentials(), None);
}

#[test]
fn test_file_vault_persists_between_stores() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("credentials.json");

  {
    let store = VaultCredentialsStore::new(FileVault::new(&path));
    store.save(Some(HOST), &fixtures::https_credentials(), None).unwrap();
    store
      .save(Some(HOST), &fixtures::ssh_credentials(), Some(SSH_KEY_FILE))
      .unwrap();
  }

  let store = VaultCredentialsStore::new(FileVault::new(&path));
  assert_eq!(store.get(Some(HOST), None).unwrap(), Some(fixtures::https_credentials()));
  assert_eq!(
    store.get(Some(HOST), Some(SSH_KEY_FILE)).unwrap(),
    Some(fixtures::ssh_credentials())
  );

  store.reset(HOST).unwrap();
  assert_eq!(store.get(Some(HOST), None).unwrap(), None);
}

#[test]
fn test_corrupted_file_vault_is_reported() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("credentials.json");
  std::fs::write(&path, "{ definitely not json").unwrap();

  let store = VaultCredentialsStore::new(FileVault::new(&path));
  let err = store.get(Some(HOST), None).unwrap_err();

  assert!(matches!(err, CredentialError::Vault(VaultError::Corrupted(_))));
}
