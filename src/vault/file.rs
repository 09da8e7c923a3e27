//! JSON file vault.
//!
//! Secrets live in a single JSON document:
//!
//! ```text
//! {
//!   "version": 1,
//!   "entries": {
//!     "ics-github.com": "YWxpY2VAaHVudGVyMg=="
//!   }
//! }
//! ```
//!
//! Values are base64 so arbitrary bytes survive the round trip. Every write
//! replaces the whole document through a temporary file in the same directory,
//! so readers never observe a half-written store. Writers serialize on an
//! advisory lock file next to the store (`credentials.json.lock`), so
//! concurrent saves of different keys do not drop each other's entries.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use fd_lock::RwLock;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{SecretVault, VaultError};

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
  version: u32,
  #[serde(default)]
  entries: BTreeMap<String, String>,
}

impl Default for StoreDocument {
  fn default() -> Self {
    Self {
      version: FORMAT_VERSION,
      entries: BTreeMap::new(),
    }
  }
}

/// A [`SecretVault`] persisted as a JSON document on disk.
///
/// The file is created lazily on the first write. On Unix it is only readable
/// by the owner.
#[derive(Debug, Clone)]
pub struct FileVault {
  path: PathBuf,
}

impl FileVault {
  /// Creates a vault stored at `path`. Nothing is read or written until the
  /// first operation.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Location of the backing JSON document.
  pub fn path(&self) -> &Path {
    &self.path
  }

  fn parent_dir(&self) -> &Path {
    match self.path.parent() {
      Some(dir) if !dir.as_os_str().is_empty() => dir,
      _ => Path::new("."),
    }
  }

  fn lock_path(&self) -> PathBuf {
    let mut name = self.path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
  }

  fn open_lock(&self) -> Result<RwLock<File>, VaultError> {
    std::fs::create_dir_all(self.parent_dir())?;
    let file = OpenOptions::new()
      .read(true)
      .write(true)
      .create(true)
      .truncate(false)
      .open(self.lock_path())?;
    Ok(RwLock::new(file))
  }

  fn load(&self) -> Result<StoreDocument, VaultError> {
    let content = match std::fs::read_to_string(&self.path) {
      Ok(content) => content,
      Err(err) if err.kind() == io::ErrorKind::NotFound => {
        trace!(path = %self.path.display(), "store file missing, treating as empty");
        return Ok(StoreDocument::default());
      }
      Err(err) => return Err(err.into()),
    };

    let document: StoreDocument = serde_json::from_str(&content)
      .map_err(|err| VaultError::Corrupted(format!("{}: {err}", self.path.display())))?;

    if document.version != FORMAT_VERSION {
      return Err(VaultError::Corrupted(format!(
        "{}: unsupported store version {}",
        self.path.display(),
        document.version
      )));
    }

    trace!(path = %self.path.display(), entries = document.entries.len(), "loaded store file");
    Ok(document)
  }

  fn save(&self, document: &StoreDocument) -> Result<(), VaultError> {
    let parent = self.parent_dir();
    std::fs::create_dir_all(parent)?;

    // tempfile creates the file with mode 0600 on Unix; persist keeps it
    let mut file = tempfile::NamedTempFile::new_in(parent)?;
    serde_json::to_writer_pretty(&mut file, document).map_err(io::Error::from)?;
    file.write_all(b"\n")?;
    file.as_file().sync_all()?;
    file.persist(&self.path).map_err(|err| VaultError::Io(err.error))?;

    trace!(path = %self.path.display(), entries = document.entries.len(), "wrote store file");
    Ok(())
  }
}

impl SecretVault for FileVault {
  fn get_secret(&self, key: &str) -> Result<Option<Vec<u8>>, VaultError> {
    let document = self.load()?;
    document
      .entries
      .get(key)
      .map(|encoded| {
        STANDARD
          .decode(encoded)
          .map_err(|err| VaultError::Corrupted(format!("entry {key}: {err}")))
      })
      .transpose()
  }

  fn set_secret(&self, key: &str, value: Option<&[u8]>) -> Result<(), VaultError> {
    // held from load through persist
    let mut lock = self.open_lock()?;
    let _guard = lock.write()?;
    trace!(lock = %self.lock_path().display(), "acquired store lock");

    let mut document = self.load()?;

    match value {
      Some(bytes) => {
        document.entries.insert(key.to_string(), STANDARD.encode(bytes));
      }
      None => {
        if document.entries.remove(key).is_none() {
          return Ok(());
        }
      }
    }

    self.save(&document)
  }
}
