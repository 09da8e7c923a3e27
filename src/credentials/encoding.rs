//! Composite blob encoding for host entries.
//!
//! A host entry stores username and password in one string:
//!
//! ```text
//! <username>@<password>
//! ```
//!
//! `\` and `@` inside the username are escaped with a preceding `\`. The
//! password is stored raw, since everything after the first unescaped `@`
//! belongs to it. A missing password drops the `@` entirely, and a missing
//! username is written as the marker `\!`. Plain `alice@hunter2` blobs
//! written by other password safes therefore decode as expected.

use super::{CredentialError, Credentials};

const SEPARATOR: char = '@';
const ESCAPE: char = '\\';
const ABSENT_USERNAME: char = '!';

/// Encodes `credentials` into a single reversible string.
pub fn join_data(credentials: &Credentials) -> String {
  let mut data = String::new();

  match &credentials.username {
    Some(username) => {
      for c in username.chars() {
        if c == ESCAPE || c == SEPARATOR {
          data.push(ESCAPE);
        }
        data.push(c);
      }
    }
    None => {
      data.push(ESCAPE);
      data.push(ABSENT_USERNAME);
    }
  }

  if let Some(password) = &credentials.password {
    data.push(SEPARATOR);
    data.push_str(password);
  }

  data
}

/// Decodes a string produced by [`join_data`].
///
/// # Errors
/// Returns [`CredentialError::MalformedBlob`] when the username part contains
/// an unknown escape sequence, ends in a dangling `\`, or has data after the
/// absent-username marker.
pub fn split_data(data: &str) -> Result<Credentials, CredentialError> {
  let mut username = Some(String::new());
  let mut chars = data.char_indices();

  while let Some((index, c)) = chars.next() {
    match c {
      SEPARATOR => {
        return Ok(Credentials {
          username,
          password: Some(data[index + c.len_utf8()..].to_string()),
        });
      }
      ESCAPE => match chars.next().map(|(_, escaped)| escaped) {
        Some(ABSENT_USERNAME) if index == 0 => username = None,
        Some(escaped @ (ESCAPE | SEPARATOR)) => push_username_char(&mut username, escaped, index)?,
        Some(other) => {
          return Err(CredentialError::MalformedBlob(format!(
            "invalid escape sequence `\\{other}` at byte {index}"
          )));
        }
        None => {
          return Err(CredentialError::MalformedBlob(
            "dangling escape character at end of username".to_string(),
          ));
        }
      },
      other => push_username_char(&mut username, other, index)?,
    }
  }

  Ok(Credentials {
    username,
    password: None,
  })
}

fn push_username_char(username: &mut Option<String>, c: char, index: usize) -> Result<(), CredentialError> {
  match username {
    Some(name) => {
      name.push(c);
      Ok(())
    }
    None => Err(CredentialError::MalformedBlob(format!(
      "unexpected data at byte {index} after the absent-username marker"
    ))),
  }
}
