//! Credential store for settings repository remotes
//!
//! This library saves and looks up one credential per repository host or SSH
//! key file, delegating storage to a pluggable secret vault.

pub mod cli;
pub mod color;
pub mod commands;
pub mod credentials;
pub mod vault;
