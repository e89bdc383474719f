//! Shared Module
//!
//! This module contains types and data structures that do not depend on the
//! UI: the contact records exchanged with the CRM API, the profile picture
//! resolver, configuration and error types.
//!
//! # Overview
//!
//! All types here are platform-agnostic and designed for serialization and
//! transmission over HTTP.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Contact types for the CRM lookup API
pub mod contacts;

/// Re-export commonly used types for convenience
pub use error::{LookupError, StorageError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use contacts::{Contact, ContactsResponse};
