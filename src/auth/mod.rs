//! Authentication module for Ariomex API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Millisecond timestamps injected into signed requests
//! - HMAC-SHA256 signature generation for private endpoints

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use signature::sign_payload;
pub use timestamp::{FixedTimestamp, SystemTimestamp, TimestampProvider};
