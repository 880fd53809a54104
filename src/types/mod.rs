//! Common types used across the Ariomex client library.

pub mod common;

pub use common::*;
