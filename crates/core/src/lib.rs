//! ZZT Core - Shared domain types.
//!
//! This crate provides the types used across all ZZT Tours components:
//! - `site` - Public web service (legacy redirects, JSON API)
//! - `cli` - Diagnostic probes, HTTP smoke test and migrations
//!
//! # Architecture
//!
//! The core crate contains only types and parsing logic - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, emails, quotation numbers, vehicle image lists,
//!   the image-domain allowlist and locales

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
