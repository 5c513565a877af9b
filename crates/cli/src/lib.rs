//! ZZT CLI library.
//!
//! The command implementations live here so the integration tests can drive
//! them directly; `main.rs` only parses arguments and sets up logging.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
pub mod output;
