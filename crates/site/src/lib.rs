//! ZZT Site library.
//!
//! This crate provides the web service as a library so the router, the
//! repositories and the configuration can be tested and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
