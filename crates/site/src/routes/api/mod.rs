//! JSON API handlers.

pub mod packages;
pub mod quotations;
