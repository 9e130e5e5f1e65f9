//! Library crate backing the `phantom-silhouette` binary.
//!
//! Command implementations live here so they can be exercised from tests;
//! `main.rs` stays focused on argument parsing and dispatch.

pub mod commands;
pub mod world;
