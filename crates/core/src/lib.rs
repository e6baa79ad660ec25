//! Domain logic for the Opsdesk backend.
//!
//! This crate is free of I/O: everything here is a pure function or a plain
//! type shared by the `opsdesk-db` and `opsdesk-api` crates.

pub mod activity;
pub mod error;
pub mod permissions;
pub mod reporting;
pub mod roles;
pub mod types;
