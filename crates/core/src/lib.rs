//! `tridocs-core` -- pure domain logic for the tridocs client tools.
//!
//! Everything in this crate is synchronous and I/O-free: content hashing,
//! instruction text parsing, step arithmetic, and artifact naming. The HTTP
//! binding lives in `tridocs-client`; the command-line front end in
//! `tridocs-cli`.

pub mod artifact;
pub mod error;
pub mod hashing;
pub mod instruction;
pub mod steps;

pub use error::CoreError;
