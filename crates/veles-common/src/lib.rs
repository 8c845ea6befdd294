//! Common utilities for Veles.
//!
//! This crate provides the foundational types shared by the Veles format
//! crates:
//!
//! - [`BinaryReader`] - Bounds-checked little-endian reading from byte slices
//! - [`Error`] / [`Result`] - The shared binary-parsing error type

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
