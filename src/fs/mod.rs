//! Filesystem utilities for mindiff.
//!
//! Output files are written atomically so an interrupted run never leaves a
//! half-written diff behind.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};
