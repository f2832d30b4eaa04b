//! Filesystem utilities for physlock.
//!
//! Control files are written in place (see [`crate::control`]); the files
//! physlock owns itself go through [`atomic_write`] so they are never seen
//! half-written.

pub mod atomic;

pub use atomic::atomic_write;
