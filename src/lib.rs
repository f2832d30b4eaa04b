//! physlock: lock all consoles and keep the kernel SysRq key out of reach.
//!
//! The crate is split into the option parser ([`cli`]), the kernel
//! control-file protocol ([`control`], [`sysrq`]), and the lock cycle built on
//! top of them ([`session`], [`commands`]).

pub mod cli;
pub mod commands;
pub mod config;
pub mod control;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod report;
pub mod session;
pub mod state;
pub mod sysrq;
