//! mainline CLI library.
//!
//! This crate provides the command implementations behind the `mainline`
//! binary: the batch run loop and the standalone cleanup sweep.

pub mod commands;
