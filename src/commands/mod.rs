//! # CLI Command Implementations
//!
//! `run` performs the provision-then-merge flow for a validated
//! configuration and reports progress to the user.

pub mod run;
