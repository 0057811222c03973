//! # Shared Types Crate
//!
//! This crate contains the domain entities exchanged between the validator
//! subsystems and the uniform [`ValidationResult`] shape every validation
//! entry point returns.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Errors as values**: Business-rule violations are reported through
//!   [`ValidationResult`]; only argument-contract violations use `Err`.
//! - **Injected time**: Every "now" is read through a [`TimeSource`].

pub mod cancellation;
pub mod entities;
pub mod errors;
pub mod time;
pub mod validation;

pub use cancellation::*;
pub use entities::*;
pub use errors::*;
pub use time::*;
pub use validation::*;
