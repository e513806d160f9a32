//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! business logic: configuration, logging setup and opening the store.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`paths`] - Default locations under `~/.sakila/`

pub mod bootstrap;
pub mod config;
pub mod paths;
