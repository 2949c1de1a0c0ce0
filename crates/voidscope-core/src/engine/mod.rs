//! # Engine Module
//!
//! Stateful services layered over the pure generators in [`crate::core`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Generation parameters and their validating builder
//! - **Error Handling** ([`error`]) - Engine-level error types
//! - **Caching** ([`cache`]) - Caller-owned memoization of structures per configuration
//! - **Exploration State** ([`session`]) - Current lattice/void type and the selected void
//! - **View Geometry** ([`view`]) - Highlighting, external atoms, and connector segments
//!   for a selected void
//!
//! Nothing here is global: every cache and session is an explicit value, so two
//! callers (or two tests) never observe each other's state.

pub mod cache;
pub mod config;
pub mod error;
pub mod session;
pub mod view;
