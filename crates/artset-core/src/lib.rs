//! Core data types for artset.
//!
//! This crate defines the values that flow through artifact sets and their
//! visitors: component and artifact identifiers, resolved artifacts, variant
//! attribute containers, build-dependency handles, and the configuration of
//! an artifact view.
//!
//! This crate is intentionally free of trait objects and network I/O.

pub mod artifact;
pub mod attributes;
pub mod config;
pub mod task;
