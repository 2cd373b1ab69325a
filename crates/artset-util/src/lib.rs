//! Shared utilities for artset.
//!
//! This crate provides the cross-cutting error type used by all other artset
//! crates. Failures reported while reading artifact sets travel as values of
//! [`errors::ArtsetError`], so the type is cheap to clone and carries
//! `miette` diagnostics for callers that render them.

pub mod errors;
