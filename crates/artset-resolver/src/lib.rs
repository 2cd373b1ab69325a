//! Resolved artifact sets and their composition.
//!
//! A resolution produces one [`artifact_set::ResolvedArtifactSet`] per
//! resolved variant. [`composite::CompositeArtifactSet`] merges any number of
//! them into a single set with the same contract, and
//! [`view::ArtifactView`] reads a set into files or artifacts.

pub mod artifact_set;
pub mod composite;
pub mod leaf;
pub mod view;
pub mod visitor;
