//! Configured reads of an artifact set.

use std::path::PathBuf;

use artset_core::artifact::ResolvedArtifact;
use artset_core::config::ArtifactViewConfig;
use artset_core::task::TaskDependency;
use artset_util::errors::{ArtsetError, ArtsetResult};
use indexmap::IndexSet;

use crate::artifact_set::ArtifactSetRef;
use crate::visitor::{ArtifactCollectingVisitor, FileCollectingVisitor};

/// Reads an artifact set as files or artifacts according to an
/// [`ArtifactViewConfig`].
#[derive(Debug, Clone)]
pub struct ArtifactView {
    set: ArtifactSetRef,
    config: ArtifactViewConfig,
}

impl ArtifactView {
    pub fn new(set: ArtifactSetRef, config: ArtifactViewConfig) -> Self {
        Self { set, config }
    }

    pub fn config(&self) -> &ArtifactViewConfig {
        &self.config
    }

    /// The distinct files of the set, in visiting order.
    pub fn files(&self) -> ArtsetResult<IndexSet<PathBuf>> {
        let mut visitor = if self.config.include_files {
            FileCollectingVisitor::new()
        } else {
            FileCollectingVisitor::artifact_files_only()
        };
        self.set.visit(&mut visitor);
        let (files, failures) = visitor.into_parts();
        tracing::debug!(
            "Collected {} files with {} failures",
            files.len(),
            failures.len()
        );
        self.finish(files, failures)
    }

    /// The distinct artifacts of the set, in visiting order.
    pub fn artifacts(&self) -> ArtsetResult<IndexSet<ResolvedArtifact>> {
        let mut visitor = ArtifactCollectingVisitor::new();
        self.set.visit(&mut visitor);
        let (artifacts, failures) = visitor.into_parts();
        tracing::debug!(
            "Collected {} artifacts with {} failures",
            artifacts.len(),
            failures.len()
        );
        self.finish(artifacts, failures)
    }

    /// Build dependencies of the set, in the order the set reports them.
    pub fn build_dependencies(&self) -> Vec<TaskDependency> {
        let mut deps = Vec::new();
        self.set.collect_build_dependencies(&mut deps);
        deps
    }

    fn finish<T>(&self, value: T, failures: Vec<ArtsetError>) -> ArtsetResult<T> {
        if self.config.lenient {
            for failure in &failures {
                tracing::warn!("Ignoring artifact failure in lenient view: {failure}");
            }
            return Ok(value);
        }
        match ArtsetError::from_failures(failures) {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
