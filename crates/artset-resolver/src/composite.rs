//! Composition of artifact sets.
//!
//! A [`CompositeArtifactSet`] merges several sets into one. Artifacts are
//! deduplicated, build dependencies are concatenated, and visiting delivers
//! every file and failure of the whole composite before any artifact.

use std::sync::Arc;

use artset_core::artifact::{ComponentArtifactId, ResolvedArtifact};
use artset_core::attributes::AttributeContainer;
use artset_core::task::TaskDependency;
use artset_util::errors::{ArtsetError, ArtsetResult};
use indexmap::IndexSet;

use crate::artifact_set::{self, ArtifactSetRef, ResolvedArtifactSet};
use crate::visitor::ArtifactVisitor;

/// An artifact set made of two or more non-empty sets, in order.
#[derive(Debug)]
pub struct CompositeArtifactSet {
    sets: Vec<ArtifactSetRef>,
}

impl CompositeArtifactSet {
    /// Combine `sets` into one.
    ///
    /// Occurrences of the shared empty set are dropped. If nothing is left the
    /// empty set is returned, and a single remaining set is returned as is.
    pub fn of(sets: impl IntoIterator<Item = ArtifactSetRef>) -> ArtifactSetRef {
        let sets = sets.into_iter();
        let mut filtered = Vec::with_capacity(sets.size_hint().0);
        let mut inputs = 0usize;
        for set in sets {
            inputs += 1;
            if !artifact_set::is_empty_set(&set) {
                filtered.push(set);
            }
        }
        tracing::trace!(
            "Composing {inputs} artifact sets ({} non-empty)",
            filtered.len()
        );

        match filtered.len() {
            0 => artifact_set::empty(),
            1 => filtered.swap_remove(0),
            _ => Arc::new(Self { sets: filtered }),
        }
    }

    /// The composed sets, in visiting order.
    pub fn sets(&self) -> &[ArtifactSetRef] {
        &self.sets
    }
}

impl ResolvedArtifactSet for CompositeArtifactSet {
    fn artifacts(&self) -> ArtsetResult<IndexSet<ResolvedArtifact>> {
        let mut all = IndexSet::new();
        for set in &self.sets {
            all.extend(set.artifacts()?);
        }
        Ok(all)
    }

    fn collect_build_dependencies(&self, dest: &mut Vec<TaskDependency>) {
        for set in &self.sets {
            set.collect_build_dependencies(dest);
        }
    }

    fn visit(&self, visitor: &mut dyn ArtifactVisitor) {
        let mut deferred = DeferredArtifactVisitor::new(visitor);
        for set in &self.sets {
            set.visit(&mut deferred);
        }
        deferred.flush();
    }
}

/// Forwards files and failures straight to the wrapped visitor and holds
/// artifacts back until [`flush`](Self::flush).
struct DeferredArtifactVisitor<'a> {
    visitor: &'a mut dyn ArtifactVisitor,
    artifacts: Vec<(AttributeContainer, ResolvedArtifact)>,
}

impl<'a> DeferredArtifactVisitor<'a> {
    fn new(visitor: &'a mut dyn ArtifactVisitor) -> Self {
        Self {
            visitor,
            artifacts: Vec::new(),
        }
    }

    /// Replay the held artifacts in the order they were received.
    fn flush(self) {
        let Self { visitor, artifacts } = self;
        tracing::trace!("Replaying {} deferred artifacts", artifacts.len());
        for (variant, artifact) in &artifacts {
            visitor.visit_artifact(variant, artifact);
        }
    }
}

impl ArtifactVisitor for DeferredArtifactVisitor<'_> {
    fn visit_artifact(&mut self, variant: &AttributeContainer, artifact: &ResolvedArtifact) {
        self.artifacts.push((variant.clone(), artifact.clone()));
    }

    fn include_files(&self) -> bool {
        self.visitor.include_files()
    }

    fn visit_file(
        &mut self,
        artifact_id: &ComponentArtifactId,
        variant: &AttributeContainer,
        file: &std::path::Path,
    ) {
        self.visitor.visit_file(artifact_id, variant, file);
    }

    fn visit_failure(&mut self, failure: ArtsetError) {
        self.visitor.visit_failure(failure);
    }
}
