//! Artifact sets produced directly by resolution.

use std::path::PathBuf;
use std::sync::Arc;

use artset_core::artifact::{ComponentArtifactId, ResolvedArtifact};
use artset_core::attributes::AttributeContainer;
use artset_core::task::TaskDependency;
use artset_util::errors::{ArtsetError, ArtsetResult};
use indexmap::IndexSet;

use crate::artifact_set::{self, ArtifactSetRef, ResolvedArtifactSet};
use crate::visitor::ArtifactVisitor;

/// The artifacts of one resolved variant.
#[derive(Debug)]
pub struct ArtifactBackedSet {
    variant: AttributeContainer,
    artifacts: IndexSet<ResolvedArtifact>,
    build_dependencies: Vec<TaskDependency>,
}

impl ArtifactBackedSet {
    /// Build a set for `variant`. Returns the shared empty set when there
    /// are no artifacts. Duplicate artifacts keep their first position.
    pub fn of(
        variant: AttributeContainer,
        artifacts: impl IntoIterator<Item = ResolvedArtifact>,
        build_dependencies: Vec<TaskDependency>,
    ) -> ArtifactSetRef {
        let artifacts: IndexSet<ResolvedArtifact> = artifacts.into_iter().collect();
        if artifacts.is_empty() {
            return artifact_set::empty();
        }
        Arc::new(Self {
            variant,
            artifacts,
            build_dependencies,
        })
    }
}

impl ResolvedArtifactSet for ArtifactBackedSet {
    fn artifacts(&self) -> ArtsetResult<IndexSet<ResolvedArtifact>> {
        Ok(self.artifacts.clone())
    }

    fn collect_build_dependencies(&self, dest: &mut Vec<TaskDependency>) {
        dest.extend(self.build_dependencies.iter().cloned());
    }

    fn visit(&self, visitor: &mut dyn ArtifactVisitor) {
        for artifact in &self.artifacts {
            visitor.visit_artifact(&self.variant, artifact);
        }
    }
}

/// Local files declared directly, with no component metadata.
#[derive(Debug)]
pub struct FileDependencySet {
    variant: AttributeContainer,
    files: Vec<PathBuf>,
    build_dependencies: Vec<TaskDependency>,
}

impl FileDependencySet {
    pub fn new(
        variant: AttributeContainer,
        files: Vec<PathBuf>,
        build_dependencies: Vec<TaskDependency>,
    ) -> Self {
        Self {
            variant,
            files,
            build_dependencies,
        }
    }
}

impl ResolvedArtifactSet for FileDependencySet {
    fn artifacts(&self) -> ArtsetResult<IndexSet<ResolvedArtifact>> {
        Ok(IndexSet::new())
    }

    fn collect_build_dependencies(&self, dest: &mut Vec<TaskDependency>) {
        dest.extend(self.build_dependencies.iter().cloned());
    }

    fn visit(&self, visitor: &mut dyn ArtifactVisitor) {
        if !visitor.include_files() {
            return;
        }
        for file in &self.files {
            let id = ComponentArtifactId::for_file(file);
            visitor.visit_file(&id, &self.variant, file);
        }
    }
}

/// A set whose resolution failed. Every read reports the failure.
#[derive(Debug)]
pub struct BrokenArtifactSet {
    failure: ArtsetError,
}

impl BrokenArtifactSet {
    pub fn new(failure: ArtsetError) -> Self {
        Self { failure }
    }
}

impl ResolvedArtifactSet for BrokenArtifactSet {
    fn artifacts(&self) -> ArtsetResult<IndexSet<ResolvedArtifact>> {
        Err(self.failure.clone())
    }

    fn collect_build_dependencies(&self, _dest: &mut Vec<TaskDependency>) {}

    fn visit(&self, visitor: &mut dyn ArtifactVisitor) {
        visitor.visit_failure(self.failure.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::visitor::tests::{artifact, Event, RecordingVisitor};

    #[test]
    fn artifact_backed_of_nothing_is_empty_set() {
        let set = ArtifactBackedSet::of(AttributeContainer::empty(), Vec::new(), Vec::new());
        assert!(artifact_set::is_empty_set(&set));
    }

    #[test]
    fn artifact_backed_visits_in_order() {
        let variant = AttributeContainer::empty().with("usage", "java-runtime");
        let set = ArtifactBackedSet::of(
            variant.clone(),
            [artifact("a"), artifact("b"), artifact("a")],
            vec![TaskDependency::new(":a:jar")],
        );

        let artifacts: Vec<_> = set.artifacts().unwrap().into_iter().collect();
        assert_eq!(artifacts, [artifact("a"), artifact("b")]);

        let mut deps = Vec::new();
        set.collect_build_dependencies(&mut deps);
        assert_eq!(deps, [TaskDependency::new(":a:jar")]);

        let mut visitor = RecordingVisitor::new(true);
        set.visit(&mut visitor);
        assert_eq!(
            visitor.events,
            [
                Event::Artifact(variant.clone(), artifact("a")),
                Event::Artifact(variant, artifact("b")),
            ]
        );
    }

    #[test]
    fn file_dependencies_visit_only_when_files_wanted() {
        let file = PathBuf::from("/libs/local.jar");
        let set = FileDependencySet::new(
            AttributeContainer::empty(),
            vec![file.clone()],
            vec![TaskDependency::new(":copyLibs")],
        );
        assert!(set.artifacts().unwrap().is_empty());

        let mut without = RecordingVisitor::new(false);
        set.visit(&mut without);
        assert!(without.events.is_empty());
        assert_eq!(without.include_files_queries.get(), 1);

        let mut with = RecordingVisitor::new(true);
        set.visit(&mut with);
        assert_eq!(
            with.events,
            [Event::File(ComponentArtifactId::for_file(Path::new("/libs/local.jar")), file)]
        );
    }

    #[test]
    fn broken_set_reports_failure_everywhere() {
        let set = BrokenArtifactSet::new(ArtsetError::Resolution {
            message: "could not resolve org.example:missing:1.0".into(),
        });

        let err = set.artifacts().unwrap_err();
        assert!(matches!(err, ArtsetError::Resolution { .. }));

        let mut deps = Vec::new();
        set.collect_build_dependencies(&mut deps);
        assert!(deps.is_empty());

        let mut visitor = RecordingVisitor::new(true);
        set.visit(&mut visitor);
        assert_eq!(
            visitor.events,
            [Event::Failure(
                "Dependency resolution failed: could not resolve org.example:missing:1.0".into()
            )]
        );
    }
}
