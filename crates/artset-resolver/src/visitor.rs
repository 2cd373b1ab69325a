//! The visitor protocol driven by artifact sets, plus the collecting
//! visitors used to read a set into plain values.

use std::path::{Path, PathBuf};

use artset_core::artifact::{ComponentArtifactId, ResolvedArtifact};
use artset_core::attributes::AttributeContainer;
use artset_util::errors::{ArtsetError, ArtsetResult};
use indexmap::IndexSet;

/// Receives the contents of an artifact set.
pub trait ArtifactVisitor {
    /// Called for each artifact, with the variant it was selected from.
    fn visit_artifact(&mut self, variant: &AttributeContainer, artifact: &ResolvedArtifact);

    /// Whether file-level results should be visited at all.
    fn include_files(&self) -> bool;

    /// Called for each file that is not backed by a resolved artifact.
    /// Only called when [`include_files`](Self::include_files) returns `true`.
    fn visit_file(
        &mut self,
        artifact_id: &ComponentArtifactId,
        variant: &AttributeContainer,
        file: &Path,
    );

    /// Called for each failure. Failures are data: visiting continues.
    fn visit_failure(&mut self, failure: ArtsetError);
}

/// Collects the distinct artifacts of a set. Does not ask for files.
#[derive(Debug, Default)]
pub struct ArtifactCollectingVisitor {
    artifacts: IndexSet<ResolvedArtifact>,
    failures: Vec<ArtsetError>,
}

impl ArtifactCollectingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artifacts(&self) -> &IndexSet<ResolvedArtifact> {
        &self.artifacts
    }

    pub fn failures(&self) -> &[ArtsetError] {
        &self.failures
    }

    pub fn into_parts(self) -> (IndexSet<ResolvedArtifact>, Vec<ArtsetError>) {
        (self.artifacts, self.failures)
    }

    /// The collected artifacts, or the reported failure(s).
    pub fn into_result(self) -> ArtsetResult<IndexSet<ResolvedArtifact>> {
        match ArtsetError::from_failures(self.failures) {
            Some(err) => Err(err),
            None => Ok(self.artifacts),
        }
    }
}

impl ArtifactVisitor for ArtifactCollectingVisitor {
    fn visit_artifact(&mut self, _variant: &AttributeContainer, artifact: &ResolvedArtifact) {
        if !self.artifacts.contains(artifact) {
            self.artifacts.insert(artifact.clone());
        }
    }

    fn include_files(&self) -> bool {
        false
    }

    fn visit_file(&mut self, _: &ComponentArtifactId, _: &AttributeContainer, _: &Path) {}

    fn visit_failure(&mut self, failure: ArtsetError) {
        self.failures.push(failure);
    }
}

/// Collects the distinct files of a set: artifact files and, when asked for,
/// plain file dependencies.
#[derive(Debug)]
pub struct FileCollectingVisitor {
    include_files: bool,
    files: IndexSet<PathBuf>,
    failures: Vec<ArtsetError>,
}

impl Default for FileCollectingVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCollectingVisitor {
    /// A visitor that collects artifact files and file dependencies.
    pub fn new() -> Self {
        Self {
            include_files: true,
            files: IndexSet::new(),
            failures: Vec::new(),
        }
    }

    /// A visitor that collects artifact files only.
    pub fn artifact_files_only() -> Self {
        Self {
            include_files: false,
            ..Self::new()
        }
    }

    pub fn files(&self) -> &IndexSet<PathBuf> {
        &self.files
    }

    pub fn failures(&self) -> &[ArtsetError] {
        &self.failures
    }

    pub fn into_parts(self) -> (IndexSet<PathBuf>, Vec<ArtsetError>) {
        (self.files, self.failures)
    }

    /// The collected files, or the reported failure(s).
    pub fn into_result(self) -> ArtsetResult<IndexSet<PathBuf>> {
        match ArtsetError::from_failures(self.failures) {
            Some(err) => Err(err),
            None => Ok(self.files),
        }
    }
}

impl ArtifactVisitor for FileCollectingVisitor {
    fn visit_artifact(&mut self, _variant: &AttributeContainer, artifact: &ResolvedArtifact) {
        if !self.files.contains(&artifact.file) {
            self.files.insert(artifact.file.clone());
        }
    }

    fn include_files(&self) -> bool {
        self.include_files
    }

    fn visit_file(&mut self, _: &ComponentArtifactId, _: &AttributeContainer, file: &Path) {
        if !self.files.contains(file) {
            self.files.insert(file.to_path_buf());
        }
    }

    fn visit_failure(&mut self, failure: ArtsetError) {
        self.failures.push(failure);
    }
}
