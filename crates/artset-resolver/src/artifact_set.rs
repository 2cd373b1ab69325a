//! The artifact set capability and the shared empty set.

use std::fmt;
use std::sync::{Arc, LazyLock};

use artset_core::artifact::ResolvedArtifact;
use artset_core::task::TaskDependency;
use artset_util::errors::ArtsetResult;
use indexmap::IndexSet;

use crate::visitor::ArtifactVisitor;

/// A collection of resolved artifacts.
///
/// Implemented by leaf sets produced by resolution and by
/// [`CompositeArtifactSet`](crate::composite::CompositeArtifactSet), so
/// composites can nest without callers telling them apart.
pub trait ResolvedArtifactSet: fmt::Debug + Send + Sync {
    /// The distinct artifacts of this set, in the order they were produced.
    fn artifacts(&self) -> ArtsetResult<IndexSet<ResolvedArtifact>>;

    /// Append the build dependencies required to produce this set's artifacts.
    fn collect_build_dependencies(&self, dest: &mut Vec<TaskDependency>);

    /// Drive `visitor` over the contents of this set.
    fn visit(&self, visitor: &mut dyn ArtifactVisitor);
}

/// Shared handle to an artifact set.
pub type ArtifactSetRef = Arc<dyn ResolvedArtifactSet>;

#[derive(Debug)]
struct EmptyArtifactSet;

impl ResolvedArtifactSet for EmptyArtifactSet {
    fn artifacts(&self) -> ArtsetResult<IndexSet<ResolvedArtifact>> {
        Ok(IndexSet::new())
    }

    fn collect_build_dependencies(&self, _dest: &mut Vec<TaskDependency>) {}

    fn visit(&self, _visitor: &mut dyn ArtifactVisitor) {}
}

static EMPTY: LazyLock<ArtifactSetRef> =
    LazyLock::new(|| Arc::new(EmptyArtifactSet) as ArtifactSetRef);

/// The process-wide empty set: no artifacts, no dependencies, visits nothing.
pub fn empty() -> ArtifactSetRef {
    Arc::clone(&*EMPTY)
}

/// Whether `set` is the shared empty set.
///
/// Compares identity, not contents: a set that merely happens to be empty
/// is not the empty set.
pub fn is_empty_set(set: &ArtifactSetRef) -> bool {
    Arc::ptr_eq(set, &*EMPTY)
}
