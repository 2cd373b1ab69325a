use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Coordinates of a resolved module component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleComponentId {
    pub group: String,
    pub module: String,
    pub version: String,
}

impl ModuleComponentId {
    pub fn new(
        group: impl Into<String>,
        module: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            module: module.into(),
            version: version.into(),
        }
    }

    /// Parse `"group:module:version"` into coordinates.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [group, module, version]
                if !group.is_empty() && !module.is_empty() && !version.is_empty() =>
            {
                Some(Self::new(*group, *module, *version))
            }
            _ => None,
        }
    }
}

impl fmt::Display for ModuleComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.module, self.version)
    }
}

/// The component an artifact belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentId {
    /// A module resolved from a repository.
    Module(ModuleComponentId),
    /// A file with no component metadata, named by its display name.
    Opaque(String),
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module(id) => write!(f, "{id}"),
            Self::Opaque(name) => write!(f, "{name}"),
        }
    }
}

/// Identity of one artifact file of a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentArtifactId {
    pub component: ComponentId,
    pub name: String,
    #[serde(default)]
    pub classifier: Option<String>,
    pub extension: String,
}

impl ComponentArtifactId {
    /// The main `jar` artifact of a module.
    pub fn module(component: ModuleComponentId, name: impl Into<String>) -> Self {
        Self {
            component: ComponentId::Module(component),
            name: name.into(),
            classifier: None,
            extension: "jar".to_string(),
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Identify a local file that has no component metadata.
    pub fn for_file(path: &Path) -> Self {
        let display = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let name = path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| display.clone());
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            component: ComponentId::Opaque(display),
            name,
            classifier: None,
            extension,
        }
    }

    /// File name the artifact is published under, e.g. `lib-1.0-sources.jar`.
    pub fn file_name(&self) -> String {
        match &self.component {
            ComponentId::Opaque(display) => display.clone(),
            ComponentId::Module(module) => {
                let mut name = format!("{}-{}", self.name, module.version);
                if let Some(classifier) = &self.classifier {
                    name.push('-');
                    name.push_str(classifier);
                }
                if !self.extension.is_empty() {
                    name.push('.');
                    name.push_str(&self.extension);
                }
                name
            }
        }
    }
}

impl fmt::Display for ComponentArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.component {
            ComponentId::Opaque(display) => write!(f, "{display}"),
            ComponentId::Module(module) => write!(f, "{} ({module})", self.file_name()),
        }
    }
}

/// A resolved artifact: its identity plus the local file holding it.
///
/// Two artifacts are the same artifact when both fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    pub id: ComponentArtifactId,
    pub file: PathBuf,
}

impl ResolvedArtifact {
    pub fn new(id: ComponentArtifactId, file: impl Into<PathBuf>) -> Self {
        Self {
            id,
            file: file.into(),
        }
    }
}

impl fmt::Display for ResolvedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
