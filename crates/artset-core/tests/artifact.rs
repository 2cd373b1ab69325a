use std::path::Path;

use artset_core::artifact::{ComponentArtifactId, ComponentId, ModuleComponentId, ResolvedArtifact};

#[test]
fn module_component_id_parse_valid() {
    let id = ModuleComponentId::parse("com.example:my-lib:1.0.0").unwrap();
    assert_eq!(id.group, "com.example");
    assert_eq!(id.module, "my-lib");
    assert_eq!(id.version, "1.0.0");
}

#[test]
fn module_component_id_parse_two_parts_returns_none() {
    assert!(ModuleComponentId::parse("group:module").is_none());
}

#[test]
fn module_component_id_parse_empty_segment_returns_none() {
    assert!(ModuleComponentId::parse("group::1.0").is_none());
}

#[test]
fn module_component_id_display_roundtrip() {
    let s = "com.example:my-lib:1.0.0";
    assert_eq!(ModuleComponentId::parse(s).unwrap().to_string(), s);
}

#[test]
fn artifact_id_file_name_main_jar() {
    let id = ComponentArtifactId::module(ModuleComponentId::new("org.example", "lib", "1.0"), "lib");
    assert_eq!(id.file_name(), "lib-1.0.jar");
    assert_eq!(id.to_string(), "lib-1.0.jar (org.example:lib:1.0)");
}

#[test]
fn artifact_id_file_name_with_classifier_and_extension() {
    let id = ComponentArtifactId::module(ModuleComponentId::new("org.example", "lib", "1.0"), "lib")
        .with_classifier("sources")
        .with_extension("zip");
    assert_eq!(id.file_name(), "lib-1.0-sources.zip");
}

#[test]
fn artifact_id_for_file() {
    let id = ComponentArtifactId::for_file(Path::new("libs/local.jar"));
    assert_eq!(id.component, ComponentId::Opaque("local.jar".to_string()));
    assert_eq!(id.name, "local");
    assert_eq!(id.extension, "jar");
    assert_eq!(id.to_string(), "local.jar");
}

#[test]
fn resolved_artifacts_equal_by_value() {
    let id = ComponentArtifactId::module(ModuleComponentId::new("org.example", "lib", "1.0"), "lib");
    let a = ResolvedArtifact::new(id.clone(), "/cache/lib-1.0.jar");
    let b = ResolvedArtifact::new(id.clone(), "/cache/lib-1.0.jar");
    let c = ResolvedArtifact::new(id, "/other/lib-1.0.jar");
    assert_eq!(a, b);
    assert_ne!(a, c);
}
