//! Tests for local tree construction from configured sources.

use pretty_assertions::assert_eq;

use l10n_config::{ProjectConfig, SyncConfiguration, TokenReplacer};
use l10n_sync::{Error, build_local_tree};
use l10n_test_utils::TestProject;

fn project_from(yaml: &str) -> ProjectConfig {
    let configuration = SyncConfiguration::parse(yaml, &TokenReplacer::default()).unwrap();
    configuration.projects.into_iter().next().unwrap()
}

const NESTED_CONFIG: &str = r#"
projects:
  - id: 10
    sources:
      - dir: "src"
        remote_path:
          dir: "/res"
          filename: "%file_pathname%"
        export_pattern:
          dir: "/exported"
          filename: "%file_pathname%"
        includes:
          - pattern: "**/*.properties"
"#;

#[test]
fn test_builds_tree_keyed_by_remote_paths() {
    let fixture = TestProject::new();
    fixture.write_file("src/Messages.properties", "a=1");
    fixture.write_file("src/help/Help.properties", "b=2");
    fixture.write_file("src/readme.txt", "not included");

    let tree = build_local_tree(fixture.root(), &project_from(NESTED_CONFIG)).unwrap();

    let file = tree.get("/res/Messages.properties").expect("top-level file");
    let entry = tree.payload(file).unwrap();
    assert_eq!(entry.name, "Messages.properties");
    assert_eq!(
        entry.export_options.export_pattern,
        "/exported/Messages.properties"
    );

    let nested = tree
        .get("/res/help/Help.properties")
        .expect("nested file keyed by relative pathname");
    assert_eq!(tree.payload(nested).unwrap().name, "Help.properties");
    assert!(!tree.has_payload(tree.get("/res/help").unwrap()));

    assert_eq!(tree.get("/res/readme.txt"), None, "pattern excludes .txt");
}

#[test]
fn test_empty_files_are_skipped() {
    let fixture = TestProject::new();
    fixture.write_file("src/Messages.properties", "a=1");
    fixture.write_file("src/Empty.properties", "");

    let tree = build_local_tree(fixture.root(), &project_from(NESTED_CONFIG)).unwrap();

    assert!(tree.get("/res/Messages.properties").is_some());
    assert_eq!(tree.get("/res/Empty.properties"), None);
}

#[test]
fn test_missing_source_dir_fails() {
    let fixture = TestProject::new();

    let error = build_local_tree(fixture.root(), &project_from(NESTED_CONFIG)).unwrap_err();

    assert!(matches!(error, Error::MissingSourceDir { .. }));
}

#[test]
fn test_source_dir_that_is_a_file_fails() {
    let fixture = TestProject::new();
    fixture.write_file("src", "a plain file");

    let error = build_local_tree(fixture.root(), &project_from(NESTED_CONFIG)).unwrap_err();

    assert!(matches!(error, Error::NotADirectory { .. }));
}

#[test]
fn test_two_files_mapping_to_one_remote_path_fails() {
    let flattening = r#"
projects:
  - id: 10
    sources:
      - dir: "src"
        remote_path:
          dir: "/res"
          filename: "%file_name%%file_extension%"
        export_pattern:
          dir: "/exported"
          filename: "%file_name%%file_extension%"
        includes:
          - pattern: "**/*.properties"
"#;
    let fixture = TestProject::new();
    fixture.write_file("src/a/Messages.properties", "a=1");
    fixture.write_file("src/b/Messages.properties", "b=2");

    let error = build_local_tree(fixture.root(), &project_from(flattening)).unwrap_err();

    match error {
        Error::PathClash {
            path,
            existing,
            incoming,
        } => {
            assert_eq!(path, "/res/Messages.properties");
            assert_ne!(existing, incoming);
        }
        other => panic!("expected PathClash, got {other:?}"),
    }
}

#[test]
fn test_file_set_options_are_carried_on_entries() {
    let config = r#"
projects:
  - id: 10
    sources:
      - dir: "src"
        remote_path:
          dir: "/res"
          filename: "%file_name%%file_extension%"
        export_pattern:
          dir: "/exported"
          filename: "%file_name%_de%file_extension%"
        includes:
          - pattern: "**/*.xml"
            type: "xml"
            translatable_elements:
              - "/resources/string"
"#;
    let fixture = TestProject::new();
    fixture.write_file("src/strings.xml", "<resources/>");

    let tree = build_local_tree(fixture.root(), &project_from(config)).unwrap();

    let node = tree.get("/res/strings.xml").unwrap();
    let entry = tree.payload(node).unwrap();
    assert_eq!(entry.file_type.as_deref(), Some("xml"));
    assert_eq!(
        entry
            .import_options
            .as_ref()
            .unwrap()
            .translatable_elements,
        vec!["/resources/string".to_string()]
    );
    assert_eq!(entry.export_options.export_pattern, "/exported/strings_de.xml");
}

#[test]
fn test_remote_filename_override_applies_per_file_set() {
    let config = r#"
projects:
  - id: 10
    sources:
      - dir: "src"
        remote_path:
          dir: "/res"
          filename: "%file_name%%file_extension%"
        export_pattern:
          dir: "/exported"
          filename: "%file_name%%file_extension%"
        includes:
          - pattern: "**/*.properties"
            remote_filename: "renamed/%file_name%%file_extension%"
"#;
    let fixture = TestProject::new();
    fixture.write_file("src/Messages.properties", "a=1");

    let tree = build_local_tree(fixture.root(), &project_from(config)).unwrap();

    assert!(tree.get("/res/renamed/Messages.properties").is_some());
    assert_eq!(tree.get("/res/Messages.properties"), None);
}

#[test]
fn test_project_without_sources_builds_empty_tree() {
    let fixture = TestProject::new();
    let project = project_from("projects:\n  - id: 10\n");

    let tree = build_local_tree(fixture.root(), &project).unwrap();

    assert!(!tree.has_children(tree.root()));
}
