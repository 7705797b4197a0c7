use l10n_config::{Error, PathPair, SyncConfiguration, TokenReplacer};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn no_tokens() -> TokenReplacer {
    TokenReplacer::default()
}

fn parse(content: &str) -> l10n_config::Result<SyncConfiguration> {
    SyncConfiguration::parse(content, &no_tokens())
}

const VALID: &str = r#"
projects:
  - id: 10
    sources:
      - dir: "src/main/resources"
        output_dir: "src/main/translated"
        remote_path:
          dir: "/res"
          filename: "%file_name%%file_extension%"
        export_pattern:
          dir: "/exported"
          filename: "%file_name%_%locale%%file_extension%"
        includes:
          - pattern: "**/Messages.properties"
            type: "properties"
"#;

#[test]
fn test_parse_valid_configuration() {
    let configuration = parse(VALID).unwrap();

    assert_eq!(configuration.projects.len(), 1);
    let project = &configuration.projects[0];
    assert_eq!(project.id, 10);
    let source = &project.sources()[0];
    assert_eq!(source.dir, "src/main/resources");
    assert_eq!(source.effective_output_dir(), "src/main/translated");
    assert_eq!(source.remote_path.dir, "/res");
    assert_eq!(source.includes[0].file_type.as_deref(), Some("properties"));
}

#[test]
fn test_parse_configuration_with_just_projects() {
    let configuration = parse("projects:\n  - id: 1\n").unwrap();

    assert_eq!(configuration.projects.len(), 1);
    assert!(configuration.projects[0].sources().is_empty());
}

#[test]
fn test_output_dir_defaults_to_dir() {
    let content = VALID.replace("        output_dir: \"src/main/translated\"\n", "");
    let configuration = parse(&content).unwrap();

    let source = &configuration.projects[0].sources()[0];
    assert_eq!(source.effective_output_dir(), "src/main/resources");
}

#[test]
fn test_dir_as_single_slash_is_kept() {
    let content = VALID.replace("dir: \"/res\"", "dir: \"/\"");
    let configuration = parse(&content).unwrap();

    let source = &configuration.projects[0].sources()[0];
    assert_eq!(source.remote_path.dir, "/");
}

#[test]
fn test_trailing_slash_is_stripped_from_dirs() {
    let content = VALID.replace("dir: \"/res\"", "dir: \"/res/\"");
    let configuration = parse(&content).unwrap();

    let source = &configuration.projects[0].sources()[0];
    assert_eq!(source.remote_path.dir, "/res");
}

#[test]
fn test_tokens_are_replaced_in_configuration() {
    let tokens = TokenReplacer::new([("%module%".to_string(), "core".to_string())]);
    let content = r#"
projects:
  - id: 10
    sources:
      - dir: "%module%/resources"
        remote_path:
          dir: "/%module%"
          filename: "f"
        export_pattern:
          dir: "/%module%/out"
          filename: "f"
        includes:
          - pattern: "%module%/**"
"#;

    let configuration = SyncConfiguration::parse(content, &tokens).unwrap();

    let source = &configuration.projects[0].sources()[0];
    assert_eq!(source.dir, "core/resources");
    assert_eq!(source.remote_path.dir, "/core");
    assert_eq!(source.export_pattern.dir, "/core/out");
    assert_eq!(source.includes[0].pattern, "core/**");
}

#[rstest]
#[case::no_projects("{}")]
#[case::empty_projects("projects: []\n")]
#[case::missing_project_id("projects:\n  - sources: null\n")]
#[case::non_numeric_project_id("projects:\n  - id: \"abc\"\n")]
fn test_invalid_project_lists_fail(#[case] content: &str) {
    let error = parse(content).unwrap_err();
    assert!(matches!(error, Error::Invalid { .. }));
}

#[test]
fn test_empty_sources_list_is_allowed() {
    let configuration = parse("projects:\n  - id: 1\n    sources: []\n").unwrap();
    assert!(configuration.projects[0].sources().is_empty());
}

#[test]
fn test_fails_with_empty_source_dir() {
    let content = VALID.replace("dir: \"src/main/resources\"", "dir: \"\"");
    let error = parse(&content).unwrap_err();
    assert!(matches!(error, Error::Invalid { .. }));
}

#[test]
fn test_fails_when_remote_path_dir_does_not_start_with_slash() {
    let content = VALID.replace("dir: \"/res\"", "dir: \"res\"");
    let error = parse(&content).unwrap_err();

    let message = error.to_string();
    assert!(message.contains("must start with /"), "got: {message}");
}

#[test]
fn test_fails_with_empty_remote_path_filename() {
    let content = VALID.replace(
        "filename: \"%file_name%%file_extension%\"",
        "filename: \"\"",
    );
    let error = parse(&content).unwrap_err();
    assert!(matches!(error, Error::Invalid { .. }));
}

#[test]
fn test_fails_with_no_includes() {
    let content = r#"
projects:
  - id: 10
    sources:
      - dir: "src"
        remote_path:
          dir: "/res"
          filename: "f"
        export_pattern:
          dir: "/exported"
          filename: "f"
        includes: []
"#;
    let error = parse(content).unwrap_err();
    assert!(matches!(error, Error::Invalid { .. }));
}

#[test]
fn test_fails_with_empty_include_pattern() {
    let content = VALID.replace(
        "pattern: \"**/Messages.properties\"",
        "pattern: \"\"",
    );
    let error = parse(&content).unwrap_err();
    assert!(matches!(error, Error::Invalid { .. }));
}

#[test]
fn test_load_reads_configuration_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("l10n-sync.yml");
    std::fs::write(&path, VALID).unwrap();

    let configuration = SyncConfiguration::load(&path, &no_tokens()).unwrap();

    assert_eq!(configuration.projects[0].id, 10);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yml");

    let error = SyncConfiguration::load(&path, &no_tokens()).unwrap_err();

    assert!(matches!(error, Error::Io { .. }));
}

#[test]
fn test_path_pair_new_validates() {
    let pair = PathPair::new("/dir/", "filename").unwrap();
    assert_eq!(pair.dir, "/dir");
    assert_eq!(pair.filename, "filename");

    assert!(PathPair::new("dir", "filename").is_err());
    assert!(PathPair::new("/dir", "").is_err());
}
