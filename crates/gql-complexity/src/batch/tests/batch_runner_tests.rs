use crate::batch::BatchConfig;
use crate::batch::BatchError;
use crate::batch::BatchRunner;
use crate::batch::ComplexityReport;
use crate::batch::DocumentError;
use crate::batch::tests::write_file;
use crate::complexity::DocumentAnalysisError;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, BatchError>;

const SCHEMA: &str = r#"
    type Query {
        user(id: ID!): User
    }

    type User {
        id: ID!
        name: String!
    }
"#;

const GET_ORDER: &str = r#"
    query GetOrder($id: ID!) {
        user(id: $id) { ...HeaderFragment ...UserFragment }
    }
    fragment HeaderFragment on User { id name }
    fragment UserFragment on User { id name }
"#;

fn runner(root: &Path) -> BatchRunner {
    BatchRunner::new(BatchConfig {
        root: root.to_path_buf(),
        ..BatchConfig::default()
    })
}

fn report(
    path: &str,
    name: Option<&str>,
    complexity: usize,
    flattened_complexity: usize,
) -> ComplexityReport {
    ComplexityReport {
        complexity,
        flattened_complexity,
        operation_name: name.map(str::to_string),
        path: PathBuf::from(path),
    }
}

#[test]
fn default_config_uses_default_patterns() {
    let config = BatchConfig::default();

    assert_eq!(config.document_pattern, "*.graphql");
    assert_eq!(config.root, PathBuf::from("."));
    assert_eq!(config.schema_pattern, "*.graphqls");
    assert_eq!(BatchRunner::default().config().root, config.root);
}

#[test]
fn reports_every_operation_in_file_order() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "schema.graphqls", SCHEMA);
    write_file(dir.path(), "get_order.graphql", GET_ORDER);
    write_file(dir.path(), "a_users.graphql", r#"
        query First { user(id: "1") { id } }
        query Second { user(id: "2") { id name id } }
    "#);

    let outcome = runner(dir.path()).run()?;

    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.reports, vec![
        report("a_users.graphql", Some("First"), 2, 2),
        report("a_users.graphql", Some("Second"), 4, 3),
        report("get_order.graphql", Some("GetOrder"), 5, 3),
    ]);
    Ok(())
}

#[test]
fn bad_documents_are_skipped() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "schema.graphqls", SCHEMA);
    write_file(dir.path(), "1_unparseable.graphql", "query Broken { user(");
    write_file(dir.path(), "2_invalid.graphql", r#"query Bad { user(id: "1") { nope } }"#);
    write_file(dir.path(), "3_good.graphql", r#"{ user(id: "1") { id } }"#);

    let outcome = runner(dir.path()).run()?;

    assert_eq!(outcome.reports, vec![report("3_good.graphql", None, 2, 2)]);
    let skipped: Vec<_> = outcome.skipped.iter().map(|doc| doc.path.clone()).collect();
    assert_eq!(skipped, vec![
        PathBuf::from("1_unparseable.graphql"),
        PathBuf::from("2_invalid.graphql"),
    ]);
    assert!(matches!(outcome.skipped[0].error, DocumentError::ParseError(_)));
    assert!(matches!(
        outcome.skipped[1].error,
        DocumentError::AnalysisError(DocumentAnalysisError::InvalidDocument(_)),
    ));
    Ok(())
}

#[test]
fn schema_may_span_several_files() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.graphqls", SCHEMA);
    write_file(dir.path(), "b.graphqls", "extend type User { email: String }");
    write_file(dir.path(), "q.graphql", r#"query Q { user(id: "1") { email } }"#);

    let outcome = runner(dir.path()).run()?;

    assert_eq!(outcome.reports, vec![report("q.graphql", Some("Q"), 2, 2)]);
    Ok(())
}

#[test]
fn custom_patterns_select_files_in_subdirectories() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "schema/main.sdl", SCHEMA);
    write_file(dir.path(), "ops/users/q.gql", r#"query Q { user(id: "1") { id } }"#);
    write_file(dir.path(), "ignored.graphql", "not graphql at all");

    let outcome = BatchRunner::new(BatchConfig {
        document_pattern: "**/*.gql".to_string(),
        root: dir.path().to_path_buf(),
        schema_pattern: "schema/*.sdl".to_string(),
    }).run()?;

    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.reports, vec![report("ops/users/q.gql", Some("Q"), 2, 2)]);
    Ok(())
}

#[test]
fn missing_schema_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "q.graphql", r#"query Q { user(id: "1") { id } }"#);

    let result = runner(dir.path()).run();

    assert!(matches!(
        result,
        Err(BatchError::NoSchemaFiles { pattern, .. }) if pattern == "*.graphqls",
    ));
}

#[test]
fn invalid_schema_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "schema.graphqls", "type Query { user: Missing }");
    write_file(dir.path(), "q.graphql", "query Q { user }");

    let result = runner(dir.path()).run();

    assert!(matches!(result, Err(BatchError::SchemaBuildError(_))));
}

#[test]
fn invalid_document_pattern_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "schema.graphqls", SCHEMA);

    let result = BatchRunner::new(BatchConfig {
        document_pattern: "[".to_string(),
        root: dir.path().to_path_buf(),
        ..BatchConfig::default()
    }).run();

    assert!(matches!(result, Err(BatchError::InvalidPattern { .. })));
}

#[test]
fn empty_directory_with_schema_reports_nothing() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "schema.graphqls", SCHEMA);

    let outcome = runner(dir.path()).run()?;

    assert!(outcome.reports.is_empty());
    assert!(outcome.skipped.is_empty());
    Ok(())
}
