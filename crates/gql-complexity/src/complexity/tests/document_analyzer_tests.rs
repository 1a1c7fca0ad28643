use crate::ast;
use crate::complexity::DocumentAnalysisError;
use crate::complexity::DocumentAnalyzer;
use crate::complexity::FieldCost;
use crate::complexity::OperationComplexity;
use crate::operation::ExecutableDocumentBuildError;
use crate::operation::FragmentSpreadError;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, DocumentAnalysisError>;

fn setup_schema() -> Schema {
    SchemaBuilder::from_str(
        None,
        r#"
        type Query {
            user(id: ID!): User
        }

        type Mutation {
            rename(id: ID!, name: String!): User
        }

        type User {
            id: ID!
            name: String!
            friend: User
        }
        "#,
    )
    .unwrap()
    .build()
    .unwrap()
}

fn result(name: Option<&str>, complexity: usize, flattened_complexity: usize) -> OperationComplexity {
    OperationComplexity {
        complexity,
        flattened_complexity,
        operation_name: name.map(str::to_string),
    }
}

#[test]
fn get_order_scores_raw_and_flattened() -> Result<()> {
    let schema = setup_schema();
    let analyzer = DocumentAnalyzer::new(&schema);

    let results = analyzer.analyze_str(r#"
        query GetOrder($id: ID!) {
            user(id: $id) {
                ...HeaderFragment
                ...UserFragment
            }
        }

        fragment HeaderFragment on User {
            id
            name
        }

        fragment UserFragment on User {
            id
            name
        }
    "#, None)?;

    assert_eq!(results, vec![result(Some("GetOrder"), 5, 3)]);
    Ok(())
}

#[test]
fn operations_are_reported_in_document_order() -> Result<()> {
    let schema = setup_schema();
    let analyzer = DocumentAnalyzer::new(&schema);
    let ast_doc = ast::operation::parse(r#"
        mutation Rename { rename(id: "1", name: "x") { id ...Named } }
        query Friends { user(id: "1") { friend { id } friend { id name } } }
        fragment Named on User { id name }
    "#).unwrap();

    let results = analyzer.analyze(&ast_doc, None)?;

    assert_eq!(results, vec![
        result(Some("Rename"), 4, 3),
        result(Some("Friends"), 6, 4),
    ]);
    Ok(())
}

#[test]
fn anonymous_operation_has_no_name() -> Result<()> {
    let schema = setup_schema();
    let analyzer = DocumentAnalyzer::new(&schema);

    let results = analyzer.analyze_str(r#"{ user(id: "1") { id } }"#, None)?;

    assert_eq!(results, vec![result(None, 2, 2)]);
    Ok(())
}

#[test]
fn fragment_free_operation_scores_the_same_flattened() -> Result<()> {
    let schema = setup_schema();
    let analyzer = DocumentAnalyzer::new(&schema);

    let results = analyzer.analyze_str(r#"
        query Q {
            user(id: "1") { id name friend { id friend { name } } }
            other: user(id: "2") { id }
        }
    "#, None)?;

    assert_eq!(results, vec![result(Some("Q"), 9, 9)]);
    Ok(())
}

#[test]
fn flattened_complexity_never_exceeds_raw() -> Result<()> {
    let schema = setup_schema();
    let analyzer = DocumentAnalyzer::new(&schema);

    let results = analyzer.analyze_str(r#"
        query A { user(id: "1") { ...F ... { id friend { ...F } } } }
        query B { user(id: "1") { friend { ...F } friend { name } } }
        fragment F on User { id name friend { id } }
    "#, None)?;

    for op in &results {
        assert!(op.flattened_complexity <= op.complexity, "{op:?}");
    }
    Ok(())
}

#[test]
fn custom_cost_rule_applies_to_both_scores() -> Result<()> {
    struct Flat;
    impl FieldCost for Flat {
        fn field_cost(
            &self,
            _parent_type_name: &str,
            field_name: &str,
            _child_complexity: usize,
            _arguments: &IndexMap<String, ast::operation::Value>,
        ) -> Option<usize> {
            (field_name == "name").then_some(10)
        }
    }
    let schema = setup_schema();
    let analyzer = DocumentAnalyzer::with_cost_rule(&schema, Flat);

    let results = analyzer.analyze_str(r#"
        query Q { user(id: "1") { name ...N } }
        fragment N on User { name }
    "#, None)?;

    assert_eq!(results, vec![result(Some("Q"), 21, 11)]);
    Ok(())
}

#[test]
fn invalid_document_fails_analysis() {
    let schema = setup_schema();
    let analyzer = DocumentAnalyzer::new(&schema);

    let result = analyzer.analyze_str(r#"
        query Q { user(id: "1") { id nope } }
        fragment Unused on User { id }
    "#, None);

    let Err(DocumentAnalysisError::InvalidDocument(errors)) = result else {
        panic!("expected InvalidDocument, got {result:?}");
    };
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ExecutableDocumentBuildError::InvalidSelection(_)));
}

#[test]
fn documents_with_invalid_variables_values_or_directives_fail_analysis() {
    let schema = setup_schema();
    let analyzer = DocumentAnalyzer::new(&schema);

    for content in [
        r#"query Q { user(id: $nope) { id } }"#,
        r#"query Q($x: ID!) { user(id: "1") { id } }"#,
        r#"query Q { user(id: 1.5) { id } }"#,
        r#"query Q { user(id: "1") @bogus { id } }"#,
    ] {
        let result = analyzer.analyze_str(content, None);
        assert!(
            matches!(result, Err(DocumentAnalysisError::InvalidDocument(ref errors)) if errors.len() == 1),
            "{content}: {result:?}",
        );
    }
}

#[test]
fn unparseable_document_fails_analysis() {
    let schema = setup_schema();
    let analyzer = DocumentAnalyzer::new(&schema);

    let result = analyzer.analyze_str("query Q { user(id: ", None);

    let Err(DocumentAnalysisError::InvalidDocument(errors)) = result else {
        panic!("expected InvalidDocument, got {result:?}");
    };
    assert!(matches!(errors.as_slice(), [ExecutableDocumentBuildError::ParseError(_)]));
}

#[test]
fn fragment_spread_error_names_the_operation() {
    let err = DocumentAnalysisError::FragmentSpreadError {
        err: FragmentSpreadError::FragmentCycle {
            cycle_path: vec!["A".to_string(), "A".to_string()],
        },
        operation_name: None,
    };

    assert_eq!(
        err.to_string(),
        "Unable to expand fragments of operation `<anonymous>`: Fragment cycle detected: A → A",
    );
}
