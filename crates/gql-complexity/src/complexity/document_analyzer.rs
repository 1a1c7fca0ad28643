use crate::ast;
use crate::complexity::ChildComplexityPlusOne;
use crate::complexity::ComplexityScorer;
use crate::complexity::FieldCost;
use crate::flatten;
use crate::operation::ExecutableDocument;
use crate::operation::ExecutableDocumentBuildError;
use crate::operation::ExecutableDocumentBuilder;
use crate::operation::FragmentSpreadError;
use crate::schema::Schema;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentAnalysisError>;

/// Raw and flattened complexity of one operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperationComplexity {
    pub complexity: usize,
    pub flattened_complexity: usize,
    pub operation_name: Option<String>,
}

/// Scores each operation of a document as written and again after
/// [flattening](crate::flatten::flatten_operation).
#[derive(Debug)]
pub struct DocumentAnalyzer<'schema, TCost: FieldCost = ChildComplexityPlusOne> {
    cost_rule: TCost,
    schema: &'schema Schema,
}
impl<'schema> DocumentAnalyzer<'schema, ChildComplexityPlusOne> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self::with_cost_rule(schema, ChildComplexityPlusOne)
    }
}
impl<'schema, TCost: FieldCost> DocumentAnalyzer<'schema, TCost> {
    pub fn with_cost_rule(schema: &'schema Schema, cost_rule: TCost) -> Self {
        Self {
            cost_rule,
            schema,
        }
    }

    /// Validate a parsed document against the schema, then analyze each of
    /// its operations in document order. A validation failure fails the whole
    /// document before any operation is scored.
    pub fn analyze(
        &self,
        ast_doc: &ast::operation::Document,
        file_path: Option<&Path>,
    ) -> Result<Vec<OperationComplexity>> {
        let document = ExecutableDocumentBuilder::from_ast(self.schema, ast_doc, file_path)
            .and_then(|builder| builder.build())
            .map_err(DocumentAnalysisError::InvalidDocument)?;
        self.analyze_document(&document)
    }

    pub fn analyze_document(
        &self,
        document: &ExecutableDocument<'schema>,
    ) -> Result<Vec<OperationComplexity>> {
        let scorer = ComplexityScorer::new(
            self.schema,
            document.fragment_registry(),
            &self.cost_rule,
        );

        document.operations().iter().map(|operation| {
            let spread_error = |err| DocumentAnalysisError::FragmentSpreadError {
                err,
                operation_name: operation.name().map(str::to_string),
            };

            let flattened = flatten::flatten_operation(
                operation,
                document.fragment_registry(),
            ).map_err(spread_error)?;
            let complexity = scorer.score_operation(operation).map_err(spread_error)?;
            let flattened_complexity = scorer.score_operation(&flattened)
                .map_err(spread_error)?;

            tracing::debug!(
                operation = operation.name().unwrap_or_default(),
                complexity,
                flattened_complexity,
                "scored operation",
            );

            Ok(OperationComplexity {
                complexity,
                flattened_complexity,
                operation_name: operation.name().map(str::to_string),
            })
        }).collect()
    }

    /// Parse, validate and analyze GraphQL source text.
    pub fn analyze_str(
        &self,
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<Vec<OperationComplexity>> {
        let document = ExecutableDocumentBuilder::from_str(self.schema, content, file_path)
            .and_then(|builder| builder.build())
            .map_err(DocumentAnalysisError::InvalidDocument)?;
        self.analyze_document(&document)
    }
}

#[derive(Debug, Error)]
pub enum DocumentAnalysisError {
    #[error(
        "Unable to expand fragments of operation `{}`: {err}",
        .operation_name.as_deref().unwrap_or("<anonymous>")
    )]
    FragmentSpreadError {
        err: FragmentSpreadError,
        operation_name: Option<String>,
    },

    #[error("Document failed validation: {}", format_build_errors(.0))]
    InvalidDocument(Vec<ExecutableDocumentBuildError>),
}

fn format_build_errors(errors: &[ExecutableDocumentBuildError]) -> String {
    errors.iter()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
