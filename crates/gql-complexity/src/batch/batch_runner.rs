use crate::ast;
use crate::batch::BatchConfig;
use crate::batch::BatchError;
use crate::batch::BatchOutcome;
use crate::batch::ComplexityReport;
use crate::batch::DocumentError;
use crate::batch::FileMatcher;
use crate::batch::SkippedDocument;
use crate::complexity::DocumentAnalyzer;
use crate::complexity::OperationComplexity;
use crate::file_reader;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use std::path::Path;

type Result<T> = std::result::Result<T, BatchError>;

/// Loads a schema from every file matching the configured schema pattern, then
/// analyzes every file matching the document pattern against it.
///
/// Schema problems (no matching files, unreadable or invalid SDL) abort the
/// run. A document that cannot be read, parsed, validated or scored is logged,
/// recorded in [`BatchOutcome::skipped`] and does not affect other documents.
#[derive(Clone, Debug, Default)]
pub struct BatchRunner {
    config: BatchConfig,
}
impl BatchRunner {
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<BatchOutcome> {
        // Resolve both patterns up front so a bad document pattern is
        // reported before any schema work happens.
        let schema_matcher = FileMatcher::new(&self.config.root, &self.config.schema_pattern)?;
        let document_matcher = FileMatcher::new(&self.config.root, &self.config.document_pattern)?;

        let schema = self.load_schema(&schema_matcher)?;
        let analyzer = DocumentAnalyzer::new(&schema);

        let document_paths = document_matcher.matching_files()?;
        tracing::debug!(
            "Found {} document(s) matching `{}`.",
            document_paths.len(),
            document_matcher.pattern(),
        );

        let mut outcome = BatchOutcome::default();
        for relative_path in document_paths {
            let full_path = self.config.root.join(&relative_path);
            match analyze_file(&analyzer, &full_path) {
                Ok(results) => outcome.reports.extend(results.into_iter().map(
                    |result| ComplexityReport {
                        complexity: result.complexity,
                        flattened_complexity: result.flattened_complexity,
                        operation_name: result.operation_name,
                        path: relative_path.clone(),
                    },
                )),

                Err(error) => {
                    tracing::warn!(
                        file = %relative_path.display(),
                        error = %error,
                        "Skipping document",
                    );
                    outcome.skipped.push(SkippedDocument {
                        error,
                        path: relative_path,
                    });
                },
            }
        }

        Ok(outcome)
    }

    fn load_schema(&self, schema_matcher: &FileMatcher) -> Result<Schema> {
        let schema_paths: Vec<_> = schema_matcher.matching_files()?
            .into_iter()
            .map(|relative_path| self.config.root.join(relative_path))
            .collect();
        if schema_paths.is_empty() {
            return Err(BatchError::NoSchemaFiles {
                pattern: schema_matcher.pattern().to_string(),
                root: self.config.root.clone(),
            });
        }

        tracing::debug!("Loading schema from {} file(s).", schema_paths.len());
        Ok(SchemaBuilder::from_files(&schema_paths)?.build()?)
    }
}

fn analyze_file(
    analyzer: &DocumentAnalyzer<'_>,
    file_path: &Path,
) -> std::result::Result<Vec<OperationComplexity>, DocumentError> {
    let content = file_reader::read_content(file_path)
        .map_err(DocumentError::ReadError)?;
    let ast_doc = ast::operation::parse(content.as_str())
        .map_err(DocumentError::ParseError)?;
    analyzer.analyze(&ast_doc, Some(file_path))
        .map_err(DocumentError::AnalysisError)
}
