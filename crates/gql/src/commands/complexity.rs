use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use comfy_table::Table;
use gql_complexity::batch;
use gql_complexity::batch::BatchConfig;
use gql_complexity::batch::BatchRunner;
use gql_complexity::batch::ComplexityReport;
use gql_complexity::batch::SkippedDocument;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ComplexityCmd {
    #[arg(
        default_value=batch::DEFAULT_DOCUMENT_PATTERN,
        help="Glob pattern matching the GraphQL documents to analyze, relative \
             to --root.",
        long,
    )]
    docs: String,

    #[arg(
        default_value="table",
        help="How to print the results.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        default_value=".",
        help="Directory that the --schema and --docs patterns are resolved \
             against.",
        long,
    )]
    root: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for ComplexityCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let config = BatchConfig {
            document_pattern: self.docs,
            root: self.root,
            schema_pattern: cli.schema,
        };
        log::debug!("Running complexity analysis with {config:?}.");

        let outcome = match BatchRunner::new(config).run() {
            Ok(outcome) => outcome,
            Err(e) => return CommandResult::failure(format!(
                "{} Unable to calculate complexity: {e}",
                output_utils::RED_X,
            )),
        };

        log::info!(
            "{} Analyzed {} operation(s); skipped {} document(s).",
            output_utils::GREEN_CHECK,
            outcome.reports.len(),
            outcome.skipped.len(),
        );

        let mut result = match self.format {
            OutputFormat::Json => match serde_json::to_string_pretty(&outcome.reports) {
                Ok(json) => CommandResult::success(json),
                Err(e) => return CommandResult::failure(format!(
                    "{} Unable to serialize results: {e}",
                    output_utils::RED_X,
                )),
            },
            OutputFormat::Table =>
                CommandResult::success(render_table(&outcome.reports).to_string()),
        };
        result.stderr = render_skipped(&outcome.skipped);
        result
    }
}

/// One line per skipped document, or `None` when nothing was skipped.
fn render_skipped(skipped: &[SkippedDocument]) -> Option<String> {
    if skipped.is_empty() {
        return None;
    }

    Some(skipped.iter()
        .map(|skipped| format!(
            "{} Skipped {}: {}",
            output_utils::RED_X,
            skipped.path.display(),
            skipped.error,
        ))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn render_table(reports: &[ComplexityReport]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::NOTHING)
        .set_header(vec![
            "File:",
            "Operation:",
            "Complexity:",
            "Flattened Complexity:",
        ]);

    for report in reports {
        table.add_row(vec![
            report.path.display().to_string(),
            report.operation_name.clone().unwrap_or_default(),
            report.complexity.to_string(),
            report.flattened_complexity.to_string(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use gql_complexity::batch::DocumentError;
    use gql_complexity::complexity::DocumentAnalysisError;
    use gql_complexity::operation::FragmentSpreadError;

    fn cycle_error(operation_name: &str) -> DocumentError {
        DocumentError::AnalysisError(DocumentAnalysisError::FragmentSpreadError {
            err: FragmentSpreadError::FragmentCycle {
                cycle_path: vec!["A".to_string(), "A".to_string()],
            },
            operation_name: Some(operation_name.to_string()),
        })
    }

    #[test]
    fn nothing_skipped_prints_nothing() {
        assert_eq!(render_skipped(&[]), None);
    }

    #[test]
    fn each_skipped_document_is_listed_with_its_reason() {
        let skipped = vec![
            SkippedDocument {
                error: cycle_error("First"),
                path: PathBuf::from("ops/first.graphql"),
            },
            SkippedDocument {
                error: cycle_error("Second"),
                path: PathBuf::from("ops/second.graphql"),
            },
        ];

        let rendered = render_skipped(&skipped).unwrap();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(&format!(
            "{} Skipped ops/first.graphql: ",
            output_utils::RED_X,
        )));
        assert!(lines[0].contains("First"));
        assert!(lines[1].starts_with(&format!(
            "{} Skipped ops/second.graphql: ",
            output_utils::RED_X,
        )));
    }
}
