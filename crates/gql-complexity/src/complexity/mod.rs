mod complexity_scorer;
mod document_analyzer;
mod field_cost;

pub use complexity_scorer::ComplexityScorer;
pub use document_analyzer::DocumentAnalysisError;
pub use document_analyzer::DocumentAnalyzer;
pub use document_analyzer::OperationComplexity;
pub use field_cost::ChildComplexityPlusOne;
pub use field_cost::FieldCost;

#[cfg(test)]
mod tests;
