mod complexity_scorer_tests;
mod document_analyzer_tests;
