mod executable_document;
mod executable_document_builder;
mod field_selection;
mod fragment;
mod fragment_registry;
mod fragment_spread;
mod fragment_spread_error;
mod inline_fragment;
mod input_value_validator;
#[allow(clippy::module_inception)]
mod operation;
mod operation_kind;
mod selection;
mod selection_set;
mod selection_set_builder;
mod variable;

pub use executable_document::ExecutableDocument;
pub use executable_document_builder::ExecutableDocumentBuilder;
pub use executable_document_builder::ExecutableDocumentBuildError;
pub use field_selection::FieldSelection;
pub use fragment::Fragment;
pub use fragment::FragmentRef;
pub use fragment_registry::FragmentRegistry;
pub(crate) use fragment_registry::SpreadChain;
pub use fragment_spread::FragmentSpread;
pub use fragment_spread_error::FragmentSpreadError;
pub use inline_fragment::InlineFragment;
pub use input_value_validator::InputValueError;
pub(crate) use input_value_validator::InputValueValidator;
pub(crate) use input_value_validator::VariableUsage;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub(crate) use selection_set_builder::SelectionSetBuilder;
pub use selection_set_builder::SelectionSetBuildError;
pub use variable::Variable;
