use crate::ast;
use indexmap::IndexMap;

/// A per-field cost rule consulted by the
/// [`ComplexityScorer`](crate::complexity::ComplexityScorer).
///
/// Returning `None` declines to price the field, in which case the scorer
/// falls back to `child_complexity + 1`. So does any returned cost lower than
/// `child_complexity`.
pub trait FieldCost {
    fn field_cost(
        &self,
        parent_type_name: &str,
        field_name: &str,
        child_complexity: usize,
        arguments: &IndexMap<String, ast::operation::Value>,
    ) -> Option<usize>;
}

/// Every field costs one more than the fields selected beneath it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChildComplexityPlusOne;
impl FieldCost for ChildComplexityPlusOne {
    fn field_cost(
        &self,
        _parent_type_name: &str,
        _field_name: &str,
        child_complexity: usize,
        _arguments: &IndexMap<String, ast::operation::Value>,
    ) -> Option<usize> {
        Some(child_complexity.saturating_add(1))
    }
}
