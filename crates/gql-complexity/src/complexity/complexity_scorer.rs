use crate::ast;
use crate::complexity::FieldCost;
use crate::operation::FieldSelection;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentSpreadError;
use crate::operation::Operation;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::SpreadChain;
use crate::schema::Schema;
use crate::types::GraphQLType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, FragmentSpreadError>;

/// Computes the complexity of a selection tree, bottom-up.
///
/// * A field's child complexity is the complexity of its sub-selections when
///   the field's type is an object, interface or union, and 0 otherwise.
/// * A field costs whatever the [`FieldCost`] rule returns for it, unless the
///   rule declines or returns less than the child complexity, in which case
///   it costs `child_complexity + 1`.
/// * A field selected on an interface type costs the maximum of its cost on
///   each object type implementing that interface (0 with no implementors).
/// * Fragment spreads and inline fragments cost the sum of their contents.
///
/// All sums saturate at `usize::MAX`.
#[derive(Debug)]
pub struct ComplexityScorer<'a, 'schema, TCost: FieldCost> {
    cost_rule: &'a TCost,
    fragment_registry: &'a FragmentRegistry<'schema>,
    schema: &'schema Schema,
}
impl<'a, 'schema, TCost: FieldCost> ComplexityScorer<'a, 'schema, TCost> {
    pub fn new(
        schema: &'schema Schema,
        fragment_registry: &'a FragmentRegistry<'schema>,
        cost_rule: &'a TCost,
    ) -> Self {
        Self {
            cost_rule,
            fragment_registry,
            schema,
        }
    }

    pub fn score_operation(&self, operation: &Operation<'schema>) -> Result<usize> {
        self.score_selection_set(operation.selection_set())
    }

    pub fn score_selection_set(&self, selection_set: &SelectionSet<'schema>) -> Result<usize> {
        self.selection_set_complexity(selection_set, &mut SpreadChain::default())
    }

    fn selection_set_complexity(
        &self,
        selection_set: &SelectionSet<'schema>,
        spread_chain: &mut SpreadChain<'a>,
    ) -> Result<usize> {
        let mut complexity: usize = 0;
        for selection in selection_set.selections() {
            let selection_complexity = match selection {
                Selection::Field(field) =>
                    self.field_selection_complexity(field, spread_chain)?,

                Selection::FragmentSpread(spread) => {
                    let fragment = spread_chain.enter(self.fragment_registry, spread)?;
                    let fragment_complexity = self.selection_set_complexity(
                        fragment.selection_set(),
                        spread_chain,
                    );
                    spread_chain.exit();
                    fragment_complexity?
                },

                Selection::InlineFragment(inline) =>
                    self.selection_set_complexity(inline.selection_set(), spread_chain)?,
            };
            complexity = complexity.saturating_add(selection_complexity);
        }
        Ok(complexity)
    }

    fn field_selection_complexity(
        &self,
        field: &FieldSelection<'schema>,
        spread_chain: &mut SpreadChain<'a>,
    ) -> Result<usize> {
        let field_type_name = field.field()
            .type_annotation()
            .innermost_named_type_annotation()
            .graphql_type_name();
        let child_complexity = if self.schema
            .lookup_type(field_type_name)
            .is_some_and(GraphQLType::is_composite) {
            self.selection_set_complexity(field.selection_set(), spread_chain)?
        } else {
            0
        };

        let parent_type_name = field.field().parent_type_name();
        let field_cost = match self.schema.lookup_type(parent_type_name) {
            Some(parent_type) if parent_type.as_interface().is_some() => self.schema
                .possible_types(parent_type)
                .into_iter()
                .map(|impl_type| self.field_cost(
                    impl_type.name(),
                    field.name(),
                    child_complexity,
                    field.arguments(),
                ))
                .max()
                .unwrap_or(0),

            _ => self.field_cost(
                parent_type_name,
                field.name(),
                child_complexity,
                field.arguments(),
            ),
        };

        Ok(field_cost)
    }

    fn field_cost(
        &self,
        parent_type_name: &str,
        field_name: &str,
        child_complexity: usize,
        arguments: &IndexMap<String, ast::operation::Value>,
    ) -> usize {
        match self.cost_rule.field_cost(
            parent_type_name,
            field_name,
            child_complexity,
            arguments,
        ) {
            Some(cost) if cost >= child_complexity => cost,
            _ => child_complexity.saturating_add(1),
        }
    }
}
