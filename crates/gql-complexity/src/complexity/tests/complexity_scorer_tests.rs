use crate::ast;
use crate::complexity::ChildComplexityPlusOne;
use crate::complexity::ComplexityScorer;
use crate::complexity::FieldCost;
use crate::operation::ExecutableDocument;
use crate::operation::ExecutableDocumentBuilder;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, crate::operation::FragmentSpreadError>;

fn setup_schema() -> Schema {
    SchemaBuilder::from_str(
        None,
        r#"
        type Query {
            user(id: ID!): User
            users(first: Int): [User!]!
            node(id: ID!): Node
            orphan: Orphan
        }

        interface Node { id: ID! }

        interface Orphan { id: ID! }

        type User implements Node {
            id: ID!
            name: String!
            friend: User
        }

        type Warehouse implements Node {
            id: ID!
        }

        enum Color { RED }
        "#,
    )
    .unwrap()
    .build()
    .unwrap()
}

fn build<'schema>(schema: &'schema Schema, content: &str) -> ExecutableDocument<'schema> {
    ExecutableDocumentBuilder::from_str(schema, content, None)
        .and_then(|builder| builder.build())
        .unwrap()
}

fn score<TCost: FieldCost>(schema: &Schema, cost_rule: &TCost, content: &str) -> Result<usize> {
    let doc = build(schema, content);
    let scorer = ComplexityScorer::new(schema, doc.fragment_registry(), cost_rule);
    scorer.score_operation(&doc.operations()[0])
}

/// Prices fields with a fixed table, declining anything not listed.
struct PriceTable(Vec<(&'static str, &'static str, usize)>);
impl FieldCost for PriceTable {
    fn field_cost(
        &self,
        parent_type_name: &str,
        field_name: &str,
        _child_complexity: usize,
        _arguments: &IndexMap<String, ast::operation::Value>,
    ) -> Option<usize> {
        self.0.iter()
            .find(|(parent, field, _)| *parent == parent_type_name && *field == field_name)
            .map(|(_, _, cost)| *cost)
    }
}

mod default_cost_rule {
    use super::*;

    #[test]
    fn each_field_costs_its_children_plus_one() -> Result<()> {
        let schema = setup_schema();

        let complexity = score(&schema, &ChildComplexityPlusOne, r#"
            query Q { user(id: "1") { id name friend { id } } }
        "#)?;

        // id + name + (friend + id) + user
        assert_eq!(complexity, 5);
        Ok(())
    }

    #[test]
    fn fragment_contents_are_counted_per_spread() -> Result<()> {
        let schema = setup_schema();

        let complexity = score(&schema, &ChildComplexityPlusOne, r#"
            query GetOrder($id: ID!) {
                user(id: $id) { ...HeaderFragment ...UserFragment }
            }
            fragment HeaderFragment on User { id name }
            fragment UserFragment on User { id name }
        "#)?;

        assert_eq!(complexity, 5);
        Ok(())
    }

    #[test]
    fn inline_fragments_cost_the_sum_of_their_contents() -> Result<()> {
        let schema = setup_schema();

        let complexity = score(&schema, &ChildComplexityPlusOne, r#"
            query Q {
                node(id: "1") {
                    id
                    ... on User { name friend { name } }
                    ... { id }
                }
            }
        "#)?;

        // node(1) + id(1) + name(1) + friend(2) + id(1)
        assert_eq!(complexity, 6);
        Ok(())
    }

    #[test]
    fn interface_without_implementors_prices_its_fields_at_zero() -> Result<()> {
        let schema = setup_schema();

        let complexity = score(&schema, &ChildComplexityPlusOne, "query Q { orphan { id } }")?;

        assert_eq!(complexity, 1);
        Ok(())
    }

    #[test]
    fn empty_selection_set_scores_zero() -> Result<()> {
        let schema = setup_schema();
        let doc = build(&schema, "query Q { __typename }");
        let scorer = ComplexityScorer::new(&schema, doc.fragment_registry(), &ChildComplexityPlusOne);

        assert_eq!(scorer.score_selection_set(&SelectionSet::default())?, 0);
        Ok(())
    }
}

mod custom_cost_rules {
    use super::*;

    #[test]
    fn accepted_costs_replace_the_default() -> Result<()> {
        let schema = setup_schema();
        let rule = PriceTable(vec![("User", "name", 7), ("Query", "user", 20)]);

        let complexity = score(&schema, &rule, r#"query Q { user(id: "1") { id name } }"#)?;

        // user: 20 (>= child of 1 + 7)
        assert_eq!(complexity, 20);
        Ok(())
    }

    #[test]
    fn costs_below_child_complexity_fall_back_to_child_plus_one() -> Result<()> {
        let schema = setup_schema();
        let rule = PriceTable(vec![("User", "name", 7), ("Query", "user", 3)]);

        let complexity = score(&schema, &rule, r#"query Q { user(id: "1") { id name } }"#)?;

        assert_eq!(complexity, 9);
        Ok(())
    }

    #[test]
    fn zero_cost_is_accepted_for_leaves() -> Result<()> {
        let schema = setup_schema();
        let rule = PriceTable(vec![("User", "id", 0)]);

        let complexity = score(&schema, &rule, r#"query Q { user(id: "1") { id } }"#)?;

        assert_eq!(complexity, 1);
        Ok(())
    }

    #[test]
    fn interface_fields_cost_the_most_expensive_implementation() -> Result<()> {
        let schema = setup_schema();
        let rule = PriceTable(vec![("User", "id", 2), ("Warehouse", "id", 10)]);

        let complexity = score(&schema, &rule, r#"query Q { node(id: "1") { id } }"#)?;

        assert_eq!(complexity, 11);
        Ok(())
    }

    #[test]
    fn arguments_are_passed_to_the_rule() -> Result<()> {
        struct PageSize;
        impl FieldCost for PageSize {
            fn field_cost(
                &self,
                _parent_type_name: &str,
                field_name: &str,
                child_complexity: usize,
                arguments: &IndexMap<String, ast::operation::Value>,
            ) -> Option<usize> {
                if field_name != "users" {
                    return None;
                }
                match arguments.get("first") {
                    Some(ast::operation::Value::Int(first)) =>
                        first.as_i64().map(|first| first as usize * child_complexity),
                    _ => None,
                }
            }
        }
        let schema = setup_schema();

        let complexity = score(&schema, &PageSize, "query Q { users(first: 10) { id name } }")?;
        let unpaged = score(&schema, &PageSize, "query Q { users { id name } }")?;

        assert_eq!(complexity, 20);
        assert_eq!(unpaged, 3);
        Ok(())
    }

    #[test]
    fn sums_saturate() -> Result<()> {
        let schema = setup_schema();
        let rule = PriceTable(vec![("User", "id", usize::MAX)]);

        let complexity = score(&schema, &rule, r#"
            query Q {
                first: user(id: "1") { id name }
                second: user(id: "2") { id }
            }
        "#)?;

        assert_eq!(complexity, usize::MAX);
        Ok(())
    }
}
