use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use std::collections::HashMap;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directives: HashMap<String, Directive>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Returns a [`HashMap<String, GraphQLType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Look up a directive definition by name. Built-in directives are always
    /// defined.
    pub fn directive(&self, directive_name: &str) -> Option<&Directive> {
        self.directives.get(directive_name)
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().and_then(|named_ref| named_ref.deref(self).ok())
    }

    /// The concrete object types a value of `graphql_type` may be at runtime:
    /// an object type is its own only possible type, an interface's possible
    /// types are the objects declaring that they implement it, and a union's
    /// are its members. Results are sorted by type name.
    pub fn possible_types<'a>(
        &'a self,
        graphql_type: &'a GraphQLType,
    ) -> Vec<&'a ObjectType> {
        let mut possible_types: Vec<&ObjectType> = match graphql_type {
            GraphQLType::Object(obj_type) => vec![&**obj_type],

            GraphQLType::Interface(iface_type) =>
                self.types.values()
                    .filter_map(|type_| type_.as_object())
                    .filter(|obj_type| obj_type.implements_interface(iface_type.name()))
                    .collect(),

            GraphQLType::Union(union_type) =>
                union_type.members.iter()
                    .filter_map(|member_ref| member_ref.deref(self).ok())
                    .filter_map(|type_| type_.as_object())
                    .collect(),

            _ => vec![],
        };
        possible_types.sort_by(|a, b| a.name().cmp(b.name()));
        possible_types
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// It is ***strongly*** recommended that you use this in favor of looking
    /// for an [`ObjectType`] whose name is `"Query"`: a `schema { }` block may
    /// name a different type as the query root.
    pub fn query_type(&self) -> &GraphQLType {
        self.query_type.deref(self)
            .expect("type is present in schema")
    }

    /// The root type that operations of the given kind select from, if the
    /// schema defines one.
    pub fn root_operation_type(&self, kind: &OperationKind) -> Option<&GraphQLType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => Some(self.query_type()),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().and_then(|named_ref| named_ref.deref(self).ok())
    }
}
