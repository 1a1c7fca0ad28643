use crate::ast;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

/// The declared type of a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter) or
/// [`Variable`](crate::operation::Variable), e.g. `[User!]!`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// `location` is recorded as the reference location of the named type at
    /// the bottom of the annotation.
    pub(crate) fn from_ast_type(
        location: &loc::SourceLocation,
        ast_type: &ast::operation::Type,
    ) -> Self {
        use ast::operation::Type;

        let (ast_type, nullable) = match ast_type {
            Type::NonNullType(inner) => (inner.as_ref(), false),
            nullable_type => (nullable_type, true),
        };
        match ast_type {
            Type::ListType(inner) => Self::List(ListTypeAnnotation {
                inner_type_annotation: Box::new(Self::from_ast_type(location, inner)),
                nullable,
            }),
            Type::NamedType(name) => Self::Named(NamedTypeAnnotation {
                nullable,
                type_ref: GraphQLType::named_ref(name, location.clone()),
            }),
            // `T!!` does not parse.
            Type::NonNullType(inner) => Self::from_ast_type(location, inner),
        }
    }

    /// The named type with every list wrapper stripped away: `User` for
    /// `[[User!]]!`.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        let mut annotation = self;
        loop {
            match annotation {
                Self::List(list) => annotation = list.inner_type_annotation(),
                Self::Named(named) => return named,
            }
        }
    }

    /// Whether a variable declared with `variable_type` may be used in a
    /// position of this type. A nullable variable is still allowed in a
    /// non-null position when `default_provided` (the variable or the
    /// position has a non-null default value).
    pub fn accepts_variable_of_type(
        &self,
        variable_type: &TypeAnnotation,
        default_provided: bool,
    ) -> bool {
        if !self.nullable() && variable_type.nullable() && !default_provided {
            return false;
        }
        accepts_wrapped_type(self, variable_type)
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List(list) => list.nullable,
            Self::Named(named) => named.nullable,
        }
    }
}

fn accepts_wrapped_type(location_type: &TypeAnnotation, variable_type: &TypeAnnotation) -> bool {
    match (location_type, variable_type) {
        (TypeAnnotation::List(location_list), TypeAnnotation::List(variable_list)) => {
            let location_item = location_list.inner_type_annotation();
            let variable_item = variable_list.inner_type_annotation();
            (location_item.nullable() || !variable_item.nullable())
                && accepts_wrapped_type(location_item, variable_item)
        },
        (TypeAnnotation::Named(location_named), TypeAnnotation::Named(variable_named)) =>
            location_named.graphql_type_name() == variable_named.graphql_type_name(),
        _ => false,
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list) => write!(f, "[{}]", list.inner_type_annotation)?,
            Self::Named(named) => f.write_str(named.graphql_type_name())?,
        }
        if !self.nullable() {
            f.write_str("!")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type_annotation: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_annotation
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}
impl NamedTypeAnnotation {
    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    pub fn type_ref(&self) -> &NamedGraphQLTypeRef {
        &self.type_ref
    }
}
