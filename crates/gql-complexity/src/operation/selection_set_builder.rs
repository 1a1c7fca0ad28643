use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::operation::FieldSelection;
use crate::operation::Fragment;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::operation::InputValueError;
use crate::operation::InputValueValidator;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<SelectionSetBuildError>>;

/// Builds [`SelectionSet`]s out of AST selection sets, validating every
/// selection against the schema type it is selected on, and every argument
/// and directive against its definition.
///
/// Fragment spreads are only checked for the existence of a fragment with the
/// spread name; the fragment itself is validated (and checked for cycles) by
/// the [`ExecutableDocumentBuilder`](crate::operation::ExecutableDocumentBuilder).
pub(crate) struct SelectionSetBuilder<'schema, 'a> {
    pub(crate) file_path: Option<&'a Path>,
    pub(crate) fragment_names: &'a HashSet<String>,
    pub(crate) schema: &'schema Schema,
}
impl<'schema, 'a> SelectionSetBuilder<'schema, 'a> {
    /// Convert the directives applied at one location. Each directive must be
    /// defined by the schema and allowed at `directive_location`, may appear
    /// only once unless it is repeatable, and must be given valid arguments.
    pub(crate) fn directive_annotations(
        &self,
        ast_directives: &[ast::operation::Directive],
        directive_location: ast::schema::DirectiveLocation,
    ) -> Result<Vec<DirectiveAnnotation>> {
        let input_values = InputValueValidator { schema: self.schema };
        let mut errors = vec![];
        let mut applied = HashSet::new();
        for ast_directive in ast_directives {
            let srcloc = loc::SourceLocation::from_pos(self.file_path, ast_directive.position);
            let directive_name = ast_directive.name.as_str();

            let Some(directive) = self.schema.directive(directive_name) else {
                errors.push(SelectionSetBuildError::UndefinedDirective {
                    directive_name: directive_name.to_string(),
                    location: srcloc,
                });
                continue;
            };

            if !directive.is_allowed_at(&directive_location) {
                errors.push(SelectionSetBuildError::MisplacedDirective {
                    directive_location: directive_location.as_str(),
                    directive_name: directive_name.to_string(),
                    location: srcloc.clone(),
                });
            }

            if !applied.insert(directive_name) && !directive.is_repeatable() {
                errors.push(SelectionSetBuildError::DuplicateDirective {
                    directive_name: directive_name.to_string(),
                    location: srcloc.clone(),
                });
            }

            let mut provided = HashSet::new();
            for (arg_name, arg_value) in &ast_directive.arguments {
                if !provided.insert(arg_name.as_str()) {
                    errors.push(SelectionSetBuildError::DuplicateFieldArgument {
                        argument_name: arg_name.to_string(),
                        location: srcloc.clone(),
                    });
                }
                match directive.parameters().get(arg_name) {
                    Some(param) => if let Err(err) =
                        input_values.validate(arg_value, param.type_annotation(), false) {
                        errors.push(SelectionSetBuildError::InvalidArgumentValue {
                            argument_name: arg_name.to_string(),
                            err,
                            location: srcloc.clone(),
                        });
                    },
                    None => errors.push(SelectionSetBuildError::UndefinedDirectiveArgument {
                        argument_name: arg_name.to_string(),
                        directive_name: directive_name.to_string(),
                        location: srcloc.clone(),
                    }),
                }
            }
            for param in directive.parameters().values() {
                if param.is_required() && !provided.contains(param.name()) {
                    errors.push(SelectionSetBuildError::MissingRequiredDirectiveArgument {
                        argument_name: param.name().to_string(),
                        directive_name: directive_name.to_string(),
                        location: srcloc.clone(),
                    });
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(DirectiveAnnotation::from_ast(self.file_path, ast_directives))
    }

    pub(crate) fn from_ast(
        &self,
        parent_type: &'schema GraphQLType,
        ast: &ast::operation::SelectionSet,
    ) -> Result<SelectionSet<'schema>> {
        let input_values = InputValueValidator { schema: self.schema };
        let mut errors = vec![];
        let mut selections = vec![];
        for ast_selection in &ast.items {
            match ast_selection {
                ast::operation::Selection::Field(
                    ast::operation::Field {
                        alias,
                        arguments: ast_arguments,
                        directives: ast_directives,
                        name: field_name,
                        position: ast_position,
                        selection_set: ast_sub_selection_set,
                    }
                ) => {
                    let srcloc = loc::SourceLocation::from_pos(
                        self.file_path,
                        *ast_position,
                    );

                    let Some(field) = parent_type.field(field_name) else {
                        errors.push(SelectionSetBuildError::UndefinedFieldName {
                            location: srcloc,
                            parent_type_name: parent_type.name().to_string(),
                            undefined_field_name: field_name.to_string(),
                        });
                        continue;
                    };

                    let mut arguments = IndexMap::new();
                    for (arg_name, ast_arg_value) in ast_arguments {
                        match field.parameters().get(arg_name) {
                            Some(param) => if let Err(err) =
                                input_values.validate(ast_arg_value, param.type_annotation(), false) {
                                errors.push(SelectionSetBuildError::InvalidArgumentValue {
                                    argument_name: arg_name.to_string(),
                                    err,
                                    location: srcloc.clone(),
                                });
                            },
                            None => errors.push(SelectionSetBuildError::UndefinedArgument {
                                argument_name: arg_name.to_string(),
                                field_name: field_name.to_string(),
                                location: srcloc.clone(),
                                parent_type_name: parent_type.name().to_string(),
                            }),
                        }
                        if arguments.insert(
                            arg_name.to_string(),
                            ast_arg_value.clone(),
                        ).is_some() {
                            errors.push(SelectionSetBuildError::DuplicateFieldArgument {
                                argument_name: arg_name.to_string(),
                                location: srcloc.clone(),
                            });
                        }
                    }
                    for param in field.parameters().values() {
                        if param.is_required() && !arguments.contains_key(param.name()) {
                            errors.push(SelectionSetBuildError::MissingRequiredArgument {
                                argument_name: param.name().to_string(),
                                field_name: field_name.to_string(),
                                location: srcloc.clone(),
                                parent_type_name: parent_type.name().to_string(),
                            });
                        }
                    }

                    let field_type = field.type_annotation()
                        .innermost_named_type_annotation()
                        .type_ref()
                        .deref(self.schema)
                        .expect("type is present in schema");

                    let selection_set = match (
                        field_type.is_composite(),
                        ast_sub_selection_set.items.is_empty(),
                    ) {
                        (true, true) => {
                            errors.push(SelectionSetBuildError::MissingSubselection {
                                field_name: field_name.to_string(),
                                field_type_name: field_type.name().to_string(),
                                location: srcloc.clone(),
                            });
                            continue;
                        },

                        (true, false) => match self.from_ast(field_type, ast_sub_selection_set) {
                            Ok(selection_set) => selection_set,
                            Err(mut ss_errors) => {
                                errors.append(&mut ss_errors);
                                continue;
                            },
                        },

                        (false, false) => {
                            errors.push(SelectionSetBuildError::SubselectionOnLeafField {
                                field_name: field_name.to_string(),
                                field_type_name: field_type.name().to_string(),
                                location: srcloc.clone(),
                            });
                            continue;
                        },

                        (false, true) => SelectionSet::default(),
                    };

                    let directives = match self.directive_annotations(
                        ast_directives,
                        ast::schema::DirectiveLocation::Field,
                    ) {
                        Ok(directives) => directives,
                        Err(mut directive_errors) => {
                            errors.append(&mut directive_errors);
                            continue;
                        },
                    };

                    selections.push(Selection::Field(FieldSelection {
                        alias: alias.clone(),
                        arguments,
                        directives,
                        def_location: srcloc,
                        field,
                        selection_set,
                    }));
                },

                ast::operation::Selection::FragmentSpread(
                    ast::operation::FragmentSpread {
                        directives: ast_directives,
                        fragment_name,
                        position: ast_position,
                    }
                ) => {
                    let srcloc = loc::SourceLocation::from_pos(
                        self.file_path,
                        *ast_position,
                    );

                    if !self.fragment_names.contains(fragment_name) {
                        errors.push(SelectionSetBuildError::UndefinedFragment {
                            fragment_name: fragment_name.to_string(),
                            location: srcloc,
                        });
                        continue;
                    }

                    let directives = match self.directive_annotations(
                        ast_directives,
                        ast::schema::DirectiveLocation::FragmentSpread,
                    ) {
                        Ok(directives) => directives,
                        Err(mut directive_errors) => {
                            errors.append(&mut directive_errors);
                            continue;
                        },
                    };

                    selections.push(Selection::FragmentSpread(FragmentSpread {
                        def_location: srcloc.clone(),
                        directives,
                        fragment: Fragment::named_ref(fragment_name, srcloc),
                    }));
                },

                ast::operation::Selection::InlineFragment(
                    ast::operation::InlineFragment {
                        directives: ast_directives,
                        position: ast_position,
                        selection_set: ast_sub_selection_set,
                        type_condition: ast_type_condition,
                    }
                ) => {
                    let srcloc = loc::SourceLocation::from_pos(
                        self.file_path,
                        *ast_position,
                    );

                    let fragment_type = match ast_type_condition {
                        Some(ast::operation::TypeCondition::On(type_name)) =>
                            match self.type_condition(type_name, &srcloc) {
                                Ok(fragment_type) => fragment_type,
                                Err(err) => {
                                    errors.push(err);
                                    continue;
                                },
                            },
                        None => parent_type,
                    };

                    let selection_set = match self.from_ast(
                        fragment_type,
                        ast_sub_selection_set,
                    ) {
                        Ok(selection_set) => selection_set,
                        Err(mut ss_errors) => {
                            errors.append(&mut ss_errors);
                            continue;
                        },
                    };

                    let directives = match self.directive_annotations(
                        ast_directives,
                        ast::schema::DirectiveLocation::InlineFragment,
                    ) {
                        Ok(directives) => directives,
                        Err(mut directive_errors) => {
                            errors.append(&mut directive_errors);
                            continue;
                        },
                    };

                    selections.push(Selection::InlineFragment(InlineFragment {
                        directives,
                        selection_set,
                        type_condition: ast_type_condition.as_ref().map(
                            |ast::operation::TypeCondition::On(type_name)|
                                GraphQLType::named_ref(type_name, srcloc.clone()),
                        ),
                        def_location: srcloc,
                    }));
                },
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SelectionSet { selections })
    }

    /// Look up the type named by a `... on Type` condition. Only composite
    /// types may appear in a type condition.
    pub(crate) fn type_condition(
        &self,
        type_name: &str,
        location: &loc::SourceLocation,
    ) -> std::result::Result<&'schema GraphQLType, SelectionSetBuildError> {
        match self.schema.lookup_type(type_name) {
            Some(graphql_type) if graphql_type.is_composite() => Ok(graphql_type),
            Some(graphql_type) => Err(SelectionSetBuildError::NonCompositeTypeCondition {
                location: location.clone(),
                type_kind: graphql_type.type_kind(),
                type_name: type_name.to_string(),
            }),
            None => Err(SelectionSetBuildError::UndefinedTypeCondition {
                location: location.clone(),
                type_name: type_name.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionSetBuildError {
    #[error("The `@{directive_name}` directive is applied more than once at {location}")]
    DuplicateDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Argument `{argument_name}` was specified more than once at {location}")]
    DuplicateFieldArgument {
        argument_name: String,
        location: loc::SourceLocation,
    },

    #[error("Invalid value for argument `{argument_name}` at {location}: {err}")]
    InvalidArgumentValue {
        argument_name: String,
        err: InputValueError,
        location: loc::SourceLocation,
    },

    #[error(
        "The `@{directive_name}` directive at {location} may not be applied \
        at {directive_location} locations"
    )]
    MisplacedDirective {
        directive_location: &'static str,
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Field `{parent_type_name}.{field_name}` requires the argument \
        `{argument_name}`, but it was not provided at {location}"
    )]
    MissingRequiredArgument {
        argument_name: String,
        field_name: String,
        location: loc::SourceLocation,
        parent_type_name: String,
    },

    #[error(
        "The `@{directive_name}` directive requires the argument \
        `{argument_name}`, but it was not provided at {location}"
    )]
    MissingRequiredDirectiveArgument {
        argument_name: String,
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Field `{field_name}` at {location} is of composite type \
        `{field_type_name}` and must select at least one sub-field"
    )]
    MissingSubselection {
        field_name: String,
        field_type_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Type condition `{type_name}` at {location} names a type of \
        kind {type_kind}; type conditions must name a composite type"
    )]
    NonCompositeTypeCondition {
        location: loc::SourceLocation,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "Field `{field_name}` at {location} is of leaf type `{field_type_name}` \
        and cannot have sub-selections"
    )]
    SubselectionOnLeafField {
        field_name: String,
        field_type_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Field `{parent_type_name}.{field_name}` has no argument named \
        `{argument_name}` ({location})"
    )]
    UndefinedArgument {
        argument_name: String,
        field_name: String,
        location: loc::SourceLocation,
        parent_type_name: String,
    },

    #[error("Unknown directive `@{directive_name}` at {location}")]
    UndefinedDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "The `@{directive_name}` directive has no argument named \
        `{argument_name}` ({location})"
    )]
    UndefinedDirectiveArgument {
        argument_name: String,
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Attempted to select a field named `{undefined_field_name}` on the \
        `{parent_type_name}` type at {location}, but `{parent_type_name}` has \
        no such field defined."
    )]
    UndefinedFieldName {
        location: loc::SourceLocation,
        parent_type_name: String,
        undefined_field_name: String,
    },

    #[error("Spread of undefined fragment `{fragment_name}` at {location}")]
    UndefinedFragment {
        fragment_name: String,
        location: loc::SourceLocation,
    },

    #[error("Type condition at {location} names an undefined type `{type_name}`")]
    UndefinedTypeCondition {
        location: loc::SourceLocation,
        type_name: String,
    },
}
