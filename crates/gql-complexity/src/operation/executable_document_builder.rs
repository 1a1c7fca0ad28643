use crate::ast;
use crate::DirectiveAnnotation;
use crate::file_reader;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::operation::ExecutableDocument;
use crate::operation::Fragment;
use crate::operation::FragmentRegistry;
use crate::operation::InputValueError;
use crate::operation::InputValueValidator;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::SelectionSetBuilder;
use crate::operation::SelectionSetBuildError;
use crate::operation::Variable;
use crate::operation::VariableUsage;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<ExecutableDocumentBuildError>>;

/// Builds a validated [`ExecutableDocument`] from GraphQL source text (or an
/// already-parsed AST) against a [`Schema`].
///
/// Construction (`from_ast`/`from_str`/`from_file`) validates each operation
/// and fragment definition on its own. [`ExecutableDocumentBuilder::build`]
/// then validates the document as a whole: fragment spreads must not form
/// cycles, every fragment must be spread by at least one operation, and each
/// operation must declare exactly the variables it (and the fragments it
/// reaches) uses, with types that fit where they are used. All errors found
/// in a phase are reported together.
///
/// ```
/// use gql_complexity::operation::ExecutableDocumentBuilder;
/// use gql_complexity::schema::SchemaBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::from_str(
///     None,
///     "type Query { hello: String }",
/// )?.build()?;
///
/// let doc = ExecutableDocumentBuilder::from_str(
///     &schema,
///     "query Greeting { hello }",
///     None,
/// ).and_then(|builder| builder.build()).unwrap();
///
/// assert_eq!(doc.operations().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ExecutableDocumentBuilder<'schema> {
    fragments: HashMap<String, Fragment<'schema>>,
    operations: Vec<Operation<'schema>>,
    schema: &'schema Schema,
}
impl<'schema> ExecutableDocumentBuilder<'schema> {
    pub fn build(self) -> Result<ExecutableDocument<'schema>> {
        let errors = {
            let spread_graph = self.spread_graph();
            let mut errors = build_cycle_errors(&spread_graph);
            errors.extend(self.validate_all_fragments_used(&spread_graph));
            errors.extend(self.validate_variable_usages(&spread_graph));
            errors
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ExecutableDocument {
            fragment_registry: FragmentRegistry {
                fragments: self.fragments,
            },
            operations: self.operations,
        })
    }

    pub fn from_ast(
        schema: &'schema Schema,
        ast: &ast::operation::Document,
        file_path: Option<&Path>,
    ) -> Result<Self> {
        use ast::operation::Definition as Def;

        let fragment_names: HashSet<String> = ast.definitions.iter()
            .filter_map(|def| match def {
                Def::Fragment(frag_def) => Some(frag_def.name.to_string()),
                Def::Operation(_) => None,
            })
            .collect();
        let selection_set_builder = SelectionSetBuilder {
            file_path,
            fragment_names: &fragment_names,
            schema,
        };

        let mut errors = vec![];
        let mut fragments: HashMap<String, Fragment<'schema>> = HashMap::new();
        let mut operations = vec![];
        let mut named_op_locations: HashMap<String, loc::SourceLocation> = HashMap::new();
        let mut anonymous_op_locations = vec![];
        let mut num_operation_defs = 0;
        for def in &ast.definitions {
            match def {
                Def::Fragment(frag_def) => {
                    let srcloc = loc::SourceLocation::from_pos(
                        file_path,
                        frag_def.position,
                    );

                    if let Some(existing) = fragments.get(&frag_def.name) {
                        errors.push(ExecutableDocumentBuildError::DuplicateFragmentDefinition {
                            fragment_name: frag_def.name.to_string(),
                            first_def_location: existing.def_location.clone(),
                            second_def_location: srcloc,
                        });
                        continue;
                    }

                    let ast::operation::TypeCondition::On(type_name) =
                        &frag_def.type_condition;
                    let fragment_type = match selection_set_builder.type_condition(
                        type_name,
                        &srcloc,
                    ) {
                        Ok(fragment_type) => fragment_type,
                        Err(err) => {
                            errors.push(err.into());
                            continue;
                        },
                    };

                    let selection_set = match selection_set_builder.from_ast(
                        fragment_type,
                        &frag_def.selection_set,
                    ) {
                        Ok(selection_set) => selection_set,
                        Err(ss_errors) => {
                            errors.extend(ss_errors.into_iter().map(Into::into));
                            continue;
                        },
                    };

                    let directives = match selection_set_builder.directive_annotations(
                        &frag_def.directives,
                        ast::schema::DirectiveLocation::FragmentDefinition,
                    ) {
                        Ok(directives) => directives,
                        Err(d_errors) => {
                            errors.extend(d_errors.into_iter().map(Into::into));
                            continue;
                        },
                    };

                    fragments.insert(frag_def.name.to_string(), Fragment {
                        directives,
                        name: frag_def.name.to_string(),
                        selection_set,
                        type_condition: GraphQLType::named_ref(
                            type_name,
                            srcloc.clone(),
                        ),
                        def_location: srcloc,
                    });
                },

                Def::Operation(op_def) => {
                    use ast::operation::OperationDefinition as OpDef;
                    num_operation_defs += 1;

                    let no_var_defs: &[ast::operation::VariableDefinition] = &[];
                    let no_directives: &[ast::operation::Directive] = &[];

                    let (
                        kind,
                        name,
                        position,
                        ast_var_defs,
                        ast_directives,
                        ast_selection_set,
                    ) = match op_def {
                        OpDef::SelectionSet(selection_set) => (
                            OperationKind::Query,
                            None,
                            selection_set.span.0,
                            no_var_defs,
                            no_directives,
                            selection_set,
                        ),
                        OpDef::Query(query) => (
                            OperationKind::Query,
                            query.name.as_ref(),
                            query.position,
                            &query.variable_definitions[..],
                            &query.directives[..],
                            &query.selection_set,
                        ),
                        OpDef::Mutation(mutation) => (
                            OperationKind::Mutation,
                            mutation.name.as_ref(),
                            mutation.position,
                            &mutation.variable_definitions[..],
                            &mutation.directives[..],
                            &mutation.selection_set,
                        ),
                        OpDef::Subscription(subscription) => (
                            OperationKind::Subscription,
                            subscription.name.as_ref(),
                            subscription.position,
                            &subscription.variable_definitions[..],
                            &subscription.directives[..],
                            &subscription.selection_set,
                        ),
                    };
                    let srcloc = loc::SourceLocation::from_pos(file_path, position);

                    match name {
                        Some(name) => {
                            if let Some(first_def_location) = named_op_locations.get(name) {
                                errors.push(ExecutableDocumentBuildError::DuplicateOperationName {
                                    first_def_location: first_def_location.clone(),
                                    operation_name: name.to_string(),
                                    second_def_location: srcloc.clone(),
                                });
                            } else {
                                named_op_locations.insert(name.to_string(), srcloc.clone());
                            }
                        },
                        None => anonymous_op_locations.push(srcloc.clone()),
                    }

                    let Some(root_type) = schema.root_operation_type(&kind) else {
                        errors.push(ExecutableDocumentBuildError::UndefinedRootOperationType {
                            location: srcloc,
                            operation_kind: kind,
                        });
                        continue;
                    };

                    let variables = match build_variables(schema, ast_var_defs, file_path) {
                        Ok(variables) => variables,
                        Err(mut var_errors) => {
                            errors.append(&mut var_errors);
                            continue;
                        },
                    };

                    let selection_set = match selection_set_builder.from_ast(
                        root_type,
                        ast_selection_set,
                    ) {
                        Ok(selection_set) => selection_set,
                        Err(ss_errors) => {
                            errors.extend(ss_errors.into_iter().map(Into::into));
                            continue;
                        },
                    };

                    let directive_location = match kind {
                        OperationKind::Mutation => ast::schema::DirectiveLocation::Mutation,
                        OperationKind::Query => ast::schema::DirectiveLocation::Query,
                        OperationKind::Subscription =>
                            ast::schema::DirectiveLocation::Subscription,
                    };
                    let directives = match selection_set_builder.directive_annotations(
                        ast_directives,
                        directive_location,
                    ) {
                        Ok(directives) => directives,
                        Err(d_errors) => {
                            errors.extend(d_errors.into_iter().map(Into::into));
                            continue;
                        },
                    };

                    operations.push(Operation {
                        def_location: srcloc,
                        directives,
                        kind,
                        name: name.cloned(),
                        selection_set,
                        variables,
                    });
                },
            }
        }

        if num_operation_defs > 1 {
            errors.extend(anonymous_op_locations.into_iter().map(
                |location| ExecutableDocumentBuildError::AnonymousOperationNotAlone {
                    location,
                },
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            fragments,
            operations,
            schema,
        })
    }

    pub fn from_file(
        schema: &'schema Schema,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let file_path = file_path.as_ref();
        let file_content = file_reader::read_content(file_path)
            .map_err(|e| ExecutableDocumentBuildError::ExecutableDocumentFileReadError(
                Box::new(e),
            ))?;
        Self::from_str(schema, file_content, Some(file_path))
    }

    pub fn from_str(
        schema: &'schema Schema,
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<Self> {
        let ast_doc = ast::operation::parse(content.as_ref())
            .map_err(|e| vec![e.into()])?;
        Self::from_ast(schema, &ast_doc, file_path)
    }

    /// Each fragment's name mapped to the names it spreads directly.
    fn spread_graph(&self) -> BTreeMap<&str, Vec<&str>> {
        self.fragments.iter().map(|(fragment_name, fragment)| {
            let mut spreads = vec![];
            collect_direct_spreads(&fragment.selection_set, &mut spreads);
            (fragment_name.as_str(), spreads)
        }).collect()
    }

    fn validate_all_fragments_used(
        &self,
        spread_graph: &BTreeMap<&str, Vec<&str>>,
    ) -> Vec<ExecutableDocumentBuildError> {
        let reachable = reachable_fragments(
            self.operations.iter().map(|operation| &operation.selection_set),
            spread_graph,
        );

        spread_graph.keys()
            .filter(|fragment_name| !reachable.contains(*fragment_name))
            .map(|fragment_name| {
                let fragment = &self.fragments[*fragment_name];
                ExecutableDocumentBuildError::UnusedFragment {
                    def_location: fragment.def_location.clone(),
                    fragment_name: fragment.name.to_string(),
                }
            })
            .collect()
    }

    /// Every variable an operation uses (directly or through the fragments
    /// it reaches) must be declared by that operation with a type that fits
    /// each position it is used in, and every declared variable must be used.
    fn validate_variable_usages(
        &self,
        spread_graph: &BTreeMap<&str, Vec<&str>>,
    ) -> Vec<ExecutableDocumentBuildError> {
        let input_values = InputValueValidator { schema: self.schema };
        let fragment_usages: HashMap<&str, Vec<VariableUsage<'_>>> =
            self.fragments.iter().map(|(fragment_name, fragment)| {
                let mut usages = vec![];
                collect_directive_variable_usages(
                    &input_values,
                    &fragment.directives,
                    &mut usages,
                );
                collect_selection_variable_usages(
                    &input_values,
                    &fragment.selection_set,
                    &mut usages,
                );
                (fragment_name.as_str(), usages)
            }).collect();

        let mut errors = vec![];
        for operation in &self.operations {
            let mut usages = vec![];
            collect_directive_variable_usages(
                &input_values,
                &operation.directives,
                &mut usages,
            );
            collect_selection_variable_usages(
                &input_values,
                &operation.selection_set,
                &mut usages,
            );
            let mut reachable: Vec<&str> = reachable_fragments(
                std::iter::once(&operation.selection_set),
                spread_graph,
            ).into_iter().collect();
            reachable.sort_unstable();
            for fragment_name in reachable {
                if let Some(frag_usages) = fragment_usages.get(fragment_name) {
                    usages.extend(frag_usages.iter().copied());
                }
            }

            let mut used = HashSet::new();
            for usage in usages {
                let Some(variable) = operation.variables.iter().find(
                    |variable| variable.name == usage.variable_name,
                ) else {
                    errors.push(ExecutableDocumentBuildError::UndefinedVariable {
                        location: usage.location.clone(),
                        operation_name: operation.name.clone(),
                        variable_name: usage.variable_name.to_string(),
                    });
                    continue;
                };
                used.insert(variable.name.as_str());

                let has_default = variable.default_value.as_ref().is_some_and(
                    |value| !matches!(value, ast::operation::Value::Null),
                );
                if !usage.expected_type.accepts_variable_of_type(
                    &variable.type_annotation,
                    usage.default_provided || has_default,
                ) {
                    errors.push(ExecutableDocumentBuildError::VariableTypeMismatch {
                        expected_type: usage.expected_type.to_string(),
                        location: usage.location.clone(),
                        variable_name: variable.name.to_string(),
                        variable_type: variable.type_annotation.to_string(),
                    });
                }
            }

            errors.extend(
                operation.variables.iter()
                    .filter(|variable| !used.contains(variable.name.as_str()))
                    .map(|variable| ExecutableDocumentBuildError::UnusedVariable {
                        def_location: variable.def_location.clone(),
                        operation_name: operation.name.clone(),
                        variable_name: variable.name.to_string(),
                    }),
            );
        }
        errors
    }
}

/// Names of every fragment spread from `selection_sets`, directly or through
/// other fragments.
fn reachable_fragments<'a, 'schema: 'a>(
    selection_sets: impl IntoIterator<Item = &'a SelectionSet<'schema>>,
    spread_graph: &BTreeMap<&'a str, Vec<&'a str>>,
) -> HashSet<&'a str> {
    let mut pending = vec![];
    for selection_set in selection_sets {
        collect_direct_spreads(selection_set, &mut pending);
    }

    let mut reachable = HashSet::new();
    while let Some(fragment_name) = pending.pop() {
        if reachable.insert(fragment_name)
            && let Some(spreads) = spread_graph.get(fragment_name) {
            pending.extend(spreads);
        }
    }
    reachable
}

fn collect_directive_variable_usages<'a, 'schema: 'a>(
    input_values: &InputValueValidator<'schema>,
    directives: &'a [DirectiveAnnotation],
    usages: &mut Vec<VariableUsage<'a>>,
) {
    for directive in directives {
        let Some(definition) = input_values.schema.directive(directive.name()) else {
            continue;
        };
        for (arg_name, arg_value) in directive.arguments() {
            if let Some(param) = definition.parameters().get(arg_name) {
                input_values.collect_variable_usages(
                    arg_value,
                    param.type_annotation(),
                    param.default_value().is_some(),
                    directive.def_location(),
                    usages,
                );
            }
        }
    }
}

/// Variables used by the arguments and directives within `selection_set`,
/// without following fragment spreads.
fn collect_selection_variable_usages<'a, 'schema: 'a>(
    input_values: &InputValueValidator<'schema>,
    selection_set: &'a SelectionSet<'schema>,
    usages: &mut Vec<VariableUsage<'a>>,
) {
    for selection in selection_set.selections() {
        match selection {
            Selection::Field(field) => {
                collect_directive_variable_usages(input_values, field.directives(), usages);
                let parameters = field.field().parameters();
                for (arg_name, arg_value) in field.arguments() {
                    if let Some(param) = parameters.get(arg_name) {
                        input_values.collect_variable_usages(
                            arg_value,
                            param.type_annotation(),
                            param.default_value().is_some(),
                            field.def_location(),
                            usages,
                        );
                    }
                }
                collect_selection_variable_usages(input_values, field.selection_set(), usages);
            },

            Selection::FragmentSpread(spread) =>
                collect_directive_variable_usages(input_values, spread.directives(), usages),

            Selection::InlineFragment(inline) => {
                collect_directive_variable_usages(input_values, inline.directives(), usages);
                collect_selection_variable_usages(input_values, inline.selection_set(), usages);
            },
        }
    }
}

fn build_cycle_errors(
    spread_graph: &BTreeMap<&str, Vec<&str>>,
) -> Vec<ExecutableDocumentBuildError> {
    let mut errors = vec![];
    let mut visit_states = HashMap::new();
    for &fragment_name in spread_graph.keys() {
        find_spread_cycles(
            fragment_name,
            spread_graph,
            &mut vec![],
            &mut visit_states,
            &mut errors,
        );
    }
    errors
}

/// Names of the fragments spread anywhere within `selection_set`, without
/// following the spreads themselves. Each name is recorded once.
fn collect_direct_spreads<'a>(
    selection_set: &'a SelectionSet<'_>,
    spreads: &mut Vec<&'a str>,
) {
    for selection in selection_set.selections() {
        match selection {
            Selection::Field(field) =>
                collect_direct_spreads(field.selection_set(), spreads),

            Selection::FragmentSpread(spread) => {
                if !spreads.contains(&spread.fragment_name()) {
                    spreads.push(spread.fragment_name());
                }
            },

            Selection::InlineFragment(inline) =>
                collect_direct_spreads(inline.selection_set(), spreads),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum VisitState {
    Finished,
    OnStack,
}

/// Depth-first walk of the spread graph. Every spread back onto the current
/// walk is a cycle, reported as the path from the spread fragment back to
/// itself. Finished fragments are never re-walked, so each cycle is reported
/// once.
fn find_spread_cycles<'a>(
    fragment_name: &'a str,
    spread_graph: &BTreeMap<&'a str, Vec<&'a str>>,
    walk: &mut Vec<&'a str>,
    visit_states: &mut HashMap<&'a str, VisitState>,
    errors: &mut Vec<ExecutableDocumentBuildError>,
) {
    match visit_states.get(fragment_name) {
        Some(VisitState::Finished) => return,
        Some(VisitState::OnStack) => {
            let cycle_start = walk.iter()
                .position(|walked| *walked == fragment_name)
                .unwrap_or(0);
            let mut cycle_path: Vec<String> = walk[cycle_start..].iter()
                .map(|walked| walked.to_string())
                .collect();
            cycle_path.push(fragment_name.to_string());
            errors.push(ExecutableDocumentBuildError::FragmentCycleDetected { cycle_path });
            return;
        },
        None => (),
    }

    // Spreads of undefined fragments were reported while building.
    let Some(spreads) = spread_graph.get(fragment_name) else {
        return;
    };

    visit_states.insert(fragment_name, VisitState::OnStack);
    walk.push(fragment_name);
    for &spread_name in spreads {
        find_spread_cycles(spread_name, spread_graph, walk, visit_states, errors);
    }
    walk.pop();
    visit_states.insert(fragment_name, VisitState::Finished);
}

fn build_variables(
    schema: &Schema,
    ast_var_defs: &[ast::operation::VariableDefinition],
    file_path: Option<&Path>,
) -> Result<Vec<Variable>> {
    let input_values = InputValueValidator { schema };
    let mut errors = vec![];
    let mut variables: Vec<Variable> = vec![];
    for ast_var_def in ast_var_defs {
        let srcloc = loc::SourceLocation::from_pos(file_path, ast_var_def.position);

        if variables.iter().any(|var| var.name == ast_var_def.name) {
            errors.push(ExecutableDocumentBuildError::DuplicateVariableName {
                location: srcloc,
                variable_name: ast_var_def.name.to_string(),
            });
            continue;
        }

        let type_annotation = TypeAnnotation::from_ast_type(&srcloc, &ast_var_def.var_type);
        let type_name = type_annotation.innermost_named_type_annotation().graphql_type_name();
        match schema.lookup_type(type_name) {
            None => errors.push(ExecutableDocumentBuildError::UndefinedVariableType {
                location: srcloc.clone(),
                type_name: type_name.to_string(),
                variable_name: ast_var_def.name.to_string(),
            }),
            Some(var_type) if !var_type.is_input_type() =>
                errors.push(ExecutableDocumentBuildError::NonInputVariableType {
                    location: srcloc.clone(),
                    type_name: type_name.to_string(),
                    variable_name: ast_var_def.name.to_string(),
                }),
            Some(_) => if let Some(default_value) = &ast_var_def.default_value
                && let Err(err) = input_values.validate(default_value, &type_annotation, true) {
                errors.push(ExecutableDocumentBuildError::InvalidVariableDefaultValue {
                    err,
                    location: srcloc.clone(),
                    variable_name: ast_var_def.name.to_string(),
                });
            },
        }

        variables.push(Variable {
            def_location: srcloc,
            default_value: ast_var_def.default_value.clone(),
            name: ast_var_def.name.to_string(),
            type_annotation,
        });
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(variables)
}

#[derive(Debug, Error)]
pub enum ExecutableDocumentBuildError {
    #[error(
        "Anonymous operation at {location} must be the only operation in its \
        document"
    )]
    AnonymousOperationNotAlone {
        location: loc::SourceLocation,
    },

    #[error("Duplicate fragment definition: '{fragment_name}' ({second_def_location})")]
    DuplicateFragmentDefinition {
        fragment_name: String,
        first_def_location: loc::SourceLocation,
        second_def_location: loc::SourceLocation,
    },

    #[error(
        "Operation name `{operation_name}` is defined at both \
        {first_def_location} and {second_def_location}"
    )]
    DuplicateOperationName {
        first_def_location: loc::SourceLocation,
        operation_name: String,
        second_def_location: loc::SourceLocation,
    },

    #[error("Variable `${variable_name}` is declared more than once ({location})")]
    DuplicateVariableName {
        location: loc::SourceLocation,
        variable_name: String,
    },

    #[error(
        "Failure while trying to read an executable document file from disk: {0}"
    )]
    ExecutableDocumentFileReadError(Box<file_reader::ReadContentError>),

    #[error("Fragment cycle detected: {}", .cycle_path.join(" → "))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error("{0}")]
    InvalidSelection(SelectionSetBuildError),

    #[error("Invalid default value for variable `${variable_name}` at {location}: {err}")]
    InvalidVariableDefaultValue {
        err: InputValueError,
        location: loc::SourceLocation,
        variable_name: String,
    },

    #[error(
        "Variable `${variable_name}` at {location} is declared with type \
        `{type_name}`, which is not an input type"
    )]
    NonInputVariableType {
        location: loc::SourceLocation,
        type_name: String,
        variable_name: String,
    },

    #[error("Error parsing executable document: {0}")]
    ParseError(Arc<ast::operation::ParseError>),

    #[error(
        "The schema does not define a root type for {operation_kind} \
        operations ({location})"
    )]
    UndefinedRootOperationType {
        location: loc::SourceLocation,
        operation_kind: OperationKind,
    },

    #[error(
        "Variable `${variable_name}` at {location} is declared with undefined \
        type `{type_name}`"
    )]
    UndefinedVariableType {
        location: loc::SourceLocation,
        type_name: String,
        variable_name: String,
    },

    #[error(
        "Variable `${variable_name}` is used at {location} but is not declared \
        by operation `{}`",
        .operation_name.as_deref().unwrap_or("<anonymous>")
    )]
    UndefinedVariable {
        location: loc::SourceLocation,
        operation_name: Option<String>,
        variable_name: String,
    },

    #[error("Fragment `{fragment_name}` ({def_location}) is never used")]
    UnusedFragment {
        def_location: loc::SourceLocation,
        fragment_name: String,
    },

    #[error(
        "Variable `${variable_name}` ({def_location}) is declared by operation \
        `{}` but never used",
        .operation_name.as_deref().unwrap_or("<anonymous>")
    )]
    UnusedVariable {
        def_location: loc::SourceLocation,
        operation_name: Option<String>,
        variable_name: String,
    },

    #[error(
        "Variable `${variable_name}` of type `{variable_type}` cannot be used \
        at {location}, which expects `{expected_type}`"
    )]
    VariableTypeMismatch {
        expected_type: String,
        location: loc::SourceLocation,
        variable_name: String,
        variable_type: String,
    },
}
impl std::convert::From<ast::operation::ParseError> for ExecutableDocumentBuildError {
    fn from(value: ast::operation::ParseError) -> Self {
        Self::ParseError(Arc::new(value))
    }
}
impl std::convert::From<SelectionSetBuildError> for ExecutableDocumentBuildError {
    fn from(value: SelectionSetBuildError) -> Self {
        Self::InvalidSelection(value)
    }
}
impl std::convert::From<ExecutableDocumentBuildError> for Vec<ExecutableDocumentBuildError> {
    fn from(value: ExecutableDocumentBuildError) -> Self {
        vec![value]
    }
}
