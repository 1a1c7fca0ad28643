use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = ["deprecated", "include", "skip", "specifiedBy"];

#[derive(Debug)]
struct RootOperationTypeNames {
    def_location: loc::SourceLocation,
    mutation: Option<String>,
    query: Option<String>,
    subscription: Option<String>,
}

/// Utility for building a [Schema] from one or more SDL sources.
///
/// Type extensions are applied only once every source has been loaded, so an
/// `extend type` may appear in a different file (or earlier in the same file)
/// than the type it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    directives: HashMap<String, Directive>,
    root_operation_types: Option<RootOperationTypeNames>,
    str_load_counter: u16,
    type_extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    types: HashMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (file_path, type_ext) in std::mem::take(&mut self.type_extensions) {
            self.visit_ast_type_extension(file_path.as_path(), type_ext)?;
        }

        let type_errors = validate_type_references(&self.types, &self.directives);
        if !type_errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors(type_errors));
        }

        let root_names = match self.root_operation_types.take() {
            Some(root_names) => root_names,
            None => RootOperationTypeNames {
                def_location: loc::SourceLocation::builtin(),
                mutation: self.types.contains_key("Mutation")
                    .then(|| "Mutation".to_string()),
                query: self.types.contains_key("Query")
                    .then(|| "Query".to_string()),
                subscription: self.types.contains_key("Subscription")
                    .then(|| "Subscription".to_string()),
            },
        };

        let query_type = match root_names.query {
            Some(type_name) => self.root_operation_type_ref(
                OperationKind::Query,
                type_name,
                &root_names.def_location,
            )?,
            None => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
        };

        let mutation_type = root_names.mutation.map(|type_name| {
            self.root_operation_type_ref(
                OperationKind::Mutation,
                type_name,
                &root_names.def_location,
            )
        }).transpose()?;

        let subscription_type = root_names.subscription.map(|type_name| {
            self.root_operation_type_ref(
                OperationKind::Subscription,
                type_name,
                &root_names.def_location,
            )
        }).transpose()?;

        Ok(Schema {
            directives: self.directives,
            query_type,
            mutation_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn from_files<P: AsRef<Path>>(file_paths: &[P]) -> Result<Self> {
        let mut builder = Self::new();
        for file_path in file_paths {
            builder.load_file(file_path)?;
        }
        Ok(builder)
    }

    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let mut builder = Self::new();
        builder.load_str(file_path, content.as_ref())?;
        Ok(builder)
    }

    pub fn load_file(&mut self, file_path: impl AsRef<Path>) -> Result<()> {
        let file_path = file_path.as_ref();
        let file_content = file_reader::read_content(file_path)
            .map_err(|err| SchemaBuildError::SchemaFileReadError(Box::new(err)))?;
        self.load_str(Some(file_path), file_content.as_str())
    }

    pub fn load_str(
        &mut self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<()> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path.to_path_buf()
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(())
    }

    pub fn new() -> Self {
        let types = HashMap::from([
            ("Boolean".to_string(), GraphQLType::Bool),
            ("Float".to_string(), GraphQLType::Float),
            ("ID".to_string(), GraphQLType::ID),
            ("Int".to_string(), GraphQLType::Int),
            ("String".to_string(), GraphQLType::String),
        ]);

        Self {
            directives: builtin_directives(),
            root_operation_types: None,
            str_load_counter: 0,
            type_extensions: vec![],
            types,
        }
    }

    fn root_operation_type_ref(
        &self,
        operation: OperationKind,
        type_name: String,
        def_location: &loc::SourceLocation,
    ) -> Result<NamedGraphQLTypeRef> {
        match self.types.get(&type_name) {
            Some(GraphQLType::Object(obj_type)) => Ok(GraphQLType::named_ref(
                type_name.as_str(),
                if def_location.file.is_some() {
                    def_location.clone()
                } else {
                    obj_type.def_location().clone()
                },
            )),

            _ => Err(SchemaBuildError::InvalidRootOperationType {
                operation,
                type_name,
            }),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.type_extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_pos(Some(file_path), def.position);

        if BUILTIN_DIRECTIVE_NAMES.contains(&def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                def_location,
                directive_name: def.name,
            });
        }

        if def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location,
                directive_name: def.name,
            });
        }

        if let Some(existing) = self.directives.get(&def.name) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name,
                first_def_location: existing.def_location.clone(),
                second_def_location: def_location,
            });
        }

        let mut parameters = IndexMap::new();
        add_input_values(file_path, def.arguments, &mut parameters).map_err(
            |(def_location, param_name)| SchemaBuildError::DuplicateDirectiveParameterDefinition {
                def_location,
                directive_name: def.name.to_string(),
                param_name,
            },
        )?;

        tracing::trace!(directive = def.name.as_str(), "Loaded directive definition");
        self.directives.insert(def.name.to_string(), Directive {
            def_location,
            locations: def.locations,
            name: def.name,
            parameters,
            repeatable: def.repeatable,
        });
        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_pos(
            Some(file_path),
            schema_def.position,
        );

        if let Some(existing) = &self.root_operation_types {
            return Err(SchemaBuildError::DuplicateSchemaDefinition {
                location1: existing.def_location.clone(),
                location2: def_location,
            });
        }

        self.root_operation_types = Some(RootOperationTypeNames {
            def_location,
            mutation: schema_def.mutation,
            query: schema_def.query,
            subscription: schema_def.subscription,
        });
        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition as TypeDef;

        let (type_name, position) = match &def {
            TypeDef::Enum(def) => (def.name.clone(), def.position),
            TypeDef::InputObject(def) => (def.name.clone(), def.position),
            TypeDef::Interface(def) => (def.name.clone(), def.position),
            TypeDef::Object(def) => (def.name.clone(), def.position),
            TypeDef::Scalar(def) => (def.name.clone(), def.position),
            TypeDef::Union(def) => (def.name.clone(), def.position),
        };
        let def_location = loc::SourceLocation::from_pos(Some(file_path), position);

        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location,
                type_name,
            });
        }

        if let Some(existing) = self.types.get(&type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                existing_type_kind: existing.type_kind(),
                def_location,
                type_name,
            });
        }

        let graphql_type = match def {
            TypeDef::Enum(enum_def) => {
                if enum_def.values.is_empty() {
                    return Err(SchemaBuildError::EnumWithNoVariants {
                        def_location,
                        type_name,
                    });
                }
                GraphQLType::Enum(Box::new(EnumType {
                    def_location,
                    name: type_name.clone(),
                    values: enum_def.values.into_iter().map(|value| value.name).collect(),
                }))
            },

            TypeDef::InputObject(input_def) => {
                let mut fields = IndexMap::new();
                add_input_values(file_path, input_def.fields, &mut fields).map_err(
                    |(def_location, field_name)| SchemaBuildError::DuplicateInputFieldDefinition {
                        def_location,
                        field_name,
                        type_name: type_name.to_string(),
                    },
                )?;
                GraphQLType::InputObject(Box::new(InputObjectType {
                    def_location,
                    fields,
                    name: type_name.clone(),
                }))
            },

            TypeDef::Interface(iface_def) => {
                let mut data = ObjectOrInterfaceTypeData::new(&type_name, def_location);
                add_interfaces(&mut data, iface_def.implements_interfaces)?;
                add_fields(&mut data, file_path, iface_def.fields)?;
                GraphQLType::Interface(Box::new(InterfaceType(data)))
            },

            TypeDef::Object(obj_def) => {
                let mut data = ObjectOrInterfaceTypeData::new(&type_name, def_location);
                add_interfaces(&mut data, obj_def.implements_interfaces)?;
                add_fields(&mut data, file_path, obj_def.fields)?;
                GraphQLType::Object(Box::new(ObjectType(data)))
            },

            TypeDef::Scalar(_) => GraphQLType::Scalar(Box::new(ScalarType {
                def_location,
                name: type_name.clone(),
            })),

            TypeDef::Union(union_def) => {
                let mut union_type = UnionType::new(&type_name, def_location);
                add_union_members(&mut union_type, union_def.types)?;
                GraphQLType::Union(Box::new(union_type))
            },
        };

        self.types.insert(type_name, graphql_type);
        Ok(())
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension as TypeExt;

        match ext {
            TypeExt::Enum(enum_ext) => {
                let ext_loc = loc::SourceLocation::from_pos(Some(file_path), enum_ext.position);
                let target = extension_target(
                    &mut self.types,
                    enum_ext.name.as_str(),
                    GraphQLTypeKind::Enum,
                    ext_loc,
                )?;
                if let GraphQLType::Enum(enum_type) = target {
                    enum_type.values.extend(
                        enum_ext.values.into_iter().map(|value| value.name),
                    );
                }
            },

            TypeExt::InputObject(input_ext) => {
                let ext_loc = loc::SourceLocation::from_pos(Some(file_path), input_ext.position);
                let target = extension_target(
                    &mut self.types,
                    input_ext.name.as_str(),
                    GraphQLTypeKind::InputObject,
                    ext_loc,
                )?;
                if let GraphQLType::InputObject(input_type) = target {
                    add_input_values(file_path, input_ext.fields, &mut input_type.fields).map_err(
                        |(def_location, field_name)| SchemaBuildError::DuplicateInputFieldDefinition {
                            def_location,
                            field_name,
                            type_name: input_ext.name.to_string(),
                        },
                    )?;
                }
            },

            TypeExt::Interface(iface_ext) => {
                let ext_loc = loc::SourceLocation::from_pos(Some(file_path), iface_ext.position);
                let target = extension_target(
                    &mut self.types,
                    iface_ext.name.as_str(),
                    GraphQLTypeKind::Interface,
                    ext_loc,
                )?;
                if let GraphQLType::Interface(iface_type) = target {
                    add_interfaces(&mut iface_type.0, iface_ext.implements_interfaces)?;
                    add_fields(&mut iface_type.0, file_path, iface_ext.fields)?;
                }
            },

            TypeExt::Object(obj_ext) => {
                let ext_loc = loc::SourceLocation::from_pos(Some(file_path), obj_ext.position);
                let target = extension_target(
                    &mut self.types,
                    obj_ext.name.as_str(),
                    GraphQLTypeKind::Object,
                    ext_loc,
                )?;
                if let GraphQLType::Object(obj_type) = target {
                    add_interfaces(&mut obj_type.0, obj_ext.implements_interfaces)?;
                    add_fields(&mut obj_type.0, file_path, obj_ext.fields)?;
                }
            },

            TypeExt::Scalar(scalar_ext) => {
                let ext_loc = loc::SourceLocation::from_pos(Some(file_path), scalar_ext.position);
                extension_target(
                    &mut self.types,
                    scalar_ext.name.as_str(),
                    GraphQLTypeKind::Scalar,
                    ext_loc,
                )?;
            },

            TypeExt::Union(union_ext) => {
                let ext_loc = loc::SourceLocation::from_pos(Some(file_path), union_ext.position);
                let target = extension_target(
                    &mut self.types,
                    union_ext.name.as_str(),
                    GraphQLTypeKind::Union,
                    ext_loc,
                )?;
                if let GraphQLType::Union(union_type) = target {
                    add_union_members(union_type, union_ext.types)?;
                }
            },
        }

        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn add_fields(
    data: &mut ObjectOrInterfaceTypeData,
    file_path: &Path,
    ast_fields: Vec<ast::schema::Field>,
) -> Result<()> {
    for ast_field in ast_fields {
        let field_loc = loc::SourceLocation::from_pos(Some(file_path), ast_field.position);

        if ast_field.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                def_location: field_loc,
                field_name: ast_field.name,
                type_name: data.name.to_string(),
            });
        }

        if let Some(existing) = data.fields.get(&ast_field.name) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                field_def1: existing.def_location().clone(),
                field_def2: field_loc,
                field_name: ast_field.name,
                type_name: data.name.to_string(),
            });
        }

        let mut parameters = IndexMap::new();
        add_input_values(file_path, ast_field.arguments, &mut parameters).map_err(
            |(def_location, param_name)| SchemaBuildError::DuplicateParameterDefinition {
                def_location,
                field_name: ast_field.name.to_string(),
                param_name,
                type_name: data.name.to_string(),
            },
        )?;

        data.fields.insert(ast_field.name.to_string(), Field {
            type_annotation: TypeAnnotation::from_ast_type(
                &field_loc,
                &ast_field.field_type,
            ),
            def_location: field_loc,
            name: ast_field.name,
            parameters,
            parent_type: GraphQLType::named_ref(
                data.name.as_str(),
                data.def_location.clone(),
            ),
        });
    }
    Ok(())
}

/// Field parameters, directive parameters and input object fields are all
/// declared as SDL input values.
trait InputValueDefinition {
    fn from_ast(def_location: loc::SourceLocation, ast_value: ast::schema::InputValue) -> Self;
}
impl InputValueDefinition for InputField {
    fn from_ast(def_location: loc::SourceLocation, ast_value: ast::schema::InputValue) -> Self {
        Self {
            type_annotation: TypeAnnotation::from_ast_type(&def_location, &ast_value.value_type),
            def_location,
            default_value: ast_value.default_value,
            name: ast_value.name,
        }
    }
}
impl InputValueDefinition for Parameter {
    fn from_ast(def_location: loc::SourceLocation, ast_value: ast::schema::InputValue) -> Self {
        Self {
            type_annotation: TypeAnnotation::from_ast_type(&def_location, &ast_value.value_type),
            def_location,
            default_value: ast_value.default_value,
            name: ast_value.name,
        }
    }
}

/// Fails with the location and name of the first input value whose name is
/// already taken.
fn add_input_values<T: InputValueDefinition>(
    file_path: &Path,
    ast_values: Vec<ast::schema::InputValue>,
    values: &mut IndexMap<String, T>,
) -> std::result::Result<(), (loc::SourceLocation, String)> {
    for ast_value in ast_values {
        let def_location = loc::SourceLocation::from_pos(Some(file_path), ast_value.position);
        if values.contains_key(&ast_value.name) {
            return Err((def_location, ast_value.name));
        }
        values.insert(ast_value.name.to_string(), T::from_ast(def_location, ast_value));
    }
    Ok(())
}

fn add_interfaces(
    data: &mut ObjectOrInterfaceTypeData,
    interface_names: Vec<String>,
) -> Result<()> {
    for interface_name in interface_names {
        if data.implements_interface(interface_name.as_str()) {
            return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                def_location: data.def_location.clone(),
                duplicated_interface_name: interface_name,
                type_name: data.name.to_string(),
            });
        }
        data.interfaces.push(GraphQLType::named_ref(
            interface_name.as_str(),
            data.def_location.clone(),
        ));
    }
    Ok(())
}

fn add_union_members(
    union_type: &mut UnionType,
    member_names: Vec<String>,
) -> Result<()> {
    for member_name in member_names {
        if union_type.member_names().contains(&member_name.as_str()) {
            return Err(SchemaBuildError::DuplicatedUnionMember {
                def_location: union_type.def_location.clone(),
                member_name,
                type_name: union_type.name.to_string(),
            });
        }
        union_type.members.push(GraphQLType::named_ref(
            member_name.as_str(),
            union_type.def_location.clone(),
        ));
    }
    Ok(())
}

fn builtin_directives() -> HashMap<String, Directive> {
    use ast::operation::Type;
    use ast::operation::Value;
    use ast::schema::DirectiveLocation as DirLoc;

    let named = |type_name: &str| Type::NamedType(type_name.to_string());
    let non_null = |type_name: &str| Type::NonNullType(Box::new(named(type_name)));
    let directive = |
        name: &str,
        locations: Vec<DirLoc>,
        parameters: Vec<(&str, Type, Option<Value>)>,
    | {
        let def_location = loc::SourceLocation::builtin();
        Directive {
            locations,
            name: name.to_string(),
            parameters: parameters.into_iter().map(|(param_name, param_type, default_value)| {
                (param_name.to_string(), Parameter {
                    def_location: def_location.clone(),
                    default_value,
                    name: param_name.to_string(),
                    type_annotation: TypeAnnotation::from_ast_type(&def_location, &param_type),
                })
            }).collect(),
            repeatable: false,
            def_location,
        }
    };

    let conditional_locations = vec![DirLoc::Field, DirLoc::FragmentSpread, DirLoc::InlineFragment];
    [
        directive(
            "deprecated",
            vec![
                DirLoc::ArgumentDefinition,
                DirLoc::EnumValue,
                DirLoc::FieldDefinition,
                DirLoc::InputFieldDefinition,
            ],
            vec![(
                "reason",
                named("String"),
                Some(Value::String("No longer supported".to_string())),
            )],
        ),
        directive("include", conditional_locations.clone(), vec![("if", non_null("Boolean"), None)]),
        directive("skip", conditional_locations, vec![("if", non_null("Boolean"), None)]),
        directive("specifiedBy", vec![DirLoc::Scalar], vec![("url", non_null("String"), None)]),
    ].into_iter().map(|def| (def.name.to_string(), def)).collect()
}

fn extension_target<'a>(
    types: &'a mut HashMap<String, GraphQLType>,
    type_name: &str,
    expected_kind: GraphQLTypeKind,
    extension_loc: loc::SourceLocation,
) -> Result<&'a mut GraphQLType> {
    match types.get_mut(type_name) {
        Some(target) if target.type_kind() == expected_kind => Ok(target),

        Some(target) => Err(SchemaBuildError::InvalidExtensionType {
            extension_kind: expected_kind,
            extension_loc,
            schema_type_kind: target.type_kind(),
            type_name: type_name.to_string(),
        }),

        None => Err(SchemaBuildError::ExtensionOfUndefinedType {
            extension_loc,
            type_name: type_name.to_string(),
        }),
    }
}

/// Check every by-name type reference in the schema: field, parameter and
/// input field types, implemented interfaces, union members, and directive
/// parameter types. Types and directives are visited in name order so that
/// errors are reported deterministically.
fn validate_type_references(
    types: &HashMap<String, GraphQLType>,
    directives: &HashMap<String, Directive>,
) -> Vec<TypeValidationError> {
    let mut errors = vec![];
    let mut type_names: Vec<&String> = types.keys().collect();
    type_names.sort();

    for type_name in type_names {
        match &types[type_name] {
            GraphQLType::InputObject(input_type) => {
                for input_field in input_type.fields.values() {
                    validate_input_value_type(
                        types,
                        input_field.type_annotation(),
                        &mut errors,
                        |output_type| TypeValidationError::InvalidInputFieldWithOutputType {
                            def_location: input_field.def_location().clone(),
                            field_name: input_field.name().to_string(),
                            output_type_name: output_type.name().to_string(),
                            parent_type_name: input_type.name().to_string(),
                        },
                    );
                }
            },

            GraphQLType::Interface(iface_type) =>
                validate_object_or_interface_refs(types, &iface_type.0, &mut errors),

            GraphQLType::Object(obj_type) =>
                validate_object_or_interface_refs(types, &obj_type.0, &mut errors),

            GraphQLType::Union(union_type) => {
                for member_ref in &union_type.members {
                    match types.get(member_ref.name()) {
                        Some(GraphQLType::Object(_)) => (),
                        Some(_) => errors.push(TypeValidationError::NonObjectUnionMember {
                            def_location: member_ref.ref_location().clone(),
                            member_name: member_ref.name().to_string(),
                            union_name: union_type.name().to_string(),
                        }),
                        None => errors.push(TypeValidationError::UndefinedTypeName {
                            ref_location: member_ref.ref_location().clone(),
                            type_name: member_ref.name().to_string(),
                        }),
                    }
                }
            },

            _ => (),
        }
    }

    let mut directive_names: Vec<&String> = directives.keys().collect();
    directive_names.sort();
    for directive_name in directive_names {
        let directive = &directives[directive_name];
        for param in directive.parameters().values() {
            validate_input_value_type(
                types,
                param.type_annotation(),
                &mut errors,
                |output_type| TypeValidationError::InvalidDirectiveParameterWithOutputOnlyType {
                    def_location: param.def_location().clone(),
                    directive_name: directive.name().to_string(),
                    outputonly_type_name: output_type.name().to_string(),
                    parameter_name: param.name().to_string(),
                },
            );
        }
    }

    errors
}

/// The named type of an input value must be defined and must not be a
/// composite type.
fn validate_input_value_type(
    types: &HashMap<String, GraphQLType>,
    type_annotation: &TypeAnnotation,
    errors: &mut Vec<TypeValidationError>,
    output_type_error: impl FnOnce(&GraphQLType) -> TypeValidationError,
) {
    let type_ref = type_annotation.innermost_named_type_annotation().type_ref();
    match types.get(type_ref.name()) {
        Some(input_type) if !input_type.is_input_type() =>
            errors.push(output_type_error(input_type)),
        Some(_) => (),
        None => errors.push(TypeValidationError::UndefinedTypeName {
            ref_location: type_ref.ref_location().clone(),
            type_name: type_ref.name().to_string(),
        }),
    }
}

fn validate_object_or_interface_refs(
    types: &HashMap<String, GraphQLType>,
    data: &ObjectOrInterfaceTypeData,
    errors: &mut Vec<TypeValidationError>,
) {
    for iface_ref in &data.interfaces {
        match types.get(iface_ref.name()) {
            Some(GraphQLType::Interface(_)) => (),
            Some(_) => errors.push(TypeValidationError::ImplementsNonInterfaceType {
                def_location: iface_ref.ref_location().clone(),
                non_interface_type_name: iface_ref.name().to_string(),
                type_name: data.name.to_string(),
            }),
            None => errors.push(TypeValidationError::ImplementsUndefinedInterface {
                def_location: iface_ref.ref_location().clone(),
                type_name: data.name.to_string(),
                undefined_interface_name: iface_ref.name().to_string(),
            }),
        }
    }

    for field in data.fields.values() {
        let field_type_ref = field.type_annotation().innermost_named_type_annotation().type_ref();
        match types.get(field_type_ref.name()) {
            Some(field_type) if !field_type.is_output_type() => errors.push(
                TypeValidationError::InvalidOutputFieldWithInputType {
                    def_location: field.def_location().clone(),
                    field_name: field.name().to_string(),
                    input_type_name: field_type.name().to_string(),
                    parent_type_name: data.name.to_string(),
                }
            ),
            Some(_) => (),
            None => errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: field_type_ref.ref_location().clone(),
                type_name: field_type_ref.name().to_string(),
            }),
        }

        for param in field.parameters().values() {
            validate_input_value_type(
                types,
                param.type_annotation(),
                errors,
                |param_type| TypeValidationError::InvalidParameterWithOutputOnlyType {
                    def_location: param.def_location().clone(),
                    field_name: field.name().to_string(),
                    outputonly_type_name: param_type.name().to_string(),
                    parameter_name: param.name().to_string(),
                    parent_type_name: data.name.to_string(),
                },
            );
        }
    }
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error(
        "The `@{directive_name}` directive is defined at both \
        {first_def_location} and {second_def_location}"
    )]
    DuplicateDirectiveDefinition {
        directive_name: String,
        first_def_location: loc::SourceLocation,
        second_def_location: loc::SourceLocation,
    },

    #[error(
        "The `@{directive_name}` directive declares the `{param_name}` \
        parameter more than once ({def_location})"
    )]
    DuplicateDirectiveParameterDefinition {
        def_location: loc::SourceLocation,
        directive_name: String,
        param_name: String,
    },

    #[error(
        "Multiple fields named `{field_name}` were defined on the `{type_name}` \
        type"
    )]
    DuplicateFieldNameDefinition {
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` input type declares the `{field_name}` field more \
        than once ({def_location})"
    )]
    DuplicateInputFieldDefinition {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field declares the `{param_name}` \
        parameter more than once"
    )]
    DuplicateParameterDefinition {
        def_location: loc::SourceLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Multiple `schema {{ ... }}` blocks were defined ({location1} and {location2})")]
    DuplicateSchemaDefinition {
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type at {def_location} is already defined (kind: \
        {existing_type_kind})"
    )]
    DuplicateTypeDefinition {
        def_location: loc::SourceLocation,
        existing_type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("The `{type_name}` union lists `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        def_location: loc::SourceLocation,
        member_name: String,
        type_name: String,
    },

    #[error("Enum types must define one or more unique variants: `{type_name}` defines none")]
    EnumWithNoVariants {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        extension_loc: loc::SourceLocation,
        type_name: String,
    },

    #[error("Directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SourceLocation,
        directive_name: String,
    },

    #[error(
        "Field names must not start with `__`: `{type_name}.{field_name}`"
    )]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Kind mismatch extending `{type_name}` at {extension_loc}: the extension \
        is of kind {extension_kind} but the type is of kind {schema_type_kind}"
    )]
    InvalidExtensionType {
        extension_kind: GraphQLTypeKind,
        extension_loc: loc::SourceLocation,
        schema_type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type `{type_name}` must be a defined \
        object type"
    )]
    InvalidRootOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema document {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("The built-in `@{directive_name}` directive may not be redefined ({def_location})")]
    RedefinitionOfBuiltinDirective {
        def_location: loc::SourceLocation,
        directive_name: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Schema contains invalid type references: {}",
        .0.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("; ")
    )]
    TypeValidationErrors(Vec<TypeValidationError>),
}
