use crate::ast::schema::DirectiveLocation;
use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() -> Result<()> {
        let schema = SchemaBuilder::new().build();

        assert!(matches!(
            schema.unwrap_err(),
            SchemaBuildError::NoQueryOperationTypeDefined,
        ));

        Ok(())
    }

    #[test]
    fn load_empty_query_type_str() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query")?.build()?;

        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());
        // 5 built-in scalars plus `Query`
        assert_eq!(schema.all_types().len(), 6);

        let query_type = schema.query_type().as_object().expect("type is an object");
        assert_eq!(query_type.name(), "Query");
        assert!(query_type.fields().is_empty());
        assert!(query_type.field("__typename").is_some());

        Ok(())
    }

    #[test]
    fn load_all_default_operation_types() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Mutation { a: Int }\n",
            "type Query { b: Int }\n",
            "type Subscription { c: Int }\n",
        ))?.build()?;

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().map(GraphQLType::name), Some("Mutation"));
        assert_eq!(schema.subscription_type().map(GraphQLType::name), Some("Subscription"));
        assert_eq!(
            schema.root_operation_type(&OperationKind::Mutation).map(GraphQLType::name),
            Some("Mutation"),
        );

        Ok(())
    }

    #[test]
    fn load_invalid_schema_syntax() {
        let result = SchemaBuilder::from_str(None, "this is not valid syntax");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ParseError { .. },
        ));
    }

    #[test]
    fn builtin_scalars_are_always_defined() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")?.build()?;

        for name in ["Boolean", "Float", "ID", "Int", "String"] {
            assert!(schema.lookup_type(name).is_some(), "missing `{name}`");
        }
        assert_eq!(schema.lookup_type("Boolean"), Some(&GraphQLType::Bool));

        Ok(())
    }
}

mod schema_block {
    use super::*;

    #[test]
    fn schema_block_names_root_types() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "schema { query: Root, mutation: Writes }\n",
            "type Root { a: Int }\n",
            "type Writes { b: Int }\n",
            "type Query { ignored: Int }\n",
        ))?.build()?;

        assert_eq!(schema.query_type().name(), "Root");
        assert_eq!(schema.mutation_type().map(GraphQLType::name), Some("Writes"));
        assert!(schema.subscription_type().is_none());

        Ok(())
    }

    #[test]
    fn schema_block_across_sources_is_rejected() -> Result<()> {
        let mut builder = SchemaBuilder::from_str(None, concat!(
            "schema { query: Query }\n",
            "type Query { a: Int }\n",
        ))?;
        let err = builder.load_str(None, "schema { query: Query }").unwrap_err();

        assert!(matches!(err, SchemaBuildError::DuplicateSchemaDefinition { .. }));
        assert!(
            err.to_string().starts_with("Multiple `schema { ... }` blocks were defined ("),
            "unexpected message: {err}",
        );

        Ok(())
    }

    #[test]
    fn root_type_must_be_an_object() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "schema { query: Root }\n",
            "scalar Root\n",
        ))?.build();

        match result.unwrap_err() {
            SchemaBuildError::InvalidRootOperationType { operation, type_name } => {
                assert_eq!(operation, OperationKind::Query);
                assert_eq!(type_name, "Root");
            },
            err => panic!("Unexpected error: {err:?}"),
        }

        Ok(())
    }
}

mod type_definitions {
    use super::*;

    #[test]
    fn object_fields_and_parameters() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query {\n",
            "  user(id: ID!, includeDeleted: Boolean = false, tag: String): User\n",
            "}\n",
            "type User { id: ID! friends: [User!]! }\n",
        ))?.build()?;

        let query_type = schema.query_type();
        let user_field = query_type.field("user").expect("field is defined");
        assert_eq!(user_field.parent_type_name(), "Query");
        assert_eq!(user_field.type_annotation().to_string(), "User");
        assert_eq!(
            user_field.parameters().keys().collect::<Vec<_>>(),
            vec!["id", "includeDeleted", "tag"],
        );
        assert!(user_field.parameters()["id"].is_required());
        assert!(!user_field.parameters()["includeDeleted"].is_required());
        assert!(!user_field.parameters()["tag"].is_required());

        let user_type = schema.lookup_type("User").expect("type is defined");
        let friends_field = user_type.field("friends").expect("field is defined");
        assert_eq!(friends_field.type_annotation().to_string(), "[User!]!");
        assert_eq!(
            friends_field.type_annotation()
                .innermost_named_type_annotation()
                .graphql_type_name(),
            "User",
        );

        Ok(())
    }

    #[test]
    fn typename_is_selectable_on_every_composite_type() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { node: Node }\n",
            "interface Node { id: ID! }\n",
            "type Thing implements Node { id: ID! }\n",
            "union Result = Thing\n",
            "enum Color { RED }\n",
        ))?.build()?;

        for name in ["Query", "Node", "Thing", "Result"] {
            let graphql_type = schema.lookup_type(name).expect("type is defined");
            let typename = graphql_type.field("__typename").expect("has __typename");
            assert_eq!(typename.type_annotation().to_string(), "String!");
            assert_eq!(typename.parent_type_name(), name);
        }
        assert!(schema.lookup_type("Color").unwrap().field("__typename").is_none());

        Ok(())
    }

    #[test]
    fn duplicate_type_definition() -> Result<()> {
        let mut builder = SchemaBuilder::from_str(None, "type Query { a: Int }")?;
        let result = builder.load_str(None, "scalar Query");

        match result.unwrap_err() {
            SchemaBuildError::DuplicateTypeDefinition { existing_type_kind, type_name, .. } => {
                assert_eq!(existing_type_kind, GraphQLTypeKind::Object);
                assert_eq!(type_name, "Query");
            },
            err => panic!("Unexpected error: {err:?}"),
        }

        Ok(())
    }

    #[test]
    fn duplicate_field_definition() {
        let result = SchemaBuilder::from_str(None, "type Query { a: Int a: String }");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateFieldNameDefinition { .. },
        ));
    }

    #[test]
    fn dunder_prefixed_names_are_rejected() {
        let type_result = SchemaBuilder::from_str(None, "type __Query { a: Int }");
        assert!(matches!(
            type_result.unwrap_err(),
            SchemaBuildError::InvalidDunderPrefixedTypeName { .. },
        ));

        let field_result = SchemaBuilder::from_str(None, "type Query { __a: Int }");
        assert!(matches!(
            field_result.unwrap_err(),
            SchemaBuildError::InvalidDunderPrefixedFieldName { .. },
        ));
    }

    #[test]
    fn duplicated_union_member() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "union U = Query | Query\n",
        ));

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicatedUnionMember { .. },
        ));
    }

    #[test]
    fn possible_types() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { node: Node }\n",
            "interface Node { id: ID! }\n",
            "type Zebra implements Node { id: ID! }\n",
            "type Apple implements Node { id: ID! }\n",
            "type Loner { id: ID! }\n",
            "union Fruit = Zebra | Apple\n",
        ))?.build()?;

        let names = |type_name: &str| -> Vec<String> {
            schema.possible_types(schema.lookup_type(type_name).unwrap())
                .into_iter()
                .map(|obj_type| obj_type.name().to_string())
                .collect()
        };

        assert_eq!(names("Node"), vec!["Apple", "Zebra"]);
        assert_eq!(names("Fruit"), vec!["Apple", "Zebra"]);
        assert_eq!(names("Loner"), vec!["Loner"]);
        assert!(names("ID").is_empty());

        let detached = schema.lookup_type("Loner").unwrap().clone();
        let detached_types = schema.possible_types(&detached);
        assert_eq!(detached_types.len(), 1);
        assert_eq!(detached_types[0].name(), "Loner");

        Ok(())
    }
}

mod type_extensions {
    use super::*;

    #[test]
    fn extension_in_later_source_adds_fields() -> Result<()> {
        let mut builder = SchemaBuilder::from_str(None, "type Query { a: Int }")?;
        builder.load_str(None, "extend type Query { b: String }")?;
        let schema = builder.build()?;

        let fields = schema.query_type().fields().expect("object has fields");
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn extension_before_definition() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "extend type Query { b: String }\n",
            "type Query { a: Int }\n",
        ))?.build()?;

        assert!(schema.query_type().field("b").is_some());

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "extend type Missing { b: String }\n",
        ))?.build();

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ExtensionOfUndefinedType { type_name, .. }
                if type_name == "Missing",
        ));

        Ok(())
    }

    #[test]
    fn extension_of_wrong_kind() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "scalar Date\n",
            "extend type Date { b: String }\n",
        ))?.build();

        match result.unwrap_err() {
            SchemaBuildError::InvalidExtensionType {
                extension_kind,
                schema_type_kind,
                ..
            } => {
                assert_eq!(extension_kind, GraphQLTypeKind::Object);
                assert_eq!(schema_type_kind, GraphQLTypeKind::Scalar);
            },
            err => panic!("Unexpected error: {err:?}"),
        }

        Ok(())
    }
}

mod type_references {
    use super::*;

    fn type_errors(sdl: &str) -> Vec<TypeValidationError> {
        match SchemaBuilder::from_str(None, sdl).unwrap().build() {
            Err(SchemaBuildError::TypeValidationErrors(errors)) => errors,
            other => panic!("Expected TypeValidationErrors, got: {other:?}"),
        }
    }

    #[test]
    fn undefined_field_type() {
        let errors = type_errors("type Query { a: Missing }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::UndefinedTypeName { type_name, .. } if type_name == "Missing",
        ));
    }

    #[test]
    fn all_reference_errors_are_reported() {
        let errors = type_errors(concat!(
            "type Query implements Nope { a(arg: Query): Int, b: In }\n",
            "input In { x: Int }\n",
            "union U = In\n",
        ));

        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::ImplementsUndefinedInterface { .. },
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::InvalidParameterWithOutputOnlyType { .. },
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::InvalidOutputFieldWithInputType { .. },
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::NonObjectUnionMember { .. },
        )));
    }

    #[test]
    fn implementing_a_non_interface() {
        let errors = type_errors(concat!(
            "type Query implements Other { a: Int }\n",
            "type Other { b: Int }\n",
        ));

        assert!(matches!(
            &errors[..],
            [TypeValidationError::ImplementsNonInterfaceType { .. }],
        ));
    }
}

mod directives {
    use super::*;

    #[test]
    fn builtin_directives_are_always_defined() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")?.build()?;

        let include = schema.directive("include").unwrap();
        assert!(include.is_allowed_at(&DirectiveLocation::Field));
        assert!(include.is_allowed_at(&DirectiveLocation::InlineFragment));
        assert!(!include.is_allowed_at(&DirectiveLocation::Query));
        assert!(!include.is_repeatable());
        assert!(include.parameters()["if"].is_required());

        let deprecated = schema.directive("deprecated").unwrap();
        assert!(!deprecated.parameters()["reason"].is_required());
        assert!(schema.directive("skip").is_some());
        assert!(schema.directive("specifiedBy").is_some());
        assert!(schema.directive("cached").is_none());

        Ok(())
    }

    #[test]
    fn custom_directive_definition() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "directive @tag(name: String!, weight: Int = 1) repeatable on FIELD | QUERY\n",
        ))?.build()?;

        let tag = schema.directive("tag").unwrap();
        assert_eq!(tag.name(), "tag");
        assert!(tag.is_repeatable());
        assert_eq!(tag.locations(), &[DirectiveLocation::Field, DirectiveLocation::Query]);
        assert_eq!(tag.parameters().keys().collect::<Vec<_>>(), vec!["name", "weight"]);
        assert!(tag.parameters()["name"].is_required());
        assert!(!tag.parameters()["weight"].is_required());
        assert_eq!(tag.def_location().line, 2);

        Ok(())
    }

    #[test]
    fn builtin_directives_cannot_be_redefined() {
        let result = SchemaBuilder::from_str(None, "directive @skip(if: Boolean!) on FIELD");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::RedefinitionOfBuiltinDirective { directive_name, .. }
                if directive_name == "skip",
        ));
    }

    #[test]
    fn duplicate_directive_definition() -> Result<()> {
        let mut builder = SchemaBuilder::from_str(None, "directive @a on FIELD")?;
        let result = builder.load_str(None, "directive @a on QUERY");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateDirectiveDefinition { directive_name, .. }
                if directive_name == "a",
        ));

        Ok(())
    }

    #[test]
    fn invalid_directive_definitions() {
        let dunder = SchemaBuilder::from_str(None, "directive @__a on FIELD");
        assert!(matches!(
            dunder.unwrap_err(),
            SchemaBuildError::InvalidDunderPrefixedDirectiveName { .. },
        ));

        let duplicate_param = SchemaBuilder::from_str(
            None,
            "directive @a(x: Int, x: String) on FIELD",
        );
        assert!(matches!(
            duplicate_param.unwrap_err(),
            SchemaBuildError::DuplicateDirectiveParameterDefinition { param_name, .. }
                if param_name == "x",
        ));
    }
}

mod input_objects {
    use super::*;

    #[test]
    fn input_fields_are_recorded() -> Result<()> {
        let mut builder = SchemaBuilder::from_str(None, concat!(
            "type Query { a(filter: Filter): Int }\n",
            "input Filter { limit: Int!, offset: Int = 0 }\n",
        ))?;
        builder.load_str(None, "extend input Filter { term: String }")?;
        let schema = builder.build()?;

        let Some(GraphQLType::InputObject(filter)) = schema.lookup_type("Filter") else {
            panic!("expected an input object type");
        };
        let fields = filter.fields();
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["limit", "offset", "term"]);
        assert!(fields["limit"].is_required());
        assert!(!fields["offset"].is_required());
        assert!(fields["offset"].default_value().is_some());
        assert_eq!(fields["term"].type_annotation().to_string(), "String");

        Ok(())
    }

    #[test]
    fn duplicate_input_field() {
        let result = SchemaBuilder::from_str(None, "input Filter { a: Int, a: String }");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateInputFieldDefinition { field_name, type_name, .. }
                if field_name == "a" && type_name == "Filter",
        ));
    }

    #[test]
    fn input_values_must_have_input_types() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "input Filter { owner: Query }\n",
            "directive @limit(by: Query) on FIELD\n",
        )).unwrap().build();

        let errors = match result {
            Err(SchemaBuildError::TypeValidationErrors(errors)) => errors,
            other => panic!("Expected TypeValidationErrors, got: {other:?}"),
        };
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::InvalidInputFieldWithOutputType { field_name, .. }
                if field_name == "owner",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::InvalidDirectiveParameterWithOutputOnlyType {
                directive_name,
                ..
            } if directive_name == "limit",
        )));
    }
}

mod files {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_types_and_extensions_across_files() -> Result<()> {
        let mut base = tempfile::NamedTempFile::new().unwrap();
        write!(base, "type Query {{ a: Int }}").unwrap();
        let mut ext = tempfile::NamedTempFile::new().unwrap();
        write!(ext, "extend type Query {{ b: Int }}").unwrap();

        let schema = SchemaBuilder::from_files(&[base.path(), ext.path()])?.build()?;
        let query_type = schema.query_type();

        assert!(query_type.field("a").is_some());
        assert!(query_type.field("b").is_some());
        assert_eq!(
            query_type.field("a").unwrap().def_location().file.as_deref(),
            Some(base.path()),
        );

        Ok(())
    }

    #[test]
    fn missing_file() {
        let result = SchemaBuilder::from_files(&["/definitely/not/a/real/schema.graphqls"]);

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::SchemaFileReadError(_),
        ));
    }
}
