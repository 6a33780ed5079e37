//! Walks an API description and asks a target descriptor how to render it.

use indexmap::IndexMap;
use serde_json::Value;
use swerl_core::{camelize, sanitize_name};
use swerl_spec::{ApiDescription, ApiDocument, Operation, Parameter};

use crate::{
    ApiFile, CodegenOperation, CodegenParameter, GenerationPlan, NameScope, OperationGroup,
    Result, SupportingFileContext, TargetDescriptor,
};

/// Tag given to operations without one.
const DEFAULT_TAG: &str = "default";

/// The generation engine.
///
/// Runs one linear traversal of an API description:
/// 1. validate the descriptor (type mapping completeness)
/// 2. group operations by their first tag and derive every name
/// 3. let the descriptor post-process each group
/// 4. build the supporting-file context and let the descriptor post-process it
///
/// # Example
///
/// ```ignore
/// let descriptor = ErlangDescriptor::new(Flavor::Swagger, package)?;
/// let plan = Engine::new(&descriptor).run(&document)?;
/// ```
pub struct Engine<'a> {
    descriptor: &'a dyn TargetDescriptor,
    properties: IndexMap<String, Value>,
}

impl<'a> Engine<'a> {
    pub fn new(descriptor: &'a dyn TargetDescriptor) -> Self {
        Self {
            descriptor,
            properties: IndexMap::new(),
        }
    }

    /// Add user template variables. They override the descriptor's defaults.
    pub fn with_properties(mut self, properties: IndexMap<String, Value>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Produce the generation plan for a document.
    ///
    /// # Errors
    ///
    /// Fails when the descriptor's type mapping is incomplete or two raw names
    /// derive the same identifier.
    pub fn run(&self, document: &ApiDocument) -> Result<GenerationPlan> {
        let descriptor = self.descriptor;
        let span = tracing::info_span!(
            "generate",
            generator = descriptor.name(),
            package = %descriptor.package_name()
        );
        let _enter = span.enter();

        descriptor.validate()?;

        let mut groups = self.collect_groups(document.api())?;

        let mut api_names = NameScope::new("api name");
        for group in &groups {
            api_names.claim(&group.api_name, &group.tag)?;
        }

        for group in &mut groups {
            descriptor.post_process_operations(group);
        }

        let api_files: Vec<ApiFile> = groups
            .into_iter()
            .map(|group| ApiFile {
                template: descriptor.api_template().to_string(),
                path: descriptor.api_file_path(&group.tag),
                group,
            })
            .collect();

        let mut properties = descriptor.additional_properties();
        properties.extend(self.properties.clone());
        let mut context = SupportingFileContext::new(document, properties);
        descriptor.post_process_supporting_file_data(&mut context);

        let plan = GenerationPlan {
            target: descriptor.name().to_string(),
            kind: descriptor.kind(),
            package_name: descriptor.package_name().clone(),
            template_dir: descriptor.template_dir().to_string(),
            api_files,
            supporting_files: descriptor.supporting_files().to_vec(),
            context: context.properties,
        };

        tracing::info!(
            api_files = plan.api_files.len(),
            operations = plan.operation_count(),
            supporting_files = plan.supporting_files.len(),
            "generation plan ready"
        );

        Ok(plan)
    }

    /// Group operations by first tag, in document order.
    fn collect_groups(&self, api: &ApiDescription) -> Result<Vec<OperationGroup>> {
        let mut groups: IndexMap<String, (OperationGroup, NameScope)> = IndexMap::new();

        for (path, item) in api.path_items() {
            for (method, operation) in item.operations() {
                let tag = operation.first_tag().unwrap_or(DEFAULT_TAG);

                let (group, scope) = groups.entry(tag.to_string()).or_insert_with(|| {
                    (
                        OperationGroup {
                            tag: tag.to_string(),
                            api_name: self.descriptor.derive_api_name(tag),
                            operations: Vec::new(),
                        },
                        NameScope::new("operation id"),
                    )
                });

                let op = self.build_operation(api, path, method, operation, item.params())?;
                scope.claim(
                    &op.operation_id,
                    &format!("{} {}", op.http_method, op.path),
                )?;
                group.operations.push(op);
            }
        }

        Ok(groups.into_values().map(|(group, _)| group).collect())
    }

    fn build_operation(
        &self,
        api: &ApiDescription,
        path: &str,
        method: &str,
        operation: &Operation,
        shared: &[Parameter],
    ) -> Result<CodegenOperation> {
        let raw_operation_id = operation
            .operation_id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| fallback_operation_id(method, path));

        tracing::debug!(operation = %raw_operation_id, method, path, "building operation");

        Ok(CodegenOperation {
            operation_id: self.descriptor.derive_operation_id(&raw_operation_id),
            raw_operation_id,
            http_method: method.to_uppercase(),
            path: path.to_string(),
            summary: operation.summary.clone(),
            params: self.build_parameters(api, operation, shared)?,
        })
    }

    /// Path-level parameters merged with operation-level ones; an operation
    /// parameter replaces a path parameter with the same name and location.
    fn build_parameters(
        &self,
        api: &ApiDescription,
        operation: &Operation,
        shared: &[Parameter],
    ) -> Result<Vec<CodegenParameter>> {
        let mut merged: IndexMap<(String, String), Parameter> = IndexMap::new();
        for param in shared.iter().chain(operation.params()) {
            match api.resolve_parameter(param) {
                Some(resolved) => {
                    merged.insert(
                        (resolved.name.clone(), resolved.location.clone()),
                        resolved,
                    );
                }
                None => tracing::warn!(
                    reference = param.reference.as_deref().unwrap_or_default(),
                    "skipping unresolvable parameter reference"
                ),
            }
        }

        let mut scope = NameScope::new("parameter name");
        let mut params = Vec::with_capacity(merged.len() + 1);

        for param in merged.values() {
            params.push(self.build_parameter(
                &mut scope,
                &param.name,
                &param.location,
                param.is_required(),
                param.schema_type().as_str(),
            )?);
        }

        if let Some(raw_body) = operation.request_body() {
            match api.resolve_request_body(raw_body) {
                Some(body) => params.push(self.build_parameter(
                    &mut scope,
                    "body",
                    "body",
                    body.required,
                    body.schema_type().as_str(),
                )?),
                None => tracing::warn!(
                    reference = raw_body
                        .get("$ref")
                        .and_then(serde_json::Value::as_str)
                        .unwrap_or_default(),
                    "skipping unresolvable request body"
                ),
            }
        }

        Ok(params)
    }

    fn build_parameter(
        &self,
        scope: &mut NameScope,
        name: &str,
        location: &str,
        required: bool,
        schema_type: &str,
    ) -> Result<CodegenParameter> {
        let param_name = self.descriptor.derive_param_name(name);
        scope.claim(&param_name, &format!("{} ({})", name, location))?;

        Ok(CodegenParameter {
            base_name: name.to_string(),
            param_name,
            location: location.to_string(),
            required,
            schema_type: schema_type.to_string(),
            data_type: self.descriptor.resolve_type(schema_type)?.to_string(),
        })
    }
}

/// Operation id for an operation without one, e.g. `GET /pets/{id}` -> `getPetsId`.
fn fallback_operation_id(method: &str, path: &str) -> String {
    let mut id = method.to_lowercase();
    for segment in path.split('/') {
        let segment = segment.trim_matches(|c| c == '{' || c == '}');
        id.push_str(&camelize(&sanitize_name(segment)));
    }
    id
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use swerl_core::{PackageName, SchemaType, underscore};
    use swerl_spec::SourceFormat;
    use tracing_test::traced_test;

    use super::*;
    use crate::{Error, GeneratorKind, NamingConvention, SupportingFile, TypeMapping};

    fn escape(name: &str) -> String {
        format!("_{}", name)
    }

    fn lowercase_start(c: char) -> bool {
        c.is_ascii_lowercase()
    }

    const NAMING: NamingConvention = NamingConvention {
        to_identifier: underscore,
        to_variable: camelize,
        is_identifier_start: lowercase_start,
        reserved_words: &["end", "receive"],
        escape_reserved: escape,
        operation_prefix: "call_",
        api_suffix: "api",
    };

    struct StubDescriptor {
        package: PackageName,
        types: TypeMapping,
        files: Vec<SupportingFile>,
    }

    impl StubDescriptor {
        fn new() -> Self {
            let types = TypeMapping::new(SchemaType::ALL.iter().map(|ty| (ty.as_str(), "term")))
                .unwrap()
                .with_overrides([("integer", "int"), ("string", "text")])
                .unwrap();
            Self {
                package: PackageName::new("petstore").unwrap(),
                types,
                files: vec![SupportingFile::new("readme.tpl", "README.md")],
            }
        }

        fn with_types(mut self, types: TypeMapping) -> Self {
            self.types = types;
            self
        }
    }

    impl TargetDescriptor for StubDescriptor {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn kind(&self) -> GeneratorKind {
            GeneratorKind::Client
        }

        fn help(&self) -> &'static str {
            "stub target"
        }

        fn template_dir(&self) -> &'static str {
            "stub"
        }

        fn package_name(&self) -> &PackageName {
            &self.package
        }

        fn type_mapping(&self) -> &TypeMapping {
            &self.types
        }

        fn naming(&self) -> &NamingConvention {
            &NAMING
        }

        fn api_template(&self) -> &'static str {
            "api.tpl"
        }

        fn api_file_folder(&self) -> PathBuf {
            PathBuf::from("src")
        }

        fn api_file_extension(&self) -> &'static str {
            "txt"
        }

        fn supporting_files(&self) -> &[SupportingFile] {
            &self.files
        }

        fn post_process_operations(&self, group: &mut OperationGroup) {
            for op in &mut group.operations {
                op.http_method = op.http_method.to_lowercase();
            }
        }

        fn post_process_supporting_file_data(&self, context: &mut SupportingFileContext<'_>) {
            let paths = context.document.api().path_items().count();
            context.insert("pathCount", paths);
        }
    }

    fn document(yaml: &str) -> ApiDocument {
        ApiDocument::parse(yaml, SourceFormat::Yaml).expect("valid document")
    }

    const PETSTORE: &str = r#"
swagger: "2.0"
paths:
  /pets:
    parameters:
      - name: limit
        in: query
        type: integer
    get:
      operationId: listPets
      tags: [pet]
      parameters:
        - name: limit
          in: query
          type: string
    post:
      operationId: receive
      tags: [pet]
  /store/inventory:
    get:
      tags: [store]
  /health:
    get:
      operationId: health
"#;

    #[test]
    fn test_groups_by_first_tag_in_document_order() {
        let descriptor = StubDescriptor::new();
        let plan = Engine::new(&descriptor).run(&document(PETSTORE)).unwrap();

        let groups: Vec<_> = plan
            .api_files
            .iter()
            .map(|f| (f.group.tag.as_str(), f.group.api_name.as_str()))
            .collect();
        assert_eq!(
            groups,
            vec![
                ("pet", "petstore_pet_api"),
                ("store", "petstore_store_api"),
                ("default", "petstore_default_api"),
            ]
        );
        assert_eq!(plan.api_files[0].path, PathBuf::from("src/petstore_pet_api.txt"));
        assert_eq!(plan.api_files[0].template, "api.tpl");
        assert_eq!(plan.operation_count(), 4);
    }

    #[test]
    fn test_operations_are_derived_and_post_processed() {
        let descriptor = StubDescriptor::new();
        let plan = Engine::new(&descriptor).run(&document(PETSTORE)).unwrap();

        let pet = &plan.api_files[0].group;
        assert_eq!(pet.operations[0].operation_id, "list_pets");
        assert_eq!(pet.operations[0].http_method, "get");
        assert_eq!(pet.operations[1].operation_id, "call_receive");
        assert_eq!(pet.operations[1].raw_operation_id, "receive");

        let store = &plan.api_files[1].group;
        assert_eq!(store.operations[0].raw_operation_id, "getStoreInventory");
        assert_eq!(store.operations[0].operation_id, "get_store_inventory");
    }

    #[test]
    fn test_operation_parameters_override_path_parameters() {
        let descriptor = StubDescriptor::new();
        let plan = Engine::new(&descriptor).run(&document(PETSTORE)).unwrap();

        let list_pets = &plan.api_files[0].group.operations[0];
        assert_eq!(list_pets.params.len(), 1);
        let limit = &list_pets.params[0];
        assert_eq!(limit.param_name, "Limit");
        assert_eq!(limit.schema_type, "string");
        assert_eq!(limit.data_type, "text");
        assert!(!limit.required);

        // path-level parameter is inherited untouched
        let add = &plan.api_files[0].group.operations[1];
        assert_eq!(add.params[0].data_type, "int");
    }

    #[test]
    fn test_context_has_descriptor_and_user_properties() {
        let descriptor = StubDescriptor::new();
        let mut user = IndexMap::new();
        user.insert("apiVersion".to_string(), Value::from("2.0.0"));

        let plan = Engine::new(&descriptor)
            .with_properties(user)
            .run(&document(PETSTORE))
            .unwrap();

        assert_eq!(plan.context["packageName"], "petstore");
        assert_eq!(plan.context["apiVersion"], "2.0.0");
        assert_eq!(plan.context["pathCount"], 3);
        assert_eq!(plan.supporting_files, descriptor.supporting_files());
    }

    #[test]
    fn test_incomplete_type_mapping_aborts() {
        let descriptor =
            StubDescriptor::new().with_types(TypeMapping::new([("string", "text")]).unwrap());
        let err = Engine::new(&descriptor).run(&document(PETSTORE)).unwrap_err();
        assert!(matches!(err, Error::MissingTypeMapping { .. }));
        assert!(err.to_string().contains("'DateTime'"));
    }

    #[test]
    fn test_operation_id_collision_aborts() {
        let doc = document(
            r#"
swagger: "2.0"
paths:
  /pets:
    get:
      operationId: getPet
  /pet:
    get:
      operationId: get_pet
"#,
        );
        let descriptor = StubDescriptor::new();
        let err = Engine::new(&descriptor).run(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "operation id 'get_pet' is derived from both 'GET /pets' and 'GET /pet'"
        );
    }

    #[test]
    fn test_api_name_collision_aborts() {
        let doc = document(
            r#"
swagger: "2.0"
paths:
  /pets:
    get:
      operationId: listPets
      tags: [Pet]
  /pet:
    get:
      operationId: getPet
      tags: [pet]
"#,
        );
        let descriptor = StubDescriptor::new();
        let err = Engine::new(&descriptor).run(&doc).unwrap_err();
        assert!(matches!(err, Error::IdentifierCollision { kind: "api name", .. }));
    }

    #[test]
    fn test_escaped_parameter_collision_aborts() {
        let doc = document(
            r#"
swagger: "2.0"
paths:
  /pets:
    get:
      operationId: listPets
      parameters:
        - { name: end, in: query, type: string }
        - { name: _End, in: header, type: string }
"#,
        );
        let descriptor = StubDescriptor::new();
        let err = Engine::new(&descriptor).run(&doc).unwrap_err();
        assert!(matches!(err, Error::IdentifierCollision { kind: "parameter name", .. }));
    }

    #[test]
    fn test_request_body_becomes_body_parameter() {
        let doc = document(
            r#"
openapi: 3.0.1
paths:
  /pets:
    post:
      operationId: addPet
      requestBody:
        required: true
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/Pet'
"#,
        );
        let descriptor = StubDescriptor::new();
        let plan = Engine::new(&descriptor).run(&doc).unwrap();

        let body = &plan.api_files[0].group.operations[0].params[0];
        assert_eq!(body.base_name, "body");
        assert_eq!(body.location, "body");
        assert!(body.required);
        assert_eq!(body.schema_type, "object");
    }

    #[test]
    #[traced_test]
    fn test_referenced_request_body_becomes_body_parameter() {
        let doc = document(
            r#"
openapi: 3.0.1
paths:
  /pets:
    post:
      operationId: addPet
      requestBody:
        $ref: '#/components/requestBodies/Pet'
    put:
      operationId: updatePet
      requestBody:
        $ref: '#/components/requestBodies/Missing'
components:
  requestBodies:
    Pet:
      required: true
      content:
        application/json:
          schema:
            type: [object, 'null']
            additionalProperties: true
"#,
        );
        let descriptor = StubDescriptor::new();
        let plan = Engine::new(&descriptor).run(&doc).unwrap();

        let operations = &plan.api_files[0].group.operations;
        assert_eq!(operations[0].params.len(), 1);
        let body = &operations[0].params[0];
        assert_eq!(body.base_name, "body");
        assert!(body.required);
        assert_eq!(body.schema_type, "map");

        assert!(operations[1].params.is_empty());
        assert!(logs_contain("skipping unresolvable request body"));
    }

    #[test]
    fn test_paths_extensions_are_not_operations() {
        let doc = document(
            r#"
swagger: "2.0"
paths:
  x-internal: true
  /pets:
    get:
      operationId: listPets
"#,
        );
        let descriptor = StubDescriptor::new();
        let plan = Engine::new(&descriptor).run(&doc).unwrap();

        assert_eq!(plan.operation_count(), 1);
        assert_eq!(plan.context["pathCount"], 1);
    }

    #[test]
    fn test_fallback_operation_id() {
        assert_eq!(fallback_operation_id("get", "/pets/{id}"), "getPetsId");
        assert_eq!(fallback_operation_id("post", "/"), "post");
    }
}
