//! End-to-end generation plans for the Erlang client targets.

use indexmap::IndexMap;
use serde_json::Value;
use swerl_codegen::{Engine, Error, GenerationPlan};
use swerl_codegen_erlang::{ErlangDescriptor, Flavor};
use swerl_core::PackageName;
use swerl_spec::{ApiDocument, SourceFormat};

const PETSTORE_SWAGGER: &str = r##"
swagger: "2.0"
info:
  title: Swagger Petstore
  version: 1.0.0
basePath: /v2
paths:
  /pet:
    post:
      tags: [pet]
      operationId: addPet
      summary: Add a new pet to the store
      parameters:
        - in: body
          name: body
          required: true
          schema:
            $ref: "#/definitions/Pet"
      responses:
        405:
          description: Invalid input
  /pet/{petId}:
    parameters:
      - name: petId
        in: path
        type: integer
        format: int64
    get:
      tags: [pet]
      operationId: getPetById
      responses:
        200:
          description: successful operation
    delete:
      tags: [pet]
      operationId: deletePet
      parameters:
        - name: api_key
          in: header
          type: string
  /store/order/{orderId}:
    get:
      tags: [store]
      operationId: receive
      parameters:
        - name: orderId
          in: path
          type: string
          format: uuid
  /ping:
    get:
      operationId: ping
definitions:
  Pet:
    type: object
    properties:
      name:
        type: string
"##;

const PETSTORE_OAS3: &str = r##"{
  "openapi": "3.0.3",
  "info": { "title": "Petstore", "version": "1.0.0" },
  "paths": {
    "/pets/{id}": {
      "put": {
        "tags": ["pets"],
        "operationId": "updatePet",
        "parameters": [
          { "name": "id", "in": "path", "required": true, "schema": { "type": "string", "format": "byte" } }
        ],
        "requestBody": {
          "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
          }
        }
      }
    }
  },
  "components": {
    "schemas": { "Pet": { "type": "object" } }
  }
}"##;

fn plan(flavor: Flavor, source: &str, format: SourceFormat) -> GenerationPlan {
    let document = ApiDocument::parse(source, format).expect("valid document");
    let descriptor = ErlangDescriptor::new(flavor, PackageName::new("petstore").unwrap())
        .expect("valid descriptor");
    Engine::new(&descriptor).run(&document).expect("generation plan")
}

fn describe_operations(plan: &GenerationPlan) -> String {
    let mut lines = Vec::new();
    for file in &plan.api_files {
        lines.push(format!("{} ({})", file.path.display(), file.group.tag));
        for op in &file.group.operations {
            lines.push(format!("  {} {} {}", op.http_method, op.path, op.operation_id));
            for param in &op.params {
                lines.push(format!(
                    "    {} {} {} -> {}{}",
                    param.location,
                    param.param_name,
                    param.schema_type,
                    param.data_type,
                    if param.required { " (required)" } else { "" }
                ));
            }
        }
    }
    lines.join("\n")
}

#[test]
fn test_swagger_operations() {
    let plan = plan(Flavor::Swagger, PETSTORE_SWAGGER, SourceFormat::Yaml);

    insta::assert_snapshot!(describe_operations(&plan), @r"
    src/petstore_pet_api.erl (pet)
      post /pet add_pet
        body Body object -> object (required)
      get /pet/:petId get_pet_by_id
        path PetId long -> int64 (required)
      delete /pet/:petId delete_pet
        path PetId long -> int64 (required)
        header ApiKey string -> binary
    src/petstore_store_api.erl (store)
      get /store/order/:orderId call_receive
        path OrderId UUID -> binary (required)
    src/petstore_default_api.erl (default)
      get /ping ping
    ");
}

#[test]
fn test_oas3_operations() {
    let plan = plan(Flavor::OpenApi3, PETSTORE_OAS3, SourceFormat::Json);

    insta::assert_snapshot!(describe_operations(&plan), @r"
    src/petstore_pets_api.erl (pets)
      put /pets/:id update_pet
        path Id ByteArray -> binary (required)
        body Body object -> map
    ");
}

#[test]
fn test_plan_metadata() {
    let plan = plan(Flavor::Swagger, PETSTORE_SWAGGER, SourceFormat::Yaml);

    assert_eq!(plan.target, "erlang-client");
    assert_eq!(plan.template_dir, "erlang-client");
    assert_eq!(plan.package_name.as_str(), "petstore");
    assert_eq!(plan.operation_count(), 5);
    assert!(plan.api_files.iter().all(|file| file.template == "api.mustache"));
    assert_eq!(plan.output_paths().len(), 3 + 11);
}

#[test]
fn test_embedded_description_round_trips() {
    let document = ApiDocument::parse(PETSTORE_SWAGGER, SourceFormat::Yaml).unwrap();
    let plan = plan(Flavor::Swagger, PETSTORE_SWAGGER, SourceFormat::Yaml);

    let embedded = plan.context["swagger-json"].as_str().expect("embedded description");
    assert_eq!(embedded, document.to_text().unwrap());

    let reparsed = ApiDocument::parse(embedded, SourceFormat::Yaml).unwrap();
    assert_eq!(reparsed.api(), document.api());
    assert!(!plan.context.contains_key("openapi-json"));
}

#[test]
fn test_oas3_embeds_json() {
    let document = ApiDocument::parse(PETSTORE_OAS3, SourceFormat::Json).unwrap();
    let plan = plan(Flavor::OpenApi3, PETSTORE_OAS3, SourceFormat::Json);

    let embedded = plan.context["openapi-json"].as_str().expect("embedded description");
    assert!(embedded.starts_with("{\n    \"openapi\": \"3.0.3\""));

    let reparsed = ApiDocument::parse(embedded, SourceFormat::Json).unwrap();
    assert_eq!(reparsed.api(), document.api());
}

#[test]
fn test_user_properties_override_defaults() {
    let document = ApiDocument::parse(PETSTORE_SWAGGER, SourceFormat::Yaml).unwrap();
    let descriptor =
        ErlangDescriptor::new(Flavor::Swagger, PackageName::new("petstore").unwrap()).unwrap();

    let mut properties = IndexMap::new();
    properties.insert("apiVersion".to_string(), Value::from("2.1.0"));
    properties.insert("licenseName".to_string(), Value::from("MIT"));

    let plan = Engine::new(&descriptor)
        .with_properties(properties)
        .run(&document)
        .unwrap();

    assert_eq!(plan.context["apiVersion"], "2.1.0");
    assert_eq!(plan.context["apiPath"], "src");
    assert_eq!(plan.context["licenseName"], "MIT");
}

#[test]
fn test_plan_is_deterministic() {
    let first = plan(Flavor::OpenApi3, PETSTORE_OAS3, SourceFormat::Json);
    let second = plan(Flavor::OpenApi3, PETSTORE_OAS3, SourceFormat::Json);

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_escaped_name_collision_aborts() {
    let source = r#"
swagger: "2.0"
paths:
  /pets:
    get:
      operationId: callReceive
  /pet:
    get:
      operationId: receive
"#;
    let document = ApiDocument::parse(source, SourceFormat::Yaml).unwrap();
    let descriptor =
        ErlangDescriptor::new(Flavor::Swagger, PackageName::new("petstore").unwrap()).unwrap();

    let err = Engine::new(&descriptor).run(&document).unwrap_err();
    assert!(matches!(
        err,
        Error::IdentifierCollision { ref identifier, .. } if identifier == "call_receive"
    ));
}
