//! API description model.
//!
//! Only the fields the generator reads are typed. Everything else is kept in
//! the `extra` map of the owning node, so a parsed description can be written
//! back without losing information. Collections that may legitimately be
//! written empty (`paths: {}`, `tags: []`) are optional so an explicit empty
//! value survives the round-trip.

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::Error as _,
    ser::SerializeMap,
};
use serde_json::Value;
use swerl_core::SchemaType;

use crate::serde_helpers::deserialize_version;

/// Follow at most this many `$ref` hops when resolving a node.
const MAX_REF_DEPTH: usize = 8;

/// Which major revision of the format a description uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecVersion {
    /// `swagger: "2.0"`
    Swagger2,
    /// `openapi: "3.x.y"`
    OpenApi3,
    /// Neither marker is present
    Unknown,
}

/// Root of a Swagger 2.0 / OpenAPI 3.x document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDescription {
    #[serde(
        default,
        deserialize_with = "deserialize_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub swagger: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub openapi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Paths>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// The Paths object: path templates plus `x-` extensions.
///
/// Extensions are kept apart from the path items and written back after them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    pub items: IndexMap<String, PathItem>,
    pub extensions: IndexMap<String, Value>,
}

impl Paths {
    pub fn get(&self, path: &str) -> Option<&PathItem> {
        self.items.get(path)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, PathItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Paths {
    type Item = (&'a String, &'a PathItem);
    type IntoIter = indexmap::map::Iter<'a, String, PathItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'de> Deserialize<'de> for Paths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut paths = Paths::default();

        for (key, value) in raw {
            if key.starts_with("x-") {
                paths.extensions.insert(key, value);
                continue;
            }
            let item = serde_json::from_value(value)
                .map_err(|e| D::Error::custom(format!("path '{}': {}", key, e)))?;
            paths.items.insert(key, item);
        }

        Ok(paths)
    }
}

impl Serialize for Paths {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.items.len() + self.extensions.len()))?;
        for (key, item) in &self.items {
            map.serialize_entry(key, item)?;
        }
        for (key, value) in &self.extensions {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The operations available on a single path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    /// Parameters shared by every operation on this path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl PathItem {
    /// Operations on this path with their lowercase method names, in a fixed
    /// order (get, put, post, delete, options, head, patch).
    pub fn operations(&self) -> Vec<(&'static str, &Operation)> {
        [
            ("get", &self.get),
            ("put", &self.put),
            ("post", &self.post),
            ("delete", &self.delete),
            ("options", &self.options),
            ("head", &self.head),
            ("patch", &self.patch),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
        .collect()
    }

    /// Path-level parameters, empty when none are declared.
    pub fn params(&self) -> &[Parameter] {
        self.parameters.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(
        default,
        rename = "operationId",
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Operation {
    /// The first tag, unless it is missing or empty.
    pub fn first_tag(&self) -> Option<&str> {
        self.tags
            .as_deref()?
            .first()
            .map(String::as_str)
            .filter(|tag| !tag.is_empty())
    }

    /// Operation-level parameters, empty when none are declared.
    pub fn params(&self) -> &[Parameter] {
        self.parameters.as_deref().unwrap_or_default()
    }

    /// The raw OpenAPI 3 `requestBody` node, possibly a `$ref`.
    pub fn request_body(&self) -> Option<&Value> {
        self.extra.get("requestBody")
    }
}

/// The `type` keyword: a single name, or a list of names in OpenAPI 3.1
/// (`["string", "null"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeKeyword {
    Single(String),
    Union(Vec<String>),
}

impl TypeKeyword {
    /// The type name used for inference: the first entry that isn't `null`.
    pub fn primary(&self) -> Option<&str> {
        match self {
            TypeKeyword::Single(name) => Some(name.as_str()),
            TypeKeyword::Union(names) => names
                .iter()
                .map(String::as_str)
                .find(|name| *name != "null"),
        }
    }
}

/// An operation parameter.
///
/// Swagger 2.0 puts `type`/`format` on the parameter itself (or a `schema` for
/// body parameters); OpenAPI 3 always uses `schema`. A parameter may also be
/// a bare `$ref` to a shared definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, rename = "in", skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeKeyword>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(default, rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Parameter {
    /// Derive the schema type of this parameter.
    pub fn schema_type(&self) -> SchemaType {
        match &self.schema {
            Some(schema) if self.ty.is_none() => schema.schema_type(),
            _ => SchemaType::infer(
                self.ty.as_ref().and_then(TypeKeyword::primary),
                self.format.as_deref(),
                self.enum_values.is_some(),
                false,
            ),
        }
    }

    /// Whether the parameter must be supplied. Path parameters always are.
    pub fn is_required(&self) -> bool {
        self.location == "path" || self.required.unwrap_or(false)
    }
}

/// The subset of a schema object needed to derive its type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeKeyword>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(default, rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(
        default,
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<Value>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Schema {
    /// Derive the schema type of this schema. References are objects.
    pub fn schema_type(&self) -> SchemaType {
        if self.reference.is_some() {
            return SchemaType::Object;
        }
        let has_additional_properties = self
            .additional_properties
            .as_ref()
            .is_some_and(|ap| *ap != Value::Bool(false));
        SchemaType::infer(
            self.ty.as_ref().and_then(TypeKeyword::primary),
            self.format.as_deref(),
            self.enum_values.is_some(),
            has_additional_properties,
        )
    }
}

/// A resolved OpenAPI 3 request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
    pub required: bool,
    /// Schema of the first media type, if it declares one
    pub schema: Option<Schema>,
}

impl RequestBody {
    /// Schema type of the body; a body without a schema is an object.
    pub fn schema_type(&self) -> SchemaType {
        self.schema
            .as_ref()
            .map_or(SchemaType::Object, Schema::schema_type)
    }
}

impl ApiDescription {
    /// Detect the format revision from the version markers.
    pub fn spec_version(&self) -> SpecVersion {
        if self.openapi.as_deref().is_some_and(|v| v.starts_with('3')) {
            SpecVersion::OpenApi3
        } else if self.swagger.is_some() {
            SpecVersion::Swagger2
        } else {
            SpecVersion::Unknown
        }
    }

    /// Path items in document order; empty when the document has no paths.
    pub fn path_items(&self) -> impl Iterator<Item = (&String, &PathItem)> {
        self.paths.iter().flatten()
    }

    /// Look up a local reference (`#/parameters/limit`,
    /// `#/components/parameters/limit`) in the document.
    pub fn resolve_ref(&self, reference: &str) -> Option<&Value> {
        let pointer = reference.strip_prefix('#')?;
        let mut segments = pointer.strip_prefix('/')?.splitn(2, '/');
        let root = self.extra.get(segments.next()?)?;
        match segments.next() {
            Some(rest) => root.pointer(&format!("/{}", rest)),
            None => Some(root),
        }
    }

    /// Follow `$ref` hops from `node` until a node without one is reached.
    fn follow_refs<'a>(&'a self, mut node: &'a Value) -> Option<&'a Value> {
        for _ in 0..MAX_REF_DEPTH {
            match node.get("$ref").and_then(Value::as_str) {
                Some(reference) => node = self.resolve_ref(reference)?,
                None => return Some(node),
            }
        }
        None
    }

    /// Resolve a parameter that is a bare `$ref` to its definition.
    ///
    /// Parameters that aren't references are returned as-is; unresolvable
    /// references yield `None`.
    pub fn resolve_parameter(&self, param: &Parameter) -> Option<Parameter> {
        match &param.reference {
            None => Some(param.clone()),
            Some(reference) => {
                let node = self.follow_refs(self.resolve_ref(reference)?)?;
                serde_json::from_value(node.clone()).ok()
            }
        }
    }

    /// Resolve an OpenAPI 3 `requestBody` node, following `$ref`s into
    /// `components/requestBodies`.
    ///
    /// Returns `None` when a reference can't be resolved or the node isn't an
    /// object.
    pub fn resolve_request_body(&self, body: &Value) -> Option<RequestBody> {
        let body = self.follow_refs(body)?.as_object()?;

        let required = body
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let schema = body
            .get("content")
            .and_then(Value::as_object)
            .and_then(|content| content.values().next())
            .and_then(|media| media.get("schema"))
            .and_then(|schema| match serde_json::from_value(schema.clone()) {
                Ok(schema) => Some(schema),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring unreadable request body schema");
                    None
                }
            });

        Some(RequestBody { required, schema })
    }
}
