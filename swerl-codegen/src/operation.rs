//! Generic representation of API operations, shared by all targets.

use serde::Serialize;

/// An operation as handed to a target's post-processing hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodegenOperation {
    /// Function name derived by the target
    pub operation_id: String,
    /// Operation id as written in the description (or generated from method and path)
    pub raw_operation_id: String,
    /// HTTP method, uppercase until a target normalizes it
    pub http_method: String,
    /// Path template, e.g. `/pets/{id}`
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub params: Vec<CodegenParameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodegenParameter {
    /// Name as written in the description
    pub base_name: String,
    /// Variable name derived by the target
    pub param_name: String,
    /// `path`, `query`, `header`, `body`, `formData` or `cookie`
    pub location: String,
    pub required: bool,
    /// Schema type name (the type-mapping key)
    pub schema_type: String,
    /// Target type the schema type maps to
    pub data_type: String,
}

/// Operations sharing a tag; becomes one API module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationGroup {
    pub tag: String,
    pub api_name: String,
    pub operations: Vec<CodegenOperation>,
}
