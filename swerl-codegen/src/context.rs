use indexmap::IndexMap;
use serde_json::Value;
use swerl_spec::ApiDocument;

/// Data available to supporting-file templates.
///
/// Built by the engine once per run and handed to the target's
/// post-processing hook before the templates see it.
#[derive(Debug, Clone)]
pub struct SupportingFileContext<'a> {
    /// The API description being generated from
    pub document: &'a ApiDocument,
    /// Template variables
    pub properties: IndexMap<String, Value>,
}

impl<'a> SupportingFileContext<'a> {
    pub fn new(document: &'a ApiDocument, properties: IndexMap<String, Value>) -> Self {
        Self {
            document,
            properties,
        }
    }

    /// Set a template variable, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }
}
