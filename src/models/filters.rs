//! Filter and config objects that can be built from plain JSON mappings.
//!
//! Each `from_value` constructor documents its recognized keys. Unrecognized
//! keys fail with [`CloudGlueError::Configuration`] instead of being silently
//! dropped, so typos surface before any network call. Values are passed
//! through as-is; only their shape is checked.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{CloudGlueError, Result};

fn as_object<'a>(value: &'a Value, context: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| CloudGlueError::configuration(format!("{context} must be a JSON object")))
}

fn check_keys(map: &Map<String, Value>, allowed: &[&str], context: &str) -> Result<()> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(CloudGlueError::configuration(format!(
                "unrecognized {context} key `{key}` (expected one of: {})",
                allowed.join(", ")
            )));
        }
    }
    Ok(())
}

fn string_field(map: &Map<String, Value>, key: &str, context: &str) -> Result<Option<String>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(CloudGlueError::configuration(format!(
            "{context} key `{key}` must be a string"
        ))),
    }
}

fn string_array_field(
    map: &Map<String, Value>,
    key: &str,
    context: &str,
) -> Result<Option<Vec<String>>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        // Non-string elements are coerced to their JSON text.
        Some(Value::Array(items)) => Ok(Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        )),
        Some(_) => Err(CloudGlueError::configuration(format!(
            "{context} key `{key}` must be an array of strings"
        ))),
    }
}

fn bool_field(map: &Map<String, Value>, key: &str, context: &str) -> Result<Option<bool>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(CloudGlueError::configuration(format!(
            "{context} key `{key}` must be a boolean"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Chat completion filters
// ---------------------------------------------------------------------------

/// Search constraints for a chat completion, grouped by the data they apply
/// to: user-supplied file metadata, technical video info, or file properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatCompletionFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<FilterCondition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video_info: Vec<FilterCondition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file: Vec<FilterCondition>,
}

impl ChatCompletionFilter {
    /// Builds a filter from a plain mapping.
    ///
    /// Recognized keys: `metadata`, `video_info`, `file`, each an array of
    /// condition mappings (see [`FilterCondition::from_value`]).
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_object(value, "filter")?;
        check_keys(map, &["metadata", "video_info", "file"], "filter")?;
        Ok(Self {
            metadata: conditions_field(map, "metadata")?,
            video_info: conditions_field(map, "video_info")?,
            file: conditions_field(map, "file")?,
        })
    }

    /// Builds a filter from per-scope condition lists.
    pub fn from_parts(
        metadata: Option<&[Value]>,
        video_info: Option<&[Value]>,
        file: Option<&[Value]>,
    ) -> Result<Self> {
        Ok(Self {
            metadata: conditions_slice(metadata)?,
            video_info: conditions_slice(video_info)?,
            file: conditions_slice(file)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty() && self.video_info.is_empty() && self.file.is_empty()
    }
}

fn conditions_field(map: &Map<String, Value>, key: &str) -> Result<Vec<FilterCondition>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(FilterCondition::from_value).collect(),
        Some(_) => Err(CloudGlueError::configuration(format!(
            "filter key `{key}` must be an array of conditions"
        ))),
    }
}

fn conditions_slice(items: Option<&[Value]>) -> Result<Vec<FilterCondition>> {
    items
        .unwrap_or_default()
        .iter()
        .map(FilterCondition::from_value)
        .collect()
}

/// One comparison inside a [`ChatCompletionFilter`] scope.
///
/// The wire names for the value fields are camelCase (`valueText`,
/// `valueTextArray`); the snake_case spellings are accepted on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCondition {
    /// JSON path of the field the condition applies to, e.g.
    /// `metadata.category` or `duration_seconds`.
    pub path: String,
    /// Comparison operator, passed through verbatim (e.g. `Equal`, `In`,
    /// `ContainsAny`, `LessThan`, `GreaterThan`).
    pub operator: String,
    #[serde(
        rename = "valueText",
        alias = "value_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_text: Option<String>,
    #[serde(
        rename = "valueTextArray",
        alias = "value_text_array",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_text_array: Option<Vec<String>>,
}

impl FilterCondition {
    pub fn new(path: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            operator: operator.into(),
            value_text: None,
            value_text_array: None,
        }
    }

    pub fn with_value_text(mut self, value: impl Into<String>) -> Self {
        self.value_text = Some(value.into());
        self
    }

    pub fn with_value_text_array(mut self, values: Vec<String>) -> Self {
        self.value_text_array = Some(values);
        self
    }

    /// Builds a condition from a plain mapping.
    ///
    /// Recognized keys: `path` (required), `operator` (required),
    /// `value_text` / `valueText`, `value_text_array` / `valueTextArray`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_object(value, "filter condition")?;
        check_keys(
            map,
            &[
                "path",
                "operator",
                "value_text",
                "valueText",
                "value_text_array",
                "valueTextArray",
            ],
            "filter condition",
        )?;

        let path = string_field(map, "path", "filter condition")?.ok_or_else(|| {
            CloudGlueError::configuration("filter condition is missing required key `path`")
        })?;
        let operator = string_field(map, "operator", "filter condition")?.ok_or_else(|| {
            CloudGlueError::configuration("filter condition is missing required key `operator`")
        })?;

        let value_text = match string_field(map, "value_text", "filter condition")? {
            Some(v) => Some(v),
            None => string_field(map, "valueText", "filter condition")?,
        };
        let value_text_array = match string_array_field(map, "value_text_array", "filter condition")?
        {
            Some(v) => Some(v),
            None => string_array_field(map, "valueTextArray", "filter condition")?,
        };

        Ok(Self {
            path,
            operator,
            value_text,
            value_text_array,
        })
    }
}

// ---------------------------------------------------------------------------
// List filters (sent as query parameters)
// ---------------------------------------------------------------------------

/// Query constraints for `collections.list`.
#[derive(Debug, Clone, Default)]
pub struct CollectionFilter {
    /// Substring match on the collection name.
    pub name: Option<String>,
    /// "asc" or "desc".
    pub order: Option<String>,
    /// Field to sort by, e.g. "created_at".
    pub sort: Option<String>,
}

impl CollectionFilter {
    /// Recognized keys: `name`, `order`, `sort`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_object(value, "collection filter")?;
        check_keys(map, &["name", "order", "sort"], "collection filter")?;
        Ok(Self {
            name: string_field(map, "name", "collection filter")?,
            order: string_field(map, "order", "collection filter")?,
            sort: string_field(map, "sort", "collection filter")?,
        })
    }

    pub(crate) fn append_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(name) = &self.name {
            query.push(("name", name.clone()));
        }
        if let Some(order) = &self.order {
            query.push(("order", order.clone()));
        }
        if let Some(sort) = &self.sort {
            query.push(("sort", sort.clone()));
        }
    }
}

/// Query constraints for `files.list`.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// Processing status, e.g. "ready" or "failed".
    pub status: Option<String>,
    /// "asc" or "desc".
    pub order: Option<String>,
    pub sort: Option<String>,
}

impl FileFilter {
    /// Recognized keys: `status`, `order`, `sort`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_object(value, "file filter")?;
        check_keys(map, &["status", "order", "sort"], "file filter")?;
        Ok(Self {
            status: string_field(map, "status", "file filter")?,
            order: string_field(map, "order", "file filter")?,
            sort: string_field(map, "sort", "file filter")?,
        })
    }

    pub(crate) fn append_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(status) = &self.status {
            query.push(("status", status.clone()));
        }
        if let Some(order) = &self.order {
            query.push(("order", order.clone()));
        }
        if let Some(sort) = &self.sort {
            query.push(("sort", sort.clone()));
        }
    }
}

/// Query constraints for `collections.list_videos`.
#[derive(Debug, Clone, Default)]
pub struct VideoFilter {
    /// Processing status within the collection.
    pub status: Option<String>,
    /// "asc" or "desc".
    pub order: Option<String>,
    pub sort: Option<String>,
}

impl VideoFilter {
    /// Recognized keys: `status`, `order`, `sort`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_object(value, "video filter")?;
        check_keys(map, &["status", "order", "sort"], "video filter")?;
        Ok(Self {
            status: string_field(map, "status", "video filter")?,
            order: string_field(map, "order", "video filter")?,
            sort: string_field(map, "sort", "video filter")?,
        })
    }

    pub(crate) fn append_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(status) = &self.status {
            query.push(("status", status.clone()));
        }
        if let Some(order) = &self.order {
            query.push(("order", order.clone()));
        }
        if let Some(sort) = &self.sort {
            query.push(("sort", sort.clone()));
        }
    }
}

/// Query constraints for `responses.list`.
#[derive(Debug, Clone, Default)]
pub struct ResponseFilter {
    /// e.g. "in_progress", "completed", "failed".
    pub status: Option<String>,
    /// ISO 8601.
    pub created_before: Option<String>,
    /// ISO 8601.
    pub created_after: Option<String>,
}

impl ResponseFilter {
    /// Recognized keys: `status`, `created_before`, `created_after`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_object(value, "response filter")?;
        check_keys(
            map,
            &["status", "created_before", "created_after"],
            "response filter",
        )?;
        Ok(Self {
            status: string_field(map, "status", "response filter")?,
            created_before: string_field(map, "created_before", "response filter")?,
            created_after: string_field(map, "created_after", "response filter")?,
        })
    }

    pub(crate) fn append_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(status) = &self.status {
            query.push(("status", status.clone()));
        }
        if let Some(created_before) = &self.created_before {
            query.push(("created_before", created_before.clone()));
        }
        if let Some(created_after) = &self.created_after {
            query.push(("created_after", created_after.clone()));
        }
    }
}

/// Query constraints for `share.list`.
#[derive(Debug, Clone, Default)]
pub struct ShareFilter {
    /// "file" or "collection".
    pub asset_type: Option<String>,
    /// ISO 8601.
    pub created_before: Option<String>,
    /// ISO 8601.
    pub created_after: Option<String>,
}

impl ShareFilter {
    /// Recognized keys: `asset_type`, `created_before`, `created_after`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_object(value, "share filter")?;
        check_keys(
            map,
            &["asset_type", "created_before", "created_after"],
            "share filter",
        )?;
        Ok(Self {
            asset_type: string_field(map, "asset_type", "share filter")?,
            created_before: string_field(map, "created_before", "share filter")?,
            created_after: string_field(map, "created_after", "share filter")?,
        })
    }

    pub(crate) fn append_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(asset_type) = &self.asset_type {
            query.push(("asset_type", asset_type.clone()));
        }
        if let Some(created_before) = &self.created_before {
            query.push(("created_before", created_before.clone()));
        }
        if let Some(created_after) = &self.created_after {
            query.push(("created_after", created_after.clone()));
        }
    }
}

// ---------------------------------------------------------------------------
// Processing configs
// ---------------------------------------------------------------------------

/// Which signals description generation should extract.
///
/// Everything defaults to enabled; turn channels off to cut processing cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeConfig {
    #[serde(default = "default_true")]
    pub enable_speech: bool,
    #[serde(default = "default_true")]
    pub enable_scene_text: bool,
    #[serde(default = "default_true")]
    pub enable_visual_scene_description: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            enable_speech: true,
            enable_scene_text: true,
            enable_visual_scene_description: true,
        }
    }
}

impl DescribeConfig {
    /// Recognized keys: `enable_speech`, `enable_scene_text`,
    /// `enable_visual_scene_description`. Missing keys keep their defaults.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_object(value, "describe config")?;
        check_keys(
            map,
            &[
                "enable_speech",
                "enable_scene_text",
                "enable_visual_scene_description",
            ],
            "describe config",
        )?;

        let mut config = Self::default();
        if let Some(v) = bool_field(map, "enable_speech", "describe config")? {
            config.enable_speech = v;
        }
        if let Some(v) = bool_field(map, "enable_scene_text", "describe config")? {
            config.enable_scene_text = v;
        }
        if let Some(v) = bool_field(map, "enable_visual_scene_description", "describe config")? {
            config.enable_visual_scene_description = v;
        }
        Ok(config)
    }
}

/// What entity extraction should pull out of each video.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Natural-language description of the entities to extract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// JSON schema constraining the extraction output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl ExtractConfig {
    /// Recognized keys: `prompt` (string), `schema` (object).
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_object(value, "extract config")?;
        check_keys(map, &["prompt", "schema"], "extract config")?;

        let schema = match map.get("schema") {
            None | Some(Value::Null) => None,
            Some(schema @ Value::Object(_)) => Some(schema.clone()),
            Some(_) => {
                return Err(CloudGlueError::configuration(
                    "extract config key `schema` must be an object",
                ))
            }
        };

        Ok(Self {
            prompt: string_field(map, "prompt", "extract config")?,
            schema,
        })
    }
}
