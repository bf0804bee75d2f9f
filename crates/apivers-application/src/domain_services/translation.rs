//! Legacy description translation
//!
//! Legacy documents use snake_case service fields, list operations either as
//! an array or as a name-keyed map, and define input/output structures
//! inline. Translation hoists inline structures into named shapes
//! (`<Operation>Request` / `<Operation>Response`) and, unless asked
//! otherwise, drops documentation and the error catalog.
//!
//! ```text
//! { "api_version": "2011-12-05",        { "metadata": { "apiVersion": "2011-12-05", ... },
//!   "operations": [                       "operations": { "ListTables": {
//!     { "name": "ListTables",     ──►         "input": { "shape": "ListTablesRequest" } } },
//!       "input": { "type": ... } } ] }      "shapes": { "ListTablesRequest": { ... } } }
//! ```

use std::collections::BTreeMap;

use apivers_domain::constants::{
    INPUT_SHAPE_SUFFIX, LEGACY_VERSION_FIELD, OPERATIONS_FIELD, OUTPUT_SHAPE_SUFFIX,
};
use apivers_domain::error::{Error, Result};
use apivers_domain::value_objects::{
    ApiDescription, ApiMetadata, HttpBinding, Operation, ShapeRef, VersionKey,
};
use serde_json::{Map, Value};

const DOCUMENTATION_FIELDS: [&str; 2] = ["documentation", "documentation_url"];
const MEMBERS_FIELD: &str = "members";

/// What translation keeps from a legacy document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationOptions {
    /// Keep service, operation and member documentation
    pub documentation: bool,
    /// Keep each operation's error catalog
    pub errors: bool,
}

impl TranslationOptions {
    /// Keep documentation
    pub fn with_documentation(mut self, keep: bool) -> Self {
        self.documentation = keep;
        self
    }

    /// Keep error catalogs
    pub fn with_errors(mut self, keep: bool) -> Self {
        self.errors = keep;
        self
    }
}

/// Translate a legacy document into a normalized description
///
/// `reference` is used only for error messages.
pub fn translate_legacy(
    reference: &str,
    document: &Map<String, Value>,
    options: TranslationOptions,
) -> Result<ApiDescription> {
    let version = document
        .get(LEGACY_VERSION_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            Error::unsupported_shape(reference, "legacy description has no string api_version")
        })?;
    let version = VersionKey::parse(version)?;

    let mut description = ApiDescription::new(version.clone());
    description.metadata = translate_metadata(version, document);
    if options.documentation {
        description.documentation = string_field(document, "documentation");
    }

    if let Some(shapes) = document.get("shapes").and_then(Value::as_object) {
        for (name, shape) in shapes {
            description
                .shapes
                .insert(name.clone(), prepare_shape(shape, options));
        }
    }

    for (name, raw) in legacy_operations(reference, document)? {
        let operation =
            translate_operation(reference, &name, raw, &mut description.shapes, options)?;
        description.operations.insert(name, operation);
    }

    Ok(description)
}

fn translate_metadata(api_version: VersionKey, document: &Map<String, Value>) -> ApiMetadata {
    ApiMetadata {
        endpoint_prefix: string_field(document, "endpoint_prefix"),
        service_full_name: string_field(document, "service_full_name"),
        service_abbreviation: string_field(document, "service_abbreviation"),
        signature_version: string_field(document, "signature_version"),
        protocol: string_field(document, "type").or_else(|| string_field(document, "protocol")),
        target_prefix: string_field(document, "target_prefix"),
        json_version: string_field(document, "json_version"),
        ..ApiMetadata::new(api_version)
    }
}

/// Operations as (name, body) pairs, from either the array or the map layout
fn legacy_operations<'a>(
    reference: &str,
    document: &'a Map<String, Value>,
) -> Result<Vec<(String, &'a Map<String, Value>)>> {
    let not_object = |what: &str| {
        Error::unsupported_shape(reference, format!("legacy operation {what} is not an object"))
    };

    match document.get(OPERATIONS_FIELD) {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let body = item.as_object().ok_or_else(|| not_object(&format!("#{i}")))?;
                let name = body.get("name").and_then(Value::as_str).ok_or_else(|| {
                    Error::unsupported_shape(reference, format!("legacy operation #{i} has no name"))
                })?;
                Ok((name.to_string(), body))
            })
            .collect(),
        Some(Value::Object(map)) => map
            .iter()
            .map(|(name, item)| {
                let body = item.as_object().ok_or_else(|| not_object(name))?;
                Ok((name.clone(), body))
            })
            .collect(),
        Some(_) => Err(Error::unsupported_shape(
            reference,
            "legacy operations must be an array or an object",
        )),
        None => Ok(Vec::new()),
    }
}

fn translate_operation(
    reference: &str,
    name: &str,
    raw: &Map<String, Value>,
    shapes: &mut BTreeMap<String, Value>,
    options: TranslationOptions,
) -> Result<Operation> {
    let mut operation = Operation::new(name);
    operation.http = translate_http(raw);
    operation.input = hoist_shape(
        reference,
        name,
        raw.get("input"),
        INPUT_SHAPE_SUFFIX,
        shapes,
        options,
    )?;
    operation.output = hoist_shape(
        reference,
        name,
        raw.get("output"),
        OUTPUT_SHAPE_SUFFIX,
        shapes,
        options,
    )?;
    if options.errors {
        operation.errors = translate_errors(raw.get("errors"));
    }
    if options.documentation {
        operation.documentation = string_field(raw, "documentation");
    }
    Ok(operation)
}

fn translate_http(raw: &Map<String, Value>) -> HttpBinding {
    let mut http = HttpBinding::default();
    if let Some(binding) = raw.get("http").and_then(Value::as_object) {
        if let Some(method) = binding.get("method").and_then(Value::as_str) {
            http.method = method.to_uppercase();
        }
        if let Some(uri) = binding
            .get("uri")
            .or_else(|| binding.get("request_uri"))
            .and_then(Value::as_str)
        {
            http.request_uri = uri.to_string();
        }
    }
    http
}

/// Turn an inline structure into a named shape, or pass a shape name through
fn hoist_shape(
    reference: &str,
    operation: &str,
    raw: Option<&Value>,
    suffix: &str,
    shapes: &mut BTreeMap<String, Value>,
    options: TranslationOptions,
) -> Result<Option<ShapeRef>> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(shape)) => Ok(Some(ShapeRef::new(shape.clone()))),
        Some(Value::Object(body)) => {
            if let Some(shape) = body.get("shape").and_then(Value::as_str) {
                return Ok(Some(ShapeRef::new(shape)));
            }
            let shape_name = format!("{operation}{suffix}");
            let shape = prepare_shape(&Value::Object(body.clone()), options);
            shapes.insert(shape_name.clone(), shape);
            Ok(Some(ShapeRef::new(shape_name)))
        }
        Some(_) => Err(Error::unsupported_shape(
            reference,
            format!("operation {operation} has a malformed {suffix} shape"),
        )),
    }
}

fn translate_errors(raw: Option<&Value>) -> Vec<ShapeRef> {
    let Some(Value::Array(errors)) = raw else {
        return Vec::new();
    };
    errors
        .iter()
        .filter_map(|error| match error {
            Value::String(name) => Some(ShapeRef::new(name.clone())),
            Value::Object(body) => body
                .get("shape")
                .or_else(|| body.get("name"))
                .and_then(Value::as_str)
                .map(ShapeRef::new),
            _ => None,
        })
        .collect()
}

fn prepare_shape(shape: &Value, options: TranslationOptions) -> Value {
    let mut shape = shape.clone();
    if !options.documentation {
        strip_documentation(&mut shape);
    }
    shape
}

/// Remove documentation fields from a shape and every shape nested in it
///
/// Keys of a `members` map are member names, not shape fields, so a member
/// called `documentation` survives.
pub fn strip_documentation(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for field in DOCUMENTATION_FIELDS {
                map.remove(field);
            }
            for (key, child) in map.iter_mut() {
                match child {
                    Value::Object(members) if key == MEMBERS_FIELD => {
                        members.values_mut().for_each(strip_documentation);
                    }
                    _ => strip_documentation(child),
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(strip_documentation),
        _ => {}
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}
