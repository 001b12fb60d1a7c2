//! # Response Schemas
//!
//! Static output schemas declared to the AI service, one per structured
//! remote operation, in the service's schema dialect. Declaring the schema
//! up front constrains the response to machine-parseable JSON that decodes
//! directly into the types in [`crate::types`].

use serde_json::{json, Value};

/// The schema for the extraction response: an array with one object per URL.
///
/// `name`, `description`, and `url` are required; the matching struct fields
/// on [`crate::types::ProductExtraction`] carry no `#[serde(default)]`.
pub fn extraction_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "price": { "type": "STRING" },
                "description": { "type": "STRING" },
                "features": { "type": "ARRAY", "items": { "type": "STRING" } },
                "dimensions": { "type": "STRING" },
                "weight": { "type": "STRING" },
                "inventoryStatus": { "type": "STRING" },
                "url": { "type": "STRING" }
            },
            "required": ["name", "description", "url"]
        }
    })
}

/// The schema for the copy generation response: a single listing object.
pub fn copy_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "seoTitle": { "type": "STRING" },
            "seoSubtitle": { "type": "STRING" },
            "briefDescription": { "type": "STRING" },
            "detailedDescription": { "type": "STRING" },
            "keywords": { "type": "ARRAY", "items": { "type": "STRING" } },
            "targetAudience": { "type": "STRING" },
            "sellingPoints": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["seoTitle", "briefDescription", "detailedDescription"]
    })
}
