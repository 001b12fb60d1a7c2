//! # Default Prompt Templates
//!
//! This module contains the instruction templates sent to the AI service,
//! one per remote operation, together with the helper functions that
//! substitute run-specific values into them. Keeping the templates as
//! constants keeps the request shapes testable without a live service.

use crate::types::{GeneratedCopy, ProductExtraction};

// --- Extraction Prompts ---

/// The instruction for the product extraction stage.
///
/// Directs the model to visit each URL and produce one structured record per
/// URL, falling back to web search when a page is unreachable.
///
/// Placeholders: `{category}`, `{urls}`
pub const EXTRACTION_PROMPT: &str = "Act as a market researcher. Visit the following product URLs and extract detailed information for each.\n\
    Category: {category}\n\
    URLs:\n\
    {urls}\n\n\
    For each URL, identify:\n\
    1. Product Name\n\
    2. Price (with currency)\n\
    3. Short Description\n\
    4. Key Features (List)\n\
    5. Physical Dimensions\n\
    6. Weight\n\
    7. Inventory/Stock Status if visible.\n\n\
    If a URL is inaccessible, use web search to find information about the product based on the URL context.";

/// The instruction for the copy generation stage.
///
/// Asks for a high-converting listing for a superior version of the
/// researched product, built from the serialized extraction records.
///
/// Placeholders: `{category}`, `{research}`
pub const COPY_PROMPT: &str = "Based on the following competitor product research in the category \"{category}\", generate a new, high-converting, SEO-optimized product listing copy for a SUPERIOR version of this product.\n\n\
    Research Data:\n\
    {research}\n\n\
    The copy must be professional, persuasive, and include:\n\
    1. An attention-grabbing SEO Title.\n\
    2. A compelling Subtitle.\n\
    3. A brief summary of the value proposition.\n\
    4. A detailed product description.\n\
    5. A list of optimized keywords.\n\
    6. Clear target audience definition.\n\
    7. Top unique selling points.";

/// The instruction for the image synthesis stage.
///
/// Placeholders: `{title}`, `{summary}`
pub const IMAGE_PROMPT: &str = "Professional product photography of: {title}.\n\
    Context: {summary}.\n\
    Style: Clean, minimalist studio lighting, high resolution, 4k, suitable for e-commerce, white background or elegant lifestyle setting.";

/// Builds the extraction instruction for a set of competitor URLs.
pub fn build_extraction_prompt(urls: &[String], category: &str) -> String {
    EXTRACTION_PROMPT
        .replace("{category}", category)
        .replace("{urls}", &urls.join("\n"))
}

/// Builds the copy generation instruction from the extraction records.
///
/// The records are serialized to JSON so the model sees exactly what the
/// extraction stage produced.
pub fn build_copy_prompt(extractions: &[ProductExtraction], category: &str) -> String {
    let research =
        serde_json::to_string(extractions).unwrap_or_else(|_| "[]".to_string());
    COPY_PROMPT
        .replace("{category}", category)
        .replace("{research}", &research)
}

/// Builds the image synthesis instruction from the generated copy.
pub fn build_image_prompt(copy: &GeneratedCopy) -> String {
    IMAGE_PROMPT
        .replace("{title}", &copy.seo_title)
        .replace("{summary}", &copy.brief_description)
}
