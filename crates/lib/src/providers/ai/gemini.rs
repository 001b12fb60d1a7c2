use crate::errors::PipelineError;
use crate::prompts::{build_copy_prompt, build_extraction_prompt, build_image_prompt};
use crate::providers::ai::IntelligenceProvider;
use crate::schemas::{copy_schema, extraction_schema};
use crate::types::{GeneratedCopy, ProductExtraction};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use tracing::{debug, warn};

/// Default public endpoint for the generateContent API.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default model for the two structured text operations.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-pro-preview";
/// Default model for image synthesis.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

// --- Gemini-specific request and response structures ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: Value,
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PartResponse {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

// --- Gemini Provider implementation ---

/// A provider for interacting with the Google Gemini API.
#[derive(Clone, Debug)]
pub struct GeminiProvider {
    client: ReqwestClient,
    api_base_url: String,
    api_key: String,
    text_model: String,
    image_model: String,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(
        api_base_url: String,
        api_key: String,
        text_model: String,
        image_model: String,
    ) -> Result<Self, PipelineError> {
        if api_key.is_empty() {
            return Err(PipelineError::MissingApiKey);
        }
        let client = ReqwestClient::builder()
            .build()
            .map_err(PipelineError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_base_url,
            api_key,
            text_model,
            image_model,
        })
    }

    /// Creates a provider from environment variables.
    ///
    /// Reads `GEMINI_API_KEY` (required), `GEMINI_API_BASE_URL`,
    /// `GEMINI_TEXT_MODEL`, and `GEMINI_IMAGE_MODEL`, loading a `.env` file
    /// first if one is present.
    pub fn from_env() -> Result<Self, PipelineError> {
        dotenvy::dotenv().ok();
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| PipelineError::MissingApiKey)?;
        let api_base_url =
            env::var("GEMINI_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let text_model =
            env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string());
        let image_model =
            env::var("GEMINI_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());
        Self::new(api_base_url, api_key, text_model, image_model)
    }

    /// Sends one generateContent request and decodes the response envelope.
    async fn generate(
        &self,
        model: &str,
        request_body: &GeminiRequest,
    ) -> Result<GeminiResponse, PipelineError> {
        let url = format!(
            "{base}/models/{model}:generateContent",
            base = self.api_base_url
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(request_body)
            .send()
            .await
            .map_err(PipelineError::AiRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PipelineError::AiApi(error_text));
        }

        response
            .json()
            .await
            .map_err(PipelineError::AiDeserialization)
    }

    /// Returns the first text part of the first candidate, or an empty string.
    fn first_text(response: &GeminiResponse) -> String {
        response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| p.text.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl IntelligenceProvider for GeminiProvider {
    async fn extract_products(
        &self,
        urls: &[String],
        category: &str,
    ) -> Result<Vec<ProductExtraction>, PipelineError> {
        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_extraction_prompt(urls, category),
                }],
            }],
            // The search tool covers URLs the model cannot fetch directly.
            tools: Some(vec![Tool {
                google_search: Value::Object(Default::default()),
            }]),
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(extraction_schema()),
                ..Default::default()
            }),
        };

        let response = self.generate(&self.text_model, &request_body).await?;
        let raw = Self::first_text(&response);
        debug!("<-- Extraction response: {raw}");

        match serde_json::from_str(&raw) {
            Ok(extractions) => Ok(extractions),
            Err(e) => {
                // Degrade path: a malformed body yields zero records, not an
                // error. The controller decides whether that is fatal.
                warn!(error = %e, "failed to parse extraction response, returning no records");
                Ok(Vec::new())
            }
        }
    }

    async fn generate_copy(
        &self,
        extractions: &[ProductExtraction],
        category: &str,
    ) -> Result<GeneratedCopy, PipelineError> {
        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_copy_prompt(extractions, category),
                }],
            }],
            tools: None,
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(copy_schema()),
                ..Default::default()
            }),
        };

        let response = self.generate(&self.text_model, &request_body).await?;
        let raw = Self::first_text(&response);
        debug!("<-- Copy response: {raw}");

        // No empty fallback here: unparsable copy fails the operation.
        let copy = serde_json::from_str(&raw)?;
        Ok(copy)
    }

    async fn generate_product_image(
        &self,
        copy: &GeneratedCopy,
    ) -> Result<String, PipelineError> {
        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_image_prompt(copy),
                }],
            }],
            tools: None,
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: "1:1".to_string(),
                }),
                ..Default::default()
            }),
        };

        let response = self.generate(&self.image_model, &request_body).await?;

        let inline = response
            .candidates
            .first()
            .and_then(|c| c.content.parts.iter().find_map(|p| p.inline_data.as_ref()));

        match inline {
            Some(image) => Ok(format!(
                "data:{mime};base64,{data}",
                mime = image.mime_type,
                data = image.data
            )),
            None => Err(PipelineError::MissingImage),
        }
    }
}
