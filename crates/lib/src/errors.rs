use thiserror::Error;

/// Custom error types for the application.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the AI service: {0}")]
    AiRequest(reqwest::Error),
    #[error("The AI service returned an error: {0}")]
    AiApi(String),
    #[error("Failed to deserialize the AI service response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error(
        "Could not extract information from the provided URLs. Please check if the URLs are valid and public."
    )]
    EmptyExtraction,
    #[error("Copy generation failed: the response was not valid listing copy: {0}")]
    CopyDecode(#[from] serde_json::Error),
    #[error("No image was generated")]
    MissingImage,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("API key is missing")]
    MissingApiKey,
}
