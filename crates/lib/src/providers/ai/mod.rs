pub mod gemini;

use crate::errors::PipelineError;
use crate::types::{GeneratedCopy, ProductExtraction};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for the remote intelligence service backing the pipeline.
///
/// This trait isolates all knowledge of the remote service's request and
/// response shapes behind the three domain operations the pipeline needs,
/// so the controller can be driven by a real provider (e.g. Gemini) or a
/// scripted one in tests.
#[async_trait]
pub trait IntelligenceProvider: Send + Sync + Debug + DynClone {
    /// Extracts one structured fact record per competitor URL.
    ///
    /// Decode failure of the response body is a degrade path, not an error:
    /// implementations return an empty sequence and log a warning. Only
    /// transport-level failure of the remote call itself is an `Err`.
    async fn extract_products(
        &self,
        urls: &[String],
        category: &str,
    ) -> Result<Vec<ProductExtraction>, PipelineError>;

    /// Synthesizes listing copy from the full set of extraction records.
    ///
    /// Unlike extraction, a response that fails to decode is fatal: copy is
    /// the pipeline's primary deliverable and has no empty fallback.
    async fn generate_copy(
        &self,
        extractions: &[ProductExtraction],
        category: &str,
    ) -> Result<GeneratedCopy, PipelineError>;

    /// Synthesizes a product image from the generated copy.
    ///
    /// Returns an image reference (a data URI) or
    /// [`PipelineError::MissingImage`] when the response carries no inline
    /// image payload.
    async fn generate_product_image(
        &self,
        copy: &GeneratedCopy,
    ) -> Result<String, PipelineError>;
}

dyn_clone::clone_trait_object!(IntelligenceProvider);
