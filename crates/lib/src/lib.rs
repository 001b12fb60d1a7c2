//! # Competitor Product Intelligence
//!
//! This crate provides a pipeline that turns a set of competitor product
//! URLs and a category into a superior product listing: it extracts
//! structured product facts from the URLs, synthesizes SEO listing copy
//! from those facts, and synthesizes a product image from the copy, each
//! step a single call to a configurable AI provider.

pub mod errors;
pub mod prompts;
pub mod providers;
pub mod schemas;
pub mod types;

pub use errors::PipelineError;
pub use types::{
    AnalysisResult, GeneratedCopy, Pipeline, PipelineBuilder, PipelineStatus, ProductExtraction,
};

use tokio::sync::watch;
use tracing::{info, warn};

/// The inbound contract caps a run at this many competitor URLs.
pub const MAX_URLS_PER_RUN: usize = 5;

impl Pipeline {
    /// Runs the full three-step analysis for the given URLs and category.
    ///
    /// The steps are strictly sequential: facts are extracted from every
    /// URL, listing copy is generated from the facts, and an image is
    /// generated from the copy. Status is observable throughout via
    /// [`Pipeline::status`] or [`Pipeline::subscribe`].
    ///
    /// Extraction and copy failures are fatal: the run stops, status moves
    /// to [`PipelineStatus::Errored`], and the error message is retained
    /// for [`Pipeline::error`]. Image failure is not: the run completes
    /// with an absent `image_url`. Each remote call is attempted exactly
    /// once; there are no retries.
    pub async fn run(
        &mut self,
        urls: &[String],
        category: &str,
    ) -> Result<AnalysisResult, PipelineError> {
        // A new run invalidates whatever the previous run left behind.
        self.error = None;
        self.result = None;

        if let Err(e) = validate_inputs(urls, category) {
            return Err(self.fail(e));
        }

        info!(url_count = urls.len(), category, "[run] starting analysis");

        self.set_status(PipelineStatus::Extracting);
        let extractions = match self.provider.extract_products(urls, category).await {
            Ok(extractions) => extractions,
            Err(e) => return Err(self.fail(e)),
        };
        if extractions.is_empty() {
            return Err(self.fail(PipelineError::EmptyExtraction));
        }
        info!(count = extractions.len(), "[run] extraction complete");

        self.set_status(PipelineStatus::GeneratingCopy);
        let final_copy = match self.provider.generate_copy(&extractions, category).await {
            Ok(copy) => copy,
            Err(e) => return Err(self.fail(e)),
        };
        info!(title = %final_copy.seo_title, "[run] copy generated");

        self.set_status(PipelineStatus::GeneratingImage);
        let image_url = match self.provider.generate_product_image(&final_copy).await {
            Ok(image_url) => Some(image_url),
            Err(e) => {
                // The one non-fatal step: the listing is still usable
                // without a generated visual.
                warn!(error = %e, "[run] image generation failed, continuing with copy only");
                None
            }
        };

        let result = AnalysisResult {
            extractions,
            final_copy,
            image_url,
        };
        self.result = Some(result.clone());
        self.set_status(PipelineStatus::Completed);
        Ok(result)
    }

    /// Clears result, error, and status back to [`PipelineStatus::Idle`].
    ///
    /// Does not cancel outstanding network activity; it only resets the
    /// observable state.
    pub fn reset(&mut self) {
        self.error = None;
        self.result = None;
        self.set_status(PipelineStatus::Idle);
    }

    /// The current run status.
    pub fn status(&self) -> PipelineStatus {
        *self.status_tx.borrow()
    }

    /// Subscribes to status changes.
    ///
    /// The receiver observes every transition the controller makes, so the
    /// presentation layer can react without polling.
    pub fn subscribe(&self) -> watch::Receiver<PipelineStatus> {
        self.status_tx.subscribe()
    }

    /// The fatal error message of the last run, if it errored.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The result of the last completed run, if any.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    fn set_status(&self, status: PipelineStatus) {
        self.status_tx.send_replace(status);
    }

    /// Records a fatal failure and hands the error back to the caller.
    fn fail(&mut self, e: PipelineError) -> PipelineError {
        self.error = Some(e.to_string());
        self.set_status(PipelineStatus::Errored);
        e
    }
}

/// Checks the inbound collaborator contract: 1..=5 non-blank URLs and a
/// non-blank category.
fn validate_inputs(urls: &[String], category: &str) -> Result<(), PipelineError> {
    if urls.is_empty() {
        return Err(PipelineError::InvalidInput(
            "at least one product URL is required".to_string(),
        ));
    }
    if urls.len() > MAX_URLS_PER_RUN {
        return Err(PipelineError::InvalidInput(format!(
            "at most {MAX_URLS_PER_RUN} product URLs are supported per run"
        )));
    }
    if urls.iter().any(|u| u.trim().is_empty()) {
        return Err(PipelineError::InvalidInput(
            "product URLs must not be blank".to_string(),
        ));
    }
    if category.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "a product category is required".to_string(),
        ));
    }
    Ok(())
}
