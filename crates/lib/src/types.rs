use crate::errors::PipelineError;
use crate::providers::ai::IntelligenceProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::watch;

/// One competitor product fact sheet, as extracted from a single URL.
///
/// `name`, `description`, and `url` are required by the response schema
/// declared to the AI service; every other field may come back empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductExtraction {
    pub name: String,
    #[serde(default)]
    pub price: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub dimensions: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub inventory_status: String,
    pub url: String,
}

/// A synthesized product listing, generated from the full set of extractions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCopy {
    pub seo_title: String,
    #[serde(default)]
    pub seo_subtitle: String,
    pub brief_description: String,
    pub detailed_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub selling_points: Vec<String>,
}

/// The terminal artifact of one pipeline run.
///
/// `extractions` is non-empty by construction: an empty extraction set
/// aborts the run before a result is assembled. `image_url` is absent when
/// image synthesis failed, which does not fail the run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub extractions: Vec<ProductExtraction>,
    pub final_copy: GeneratedCopy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Process-wide run state. Transitions are strictly forward along
/// Idle → Extracting → GeneratingCopy → GeneratingImage → Completed, with a
/// side exit to Errored from any of the three working states. Errored and
/// Completed return to Idle only via [`crate::Pipeline::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PipelineStatus {
    Idle,
    Extracting,
    GeneratingCopy,
    GeneratingImage,
    Completed,
    Errored,
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStatus::Idle => write!(f, "idle"),
            PipelineStatus::Extracting => write!(f, "extracting"),
            PipelineStatus::GeneratingCopy => write!(f, "generating_copy"),
            PipelineStatus::GeneratingImage => write!(f, "generating_image"),
            PipelineStatus::Completed => write!(f, "completed"),
            PipelineStatus::Errored => write!(f, "errored"),
        }
    }
}

/// The analysis pipeline controller.
///
/// Owns the run state the presentation layer observes: the current
/// [`PipelineStatus`], the last fatal error message, and the last completed
/// [`AnalysisResult`]. Only the controller writes these.
pub struct Pipeline {
    pub(crate) provider: Box<dyn IntelligenceProvider>,
    pub(crate) status_tx: watch::Sender<PipelineStatus>,
    pub(crate) error: Option<String>,
    pub(crate) result: Option<AnalysisResult>,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("status", &*self.status_tx.borrow())
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// A builder for creating [`Pipeline`] instances.
#[derive(Default)]
pub struct PipelineBuilder {
    provider: Option<Box<dyn IntelligenceProvider>>,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the intelligence provider that backs the three remote steps.
    pub fn provider(mut self, provider: Box<dyn IntelligenceProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Builds the [`Pipeline`].
    ///
    /// Returns [`PipelineError::InvalidInput`] if no provider was configured.
    pub fn build(self) -> Result<Pipeline, PipelineError> {
        let provider = self
            .provider
            .ok_or_else(|| PipelineError::InvalidInput("no intelligence provider configured".into()))?;
        let (status_tx, _) = watch::channel(PipelineStatus::Idle);
        Ok(Pipeline {
            provider,
            status_tx,
            error: None,
            result: None,
        })
    }
}
