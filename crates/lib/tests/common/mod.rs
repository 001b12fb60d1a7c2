#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the integration tests: tracing setup, sample domain
//! data, and a scripted intelligence provider that records how the pipeline
//! drives it.

use async_trait::async_trait;
use marketpulse::providers::ai::IntelligenceProvider;
use marketpulse::{GeneratedCopy, PipelineError, PipelineStatus, ProductExtraction};
use std::sync::{Arc, Once, RwLock};
use tokio::sync::watch;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt::init();
    });
}

/// A sample extraction record for the given product name and source URL.
pub fn sample_extraction(name: &str, url: &str) -> ProductExtraction {
    ProductExtraction {
        name: name.to_string(),
        price: "$199.99".to_string(),
        description: format!("{name} is a mid-range competitor product."),
        features: vec!["RGB keyboard".to_string(), "144Hz display".to_string()],
        dimensions: "35 x 25 x 2 cm".to_string(),
        weight: "2.1 kg".to_string(),
        inventory_status: "In stock".to_string(),
        url: url.to_string(),
    }
}

/// A sample listing produced by the copy step.
pub fn sample_copy() -> GeneratedCopy {
    GeneratedCopy {
        seo_title: "Ultimate Gaming Laptop".to_string(),
        seo_subtitle: "Desktop power without the desk".to_string(),
        brief_description: "The fastest laptop in its class.".to_string(),
        detailed_description: "A long-form description of the superior product.".to_string(),
        keywords: vec!["gaming".to_string(), "laptop".to_string()],
        target_audience: "Competitive gamers".to_string(),
        selling_points: vec!["Fastest GPU in class".to_string()],
    }
}

/// How the scripted provider behaves for one step.
#[derive(Clone, Debug)]
pub enum StepOutcome<T> {
    /// Return this value.
    Ok(T),
    /// Fail as if the remote call itself failed.
    TransportError,
    /// Fail as if the response body did not decode (copy step only).
    DecodeError,
}

/// A scripted [`IntelligenceProvider`] for controller logic tests.
///
/// Records the order of calls and, when handed a status receiver via
/// [`MockIntelligenceProvider::observe_status`], the controller status that
/// was current when each call arrived. The controller sets the step status
/// before invoking the provider, so the observed sequence is exactly the
/// working-state transition order.
#[derive(Clone, Debug)]
pub struct MockIntelligenceProvider {
    pub extraction: StepOutcome<Vec<ProductExtraction>>,
    pub copy: StepOutcome<GeneratedCopy>,
    /// `Ok(None)` models a response with no inline image payload.
    pub image: StepOutcome<Option<String>>,
    pub calls: Arc<RwLock<Vec<String>>>,
    pub observed_statuses: Arc<RwLock<Vec<PipelineStatus>>>,
    status_rx: Arc<RwLock<Option<watch::Receiver<PipelineStatus>>>>,
}

impl MockIntelligenceProvider {
    /// A provider where all three steps succeed.
    pub fn succeeding() -> Self {
        Self {
            extraction: StepOutcome::Ok(vec![sample_extraction(
                "Laptop X",
                "https://a.test/p1",
            )]),
            copy: StepOutcome::Ok(sample_copy()),
            image: StepOutcome::Ok(Some("data:image/png;base64,AAAA".to_string())),
            calls: Arc::new(RwLock::new(Vec::new())),
            observed_statuses: Arc::new(RwLock::new(Vec::new())),
            status_rx: Arc::new(RwLock::new(None)),
        }
    }

    pub fn with_extractions(mut self, extractions: Vec<ProductExtraction>) -> Self {
        self.extraction = StepOutcome::Ok(extractions);
        self
    }

    pub fn with_failing_extraction(mut self) -> Self {
        self.extraction = StepOutcome::TransportError;
        self
    }

    pub fn with_failing_copy(mut self) -> Self {
        self.copy = StepOutcome::TransportError;
        self
    }

    pub fn with_undecodable_copy(mut self) -> Self {
        self.copy = StepOutcome::DecodeError;
        self
    }

    pub fn with_failing_image(mut self) -> Self {
        self.image = StepOutcome::TransportError;
        self
    }

    pub fn without_image(mut self) -> Self {
        self.image = StepOutcome::Ok(None);
        self
    }

    /// Makes every subsequent call record the controller status it saw.
    pub fn observe_status(&self, rx: watch::Receiver<PipelineStatus>) {
        *self.status_rx.write().unwrap() = Some(rx);
    }

    pub fn call_names(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn observed(&self) -> Vec<PipelineStatus> {
        self.observed_statuses.read().unwrap().clone()
    }

    fn record(&self, name: &str) {
        self.calls.write().unwrap().push(name.to_string());
        if let Some(rx) = self.status_rx.read().unwrap().as_ref() {
            self.observed_statuses.write().unwrap().push(*rx.borrow());
        }
    }

    fn transport_error() -> PipelineError {
        PipelineError::AiApi("simulated transport failure".to_string())
    }
}

#[async_trait]
impl IntelligenceProvider for MockIntelligenceProvider {
    async fn extract_products(
        &self,
        _urls: &[String],
        _category: &str,
    ) -> Result<Vec<ProductExtraction>, PipelineError> {
        self.record("extract_products");
        match &self.extraction {
            StepOutcome::Ok(extractions) => Ok(extractions.clone()),
            // A real provider degrades decode failure to an empty vec, so
            // only transport failure is scripted as an `Err` here.
            _ => Err(Self::transport_error()),
        }
    }

    async fn generate_copy(
        &self,
        _extractions: &[ProductExtraction],
        _category: &str,
    ) -> Result<GeneratedCopy, PipelineError> {
        self.record("generate_copy");
        match &self.copy {
            StepOutcome::Ok(copy) => Ok(copy.clone()),
            StepOutcome::TransportError => Err(Self::transport_error()),
            StepOutcome::DecodeError => {
                let decode_err = serde_json::from_str::<GeneratedCopy>("not json")
                    .expect_err("parsing garbage must fail");
                Err(PipelineError::CopyDecode(decode_err))
            }
        }
    }

    async fn generate_product_image(
        &self,
        _copy: &GeneratedCopy,
    ) -> Result<String, PipelineError> {
        self.record("generate_product_image");
        match &self.image {
            StepOutcome::Ok(Some(image_url)) => Ok(image_url.clone()),
            StepOutcome::Ok(None) => Err(PipelineError::MissingImage),
            _ => Err(Self::transport_error()),
        }
    }
}
