//! Example: end-to-end competitor analysis run.
//!
//! Drives the full pipeline against the live Gemini API: extract product
//! facts from competitor URLs, generate listing copy for a superior
//! product, and generate a product image.
//!
//! # Prerequisites
//!
//! - `GEMINI_API_KEY` set in the environment or a `.env` file.
//!
//! # Usage
//!
//! From the workspace root:
//! `RUST_LOG=info cargo run -p marketpulse --example analyze`

use anyhow::Result;
use marketpulse::providers::ai::gemini::GeminiProvider;
use marketpulse::PipelineBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let provider = GeminiProvider::from_env()?;
    let mut pipeline = PipelineBuilder::new().provider(Box::new(provider)).build()?;

    let urls = vec!["https://www.example.com/products/gaming-laptop-15".to_string()];
    let result = pipeline.run(&urls, "Gaming Laptops").await?;

    println!("Researched {} competitor product(s).", result.extractions.len());
    for extraction in &result.extractions {
        println!("- {} ({})", extraction.name, extraction.url);
    }
    println!("\nSEO title: {}", result.final_copy.seo_title);
    println!("Summary:   {}", result.final_copy.brief_description);
    match &result.image_url {
        Some(uri) => println!("Image:     {} bytes of data URI", uri.len()),
        None => println!("Image:     not generated"),
    }

    Ok(())
}
