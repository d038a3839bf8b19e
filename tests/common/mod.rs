#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use cosmic_render_lopdf::{AssetConfig, RenderingConfig};
use cosmic_traits::{InMemoryResourceProvider, ResourceProvider};
use lopdf::Document as LopdfDocument;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Decoded content stream of a 1-based page, lossily as text.
    pub fn page_content(&self, page_number: u32) -> String {
        pdf_assertions::page_content(&self.doc, page_number)
    }
}

/// Rendering configuration over an asset store, script range Devanagari.
pub fn rendering_config(resources: impl ResourceProvider + 'static) -> Arc<RenderingConfig> {
    Arc::new(RenderingConfig::resolve(&AssetConfig::default(), Arc::new(resources)))
}

/// Rendering configuration with no assets at all: solid fills, standard fonts.
pub fn bare_rendering_config() -> Arc<RenderingConfig> {
    rendering_config(InMemoryResourceProvider::new())
}
