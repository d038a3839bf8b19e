//! Wraps a vendor body document in branded cover and closing pages.

use crate::config::DEFAULT_TRAILING_PAGES;
use crate::error::ComposeError;
use cosmic_numerology::BirthDate;
use cosmic_pdf_composer::DocumentAssembler;
use cosmic_render_lopdf::{PageBuffer, PageSynthesizer, RenderingConfig};
use cosmic_traits::DocumentSource;
use lopdf::Document;
use std::sync::Arc;

/// Number of leading body pages to keep out of `total`.
///
/// The last `trailing` pages are dropped. A body too short to lose them is
/// kept whole.
pub fn retained_pages(total: usize, trailing: usize) -> usize {
    match total.checked_sub(trailing) {
        Some(keep) if keep >= 1 => keep,
        _ => total,
    }
}

/// A finished document: cover, retained body pages, closing page.
#[derive(Debug, Clone)]
pub struct ComposedDocument {
    bytes: Vec<u8>,
    page_count: usize,
    body_pages: usize,
}

impl ComposedDocument {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// How many body pages made it into the document.
    pub fn body_pages(&self) -> usize {
        self.body_pages
    }
}

pub struct DocumentComposer {
    synthesizer: PageSynthesizer,
    source: Arc<dyn DocumentSource>,
    trailing_pages: usize,
}

impl DocumentComposer {
    pub fn new(config: Arc<RenderingConfig>, source: Arc<dyn DocumentSource>) -> Self {
        Self {
            synthesizer: PageSynthesizer::new(config),
            source,
            trailing_pages: DEFAULT_TRAILING_PAGES,
        }
    }

    /// Overrides how many trailing body pages are dropped.
    pub fn with_trailing_pages(mut self, trailing_pages: usize) -> Self {
        self.trailing_pages = trailing_pages;
        self
    }

    pub fn synthesizer(&self) -> &PageSynthesizer {
        &self.synthesizer
    }

    /// Builds the branded document around the body document at `body_url`.
    ///
    /// Fails only if the body cannot be fetched or parsed. Nothing is
    /// returned on failure; falling back to the raw body URL is left to the
    /// caller.
    pub async fn compose(
        &self,
        body_url: &str,
        name: &str,
        birth_date: &BirthDate,
    ) -> Result<ComposedDocument, ComposeError> {
        let cover = self.synthesizer.make_cover_page(name, birth_date);
        let body = self.source.fetch(body_url).await?;
        self.assemble(cover, &body)
    }

    /// Merges an already fetched body between a fresh cover and closing page.
    pub fn compose_with_body(
        &self,
        body: &[u8],
        name: &str,
        birth_date: &BirthDate,
    ) -> Result<ComposedDocument, ComposeError> {
        let cover = self.synthesizer.make_cover_page(name, birth_date);
        self.assemble(cover, body)
    }

    fn assemble(&self, cover: PageBuffer, body: &[u8]) -> Result<ComposedDocument, ComposeError> {
        let body = Document::load_mem(body)?;
        let total = body.get_pages().len();
        let keep = retained_pages(total, self.trailing_pages);
        log::debug!(
            "Body document has {} pages; keeping {} (dropping up to {} trailing)",
            total,
            keep,
            self.trailing_pages
        );

        let mut assembler = DocumentAssembler::new();
        assembler.append_document(cover.document())?;
        assembler.append_page_range(&body, 0..keep)?;
        let closing = self.synthesizer.make_closing_page();
        assembler.append_document(closing.document())?;

        let page_count = assembler.page_count();
        let bytes = assembler.into_bytes()?;
        log::info!(
            "Composed document with {} pages ({} from the body), {} bytes",
            page_count,
            keep,
            bytes.len()
        );
        Ok(ComposedDocument {
            bytes,
            page_count,
            body_pages: keep,
        })
    }
}
