use crate::config::PageSize;
use crate::error::RenderError;
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

/// A single-page PDF document held in memory.
///
/// Produced by the page synthesizer and consumed by document assembly,
/// which copies the page into the composed output.
#[derive(Debug, Clone)]
pub struct PageBuffer {
    document: Document,
}

impl PageBuffer {
    pub(crate) fn from_document(document: Document) -> Self {
        Self { document }
    }

    /// An empty page of `size`. Building it cannot fail.
    pub fn blank(size: PageSize) -> Self {
        let mut doc = Document::with_version("1.7");
        let content_id = doc.add_object(Stream::new(Dictionary::new(), Vec::new()));
        Self::from_document(single_page_document(doc, content_id.into(), Dictionary::new(), size))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Serializes the page as a standalone PDF file.
    pub fn into_bytes(mut self) -> Result<Vec<u8>, RenderError> {
        let mut buffer = Vec::new();
        self.document.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

/// Adds the page tree and catalog around one page and returns the document.
pub(crate) fn single_page_document(
    mut doc: Document,
    contents: Object,
    resources: Dictionary,
    size: PageSize,
) -> Document {
    let pages_id = doc.new_object_id();
    let resources_id = doc.add_object(resources);
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.0.into(), 0.0.into(), size.width.into(), size.height.into()],
        "Contents" => contents,
        "Resources" => resources_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}
