use lopdf::Document as LopdfDocument;
use std::collections::BTreeSet;

/// Decoded content stream of a 1-based page, lossily as text.
pub fn page_content(doc: &LopdfDocument, page_number: u32) -> String {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_number) else {
        return String::new();
    };
    doc.get_page_content(*page_id)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

/// BaseFont names referenced by a 1-based page.
pub fn page_font_names(doc: &LopdfDocument, page_number: u32) -> BTreeSet<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_number) else {
        return BTreeSet::new();
    };
    doc.get_page_fonts(*page_id)
        .map(|fonts| {
            fonts
                .values()
                .filter_map(|font| font.get(b"BaseFont").and_then(|n| n.as_name()).ok())
                .map(|name| String::from_utf8_lossy(name).into_owned())
                .collect()
        })
        .unwrap_or_default()
}

/// Asserts the PDF has exactly `expected` pages.
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $expected:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $expected,
            "Expected {} pages, found {}",
            $expected,
            $pdf.page_count()
        );
    };
}

/// Asserts a page's content stream shows `text`.
#[macro_export]
macro_rules! assert_page_shows {
    ($pdf:expr, $page:expr, $text:expr) => {
        let content = $pdf.page_content($page);
        assert!(
            content.contains($text),
            "Expected page {} to show '{}'.\nContent:\n{}",
            $page,
            $text,
            content
        );
    };
}
