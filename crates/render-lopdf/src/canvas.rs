//! A drawing surface for one page.
//!
//! Collects content-stream operations and the resources they reference,
//! then assembles them into a [`PageBuffer`].

use crate::background::ImageXObject;
use crate::config::{PageSize, Rgb};
use crate::error::RenderError;
use crate::fonts;
use crate::page::{PageBuffer, single_page_document};
use cosmic_typeset::{EmbeddedFont, FontId, FontRegistry, ShapedText, encode_win_ansi, shape_text, text_width};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Text prepared for drawing in a specific font.
enum PreparedText {
    Standard { bytes: Vec<u8>, width: f32 },
    Shaped(ShapedText),
}

impl PreparedText {
    fn width(&self) -> f32 {
        match self {
            PreparedText::Standard { width, .. } => *width,
            PreparedText::Shaped(shaped) => shaped.width,
        }
    }
}

/// Font, size and fill of a text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontId,
    pub size: f32,
    pub color: Rgb,
    /// Fill opacity; 1.0 is opaque.
    pub alpha: f32,
}

impl TextStyle {
    pub fn new(font: FontId, size: f32, color: Rgb) -> Self {
        Self {
            font,
            size,
            color,
            alpha: 1.0,
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

struct EmbeddedUsage {
    resource_name: String,
    font: Arc<EmbeddedFont>,
    glyphs: BTreeMap<u16, String>,
}

pub struct PageCanvas<'a> {
    doc: Document,
    fonts: &'a FontRegistry,
    size: PageSize,
    operations: Vec<Operation>,
    font_names: HashMap<FontId, String>,
    font_resources: Dictionary,
    embedded: Vec<EmbeddedUsage>,
    xobjects: Dictionary,
    ext_gstates: Dictionary,
    alpha_names: HashMap<u32, String>,
}

impl<'a> PageCanvas<'a> {
    pub fn new(size: PageSize, fonts: &'a FontRegistry) -> Self {
        Self {
            doc: Document::with_version("1.7"),
            fonts,
            size,
            operations: Vec::new(),
            font_names: HashMap::new(),
            font_resources: Dictionary::new(),
            embedded: Vec::new(),
            xobjects: Dictionary::new(),
            ext_gstates: Dictionary::new(),
            alpha_names: HashMap::new(),
        }
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.push("rg", vec![color.r.into(), color.g.into(), color.b.into()]);
    }

    pub fn fill_rect(&mut self, color: Rgb, x: f32, y: f32, width: f32, height: f32) {
        self.push("q", vec![]);
        self.set_fill_color(color);
        self.push("re", vec![x.into(), y.into(), width.into(), height.into()]);
        self.push("f", vec![]);
        self.push("Q", vec![]);
    }

    pub fn fill_page(&mut self, color: Rgb) {
        let PageSize { width, height } = self.size;
        self.fill_rect(color, 0.0, 0.0, width, height);
    }

    /// Places `image` stretched over the rectangle.
    pub fn draw_image(&mut self, image: ImageXObject, x: f32, y: f32, width: f32, height: f32) {
        let name = format!("Im{}", self.xobjects.len() + 1);
        let image_id = self.doc.add_object(image.into_stream());
        self.xobjects.set(name.as_bytes(), image_id);

        self.push("q", vec![]);
        self.push(
            "cm",
            vec![width.into(), 0.into(), 0.into(), height.into(), x.into(), y.into()],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
    }

    pub fn draw_full_page_image(&mut self, image: ImageXObject) {
        let PageSize { width, height } = self.size;
        self.draw_image(image, 0.0, 0.0, width, height);
    }

    fn font_resource_name(&mut self, font: &FontId) -> Result<String, RenderError> {
        if let Some(name) = self.font_names.get(font) {
            return Ok(name.clone());
        }
        let name = format!("F{}", self.font_names.len() + 1);
        match font {
            FontId::Standard(standard) => {
                let font_id = self.doc.add_object(fonts::standard_font_dict(*standard));
                self.font_resources.set(name.as_bytes(), font_id);
            }
            FontId::Embedded(_) => {
                let embedded = self
                    .fonts
                    .embedded(font)
                    .ok_or_else(|| RenderError::Other(format!("Font '{}' is not registered", font)))?;
                self.embedded.push(EmbeddedUsage {
                    resource_name: name.clone(),
                    font: embedded.clone(),
                    glyphs: BTreeMap::new(),
                });
            }
        }
        self.font_names.insert(font.clone(), name.clone());
        Ok(name)
    }

    fn prepare(&self, text: &str, font: &FontId, size: f32) -> Result<PreparedText, RenderError> {
        match font {
            FontId::Standard(standard) => Ok(PreparedText::Standard {
                bytes: encode_win_ansi(text),
                width: text_width(*standard, text, size),
            }),
            FontId::Embedded(_) => {
                let embedded = self
                    .fonts
                    .embedded(font)
                    .ok_or_else(|| RenderError::Other(format!("Font '{}' is not registered", font)))?;
                Ok(PreparedText::Shaped(shape_text(embedded, text, size)?))
            }
        }
    }

    /// Width of `text` in points as it would be drawn.
    pub fn measure(&self, text: &str, font: &FontId, size: f32) -> Result<f32, RenderError> {
        Ok(self.prepare(text, font, size)?.width())
    }

    fn alpha_state(&mut self, alpha: f32) -> String {
        let key = (alpha.clamp(0.0, 1.0) * 1000.0).round() as u32;
        if let Some(name) = self.alpha_names.get(&key) {
            return name.clone();
        }
        let name = format!("GS{}", self.alpha_names.len() + 1);
        let value = key as f32 / 1000.0;
        self.ext_gstates.set(
            name.as_bytes(),
            dictionary! { "Type" => "ExtGState", "ca" => value, "CA" => value },
        );
        self.alpha_names.insert(key, name.clone());
        name
    }

    /// Draws `text` with its baseline starting at (`x`, `y`).
    pub fn draw_text(&mut self, text: &str, style: &TextStyle, x: f32, y: f32) -> Result<(), RenderError> {
        let prepared = self.prepare(text, &style.font, style.size)?;
        self.draw_prepared(text, prepared, style, x, y)
    }

    /// Draws `text` horizontally centered on `center_x`.
    pub fn draw_centered_text(
        &mut self,
        text: &str,
        style: &TextStyle,
        center_x: f32,
        y: f32,
    ) -> Result<(), RenderError> {
        let prepared = self.prepare(text, &style.font, style.size)?;
        let x = center_x - prepared.width() / 2.0;
        self.draw_prepared(text, prepared, style, x, y)
    }

    fn draw_prepared(
        &mut self,
        text: &str,
        prepared: PreparedText,
        style: &TextStyle,
        x: f32,
        y: f32,
    ) -> Result<(), RenderError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let font_name = self.font_resource_name(&style.font)?;

        self.push("q", vec![]);
        if style.alpha < 1.0 {
            let state = self.alpha_state(style.alpha);
            self.push("gs", vec![Object::Name(state.into_bytes())]);
        }
        self.push("BT", vec![]);
        self.push("Tf", vec![Object::Name(font_name.clone().into_bytes()), style.size.into()]);
        self.set_fill_color(style.color);

        match prepared {
            PreparedText::Standard { bytes, .. } => {
                self.push("Td", vec![x.into(), y.into()]);
                self.push("Tj", vec![Object::String(bytes, StringFormat::Literal)]);
            }
            PreparedText::Shaped(shaped) => {
                self.record_glyphs(&font_name, text, &shaped);
                let mut pen_x = x;
                for glyph in &shaped.glyphs {
                    self.push(
                        "Tm",
                        vec![
                            1.into(),
                            0.into(),
                            0.into(),
                            1.into(),
                            (pen_x + glyph.x_offset).into(),
                            (y + glyph.y_offset).into(),
                        ],
                    );
                    self.push(
                        "Tj",
                        vec![Object::String(
                            glyph.glyph_id.to_be_bytes().to_vec(),
                            StringFormat::Hexadecimal,
                        )],
                    );
                    pen_x += glyph.x_advance;
                }
            }
        }

        self.push("ET", vec![]);
        self.push("Q", vec![]);
        Ok(())
    }

    /// Remembers which glyphs were drawn and the text each stands for.
    fn record_glyphs(&mut self, font_name: &str, text: &str, shaped: &ShapedText) {
        let Some(usage) = self.embedded.iter_mut().find(|u| u.resource_name == font_name) else {
            return;
        };
        let mut starts: Vec<usize> = shaped.glyphs.iter().map(|g| g.cluster as usize).collect();
        starts.sort_unstable();
        starts.dedup();

        for glyph in &shaped.glyphs {
            if glyph.glyph_id == 0 {
                continue;
            }
            let start = glyph.cluster as usize;
            let end = starts
                .iter()
                .copied()
                .find(|s| *s > start)
                .unwrap_or(text.len());
            let cluster_text = text.get(start..end).unwrap_or_default().to_string();
            let entry = usage.glyphs.entry(glyph.glyph_id).or_default();
            if entry.is_empty() {
                *entry = cluster_text;
            }
        }
    }

    /// Assembles the page and its resources into a standalone document.
    pub fn finish(mut self) -> Result<PageBuffer, RenderError> {
        for usage in std::mem::take(&mut self.embedded) {
            let font_id = fonts::embed_true_type(&mut self.doc, &usage.font, &usage.glyphs);
            self.font_resources.set(usage.resource_name.as_bytes(), font_id);
        }

        let content = Content {
            operations: self.operations,
        };
        let mut stream = Stream::new(Dictionary::new(), content.encode()?);
        stream.compress()?;
        let content_id = self.doc.add_object(stream);

        let mut resources = Dictionary::new();
        if !self.font_resources.is_empty() {
            resources.set("Font", self.font_resources);
        }
        if !self.xobjects.is_empty() {
            resources.set("XObject", self.xobjects);
        }
        if !self.ext_gstates.is_empty() {
            resources.set("ExtGState", self.ext_gstates);
        }

        Ok(PageBuffer::from_document(single_page_document(
            self.doc,
            content_id.into(),
            resources,
            self.size,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_typeset::StandardFont;

    fn fixture_font() -> Arc<Vec<u8>> {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/fixtures/DejaVuSans.ttf");
        Arc::new(std::fs::read(path).expect("fixture font"))
    }

    fn operators(page: &PageBuffer) -> Vec<String> {
        let doc = page.document();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        content.operations.into_iter().map(|op| op.operator).collect()
    }

    #[test]
    fn test_standard_text_is_extractable() {
        let fonts = FontRegistry::new();
        let mut canvas = PageCanvas::new(PageSize::A4, &fonts);
        let style = TextStyle::new(StandardFont::Helvetica.into(), 32.0, Rgb::GOLD);
        canvas.draw_centered_text("Thank You", &style, 297.0, 440.0).unwrap();
        let page = canvas.finish().unwrap();

        let text = page.document().extract_text(&[1]).unwrap();
        assert!(text.contains("Thank You"), "{text}");
    }

    #[test]
    fn test_fonts_are_registered_once() {
        let fonts = FontRegistry::new();
        let mut canvas = PageCanvas::new(PageSize::A4, &fonts);
        let helvetica = TextStyle::new(StandardFont::Helvetica.into(), 12.0, Rgb::WHITE);
        let larger = TextStyle { size: 14.0, ..helvetica.clone() };
        let times = TextStyle::new(StandardFont::TimesRoman.into(), 12.0, Rgb::WHITE);
        canvas.draw_text("a", &helvetica, 10.0, 10.0).unwrap();
        canvas.draw_text("b", &larger, 10.0, 30.0).unwrap();
        canvas.draw_text("c", &times, 10.0, 50.0).unwrap();
        let page = canvas.finish().unwrap();

        let doc = page.document();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let fonts = doc.get_page_fonts(page_id).unwrap();
        assert_eq!(fonts.len(), 2);
    }

    #[test]
    fn test_alpha_uses_ext_gstate() {
        let fonts = FontRegistry::new();
        let mut canvas = PageCanvas::new(PageSize::A4, &fonts);
        let shadow = TextStyle::new(StandardFont::Helvetica.into(), 20.0, Rgb::BLACK).with_alpha(0.8);
        canvas.draw_text("shadow", &shadow, 12.0, 10.0).unwrap();
        canvas.draw_text("shadow", &shadow, 12.0, 40.0).unwrap();
        let page = canvas.finish().unwrap();

        let ops = operators(&page);
        assert_eq!(ops.iter().filter(|op| *op == "gs").count(), 2);

        let doc = page.document();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let (_, resource_ids) = doc.get_page_resources(page_id).unwrap();
        let resources = doc.get_dictionary(resource_ids[0]).unwrap();
        let states = resources.get(b"ExtGState").unwrap().as_dict().unwrap();
        assert_eq!(states.len(), 1);
    }

    #[test]
    fn test_whitespace_text_draws_nothing() {
        let fonts = FontRegistry::new();
        let mut canvas = PageCanvas::new(PageSize::A4, &fonts);
        let style = TextStyle::new(StandardFont::Helvetica.into(), 12.0, Rgb::WHITE);
        canvas.draw_text("   ", &style, 0.0, 0.0).unwrap();
        let page = canvas.finish().unwrap();
        assert!(!operators(&page).contains(&"BT".to_string()));
    }

    #[test]
    fn test_embedded_font_draws_glyph_ids() {
        let mut fonts = FontRegistry::new();
        let dejavu = fonts.register("DejaVu Sans", fixture_font()).unwrap();
        let mut canvas = PageCanvas::new(PageSize::A4, &fonts);
        let style = TextStyle::new(dejavu, 46.0, Rgb::DEEP_GOLD);
        canvas.draw_centered_text("Ram", &style, 297.0, 550.0).unwrap();
        let page = canvas.finish().unwrap();

        let ops = operators(&page);
        assert_eq!(ops.iter().filter(|op| *op == "Tj").count(), 3);
        assert_eq!(ops.iter().filter(|op| *op == "Tm").count(), 3);

        let doc = page.document();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let page_fonts = doc.get_page_fonts(page_id).unwrap();
        let type0 = page_fonts.values().next().unwrap();
        assert_eq!(type0.get(b"Subtype").unwrap().as_name().unwrap(), b"Type0");
        assert_eq!(type0.get(b"BaseFont").unwrap().as_name().unwrap(), b"DejaVuSans");
    }

    #[test]
    fn test_unregistered_embedded_font_is_an_error() {
        let fonts = FontRegistry::new();
        let mut canvas = PageCanvas::new(PageSize::A4, &fonts);
        let missing = FontId::Embedded(Arc::from("Missing"));
        let style = TextStyle::new(missing.clone(), 12.0, Rgb::WHITE);
        assert!(canvas.draw_text("x", &style, 0.0, 0.0).is_err());
        assert!(canvas.measure("x", &missing, 12.0).is_err());
    }
}
