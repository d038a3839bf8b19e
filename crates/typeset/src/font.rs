//! Font identifiers and the registry that maps them to font data.
//!
//! Fonts are resolved once at startup. Afterwards a [`FontId`] is a plain
//! value: the standard PDF fonts need no data, embedded fonts are looked up
//! in the [`FontRegistry`].

use crate::error::FontError;
use crate::metrics;
use crate::script::ScriptRange;
use cosmic_traits::ResourceProvider;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One of the base-14 PDF fonts used by the report pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    TimesRoman,
}

impl StandardFont {
    pub fn base_font_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::TimesRoman => "Times-Roman",
        }
    }

    /// Advance width of `c` in 1/1000 em.
    pub fn char_width(self, c: char) -> u16 {
        metrics::standard_char_width(self, c)
    }
}

/// Identifies the font a piece of text is drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontId {
    Standard(StandardFont),
    /// A TrueType font registered under this name.
    Embedded(Arc<str>),
}

impl FontId {
    pub fn name(&self) -> &str {
        match self {
            FontId::Standard(font) => font.base_font_name(),
            FontId::Embedded(name) => name,
        }
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<StandardFont> for FontId {
    fn from(font: StandardFont) -> Self {
        FontId::Standard(font)
    }
}

/// Parsed metadata and raw bytes of a TrueType font.
pub struct EmbeddedFont {
    name: Arc<str>,
    data: Arc<Vec<u8>>,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    cap_height: i16,
    bbox: [i16; 4],
}

impl fmt::Debug for EmbeddedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedFont")
            .field("name", &self.name)
            .field("data_len", &self.data.len())
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

impl EmbeddedFont {
    /// Parses `data`, rejecting anything that is not a usable TrueType face.
    pub fn parse(name: &str, data: Arc<Vec<u8>>) -> Result<Self, FontError> {
        let face = ttf_parser::Face::parse(&data, 0).map_err(|e| FontError::Parse {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        let bbox = face.global_bounding_box();
        let units_per_em = face.units_per_em();
        let ascender = face.ascender();
        let descender = face.descender();
        let cap_height = face.capital_height().unwrap_or(ascender);
        Ok(Self {
            name: Arc::from(name),
            units_per_em,
            ascender,
            descender,
            cap_height,
            bbox: [bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max],
            data,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &Arc<Vec<u8>> {
        &self.data
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn ascender(&self) -> i16 {
        self.ascender
    }

    pub fn descender(&self) -> i16 {
        self.descender
    }

    pub fn cap_height(&self) -> i16 {
        self.cap_height
    }

    pub fn bbox(&self) -> [i16; 4] {
        self.bbox
    }

    /// A lightweight face view over the font bytes, for shaping.
    pub fn as_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, 0)
    }

    /// Horizontal advance of `glyph_id` in 1/1000 em.
    pub fn glyph_width(&self, glyph_id: u16) -> f32 {
        let advance = ttf_parser::Face::parse(&self.data, 0)
            .ok()
            .and_then(|face| face.glyph_hor_advance(ttf_parser::GlyphId(glyph_id)))
            .unwrap_or(0);
        f32::from(advance) * 1000.0 / f32::from(self.units_per_em.max(1))
    }

    /// Returns `true` if the font maps at least one character of `range`.
    pub fn covers(&self, range: ScriptRange) -> bool {
        let Ok(face) = ttf_parser::Face::parse(&self.data, 0) else {
            return false;
        };
        (range.low..=range.high).any(|c| face.glyph_index(c).is_some())
    }
}

/// The set of embedded fonts available to the page synthesizer.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    embedded: HashMap<Arc<str>, Arc<EmbeddedFont>>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers font bytes under `name` and returns the id to draw with.
    pub fn register(&mut self, name: &str, data: Arc<Vec<u8>>) -> Result<FontId, FontError> {
        let font = Arc::new(EmbeddedFont::parse(name, data)?);
        let key: Arc<str> = Arc::from(name);
        self.embedded.insert(key.clone(), font);
        Ok(FontId::Embedded(key))
    }

    /// Loads a script font from `provider` and registers it.
    ///
    /// Fails if the resource is missing, unparsable, or has no glyph in
    /// `script`.
    pub fn register_script_font(
        &mut self,
        provider: &dyn ResourceProvider,
        path: &str,
        name: &str,
        script: ScriptRange,
    ) -> Result<FontId, FontError> {
        let data = provider.load(path)?;
        let font = EmbeddedFont::parse(name, data)?;
        if !font.covers(script) {
            return Err(FontError::MissingCoverage(name.to_string()));
        }
        let key: Arc<str> = Arc::from(name);
        self.embedded.insert(key.clone(), Arc::new(font));
        log::info!("Registered script font '{}' from {} ({})", name, path, provider.name());
        Ok(FontId::Embedded(key))
    }

    /// Like [`register_script_font`](Self::register_script_font) but returns
    /// `fallback` when the font cannot be registered.
    pub fn resolve_script_font(
        &mut self,
        provider: &dyn ResourceProvider,
        path: &str,
        name: &str,
        script: ScriptRange,
        fallback: FontId,
    ) -> FontId {
        match self.register_script_font(provider, path, name, script) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Script font unavailable, using '{}' instead: {}", fallback, e);
                fallback
            }
        }
    }

    pub fn embedded(&self, id: &FontId) -> Option<&Arc<EmbeddedFont>> {
        match id {
            FontId::Standard(_) => None,
            FontId::Embedded(name) => self.embedded.get(name),
        }
    }

    pub fn is_registered(&self, id: &FontId) -> bool {
        match id {
            FontId::Standard(_) => true,
            FontId::Embedded(name) => self.embedded.contains_key(name),
        }
    }

    pub fn len(&self) -> usize {
        self.embedded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embedded.is_empty()
    }
}
