use crate::error::FontError;
use crate::font::EmbeddedFont;
use rustybuzz::{Feature, UnicodeBuffer};
use std::sync::OnceLock;
use ttf_parser::Tag;

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedGlyph {
    pub glyph_id: u16,
    /// Offsets and advance in points.
    pub x_offset: f32,
    pub y_offset: f32,
    pub x_advance: f32,
    pub cluster: u32,
}

/// A run of text shaped with one embedded font at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedText {
    pub glyphs: Vec<PositionedGlyph>,
    pub width: f32,
    pub font_size: f32,
}

impl ShapedText {
    pub fn glyph_ids(&self) -> impl Iterator<Item = u16> + '_ {
        self.glyphs.iter().map(|g| g.glyph_id)
    }
}

fn features() -> &'static [Feature] {
    static FEATURES: OnceLock<Vec<Feature>> = OnceLock::new();
    FEATURES.get_or_init(|| {
        vec![
            Feature::new(Tag::from_bytes(b"liga"), 1, ..),
            Feature::new(Tag::from_bytes(b"kern"), 1, ..),
        ]
    })
}

/// Shapes `text` with `font`, producing positioned glyphs.
///
/// Complex scripts are reordered and ligated by the shaper, so the glyph
/// count can differ from the character count.
pub fn shape_text(font: &EmbeddedFont, text: &str, font_size: f32) -> Result<ShapedText, FontError> {
    let face = font.as_face().ok_or_else(|| FontError::Parse {
        name: font.name().to_string(),
        message: "face could not be created for shaping".to_string(),
    })?;
    let scale = font_size / f32::from(font.units_per_em().max(1));

    let mut buffer = UnicodeBuffer::new();
    buffer.push_str(text);
    buffer.guess_segment_properties();
    let glyph_buffer = rustybuzz::shape(&face, features(), buffer);

    let mut glyphs = Vec::with_capacity(glyph_buffer.len());
    let mut width = 0.0;
    for (info, pos) in glyph_buffer
        .glyph_infos()
        .iter()
        .zip(glyph_buffer.glyph_positions())
    {
        let x_advance = pos.x_advance as f32 * scale;
        glyphs.push(PositionedGlyph {
            glyph_id: u16::try_from(info.glyph_id).unwrap_or(0),
            x_offset: pos.x_offset as f32 * scale,
            y_offset: pos.y_offset as f32 * scale,
            x_advance,
            cluster: info.cluster,
        });
        width += x_advance;
    }

    Ok(ShapedText {
        glyphs,
        width,
        font_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn fixture_font() -> Arc<Vec<u8>> {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/fixtures/DejaVuSans.ttf");
        Arc::new(std::fs::read(path).expect("fixture font"))
    }

    #[test]
    fn test_shapes_latin_text() {
        let font = EmbeddedFont::parse("DejaVuSans", fixture_font()).unwrap();
        let shaped = shape_text(&font, "Numerology", 20.0).unwrap();
        assert_eq!(shaped.glyphs.len(), 10);
        assert!(shaped.glyph_ids().all(|id| id != 0));
        assert!(shaped.width > 0.0);
        let sum: f32 = shaped.glyphs.iter().map(|g| g.x_advance).sum();
        assert!((sum - shaped.width).abs() < 1e-3);
    }

    #[test]
    fn test_width_is_proportional_to_size() {
        let font = EmbeddedFont::parse("DejaVuSans", fixture_font()).unwrap();
        let small = shape_text(&font, "Cosmic", 10.0).unwrap().width;
        let large = shape_text(&font, "Cosmic", 40.0).unwrap().width;
        assert!((large - small * 4.0).abs() < 0.01);
    }

    #[test]
    fn test_uncovered_characters_shape_to_notdef() {
        let font = EmbeddedFont::parse("DejaVuSans", fixture_font()).unwrap();
        let shaped = shape_text(&font, "क", 12.0).unwrap();
        assert!(shaped.glyph_ids().all(|id| id == 0));
    }
}
