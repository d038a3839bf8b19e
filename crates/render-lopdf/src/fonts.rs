//! Font dictionaries for the two kinds of fonts a page can use.
//!
//! Standard fonts are referenced by name with WinAnsi encoding. TrueType
//! fonts are embedded whole as a Type0 font with Identity-H encoding, so the
//! content stream addresses glyph ids directly; a ToUnicode map keeps the
//! text extractable.

use cosmic_typeset::{EmbeddedFont, StandardFont};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::BTreeMap;

pub(crate) fn standard_font_dict(font: StandardFont) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font_name(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn sanitize_font_name(name: &str) -> String {
    let cleaned: String = name.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '-').collect();
    if cleaned.is_empty() {
        "EmbeddedFont".to_string()
    } else {
        cleaned
    }
}

/// Writes the objects of an embedded TrueType font and returns the id of
/// the Type0 font dictionary.
///
/// `used_glyphs` maps each glyph id drawn on the page to the text it
/// represents, which feeds the `W` widths and the ToUnicode map.
pub(crate) fn embed_true_type(
    doc: &mut Document,
    font: &EmbeddedFont,
    used_glyphs: &BTreeMap<u16, String>,
) -> ObjectId {
    let base_font = sanitize_font_name(font.name());
    let scale = 1000.0 / f32::from(font.units_per_em().max(1));
    let to_pdf_units = |v: i16| (f32::from(v) * scale).round() as i64;

    let data = font.data();
    let mut font_file = Stream::new(
        dictionary! { "Length1" => data.len() as i64 },
        data.to_vec(),
    );
    if let Err(e) = font_file.compress() {
        log::debug!("Font program for '{}' left uncompressed: {}", base_font, e);
    }
    let font_file_id = doc.add_object(font_file);

    let descriptor_id = doc.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => base_font.clone(),
        "Flags" => 32,
        "FontBBox" => font
            .bbox()
            .into_iter()
            .map(|v| Object::Integer(to_pdf_units(v)))
            .collect::<Vec<_>>(),
        "ItalicAngle" => 0,
        "Ascent" => to_pdf_units(font.ascender()),
        "Descent" => to_pdf_units(font.descender()),
        "CapHeight" => to_pdf_units(font.cap_height()),
        "StemV" => 80,
        "FontFile2" => font_file_id,
    });

    let mut widths = Vec::with_capacity(used_glyphs.len() * 2);
    for gid in used_glyphs.keys() {
        widths.push(Object::Integer(i64::from(*gid)));
        widths.push(Object::Array(vec![Object::Integer(
            font.glyph_width(*gid).round() as i64,
        )]));
    }

    let cid_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "CIDFontType2",
        "BaseFont" => base_font.clone(),
        "CIDSystemInfo" => dictionary! {
            "Registry" => Object::String(b"Adobe".to_vec(), StringFormat::Literal),
            "Ordering" => Object::String(b"Identity".to_vec(), StringFormat::Literal),
            "Supplement" => 0,
        },
        "FontDescriptor" => descriptor_id,
        "DW" => 1000,
        "W" => widths,
        "CIDToGIDMap" => "Identity",
    });

    let to_unicode_id = doc.add_object(Stream::new(
        Dictionary::new(),
        to_unicode_cmap(used_glyphs).into_bytes(),
    ));

    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => base_font,
        "Encoding" => "Identity-H",
        "DescendantFonts" => vec![Object::Reference(cid_font_id)],
        "ToUnicode" => to_unicode_id,
    })
}

fn utf16_hex(text: &str) -> String {
    text.encode_utf16().map(|unit| format!("{:04X}", unit)).collect()
}

fn to_unicode_cmap(used_glyphs: &BTreeMap<u16, String>) -> String {
    let mut out = String::new();
    out.push_str("/CIDInit /ProcSet findresource begin\n");
    out.push_str("12 dict begin\n");
    out.push_str("begincmap\n");
    out.push_str("/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n");
    out.push_str("/CMapName /Adobe-Identity-UCS def\n");
    out.push_str("/CMapType 2 def\n");
    out.push_str("1 begincodespacerange\n<0000> <FFFF>\nendcodespacerange\n");

    let entries: Vec<(&u16, &String)> = used_glyphs.iter().filter(|(_, s)| !s.is_empty()).collect();
    // At most 100 entries per bfchar block.
    for chunk in entries.chunks(100) {
        out.push_str(&format!("{} beginbfchar\n", chunk.len()));
        for (gid, text) in chunk {
            out.push_str(&format!("<{:04X}> <{}>\n", gid, utf16_hex(text)));
        }
        out.push_str("endbfchar\n");
    }

    out.push_str("endcmap\n");
    out.push_str("CMapName currentdict /CMap defineresource pop\n");
    out.push_str("end\nend\n");
    out
}
