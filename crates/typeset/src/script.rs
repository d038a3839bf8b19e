//! Script detection and font selection.

/// An inclusive range of Unicode code points belonging to one script block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptRange {
    pub low: char,
    pub high: char,
}

/// The Devanagari block, U+0900..=U+097F.
pub const DEVANAGARI: ScriptRange = ScriptRange::new('\u{0900}', '\u{097F}');

impl ScriptRange {
    pub const fn new(low: char, high: char) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, c: char) -> bool {
        (self.low..=self.high).contains(&c)
    }

    /// Returns `true` if any character of `text` lies in this block.
    pub fn appears_in(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }
}

/// Chooses the font that must render `text`.
///
/// The first character inside `script` selects `script_font`; text without
/// such a character (including empty text) gets `default_font`. The result
/// depends on nothing but the arguments.
pub fn select_font<'a, F: ?Sized>(
    text: &str,
    script: ScriptRange,
    script_font: &'a F,
    default_font: &'a F,
) -> &'a F {
    if script.appears_in(text) {
        script_font
    } else {
        default_font
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "Devanagari";
    const DEFAULT: &str = "Times-Roman";

    #[test]
    fn test_ascii_always_gets_default() {
        for text in ["", "John Smith", "O'Brien-Smith 1990", "~!@#$%^&*()"] {
            assert_eq!(select_font(text, DEVANAGARI, SCRIPT, DEFAULT), DEFAULT);
        }
    }

    #[test]
    fn test_devanagari_gets_script_font() {
        assert_eq!(select_font("राम", DEVANAGARI, SCRIPT, DEFAULT), SCRIPT);
        assert_eq!(select_font("Ram राम", DEVANAGARI, SCRIPT, DEFAULT), SCRIPT);
        assert_eq!(select_font("Ram\u{0900}", DEVANAGARI, SCRIPT, DEFAULT), SCRIPT);
        assert_eq!(select_font("\u{097F}", DEVANAGARI, SCRIPT, DEFAULT), SCRIPT);
    }

    #[test]
    fn test_range_boundaries() {
        assert!(!DEVANAGARI.contains('\u{08FF}'));
        assert!(DEVANAGARI.contains('\u{0900}'));
        assert!(DEVANAGARI.contains('\u{097F}'));
        assert!(!DEVANAGARI.contains('\u{0980}'));
        // Bengali and accented Latin are outside the block.
        assert_eq!(select_font("অ", DEVANAGARI, SCRIPT, DEFAULT), DEFAULT);
        assert_eq!(select_font("José", DEVANAGARI, SCRIPT, DEFAULT), DEFAULT);
    }

    #[test]
    fn test_selection_is_iff_over_sample_texts() {
        let samples = ["a", "é", "ñandú", "नमस्ते", "x\u{0950}y", "日本", "Ω"];
        for text in samples {
            let has_script = text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c));
            let expected = if has_script { SCRIPT } else { DEFAULT };
            assert_eq!(select_font(text, DEVANAGARI, SCRIPT, DEFAULT), expected, "{text}");
            // Repeated calls agree.
            assert_eq!(select_font(text, DEVANAGARI, SCRIPT, DEFAULT), expected);
        }
    }

    #[test]
    fn test_custom_range() {
        let greek = ScriptRange::new('\u{0370}', '\u{03FF}');
        assert_eq!(select_font("Ω", greek, SCRIPT, DEFAULT), SCRIPT);
        assert_eq!(select_font("राम", greek, SCRIPT, DEFAULT), DEFAULT);
    }
}
