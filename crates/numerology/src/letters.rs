//! Pythagorean letter values.

/// Value of each letter `a..=z`: its alphabet position modulo 9, with a
/// remainder of 0 mapped to 9.
const LETTER_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // a-i
    1, 2, 3, 4, 5, 6, 7, 8, 9, // j-r
    1, 2, 3, 4, 5, 6, 7, 8, // s-z
];

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Value of a single character. Anything that is not an ASCII Latin letter
/// counts as 0.
pub fn letter_value(c: char) -> u32 {
    if !c.is_ascii_alphabetic() {
        return 0;
    }
    let lower = c.to_ascii_lowercase();
    let idx = (lower as u8 - b'a') as usize;
    u32::from(LETTER_VALUES[idx])
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Sum of all letter values in `name`.
pub fn name_total(name: &str) -> u64 {
    name.chars().map(|c| u64::from(letter_value(c))).sum()
}

/// Sum of the values of the vowels in `name`.
pub fn vowel_total(name: &str) -> u64 {
    name.chars()
        .filter(|c| is_vowel(*c))
        .map(|c| u64::from(letter_value(c)))
        .sum()
}

/// Sum of the values of the consonants in `name`.
pub fn consonant_total(name: &str) -> u64 {
    name.chars()
        .filter(|c| c.is_ascii_alphabetic() && !is_vowel(*c))
        .map(|c| u64::from(letter_value(c)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values_follow_position_mod_nine() {
        for (pos, c) in ('a'..='z').enumerate() {
            let expected = match (pos as u32 + 1) % 9 {
                0 => 9,
                r => r,
            };
            assert_eq!(letter_value(c), expected, "letter {c}");
        }
    }

    #[test]
    fn test_letter_value_case_insensitive() {
        assert_eq!(letter_value('J'), letter_value('j'));
        assert_eq!(letter_value('Z'), 8);
    }

    #[test]
    fn test_non_latin_contributes_zero() {
        assert_eq!(letter_value(' '), 0);
        assert_eq!(letter_value('-'), 0);
        assert_eq!(letter_value('7'), 0);
        assert_eq!(letter_value('é'), 0);
        assert_eq!(letter_value('र'), 0);
    }

    #[test]
    fn test_totals() {
        assert_eq!(name_total("John"), 20);
        assert_eq!(vowel_total("John"), 6);
        assert_eq!(consonant_total("John"), 14);
        assert_eq!(name_total("J. O'Hn"), 20);
    }
}
