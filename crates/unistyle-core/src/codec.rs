//! Character-level text transforms.
//!
//! Everything here iterates `char`s (Unicode scalar values), so styled letters
//! outside the BMP are never split into halves the way UTF-16 code units would be.
//! Characters a transform does not recognise are passed through unchanged.

use crate::style::{CaseStyle, OffsetStyle, StyleDefinition, StyleTransform};

/// Shift every ASCII letter in `text` into the styled alphabet.
pub fn encode(text: &str, style: &OffsetStyle) -> String {
    text.chars().map(|c| style.encode_char(c)).collect()
}

/// Map every styled letter in `text` back to ASCII.
pub fn decode(text: &str, style: &OffsetStyle) -> String {
    text.chars().map(|c| style.decode_char(c)).collect()
}

/// Locale-independent ASCII uppercase. Non-ASCII characters are untouched.
pub fn to_uppercase(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Locale-independent ASCII lowercase. Non-ASCII characters are untouched.
pub fn to_lowercase(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Apply a style's forward transform.
pub fn apply(text: &str, style: &StyleDefinition) -> String {
    match &style.transform {
        StyleTransform::Offset(offsets) => encode(text, offsets),
        StyleTransform::Case(CaseStyle::Upper) => to_uppercase(text),
        StyleTransform::Case(CaseStyle::Lower) => to_lowercase(text),
    }
}

/// Undo a style.
///
/// Offset styles are decoded by range. Case styles cannot recover the
/// original casing, so the text is returned unchanged; see
/// [`Reversibility::Reapply`](crate::style::Reversibility::Reapply).
pub fn revert(text: &str, style: &StyleDefinition) -> String {
    match &style.transform {
        StyleTransform::Offset(offsets) => decode(text, offsets),
        StyleTransform::Case(_) => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BOLD, MONOSPACE, SANS_BOLD};

    #[test]
    fn test_encode_exact_code_points() {
        let encoded = encode("AbZ", &BOLD);
        let code_points: Vec<u32> = encoded.chars().map(|c| c as u32).collect();
        assert_eq!(code_points, vec![0x1D400, 0x1D41B, 0x1D419]);
    }

    #[test]
    fn test_encode_sentence() {
        insta::assert_snapshot!(encode("Hello, World!", &BOLD), @"𝐇𝐞𝐥𝐥𝐨, 𝐖𝐨𝐫𝐥𝐝!");
    }

    #[test]
    fn test_round_trip_every_letter() {
        for c in ('A'..='Z').chain('a'..='z') {
            for style in [BOLD, SANS_BOLD, MONOSPACE] {
                let encoded = encode(&c.to_string(), &style);
                assert_ne!(encoded, c.to_string());
                assert_eq!(decode(&encoded, &style), c.to_string());
            }
        }
    }

    #[test]
    fn test_digits_survive_round_trip() {
        let encoded = encode("Test123", &BOLD);
        assert!(encoded.ends_with("123"));
        assert_eq!(decode(&encoded, &BOLD), "Test123");
    }

    #[test]
    fn test_non_letters_pass_through() {
        let text = "0123456789 .,;:!?-_()[]{}\t\n🦀é中";
        assert_eq!(encode(text, &BOLD), text);
        assert_eq!(decode(text, &BOLD), text);
        assert_eq!(to_uppercase(text), text);
        assert_eq!(to_lowercase(text), text);
    }

    #[test]
    fn test_decode_only_touches_its_own_alphabet() {
        let monospace = encode("code", &MONOSPACE);
        assert_eq!(decode(&monospace, &BOLD), monospace);
    }

    #[test]
    fn test_case_folding_is_idempotent() {
        let text = "Hello World, ÄÖü 42";
        assert_eq!(to_uppercase(&to_uppercase(text)), to_uppercase(text));
        assert_eq!(to_lowercase(&to_lowercase(text)), to_lowercase(text));
        assert_eq!(to_uppercase(text), "HELLO WORLD, ÄÖü 42");
        assert_eq!(to_lowercase(text), "hello world, ÄÖü 42");
    }

    #[test]
    fn test_case_folding_leaves_styled_letters() {
        let bold = encode("Mixed", &BOLD);
        assert_eq!(to_uppercase(&bold), bold);
        assert_eq!(to_lowercase(&bold), bold);
    }

    #[test]
    fn test_apply_and_revert_dispatch() {
        let bold = StyleDefinition::bold();
        let upper = StyleDefinition::uppercase();
        let lower = StyleDefinition::lowercase();

        assert_eq!(revert(&apply("Hi there", &bold), &bold), "Hi there");
        assert_eq!(apply("Hi there", &upper), "HI THERE");
        assert_eq!(apply("Hi there", &lower), "hi there");
        // Case styles have no inverse.
        assert_eq!(revert("HI THERE", &upper), "HI THERE");
        assert_eq!(revert("hi there", &lower), "hi there");
    }
}
