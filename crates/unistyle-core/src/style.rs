//! Style definitions: what a formatting button does to a fragment.
//!
//! Two kinds of transform exist. Offset styles shift ASCII letters into a
//! disjoint Unicode alphabet (the Mathematical Alphanumeric Symbols block) and
//! can be undone by range decoding. Case styles reuse the ASCII alphabet and
//! can only be re-applied.

use std::ops::RangeInclusive;

use smol_str::SmolStr;

const ASCII_UPPER_A: u32 = 'A' as u32;
const ASCII_UPPER_Z: u32 = 'Z' as u32;
const ASCII_LOWER_A: u32 = 'a' as u32;
const ASCII_LOWER_Z: u32 = 'z' as u32;

/// Stable identifier of the builtin bold style.
pub const BOLD_ID: &str = "bold";
/// Stable identifier of the builtin uppercase style.
pub const UPPERCASE_ID: &str = "uppercase";
/// Stable identifier of the builtin lowercase style.
pub const LOWERCASE_ID: &str = "lowercase";

/// Mathematical bold, `𝐀`..`𝐳` (U+1D400..U+1D433).
pub const BOLD: OffsetStyle = OffsetStyle::from_bases(0x1D400, 0x1D41A);
/// Mathematical bold italic, `𝑨`..`𝒛` (U+1D468..U+1D49B).
pub const BOLD_ITALIC: OffsetStyle = OffsetStyle::from_bases(0x1D468, 0x1D482);
/// Mathematical sans-serif bold, `𝗔`..`𝘇` (U+1D5D4..U+1D607).
pub const SANS_BOLD: OffsetStyle = OffsetStyle::from_bases(0x1D5D4, 0x1D5EE);
/// Mathematical monospace, `𝙰`..`𝚣` (U+1D670..U+1D6A3).
pub const MONOSPACE: OffsetStyle = OffsetStyle::from_bases(0x1D670, 0x1D68A);

/// A pair of code point offsets mapping `A-Z` and `a-z` onto a styled alphabet.
///
/// The styled alphabet is two runs of 26 code points: the uppercase sub-range
/// starting at `'A' + uppercase_offset` and the lowercase sub-range starting
/// at `'a' + lowercase_offset`. Only alphabets without reserved holes can be
/// expressed this way (bold works, plain italic does not because `ℎ` lives
/// outside the block).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetStyle {
    uppercase_offset: u32,
    lowercase_offset: u32,
}

impl OffsetStyle {
    /// Create from raw offsets. Call [`OffsetStyle::validate`] before trusting it.
    pub const fn new(uppercase_offset: u32, lowercase_offset: u32) -> Self {
        Self {
            uppercase_offset,
            lowercase_offset,
        }
    }

    /// Create from the code points of the styled `A` and styled `a`.
    pub const fn from_bases(styled_upper_a: u32, styled_lower_a: u32) -> Self {
        Self::new(
            styled_upper_a.saturating_sub(ASCII_UPPER_A),
            styled_lower_a.saturating_sub(ASCII_LOWER_A),
        )
    }

    pub fn uppercase_offset(&self) -> u32 {
        self.uppercase_offset
    }

    pub fn lowercase_offset(&self) -> u32 {
        self.lowercase_offset
    }

    /// Code points occupied by styled `A-Z`.
    pub fn uppercase_range(&self) -> RangeInclusive<u32> {
        ASCII_UPPER_A.saturating_add(self.uppercase_offset)
            ..=ASCII_UPPER_Z.saturating_add(self.uppercase_offset)
    }

    /// Code points occupied by styled `a-z`.
    pub fn lowercase_range(&self) -> RangeInclusive<u32> {
        ASCII_LOWER_A.saturating_add(self.lowercase_offset)
            ..=ASCII_LOWER_Z.saturating_add(self.lowercase_offset)
    }

    /// Whether `c` belongs to the styled alphabet (either sub-range).
    pub fn contains(&self, c: char) -> bool {
        let code = c as u32;
        self.uppercase_range().contains(&code) || self.lowercase_range().contains(&code)
    }

    /// Map one ASCII letter into the styled alphabet; anything else is returned as is.
    pub fn encode_char(&self, c: char) -> char {
        let offset = match c {
            'A'..='Z' => self.uppercase_offset,
            'a'..='z' => self.lowercase_offset,
            _ => return c,
        };
        (c as u32)
            .checked_add(offset)
            .and_then(char::from_u32)
            .unwrap_or(c)
    }

    /// Map one styled letter back to ASCII; anything else is returned as is.
    pub fn decode_char(&self, c: char) -> char {
        let code = c as u32;
        let plain = if self.uppercase_range().contains(&code) {
            code - self.uppercase_offset
        } else if self.lowercase_range().contains(&code) {
            code - self.lowercase_offset
        } else {
            return c;
        };
        char::from_u32(plain).unwrap_or(c)
    }

    /// Check that the mapping is a bijection onto valid, non-ASCII scalar values.
    pub fn validate(&self) -> Result<(), &'static str> {
        let upper = checked_run(ASCII_UPPER_A, self.uppercase_offset)
            .ok_or("uppercase run leaves the Unicode scalar range")?;
        let lower = checked_run(ASCII_LOWER_A, self.lowercase_offset)
            .ok_or("lowercase run leaves the Unicode scalar range")?;

        if *upper.start() < 0x80 || *lower.start() < 0x80 {
            return Err("styled alphabet overlaps ASCII");
        }
        if upper.start() <= lower.end() && lower.start() <= upper.end() {
            return Err("uppercase and lowercase runs overlap");
        }
        Ok(())
    }
}

/// The 26-code-point run starting at `base + offset`, if every point is a valid `char`.
fn checked_run(base: u32, offset: u32) -> Option<RangeInclusive<u32>> {
    let start = base.checked_add(offset)?;
    let end = start.checked_add(25)?;
    // Surrogates are the only gap below the scalar maximum.
    let crosses_surrogates = start <= 0xDFFF && end >= 0xD800;
    (char::from_u32(end).is_some() && !crosses_surrogates).then_some(start..=end)
}

/// ASCII case folding direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    Upper,
    Lower,
}

/// What a style does to a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTransform {
    /// Shift letters into a disjoint alphabet.
    Offset(OffsetStyle),
    /// Fold ASCII case in place.
    Case(CaseStyle),
}

/// How a style is undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reversibility {
    /// Styled letters are recognised by code point range and mapped back.
    RangeDecode,
    /// The original case is lost; "undo" means applying the same idempotent
    /// operation again, so revert leaves the text untouched.
    Reapply,
}

/// A named style as exposed to the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefinition {
    pub id: SmolStr,
    /// Tooltip text.
    pub title: SmolStr,
    /// Button face.
    pub icon: SmolStr,
    pub transform: StyleTransform,
}

impl StyleDefinition {
    pub fn offset(
        id: impl Into<SmolStr>,
        title: impl Into<SmolStr>,
        icon: impl Into<SmolStr>,
        style: OffsetStyle,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            transform: StyleTransform::Offset(style),
        }
    }

    pub fn case(
        id: impl Into<SmolStr>,
        title: impl Into<SmolStr>,
        icon: impl Into<SmolStr>,
        case: CaseStyle,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            transform: StyleTransform::Case(case),
        }
    }

    pub fn bold() -> Self {
        Self::offset(BOLD_ID, "Bold", "𝐁", BOLD)
    }

    pub fn uppercase() -> Self {
        Self::case(UPPERCASE_ID, "Uppercase", "aA", CaseStyle::Upper)
    }

    pub fn lowercase() -> Self {
        Self::case(LOWERCASE_ID, "Lowercase", "Aa", CaseStyle::Lower)
    }

    pub fn reversibility(&self) -> Reversibility {
        match self.transform {
            StyleTransform::Offset(_) => Reversibility::RangeDecode,
            StyleTransform::Case(_) => Reversibility::Reapply,
        }
    }

    /// The offset mapping, for styles that have one.
    pub fn offset_style(&self) -> Option<&OffsetStyle> {
        match &self.transform {
            StyleTransform::Offset(style) => Some(style),
            StyleTransform::Case(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_ranges() {
        assert_eq!(BOLD.uppercase_range(), 0x1D400..=0x1D419);
        assert_eq!(BOLD.lowercase_range(), 0x1D41A..=0x1D433);
        assert_eq!(BOLD.uppercase_offset(), 0x1D400 - 0x41);
        assert_eq!(BOLD.lowercase_offset(), 0x1D41A - 0x61);
    }

    #[test]
    fn test_builtin_alphabets_are_valid() {
        for style in [BOLD, BOLD_ITALIC, SANS_BOLD, MONOSPACE] {
            assert_eq!(style.validate(), Ok(()), "{style:?}");
        }
    }

    #[test]
    fn test_validate_rejects_ascii_overlap() {
        assert!(OffsetStyle::new(0, 0).validate().is_err());
        // Uppercase shifted onto lowercase ASCII.
        assert!(OffsetStyle::new(32, 0x1D400).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overlapping_runs() {
        // Both runs land on the same 26 code points.
        let style = OffsetStyle::from_bases(0x1D400, 0x1D400);
        assert_eq!(
            style.validate(),
            Err("uppercase and lowercase runs overlap")
        );
    }

    #[test]
    fn test_validate_rejects_surrogates_and_overflow() {
        assert!(OffsetStyle::from_bases(0xD7F0, 0x1D41A).validate().is_err());
        assert!(OffsetStyle::from_bases(0x1D400, 0x10FFF0).validate().is_err());
        assert!(OffsetStyle::new(u32::MAX, 0x1D41A).validate().is_err());
    }

    #[test]
    fn test_char_mapping() {
        assert_eq!(BOLD.encode_char('A'), '\u{1D400}');
        assert_eq!(BOLD.encode_char('z'), '\u{1D433}');
        assert_eq!(BOLD.encode_char('7'), '7');
        assert_eq!(BOLD.decode_char('\u{1D419}'), 'Z');
        assert_eq!(BOLD.decode_char('\u{1D41A}'), 'a');
        assert_eq!(BOLD.decode_char('\u{1D434}'), '\u{1D434}');
    }

    #[test]
    fn test_contains_boundaries() {
        assert!(BOLD.contains('\u{1D400}'));
        assert!(BOLD.contains('\u{1D433}'));
        assert!(!BOLD.contains('\u{1D3FF}'));
        assert!(!BOLD.contains('\u{1D434}'));
        assert!(!BOLD.contains('A'));
    }

    #[test]
    fn test_reversibility() {
        assert_eq!(StyleDefinition::bold().reversibility(), Reversibility::RangeDecode);
        assert_eq!(StyleDefinition::uppercase().reversibility(), Reversibility::Reapply);
        assert_eq!(StyleDefinition::lowercase().reversibility(), Reversibility::Reapply);
        assert!(StyleDefinition::lowercase().offset_style().is_none());
        assert_eq!(StyleDefinition::bold().offset_style(), Some(&BOLD));
    }
}
