//! Emoji picker catalog and decoding of "unified" code identifiers.
//!
//! A unified identifier is a hyphen-joined list of hexadecimal code points,
//! e.g. `1f600` or `1f468-200d-1f469-200d-1f467`.

use crate::{PanelError, Result};

/// One selectable emoji in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiEntry {
    pub name: &'static str,
    pub unified: &'static str,
}

impl EmojiEntry {
    /// Rendered glyph for this entry.
    pub fn glyph(&self) -> Result<String> {
        decode_unified(self.unified)
    }
}

/// Built-in picker contents, in display order.
pub const CATALOG: &[EmojiEntry] = &[
    EmojiEntry { name: "grinning", unified: "1f600" },
    EmojiEntry { name: "joy", unified: "1f602" },
    EmojiEntry { name: "wink", unified: "1f609" },
    EmojiEntry { name: "heart_eyes", unified: "1f60d" },
    EmojiEntry { name: "thinking", unified: "1f914" },
    EmojiEntry { name: "sunglasses", unified: "1f60e" },
    EmojiEntry { name: "cry", unified: "1f622" },
    EmojiEntry { name: "scream", unified: "1f631" },
    EmojiEntry { name: "thumbs_up", unified: "1f44d" },
    EmojiEntry { name: "clap", unified: "1f44f" },
    EmojiEntry { name: "wave", unified: "1f44b" },
    EmojiEntry { name: "pray", unified: "1f64f" },
    EmojiEntry { name: "heart", unified: "2764-fe0f" },
    EmojiEntry { name: "fire", unified: "1f525" },
    EmojiEntry { name: "star", unified: "2b50" },
    EmojiEntry { name: "tada", unified: "1f389" },
    EmojiEntry { name: "rocket", unified: "1f680" },
    EmojiEntry { name: "coffee", unified: "2615" },
    EmojiEntry { name: "check", unified: "2705" },
    EmojiEntry { name: "hundred", unified: "1f4af" },
    EmojiEntry { name: "waving_light_skin", unified: "1f44b-1f3fb" },
    EmojiEntry { name: "family", unified: "1f468-200d-1f469-200d-1f467" },
    EmojiEntry { name: "flag_se", unified: "1f1f8-1f1ea" },
    EmojiEntry { name: "keycap_one", unified: "31-fe0f-20e3" },
];

/// Decodes a unified identifier into the characters it names.
pub fn decode_unified(code: &str) -> Result<String> {
    if code.is_empty() {
        return Err(PanelError::EmptyEmojiCode);
    }

    code.split('-')
        .map(|segment| {
            let invalid = || PanelError::InvalidEmojiSegment {
                segment: segment.to_owned(),
            };
            // from_str_radix alone would also take a leading `+`.
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let value = u32::from_str_radix(segment, 16).map_err(|_| invalid())?;
            char::from_u32(value).ok_or(PanelError::NotAScalarValue(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_code_point() {
        assert_eq!(decode_unified("1f600").unwrap(), "\u{1F600}");
        assert_eq!(decode_unified("1F600").unwrap(), "😀");
    }

    #[test]
    fn decodes_sequences() {
        assert_eq!(decode_unified("2764-fe0f").unwrap(), "\u{2764}\u{FE0F}");
        assert_eq!(
            decode_unified("1f468-200d-1f469-200d-1f467").unwrap().chars().count(),
            5
        );
    }

    #[test]
    fn rejects_malformed_codes() {
        assert_eq!(decode_unified(""), Err(PanelError::EmptyEmojiCode));
        assert_eq!(
            decode_unified("1f600-"),
            Err(PanelError::InvalidEmojiSegment {
                segment: String::new()
            })
        );
        assert_eq!(
            decode_unified("zz"),
            Err(PanelError::InvalidEmojiSegment {
                segment: "zz".into()
            })
        );
        assert_eq!(decode_unified("d800"), Err(PanelError::NotAScalarValue(0xD800)));
        assert_eq!(
            decode_unified("110000"),
            Err(PanelError::NotAScalarValue(0x11_0000))
        );
    }

    #[test]
    fn rejects_signs_and_padding() {
        assert_eq!(
            decode_unified("+1f600"),
            Err(PanelError::InvalidEmojiSegment {
                segment: "+1f600".into()
            })
        );
        assert_eq!(
            decode_unified(" 1f600 "),
            Err(PanelError::InvalidEmojiSegment {
                segment: " 1f600 ".into()
            })
        );
        assert!(decode_unified("1f600-+fe0f").is_err());
    }

    #[test]
    fn catalog_entries_all_decode() {
        for entry in CATALOG {
            let glyph = entry.glyph().unwrap();
            assert!(!glyph.is_empty(), "{} decoded to nothing", entry.name);
        }
    }
}
