use std::collections::HashMap;

use once_cell::sync::Lazy;
use unicode_properties::GeneralCategoryGroup;
use unicode_properties::UnicodeGeneralCategory;

use crate::names;

pub const CARRIAGE_RETURN: char = '\r';
pub const HORIZONTAL_TAB: char = '\t';
pub const LINE_FEED: char = '\n';

/// The escape map used by `TextDumper::new`: carriage return, horizontal tab
/// and line feed map to their two-character backslash escapes.
pub static DEFAULT_ESCAPES: Lazy<HashMap<char, String>> = Lazy::new(|| {
    HashMap::from([
        (CARRIAGE_RETURN, String::from(r"\r")),
        (HORIZONTAL_TAB, String::from(r"\t")),
        (LINE_FEED, String::from(r"\n")),
    ])
});

/// The classification of one character: its display representation, its
/// codepoint, and its Unicode name (or a fallback name, see `crate::names`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpRecord {
    pub representation: String,
    pub codepoint: u32,
    pub name: String,
}

/// Classifies Unicode text, character by character.
#[derive(Debug, Clone)]
pub struct TextDumper {
    escapes: HashMap<char, String>,
}

impl TextDumper {
    /// A dumper configured with `DEFAULT_ESCAPES`.
    pub fn new() -> Self {
        return Self{escapes: DEFAULT_ESCAPES.clone()}
    }

    /// A dumper configured with a caller-supplied escape map instead of
    /// `DEFAULT_ESCAPES`. Keys are single characters, values the strings to
    /// display for them.
    pub fn with_escapes(escapes: HashMap<char, String>) -> Self {
        return Self{escapes}
    }

    /// Returns the display representation of a single character.
    ///
    /// Printable characters come back unchanged. Marks, separators and
    /// "other" (control/format/unassigned) characters do not render legibly
    /// on their own, so they come back as the configured escape, a control
    /// picture from the U+2400 block, or the `U+XXXX` codepoint form, in
    /// that priority order.
    pub fn representation(&self, character: char) -> String {
        let group = character.general_category_group();
        let non_visible = matches!(
            group,
            GeneralCategoryGroup::Mark
                | GeneralCategoryGroup::Separator
                | GeneralCategoryGroup::Other
        );
        if non_visible {
            if let Some(escape) = self.escapes.get(&character) {
                return escape.clone();
            }
            let codepoint = character as u32;
            if codepoint <= 0x20 {
                // C0 controls, and space as well: the range test catches
                // 0x20 on purpose, so space shows up as its U+2420 picture
                // instead of a blank column.
                return control_picture(0x2400 + codepoint);
            }
            if codepoint == 0x7f {
                // DEL
                return control_picture(0x2421);
            }
            return codepoint_representation(codepoint);
        }
        return character.to_string()
    }

    /// Lazily yields one `DumpRecord` per character of `text`, in input
    /// order. Nothing is computed ahead of the consumer's demand; stopping
    /// early is fine.
    pub fn dump<'a>(&'a self, text: &'a str) -> impl Iterator<Item = DumpRecord> + 'a {
        return text.chars().map(move |character| DumpRecord{
            representation: self.representation(character),
            codepoint: character as u32,
            name: names::unicode_name(character),
        })
    }
}

impl Default for TextDumper {
    fn default() -> Self {
        return Self::new()
    }
}

/// Returns the `U+` form of a codepoint: exactly four uppercase hex digits
/// inside the BMP, minimal digits with no padding above it. The asymmetry
/// is intentional.
pub fn codepoint_representation(codepoint: u32) -> String {
    if codepoint > 0xffff {
        return format!("U+{:X}", codepoint);
    }
    return format!("U+{:04X}", codepoint)
}

fn control_picture(codepoint: u32) -> String {
    // only called with values inside the U+2400 block; never fails
    return char::from_u32(codepoint).unwrap().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c0_controls_and_space_map_to_control_pictures() {
        let dumper = TextDumper::new();
        for codepoint in 0x00..=0x20u32 {
            let character = char::from_u32(codepoint).unwrap();
            if DEFAULT_ESCAPES.contains_key(&character) {
                continue;
            }
            let picture = char::from_u32(0x2400 + codepoint).unwrap();
            assert_eq!(dumper.representation(character), picture.to_string());
        }
    }

    #[test]
    fn space_is_not_rendered_literally() {
        let dumper = TextDumper::new();
        assert_eq!(dumper.representation(' '), "\u{2420}");
    }

    #[test]
    fn del_maps_to_its_control_picture() {
        let dumper = TextDumper::new();
        assert_eq!(dumper.representation('\u{7f}'), "\u{2421}");
    }

    #[test]
    fn default_escapes_take_priority() {
        let dumper = TextDumper::new();
        assert_eq!(dumper.representation('\r'), r"\r");
        assert_eq!(dumper.representation('\t'), r"\t");
        assert_eq!(dumper.representation('\n'), r"\n");
    }

    #[test]
    fn custom_escapes_override_every_other_rule() {
        let escapes = HashMap::from([
            ('\u{0}', String::from(r"\0")),
            ('\u{85}', String::from(r"\N")),
        ]);
        let dumper = TextDumper::with_escapes(escapes);
        // NUL would otherwise get its control picture, NEL the U+0085 form.
        assert_eq!(dumper.representation('\u{0}'), r"\0");
        assert_eq!(dumper.representation('\u{85}'), r"\N");
        // the default escapes are gone, so tab falls through to its picture
        assert_eq!(dumper.representation('\t'), "\u{2409}");
    }

    #[test]
    fn c1_controls_and_marks_use_the_codepoint_form() {
        let dumper = TextDumper::new();
        assert_eq!(dumper.representation('\u{9b}'), "U+009B");
        // combining acute accent, a mark
        assert_eq!(dumper.representation('\u{301}'), "U+0301");
        // line separator, category Zl
        assert_eq!(dumper.representation('\u{2028}'), "U+2028");
    }

    #[test]
    fn printable_characters_pass_through() {
        let dumper = TextDumper::new();
        assert_eq!(dumper.representation('A'), "A");
        assert_eq!(dumper.representation('é'), "é");
        assert_eq!(dumper.representation('?'), "?");
        assert_eq!(dumper.representation('\u{1f600}'), "\u{1f600}");
    }

    #[test]
    fn codepoint_representation_pads_inside_the_bmp_only() {
        assert_eq!(codepoint_representation(0x41), "U+0041");
        assert_eq!(codepoint_representation(0x9), "U+0009");
        assert_eq!(codepoint_representation(0xffff), "U+FFFF");
        assert_eq!(codepoint_representation(0x10000), "U+10000");
        assert_eq!(codepoint_representation(0x1f600), "U+1F600");
    }

    #[test]
    fn dump_yields_one_record_per_character_in_order() {
        let dumper = TextDumper::new();
        let records: Vec<DumpRecord> = dumper.dump("A\tB").collect();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], DumpRecord{
            representation: String::from("A"),
            codepoint: 65,
            name: String::from("LATIN CAPITAL LETTER A"),
        });
        assert_eq!(records[1], DumpRecord{
            representation: String::from(r"\t"),
            codepoint: 9,
            name: String::from("CHARACTER TABULATION"),
        });
        assert_eq!(records[2], DumpRecord{
            representation: String::from("B"),
            codepoint: 66,
            name: String::from("LATIN CAPITAL LETTER B"),
        });
    }

    #[test]
    fn dump_of_nul_uses_picture_and_control_name() {
        let dumper = TextDumper::new();
        let records: Vec<DumpRecord> = dumper.dump("\u{0}").collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].representation, "\u{2400}");
        assert_eq!(records[0].codepoint, 0);
        assert_eq!(records[0].name, "NULL");
    }

    #[test]
    fn dump_of_empty_text_is_empty() {
        let dumper = TextDumper::new();
        assert_eq!(dumper.dump("").count(), 0);
    }

    #[test]
    fn dump_outside_the_bmp() {
        let dumper = TextDumper::new();
        let records: Vec<DumpRecord> = dumper.dump("\u{1f600}").collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].representation, "\u{1f600}");
        assert_eq!(records[0].codepoint, 0x1f600);
        assert_eq!(records[0].name, "GRINNING FACE");
    }

    #[test]
    fn dump_can_be_consumed_partially() {
        let dumper = TextDumper::new();
        let mut records = dumper.dump("abcdef");
        assert_eq!(records.next().unwrap().representation, "a");
        assert_eq!(records.next().unwrap().representation, "b");
        // dropping the rest is legal
    }
}
