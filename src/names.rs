use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::dumper::codepoint_representation;

/// Names for the control characters the standard database leaves unnamed:
/// the C0 block, DEL, and the C1 block. C1 codepoints without a Unicode
/// alias (0x80, 0x81, 0x99) are absent.
static CONTROL_NAMES: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ('\u{0000}', "NULL"),
        ('\u{0001}', "START OF HEADING"),
        ('\u{0002}', "START OF TEXT"),
        ('\u{0003}', "END OF TEXT"),
        ('\u{0004}', "END OF TRANSMISSION"),
        ('\u{0005}', "ENQUIRY"),
        ('\u{0006}', "ACKNOWLEDGE"),
        ('\u{0007}', "BELL"),
        ('\u{0008}', "BACKSPACE"),
        ('\u{0009}', "CHARACTER TABULATION"),
        ('\u{000A}', "LINE FEED (LF)"),
        ('\u{000B}', "LINE TABULATION (VT)"),
        ('\u{000C}', "FORM FEED (FF)"),
        ('\u{000D}', "CARRIAGE RETURN (CR)"),
        ('\u{000E}', "SHIFT OUT"),
        ('\u{000F}', "SHIFT IN"),
        ('\u{0010}', "DATA LINK ESCAPE"),
        ('\u{0011}', "DEVICE CONTROL ONE"),
        ('\u{0012}', "DEVICE CONTROL TWO"),
        ('\u{0013}', "DEVICE CONTROL THREE"),
        ('\u{0014}', "DEVICE CONTROL FOUR"),
        ('\u{0015}', "NEGATIVE ACKNOWLEDGE"),
        ('\u{0016}', "SYNCHRONOUS IDLE"),
        ('\u{0017}', "END OF TRANSMISSION BLOCK"),
        ('\u{0018}', "CANCEL"),
        ('\u{0019}', "END OF MEDIUM"),
        ('\u{001A}', "SUBSTITUTE"),
        ('\u{001B}', "ESCAPE"),
        ('\u{001C}', "INFORMATION SEPARATOR FOUR (FS)"),
        ('\u{001D}', "INFORMATION SEPARATOR THREE (GS)"),
        ('\u{001E}', "INFORMATION SEPARATOR TWO (RS)"),
        ('\u{001F}', "INFORMATION SEPARATOR ONE (US)"),
        ('\u{007F}', "DELETE"),
        ('\u{0082}', "BREAK PERMITTED HERE"),
        ('\u{0083}', "NO BREAK HERE"),
        ('\u{0084}', "INDEX"),
        ('\u{0085}', "NEXT LINE (NEL)"),
        ('\u{0086}', "START OF SELECTED AREA"),
        ('\u{0087}', "END OF SELECTED AREA"),
        ('\u{0088}', "CHARACTER TABULATION SET"),
        ('\u{0089}', "CHARACTER TABULATION WITH JUSTIFICATION"),
        ('\u{008A}', "LINE TABULATION SET"),
        ('\u{008B}', "PARTIAL LINE FORWARD"),
        ('\u{008C}', "PARTIAL LINE BACKWARD"),
        ('\u{008D}', "REVERSE LINE FEED"),
        ('\u{008E}', "SINGLE SHIFT TWO"),
        ('\u{008F}', "SINGLE SHIFT THREE"),
        ('\u{0090}', "DEVICE CONTROL STRING"),
        ('\u{0091}', "PRIVATE USE ONE"),
        ('\u{0092}', "PRIVATE USE TWO"),
        ('\u{0093}', "SET TRANSMIT STATE"),
        ('\u{0094}', "CANCEL CHARACTER"),
        ('\u{0095}', "MESSAGE WAITING"),
        ('\u{0096}', "START OF GUARDED AREA"),
        ('\u{0097}', "END OF GUARDED AREA"),
        ('\u{0098}', "START OF STRING"),
        ('\u{009A}', "SINGLE CHARACTER INTRODUCER"),
        ('\u{009B}', "CONTROL SEQUENCE INTRODUCER"),
        ('\u{009C}', "STRING TERMINATOR"),
        ('\u{009D}', "OPERATING SYSTEM COMMAND"),
        ('\u{009E}', "PRIVACY MESSAGE"),
        ('\u{009F}', "APPLICATION PROGRAM COMMAND"),
    ])
});

/// Resolves the Unicode name of a character: the name database first, then
/// the control-name table, then a synthesized
/// `unnamed unicode character U+XXXX` fallback. Every character gets some
/// name; there is no error case.
pub fn unicode_name(character: char) -> String {
    if let Some(name) = unicode_names2::name(character) {
        return name.to_string();
    }
    if let Some(name) = CONTROL_NAMES.get(&character) {
        return (*name).to_string();
    }
    return format!(
        "unnamed unicode character {}",
        codepoint_representation(character as u32),
    )
}
