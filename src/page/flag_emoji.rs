//! Conversion of lichess flag codes to emoji.
//!
//! Two letter codes are ISO 3166-1 regions and become a pair of regional indicator symbols.
//! Codes with a dash are ISO 3166-2 subregions and become an emoji tag sequence.

// Regional indicator symbol letter A
const REGION_LETTER_OFFSET: u32 = 0x1F1E6 - 'A' as u32;
// Tag latin small letter a
const TAG_LETTER_OFFSET: u32 = 0xE0061 - 'A' as u32;
// Tag digit zero
const TAG_DIGIT_OFFSET: u32 = 0xE0030 - '0' as u32;

const BLACK_FLAG: char = '\u{1F3F4}';
const CANCEL_TAG: char = '\u{E007F}';

const EARTH_FLAG: &str = "_earth";
// There is no emoji for the earth flag lichess uses
const WORLD_MAP: &str = "\u{1F5FA}\u{FE0F}";

/// Lichess codes which differ from the standard ones
fn override_for(flag: &str) -> Option<&'static str> {
    match flag {
        "_kurdistan" => Some("IR-16"),
        "_adygea" => Some("RU-AD"),
        "RU-TAT" => Some("RU-TA"),
        "ES-EU" => Some("ES-PV"),
        "_united-nations" => Some("UN"),
        _ => None
    }
}

/// Lichess flags without an emoji
fn is_unmapped(flag: &str) -> bool {
    matches!(flag, "AM-RA" | "_belarus-wrw" | "_east-turkestan" | "_russia-wbw")
}

fn region_indicator(c: char) -> Option<char> {
    if !c.is_ascii_alphabetic() {
        return None;
    }

    char::from_u32(c.to_ascii_uppercase() as u32 + REGION_LETTER_OFFSET)
}

fn tag_character(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        char::from_u32(c as u32 + TAG_DIGIT_OFFSET)
    } else if c.is_ascii_alphabetic() {
        char::from_u32(c.to_ascii_uppercase() as u32 + TAG_LETTER_OFFSET)
    } else {
        None
    }
}

/// The emoji for a lichess flag code, or an empty string if there is none.
pub fn from_string(flag: &str) -> String {
    if is_unmapped(flag) {
        return String::new();
    }

    if let Some(standard) = override_for(flag) {
        return from_string(standard);
    }

    if flag.chars().count() == 2 {
        return flag.chars().filter_map(region_indicator).collect();
    }

    if flag.contains('-') {
        let tags: String = flag.chars().filter_map(tag_character).collect();
        return format!("{BLACK_FLAG}{tags}{CANCEL_TAG}");
    }

    if flag == EARTH_FLAG {
        return WORLD_MAP.to_string();
    }

    String::new()
}
