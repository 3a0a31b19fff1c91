//! Parser for granted-skill lines.
//!
//! The site renders a granted skill as `等级 N <name>`; the level keyword and
//! number are peeled off and the remainder is the skill name.

use std::sync::LazyLock;

use regex::Regex;

use poe2_companion_core::ItemSkill;

static LEVEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"等级\s*(\d+)").expect("level pattern"));

/// Parse one rendered skill line into an [`ItemSkill`].
///
/// A line without a level keyword yields `level: None` with the whole text as
/// the name.
pub fn parse_skill(
    skill_type: Option<String>,
    image_url: Option<String>,
    text: &str,
) -> ItemSkill {
    let (level, name) = match LEVEL_RE.captures(text) {
        Some(caps) => {
            let level = caps[1].parse::<u32>().ok();
            let name = text.replacen(&caps[0], "", 1).trim().to_string();
            (level, name)
        }
        None => (None, text.trim().to_string()),
    };

    ItemSkill {
        skill_type,
        image_url,
        level,
        name,
    }
}
