//! Recovers realized roll values from rendered modifier text.
//!
//! The tag text describes the *bounds* a roll could take; the rendered
//! content is the roll the player can act on. Given the dataset template for
//! a stat id, this module compiles a one-shot matching pattern — placeholder
//! count and polarity vary per stat, so there is no fixed pattern set to
//! pre-compile — and pulls the embedded numbers out of the content.
//!
//! Compilation and matching are separate steps so each can be tested on its
//! own: [`CompiledTemplate::compile`] performs annotation stripping,
//! inversion detection, and placeholder substitution;
//! [`CompiledTemplate::extract`] matches and signs the results.

use std::sync::LazyLock;

use regex::Regex;

/// The reserved placeholder marker in dataset templates.
const PLACEHOLDER: char = '#';

/// Capture accepting an optionally signed decimal number.
const NUMBER_CAPTURE: &str = r"([+-]?\d+(?:\.\d+)?)";

/// Polarity word pairs subject to directional inversion. The site renders
/// Chinese text; the English pair covers the international dataset wording.
const POLARITY_PAIRS: &[(&str, &str)] = &[("提高", "降低"), ("increased", "decreased")];

/// Parenthetical annotations in templates, half- or full-width. These are
/// presentational and never appear verbatim in rendered content.
static PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)|（[^）]*）").expect("paren pattern"));

/// A template compiled against one piece of rendered content.
pub struct CompiledTemplate {
    regex: Regex,
    negate: bool,
}

impl CompiledTemplate {
    /// Compile a dataset template into a matching pattern for `content`.
    ///
    /// Returns `None` when either input is empty. The content itself is not
    /// matched here; it is consulted only to detect a directional inversion —
    /// a stat whose template says "increased" but whose roll rendered as
    /// "decreased" (or vice versa) carries an implicit sign flip, so the
    /// polarity word is swapped in the working template and every extracted
    /// number will be negated.
    pub fn compile(template: &str, content: &str) -> Option<Self> {
        if template.trim().is_empty() || content.is_empty() {
            return None;
        }

        let mut working = PAREN_RE.replace_all(template, "").into_owned();

        let mut negate = false;
        for &(a, b) in POLARITY_PAIRS {
            if working.contains(a) && !content.contains(a) && content.contains(b) {
                working = working.replace(a, b);
                negate = true;
                break;
            }
            if working.contains(b) && !content.contains(b) && content.contains(a) {
                working = working.replace(b, a);
                negate = true;
                break;
            }
        }

        // A literal `+` right before a placeholder is informational: the
        // rendered value may still be negative. Collapse the pair so the
        // optional-sign capture handles both.
        let working = working.replace("+#", "#");

        let pattern = build_pattern(&working);
        let regex = Regex::new(&pattern).ok()?;

        Some(Self { regex, negate })
    }

    /// Match the compiled pattern against the rendered content and return the
    /// extracted values in order, negated when an inversion was detected.
    ///
    /// No match, or a match with no usable captures, returns `None` — never
    /// an empty list.
    pub fn extract(&self, content: &str) -> Option<Vec<f64>> {
        let caps = self.regex.captures(content.trim())?;
        let values: Vec<f64> = caps
            .iter()
            .skip(1)
            .flatten()
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .map(|v| if self.negate { -v } else { v })
            .collect();

        if values.is_empty() {
            return None;
        }
        Some(values)
    }

    /// The compiled pattern source, exposed for tests.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// True when extracted values will be sign-flipped.
    pub fn negates(&self) -> bool {
        self.negate
    }
}

/// Escape the working template into an anchored pattern: placeholders become
/// signed-number captures, whitespace runs become flexible whitespace (the
/// site renders non-breaking spaces), everything else matches literally.
fn build_pattern(working: &str) -> String {
    let mut pattern = String::with_capacity(working.len() * 2 + 2);
    pattern.push('^');

    let mut chars = working.trim().chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == PLACEHOLDER {
            pattern.push_str(NUMBER_CAPTURE);
        } else if ch.is_whitespace() {
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
            pattern.push_str(r"\s+");
        } else {
            let mut buf = [0u8; 4];
            pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
        }
    }

    pattern.push('$');
    pattern
}

/// Convenience wrapper: compile and extract in one call.
pub fn extract_values(template: &str, content: &str) -> Option<Vec<f64>> {
    CompiledTemplate::compile(template, content)?.extract(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_placeholder() {
        assert_eq!(
            extract_values("提高 # 点伤害", "提高 15 点伤害"),
            Some(vec![15.0])
        );
    }

    #[test]
    fn inversion_negates() {
        assert_eq!(extract_values("提高 #%", "降低 10%"), Some(vec![-10.0]));
    }

    #[test]
    fn inversion_other_direction() {
        assert_eq!(extract_values("降低 #%", "提高 10%"), Some(vec![-10.0]));
    }

    #[test]
    fn no_inversion_stays_positive() {
        assert_eq!(extract_values("提高 #%", "提高 10%"), Some(vec![10.0]));
    }

    #[test]
    fn literal_plus_placeholder_matches_negative() {
        assert_eq!(extract_values("+# 生命", "-5 生命"), Some(vec![-5.0]));
        assert_eq!(extract_values("+# 生命", "+25 生命"), Some(vec![25.0]));
    }

    #[test]
    fn multiple_placeholders() {
        assert_eq!(
            extract_values("增加 # 至 # 火焰伤害", "增加 3 至 7 火焰伤害"),
            Some(vec![3.0, 7.0])
        );
    }

    #[test]
    fn decimal_values() {
        assert_eq!(extract_values("每秒 #", "每秒 1.5"), Some(vec![1.5]));
    }

    #[test]
    fn annotation_stripped_before_matching() {
        assert_eq!(
            extract_values("提高 #%（最大）", "提高 12%"),
            Some(vec![12.0])
        );
        assert_eq!(extract_values("提高 #% (max)", "提高 12%"), Some(vec![12.0]));
    }

    #[test]
    fn flexible_whitespace() {
        // Rendered text may use non-breaking spaces.
        assert_eq!(
            extract_values("提高 # 点伤害", "提高\u{a0}15\u{a0}点伤害"),
            Some(vec![15.0])
        );
    }

    #[test]
    fn no_match_is_none() {
        assert_eq!(extract_values("提高 #%", "完全不同的文本"), None);
    }

    #[test]
    fn empty_inputs_are_none() {
        assert_eq!(extract_values("", "提高 15%"), None);
        assert_eq!(extract_values("提高 #%", ""), None);
        assert_eq!(extract_values("", ""), None);
    }

    #[test]
    fn template_without_placeholder_yields_no_values() {
        assert_eq!(extract_values("固定文本", "固定文本"), None);
    }

    #[test]
    fn compile_exposes_pattern_and_negation() {
        let compiled = CompiledTemplate::compile("提高 #%", "降低 10%").unwrap();
        assert!(compiled.negates());
        assert!(compiled.pattern().contains(NUMBER_CAPTURE));
        assert!(compiled.pattern().starts_with('^'));
        assert!(compiled.pattern().ends_with('$'));

        let plain = CompiledTemplate::compile("提高 #%", "提高 10%").unwrap();
        assert!(!plain.negates());
    }
}
