use super::{Replacement, Rule};
use once_cell::sync::Lazy;
use regex::Captures;
use std::borrow::Cow;
use tracing::trace;

/// Punctuation that gets detached from neighbouring words.
const PUNCTUATION: &str = r##"!"#%'()*+,./:;<=>?@\[\\\]^_`{|}~"##;

// Order matters: links, e-mails, brackets and tags must be gone before the
// punctuation spacing rules run.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    substitution_rules! {
        ellipsis_glyph: "…" => "...",
        ellipsis: r"\.\.\." => "",
        brackets: r"\{.*\}" => "",
        en_dash: "–" => "-",
        html_tags: r"<(/|\\)?.+?>" => " ",
        digits: r"\d" => "0",
        urls: r"(http|https)://[^\s]+" => "",
        emails: r"[^\s]+@[^\s]+" => "EMAIL",
        opening_quotes: r"(^|\W)[‘’′`']" => "${1}\"",
        closing_quotes: r"[‘’`′'](\W|$)" => "\"${1}",
        other_quotes: r"[‘’`′“”]" => "\"",
        double_quotes: "\"" => "",
        dot_pairs: r"\.+" => Replacement::Computed(collapse_dot_pair),
        repeated_punctuation: r#"([,";:]){2},"# => "${1}",
        hyphens: r" -([^\W\d_])" => " - ${1}",
        trailing_punctuation: format!(r"(\w+)([{p}])([ {p}])", p = PUNCTUATION) => "${1} ${2} ${3}",
        leading_punctuation: format!(r"([ {p}])([{p}])(\w+)", p = PUNCTUATION) => "${1} ${2} ${3}",
        final_punctuation: format!(r"(\w+)([{p}])$", p = PUNCTUATION) => "${1} ${2}",
        doubled_double_quotes: "\"\"" => "\"",
        doubled_single_quotes: "''" => "'",
        spaces: " +" => " ",
        pic_links: r"pic.twitter.com\S+" => "",
    }
});

/// Exactly two dots become one; longer runs are left alone.
fn collapse_dot_pair(caps: &Captures) -> String {
    let run = &caps[0];
    if run.len() == 2 {
        ".".to_string()
    } else {
        run.to_string()
    }
}

/// Normalize a tweet for display: lowercase, drop links, e-mails, markup and
/// stray quotes, and put spaces around punctuation.
pub fn clean_text(text: &str) -> String {
    let mut text = text.to_lowercase();
    for rule in RULES.iter() {
        if let Cow::Owned(rewritten) = rule.apply(&text) {
            trace!(rule = rule.name(), "rewrote text");
            text = rewritten;
        }
    }
    text.trim().to_string()
}
