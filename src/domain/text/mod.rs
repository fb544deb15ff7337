//! Text handling shared by the reports and the word cloud.

mod hashtags;
mod normalizer;
mod stopwords;

pub use hashtags::*;
pub use normalizer::*;
pub use stopwords::*;

use regex::{Captures, Regex};
use std::borrow::Cow;

/// Right-hand side of a substitution rule.
pub enum Replacement {
    /// A replacement template, `${1}` style group references allowed.
    Template(&'static str),
    /// Replacement computed from the match.
    Computed(fn(&Captures) -> String),
}

impl From<&'static str> for Replacement {
    fn from(template: &'static str) -> Self {
        Replacement::Template(template)
    }
}

/// One `pattern => replacement` step of a substitution chain.
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    /// Panics if `pattern` is not a valid regex; rules are built from literals.
    pub fn new(name: &'static str, pattern: impl AsRef<str>, replacement: Replacement) -> Self {
        let pattern = Regex::new(pattern.as_ref())
            .unwrap_or_else(|err| panic!("invalid pattern for rule `{}`: {}", name, err));
        Rule {
            name,
            pattern,
            replacement,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(text, template),
            Replacement::Computed(f) => self.pattern.replace_all(text, |caps: &Captures| f(caps)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(caps: &Captures) -> String {
        caps[0].to_uppercase()
    }

    #[test]
    fn it_should_apply_rules_in_order() {
        let rules: Vec<Rule> = substitution_rules! {
            vowels: "[aeiou]" => "_",
            underscores: "_+" => "-",
        };
        let mut text = "queue".to_string();
        for rule in &rules {
            text = rule.apply(&text).into_owned();
        }
        assert_eq!(text, "q-");
        assert_eq!(rules[0].name(), "vowels");
    }

    #[test]
    fn it_should_expand_templates_and_computed_replacements() {
        let swap = Rule::new("swap", r"(\w+)-(\w+)", Replacement::from("${2}-${1}"));
        assert_eq!(swap.apply("a-b c-d"), "b-a d-c");

        let loud = Rule::new("loud", r"\bola\b", Replacement::Computed(shout));
        assert_eq!(loud.apply("ola mundo"), "OLA mundo");
    }
}
