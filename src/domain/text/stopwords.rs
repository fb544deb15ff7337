use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

/// Words left out of word-frequency weighting. Lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl StopwordFilter {
    /// Stopwords for a language code or name, `None` when the language is not
    /// bundled.
    pub fn for_language(language: &str) -> Option<Self> {
        let lang = match language.to_lowercase().as_str() {
            "pt" | "portuguese" | "português" => LANGUAGE::Portuguese,
            "en" | "english" => LANGUAGE::English,
            "es" | "spanish" => LANGUAGE::Spanish,
            "fr" | "french" => LANGUAGE::French,
            "de" | "german" => LANGUAGE::German,
            "it" | "italian" => LANGUAGE::Italian,
            _ => return None,
        };
        Some(Self {
            stopwords: get(lang).iter().map(|w| w.to_lowercase()).collect(),
        })
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_load_portuguese_stopwords() {
        let filter = StopwordFilter::for_language("pt").unwrap();
        assert!(filter.len() > 100);
        for word in ["de", "que", "não", "para", "uma"] {
            assert!(filter.is_stopword(word), "{} should be a stopword", word);
        }
        assert!(!filter.is_stopword("quarentena"));
    }

    #[test]
    fn it_should_ignore_case() {
        let filter = StopwordFilter::from_list(&["Que"]);
        assert!(filter.is_stopword("QUE"));
        assert!(filter.is_stopword("que"));
    }

    #[test]
    fn it_should_reject_unknown_languages() {
        assert!(StopwordFilter::for_language("klingon").is_none());
    }
}
