use crate::domain::text::StopwordFilter;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w[\w']+").expect("valid word pattern"));

/// Word frequencies of `text`, most frequent first (ties in first-seen
/// order).
///
/// Tokens ending in `'s` lose the suffix, purely numeric tokens and stopwords
/// are dropped, spellings differing only in case are merged under the most
/// common one, and a plural `xs` is merged into `x` when `x` also occurs.
pub fn word_frequencies(text: &str, stopwords: &StopwordFilter) -> Vec<(String, usize)> {
    // lowercase form -> spelling -> count
    let mut forms: IndexMap<String, IndexMap<String, usize>> = IndexMap::new();
    for token in WORD.find_iter(text).map(|m| m.as_str()) {
        let token = match token.to_lowercase().ends_with("'s") {
            true => &token[..token.len() - 2],
            false => token,
        };
        if token.chars().all(char::is_numeric) || stopwords.is_stopword(token) {
            continue;
        }
        *forms
            .entry(token.to_lowercase())
            .or_default()
            .entry(token.to_string())
            .or_insert(0) += 1;
    }

    merge_plurals(&mut forms);

    let mut frequencies: Vec<(String, usize)> = forms
        .into_values()
        .filter_map(|spellings| {
            let total: usize = spellings.values().sum();
            // first spelling with the highest count
            let (spelling, _) = spellings
                .into_iter()
                .fold(None, |best: Option<(String, usize)>, (s, n)| match best {
                    Some((_, m)) if m >= n => best,
                    _ => Some((s, n)),
                })?;
            Some((spelling, total))
        })
        .collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    frequencies
}

fn merge_plurals(forms: &mut IndexMap<String, IndexMap<String, usize>>) {
    let plurals: Vec<String> = forms
        .keys()
        .filter(|key| key.ends_with('s') && !key.ends_with("ss"))
        .filter(|key| forms.contains_key(&key[..key.len() - 1]))
        .cloned()
        .collect();

    for plural in plurals {
        let singular = &plural[..plural.len() - 1];
        if !forms.contains_key(singular) {
            continue;
        }
        if let Some(spellings) = forms.shift_remove(&plural) {
            let target = forms.entry(singular.to_string()).or_default();
            for (spelling, count) in spellings {
                let mut chars = spelling.chars();
                chars.next_back();
                *target.entry(chars.as_str().to_string()).or_insert(0) += count;
            }
        }
    }
}
