use serde::*;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Default, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hashtag(pub String);

impl Hashtag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hashtag to String
impl From<Hashtag> for String {
    fn from(hashtag: Hashtag) -> Self {
        hashtag.0
    }
}

// String to Hashtag
impl From<String> for Hashtag {
    fn from(hashtag: String) -> Self {
        Hashtag(hashtag)
    }
}

impl From<&str> for Hashtag {
    fn from(hashtag: &str) -> Self {
        Hashtag(hashtag.to_string())
    }
}

impl fmt::Display for Hashtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
