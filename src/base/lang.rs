//! Multi-language strings.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// A text in one language.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LangString {
    pub language: SmolStr,
    pub text: String,
}

impl LangString {
    pub fn new(language: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            text: text.into(),
        }
    }
}

/// A set of texts keyed by language code.
///
/// Insertion order is preserved so that iteration (and therefore hashing)
/// is deterministic. Setting a language a second time replaces its text
/// in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LangStringSet {
    texts: IndexMap<SmolStr, String>,
}

impl LangStringSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`LangStringSet::set`].
    pub fn with(mut self, language: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        self.set(language, text);
        self
    }

    /// Set the text for a language, replacing any previous text.
    pub fn set(&mut self, language: impl Into<SmolStr>, text: impl Into<String>) {
        self.texts.insert(language.into(), text.into());
    }

    /// Get the text for a language (exact language code match).
    pub fn get(&self, language: &str) -> Option<&str> {
        self.texts.get(language).map(String::as_str)
    }

    /// The first text in insertion order, if any.
    pub fn first(&self) -> Option<LangString> {
        self.texts
            .first()
            .map(|(lang, text)| LangString::new(lang.clone(), text.clone()))
    }

    pub fn remove(&mut self, language: &str) -> Option<String> {
        self.texts.shift_remove(language)
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.texts.iter().map(|(l, t)| (l.as_str(), t.as_str()))
    }
}

impl FromIterator<LangString> for LangStringSet {
    fn from_iter<I: IntoIterator<Item = LangString>>(iter: I) -> Self {
        let mut set = Self::new();
        for ls in iter {
            set.set(ls.language, ls.text);
        }
        set
    }
}
