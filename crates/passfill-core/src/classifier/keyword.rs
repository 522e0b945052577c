//! Keyword heuristics over visible text.

use crate::field_type::FieldType;
use crate::node::Node;

use super::{ClassificationStrategy, normalize};

const DEFAULT_KEYWORDS: &[(FieldType, &[&str])] = &[
    (
        FieldType::Totp,
        &["otp", "2fa", "onetime", "verificationcode", "authenticationcode"],
    ),
    (FieldType::Password, &["password", "passwd", "passphrase", "pwd"]),
    (FieldType::Email, &["email", "mail"]),
    (FieldType::Username, &["username", "userid", "login"]),
    (FieldType::Phone, &["phone", "mobile"]),
    (FieldType::FullName, &["fullname", "yourname"]),
];

// Shorter keywords only match the start of a single word.
const MIN_JOINED_KEYWORD_LEN: usize = 4;

/// Ordered keyword groups, one per field type.
///
/// Text is split into lowercase words and keywords only match at a word
/// start. Keywords of [`MIN_JOINED_KEYWORD_LEN`] characters or more may run
/// across consecutive words, so `"E-mail"` and `"User name"` match `email`
/// and `username` while `"Gmail"` and `"Footprint"` match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    groups: Vec<(FieldType, Vec<String>)>,
}

impl KeywordTable {
    /// An empty table; matches nothing.
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Append a group. Groups are consulted in insertion order.
    pub fn group<I, S>(mut self, field_type: FieldType, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| normalize(k.as_ref()))
            .filter(|k| !k.is_empty())
            .collect();
        if !keywords.is_empty() {
            self.groups.push((field_type, keywords));
        }
        self
    }

    pub fn groups(&self) -> &[(FieldType, Vec<String>)] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// First group with a keyword starting at a word boundary of `text`.
    pub fn lookup(&self, text: &str) -> Option<FieldType> {
        let words = words(text);
        if words.is_empty() {
            return None;
        }
        self.groups
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| matches_words(&words, k)))
            .map(|(field_type, _)| *field_type)
    }
}

/// Lowercase words of `text`, split on non-alphanumerics and on
/// lower-to-upper case changes (`yourEmail` is `your`, `email`).
fn words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in text.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if prev_lower && c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase();
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn matches_words(words: &[String], keyword: &str) -> bool {
    if keyword.chars().count() < MIN_JOINED_KEYWORD_LEN {
        return words.iter().any(|word| word.starts_with(keyword));
    }
    (0..words.len()).any(|start| starts_across(&words[start..], keyword))
}

/// Whether the concatenation of `words` starts with `keyword`.
fn starts_across(words: &[String], keyword: &str) -> bool {
    let mut rest = keyword;
    for word in words {
        if rest.len() <= word.len() {
            return word.starts_with(rest);
        }
        match rest.strip_prefix(word.as_str()) {
            Some(remaining) => rest = remaining,
            None => return false,
        }
    }
    rest.is_empty()
}

impl Default for KeywordTable {
    fn default() -> Self {
        DEFAULT_KEYWORDS
            .iter()
            .fold(Self::new(), |table, (field_type, keywords)| {
                table.group(*field_type, keywords.iter())
            })
    }
}

/// Lowest-priority strategy matching a node's text against a [`KeywordTable`].
#[derive(Debug, Clone, Default)]
pub struct KeywordStrategy {
    table: KeywordTable,
}

impl KeywordStrategy {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }
}

impl ClassificationStrategy for KeywordStrategy {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn classify(&self, node: &Node) -> Option<FieldType> {
        node.text.as_deref().and_then(|text| self.table.lookup(text))
    }
}
