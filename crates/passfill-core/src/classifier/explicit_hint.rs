//! Explicit autofill hint lookup.

use crate::field_type::FieldType;
use crate::node::Node;

use super::{ClassificationStrategy, normalize};

/// Built-in hint table, keys already normalized.
const DEFAULT_HINTS: &[(&str, FieldType)] = &[
    ("emailaddress", FieldType::Email),
    ("email", FieldType::Email),
    ("username", FieldType::Username),
    ("password", FieldType::Password),
    ("currentpassword", FieldType::Password),
    ("newpassword", FieldType::Password),
    ("phone", FieldType::Phone),
    ("phonenumber", FieldType::Phone),
    ("tel", FieldType::Phone),
    ("personname", FieldType::FullName),
    ("name", FieldType::FullName),
    ("fullname", FieldType::FullName),
    ("smsotpcode", FieldType::Totp),
    ("onetimecode", FieldType::Totp),
    ("otp", FieldType::Totp),
    ("2facode", FieldType::Totp),
    ("creditcardnumber", FieldType::CardNumber),
    ("creditcardsecuritycode", FieldType::CardCvv),
    ("creditcardexpirationdate", FieldType::CardExpiration),
    ("creditcardexpirationmonth", FieldType::CardExpiration),
    ("creditcardexpirationyear", FieldType::CardExpiration),
    ("creditcardholdername", FieldType::CardholderName),
];

/// Maps hints declared by the host to field types.
///
/// Hints are scanned in declaration order; the first one present in the
/// table wins and unrecognized hints are skipped.
#[derive(Debug, Clone)]
pub struct ExplicitHintStrategy {
    table: Vec<(String, FieldType)>,
}

impl ExplicitHintStrategy {
    /// Strategy with an empty table.
    pub fn empty() -> Self {
        Self { table: Vec::new() }
    }

    /// Append a mapping. Earlier entries for the same hint keep precedence.
    pub fn add(&mut self, hint: &str, field_type: FieldType) {
        let key = normalize(hint);
        if !key.is_empty() {
            self.table.push((key, field_type));
        }
    }

    /// Field type mapped to a single hint.
    pub fn lookup(&self, hint: &str) -> Option<FieldType> {
        let key = normalize(hint);
        self.table
            .iter()
            .find(|(known, _)| *known == key)
            .map(|(_, field_type)| *field_type)
    }
}

impl Default for ExplicitHintStrategy {
    fn default() -> Self {
        let table = DEFAULT_HINTS
            .iter()
            .map(|(hint, field_type)| (hint.to_string(), *field_type))
            .collect();
        Self { table }
    }
}

impl ClassificationStrategy for ExplicitHintStrategy {
    fn name(&self) -> &'static str {
        "explicit_hint"
    }

    fn classify(&self, node: &Node) -> Option<FieldType> {
        node.autofill_hints.iter().find_map(|hint| self.lookup(hint))
    }
}
