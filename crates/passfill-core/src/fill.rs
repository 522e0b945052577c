//! Mapping a chosen item back onto host field identifiers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::field_type::FieldType;
use crate::node::NodeId;
use crate::result::TraversalResult;

/// Item the user picked to fill the screen with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AutofillItem {
    Login {
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        email: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        totp: Option<String>,
    },
    Identity {
        #[serde(default)]
        full_name: Option<String>,
        #[serde(default)]
        email: Option<String>,
        #[serde(default)]
        phone: Option<String>,
    },
    CreditCard {
        #[serde(default)]
        cardholder_name: Option<String>,
        #[serde(default)]
        number: Option<String>,
        #[serde(default)]
        cvv: Option<String>,
        #[serde(default)]
        expiration: Option<String>,
    },
}

impl AutofillItem {
    /// Value this item provides for a field of `field_type`.
    pub fn value_for(&self, field_type: FieldType) -> Option<&str> {
        match self {
            AutofillItem::Login {
                username,
                email,
                password,
                totp,
            } => match field_type {
                FieldType::Email => present(email).or_else(|| present(username)),
                FieldType::Username => present(username).or_else(|| present(email)),
                FieldType::Password => present(password),
                FieldType::Totp => present(totp),
                FieldType::FullName
                | FieldType::Phone
                | FieldType::CardNumber
                | FieldType::CardCvv
                | FieldType::CardExpiration
                | FieldType::CardholderName
                | FieldType::Other
                | FieldType::Unknown => None,
            },
            AutofillItem::Identity {
                full_name,
                email,
                phone,
            } => match field_type {
                FieldType::FullName => present(full_name),
                FieldType::Email => present(email),
                FieldType::Phone => present(phone),
                FieldType::Username
                | FieldType::Password
                | FieldType::Totp
                | FieldType::CardNumber
                | FieldType::CardCvv
                | FieldType::CardExpiration
                | FieldType::CardholderName
                | FieldType::Other
                | FieldType::Unknown => None,
            },
            AutofillItem::CreditCard {
                cardholder_name,
                number,
                cvv,
                expiration,
            } => match field_type {
                FieldType::CardholderName | FieldType::FullName => present(cardholder_name),
                FieldType::CardNumber => present(number),
                FieldType::CardCvv => present(cvv),
                FieldType::CardExpiration => present(expiration),
                FieldType::Email
                | FieldType::Username
                | FieldType::Password
                | FieldType::Totp
                | FieldType::Phone
                | FieldType::Other
                | FieldType::Unknown => None,
            },
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// One value to write into one host field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillAssignment {
    pub field_id: NodeId,
    pub value: String,
}

/// Values the host should apply, in slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillResponse {
    pub assignments: Vec<FillAssignment>,
}

impl FillResponse {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn value_of(&self, field_id: &NodeId) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| &a.field_id == field_id)
            .map(|a| a.value.as_str())
    }
}

/// Pair host field ids with field types by position and resolve values.
///
/// The two lists may differ in length; slots past the shorter one and slots
/// the item has no value for are left out.
pub fn map_fields(item: &AutofillItem, field_ids: &[NodeId], field_types: &[FieldType]) -> FillResponse {
    if field_ids.len() != field_types.len() {
        debug!(
            ids = field_ids.len(),
            types = field_types.len(),
            "Host slot count differs from classified field count"
        );
    }

    let assignments = field_ids
        .iter()
        .zip(field_types)
        .filter_map(|(field_id, field_type)| {
            item.value_for(*field_type).map(|value| FillAssignment {
                field_id: field_id.clone(),
                value: value.to_string(),
            })
        })
        .collect();

    FillResponse { assignments }
}

/// [`map_fields`] over the fields of a traversal result.
pub fn map_result(item: &AutofillItem, result: &TraversalResult) -> FillResponse {
    let (ids, types): (Vec<NodeId>, Vec<FieldType>) = result
        .fields
        .iter()
        .map(|f| (f.field_id.clone(), f.field_type))
        .unzip();
    map_fields(item, &ids, &types)
}

#[cfg(test)]
#[path = "fill_tests.rs"]
mod tests;
