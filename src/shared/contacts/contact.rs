//! Contact Data Structure
//!
//! Represents a contact record as returned by the CRM `SearchContacts` method.
//! Only the fields the lookup card shows are kept; anything else in the
//! record is ignored on decode.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::profile_picture;

/// Heading shown when neither `FileAs` nor `FullName` is usable
pub const DEFAULT_NAME: &str = "No Name";

/// Shown in the Email row when `Email1Address` is missing
pub const DEFAULT_EMAIL: &str = "N/A";

/// A contact returned by the lookup API
///
/// Every field is optional. A field that is present but not a JSON string
/// decodes as `None`, so a stray number or `null` never fails the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    /// CRM item identifier
    #[serde(rename = "ItemGUID", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub item_guid: Option<String>,
    /// "File as" name, preferred for display
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub file_as: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Primary email (the lookup key)
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub email1_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub telephone_number1_normalized: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub business_address_city: Option<String>,
    /// Remote URL or inline base64 image payload
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl Contact {
    /// Name for the card heading: `FileAs`, then `FullName`, then [`DEFAULT_NAME`]
    pub fn display_name(&self) -> &str {
        non_empty(&self.file_as)
            .or_else(|| non_empty(&self.full_name))
            .unwrap_or(DEFAULT_NAME)
    }

    /// Email for the card, or [`DEFAULT_EMAIL`]
    pub fn email_or_default(&self) -> &str {
        non_empty(&self.email1_address).unwrap_or(DEFAULT_EMAIL)
    }

    /// Phone number, only when there is something to show
    pub fn phone(&self) -> Option<&str> {
        non_empty(&self.telephone_number1_normalized)
    }

    /// Business city, only when there is something to show
    pub fn city(&self) -> Option<&str> {
        non_empty(&self.business_address_city)
    }

    /// Renderable image source for the profile picture, if any
    pub fn profile_picture_source(&self) -> Option<String> {
        profile_picture::resolve_image_source(self.profile_picture.as_deref())
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Keep string values, read every other JSON value as absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}
