//! SearchContacts Request/Response
//!
//! Body types for the CRM `SearchContacts` method.

use serde::{Deserialize, Serialize};

use super::Contact;
use crate::shared::error::LookupError;

/// API method used for the lookup
pub const SEARCH_CONTACTS_METHOD: &str = "SearchContacts";

/// Return code the API reports on a successful call
pub const SUCCESS_RETURN_CODE: &str = "rcSuccess";

/// Template record the API matches contacts against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransmitObject {
    #[serde(rename = "Email1Address")]
    pub email1_address: String,
}

/// Request body for `SearchContacts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchContactsRequest {
    pub transmit_object: TransmitObject,
    pub include_profile_pictures: bool,
}

impl SearchContactsRequest {
    /// Look up contacts by primary email, profile pictures included
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            transmit_object: TransmitObject {
                email1_address: email.into(),
            },
            include_profile_pictures: true,
        }
    }
}

/// Response body for `SearchContacts`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ContactsResponse {
    #[serde(default)]
    pub data: Vec<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ContactsResponse {
    /// Successful response carrying `data`
    pub fn with_data(data: Vec<Contact>) -> Self {
        Self {
            data,
            return_code: Some(SUCCESS_RETURN_CODE.to_string()),
            description: None,
        }
    }

    /// Turn an API-reported failure into an error
    ///
    /// A response without a return code is accepted as it is.
    pub fn into_result(self) -> Result<Self, LookupError> {
        match self.return_code.as_deref() {
            Some(code) if code != SUCCESS_RETURN_CODE => Err(LookupError::api(
                code,
                self.description.unwrap_or_default(),
            )),
            _ => Ok(self),
        }
    }

    /// The contact to display: the first entry, if any
    pub fn first_contact(self) -> Option<Contact> {
        self.data.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let request = SearchContactsRequest::by_email("jana@example.com");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "transmitObject": { "Email1Address": "jana@example.com" },
                "includeProfilePictures": true
            })
        );
    }

    #[test]
    fn test_response_missing_data_is_empty() {
        let response: ContactsResponse =
            serde_json::from_value(json!({ "ReturnCode": "rcSuccess" })).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_failed_return_code_is_error() {
        let response: ContactsResponse = serde_json::from_value(json!({
            "ReturnCode": "rcBadSession",
            "Description": "Session expired",
            "Data": []
        }))
        .unwrap();

        assert_matches!(
            response.into_result(),
            Err(LookupError::Api { code, description }) if code == "rcBadSession" && description == "Session expired"
        );
    }

    #[test]
    fn test_first_contact_takes_first_entry() {
        let first = Contact {
            full_name: Some("First".to_string()),
            ..Contact::default()
        };
        let second = Contact {
            full_name: Some("Second".to_string()),
            ..Contact::default()
        };

        let response = ContactsResponse::with_data(vec![first.clone(), second]);
        assert_eq!(response.into_result().unwrap().first_contact(), Some(first));
    }
}
