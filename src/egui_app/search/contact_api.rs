//! Contact API Client
//!
//! This module provides the client for the CRM lookup API. Methods are
//! invoked by name: the parameter object is POSTed as JSON to
//! `{server}{service_path}/{method}` and the JSON answer is decoded.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::contacts::{ContactsResponse, SearchContactsRequest, SEARCH_CONTACTS_METHOD};
use crate::shared::error::LookupError;

/// The lookup operations the search controller depends on
///
/// Each call is one request; its outcome is final.
pub trait ContactApi: Send + Sync {
    /// Search contacts by primary email, profile pictures included
    fn search_contacts(&self, email: &str) -> Result<ContactsResponse, LookupError>;
}

/// HTTP implementation of [`ContactApi`]
pub struct ApiClient {
    config: Config,
    client: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Invoke an API method with a JSON parameter object
    pub fn call_method<P, R>(&self, method: &str, params: &P) -> Result<R, LookupError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let url = self.config.method_url(method);

        let rt = Runtime::new().map_err(|e| LookupError::Runtime {
            message: e.to_string(),
        })?;

        rt.block_on(async {
            tracing::debug!("Calling {} at {}", method, url);

            let response = self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .json(params)
                .send()
                .await
                .map_err(|e| LookupError::transport(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                return Err(LookupError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            response
                .json::<R>()
                .await
                .map_err(|e| LookupError::serialization(e.to_string()))
        })
    }
}

impl ContactApi for ApiClient {
    fn search_contacts(&self, email: &str) -> Result<ContactsResponse, LookupError> {
        let request = SearchContactsRequest::by_email(email);
        self.call_method::<_, ContactsResponse>(SEARCH_CONTACTS_METHOD, &request)?
            .into_result()
    }
}
