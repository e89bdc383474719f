//! Contacts Module
//!
//! This module contains the data structures exchanged with the CRM API:
//!
//! - `Contact` - A contact record returned by `SearchContacts`
//! - `SearchContactsRequest` / `ContactsResponse` - The request and response bodies
//! - `profile_picture` - Classification of the `ProfilePicture` field
//!
//! # Usage
//!
//! ```rust
//! use contact_lookup::shared::contacts::{Contact, ContactsResponse, SearchContactsRequest};
//! ```

pub mod contact;
pub mod search;
pub mod profile_picture;

// Re-export all types
pub use contact::{Contact, DEFAULT_EMAIL, DEFAULT_NAME};
pub use search::{
    ContactsResponse, SearchContactsRequest, TransmitObject, SEARCH_CONTACTS_METHOD,
    SUCCESS_RETURN_CODE,
};
pub use profile_picture::{
    classify, decode_inline_image, resolve_image_source, ImageClass, ImageMime,
};
