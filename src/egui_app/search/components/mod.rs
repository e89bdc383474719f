//! Search UI Components
//!
//! This module contains the egui components of the lookup widget.

pub mod search_bar;
pub mod recent_searches;
pub mod contact_card;
