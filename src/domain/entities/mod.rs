//! Core domain entities representing the business data model.
//!
//! - [`Link`] - A shortened URL mapping with its click counter
//! - [`Click`] - A recorded visit to a shortened link
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! (`NewLink`, `NewClick`).

pub mod click;
pub mod link;

pub use click::{Click, NewClick, RecentClick};
pub use link::{Link, LinkTotals, NewLink};
