//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. The resolver serves a redirect and bumps the link's click counter
//! 2. A [`click_event::ClickEvent`] is sent to a bounded async channel
//! 3. [`click_worker::run_click_worker`] drains the channel with retry logic
//! 4. Click data is persisted via [`repositories::ClickRepository`]
//!
//! The channel send is fire-and-forget: a full queue or a failing append
//! never turns a successful redirect into an error.

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
