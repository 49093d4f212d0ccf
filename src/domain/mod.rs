//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Registry trait definition
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click recording worker
//! - [`cleanup_worker`] - Periodic expired-record sweep
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler resolves a shortcode and responds immediately
//! 2. A [`click_event::ClickEvent`] is pushed to a bounded channel
//!    (fire-and-forget; a full queue drops the click)
//! 3. [`click_worker::run_click_worker`] enriches the event with
//!    geolocation and normalized metadata
//! 4. The click is appended through
//!    [`repositories::UrlRegistry::record_click`]

pub mod cleanup_worker;
pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
