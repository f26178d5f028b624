//! Tests for the app module.
//!
//! This module is organized into submodules by functionality:
//! - `flow` - Search, random and lookup flows, request fencing
//! - `helpers` - Shared test utilities (stub source, key and mouse events)
//! - `input` - Key bindings, focus and paste handling
//! - `mouse` - Clicks on buttons, cards, the popup and its backdrop
//! - `ui` - Rendered output

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod input;
