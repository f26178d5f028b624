//! `MealScout` - TUI client for browsing recipes from TheMealDB
//!
//! Search recipes by name, get a random suggestion, and open any result to
//! read its ingredients and instructions.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod tui;
