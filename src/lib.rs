//! Healthdesk - a terminal client for a healthcare records service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod models;
pub mod pages;
pub mod route;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
