//! API client for the healthcare records service.
//!
//! [`ApiClient`] maps each backend operation to exactly one HTTP call over an
//! injected [`HttpClient`](crate::traits::HttpClient), so screens can be
//! exercised against [`MockHttpClient`](crate::adapters::MockHttpClient).

mod client;
mod error;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
