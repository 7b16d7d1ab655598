//! W3C WebDriver protocol support
//!
//! This module implements the client side of the WebDriver session
//! protocol as served by Appium.

pub mod client;
pub mod types;

pub use client::WebDriverClient;
pub use types::*;
