// SPDX-License-Identifier: MPL-2.0
//! `hts_icons` draws the "Tasks by HTS" app icons.
//!
//! Each icon is a red "T" lettermark with a small "by HTS" caption on a light
//! gray square, written as an RGB PNG. The generator produces the 512×512 and
//! 192×192 variants used by the web app manifest.

pub mod config;
pub mod error;
pub mod generator;
pub mod icon;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};
pub use icon::{render, IconRenderer};
