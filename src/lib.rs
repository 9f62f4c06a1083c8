//! SEDC signature generator.
//!
//! Fetches the signed-in employee's directory profile, merges it with
//! hand-entered fields, and renders an inline-styled HTML email signature
//! in one of four templates.
//!
//! Pipeline: [`profile`] → [`signature`] (form + normalization) → [`render`].
//! [`offices`] supplies the office address reference data.
//!
//! See `DESIGN.md` for full architecture documentation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod credentials;
pub mod logging;

pub mod offices;
pub mod profile;

pub mod render;
pub mod signature;
