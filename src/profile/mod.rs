//! Directory profile abstraction.
//!
//! Defines the [`ProfileProvider`] trait and the [`UserProfile`] record it
//! returns.
//!
//! Two providers are implemented:
//! - [`graph::GraphProfileProvider`]: Microsoft Graph `/me` API
//! - [`file::FileProfileProvider`]: a JSON file on disk

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub mod file;
pub mod graph;

/// Company name used when the directory leaves it blank.
pub const DEFAULT_COMPANY_NAME: &str = "SEDC";

// ---------------------------------------------------------------------------
// Core types
// ---------------------------------------------------------------------------

/// The signed-in user's directory profile.
///
/// Field names follow the Graph `user` resource so a `/me` response and a
/// saved profile file share one JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Full display name.
    pub display_name: String,
    /// Job title.
    pub job_title: String,
    /// Primary email address.
    pub mail: String,
    /// Mobile phone registered in the directory.
    pub mobile_phone: String,
    /// Business phones; the first one is shown in signatures.
    pub business_phones: Vec<String>,
    /// Office location as recorded in the directory.
    pub office_location: String,
    /// Department name.
    pub department: String,
    /// Company name.
    pub company_name: String,
    /// Photo reference (URL or `data:` URI). Only valid for this session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl UserProfile {
    /// The business phone shown in signatures, if any.
    pub fn primary_phone(&self) -> Option<&str> {
        self.business_phones
            .first()
            .map(String::as_str)
            .filter(|p| !p.trim().is_empty())
    }

    /// Fill directory gaps with defaults (currently only the company name).
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        if self.company_name.trim().is_empty() {
            DEFAULT_COMPANY_NAME.clone_into(&mut self.company_name);
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by profile providers.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// HTTP transport failure.
    #[error("profile request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Response did not match the expected schema.
    #[error("profile response parse error: {0}")]
    Parse(String),
    /// Directory responded with an error status.
    #[error("directory returned non-success status {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Sanitized response body.
        body: String,
    },
    /// Provider cannot run with the current configuration.
    #[error("profile provider unavailable: {0}")]
    Unavailable(String),
    /// Reading a local profile file failed.
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),
}

impl ProfileError {
    /// Whether the directory refused the caller's credentials.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 401 | 403, .. })
    }
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Check HTTP response status and return the body bytes or a structured error.
///
/// # Errors
///
/// Returns `ProfileError::Request` on transport failure, `ProfileError::HttpStatus` on non-2xx.
pub async fn check_http_response(response: reqwest::Response) -> Result<Vec<u8>, ProfileError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(ProfileError::HttpStatus {
            status: status.as_u16(),
            body: sanitize_http_error_body(&String::from_utf8_lossy(&body)),
        });
    }
    Ok(body.to_vec())
}

fn sanitize_http_error_body(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut sanitized = collapsed;
    for pattern in [
        r"(?i)bearer\s+[A-Za-z0-9_\-\.=]{10,}",
        r"eyJ[A-Za-z0-9_\-]{10,}\.[A-Za-z0-9_\-]{10,}\.[A-Za-z0-9_\-]*",
    ] {
        if let Ok(regex) = Regex::new(pattern) {
            sanitized = regex.replace_all(&sanitized, "[REDACTED]").into_owned();
        }
    }

    const MAX_ERROR_BODY_CHARS: usize = 256;
    if sanitized.chars().count() > MAX_ERROR_BODY_CHARS {
        let shortened = sanitized
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect::<String>();
        return format!("{shortened}...[truncated]");
    }

    sanitized
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Source of the current user's profile.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetch the profile of the signed-in user.
    ///
    /// A missing or unreadable photo is not an error; it yields
    /// `photo: None`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] when the directory is unreachable, refuses
    /// access, or answers with something that is not a profile.
    async fn fetch_profile(&self) -> Result<UserProfile, ProfileError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}
