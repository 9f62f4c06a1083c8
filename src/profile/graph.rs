//! Microsoft Graph provider using the `/me` and `/me/photo/$value` endpoints.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::{check_http_response, ProfileError, ProfileProvider, UserProfile};

/// Default Graph API base URL.
pub const DEFAULT_GRAPH_URL: &str = "https://graph.microsoft.com/v1.0";

/// Fields requested from `/me`.
pub const PROFILE_SELECT: &str =
    "displayName,jobTitle,mail,mobilePhone,businessPhones,officeLocation,department,companyName";

/// Photo type assumed when Graph omits `Content-Type`.
const FALLBACK_PHOTO_TYPE: &str = "image/jpeg";

// ---------------------------------------------------------------------------
// Wire types (pub for integration testing)
// ---------------------------------------------------------------------------

/// Graph `user` resource, restricted to the selected fields.
///
/// Graph sends `null` for unset attributes, hence every field is optional.
#[doc(hidden)]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphUser {
    /// Display name.
    pub display_name: Option<String>,
    /// Job title.
    pub job_title: Option<String>,
    /// Primary SMTP address.
    pub mail: Option<String>,
    /// Mobile phone.
    pub mobile_phone: Option<String>,
    /// Business phones.
    pub business_phones: Option<Vec<String>>,
    /// Office location.
    pub office_location: Option<String>,
    /// Department.
    pub department: Option<String>,
    /// Company name.
    pub company_name: Option<String>,
}

impl From<GraphUser> for UserProfile {
    fn from(user: GraphUser) -> Self {
        Self {
            display_name: user.display_name.unwrap_or_default(),
            job_title: user.job_title.unwrap_or_default(),
            mail: user.mail.unwrap_or_default(),
            mobile_phone: user.mobile_phone.unwrap_or_default(),
            business_phones: user.business_phones.unwrap_or_default(),
            office_location: user.office_location.unwrap_or_default(),
            department: user.department.unwrap_or_default(),
            company_name: user.company_name.unwrap_or_default(),
            photo: None,
        }
        .with_defaults()
    }
}

/// Parse a `/me` response body into a profile (without photo).
///
/// # Errors
///
/// Returns `ProfileError::Parse` if the body is not a Graph user object.
#[doc(hidden)]
pub fn parse_user(body: &[u8]) -> Result<UserProfile, ProfileError> {
    let user: GraphUser =
        serde_json::from_slice(body).map_err(|e| ProfileError::Parse(e.to_string()))?;
    Ok(user.into())
}

/// Encode photo bytes as a `data:` URI usable in an `<img src>`.
#[doc(hidden)]
pub fn photo_data_uri(content_type: Option<&str>, bytes: &[u8]) -> String {
    let mime = content_type
        .map(|c| c.split(';').next().unwrap_or(c).trim())
        .filter(|c| c.starts_with("image/"))
        .unwrap_or(FALLBACK_PHOTO_TYPE);
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Graph-backed profile provider authenticated with a bearer token.
#[derive(Debug, Clone)]
pub struct GraphProfileProvider {
    /// Base URL for the Graph API.
    #[doc(hidden)]
    pub base_url: String,
    token: String,
    client: reqwest::Client,
}

impl GraphProfileProvider {
    /// Create a provider for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Unavailable` for an empty token and
    /// `ProfileError::Request` if the HTTP client cannot be built.
    pub fn new(base_url: &str, token: String, timeout: Duration) -> Result<Self, ProfileError> {
        if token.trim().is_empty() {
            return Err(ProfileError::Unavailable(
                "no Graph access token configured".to_owned(),
            ));
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            token,
            client,
        })
    }

    async fn fetch_user(&self) -> Result<UserProfile, ProfileError> {
        let url = format!("{}/me", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("$select", PROFILE_SELECT)])
            .bearer_auth(&self.token)
            .send()
            .await?;
        let body = check_http_response(response).await?;
        parse_user(&body)
    }

    async fn fetch_photo(&self) -> Result<String, ProfileError> {
        let url = format!("{}/me/photo/$value", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = check_http_response(response).await?;
        if bytes.is_empty() {
            return Err(ProfileError::Parse("empty photo body".to_owned()));
        }
        Ok(photo_data_uri(content_type.as_deref(), &bytes))
    }
}

// ---------------------------------------------------------------------------
// Trait impl
// ---------------------------------------------------------------------------

#[async_trait]
impl ProfileProvider for GraphProfileProvider {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_profile(&self) -> Result<UserProfile, ProfileError> {
        let mut profile = self.fetch_user().await?;

        match self.fetch_photo().await {
            Ok(photo) => profile.photo = Some(photo),
            Err(e) => debug!(error = %e, "no profile photo available"),
        }

        info!(
            has_photo = profile.photo.is_some(),
            "profile fetched from Graph"
        );
        Ok(profile)
    }

    fn name(&self) -> &str {
        "graph"
    }
}
