//! Canonical signature record and the form that produces it.
//!
//! [`SignatureData`] is the only input the renderer sees. It is rebuilt in
//! full from a [`form::FormState`] and a [`UserProfile`](crate::profile::UserProfile)
//! every time a field changes.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod form;

pub use form::{FieldError, FieldId, FieldUpdate, FormState, ValidationErrors};

use crate::profile::UserProfile;
use crate::render::render;

/// Whose identity the signature represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureKind {
    /// The signed-in employee.
    #[default]
    Personal,
    /// A departmental mailbox not tied to one person.
    Shared,
}

/// Personal social networks a user can link from the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    /// LinkedIn profile.
    LinkedIn,
    /// Facebook profile.
    Facebook,
    /// Instagram profile.
    Instagram,
    /// Twitter / X profile.
    Twitter,
    /// TikTok profile.
    TikTok,
}

impl SocialNetwork {
    /// All networks in display order.
    pub const ALL: [Self; 5] = [
        Self::LinkedIn,
        Self::Facebook,
        Self::Instagram,
        Self::Twitter,
        Self::TikTok,
    ];

    /// Display name, also used as image alt text.
    pub fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::TikTok => "TikTok",
        }
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Personal social links; `None` means not provided.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalLinks {
    /// LinkedIn URL.
    pub linkedin: Option<String>,
    /// Facebook URL.
    pub facebook: Option<String>,
    /// Instagram URL.
    pub instagram: Option<String>,
    /// Twitter URL.
    pub twitter: Option<String>,
    /// TikTok URL.
    pub tiktok: Option<String>,
}

impl PersonalLinks {
    /// Link for one network.
    pub fn get(&self, network: SocialNetwork) -> Option<&str> {
        match network {
            SocialNetwork::LinkedIn => self.linkedin.as_deref(),
            SocialNetwork::Facebook => self.facebook.as_deref(),
            SocialNetwork::Instagram => self.instagram.as_deref(),
            SocialNetwork::Twitter => self.twitter.as_deref(),
            SocialNetwork::TikTok => self.tiktok.as_deref(),
        }
    }

    /// Replace the link for one network.
    pub fn set(&mut self, network: SocialNetwork, value: Option<String>) {
        let slot = match network {
            SocialNetwork::LinkedIn => &mut self.linkedin,
            SocialNetwork::Facebook => &mut self.facebook,
            SocialNetwork::Instagram => &mut self.instagram,
            SocialNetwork::Twitter => &mut self.twitter,
            SocialNetwork::TikTok => &mut self.tiktok,
        };
        *slot = value;
    }

    /// Present links in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SocialNetwork, &str)> + '_ {
        SocialNetwork::ALL
            .into_iter()
            .filter_map(|n| self.get(n).map(|url| (n, url)))
    }

    /// Whether any link is present.
    pub fn any(&self) -> bool {
        self.iter().next().is_some()
    }
}

/// Everything the renderer needs, already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureData {
    /// Personal or shared mailbox.
    pub kind: SignatureKind,
    /// Name line (functional name for shared mailboxes).
    pub display_name: String,
    /// Job title; always `None` for shared mailboxes.
    pub job_title: Option<String>,
    /// Department line.
    pub department: String,
    /// Company shown next to the department.
    pub company_name: String,
    /// Email address.
    pub mail: String,
    /// Business phones; only the first one is rendered.
    pub business_phones: Vec<String>,
    /// Directory mobile number. Carried but never rendered.
    pub mobile_phone: Option<String>,
    /// Office address; empty means no address.
    pub office_location: String,
    /// Photo reference.
    pub photo: Option<String>,
    /// Show the photo when one exists.
    pub include_photo: bool,
    /// Show the office line when an address exists.
    pub include_office: bool,
    /// Unit within the department.
    pub unit: Option<String>,
    /// Personal mobile number; always `None` for shared mailboxes.
    pub personal_mobile: Option<String>,
    /// Personal social links.
    pub socials: PersonalLinks,
}

impl SignatureData {
    /// First business phone, if any.
    pub fn primary_phone(&self) -> Option<&str> {
        self.business_phones
            .first()
            .map(String::as_str)
            .filter(|p| !p.trim().is_empty())
    }

    /// Photo to render: requires both the toggle and a photo.
    pub fn photo_src(&self) -> Option<&str> {
        if self.include_photo {
            self.photo.as_deref().filter(|p| !p.is_empty())
        } else {
            None
        }
    }

    /// Office line to render: requires both the toggle and a non-empty address.
    pub fn office_line(&self) -> Option<&str> {
        if self.include_office && !self.office_location.trim().is_empty() {
            Some(self.office_location.as_str())
        } else {
            None
        }
    }

    /// Non-empty job title.
    pub fn title(&self) -> Option<&str> {
        self.job_title.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Non-empty personal mobile.
    pub fn mobile(&self) -> Option<&str> {
        self.personal_mobile
            .as_deref()
            .filter(|m| !m.trim().is_empty())
    }

    /// Non-empty unit.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref().filter(|u| !u.trim().is_empty())
    }

    /// Whether the "Connect with me" block applies.
    pub fn has_personal_links(&self) -> bool {
        self.socials.any()
    }
}

/// Normalize `form` against `profile` and render it with the form's template.
///
/// # Errors
///
/// Returns [`ValidationErrors`] when required fields are blank; nothing is
/// rendered in that case.
pub fn compose(form: &FormState, profile: &UserProfile) -> Result<String, ValidationErrors> {
    let data = form.normalize(profile)?;
    Ok(render(&data, form.template))
}
