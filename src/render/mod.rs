//! Signature rendering.
//!
//! [`render`] turns a validated [`SignatureData`] into a self-contained,
//! inline-styled HTML fragment. The renderer never fails: optional data that
//! is missing simply drops its fragment.
//!
//! Professional, Modern and Minimal share one section-driven renderer
//! ([`stacked`]) and differ only by [`style::TemplateSpec`]. SEDC Clean has
//! its own two-column layout with a line-count driven logo crop ([`clean`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::signature::{SignatureData, SocialNetwork};

pub mod clean;
pub mod html;
pub mod sections;
pub mod stacked;
pub mod style;

pub use clean::{line_count, logo_crop, LogoCrop};
pub use sections::Section;

/// Company Facebook page, shown in every "Follow SEDC" block.
pub const COMPANY_FACEBOOK_URL: &str = "https://www.facebook.com/sedcsarawak/";
/// Company Instagram page, shown in every "Follow SEDC" block.
pub const COMPANY_INSTAGRAM_URL: &str = "https://www.instagram.com/sedcsarawak/";
/// Company logo used by SEDC Clean.
pub const LOGO_URL: &str =
    "https://sedc.com.my/wp-content/uploads/2025/08/SEDC-new-logo-2025-scaled.png";
/// Footer banner used by SEDC Clean.
pub const FOOTER_IMAGE_URL: &str = "https://sedc.com.my/SEDCEmailFooter/email_footer.png";
/// Footer banner link target.
pub const FOOTER_LINK_URL: &str = "https://sedc.com.my";

/// Icon image for a social network.
pub fn social_icon(network: SocialNetwork) -> &'static str {
    match network {
        SocialNetwork::LinkedIn => "https://cdn-icons-png.flaticon.com/512/174/174857.png",
        SocialNetwork::Facebook => "https://cdn-icons-png.flaticon.com/512/733/733547.png",
        SocialNetwork::Instagram => "https://cdn-icons-png.flaticon.com/512/2111/2111463.png",
        SocialNetwork::Twitter => "https://cdn-icons-png.flaticon.com/512/5968/5968830.png",
        SocialNetwork::TikTok => "https://cdn-icons-png.flaticon.com/512/5968/5968812.png",
    }
}

/// Company pages in "Follow SEDC" order.
pub const COMPANY_LINKS: [(SocialNetwork, &str); 2] = [
    (SocialNetwork::Facebook, COMPANY_FACEBOOK_URL),
    (SocialNetwork::Instagram, COMPANY_INSTAGRAM_URL),
];

/// The available signature templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    /// Blue accent bar with the photo beside the text.
    Professional,
    /// Gradient header card.
    Modern,
    /// Monospace, boxed, letter-prefixed contact lines.
    Minimal,
    /// Corporate two-column layout with logo and disclaimer footer.
    #[default]
    SedcClean,
}

impl Template {
    /// All templates in menu order.
    pub const ALL: [Self; 4] = [Self::Professional, Self::Modern, Self::Minimal, Self::SedcClean];

    /// Stable numeric id (1-4).
    pub fn id(self) -> u8 {
        match self {
            Self::Professional => 1,
            Self::Modern => 2,
            Self::Minimal => 3,
            Self::SedcClean => 4,
        }
    }

    /// Kebab-case name used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Modern => "modern",
            Self::Minimal => "minimal",
            Self::SedcClean => "sedc-clean",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Modern => "Modern",
            Self::Minimal => "Minimal",
            Self::SedcClean => "SEDC Clean",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised template name or id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template '{0}', expected one of: professional, modern, minimal, sedc-clean (or 1-4)")]
pub struct UnknownTemplate(pub String);

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.name() == wanted || t.id().to_string() == wanted)
            .ok_or_else(|| UnknownTemplate(s.to_owned()))
    }
}

/// Render `data` with `template`.
pub fn render(data: &SignatureData, template: Template) -> String {
    let html = match template {
        Template::Professional => stacked::render(data, &style::PROFESSIONAL),
        Template::Modern => stacked::render(data, &style::MODERN),
        Template::Minimal => stacked::render(data, &style::MINIMAL),
        Template::SedcClean => clean::render(data),
    };
    debug!(template = %template, bytes = html.len(), "signature rendered");
    html
}
