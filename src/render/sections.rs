//! Optional signature sections and the rule deciding whether each appears.

use crate::signature::SignatureData;

/// A piece of a signature that a template may place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Profile photo.
    Photo,
    /// Display name.
    Name,
    /// Job title.
    Title,
    /// Unit, department and company.
    Affiliation,
    /// First business phone.
    Phone,
    /// Personal mobile.
    Mobile,
    /// Email link.
    Email,
    /// Office address.
    Office,
    /// "Follow SEDC" icons, plus "Connect with me" when personal links exist.
    Socials,
}

impl Section {
    /// Whether this section renders for `data`.
    pub fn is_present(self, data: &SignatureData) -> bool {
        match self {
            Self::Photo => data.photo_src().is_some(),
            Self::Title => data.title().is_some(),
            Self::Phone => data.primary_phone().is_some(),
            Self::Mobile => data.mobile().is_some(),
            Self::Office => data.office_line().is_some(),
            Self::Name | Self::Affiliation | Self::Email | Self::Socials => true,
        }
    }
}

/// Sections of `sections` that render for `data`, order preserved.
pub fn present<'a>(
    sections: &'a [Section],
    data: &'a SignatureData,
) -> impl Iterator<Item = Section> + 'a {
    sections.iter().copied().filter(|s| s.is_present(data))
}
