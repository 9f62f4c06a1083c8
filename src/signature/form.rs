//! Editable form state, its reducer, and normalization into [`SignatureData`].

use std::fmt;

use tracing::debug;

use super::{PersonalLinks, SignatureData, SignatureKind, SocialNetwork};
use crate::offices::OfficeSelection;
use crate::profile::UserProfile;
use crate::render::Template;

/// Field identifiers used in validation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Personal display name (from the directory).
    DisplayName,
    /// Shared-mailbox functional name.
    FunctionalName,
    /// Department.
    Department,
    /// Personal email (from the directory).
    Mail,
    /// Shared-mailbox address.
    SharedEmail,
    /// A personal social link.
    Social(SocialNetwork),
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DisplayName => f.write_str("display name"),
            Self::FunctionalName => f.write_str("functional name"),
            Self::Department => f.write_str("department"),
            Self::Mail => f.write_str("email"),
            Self::SharedEmail => f.write_str("shared email"),
            Self::Social(network) => write!(f, "{network} link"),
        }
    }
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field.
    pub field: FieldId,
    /// What is wrong with it.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every validation failure found in one normalization attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("signature form has invalid fields: {}", join_errors(.errors))]
pub struct ValidationErrors {
    /// Individual failures in field order.
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Whether `field` failed.
    pub fn has(&self, field: FieldId) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single edit to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Switch between personal and shared mailbox.
    Kind(SignatureKind),
    /// Shared-mailbox functional name.
    FunctionalName(String),
    /// Shared-mailbox address.
    SharedEmail(String),
    /// Shared-mailbox phone.
    SharedPhone(String),
    /// Department override; blank falls back to the directory value.
    Department(String),
    /// Unit.
    Unit(String),
    /// Personal mobile.
    PersonalMobile(String),
    /// Office selection; `None` falls back to the directory office location.
    Office(Option<OfficeSelection>),
    /// Personal social link; blank clears it.
    Social(SocialNetwork, String),
    /// Include-photo toggle.
    IncludePhoto(bool),
    /// Include-office toggle.
    IncludeOffice(bool),
    /// Template choice.
    Template(Template),
}

/// Current values of every editable field.
///
/// Updated only through [`FormState::apply`]; each call returns a new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Personal or shared mailbox.
    pub kind: SignatureKind,
    /// Shared-mailbox functional name.
    pub functional_name: String,
    /// Shared-mailbox address.
    pub shared_email: String,
    /// Shared-mailbox phone.
    pub shared_phone: String,
    /// Department override.
    pub department: String,
    /// Unit.
    pub unit: String,
    /// Personal mobile.
    pub personal_mobile: String,
    /// Office selection.
    pub office: Option<OfficeSelection>,
    /// Personal social links as typed.
    pub socials: PersonalLinks,
    /// Include-photo toggle.
    pub include_photo: bool,
    /// Include-office toggle.
    pub include_office: bool,
    /// Template choice.
    pub template: Template,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            kind: SignatureKind::Personal,
            functional_name: String::new(),
            shared_email: String::new(),
            shared_phone: String::new(),
            department: String::new(),
            unit: String::new(),
            personal_mobile: String::new(),
            office: None,
            socials: PersonalLinks::default(),
            include_photo: true,
            include_office: true,
            template: Template::default(),
        }
    }
}

impl FormState {
    /// Apply one edit, returning the updated state.
    #[must_use]
    pub fn apply(mut self, update: FieldUpdate) -> Self {
        match update {
            FieldUpdate::Kind(kind) => self.kind = kind,
            FieldUpdate::FunctionalName(v) => self.functional_name = v,
            FieldUpdate::SharedEmail(v) => self.shared_email = v,
            FieldUpdate::SharedPhone(v) => self.shared_phone = v,
            FieldUpdate::Department(v) => self.department = v,
            FieldUpdate::Unit(v) => self.unit = v,
            FieldUpdate::PersonalMobile(v) => self.personal_mobile = v,
            FieldUpdate::Office(selection) => self.office = selection,
            FieldUpdate::Social(network, v) => self.socials.set(network, non_blank(&v)),
            FieldUpdate::IncludePhoto(v) => self.include_photo = v,
            FieldUpdate::IncludeOffice(v) => self.include_office = v,
            FieldUpdate::Template(t) => self.template = t,
        }
        self
    }

    /// Apply a batch of edits in order.
    #[must_use]
    pub fn apply_all(self, updates: impl IntoIterator<Item = FieldUpdate>) -> Self {
        updates.into_iter().fold(self, Self::apply)
    }

    /// Merge the form with `profile` into a validated [`SignatureData`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every blank required field and
    /// every social link that is not an http(s) URL.
    pub fn normalize(&self, profile: &UserProfile) -> Result<SignatureData, ValidationErrors> {
        let mut errors = Vec::new();

        let department = non_blank(&self.department)
            .or_else(|| non_blank(&profile.department))
            .unwrap_or_default();

        let (name_field, display_name, mail_field, mail, job_title, phones, personal_mobile) =
            match self.kind {
                SignatureKind::Personal => (
                    FieldId::DisplayName,
                    profile.display_name.trim().to_owned(),
                    FieldId::Mail,
                    profile.mail.trim().to_owned(),
                    non_blank(&profile.job_title),
                    profile.business_phones.clone(),
                    non_blank(&self.personal_mobile),
                ),
                SignatureKind::Shared => (
                    FieldId::FunctionalName,
                    self.functional_name.trim().to_owned(),
                    FieldId::SharedEmail,
                    self.shared_email.trim().to_owned(),
                    None,
                    non_blank(&self.shared_phone).into_iter().collect(),
                    None,
                ),
            };

        require(&mut errors, name_field, &display_name);
        require(&mut errors, FieldId::Department, &department);
        require(&mut errors, mail_field, &mail);

        for (network, link) in self.socials.iter() {
            if !is_web_url(link) {
                errors.push(FieldError {
                    field: FieldId::Social(network),
                    message: "must be a full http(s) URL".to_owned(),
                });
            }
        }

        if !errors.is_empty() {
            debug!(count = errors.len(), "signature form failed validation");
            return Err(ValidationErrors { errors });
        }

        let office_location = match &self.office {
            Some(selection) => selection.address().unwrap_or_default().to_owned(),
            None => profile.office_location.trim().to_owned(),
        };

        Ok(SignatureData {
            kind: self.kind,
            display_name,
            job_title,
            department,
            company_name: profile.company_name.clone(),
            mail,
            business_phones: phones,
            mobile_phone: non_blank(&profile.mobile_phone),
            office_location,
            photo: profile.photo.clone(),
            include_photo: self.include_photo,
            include_office: self.include_office,
            unit: non_blank(&self.unit),
            personal_mobile,
            socials: self.socials.clone(),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn require(errors: &mut Vec<FieldError>, field: FieldId, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError {
            field,
            message: "is required".to_owned(),
        });
    }
}

fn is_web_url(link: &str) -> bool {
    url::Url::parse(link)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false)
}
