//! Form normalization against directory profiles.

use sedc_signature::offices::{OfficeDirectory, OfficeSelection};
use sedc_signature::signature::{
    FieldId, FieldUpdate, FormState, SignatureKind, SocialNetwork, ValidationErrors,
};

use super::fixtures::{bare_profile, normalize, profile, DIRECTORY_MOBILE, MOBILE, OFFICE, PHONE};

fn rejected(form: &FormState, profile: &sedc_signature::profile::UserProfile) -> ValidationErrors {
    match form.normalize(profile) {
        Ok(data) => panic!("form should be rejected, got {data:?}"),
        Err(err) => err,
    }
}

fn directory() -> OfficeDirectory {
    match OfficeDirectory::builtin() {
        Ok(dir) => dir,
        Err(err) => panic!("builtin office data should parse: {err}"),
    }
}

fn shared_form() -> FormState {
    FormState::default().apply_all([
        FieldUpdate::Kind(SignatureKind::Shared),
        FieldUpdate::FunctionalName("ICT Helpdesk".to_owned()),
        FieldUpdate::SharedEmail("helpdesk@sedc.com.my".to_owned()),
        FieldUpdate::SharedPhone("+60 82-416 700".to_owned()),
    ])
}

#[test]
fn personal_mode_takes_identity_from_profile() {
    let data = normalize(&FormState::default(), &profile());
    assert_eq!(data.kind, SignatureKind::Personal);
    assert_eq!(data.display_name, "Aminah Binti Ali");
    assert_eq!(data.mail, "aminah@sedc.com.my");
    assert_eq!(data.title(), Some("Senior Executive"));
    assert_eq!(data.primary_phone(), Some(PHONE));
    assert_eq!(data.office_location, OFFICE);
    assert_eq!(data.company_name, "SEDC");
}

#[test]
fn personal_mobile_comes_from_form_not_directory() {
    let data = normalize(&FormState::default(), &profile());
    assert_eq!(data.mobile(), None);
    assert_eq!(data.mobile_phone.as_deref(), Some(DIRECTORY_MOBILE));

    let form = FormState::default().apply(FieldUpdate::PersonalMobile(MOBILE.to_owned()));
    assert_eq!(normalize(&form, &profile()).mobile(), Some(MOBILE));
}

#[test]
fn shared_mode_maps_form_fields() {
    let data = normalize(&shared_form(), &profile());
    assert_eq!(data.kind, SignatureKind::Shared);
    assert_eq!(data.display_name, "ICT Helpdesk");
    assert_eq!(data.mail, "helpdesk@sedc.com.my");
    assert_eq!(data.business_phones, vec!["+60 82-416 700".to_owned()]);
    assert_eq!(data.job_title, None);
    assert_eq!(data.personal_mobile, None);
}

#[test]
fn shared_mode_without_phone_has_no_phone_line() {
    let form = shared_form().apply(FieldUpdate::SharedPhone("   ".to_owned()));
    let data = normalize(&form, &profile());
    assert!(data.business_phones.is_empty());
    assert_eq!(data.primary_phone(), None);
}

#[test]
fn shared_mode_ignores_personal_mobile() {
    let form = shared_form().apply(FieldUpdate::PersonalMobile(MOBILE.to_owned()));
    assert_eq!(normalize(&form, &profile()).mobile(), None);
}

#[test]
fn shared_mode_requires_name_and_email() {
    let form = FormState::default().apply_all([
        FieldUpdate::Kind(SignatureKind::Shared),
        FieldUpdate::FunctionalName("  ".to_owned()),
    ]);
    let err = rejected(&form, &profile());
    assert!(err.has(FieldId::FunctionalName));
    assert!(err.has(FieldId::SharedEmail));
    assert!(!err.has(FieldId::Department));
    assert_eq!(err.errors.len(), 2);
}

#[test]
fn personal_mode_requires_directory_identity() {
    let mut empty = bare_profile();
    empty.display_name = " ".to_owned();
    empty.mail = String::new();
    empty.department = String::new();
    let err = rejected(&FormState::default(), &empty);
    assert!(err.has(FieldId::DisplayName));
    assert!(err.has(FieldId::Mail));
    assert!(err.has(FieldId::Department));
    for error in &err.errors {
        assert_eq!(error.message, "is required");
    }
}

#[test]
fn department_override_fills_missing_directory_value() {
    let mut no_department = bare_profile();
    no_department.department = String::new();
    let form = FormState::default().apply(FieldUpdate::Department("Corporate Affairs".to_owned()));
    assert_eq!(normalize(&form, &no_department).department, "Corporate Affairs");
}

#[test]
fn blank_department_override_keeps_directory_value() {
    let form = FormState::default().apply(FieldUpdate::Department("   ".to_owned()));
    assert_eq!(
        normalize(&form, &profile()).department,
        "Group Digital and Technology"
    );
}

#[test]
fn selected_office_replaces_directory_location() {
    let selection = OfficeSelection::select(&directory(), "RO", Some("SIBU"));
    let form = FormState::default().apply(FieldUpdate::Office(Some(selection)));
    assert_eq!(
        normalize(&form, &profile()).office_location,
        "No. 40, Tingkat 1, Lot 2852, Jalan Intan, 96000 Sibu, Sarawak"
    );
}

#[test]
fn edited_office_text_wins_and_blank_means_none() {
    let selection = OfficeSelection::select(&directory(), "RO", Some("SIBU")).edit("Level 3, Wisma Sibu");
    let form = FormState::default().apply(FieldUpdate::Office(Some(selection.clone())));
    assert_eq!(normalize(&form, &profile()).office_location, "Level 3, Wisma Sibu");

    let form = form.apply(FieldUpdate::Office(Some(selection.edit("  "))));
    let data = normalize(&form, &profile());
    assert_eq!(data.office_location, "");
    assert_eq!(data.office_line(), None);
}

#[test]
fn invalid_social_links_are_reported_per_network() {
    let form = FormState::default().apply_all([
        FieldUpdate::Social(SocialNetwork::Twitter, "x.com/aminah".to_owned()),
        FieldUpdate::Social(SocialNetwork::Instagram, "ftp://instagram.com/a".to_owned()),
        FieldUpdate::Social(SocialNetwork::LinkedIn, "https://linkedin.com/in/a".to_owned()),
    ]);
    let err = rejected(&form, &profile());
    assert!(err.has(FieldId::Social(SocialNetwork::Twitter)));
    assert!(err.has(FieldId::Social(SocialNetwork::Instagram)));
    assert!(!err.has(FieldId::Social(SocialNetwork::LinkedIn)));
    assert!(err.to_string().contains("Twitter link"));
}

#[test]
fn toggles_carry_through() {
    let form = FormState::default().apply_all([
        FieldUpdate::IncludePhoto(false),
        FieldUpdate::IncludeOffice(false),
    ]);
    let data = normalize(&form, &profile());
    assert!(!data.include_photo);
    assert!(!data.include_office);
    assert_eq!(data.photo_src(), None);
    assert_eq!(data.office_line(), None);
}

#[test]
fn later_updates_replace_earlier_ones() {
    let form = FormState::default().apply_all([
        FieldUpdate::Unit("Digital Unit".to_owned()),
        FieldUpdate::Unit("Data Unit".to_owned()),
        FieldUpdate::Kind(SignatureKind::Shared),
        FieldUpdate::Kind(SignatureKind::Personal),
    ]);
    assert_eq!(form.unit, "Data Unit");
    assert_eq!(form.kind, SignatureKind::Personal);
}
