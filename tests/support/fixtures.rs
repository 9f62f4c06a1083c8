//! Shared profiles and signature records for integration tests.

#![allow(dead_code)]

use sedc_signature::profile::UserProfile;
use sedc_signature::signature::{FieldUpdate, FormState, SignatureData, SocialNetwork};

pub const PHOTO_URL: &str = "https://photos.example.com/aminah.jpg";
pub const PHONE: &str = "+60 82-416 777";
pub const MOBILE: &str = "+60 12-345 6789";
pub const DIRECTORY_MOBILE: &str = "+60 19-000 0000";
pub const OFFICE: &str = "Menara SEDC, No.2, The Isthmus, 93050, Kuching, Sarawak";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/aminah-ali";
pub const TIKTOK: &str = "https://www.tiktok.com/@aminah";

/// A complete directory profile.
pub fn profile() -> UserProfile {
    UserProfile {
        display_name: "Aminah Binti Ali".to_owned(),
        job_title: "Senior Executive".to_owned(),
        mail: "aminah@sedc.com.my".to_owned(),
        mobile_phone: DIRECTORY_MOBILE.to_owned(),
        business_phones: vec![PHONE.to_owned(), "+60 82-416 778".to_owned()],
        office_location: OFFICE.to_owned(),
        department: "Group Digital and Technology".to_owned(),
        company_name: "SEDC".to_owned(),
        photo: Some(PHOTO_URL.to_owned()),
    }
}

/// A profile with only the three mandatory values.
pub fn bare_profile() -> UserProfile {
    UserProfile {
        display_name: "Aminah Binti Ali".to_owned(),
        mail: "aminah@sedc.com.my".to_owned(),
        department: "Group Digital and Technology".to_owned(),
        company_name: "SEDC".to_owned(),
        ..UserProfile::default()
    }
}

pub fn normalize(form: &FormState, profile: &UserProfile) -> SignatureData {
    match form.normalize(profile) {
        Ok(data) => data,
        Err(err) => panic!("form should normalize: {err}"),
    }
}

/// Full profile, every optional form field filled.
pub fn full_data() -> SignatureData {
    let form = FormState::default().apply_all([
        FieldUpdate::Unit("Digital Unit".to_owned()),
        FieldUpdate::PersonalMobile(MOBILE.to_owned()),
        FieldUpdate::Social(SocialNetwork::LinkedIn, LINKEDIN.to_owned()),
        FieldUpdate::Social(SocialNetwork::TikTok, TIKTOK.to_owned()),
    ]);
    normalize(&form, &profile())
}

/// Mandatory lines only: no title, unit, phone, mobile, office, photo or links.
pub fn minimal_data() -> SignatureData {
    normalize(&FormState::default(), &bare_profile())
}
