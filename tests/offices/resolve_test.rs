//! Address lookup over the built-in and on-disk datasets.

use std::fs;

use sedc_signature::offices::{OfficeAddress, OfficeDataError, OfficeDirectory};

fn builtin() -> OfficeDirectory {
    match OfficeDirectory::builtin() {
        Ok(dir) => dir,
        Err(err) => panic!("builtin office data should parse: {err}"),
    }
}

#[test]
fn nested_type_resolves_known_location() {
    assert_eq!(
        builtin().resolve_address("RO", Some("SIBU")),
        "No. 40, Tingkat 1, Lot 2852, Jalan Intan, 96000 Sibu, Sarawak"
    );
}

#[test]
fn nested_type_with_unknown_or_missing_location_is_empty() {
    let dir = builtin();
    assert_eq!(dir.resolve_address("RO", Some("UNKNOWN")), "");
    assert_eq!(dir.resolve_address("RO", None), "");
    assert_eq!(dir.lookup("PIBU", Some("sibu")), None);
}

#[test]
fn simple_type_ignores_location() {
    let dir = builtin();
    let expected = "Menara SEDC, No.2, The Isthmus, 93050, Kuching, Sarawak";
    assert_eq!(dir.resolve_address("Menara SEDC", None), expected);
    assert_eq!(dir.resolve_address("Menara SEDC", Some("anything")), expected);
}

#[test]
fn unknown_type_is_empty() {
    assert_eq!(builtin().resolve_address("HQ", Some("SIBU")), "");
    assert!(builtin().get("HQ").is_none());
}

#[test]
fn builtin_lists_types_in_file_order() {
    let dir = builtin();
    assert_eq!(dir.version(), 1);
    let keys: Vec<&str> = dir.office_types().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["Menara SEDC", "SEDC Plaza", "RO", "PIBU"]);
    assert_eq!(dir.locations("RO").len(), 5);
    assert_eq!(dir.locations("PIBU").first().copied(), Some("KUCHING"));
    assert!(dir.locations("Menara SEDC").is_empty());
}

#[test]
fn every_builtin_address_is_non_blank() {
    for entry in builtin().office_types() {
        match &entry.address {
            OfficeAddress::Simple { address } => assert!(!address.trim().is_empty()),
            OfficeAddress::Nested { locations } => {
                assert!(!locations.is_empty(), "{} has no locations", entry.key);
                for (name, address) in locations {
                    assert!(!address.trim().is_empty(), "{}/{name} is blank", entry.key);
                }
            }
        }
    }
}

#[test]
fn loads_replacement_dataset_from_disk() {
    let tmp = match tempfile::tempdir() {
        Ok(tmp) => tmp,
        Err(err) => panic!("should create temp dir: {err}"),
    };
    let path = tmp.path().join("offices.toml");
    let write = fs::write(
        &path,
        r#"
version = 2

[[office]]
key = "HQ"
address = "1 Jalan Test"

[[office]]
key = "Branch"
label = "Branches"

[[office.location]]
name = "MIRI"
address = "2 Jalan Miri"
"#,
    );
    assert!(write.is_ok());

    let dir = match OfficeDirectory::from_path(&path) {
        Ok(dir) => dir,
        Err(err) => panic!("dataset should load: {err}"),
    };
    assert_eq!(dir.version(), 2);
    assert_eq!(dir.resolve_address("HQ", None), "1 Jalan Test");
    assert_eq!(dir.resolve_address("Branch", Some("MIRI")), "2 Jalan Miri");
    assert_eq!(dir.get("HQ").map(|e| e.label.as_str()), Some("HQ"));
    assert_eq!(dir.resolve_address("RO", Some("SIBU")), "");
}

#[test]
fn rejects_duplicate_keys() {
    let result = OfficeDirectory::from_toml(
        "[[office]]\nkey = \"HQ\"\naddress = \"a\"\n[[office]]\nkey = \"HQ\"\naddress = \"b\"\n",
    );
    assert!(matches!(result, Err(OfficeDataError::Duplicate(key)) if key == "HQ"));
}

#[test]
fn rejects_entry_with_both_address_and_locations() {
    let result = OfficeDirectory::from_toml(
        "[[office]]\nkey = \"HQ\"\naddress = \"a\"\n[[office.location]]\nname = \"X\"\naddress = \"b\"\n",
    );
    assert!(matches!(result, Err(OfficeDataError::InvalidEntry(_))));
}

#[test]
fn missing_file_is_io_error() {
    let result = OfficeDirectory::from_path("/nonexistent/offices.toml");
    assert!(matches!(result, Err(OfficeDataError::IoError(_))));
}
