//! Office address reference data: loading, listing and lookup.
//!
//! The dataset maps an office type (a headquarters building or a class of
//! branch office) either to one address or to a set of named locations.
//! It ships as `data/offices.toml` embedded in the binary; a replacement file
//! can be pointed to from the config.
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Reference dataset compiled into the binary.
const BUILTIN_OFFICES: &str = include_str!("../data/offices.toml");

/// Error type for office data loading.
#[derive(Debug, Error)]
pub enum OfficeDataError {
    /// Failed to parse the office TOML.
    #[error("failed to parse office data TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    /// I/O error reading an office data file.
    #[error("failed to read office data file: {0}")]
    IoError(#[from] std::io::Error),
    /// An entry carries both or neither of `address` and `location`.
    #[error("office '{0}' must define either an address or at least one location")]
    InvalidEntry(String),
    /// Two entries share a key.
    #[error("duplicate office type '{0}'")]
    Duplicate(String),
}

/// Address data for one office type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfficeAddress {
    /// A single address, independent of any location.
    Simple {
        /// The full postal address.
        address: String,
    },
    /// Several branches, each resolved through its location name.
    Nested {
        /// `(location name, address)` pairs in declaration order.
        locations: Vec<(String, String)>,
    },
}

impl OfficeAddress {
    /// Resolve an address, returning `None` when nothing matches.
    pub fn lookup(&self, specific_location: Option<&str>) -> Option<&str> {
        match self {
            Self::Simple { address } => Some(address.as_str()),
            Self::Nested { locations } => {
                let wanted = specific_location?;
                locations
                    .iter()
                    .find(|(name, _)| name == wanted)
                    .map(|(_, address)| address.as_str())
            }
        }
    }
}

/// One office type with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeEntry {
    /// Lookup key, e.g. `"RO"`.
    pub key: String,
    /// Human-readable label, e.g. `"Regional Office (RO)"`.
    pub label: String,
    /// Address data.
    pub address: OfficeAddress,
}

// On-disk shape. Arrays of tables keep declaration order.
#[derive(Debug, Deserialize)]
struct OfficeFile {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    office: Vec<OfficeRecord>,
}

#[derive(Debug, Deserialize)]
struct OfficeRecord {
    key: String,
    label: Option<String>,
    address: Option<String>,
    #[serde(default)]
    location: Vec<LocationRecord>,
}

#[derive(Debug, Deserialize)]
struct LocationRecord {
    name: String,
    address: String,
}

/// The loaded office dataset.
#[derive(Debug, Clone)]
pub struct OfficeDirectory {
    version: u32,
    entries: Vec<OfficeEntry>,
}

impl OfficeDirectory {
    /// Parse the dataset embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns [`OfficeDataError`] if the embedded file is malformed.
    pub fn builtin() -> Result<Self, OfficeDataError> {
        Self::from_toml(BUILTIN_OFFICES)
    }

    /// Load a dataset from a TOML file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`OfficeDataError`] if the file cannot be read or is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OfficeDataError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse a dataset from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`OfficeDataError`] on syntax errors, ambiguous entries or
    /// duplicate keys.
    pub fn from_toml(contents: &str) -> Result<Self, OfficeDataError> {
        let file: OfficeFile = toml::from_str(contents)?;
        let mut entries: Vec<OfficeEntry> = Vec::with_capacity(file.office.len());

        for record in file.office {
            if entries.iter().any(|e| e.key == record.key) {
                return Err(OfficeDataError::Duplicate(record.key));
            }
            let address = match (record.address, record.location.is_empty()) {
                (Some(address), true) => OfficeAddress::Simple { address },
                (None, false) => OfficeAddress::Nested {
                    locations: record
                        .location
                        .into_iter()
                        .map(|l| (l.name, l.address))
                        .collect(),
                },
                _ => return Err(OfficeDataError::InvalidEntry(record.key)),
            };
            entries.push(OfficeEntry {
                label: record.label.unwrap_or_else(|| record.key.clone()),
                key: record.key,
                address,
            });
        }

        tracing::debug!(
            version = file.version,
            offices = entries.len(),
            "office directory loaded"
        );
        Ok(Self {
            version: file.version,
            entries,
        })
    }

    /// Dataset version declared in the file.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// All office types in declaration order.
    pub fn office_types(&self) -> &[OfficeEntry] {
        &self.entries
    }

    /// Find an office type by key.
    pub fn get(&self, office_type: &str) -> Option<&OfficeEntry> {
        self.entries.iter().find(|e| e.key == office_type)
    }

    /// Location names of a nested office type. Empty for simple or unknown types.
    pub fn locations(&self, office_type: &str) -> Vec<&str> {
        match self.get(office_type).map(|e| &e.address) {
            Some(OfficeAddress::Nested { locations }) => {
                locations.iter().map(|(name, _)| name.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Resolve an address, with `None` for an unknown type or location.
    pub fn lookup(&self, office_type: &str, specific_location: Option<&str>) -> Option<&str> {
        self.get(office_type)?.address.lookup(specific_location)
    }

    /// Resolve an address to a string; an empty string means "no address".
    ///
    /// Simple office types ignore `specific_location`. Nested types need a
    /// known location name.
    pub fn resolve_address(&self, office_type: &str, specific_location: Option<&str>) -> String {
        self.lookup(office_type, specific_location)
            .map(str::to_owned)
            .unwrap_or_default()
    }
}

/// The office address chosen in the form, with an optional manual edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficeSelection {
    office_type: String,
    specific_location: Option<String>,
    resolved: Option<String>,
    edited: Option<String>,
}

impl OfficeSelection {
    /// Select an office type/location and resolve it against `directory`.
    pub fn select(
        directory: &OfficeDirectory,
        office_type: &str,
        specific_location: Option<&str>,
    ) -> Self {
        Self {
            office_type: office_type.to_owned(),
            specific_location: specific_location.map(str::to_owned),
            resolved: directory
                .lookup(office_type, specific_location)
                .map(str::to_owned),
            edited: None,
        }
    }

    /// A selection holding only hand-typed text, no lookup behind it.
    pub fn custom(text: &str) -> Self {
        Self::default().edit(text)
    }

    /// Replace the address text. Editing back to the resolved value clears
    /// the customization.
    #[must_use]
    pub fn edit(mut self, text: &str) -> Self {
        self.edited = if self.resolved.as_deref() == Some(text) {
            None
        } else {
            Some(text.to_owned())
        };
        self
    }

    /// Drop any manual edit and go back to the looked-up address.
    #[must_use]
    pub fn revert(mut self) -> Self {
        self.edited = None;
        self
    }

    /// Whether the user's text differs from the looked-up address.
    pub fn is_customized(&self) -> bool {
        self.edited.is_some()
    }

    /// Office type key of this selection.
    pub fn office_type(&self) -> &str {
        &self.office_type
    }

    /// Specific location, if one was chosen.
    pub fn specific_location(&self) -> Option<&str> {
        self.specific_location.as_deref()
    }

    /// The looked-up address, `None` on a lookup miss.
    pub fn resolved(&self) -> Option<&str> {
        self.resolved.as_deref()
    }

    /// The address that will be rendered: the edit when customized, else the
    /// looked-up value. Blank text counts as no address.
    pub fn address(&self) -> Option<&str> {
        self.edited
            .as_deref()
            .or(self.resolved.as_deref())
            .filter(|a| !a.trim().is_empty())
    }
}
