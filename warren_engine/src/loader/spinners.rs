//! `loader::spinners` module
//!
//! Loads flavor-text spinners from TOML. Every spinner type starts with its
//! built-in lines; entries in the file replace them.

use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use gametools::{Spinner, Wedge};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::spinners::SpinnerType;

/// Raw spinner data loaded from TOML files
#[derive(Debug, Deserialize, Serialize)]
pub struct RawSpinnerData {
    #[serde(rename = "spinnerType")]
    pub spinner_type_key: String,
    pub values: Vec<String>,
    #[serde(default)]
    pub widths: Vec<usize>,
}

/// Container for multiple spinner definitions in a TOML file
#[derive(Debug, Deserialize, Serialize)]
pub struct SpinnerFile {
    #[serde(rename = "spinners")]
    pub entries: Vec<RawSpinnerData>,
}

impl SpinnerFile {
    /// Convert data loaded from file into the game's spinner map, starting
    /// from the built-in defaults.
    pub fn to_spinner_map(&self) -> HashMap<SpinnerType, Spinner<String>> {
        let mut spinners = create_default_spinners();

        for spin_data in &self.entries {
            let Some(spinner_type) = SpinnerType::from_toml_key(&spin_data.spinner_type_key) else {
                warn!("Unknown spinner type '{}', skipping", spin_data.spinner_type_key);
                continue;
            };
            let wedges = Self::create_wedges_from_data(spin_data);
            if wedges.is_empty() {
                warn!("Spinner '{}' has no valid values, skipping", spin_data.spinner_type_key);
                continue;
            }
            info!(
                "Overriding spinner '{}' with {} values from TOML",
                spin_data.spinner_type_key,
                wedges.len()
            );
            spinners.insert(spinner_type, Spinner::new(wedges));
        }
        spinners
    }

    /// Create spinner wedges from raw TOML data; missing widths default to 1.
    fn create_wedges_from_data(spin_data: &RawSpinnerData) -> Vec<Wedge<String>> {
        spin_data
            .values
            .iter()
            .enumerate()
            .map(|(i, val)| {
                let width = spin_data.widths.get(i).copied().unwrap_or(1);
                Wedge::new_weighted(val.clone(), width)
            })
            .collect()
    }
}

/// Load spinners from a TOML file. A missing file just yields the defaults.
///
/// # Errors
/// - if the file exists but can't be parsed
pub fn load_spinners(toml_path: &Path) -> Result<HashMap<SpinnerType, Spinner<String>>> {
    match std::fs::read_to_string(toml_path) {
        Ok(file_content) => {
            let spinner_file: SpinnerFile = toml::from_str(&file_content)
                .with_context(|| format!("parsing spinner data from {}", toml_path.display()))?;
            info!("Spinner data loaded from '{}'", toml_path.display());
            Ok(spinner_file.to_spinner_map())
        },
        Err(e) => {
            warn!(
                "Could not read spinner file '{}': {}. Using defaults only.",
                toml_path.display(),
                e
            );
            Ok(create_default_spinners())
        },
    }
}

/// Spinner map holding only the built-in lines.
pub fn create_default_spinners() -> HashMap<SpinnerType, Spinner<String>> {
    SpinnerType::ALL
        .into_iter()
        .map(|kind| (kind, kind.default_spinner()))
        .collect()
}
