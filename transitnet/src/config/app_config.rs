use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::app::CliError;
use transitnet_core::model::NetworkConfig;

/// run configuration: where data lives, which feed archives to ingest, and
/// the geospatial constants for network construction.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct AppConfiguration {
    /// directory holding the accumulated tables, scratch space, and the
    /// network artifact
    pub data_dir: PathBuf,
    /// feed name -> path to the zipped feed archive. an ordered map so that
    /// merges are reproducible run to run.
    #[serde(default)]
    pub feeds: BTreeMap<String, PathBuf>,
    /// geospatial constants for walking connections
    #[serde(default)]
    pub network: NetworkConfig,
    /// override for the network artifact location; defaults to
    /// `<data_dir>/network.json`
    #[serde(default)]
    pub artifact: Option<PathBuf>,
}

impl AppConfiguration {
    pub fn stops_table_path(&self) -> PathBuf {
        self.data_dir.join("stops.csv.gz")
    }

    pub fn visits_table_path(&self) -> PathBuf {
        self.data_dir.join("stop_visits.csv.gz")
    }

    /// scratch directory for archive extraction, removed after a merge.
    pub fn extract_dir(&self) -> PathBuf {
        self.data_dir.join("extracted")
    }

    pub fn artifact_path(&self) -> PathBuf {
        match &self.artifact {
            Some(path) => path.clone(),
            None => self.data_dir.join("network.json"),
        }
    }
}

impl TryFrom<&String> for AppConfiguration {
    type Error = CliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| CliError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            toml::from_str(&s)
                .map_err(|e| CliError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| CliError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            serde_json::from_str(&s)
                .map_err(|e| CliError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else {
            Err(CliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
