use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::regions::domain::region_provider::RegionProvider;
use crate::shared::constants::DEMO_IMAGE_SIZE;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

#[derive(Error, Debug)]
pub enum RegionTableError {
    #[error("failed to read region table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid region table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("region table has no subjects")]
    Empty,
}

/// Hand-authored regions per subject.
///
/// `reference_size` records the image size the coordinates were authored
/// against, so they can be refitted to other images.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_size: Option<(u32, u32)>,
    pub subjects: BTreeMap<String, Vec<Region>>,
}

impl RegionTable {
    /// The marketing demo table, authored against the 800x500 demo photo.
    pub fn demo() -> Self {
        let subjects = BTreeMap::from([
            (
                "face".to_string(),
                vec![Region::new(545, 90, 50, 60), Region::new(445, 100, 50, 60)],
            ),
            (
                "laptop".to_string(),
                vec![Region::new(560, 170, 100, 60), Region::new(395, 185, 100, 55)],
            ),
        ]);
        Self {
            reference_size: Some(DEMO_IMAGE_SIZE),
            subjects,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, RegionTableError> {
        let table: RegionTable = serde_json::from_str(json)?;
        if table.subjects.is_empty() {
            return Err(RegionTableError::Empty);
        }
        Ok(table)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, RegionTableError> {
        let json = fs::read_to_string(path).map_err(|source| RegionTableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// Answers region queries from a fixed [`RegionTable`].
///
/// Unknown subjects yield no regions; the frame contents are ignored.
pub struct FixedRegionProvider {
    table: Arc<RegionTable>,
}

impl FixedRegionProvider {
    pub fn new(table: Arc<RegionTable>) -> Self {
        Self { table }
    }

    pub fn demo() -> Self {
        Self::new(Arc::new(RegionTable::demo()))
    }
}

impl RegionProvider for FixedRegionProvider {
    fn regions(
        &mut self,
        subject: &str,
        _frame: &Frame,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        match self.table.subjects.get(subject) {
            Some(regions) => Ok(regions.clone()),
            None => {
                log::debug!("No regions authored for subject '{subject}'");
                Ok(Vec::new())
            }
        }
    }

    fn subjects(&self) -> Vec<String> {
        self.table.subjects.keys().cloned().collect()
    }
}
