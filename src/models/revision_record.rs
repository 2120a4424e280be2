use std::fmt;

use serde_derive::{Deserialize, Serialize};

pub const UNKNOWN: &str = "Unknown";

/// Board identity decoded from a single revision code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RevisionRecord {
    pub board_type: String,
    /// GPIO header layout generation: 0 none, then 1, 2, 3.
    pub connector_revision: u8,
    pub manufacturer: String,
    pub processor: String,
    pub ram: String,
    /// Revision token exactly as read.
    pub raw_revision: String,
}

impl RevisionRecord {
    /// Every field `"Unknown"`, connector revision assumed to be the newest layout.
    pub fn unknown(raw_revision: &str) -> RevisionRecord {
        RevisionRecord {
            board_type: UNKNOWN.to_string(),
            connector_revision: 3,
            manufacturer: UNKNOWN.to_string(),
            processor: UNKNOWN.to_string(),
            ram: UNKNOWN.to_string(),
            raw_revision: raw_revision.to_string(),
        }
    }
}

impl fmt::Display for RevisionRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Type:         {}", self.board_type)?;
        writeln!(f, "Processor:    {}", self.processor)?;
        writeln!(f, "Manufacturer: {}", self.manufacturer)?;
        writeln!(f, "RAM:          {}", self.ram)?;
        writeln!(f, "P1 revision:  {}", self.connector_revision)?;
        write!(f, "Revision:     {}", self.raw_revision)
    }
}
