use std::fs::File;
use std::io::{self, BufReader, Read};

use log::debug;

use crate::common::error::DecodeError;
use crate::common::utils::{device_tree_string, READ_LIMIT};
use crate::config::SourceConf;
use crate::enums::source_kind::SourceKind;
use crate::hardware::revision::{decode_packed, decode_revision_str, packed_from_model, parse_cpuinfo};
use crate::models::revision_record::RevisionRecord;

/// Reads the board revision from the kernel and decodes it.
pub struct RevisionDecoder {
    conf: SourceConf,
}

impl RevisionDecoder {
    pub fn new(conf: SourceConf) -> Self {
        RevisionDecoder { conf }
    }

    pub fn decode(&self) -> Result<RevisionRecord, DecodeError> {
        match self.conf.kind.resolve() {
            SourceKind::CpuInfo => self.decode_cpuinfo(),
            _ => self.decode_device_tree(),
        }
    }

    fn decode_device_tree(&self) -> Result<RevisionRecord, DecodeError> {
        let rev = match read_be_u32(&self.conf.device_tree_revision) {
            Ok(rev) => rev,
            Err(error) => {
                debug!(
                    "Could not read {}: {}, falling back to model",
                    self.conf.device_tree_revision, error
                );
                let model = read_bounded(&self.conf.device_tree_model)
                    .map_err(DecodeError::SourceUnavailable)?;
                packed_from_model(&device_tree_string(&model))?
            }
        };

        Ok(decode_packed(rev))
    }

    fn decode_cpuinfo(&self) -> Result<RevisionRecord, DecodeError> {
        let file = File::open(&self.conf.cpuinfo).map_err(DecodeError::SourceUnavailable)?;
        let revision = parse_cpuinfo(BufReader::new(file))?;

        Ok(decode_revision_str(&revision))
    }
}

impl Default for RevisionDecoder {
    fn default() -> Self {
        RevisionDecoder::new(SourceConf::default())
    }
}

// linux,revision holds a single big endian cell
fn read_be_u32(path: &str) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    File::open(path)?.read_exact(&mut buf)?;

    Ok(u32::from_be_bytes(buf))
}

fn read_bounded(path: &str) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(READ_LIMIT);
    File::open(path)?.take(READ_LIMIT as u64).read_to_end(&mut buf)?;

    Ok(buf)
}

/// Decodes the revision of the board this process runs on, using the kernel's default paths.
pub fn decode() -> Result<RevisionRecord, DecodeError> {
    RevisionDecoder::default().decode()
}
