use std::io::{BufRead, Read};

use log::{debug, warn};

use crate::common::error::DecodeError;
use crate::common::utils::{hex_digit_value, READ_LIMIT};
use crate::hardware::tables::{
    BOARD_TYPES, CONNECTOR_REVISIONS, KNOWN_HARDWARE, KNOWN_MODELS, LEGACY_PROCESSOR,
    LEGACY_REVISIONS, MANUFACTURERS, PROCESSORS, RAM_SIZES,
};
use crate::models::packed_revision::PackedRevision;
use crate::models::revision_record::{RevisionRecord, UNKNOWN};

// Decode a new-style packed revision code
pub fn decode_packed(rev: u32) -> RevisionRecord {
    let rev = PackedRevision::from(rev);

    if !rev.is_new_scheme() {
        debug!("Revision {:#x} predates the packed scheme, using legacy table", rev.0);
        return decode_revision_str(&format!("{:04x}", rev.0));
    }

    let board_type = match BOARD_TYPES.get(rev.board_type_code()) {
        Some(name) => *name,
        None => {
            warn!("Unknown board type code {:#x}", rev.board_type_code());
            UNKNOWN
        }
    };

    RevisionRecord {
        board_type: board_type.to_string(),
        connector_revision: CONNECTOR_REVISIONS[rev.connector_code()],
        manufacturer: MANUFACTURERS[rev.manufacturer_code()].to_string(),
        processor: PROCESSORS[rev.processor_code()].to_string(),
        ram: RAM_SIZES[rev.ram_code()].to_string(),
        raw_revision: format!("{:x}", rev),
    }
}

// Decode a revision string as printed in /proc/cpuinfo
pub fn decode_revision_str(revision: &str) -> RevisionRecord {
    let bytes = revision.as_bytes();
    let len = bytes.len();

    if len >= 6 && hex_digit_value(bytes[len - 6]) & 8 != 0 {
        decode_positional(revision)
    } else {
        decode_legacy(revision)
    }
}

// Six or more hex digits, fields picked by position from the end
fn decode_positional(revision: &str) -> RevisionRecord {
    let bytes = revision.as_bytes();
    let len = bytes.len();

    let (board_type, connector_revision) = match bytes[len - 2] {
        b'0' => ("Model A", 2),
        b'1' => ("Model B", 2),
        b'2' => ("Model A+", 3),
        b'3' => ("Model B+", 3),
        b'4' => ("Pi 2 Model B", 3),
        b'5' => ("Alpha", 3),
        b'6' => ("Compute", 0),
        b'8' => ("Pi 3 Model B", 3),
        b'9' => ("Zero", 3),
        _ => (UNKNOWN, 3),
    };

    let processor = match bytes[len - 4] {
        b'0' => "BCM2835",
        b'1' => "BCM2836",
        b'2' => "BCM2837",
        _ => UNKNOWN,
    };

    let manufacturer = match bytes[len - 5] {
        b'0' => "Sony",
        b'1' => "Egoman",
        b'2' | b'4' => "Embest",
        _ => UNKNOWN,
    };

    let ram = match hex_digit_value(bytes[len - 6]) & 7 {
        0 => "256M",
        1 => "512M",
        2 => "1024M",
        _ => UNKNOWN,
    };

    RevisionRecord {
        board_type: board_type.to_string(),
        connector_revision,
        manufacturer: manufacturer.to_string(),
        processor: processor.to_string(),
        ram: ram.to_string(),
        raw_revision: revision.to_string(),
    }
}

// Four digit codes; a leading "1000" marks an overvolted board and is ignored
fn decode_legacy(revision: &str) -> RevisionRecord {
    let bytes = revision.as_bytes();
    let code = if bytes.len() > 4 {
        &bytes[bytes.len() - 4..]
    } else {
        bytes
    };

    match LEGACY_REVISIONS.iter().find(|legacy| legacy.code.as_bytes() == code) {
        Some(legacy) => RevisionRecord {
            board_type: legacy.board_type.to_string(),
            connector_revision: legacy.connector_revision,
            manufacturer: legacy.manufacturer.to_string(),
            processor: LEGACY_PROCESSOR.to_string(),
            ram: legacy.ram.to_string(),
            raw_revision: revision.to_string(),
        },
        None => {
            warn!("Unknown revision code {}, assuming newest connector layout", revision);
            RevisionRecord::unknown(revision)
        }
    }
}

/// Looks up the revision code of a board that only exposes its model name.
pub fn packed_from_model(model: &str) -> Result<u32, DecodeError> {
    KNOWN_MODELS
        .iter()
        .find(|(name, _)| model.contains(*name))
        .map(|(_, rev)| *rev)
        .ok_or_else(|| DecodeError::UnmatchedModelString(model.to_string()))
}

/// Scans cpuinfo for a known `Hardware` line and the last `Revision` value.
///
/// Lines longer than `READ_LIMIT` are scanned in chunks, and bytes that aren't
/// UTF-8 are replaced rather than rejected.
pub fn parse_cpuinfo<R: BufRead>(mut reader: R) -> Result<String, DecodeError> {
    let mut found = false;
    let mut revision = String::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .by_ref()
            .take(READ_LIMIT as u64)
            .read_until(b'\n', &mut buf)
            .map_err(DecodeError::SourceUnavailable)?;
        if read == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);

        if let Some(hardware) = labelled_value(&line, "Hardware") {
            if KNOWN_HARDWARE.iter().any(|known| *known == hardware) {
                debug!("Found hardware {}", hardware);
                found = true;
            }
        }

        if let Some(value) = labelled_value(&line, "Revision") {
            revision = value.to_string();
        }
    }

    if !found {
        return Err(DecodeError::UnrecognizedHardware);
    }

    if revision.is_empty() {
        return Err(DecodeError::EmptyRevisionToken);
    }

    Ok(revision)
}

// First word after "<label> :", with any whitespace around the colon
fn labelled_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label)?
        .trim_start()
        .strip_prefix(':')?
        .split_whitespace()
        .next()
}
