//! Static reference data for new-style revision codes.

pub const BOARD_TYPES: [&str; 16] = [
    "Model A",
    "Model B",
    "Model A+",
    "Model B+",
    "Pi 2",
    "Alpha",
    "CM",
    "Unknown07",
    "Pi 3",
    "Pi Zero",
    "CM3",
    "Unknown11",
    "Pi Zero-W",
    "Pi 3+",
    "Unknown14",
    "Unknown15",
];

pub const CONNECTOR_REVISIONS: [u8; 16] = [2, 2, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 3, 3, 3, 3];

pub const MANUFACTURERS: [&str; 16] = [
    "Sony",
    "Egoman",
    "Embest",
    "Unknown",
    "Embest",
    "Unknown05",
    "Unknown06",
    "Unknown07",
    "Unknown08",
    "Unknown09",
    "Unknown10",
    "Unknown11",
    "Unknown12",
    "Unknown13",
    "Unknown14",
    "Unknown15",
];

pub const RAM_SIZES: [&str; 8] = ["256M", "512M", "1024M", "0M", "0M", "0M", "0M", "0M"];

pub const PROCESSORS: [&str; 16] = [
    "BCM2835",
    "BCM2836",
    "BCM2837",
    "Unknown03",
    "Unknown04",
    "Unknown05",
    "Unknown06",
    "Unknown07",
    "Unknown08",
    "Unknown09",
    "Unknown10",
    "Unknown11",
    "Unknown12",
    "Unknown13",
    "Unknown14",
    "Unknown15",
];

/// `Hardware` values in cpuinfo that identify a Raspberry Pi SoC.
pub const KNOWN_HARDWARE: [&str; 5] = ["BCM2708", "BCM2709", "BCM2835", "BCM2836", "BCM2837"];

/// Device tree models without a `linux,revision` node, and their revision code.
pub const KNOWN_MODELS: [(&str, u32); 1] = [("Raspberry Pi 3 Model B+", 0xa020d3)];

/// Board described by a pre-2014 four digit revision code.
pub struct LegacyRevision {
    pub code: &'static str,
    pub board_type: &'static str,
    pub connector_revision: u8,
    pub ram: &'static str,
    pub manufacturer: &'static str,
}

const fn legacy(
    code: &'static str,
    board_type: &'static str,
    connector_revision: u8,
    ram: &'static str,
    manufacturer: &'static str,
) -> LegacyRevision {
    LegacyRevision { code, board_type, connector_revision, ram, manufacturer }
}

/// All of these boards carry a BCM2835.
pub const LEGACY_PROCESSOR: &str = "BCM2835";

pub const LEGACY_REVISIONS: &[LegacyRevision] = &[
    legacy("0002", "Model B", 1, "256M", "Unknown"),
    legacy("0003", "Model B", 1, "256M", "Unknown"),
    legacy("0004", "Model B", 2, "256M", "Sony"),
    legacy("0005", "Model B", 2, "256M", "Qisda"),
    legacy("0006", "Model B", 2, "256M", "Egoman"),
    legacy("0007", "Model A", 2, "256M", "Egoman"),
    legacy("0008", "Model A", 2, "256M", "Sony"),
    legacy("0009", "Model A", 2, "256M", "Qisda"),
    legacy("000d", "Model B", 2, "512M", "Egoman"),
    legacy("000e", "Model B", 2, "512M", "Sony"),
    legacy("000f", "Model B", 2, "512M", "Qisda"),
    legacy("0010", "Model B+", 3, "512M", "Unknown"),
    legacy("0011", "Compute Module", 0, "512M", "Unknown"),
    legacy("0012", "Model A+", 3, "256M", "Unknown"),
    legacy("0013", "Model B+", 3, "512M", "Unknown"),
    legacy("0014", "Compute Module", 0, "512M", "Unknown"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_full_field_width() {
        assert_eq!(BOARD_TYPES.len(), 16);
        assert_eq!(CONNECTOR_REVISIONS.len(), 1 << 4);
        assert_eq!(MANUFACTURERS.len(), 1 << 4);
        assert_eq!(PROCESSORS.len(), 1 << 4);
        assert_eq!(RAM_SIZES.len(), 1 << 3);
    }

    #[test]
    fn legacy_codes_are_unique() {
        for (i, a) in LEGACY_REVISIONS.iter().enumerate() {
            assert_eq!(a.code.len(), 4);
            for b in &LEGACY_REVISIONS[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }
}
