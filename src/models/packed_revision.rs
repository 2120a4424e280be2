use std::fmt;

/// New-style revision code.
///
/// ```text
/// [WARRANTY:2] ... [NEW:1] [MEMSIZE:3] [MANUFACTURER:4] [PROCESSOR:4] [TYPE:8] [REV:4]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedRevision(pub u32);

impl PackedRevision {
    const NEW_SCHEME: u32 = 1 << 23;

    pub fn is_new_scheme(&self) -> bool {
        self.0 & Self::NEW_SCHEME != 0
    }

    pub fn connector_code(&self) -> usize {
        (self.0 & 0x0F) as usize
    }

    pub fn board_type_code(&self) -> usize {
        ((self.0 >> 4) & 0xFF) as usize
    }

    pub fn processor_code(&self) -> usize {
        ((self.0 >> 12) & 0x0F) as usize
    }

    pub fn manufacturer_code(&self) -> usize {
        ((self.0 >> 16) & 0x0F) as usize
    }

    pub fn ram_code(&self) -> usize {
        ((self.0 >> 20) & 0x07) as usize
    }

    /// Set once the board has been overclocked or overvolted past the allowed limits.
    pub fn warranty_void(&self) -> bool {
        self.0 & (0x03 << 24) != 0
    }
}

impl From<u32> for PackedRevision {
    fn from(value: u32) -> Self {
        PackedRevision(value)
    }
}

impl fmt::LowerHex for PackedRevision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_pi_2_reference_code() {
        let rev = PackedRevision(0xa01040);
        assert!(rev.is_new_scheme());
        assert_eq!(rev.connector_code(), 0);
        assert_eq!(rev.board_type_code(), 4);
        assert_eq!(rev.processor_code(), 1);
        assert_eq!(rev.manufacturer_code(), 0);
        assert_eq!(rev.ram_code(), 2);
        assert!(!rev.warranty_void());
    }

    #[test]
    fn fields_do_not_overlap() {
        let rev = PackedRevision(1 << 23 | 5 << 20 | 0xc << 16 | 0x9 << 12 | 0xab << 4 | 0x7);
        assert_eq!(rev.connector_code(), 0x7);
        assert_eq!(rev.board_type_code(), 0xab);
        assert_eq!(rev.processor_code(), 0x9);
        assert_eq!(rev.manufacturer_code(), 0xc);
        assert_eq!(rev.ram_code(), 5);
    }

    #[test]
    fn warranty_bits() {
        assert!(PackedRevision(0x2a020d3).warranty_void());
        assert!(PackedRevision(0x1a020d3).warranty_void());
        assert!(!PackedRevision(0xa020d3).warranty_void());
    }

    #[test]
    fn old_scheme_bit_clear() {
        assert!(!PackedRevision::from(0x000e).is_new_scheme());
        assert_eq!(format!("{:x}", PackedRevision(0xa020d3)), "a020d3");
    }
}
