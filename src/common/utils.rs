/// Upper bound on a single read from a kernel pseudo-file.
pub const READ_LIMIT: usize = 1024;

/// Value of a single hex digit, or 0 for anything that isn't one.
pub fn hex_digit_value(c: u8) -> u32 {
    (c as char).to_digit(16).unwrap_or(0)
}

/// Device tree strings are NUL terminated and sometimes padded.
pub fn device_tree_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_matches(|c: char| c == '\0' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_digits() {
        assert_eq!(hex_digit_value(b'0'), 0);
        assert_eq!(hex_digit_value(b'9'), 9);
        assert_eq!(hex_digit_value(b'a'), 10);
        assert_eq!(hex_digit_value(b'F'), 15);
        assert_eq!(hex_digit_value(b'x'), 0);
    }

    #[test]
    fn strips_nul_terminator() {
        assert_eq!(device_tree_string(b"Raspberry Pi 3 Model B+\0"), "Raspberry Pi 3 Model B+");
        assert_eq!(device_tree_string(b"\0\0"), "");
    }
}
