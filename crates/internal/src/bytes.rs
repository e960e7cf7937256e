//! Byte array helpers
//!
//! Fixed-width framing for little-endian encodings, hash input assembly,
//! and bit extraction for double-and-add.

/// Split `bytes` into the first `at` bytes and the remainder
///
/// If `at` exceeds the input length the whole input is returned as the
/// first half and the remainder is empty.
pub fn split(bytes: &[u8], at: usize) -> (&[u8], &[u8]) {
    bytes.split_at(at.min(bytes.len()))
}

/// Extend `bytes` with trailing zeros up to `length`
///
/// Inputs already at least `length` bytes long are returned unchanged.
pub fn pad_zero_on_tail(bytes: &[u8], length: usize) -> Vec<u8> {
    let mut out = bytes.to_vec();
    if out.len() < length {
        out.resize(length, 0);
    }
    out
}

/// Concatenate several byte slices
pub fn join(parts: &[&[u8]]) -> Vec<u8> {
    let total = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

/// Extract the binary digits of a big-endian unsigned integer
///
/// The result holds one `0` or `1` per element, most significant bit first,
/// with leading zeros stripped. Zero yields an empty vector.
pub fn to_binary_digits(be_bytes: &[u8]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(be_bytes.len() * 8);
    for byte in be_bytes {
        for shift in (0..8).rev() {
            let bit = (byte >> shift) & 1;
            if bit == 0 && digits.is_empty() {
                continue;
            }
            digits.push(bit);
        }
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let data = [0u8, 1, 2, 3, 4, 5];
        let (head, tail) = split(&data, 2);
        assert_eq!(head, &[0, 1]);
        assert_eq!(tail, &[2, 3, 4, 5]);

        let (head, tail) = split(&data, 10);
        assert_eq!(head, &data);
        assert!(tail.is_empty());
    }

    #[test]
    fn test_pad_zero_on_tail() {
        assert_eq!(pad_zero_on_tail(&[7, 8], 4), vec![7, 8, 0, 0]);
        assert_eq!(pad_zero_on_tail(&[7, 8, 9], 2), vec![7, 8, 9]);
    }

    #[test]
    fn test_join() {
        let parts: [&[u8]; 3] = [b"Sig", &[0u8], b"ctx"];
        assert_eq!(join(&parts), b"Sig\x00ctx".to_vec());
        assert!(join(&[]).is_empty());
    }

    #[test]
    fn test_to_binary_digits() {
        assert!(to_binary_digits(&[0, 0]).is_empty());
        assert_eq!(to_binary_digits(&[0x05]), vec![1, 0, 1]);
        assert_eq!(to_binary_digits(&[0x01, 0x00]), vec![1, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            to_binary_digits(&hex::decode("80").unwrap()),
            vec![1, 0, 0, 0, 0, 0, 0, 0]
        );
    }
}
