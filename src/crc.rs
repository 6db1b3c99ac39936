use crc32fast::Hasher;

// CRC32 helpers for record checksums.  Checksums that get embedded in
// files are masked first: computing the CRC of a string that contains
// embedded CRCs is problematic, so stored checksums go through
// mask()/unmask().

const MASK_DELTA: u32 = 0xa282_ead8;

/// Return the crc32 of "data".
pub fn value(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Return the crc32 of the concatenation of A and "data", where
/// "init_crc" is the crc32 of A.
pub fn extend(init_crc: u32, data: &[u8]) -> u32 {
    let mut hasher = Hasher::new_with_initial(init_crc);
    hasher.update(data);
    hasher.finalize()
}

/// Return a masked representation of "crc", suitable for storage.
pub fn mask(crc: u32) -> u32 {
    // 右旋 15 位再加 delta
    ((crc >> 15) | (crc << 17)).wrapping_add(MASK_DELTA)
}

/// Return the crc whose masked representation is "masked_crc".
pub fn unmask(masked_crc: u32) -> u32 {
    let rot = masked_crc.wrapping_sub(MASK_DELTA);
    (rot >> 17) | (rot << 15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_results() {
        // crc32 (IEEE) 的标准校验向量
        assert_eq!(value(b"123456789"), 0xcbf43926);
        assert_eq!(value(b""), 0);
    }

    #[test]
    fn test_values_differ() {
        assert_ne!(value(b"a"), value(b"foo"));
    }

    #[test]
    fn test_extend() {
        assert_eq!(value(b"hello world"), extend(value(b"hello "), b"world"));
        // 从空串扩展等价于直接计算
        assert_eq!(value(b"abc"), extend(value(b""), b"abc"));
    }

    #[test]
    fn test_mask() {
        let crc = value(b"foo");
        assert_ne!(crc, mask(crc));
        assert_ne!(crc, mask(mask(crc)));
        assert_eq!(crc, unmask(mask(crc)));
        assert_eq!(crc, unmask(unmask(mask(mask(crc)))));
    }
}
