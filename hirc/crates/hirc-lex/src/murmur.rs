//! MurmurHash3, x86 32-bit variant.
//!
//! Usable in const context so the keyword table can hash its spellings at
//! compile time with exactly the function used at runtime.

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

#[inline]
const fn mix_k(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Final avalanche
#[inline]
const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Hash `data` with MurmurHash3_x86_32
///
/// # Examples
///
/// ```
/// use hirc_lex::murmur3_x86_32;
///
/// assert_eq!(murmur3_x86_32(b"test", 0), 0xBA6B_D213);
/// const LET: u32 = murmur3_x86_32(b"let", 0xBEEF);
/// assert_eq!(LET, murmur3_x86_32("let".as_bytes(), 0xBEEF));
/// ```
pub const fn murmur3_x86_32(data: &[u8], seed: u32) -> u32 {
    let len = data.len();
    let blocks = len / 4;
    let mut h = seed;

    let mut i = 0;
    while i < blocks {
        let j = i * 4;
        let k = u32::from_le_bytes([data[j], data[j + 1], data[j + 2], data[j + 3]]);
        h ^= mix_k(k);
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
        i += 1;
    }

    let tail = blocks * 4;
    let rem = len & 3;
    let mut k = 0u32;
    if rem == 3 {
        k ^= (data[tail + 2] as u32) << 16;
    }
    if rem >= 2 {
        k ^= (data[tail + 1] as u32) << 8;
    }
    if rem >= 1 {
        k ^= data[tail] as u32;
        h ^= mix_k(k);
    }

    // The reference algorithm mixes in the length modulo 2^32.
    h ^= len as u32;
    fmix32(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vectors() {
        assert_eq!(murmur3_x86_32(b"", 0), 0);
        assert_eq!(murmur3_x86_32(b"", 1), 0x514E_28B7);
        assert_eq!(murmur3_x86_32(b"test", 0), 0xBA6B_D213);
        assert_eq!(murmur3_x86_32(b"Hello, world!", 1234), 0xFAF6_CDB3);
        assert_eq!(
            murmur3_x86_32(b"The quick brown fox jumps over the lazy dog", 0),
            0x2E4F_F723
        );
    }

    #[test]
    fn test_keyword_seed_values() {
        assert_eq!(murmur3_x86_32(b"let", 0xBEEF), 0xC11E_7FB3);
        assert_eq!(murmur3_x86_32(b"if", 0xBEEF), 0xD6FA_A704);
        assert_eq!(murmur3_x86_32(b"proc", 0xBEEF), 0xB341_6B2B);
    }

    #[test]
    fn test_every_tail_length() {
        // 4, 5, 6 and 7 bytes exercise every tail branch after a full block
        let hashes: Vec<u32> = (4..8)
            .map(|n| murmur3_x86_32(&b"abcdefg"[..n], 0xBEEF))
            .collect();
        for (i, a) in hashes.iter().enumerate() {
            for b in &hashes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_const_matches_runtime() {
        const AT_COMPILE_TIME: u32 = murmur3_x86_32(b"namespace", 0xBEEF);
        let bytes = String::from("namespace").into_bytes();
        assert_eq!(AT_COMPILE_TIME, murmur3_x86_32(&bytes, 0xBEEF));
    }
}
