//! Compile-time keyword recognizer.
//!
//! Every [`TOKEN_TABLE`] row carrying the `KEYWORD` flag is hashed with
//! [`murmur3_x86_32`] during const evaluation, and the entries are sorted by
//! hash. Identifier scanning then costs one hash and a binary search. The
//! build fails if two keywords share a hash or a keyword outgrows
//! [`MAX_KEYWORD_LEN`].

use crate::murmur::murmur3_x86_32;
use crate::token::{TokenCategory, TokenType, TOKEN_TABLE};

/// Longest keyword spelling, in bytes
pub const MAX_KEYWORD_LEN: usize = 15;

/// Seed used for every keyword hash
pub const KEYWORD_SEED: u32 = 0xBEEF;

/// A keyword and its precomputed hash
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordEntry {
    pub hash: u32,
    pub spelling: &'static str,
    pub ty: TokenType,
    pub category: TokenCategory,
}

const fn keyword_count() -> usize {
    let mut n = 0;
    let mut i = 0;
    while i < TOKEN_TABLE.len() {
        if TOKEN_TABLE[i].category.contains(TokenCategory::KEYWORD) {
            n += 1;
        }
        i += 1;
    }
    n
}

const KEYWORD_COUNT: usize = keyword_count();

const fn build() -> [KeywordEntry; KEYWORD_COUNT] {
    let blank = KeywordEntry {
        hash: 0,
        spelling: "",
        ty: TokenType::Illegal,
        category: TokenCategory::NON_CATEGORICAL,
    };
    let mut entries = [blank; KEYWORD_COUNT];

    let mut n = 0;
    let mut i = 0;
    while i < TOKEN_TABLE.len() {
        let info = TOKEN_TABLE[i];
        if info.category.contains(TokenCategory::KEYWORD) {
            assert!(
                info.spelling.len() <= MAX_KEYWORD_LEN,
                "keyword longer than MAX_KEYWORD_LEN"
            );
            entries[n] = KeywordEntry {
                hash: murmur3_x86_32(info.spelling.as_bytes(), KEYWORD_SEED),
                spelling: info.spelling,
                ty: info.ty,
                category: info.category,
            };
            n += 1;
        }
        i += 1;
    }

    // insertion sort on the hash column
    let mut i = 1;
    while i < KEYWORD_COUNT {
        let mut j = i;
        while j > 0 && entries[j - 1].hash > entries[j].hash {
            let tmp = entries[j];
            entries[j] = entries[j - 1];
            entries[j - 1] = tmp;
            j -= 1;
        }
        i += 1;
    }

    let mut i = 1;
    while i < KEYWORD_COUNT {
        assert!(
            entries[i - 1].hash != entries[i].hash,
            "two keywords share a murmur3 hash under KEYWORD_SEED"
        );
        i += 1;
    }

    entries
}

/// Hash-sorted keyword entries
pub struct KeywordTable {
    entries: [KeywordEntry; KEYWORD_COUNT],
}

/// The keyword table for the HIR language
pub static KEYWORDS: KeywordTable = KeywordTable { entries: build() };

impl KeywordTable {
    /// Look up a candidate identifier
    ///
    /// Candidates longer than [`MAX_KEYWORD_LEN`] are rejected before
    /// hashing. Keywords are only distinct from each other under
    /// [`KEYWORD_SEED`]; arbitrary identifiers can still share a keyword's
    /// hash (`aaawRZY6` hashes like `let`), so a hit is confirmed against the
    /// stored spelling.
    ///
    /// # Examples
    ///
    /// ```
    /// use hirc_lex::{TokenType, KEYWORDS};
    ///
    /// assert_eq!(KEYWORDS.get(b"return").map(|k| k.ty), Some(TokenType::Return));
    /// assert!(KEYWORDS.get(b"returns").is_none());
    /// ```
    pub fn get(&self, candidate: &[u8]) -> Option<&KeywordEntry> {
        if candidate.len() > MAX_KEYWORD_LEN {
            return None;
        }
        let hash = murmur3_x86_32(candidate, KEYWORD_SEED);
        let idx = self
            .entries
            .binary_search_by_key(&hash, |entry| entry.hash)
            .ok()?;
        let entry = &self.entries[idx];
        (entry.spelling.as_bytes() == candidate).then_some(entry)
    }

    /// Entries in ascending hash order
    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table_holds_every_keyword_row() {
        let rows = TOKEN_TABLE
            .iter()
            .filter(|info| info.category.contains(TokenCategory::KEYWORD))
            .count();
        assert_eq!(KEYWORDS.len(), rows);
        assert_eq!(KEYWORDS.len(), 24);
        assert!(!KEYWORDS.is_empty());
    }

    #[test]
    fn test_hashes_are_distinct_and_sorted() {
        let hashes: Vec<u32> = KEYWORDS.entries().iter().map(|e| e.hash).collect();
        assert!(hashes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_stored_hashes_match_runtime_hash() {
        for entry in KEYWORDS.entries() {
            assert_eq!(entry.hash, murmur3_x86_32(entry.spelling.as_bytes(), KEYWORD_SEED));
            assert!(entry.spelling.len() <= MAX_KEYWORD_LEN);
        }
    }

    #[test]
    fn test_every_keyword_resolves_to_its_row() {
        for entry in KEYWORDS.entries() {
            let found = KEYWORDS.get(entry.spelling.as_bytes()).unwrap();
            assert_eq!(found.ty, entry.ty);
            assert_eq!(found.category, entry.ty.category());
            assert_eq!(TokenType::from_keyword(entry.spelling), Some(entry.ty));
            assert_eq!(TokenCategory::from_keyword(entry.spelling), Some(entry.category));
        }
    }

    #[test]
    fn test_near_misses_are_not_keywords() {
        for word in ["If", "IF", "lets", "le", "procs", "nul", "truee", "_let", "sizeOf"] {
            assert!(KEYWORDS.get(word.as_bytes()).is_none(), "{word}");
        }
    }

    #[test]
    fn test_hash_collision_is_not_a_keyword() {
        assert_eq!(
            murmur3_x86_32(b"aaawRZY6", KEYWORD_SEED),
            murmur3_x86_32(b"let", KEYWORD_SEED)
        );
        assert!(KEYWORDS.get(b"aaawRZY6").is_none());
        assert!(TokenType::from_keyword("aaawRZY6").is_none());
        assert_eq!(KEYWORDS.get(b"let").map(|k| k.ty), Some(TokenType::Let));
    }

    #[test]
    fn test_length_guard() {
        // 15 bytes is still hashed; 16 is rejected before hashing
        assert!(KEYWORDS.get(b"namespacenamesp").is_none());
        assert!(KEYWORDS.get(b"continuecontinue").is_none());
        assert!(TokenType::from_keyword("a".repeat(MAX_KEYWORD_LEN + 1)).is_none());
    }

    proptest! {
        #[test]
        fn prop_non_keywords_are_absent(word in "[a-z_][a-z0-9_]{0,20}") {
            let is_keyword = KEYWORDS.entries().iter().any(|e| e.spelling == word);
            prop_assert_eq!(TokenType::from_keyword(&word).is_some(), is_keyword);
            prop_assert_eq!(TokenCategory::from_keyword(&word).is_some(), is_keyword);
        }

        #[test]
        fn prop_long_candidates_are_absent(word in "[a-z]{16,64}") {
            prop_assert!(KEYWORDS.get(word.as_bytes()).is_none());
        }
    }
}
