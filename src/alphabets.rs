//! A minimal byte alphabet.
//!
//! spec.md lists the alphabet mapping layer as an external collaborator with a narrow
//! interface: callers declare an alphabet size (at most 256, since a byte is 8 bits) and
//! the algorithms never need anything more specific than membership testing. This module
//! is deliberately thin compared to a bioinformatics alphabets module (no DNA/RNA/protein
//! tables, no complement maps) — those are a different crate's problem.

use bit_set::BitSet;

use crate::error::{Result, StringMatchError};

/// A set of byte symbols, with at most 256 members.
#[derive(Clone, Debug, Default)]
pub struct Alphabet {
    symbols: BitSet,
}

impl Alphabet {
    /// Build an alphabet from the distinct bytes of `symbols`.
    pub fn new<T: IntoIterator<Item = u8>>(symbols: T) -> Self {
        let mut s = BitSet::with_capacity(256);
        s.extend(symbols.into_iter().map(|b| b as usize));
        Alphabet { symbols: s }
    }

    /// Derive the alphabet actually used by a sequence.
    pub fn from_sequence(text: &[u8]) -> Self {
        Alphabet::new(text.iter().copied())
    }

    /// Insert a symbol.
    pub fn insert(&mut self, symbol: u8) {
        self.symbols.insert(symbol as usize);
    }

    /// Whether `symbol` belongs to this alphabet.
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(symbol as usize)
    }

    /// Whether every byte of `text` belongs to this alphabet.
    pub fn is_word(&self, text: &[u8]) -> bool {
        text.iter().all(|&b| self.contains(b))
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Validate a declared alphabet size against spec.md's "at most 256" bound.
    pub fn check_size(size: usize) -> Result<()> {
        if size == 0 || size > 256 {
            Err(StringMatchError::invalid_argument(format!(
                "unsupported alphabet size {}",
                size
            )))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        let alphabet = Alphabet::new(b"ACGT".iter().copied());
        assert!(alphabet.is_word(b"GATTACA"));
        assert!(!alphabet.is_word(b"GATX"));
        assert_eq!(alphabet.len(), 4);
    }

    #[test]
    fn rejects_oversized_alphabet() {
        assert!(Alphabet::check_size(0).is_err());
        assert!(Alphabet::check_size(257).is_err());
        assert!(Alphabet::check_size(256).is_ok());
    }
}
