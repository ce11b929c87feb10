//! The suffix-tree-based repeats toolkit (C10-C16): Lempel-Ziv decomposition, primitive
//! tandem repeats, nonoverlapping maximal pairs (direct and suffix-tree-accelerated),
//! branching tandem repeats/arrays, the assembled repeat vocabulary, and supermaximal
//! repeats.
//!
//! Every finder here yields [`record::Repeat`] values rather than printing as it discovers
//! them (spec.md §9's redesign flag: "decouple... algorithms should yield records; a
//! separate formatter renders them"). [`record::Repeat::display`] renders a record against
//! the original sequence.
//!
//! C11 ([`primitives`]) and C12 ([`nonoverlapping`]) are, per spec.md §4.11/§4.12, defined
//! directly over the string and take `text` alone; every other component here consumes a
//! [`crate::data_structures::suffix_tree::SuffixTree`], matching spec.md §2's "Repeat
//! engines... consume a pre-built suffix tree".

pub mod bigpath;
pub mod lz;
pub mod nonoverlapping;
pub mod primitives;
pub mod record;
pub mod supermax;
pub mod tandem;
pub mod vocabulary;

pub use record::{Repeat, RepeatKind};
