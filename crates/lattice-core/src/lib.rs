//! Incremental N-best lattice decoding for kana-to-kanji conversion.

pub mod converter;
pub mod dict;
pub mod settings;
