//! Import block parsing, classification, and canonical formatting.
//!
//! The model round-trips through [`ImportBlock::parse`] and
//! [`format_block`]; formatting an already-canonical block reproduces it
//! byte for byte.

mod block;
mod format;
mod group;
mod stdlib;

pub use block::ImportBlock;
pub use format::format_block;
pub use group::{Classifier, Group};

#[cfg(test)]
mod format_proptests;
