//! Item recognizer contract.

use crate::error::Result;
use crate::shape::{Line, Shape};

use super::types::Item;

/// A materialized item plus the indices (into the scored shape slice) of the
/// shapes it absorbed.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemMatch {
    pub item: Item,
    pub consumed: Vec<usize>,
}

/// Scores a slice of pending shapes against one item kind.
///
/// A positive `score` also remembers the matched item; `materialized_item`
/// hands it out once. Calling it without a prior positive score fails with
/// `Error::NotFound`.
pub trait ItemRecognizer {
    fn name(&self) -> &'static str;
    fn score(&mut self, shapes: &[Shape]) -> f64;
    fn materialized_item(&mut self) -> Result<ItemMatch>;
}

/// The lines among `shapes`, paired with their index in `shapes`.
pub(crate) fn lines_of(shapes: &[Shape]) -> Vec<(usize, &Line)> {
    shapes
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.as_line().map(|l| (i, l)))
        .collect()
}
