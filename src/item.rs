//! Items and the sorted item sequence consumed by the table builder.
//!
//! The recurrence processes items in non-decreasing weight order, so every
//! row's "too heavy" band is computed the same way. Pairs are ordered
//! lexicographically by `(weight, value)`; exact duplicates keep the order in
//! which the caller supplied them.

use crate::error::{InvalidInput, Result};

/// A single (weight, value) pair. Weight is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    weight: u64,
    value: u64,
}

impl Item {
    /// A zero weight is rejected as [`InvalidInput::NonPositiveWeight`] at
    /// index 0, the item's position when taken on its own.
    pub fn new(weight: u64, value: u64) -> Result<Self> {
        if weight == 0 {
            return Err(InvalidInput::NonPositiveWeight {
                index: 0,
                weight: 0,
            }
            .into());
        }
        Ok(Self { weight, value })
    }

    #[inline]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Items sorted ascending by weight, then by value.
///
/// `origins[k]` is the caller's index of the item stored at sorted position
/// `k`, so selections can be reported against the original input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSequence {
    items: Vec<Item>,
    origins: Vec<usize>,
}

impl ItemSequence {
    /// Sort already-validated items.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        let mut indexed: Vec<(usize, Item)> = items.into_iter().enumerate().collect();
        // Stable: exact duplicates stay in input order.
        indexed.sort_by_key(|&(_, item)| item);
        let (origins, items) = indexed.into_iter().unzip();
        Self { items, origins }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Original input index of the item at sorted `position`.
    pub fn origin(&self, position: usize) -> Option<usize> {
        self.origins.get(position).copied()
    }

    pub fn total_value(&self) -> u128 {
        self.items.iter().map(|item| item.value as u128).sum()
    }
}

impl<'a> IntoIterator for &'a ItemSequence {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Pair `weights[i]` with `values[i]` and sort the pairs.
///
/// Fails when the slices differ in length, when a weight is not positive or
/// when a value is negative. An empty input yields an empty sequence.
pub fn build_sequence(weights: &[i64], values: &[i64]) -> Result<ItemSequence> {
    if weights.len() != values.len() {
        return Err(InvalidInput::LengthMismatch {
            weights: weights.len(),
            values: values.len(),
        }
        .into());
    }

    let mut items = Vec::with_capacity(weights.len());
    for (index, (&weight, &value)) in weights.iter().zip(values).enumerate() {
        if weight <= 0 {
            return Err(InvalidInput::NonPositiveWeight { index, weight }.into());
        }
        if value < 0 {
            return Err(InvalidInput::NegativeValue { index, value }.into());
        }
        items.push(Item {
            weight: weight as u64,
            value: value as u64,
        });
    }

    Ok(ItemSequence::from_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnapsackError;

    fn pairs(seq: &ItemSequence) -> Vec<(u64, u64)> {
        seq.iter().map(|i| (i.weight(), i.value())).collect()
    }

    #[test]
    fn sorts_by_weight_then_value() {
        let seq = build_sequence(&[5, 1, 5, 3], &[7, 9, 3, 1]).unwrap();
        assert_eq!(pairs(&seq), vec![(1, 9), (3, 1), (5, 3), (5, 7)]);
        assert_eq!(seq.origin(0), Some(1));
        assert_eq!(seq.origin(2), Some(2));
        assert_eq!(seq.origin(3), Some(0));
    }

    #[test]
    fn exact_duplicates_keep_input_order() {
        let seq = build_sequence(&[4, 4, 4], &[2, 2, 2]).unwrap();
        let origins: Vec<_> = (0..3).filter_map(|k| seq.origin(k)).collect();
        assert_eq!(origins, vec![0, 1, 2]);
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        let seq = build_sequence(&[], &[]).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.origin(0), None);
    }

    #[test]
    fn rejects_contract_violations() {
        let err = build_sequence(&[1, 2], &[1]).unwrap_err();
        assert!(matches!(
            err,
            KnapsackError::InvalidInput(InvalidInput::LengthMismatch {
                weights: 2,
                values: 1
            })
        ));

        let err = build_sequence(&[3, 0], &[1, 1]).unwrap_err();
        assert!(matches!(
            err,
            KnapsackError::InvalidInput(InvalidInput::NonPositiveWeight {
                index: 1,
                weight: 0
            })
        ));

        let err = build_sequence(&[-2], &[1]).unwrap_err();
        assert!(err.is_input_error());

        let err = build_sequence(&[2], &[-1]).unwrap_err();
        assert!(matches!(
            err,
            KnapsackError::InvalidInput(InvalidInput::NegativeValue { index: 0, value: -1 })
        ));
    }

    #[test]
    fn item_new_rejects_zero_weight() {
        let err = Item::new(0, 4).unwrap_err();
        assert!(matches!(
            err,
            KnapsackError::InvalidInput(InvalidInput::NonPositiveWeight {
                index: 0,
                weight: 0
            })
        ));
        assert_eq!(Item::new(2, 0).unwrap().weight(), 2);
    }
}
