//! 0/1 knapsack by bottom-up tabulation.
//!
//! Given a weight capacity and a list of items, each with a value and a
//! weight, choose the subset with the greatest total value whose total weight
//! fits the capacity. Every item is used at most once.
//!
//! # Algorithm
//!
//! A table with one row per item prefix and one column per weight
//! `0..=capacity` holds the best value reachable with that prefix and weight
//! budget. Row `r` is filled from row `r - 1` only. An item is taken only when
//! taking it is strictly better than leaving it, so on a tie the cell copies
//! the row above. That property lets the chosen subset be recovered by walking
//! back from the last cell: a row whose value differs from the row above must
//! have taken its item.
//!
//! # Complexity
//!
//! O(n · W) time and space, for `n` items and capacity `W`.

use crate::error::{Error, Result};

const OPERATION: &str = "knapsack";

/// An item that may be packed.
///
/// # Examples
///
/// ```rust
/// use ordkit::dynamic_programming::Item;
///
/// let item = Item::new(60, 10);
/// assert_eq!(item.value, 60);
/// assert_eq!(item.weight, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// What the item is worth.
    pub value: u64,
    /// How much capacity the item uses.
    pub weight: usize,
}

impl Item {
    /// Creates an item.
    #[inline]
    #[must_use]
    pub const fn new(value: u64, weight: usize) -> Self {
        Self { value, weight }
    }
}

impl From<(u64, usize)> for Item {
    #[inline]
    fn from((value, weight): (u64, usize)) -> Self {
        Self::new(value, weight)
    }
}

/// The subset chosen by [`knapsack`].
///
/// With the `serde` feature a deserialized selection is checked: `indices`
/// must be strictly ascending and as long as `items`, and both totals must
/// equal the sums over `items`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SelectionRecord"))]
pub struct Selection {
    indices: Vec<usize>,
    items: Vec<Item>,
    total_value: u64,
    total_weight: usize,
}

impl Selection {
    /// The chosen items, in input order.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Positions of the chosen items in the input, ascending.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Sum of the chosen items' values.
    #[inline]
    #[must_use]
    pub const fn total_value(&self) -> u64 {
        self.total_value
    }

    /// Sum of the chosen items' weights. Never exceeds the capacity.
    #[inline]
    #[must_use]
    pub const fn total_weight(&self) -> usize {
        self.total_weight
    }

    /// Number of chosen items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing was chosen.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the selection, returning the chosen items.
    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

/// Unchecked wire form of a [`Selection`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SelectionRecord {
    indices: Vec<usize>,
    items: Vec<Item>,
    total_value: u64,
    total_weight: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<SelectionRecord> for Selection {
    type Error = Error;

    fn try_from(record: SelectionRecord) -> Result<Self> {
        let inconsistent = |reason: &str| Error::InvalidArgument {
            operation: "Selection::deserialize",
            argument: "selection",
            reason: reason.to_string(),
        };

        if record.indices.len() != record.items.len() {
            return Err(inconsistent("indices and items differ in length"));
        }
        if !record.indices.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(inconsistent("indices are not strictly ascending"));
        }

        let total_value = record
            .items
            .iter()
            .try_fold(0_u64, |total, item| total.checked_add(item.value))
            .ok_or_else(|| inconsistent("total value overflows u64"))?;
        let total_weight = record
            .items
            .iter()
            .try_fold(0_usize, |total, item| total.checked_add(item.weight))
            .ok_or_else(|| inconsistent("total weight overflows usize"))?;

        if total_value != record.total_value {
            return Err(inconsistent("total_value does not match the items"));
        }
        if total_weight != record.total_weight {
            return Err(inconsistent("total_weight does not match the items"));
        }

        Ok(Self {
            indices: record.indices,
            items: record.items,
            total_value,
            total_weight,
        })
    }
}

/// Chooses the most valuable subset of `items` whose total weight is at most
/// `capacity`.
///
/// When including an item would only tie with leaving it out, the item is left
/// out. Zero-value items are therefore never chosen, and among several optimal
/// subsets the one favouring earlier items is returned.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the table of
/// `items.len() × (capacity + 1)` cells cannot be counted in `usize`, is
/// larger than the maximum allocation size, or cannot be allocated. The same
/// error is returned if a running value total overflows `u64`.
///
/// # Examples
///
/// ```rust
/// use ordkit::dynamic_programming::{Item, knapsack};
///
/// let items = [Item::new(9, 9), Item::new(5, 5), Item::new(5, 5), Item::new(9, 9)];
/// let selection = knapsack(10, &items).unwrap();
///
/// assert_eq!(selection.total_value(), 10);
/// assert_eq!(selection.indices(), &[1, 2]);
/// assert_eq!(selection.items(), &[Item::new(5, 5), Item::new(5, 5)]);
/// ```
pub fn knapsack(capacity: usize, items: &[Item]) -> Result<Selection> {
    let columns = capacity.checked_add(1).ok_or_else(|| Error::InvalidArgument {
        operation: OPERATION,
        argument: "capacity",
        reason: format!("capacity {capacity} is too large to tabulate"),
    })?;
    let cells = columns
        .checked_mul(items.len())
        .ok_or_else(|| Error::InvalidArgument {
            operation: OPERATION,
            argument: "capacity",
            reason: format!(
                "a table of {} items by {columns} weights has more cells than usize can count",
                items.len()
            ),
        })?;

    tracing::trace!(items = items.len(), capacity, cells, "knapsack");

    if items.is_empty() {
        return Ok(Selection::default());
    }

    let table = fill_table(items, columns, cells)?;
    Ok(walk_back(items, &table, columns, capacity))
}

/// Allocates a zeroed table of `cells` values, failing instead of aborting
/// when the allocator cannot provide it.
fn allocate_table(cells: usize) -> Result<Vec<u64>> {
    let too_large = |reason: String| Error::InvalidArgument {
        operation: OPERATION,
        argument: "capacity",
        reason,
    };

    let bytes = cells
        .checked_mul(std::mem::size_of::<u64>())
        .filter(|&bytes| isize::try_from(bytes).is_ok())
        .ok_or_else(|| {
            too_large(format!("a table of {cells} cells exceeds the maximum allocation size"))
        })?;

    let mut table = Vec::new();
    table.try_reserve_exact(cells).map_err(|error| {
        too_large(format!(
            "a table of {bytes} bytes could not be allocated: {error}"
        ))
    })?;
    table.resize(cells, 0_u64);
    Ok(table)
}

/// Fills the row-major table of best values.
fn fill_table(items: &[Item], columns: usize, cells: usize) -> Result<Vec<u64>> {
    let mut table = allocate_table(cells)?;

    for (row, item) in items.iter().enumerate() {
        let (previous_rows, current_rows) = table.split_at_mut(row * columns);
        let previous = (row > 0).then(|| &previous_rows[(row - 1) * columns..]);
        let current = &mut current_rows[..columns];

        for (weight, cell) in current.iter_mut().enumerate() {
            let above = |column: usize| previous.map_or(0, |row_above| row_above[column]);
            let excluded = above(weight);

            *cell = if item.weight > weight {
                excluded
            } else {
                let included = above(weight - item.weight)
                    .checked_add(item.value)
                    .ok_or_else(|| Error::InvalidArgument {
                        operation: OPERATION,
                        argument: "items",
                        reason: "total value overflows u64".to_string(),
                    })?;
                if included > excluded { included } else { excluded }
            };
        }
    }

    Ok(table)
}

/// Recovers the chosen items from a filled table.
fn walk_back(items: &[Item], table: &[u64], columns: usize, capacity: usize) -> Selection {
    let mut indices = Vec::new();
    let mut weight = capacity;

    for row in (0..items.len()).rev() {
        let here = table[row * columns + weight];
        let above = if row == 0 {
            0
        } else {
            table[(row - 1) * columns + weight]
        };
        if here != above {
            indices.push(row);
            weight -= items[row].weight;
        }
    }
    indices.reverse();

    let chosen: Vec<Item> = indices.iter().map(|&index| items[index]).collect();
    Selection {
        total_value: table[(items.len() - 1) * columns + capacity],
        total_weight: chosen.iter().map(|item| item.weight).sum(),
        indices,
        items: chosen,
    }
}
