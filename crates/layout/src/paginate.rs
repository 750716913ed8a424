//! Distribution of line items over the primary sheet and continuation sheets.
//!
//! The primary sheet carries the first item. The rest are chunked into
//! continuation sheets of `capacity` items each, in declared order. There is
//! no upper bound on the number of sheets.

/// Items per continuation sheet on the standard form.
pub const DEFAULT_PAGE_CAPACITY: usize = 3;

/// One continuation sheet and the items it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuationPage<'a, T> {
    /// 1-based position in the document; the primary sheet is 1.
    pub sheet_number: usize,
    /// 1-based ordinal of the first item on this sheet within the declaration.
    pub first_ordinal: usize,
    pub items: &'a [T],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pagination<'a, T> {
    pub first: Option<&'a T>,
    pub continuation_pages: Vec<ContinuationPage<'a, T>>,
}

impl<T> Pagination<'_, T> {
    /// Total sheets including the primary one.
    pub fn sheet_count(&self) -> usize {
        1 + self.continuation_pages.len()
    }
}

/// Number of continuation sheets needed for `item_count` items.
pub fn continuation_page_count(item_count: usize, capacity: usize) -> usize {
    item_count.saturating_sub(1).div_ceil(capacity.max(1))
}

/// Splits `items` across sheets. A capacity of 0 is treated as 1.
pub fn paginate<T>(items: &[T], capacity: usize) -> Pagination<'_, T> {
    let capacity = capacity.max(1);
    let Some((first, rest)) = items.split_first() else {
        return Pagination {
            first: None,
            continuation_pages: Vec::new(),
        };
    };

    let continuation_pages = rest
        .chunks(capacity)
        .enumerate()
        .map(|(index, chunk)| ContinuationPage {
            sheet_number: index + 2,
            first_ordinal: 2 + index * capacity,
            items: chunk,
        })
        .collect();

    Pagination {
        first: Some(first),
        continuation_pages,
    }
}
