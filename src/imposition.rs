//! A6-on-A4 booklet imposition calculations.
//!
//! Imposition is the process of arranging pages on physical sheets so they appear
//! in the correct order after printing, cutting, and folding. This module handles
//! one fixed scheme: four A6 pages are printed on each side of an A4 sheet, the
//! printed stack is cut horizontally, the top halves are put into the centre of
//! the bottom halves, and the resulting stack is folded vertically.
//!
//! The calculation runs in four stages:
//! 1. number the A4 sheets sequentially, 8 pages per sheet
//! 2. virtually cut each sheet into a top and a bottom half
//! 3. walk the half sheets up the stack and back down to get the *book order*
//! 4. invert the book order to get the *print order* fed to `pdftk`

use crate::error::{BookletError, Result};
use std::fmt;

/// Number of A6 pages carried by one A4 sheet (4 on the front, 4 on the back)
pub const PAGES_PER_SHEET: usize = 8;

/// One physical A4 sheet, with page slots numbered left-to-right, top-to-bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargeSheet {
    pub front: [usize; 4],
    pub back: [usize; 4],
}

impl LargeSheet {
    pub fn top_half(&self) -> HalfSheet {
        HalfSheet {
            front: [self.front[0], self.front[1]],
            back: [self.back[0], self.back[1]],
        }
    }

    pub fn bottom_half(&self) -> HalfSheet {
        HalfSheet {
            front: [self.front[2], self.front[3]],
            back: [self.back[2], self.back[3]],
        }
    }
}

/// An A4 sheet after the horizontal cut: an A5 strip with two A6 pages per side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfSheet {
    pub front: [usize; 2],
    pub back: [usize; 2],
}

impl fmt::Display for HalfSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "front {:?} back {:?}", self.front, self.back)
    }
}

/// Input page numbers in the order they are read in the folded booklet.
///
/// Position `i` holds the input page that ends up as the `i`th page of the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookOrder(Vec<usize>);

/// For each input page `p`, the 1-based position it must be printed at (`self[p - 1]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOrder(Vec<usize>);

impl BookOrder {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Calculate the print order this book order implies.
    pub fn invert(&self) -> Result<PrintOrder> {
        invert_permutation(&self.0).map(PrintOrder)
    }
}

impl PrintOrder {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recover the book order this print order was derived from.
    pub fn invert(&self) -> Result<BookOrder> {
        invert_permutation(&self.0).map(BookOrder)
    }
}

impl From<Vec<usize>> for BookOrder {
    fn from(pages: Vec<usize>) -> Self {
        BookOrder(pages)
    }
}

impl From<Vec<usize>> for PrintOrder {
    fn from(positions: Vec<usize>) -> Self {
        PrintOrder(positions)
    }
}

impl fmt::Display for PrintOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Check that `page_count` is a positive multiple of [`PAGES_PER_SHEET`].
pub fn validate_page_count(page_count: i64) -> Result<usize> {
    match usize::try_from(page_count) {
        Ok(count) if count > 0 && count % PAGES_PER_SHEET == 0 => Ok(count),
        _ => Err(BookletError::InvalidPageCount(page_count)),
    }
}

/// Number the physical A4 sheets.
///
/// Pages are assigned from a single running counter: sheet 0 gets pages 1-4 on
/// the front and 5-8 on the back, sheet 1 gets 9-12 and 13-16, and so on.
pub fn number_sheets(page_count: i64) -> Result<Vec<LargeSheet>> {
    let page_count = validate_page_count(page_count)?;
    let sheet_count = page_count / PAGES_PER_SHEET;

    let mut sheets = Vec::with_capacity(sheet_count);
    let mut next_page = 1;
    for _ in 0..sheet_count {
        let front = std::array::from_fn(|slot| next_page + slot);
        next_page += 4;
        let back = std::array::from_fn(|slot| next_page + slot);
        next_page += 4;
        sheets.push(LargeSheet { front, back });
    }

    Ok(sheets)
}

/// Virtually cut every sheet in half horizontally.
///
/// The returned stack holds the top halves of all sheets (in sheet order)
/// followed by the bottom halves (in sheet order), which is the stack you get by
/// putting the top halves into the centre of the bottom halves and laying it
/// open.
pub fn split_sheets(sheets: &[LargeSheet]) -> Vec<HalfSheet> {
    let top = sheets.iter().map(LargeSheet::top_half);
    let bottom = sheets.iter().map(LargeSheet::bottom_half);
    top.chain(bottom).collect()
}

/// Read the half-sheet stack as a folded booklet.
///
/// The first half of the book is the left-hand pages of the stack going up
/// (back right, then front left of each half sheet); the second half is the
/// right-hand pages going back down (front right, then back left).
pub fn assemble_book_order(half_sheets: &[HalfSheet]) -> BookOrder {
    let mut pages = Vec::with_capacity(half_sheets.len() * 4);

    // left pages, going up
    for half in half_sheets.iter() {
        pages.push(half.back[1]);
        pages.push(half.front[0]);
    }

    // right pages, going down
    for half in half_sheets.iter().rev() {
        pages.push(half.front[1]);
        pages.push(half.back[0]);
    }

    BookOrder(pages)
}

/// Invert a 1-based permutation: `order[i] == p` becomes `inverse[p - 1] == i + 1`.
fn invert_permutation(order: &[usize]) -> Result<Vec<usize>> {
    let mut inverse = vec![0; order.len()];
    for (index, &value) in order.iter().enumerate() {
        if value == 0 || value > order.len() {
            return Err(BookletError::MalformedPermutation {
                position: index + 1,
                value,
                reason: "is out of range",
            });
        }

        let slot = &mut inverse[value - 1];
        if *slot != 0 {
            return Err(BookletError::MalformedPermutation {
                position: index + 1,
                value,
                reason: "is a duplicate",
            });
        }
        *slot = index + 1;
    }
    Ok(inverse)
}

/// Every intermediate product of a booklet calculation.
#[derive(Debug, Clone)]
pub struct BookletLayout {
    pub sheets: Vec<LargeSheet>,
    pub half_sheets: Vec<HalfSheet>,
    pub book_order: BookOrder,
    pub print_order: PrintOrder,
}

impl BookletLayout {
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

/// Calculates the print order for a booklet of a validated page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookletOrderCalculator {
    page_count: usize,
}

impl BookletOrderCalculator {
    pub fn new(page_count: i64) -> Result<BookletOrderCalculator> {
        Ok(BookletOrderCalculator {
            page_count: validate_page_count(page_count)?,
        })
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn sheet_count(&self) -> usize {
        self.page_count / PAGES_PER_SHEET
    }

    pub fn calculate(&self) -> Result<BookletLayout> {
        let sheets = number_sheets(self.page_count as i64)?;
        let half_sheets = split_sheets(&sheets);
        let book_order = assemble_book_order(&half_sheets);
        let print_order = book_order.invert()?;

        Ok(BookletLayout {
            sheets,
            half_sheets,
            book_order,
            print_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(values: &[usize]) -> bool {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        sorted.iter().copied().eq(1..=values.len())
    }

    #[test]
    fn numbers_single_sheet() {
        let sheets = number_sheets(8).expect("8 pages is valid");
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].front, [1, 2, 3, 4]);
        assert_eq!(sheets[0].back, [5, 6, 7, 8]);
    }

    #[test]
    fn numbers_sheets_sequentially() {
        let sheets = number_sheets(24).expect("24 pages is valid");
        assert_eq!(sheets.len(), 3);
        assert_eq!(sheets[1].front, [9, 10, 11, 12]);
        assert_eq!(sheets[1].back, [13, 14, 15, 16]);
        assert_eq!(sheets[2].front, [17, 18, 19, 20]);
        assert_eq!(sheets[2].back, [21, 22, 23, 24]);
    }

    #[test]
    fn rejects_invalid_page_counts() {
        for count in [0, 7, 12, -8, -1, 9] {
            assert_eq!(
                number_sheets(count),
                Err(BookletError::InvalidPageCount(count))
            );
            assert_eq!(
                BookletOrderCalculator::new(count),
                Err(BookletError::InvalidPageCount(count))
            );
        }
    }

    #[test]
    fn splits_top_halves_before_bottom_halves() {
        let sheets = number_sheets(16).expect("16 pages is valid");
        let halves = split_sheets(&sheets);
        assert_eq!(
            halves,
            vec![
                HalfSheet { front: [1, 2], back: [5, 6] },
                HalfSheet { front: [9, 10], back: [13, 14] },
                HalfSheet { front: [3, 4], back: [7, 8] },
                HalfSheet { front: [11, 12], back: [15, 16] },
            ]
        );
    }

    #[test]
    fn eight_pages_matches_folded_prototype() {
        let layout = BookletOrderCalculator::new(8)
            .expect("8 pages is valid")
            .calculate()
            .expect("can calculate layout");

        assert_eq!(layout.sheet_count(), 1);
        assert_eq!(layout.half_sheets[0], HalfSheet { front: [1, 2], back: [5, 6] });
        assert_eq!(layout.half_sheets[1], HalfSheet { front: [3, 4], back: [7, 8] });
        assert_eq!(layout.book_order.as_slice(), &[6, 1, 8, 3, 4, 7, 2, 5]);
        assert_eq!(layout.print_order.as_slice(), &[2, 7, 4, 5, 8, 1, 6, 3]);
    }

    #[test]
    fn sixteen_pages_book_order() {
        let sheets = number_sheets(16).expect("16 pages is valid");
        let book_order = assemble_book_order(&split_sheets(&sheets));
        assert_eq!(
            book_order.as_slice(),
            &[6, 1, 14, 9, 8, 3, 16, 11, 12, 15, 4, 7, 10, 13, 2, 5]
        );
    }

    #[test]
    fn book_order_is_always_a_permutation() {
        for count in (8..=800).step_by(8) {
            let layout = BookletOrderCalculator::new(count)
                .expect("multiple of 8 is valid")
                .calculate()
                .expect("can calculate layout");
            assert_eq!(layout.book_order.len(), count as usize);
            assert!(is_permutation(layout.book_order.as_slice()));
            assert!(is_permutation(layout.print_order.as_slice()));
        }
    }

    #[test]
    fn print_order_inverts_book_order() {
        for count in (8..=256).step_by(8) {
            let layout = BookletOrderCalculator::new(count)
                .expect("multiple of 8 is valid")
                .calculate()
                .expect("can calculate layout");
            let book = layout.book_order.as_slice();
            let print = layout.print_order.as_slice();
            for (i, &page) in book.iter().enumerate() {
                assert_eq!(print[page - 1], i + 1);
            }
            assert_eq!(layout.print_order.invert(), Ok(layout.book_order.clone()));
        }
    }

    #[test]
    fn inversion_rejects_duplicates() {
        let err = BookOrder::from(vec![1, 2, 2, 4]).invert().unwrap_err();
        assert_eq!(
            err,
            BookletError::MalformedPermutation {
                position: 3,
                value: 2,
                reason: "is a duplicate",
            }
        );
    }

    #[test]
    fn inversion_rejects_out_of_range_values() {
        assert!(matches!(
            BookOrder::from(vec![1, 5, 3, 4]).invert(),
            Err(BookletError::MalformedPermutation { position: 2, value: 5, .. })
        ));
        assert!(matches!(
            PrintOrder::from(vec![0, 1]).invert(),
            Err(BookletError::MalformedPermutation { position: 1, value: 0, .. })
        ));
    }
}
