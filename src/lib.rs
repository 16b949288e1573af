//! Page reordering for A6 booklets printed 4-up on A4.
//!
//! Print the reordered PDF double-sided with four A6 pages per A4 side, cut the
//! stack horizontally, put the top halves into the centre of the bottom halves,
//! and fold the new stack vertically to get an A6 booklet.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod imposition;

pub use error::{BookletError, Result};
pub use imposition::{BookletLayout, BookletOrderCalculator, BookOrder, PrintOrder};
