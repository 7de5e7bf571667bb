//! Random draw without replacement ("lottery").
//!
//! A [`Drawer`] owns a pool of remaining entries and the cumulative history
//! of entries already drawn. Every initialized entry is in exactly one of
//! the two at all times.

mod drawer;
mod entry;

pub use drawer::{DrawSource, Drawer};
pub use entry::{Entry, PoolSource};
