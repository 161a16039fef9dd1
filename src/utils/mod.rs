//! # Utilities Module
//!
//! Random sources, breadth-first search and small numeric helpers shared by
//! generation and gameplay.

pub mod pathfinding;
pub mod random;

pub use pathfinding::*;
pub use random::*;

/// Number of items that make up `percent` percent of `total`, rounded up.
///
/// Percentages above 100 are clamped so the result never exceeds `total`.
///
/// # Examples
///
/// ```
/// use warren::ceil_percent;
///
/// assert_eq!(ceil_percent(22, 12), 3);
/// assert_eq!(ceil_percent(20, 20), 4);
/// assert_eq!(ceil_percent(0, 10), 0);
/// ```
pub fn ceil_percent(percent: u32, total: usize) -> usize {
    let percent = percent.min(100) as usize;
    (percent * total).div_ceil(100)
}
