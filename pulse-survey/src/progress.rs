//! Completion percentage.
//!
//! Part A covers 0-70% by page position, Part B covers 70-85% by how many of
//! the seven selection slots are filled, and a completed survey is 100%.
//! Part A is measured by pages, never by answer counts, so the figure cannot
//! drop while paging forward.

use crate::{ActionSelection, PrioritySelection, Section};

/// Share of the bar covered by Part A.
pub const PART_A_SHARE: f64 = 70.0;

/// Share of the bar covered by Part B while in progress.
pub const PART_B_SHARE: f64 = 15.0;

/// Total selection slots in Part B.
pub const PART_B_SLOTS: usize = PrioritySelection::MAX + ActionSelection::MAX;

/// Completion percentage in `0..=100`.
pub fn percent(
    section: Section,
    page_index: usize,
    page_count: usize,
    priorities: usize,
    actions: usize,
) -> u8 {
    match section {
        Section::Intro => 0,
        Section::PartA => {
            if page_count == 0 {
                return 0;
            }
            let pages_seen = (page_index + 1).min(page_count) as f64;
            (pages_seen / page_count as f64 * PART_A_SHARE).round() as u8
        }
        Section::PartB => {
            let filled = ((priorities + actions) as f64 / PART_B_SLOTS as f64).min(1.0);
            (PART_A_SHARE + (filled * PART_B_SHARE).round()) as u8
        }
        Section::Complete => 100,
    }
}
