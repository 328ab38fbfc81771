//! Airplane selection policy.
//!
//! The choose-an-airplane rule is a small linear scan, but it is kept behind
//! an explicit trait so alternate policies (highest capacity first, round
//! robin, …) can be swapped in without touching the tick loop.

use airlift_model::Airplane;

/// Chooses which present airplane becomes the loading airplane.
pub trait SelectionPolicy {
    /// Index of the chosen airplane within `present`, or `None` when the
    /// pool is empty.
    fn select(&self, present: &[Airplane]) -> Option<usize>;
}

/// The default rule: smallest capacity wins; ties go to the earliest entry
/// in scan order.  On a fresh fleet scan order is ascending id order, so the
/// lowest-id airplane of the smallest capacity class loads first.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestCapacityFirst;

impl SelectionPolicy for LowestCapacityFirst {
    fn select(&self, present: &[Airplane]) -> Option<usize> {
        present
            .iter()
            .enumerate()
            .min_by_key(|(position, plane)| (plane.capacity(), *position))
            .map(|(position, _)| position)
    }
}
