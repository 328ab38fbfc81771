//! Fleet construction.
//!
//! A fleet is described by an ordered capacity → count plan and materialised
//! once at engine construction.  The plan's insertion order is its iteration
//! order, so one construction is always reproducible; ids are minted by the
//! caller-supplied generator, grouped by plan order and then creation order.

use airlift_core::AirplaneIdGen;

use crate::airplane::Airplane;
use crate::error::{ModelError, ModelResult};

// ── CapacityCount ─────────────────────────────────────────────────────────────

/// "`count` airplanes of `capacity` containers each."
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapacityCount {
    pub capacity: u32,
    pub count:    u32,
}

// ── FleetPlan ─────────────────────────────────────────────────────────────────

/// Ordered fleet composition.
///
/// The default plan is the documented reference fleet: three airplanes of
/// capacity 80 and two of capacity 140.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetPlan(pub Vec<CapacityCount>);

impl Default for FleetPlan {
    fn default() -> Self {
        FleetPlan(vec![
            CapacityCount { capacity: 80, count: 3 },
            CapacityCount { capacity: 140, count: 2 },
        ])
    }
}

impl FleetPlan {
    /// Build a plan from `(capacity, count)` pairs in the given order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        FleetPlan(
            pairs
                .into_iter()
                .map(|(capacity, count)| CapacityCount { capacity, count })
                .collect(),
        )
    }

    /// Total number of airplanes the plan describes.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|cc| cc.count).sum()
    }

    /// A plan is valid when it names at least one airplane and no entry has
    /// a zero capacity or zero count.
    pub fn validate(&self) -> ModelResult<()> {
        if self.0.is_empty() || self.total() == 0 {
            return Err(ModelError::InvalidPlan(
                "fleet plan describes no airplanes".into(),
            ));
        }
        for cc in &self.0 {
            if cc.capacity == 0 {
                return Err(ModelError::InvalidPlan(
                    "airplane capacity must be positive".into(),
                ));
            }
            if cc.count == 0 {
                return Err(ModelError::InvalidPlan(format!(
                    "capacity {} has a zero count",
                    cc.capacity
                )));
            }
        }
        Ok(())
    }
}

// ── build_fleet ───────────────────────────────────────────────────────────────

/// Materialise a plan into airplanes.
///
/// Output order is grouped by capacity in plan order, then by creation order
/// within a capacity; each airplane receives a fresh monotonically increasing
/// id from `ids`.
pub fn build_fleet(plan: &FleetPlan, ids: &mut AirplaneIdGen) -> ModelResult<Vec<Airplane>> {
    plan.validate()?;
    let mut fleet = Vec::with_capacity(plan.total() as usize);
    for cc in &plan.0 {
        for _ in 0..cc.count {
            fleet.push(Airplane::new(ids.next_id(), cc.capacity));
        }
    }
    Ok(fleet)
}
