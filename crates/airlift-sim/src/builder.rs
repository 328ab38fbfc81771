//! Fluent builder for constructing a [`Simulation`].

use airlift_core::{AirplaneIdGen, SimConfig};
use airlift_model::{FleetPlan, build_fleet};

use crate::policy::{LowestCapacityFirst, SelectionPolicy};
use crate::sim::Simulation;
use crate::SimResult;

/// Fluent builder for [`Simulation<P>`].
///
/// Validates the configuration and fleet plan, mints airplane ids from a
/// fresh generator, and seeds the RNG according to `config.seed`.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), FleetPlan::default())
///     .policy(LowestCapacityFirst)
///     .build()?;
/// let stats = sim.run(1000, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: SelectionPolicy = LowestCapacityFirst> {
    config: SimConfig,
    plan:   FleetPlan,
    policy: P,
}

impl SimBuilder<LowestCapacityFirst> {
    /// Create a builder with the default lowest-capacity-first policy.
    pub fn new(config: SimConfig, plan: FleetPlan) -> Self {
        Self {
            config,
            plan,
            policy: LowestCapacityFirst,
        }
    }
}

impl<P: SelectionPolicy> SimBuilder<P> {
    /// Swap in a different selection policy.
    pub fn policy<Q: SelectionPolicy>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder {
            config: self.config,
            plan:   self.plan,
            policy,
        }
    }

    /// Validate inputs, materialise the fleet, and return a ready-to-run
    /// [`Simulation`].
    pub fn build(self) -> SimResult<Simulation<P>> {
        self.config.validate()?;
        let mut ids = AirplaneIdGen::new();
        let fleet = build_fleet(&self.plan, &mut ids)?;
        let sampler = self.config.make_sampler()?;
        let rng = self.config.make_rng();
        Ok(Simulation::from_parts(
            self.config,
            self.policy,
            rng,
            sampler,
            fleet,
        ))
    }
}

impl Simulation<LowestCapacityFirst> {
    /// The documented reference setup: default config, default fleet plan.
    pub fn with_defaults() -> SimResult<Self> {
        SimBuilder::new(SimConfig::default(), FleetPlan::default()).build()
    }
}
