//! The `Simulation` struct and its tick loop.

use std::collections::VecDeque;

use airlift_core::{FlightTimeSampler, LoadRate, SimConfig, SimRng, Tick};
use airlift_model::{Airplane, Container};
use airlift_stats::{AirplaneWaitSample, ModelStats};

use crate::observer::{DepartureReport, LoadingInfo, SimObserver, TickState};
use crate::policy::{LowestCapacityFirst, SelectionPolicy};
use crate::{SimError, SimResult};

/// The simulation engine.
///
/// Owns the arrival queue, the present/away airplane partitions, and the
/// statistics accumulator, and drives the five-phase tick loop documented at
/// the [crate root][crate].  Exclusively owned by one caller for its single
/// permitted `run`; nothing here crosses a concurrency boundary.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or
/// [`Simulation::with_defaults`].
pub struct Simulation<P: SelectionPolicy = LowestCapacityFirst> {
    config:  SimConfig,
    policy:  P,
    rng:     SimRng,
    sampler: FlightTimeSampler,

    /// Current tick; starts at [`Tick::FIRST`] and advances at the end of
    /// each iteration.
    timer: Tick,

    /// FIFO arrival queue.  Containers enter at the tail and are loaded from
    /// the head.
    queue:         VecDeque<Container>,
    total_arrived: u64,

    /// Airplanes on the ground.  Appended to on every return, so scan order
    /// is availability order after the first flights.
    present: Vec<Airplane>,
    /// Airplanes currently flying; `arrival` holds each one's return tick.
    away:    Vec<Airplane>,
    /// Index into `present` of the designated loading airplane.  `present`
    /// is only appended to between designation and departure, so the index
    /// stays valid across ticks.
    loading: Option<usize>,

    fleet_size:    usize,
    stats:         ModelStats,
    used:          bool,
    just_departed: bool,
}

impl<P: SelectionPolicy> Simulation<P> {
    pub(crate) fn from_parts(
        config:  SimConfig,
        policy:  P,
        rng:     SimRng,
        sampler: FlightTimeSampler,
        fleet:   Vec<Airplane>,
    ) -> Self {
        Self {
            config,
            policy,
            rng,
            sampler,
            timer: Tick::FIRST,
            queue: VecDeque::new(),
            total_arrived: 0,
            fleet_size: fleet.len(),
            present: fleet,
            away: Vec::new(),
            loading: None,
            stats: ModelStats::new(),
            used: false,
            just_departed: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation for ticks `1..=steps` and return the accumulated
    /// statistics.
    ///
    /// May be invoked at most once per instance; a second call fails with
    /// [`SimError::AlreadyUsed`].  `steps == 0` fails with
    /// [`SimError::InvalidSteps`].
    pub fn run<O: SimObserver>(&mut self, steps: u64, observer: &mut O) -> SimResult<ModelStats> {
        if self.used {
            return Err(SimError::AlreadyUsed);
        }
        if steps == 0 {
            return Err(SimError::InvalidSteps(steps));
        }
        self.used = true;

        while self.timer.0 <= steps {
            let now = self.timer;
            self.process_tick(now, observer)?;
            self.timer = now + 1;
        }

        observer.on_sim_end(Tick(steps), &self.stats);
        Ok(self.stats.clone())
    }

    // ── Accessors (read-only observable state) ────────────────────────────

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn total_arrived(&self) -> u64 {
        self.total_arrived
    }

    #[inline]
    pub fn present_airplanes(&self) -> &[Airplane] {
        &self.present
    }

    #[inline]
    pub fn away_airplanes(&self) -> &[Airplane] {
        &self.away
    }

    /// The currently designated loading airplane, if any.
    pub fn loading_airplane(&self) -> Option<&Airplane> {
        self.loading.map(|idx| &self.present[idx])
    }

    #[inline]
    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }

    #[inline]
    pub fn stats(&self) -> &ModelStats {
        &self.stats
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        self.just_departed = false;

        // ── Phase 1: container arrivals ───────────────────────────────────
        self.arrive_containers(now);

        // ── Phase 2: airplane returns ─────────────────────────────────────
        self.process_returns(now);

        // ── Phase 3: loading-airplane selection ───────────────────────────
        if self.loading.is_none() {
            self.loading = self.policy.select(&self.present);
        }

        if let Some(idx) = self.loading {
            // ── Phase 4: loading (suppressed on the warm-up tick) ─────────
            if now != Tick::FIRST {
                self.load_containers(idx, now)?;
            }

            // ── Phase 5: departure check ──────────────────────────────────
            if self.present[idx].is_fully_loaded() {
                let report = self.depart_airplane(idx, now)?;
                observer.on_departure(&report);
                self.just_departed = true;
            }
        }

        observer.on_tick_end(&self.tick_state(now));
        Ok(())
    }

    /// Append this tick's new containers to the queue tail.
    fn arrive_containers(&mut self, now: Tick) {
        for _ in 0..self.config.arrival_quantity {
            self.queue.push_back(Container::new(now));
        }
        self.total_arrived += self.config.arrival_quantity as u64;
    }

    /// Move every airplane whose flight ends this tick back into the present
    /// pool, emptied and reset.
    fn process_returns(&mut self, now: Tick) {
        let mut idx = 0;
        while idx < self.away.len() {
            if self.away[idx].returns_at() == Some(now) {
                let mut plane = self.away.remove(idx);
                plane.rejoin(now);
                self.present.push(plane);
            } else {
                idx += 1;
            }
        }
    }

    /// Transfer containers from the queue head into the loading airplane,
    /// FIFO, stamping each as it leaves the queue.
    ///
    /// Never loads more than the airplane's remaining capacity, so the
    /// capacity error below is unreachable by construction.
    fn load_containers(&mut self, idx: usize, now: Tick) -> SimResult<()> {
        let plane = &mut self.present[idx];
        let rate = match self.config.load_rate {
            LoadRate::PerTick(n) => n,
            LoadRate::FillRemaining => plane.remaining_capacity(),
        };
        let transfers = rate
            .min(plane.remaining_capacity())
            .min(self.queue.len() as u32);

        for _ in 0..transfers {
            let Some(mut container) = self.queue.pop_front() else {
                break;
            };
            container.mark_loaded(now);
            plane.load(container)?;
        }
        Ok(())
    }

    /// Depart the loading airplane: record waits, draw a flight duration,
    /// and move the airplane to the away pool.
    fn depart_airplane(&mut self, idx: usize, now: Tick) -> SimResult<DepartureReport> {
        let duration = self.sampler.sample(&mut self.rng)?;
        let mut plane = self.present.remove(idx);
        let load = plane.current_load();
        let load_wait = plane.depart(now, duration);

        self.stats.extend_loading_waits(
            plane.containers().iter().filter_map(|c| c.loading_wait()),
        );
        self.stats.extend_departure_waits(
            plane.containers().iter().filter_map(|c| c.departure_wait()),
        );
        self.stats.push_airplane_wait(AirplaneWaitSample {
            capacity: plane.capacity(),
            wait:     load_wait,
        });

        let report = DepartureReport {
            id: plane.id(),
            capacity: plane.capacity(),
            load,
            departed_at: now,
            returns_at: now + duration,
        };

        self.away.push(plane);
        self.loading = None;
        Ok(report)
    }

    fn tick_state(&self, now: Tick) -> TickState {
        TickState {
            tick:          now,
            total_arrived: self.total_arrived,
            queue_len:     self.queue.len(),
            present_count: self.present.len(),
            loading:       self.loading.map(|idx| {
                let plane = &self.present[idx];
                LoadingInfo {
                    id:       plane.id(),
                    capacity: plane.capacity(),
                    load:     plane.current_load(),
                }
            }),
            just_departed: self.just_departed,
        }
    }
}
