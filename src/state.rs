use druid::Data;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::WorldConfig;
use crate::geometry::{Point2, Triangle};
use crate::orbit::{OrbitState, RngSource};

/// UI flags shared with druid.
#[derive(Clone, Data)]
pub struct AppState {
    /// Enable the debug overlay
    pub debug: bool,
    /// Simulation paused
    pub paused: bool,
    /// Total chaos-game iterations so far
    pub iterations: u64,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            debug: false,
            paused: false,
            iterations: 0,
        }
    }
}

/// Everything the render loop owns: the world parameters, the inscribed
/// triangle, the orbit, and the points plotted so far. No ambient globals;
/// the widget holds one of these and threads it through every step.
pub struct SimulationState {
    pub world: WorldConfig,
    pub triangle: Triangle,
    pub orbit: OrbitState,
    pub points: Vec<Point2>,
    source: RngSource<StdRng>,
}

impl SimulationState {
    pub fn new(world: WorldConfig) -> Self {
        let rng = match world.seed {
            Some(seed) => {
                info!("seeding random source with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        SimulationState {
            world,
            triangle: Triangle::inscribed(world.center(), world.radius()),
            orbit: OrbitState::new(world.center()),
            points: Vec::new(),
            source: RngSource::new(rng),
        }
    }

    /// Runs one batch of chaos-game steps, recording each plotted point.
    /// Returns the number of steps taken.
    pub fn advance_batch(&mut self) -> usize {
        for _ in 0..self.world.points_per_flush {
            let p = self.orbit.step(&self.triangle, &mut self.source);
            self.points.push(p);
        }
        self.world.points_per_flush
    }

    /// Discards the orbit and the accumulated cloud; the next batch starts
    /// from a fresh seed point.
    pub fn reset(&mut self) {
        debug!("resetting orbit after {} points", self.points.len());
        self.orbit = OrbitState::new(self.world.center());
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_world() -> WorldConfig {
        WorldConfig {
            width: 1000.0,
            height: 1000.0,
            margin: 80.0,
            thickness: 2.0,
            points_per_flush: 64,
            seed: Some(9),
        }
    }

    #[test]
    fn batch_records_one_point_per_step() {
        let mut sim = SimulationState::new(test_world());
        assert!(sim.points.is_empty());
        assert_eq!(sim.advance_batch(), 64);
        assert_eq!(sim.points.len(), 64);
        sim.advance_batch();
        assert_eq!(sim.points.len(), 128);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = SimulationState::new(test_world());
        let mut b = SimulationState::new(test_world());
        a.advance_batch();
        b.advance_batch();
        assert_eq!(a.points, b.points);
    }

    #[test]
    fn reset_starts_a_fresh_orbit() {
        let mut sim = SimulationState::new(test_world());
        sim.advance_batch();
        sim.reset();
        assert!(sim.points.is_empty());
        assert!(!sim.orbit.is_seeded());
        sim.advance_batch();
        assert_eq!(sim.points.len(), 64);
    }
}
