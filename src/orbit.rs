use log::debug;
use rand::Rng;

use crate::geometry::{midpoint, Point2, Triangle};

/// How far (in pixels, per axis) the seed point may land from the circle
/// centre.
const SEED_JITTER: usize = 120;

/// Uniform random integers below an exclusive upper bound. Abstracted so
/// tests can script the draws instead of relying on real randomness.
pub trait UniformSource {
    fn below(&mut self, bound: usize) -> usize;
}

/// Uniform source backed by a `rand` generator.
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Orbit of the chaos game: the current point and the vertex it last moved
/// towards.
pub struct OrbitState {
    seed_center: Point2,
    current: Point2,
    last_vertex: Option<usize>,
    seeded: bool,
}

impl OrbitState {
    /// A fresh, unseeded orbit. The first call to [`step`](Self::step)
    /// places the seed near `seed_center`.
    pub fn new(seed_center: Point2) -> Self {
        OrbitState {
            seed_center,
            current: seed_center,
            last_vertex: None,
            seeded: false,
        }
    }

    pub fn current(&self) -> Point2 {
        self.current
    }

    /// The index of the most recently chosen vertex, if any. Diagnostic
    /// only; correctness never depends on it.
    pub fn last_vertex(&self) -> Option<usize> {
        self.last_vertex
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Advances the orbit by one chaos-game step and returns the new point.
    ///
    /// The first call seeds the orbit: the seed centre offset by a bounded
    /// random jitter per axis. The seed is deliberately not checked against
    /// the triangle, so the first few plotted points may fall outside it;
    /// they converge towards the attractor within a handful of steps. Every
    /// later call draws a vertex uniformly from {0, 1, 2} and moves the
    /// current point to the exact componentwise midpoint between it and
    /// that vertex. Seeding happens at most once per orbit, no matter how
    /// the caller interleaves calls.
    pub fn step<S: UniformSource + ?Sized>(
        &mut self,
        triangle: &Triangle,
        source: &mut S,
    ) -> Point2 {
        if !self.seeded {
            let jx = source.below(2 * SEED_JITTER + 1) as f64 - SEED_JITTER as f64;
            let jy = source.below(2 * SEED_JITTER + 1) as f64 - SEED_JITTER as f64;
            self.current = [self.seed_center[0] + jx, self.seed_center[1] + jy];
            self.seeded = true;
            debug!(
                "orbit seeded at ({:.1}, {:.1})",
                self.current[0], self.current[1]
            );
            return self.current;
        }

        let v = source.below(3);
        self.current = midpoint(self.current, triangle.vertex(v));
        self.last_vertex = Some(v);
        self.current
    }
}
