use clap::Parser;

/// Chaos-game animation of a Sierpinski triangle inscribed in a circle
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 1000.0)]
    pub width: f64,

    /// Window height in pixels
    #[arg(long, default_value_t = 1000.0)]
    pub height: f64,

    /// Gap between the circle and the nearest window edge, in pixels
    #[arg(long, default_value_t = 80.0)]
    pub margin: f64,

    /// Side length of each plotted point, in pixels
    #[arg(long, default_value_t = 2.0)]
    pub thickness: f64,

    /// Orbit points generated per frame before the buffer is presented
    #[arg(long, default_value_t = 64)]
    pub points_per_flush: usize,

    /// Seed for the random vertex choices (entropy-seeded if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Drawing parameters fixed at startup; never mutated afterwards.
#[derive(Clone, Copy, Debug)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub thickness: f64,
    pub points_per_flush: usize,
    pub seed: Option<u64>,
}

impl WorldConfig {
    pub fn from_args(args: &Args) -> Self {
        WorldConfig {
            width: args.width,
            height: args.height,
            margin: args.margin,
            thickness: args.thickness,
            points_per_flush: args.points_per_flush,
            seed: args.seed,
        }
    }

    /// The centre of the circle, in world coordinates.
    pub fn center(&self) -> [f64; 2] {
        [self.width / 2.0, self.height / 2.0]
    }

    /// The circle fills the window's shorter dimension minus the margin.
    pub fn radius(&self) -> f64 {
        (self.width.min(self.height) - self.margin) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(width: f64, height: f64, margin: f64) -> WorldConfig {
        WorldConfig {
            width,
            height,
            margin,
            thickness: 2.0,
            points_per_flush: 64,
            seed: None,
        }
    }

    #[test]
    fn radius_derived_from_shorter_dimension() {
        assert_eq!(world(1000.0, 1000.0, 80.0).radius(), 460.0);
        assert_eq!(world(1600.0, 1200.0, 200.0).radius(), 500.0);
        assert_eq!(world(1200.0, 1600.0, 200.0).radius(), 500.0);
    }

    #[test]
    fn center_is_window_midpoint() {
        assert_eq!(world(1600.0, 1200.0, 0.0).center(), [800.0, 600.0]);
    }
}
