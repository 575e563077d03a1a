use std::f64::consts::PI;

/// A 2D point in world coordinates (y axis pointing up).
pub type Point2 = [f64; 2];

/// Edge function: twice the signed area of the triangle (a, b, c).
pub fn edge_function(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (c[0] - a[0]) * (b[1] - a[1]) - (c[1] - a[1]) * (b[0] - a[0])
}

/// Componentwise midpoint of two points.
pub fn midpoint(p: Point2, q: Point2) -> Point2 {
    [(p[0] + q[0]) / 2.0, (p[1] + q[1]) / 2.0]
}

/// Euclidean distance between two points.
pub fn distance(p: Point2, q: Point2) -> f64 {
    ((p[0] - q[0]).powi(2) + (p[1] - q[1]).powi(2)).sqrt()
}

/// Equilateral triangle inscribed in a circle, one vertex pointing straight
/// up in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle {
    /// Computes the inscribed triangle for a circle with the given centre
    /// and radius. Vertex A sits at the top of the circle; B and C are A
    /// rotated by ∓120° about the centre, which puts them at the same
    /// height below the centre, horizontally symmetric about it.
    pub fn inscribed(center: Point2, radius: f64) -> Self {
        let (sin_val, cos_val) = (PI / 6.0).sin_cos();
        let [cx, cy] = center;
        Triangle {
            a: [cx, cy + radius],
            b: [cx + radius * cos_val, cy - radius * sin_val],
            c: [cx - radius * cos_val, cy - radius * sin_val],
        }
    }

    /// The vertex for a chaos-game draw: 0 = top, 1 = right, 2 = left.
    pub fn vertex(&self, index: usize) -> Point2 {
        match index {
            0 => self.a,
            1 => self.b,
            _ => self.c,
        }
    }

    /// Tests whether a point lies inside the triangle (edges included):
    /// inside means all three edge functions carry the same sign.
    pub fn contains(&self, p: Point2) -> bool {
        let w0 = edge_function(&self.a, &self.b, &p);
        let w1 = edge_function(&self.b, &self.c, &p);
        let w2 = edge_function(&self.c, &self.a, &p);
        (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0) || (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0)
    }

    /// Centroid of the triangle; coincides with the circle centre for an
    /// inscribed equilateral triangle.
    pub fn centroid(&self) -> Point2 {
        [
            (self.a[0] + self.b[0] + self.c[0]) / 3.0,
            (self.a[1] + self.b[1] + self.c[1]) / 3.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn vertices_lie_on_the_circle() {
        for &(center, radius) in &[
            ([500.0, 500.0], 460.0),
            ([800.0, 600.0], 500.0),
            ([0.0, 0.0], 1.0),
            ([-30.0, 70.0], 12.5),
        ] {
            let t = Triangle::inscribed(center, radius);
            for i in 0..3 {
                assert!((distance(t.vertex(i), center) - radius).abs() < TOL);
            }
        }
    }

    #[test]
    fn vertices_are_120_degrees_apart() {
        let center = [500.0, 500.0];
        let radius = 460.0;
        let t = Triangle::inscribed(center, radius);
        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            let u = t.vertex(i);
            let v = t.vertex(j);
            let dot = (u[0] - center[0]) * (v[0] - center[0])
                + (u[1] - center[1]) * (v[1] - center[1]);
            // cos 120° = -1/2
            assert!((dot / (radius * radius) + 0.5).abs() < TOL);
        }
    }

    #[test]
    fn known_layout_for_fixed_circle() {
        let t = Triangle::inscribed([500.0, 500.0], 460.0);
        assert_eq!(t.a, [500.0, 960.0]);
        assert!((t.b[1] - t.c[1]).abs() < TOL);
        // B and C mirror each other about the vertical through the centre.
        assert!((t.b[0] - 500.0 + (t.c[0] - 500.0)).abs() < TOL);
        assert!(t.b[0] > 500.0 && t.c[0] < 500.0);
        assert!(t.b[1] < 500.0);
    }

    #[test]
    fn contains_accepts_interior_and_rejects_exterior() {
        let t = Triangle::inscribed([500.0, 500.0], 460.0);
        assert!(t.contains(t.centroid()));
        assert!(t.contains(t.a));
        assert!(!t.contains([500.0, 990.0]));
        assert!(!t.contains([40.0, 900.0]));
        assert!(!t.contains([500.0, 0.0]));
    }

    #[test]
    fn midpoint_is_exact() {
        assert_eq!(midpoint([0.0, 0.0], [10.0, 0.0]), [5.0, 0.0]);
        assert_eq!(midpoint([-4.0, 6.0], [4.0, -6.0]), [0.0, 0.0]);
        assert_eq!(midpoint([1.0, 1.0], [2.0, 3.0]), [1.5, 2.0]);
    }
}
