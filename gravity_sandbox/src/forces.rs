//! Newtonian gravity between pairs of bodies

use crate::body::Body;
use crate::math::{Scalar, Vector};

/// Gravitational force exerted on `a` by `b`
///
/// F = G * (m1 * m2 / r^2), with r^2 floored at `softening` so coincident
/// bodies do not produce an infinite force. The force on `b` is the exact
/// negation of the returned vector.
pub fn pairwise_force(a: &Body, b: &Body, g: Scalar, softening: Scalar) -> Vector {
    let r = b.position - a.position;
    let r2 = r.length_squared().max(softening);
    let direction = r / r2.sqrt();
    direction * (g * (a.mass() * b.mass()) / r2)
}

/// Add the mutual gravity of every unordered pair to each body's `force`
///
/// Each pair is visited once and both sides receive the same vector with
/// opposite signs, so the forces cancel exactly up to rounding.
pub fn accumulate_forces(bodies: &mut [Body], g: Scalar, softening: Scalar) {
    let n = bodies.len();
    for i in 0..n {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            let f = pairwise_force(a, b, g, softening);
            a.force += f;
            b.force -= f;
        }
    }
}

/// Total force a set of fixed sources exerts on `body`
pub fn force_from_sources(body: &Body, sources: &[Body], g: Scalar, softening: Scalar) -> Vector {
    sources
        .iter()
        .map(|source| pairwise_force(body, source, g, softening))
        .fold(Vector::ZERO, |acc, f| acc + f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: Scalar, y: Scalar, density: Scalar, radius: Scalar) -> Body {
        Body::new(Vector::new(x, y), Vector::ZERO, density, radius, [1.0; 4])
    }

    #[test]
    fn force_points_toward_other_body() {
        let a = body(0.0, 0.0, 1.0, 1.0);
        let b = body(3.0, 4.0, 2.0, 1.0);

        // |r| = 5, m1 = 1, m2 = 2 -> |F| = 2 / 25
        let f = pairwise_force(&a, &b, 1.0, 1e-2);
        let expected = Vector::new(0.6, 0.8) * (2.0 / 25.0);
        assert!((f - expected).length() < 1e-12);
    }

    #[test]
    fn softening_bounds_coincident_bodies() {
        let a = body(1.0, 1.0, 1.0, 1.0);
        let b = body(1.0, 1.0, 1.0, 1.0);

        let f = pairwise_force(&a, &b, 30.0, 1e-2);
        assert!(f.is_finite());
        assert_eq!(f, Vector::ZERO);

        let c = body(1.0 + 1e-4, 1.0, 1.0, 1.0);
        let f = pairwise_force(&a, &c, 1.0, 1e-2);
        assert!(f.is_finite());
        // r2 is clamped to 1e-2, direction is scaled by 1/sqrt(1e-2)
        assert!((f.x - 1e-4 / 0.1 / 1e-2).abs() < 1e-9);
    }

    #[test]
    fn swapping_arguments_negates_exactly() {
        let a = body(-3.5, 12.0, 7.0, 21.0);
        let b = body(40.25, -8.0, 2.0, 33.0);
        assert_eq!(pairwise_force(&a, &b, 30.0, 1e-2), -pairwise_force(&b, &a, 30.0, 1e-2));
    }

    #[test]
    fn accumulation_is_equal_and_opposite() {
        let mut bodies = vec![body(0.0, 0.0, 5.0, 2.0), body(10.0, 0.0, 1.0, 3.0)];
        accumulate_forces(&mut bodies, 30.0, 1e-2);
        assert_eq!(bodies[0].force, -bodies[1].force);
        assert!(bodies[0].force.x > 0.0);
    }

    #[test]
    fn every_pair_counted_once() {
        let mut bodies = vec![
            body(0.0, 0.0, 1.0, 1.0),
            body(10.0, 0.0, 1.0, 1.0),
            body(0.0, 10.0, 1.0, 1.0),
        ];
        let expected_first = pairwise_force(&bodies[0], &bodies[1], 1.0, 1e-2)
            + pairwise_force(&bodies[0], &bodies[2], 1.0, 1e-2);

        accumulate_forces(&mut bodies, 1.0, 1e-2);

        assert!((bodies[0].force - expected_first).length() < 1e-15);
        let net: Vector = bodies.iter().map(|b| b.force).sum();
        assert!(net.length() < 1e-15);
    }

    #[test]
    fn sources_are_summed() {
        let test_body = body(0.0, 0.0, 1.0, 1.0);
        let sources = vec![body(10.0, 0.0, 1.0, 1.0), body(-10.0, 0.0, 1.0, 1.0)];
        let f = force_from_sources(&test_body, &sources, 1.0, 1e-2);
        assert!(f.length() < 1e-15);

        let f = force_from_sources(&test_body, &sources[..1], 1.0, 1e-2);
        assert!((f.x - 0.01).abs() < 1e-15);
        assert!(force_from_sources(&test_body, &[], 1.0, 1e-2) == Vector::ZERO);
    }
}
