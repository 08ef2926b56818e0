use super::potentials;
use crate::core::boundary::BoundaryPolicy;
use nalgebra::Point3;

/// Energy of a single bond or angle term given the positions of its particles.
pub trait LocalEnergyEvaluator {
    fn bond_energy<B: BoundaryPolicy>(
        &self,
        a: &Point3<f64>,
        b: &Point3<f64>,
        coeff: f64,
        rest_length: f64,
        boundary: &B,
    ) -> f64;

    fn angle_energy<B: BoundaryPolicy>(
        &self,
        a: &Point3<f64>,
        b: &Point3<f64>,
        c: &Point3<f64>,
        coeff: f64,
        boundary: &B,
    ) -> f64;
}

/// Harmonic bonds, `k/2 (r - l0)^2`, and cosine angles, `k (1 - cos θ)`, with all
/// separations taken through the boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarmonicCosine;

impl LocalEnergyEvaluator for HarmonicCosine {
    #[inline]
    fn bond_energy<B: BoundaryPolicy>(
        &self,
        a: &Point3<f64>,
        b: &Point3<f64>,
        coeff: f64,
        rest_length: f64,
        boundary: &B,
    ) -> f64 {
        let dist = boundary.separation(a, b).norm();
        potentials::harmonic_bond(dist, coeff, rest_length)
    }

    #[inline]
    fn angle_energy<B: BoundaryPolicy>(
        &self,
        a: &Point3<f64>,
        b: &Point3<f64>,
        c: &Point3<f64>,
        coeff: f64,
        boundary: &B,
    ) -> f64 {
        let bond_ab = boundary.separation(a, b);
        let bond_bc = boundary.separation(b, c);
        potentials::cosine_angle(&bond_ab, &bond_bc, coeff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::boundary::Boundary;
    use nalgebra::Vector3;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn bond_across_periodic_edge_uses_minimum_image() {
        let boundary = Boundary::periodic(Vector3::new(10.0, 10.0, 10.0)).unwrap();
        let a = Point3::new(9.5, 0.0, 0.0);
        let b = Point3::new(0.5, 0.0, 0.0);
        let e = HarmonicCosine.bond_energy(&a, &b, 2.0, 1.0, &boundary);
        assert!(e.abs() < TOLERANCE);
    }

    #[test]
    fn bond_without_boundary_sees_full_distance() {
        let a = Point3::new(9.5, 0.0, 0.0);
        let b = Point3::new(0.5, 0.0, 0.0);
        let e = HarmonicCosine.bond_energy(&a, &b, 2.0, 1.0, &Boundary::open());
        assert!((e - 64.0).abs() < TOLERANCE);
    }

    #[test]
    fn angle_energy_for_bent_triple() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(1.0, 1.0, 0.0);
        let e = HarmonicCosine.angle_energy(&a, &b, &c, 3.0, &Boundary::open());
        assert!((e - 3.0).abs() < TOLERANCE);
    }
}
