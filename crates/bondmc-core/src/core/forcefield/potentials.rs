use nalgebra::Vector3;

const DEGENERATE_LENGTH: f64 = 1e-12;

#[inline]
pub fn harmonic_bond(dist: f64, force_constant: f64, rest_length: f64) -> f64 {
    let stretch = dist - rest_length;
    0.5 * force_constant * stretch * stretch
}

/// `k * (1 - cos θ)` where `θ` is the angle between consecutive bond vectors, so a
/// straight triple has zero energy.
#[inline]
pub fn cosine_angle(bond_a: &Vector3<f64>, bond_b: &Vector3<f64>, force_constant: f64) -> f64 {
    let norms = bond_a.norm() * bond_b.norm();
    if norms < DEGENERATE_LENGTH {
        return 0.0;
    }
    let cos_theta = (bond_a.dot(bond_b) / norms).clamp(-1.0, 1.0);
    force_constant * (1.0 - cos_theta)
}
