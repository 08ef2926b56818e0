use crate::core::boundary::BoundaryPolicy;
use crate::core::forcefield::energy::local_energy;
use crate::core::forcefield::evaluator::LocalEnergyEvaluator;
use crate::core::forcefield::params::ModelParams;
use crate::core::models::dimension::Dimension;
use crate::core::models::ids::ParticleId;
use crate::core::models::system::Position;
use crate::core::random::RandomStream;
use crate::core::topology::neighbors::NeighborIndex;
use nalgebra::Vector3;

/// Result of a single trial move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    pub id: ParticleId,
    /// Local energy after the displacement minus local energy before it.
    pub delta: f64,
    pub accepted: bool,
}

/// Single-particle trial moves with incremental energy evaluation.
///
/// Holds the read-only collaborators of a run. Positions and the random stream are
/// passed to every call; a move mutates exactly one position and nothing else.
#[derive(Debug, Clone, Copy)]
pub struct MoveEngine<'a, B, E> {
    index: &'a NeighborIndex,
    boundary: &'a B,
    evaluator: &'a E,
    dimension: Dimension,
    params: ModelParams,
}

impl<'a, B, E> MoveEngine<'a, B, E>
where
    B: BoundaryPolicy,
    E: LocalEnergyEvaluator,
{
    pub fn new(
        index: &'a NeighborIndex,
        boundary: &'a B,
        evaluator: &'a E,
        dimension: Dimension,
        params: ModelParams,
    ) -> Self {
        Self {
            index,
            boundary,
            evaluator,
            dimension,
            params,
        }
    }

    pub fn index(&self) -> &'a NeighborIndex {
        self.index
    }

    pub fn boundary(&self) -> &'a B {
        self.boundary
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Attempts one Metropolis move of particle `id` and reports whether it was accepted.
    ///
    /// Draws `D` reals for the displacement and, only when the energy did not drop, one
    /// more for the acceptance test. A rejected move restores the exact previous position.
    #[inline]
    pub fn try_move(
        &self,
        positions: &mut [Position],
        id: ParticleId,
        rng: &mut impl RandomStream,
    ) -> bool {
        self.try_move_traced(positions, id, rng).accepted
    }

    /// Same as [`MoveEngine::try_move`] but also returns the energy delta.
    pub fn try_move_traced(
        &self,
        positions: &mut [Position],
        id: ParticleId,
        rng: &mut impl RandomStream,
    ) -> MoveOutcome {
        let before = positions[id];
        let energy_before = self.local_energy(positions, id);

        positions[id] = self.kick(&before, rng);
        let energy_after = self.local_energy(positions, id);

        let delta = energy_after - energy_before;
        let accepted = metropolis_accepts(delta, rng);
        if !accepted {
            positions[id] = before;
        }

        MoveOutcome {
            id,
            delta,
            accepted,
        }
    }

    #[inline]
    fn local_energy(&self, positions: &[Position], id: ParticleId) -> f64 {
        local_energy(
            positions,
            id,
            self.index,
            self.evaluator,
            self.boundary,
            &self.params,
        )
        .total()
    }

    fn kick(&self, origin: &Position, rng: &mut impl RandomStream) -> Position {
        let mut step = Vector3::zeros();
        for axis in 0..self.dimension.axes() {
            step[axis] = self.params.displacement * (2.0 * rng.uniform_real() - 1.0);
        }
        let mut candidate = origin + step;
        self.boundary.wrap(&mut candidate);
        candidate
    }
}

/// Metropolis criterion in units where `kT = 1`.
///
/// Downhill moves are accepted without consuming a draw; otherwise one uniform real `u`
/// is drawn and the move is accepted iff `u < exp(-delta)`.
#[inline]
pub fn metropolis_accepts(delta: f64, rng: &mut impl RandomStream) -> bool {
    if delta < 0.0 {
        true
    } else {
        rng.uniform_real() < (-delta).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::boundary::Boundary;
    use crate::core::forcefield::energy::system_energy;
    use crate::core::forcefield::evaluator::HarmonicCosine;
    use crate::core::random::RngStream;
    use crate::core::topology::graph::{Topology, TopologyKind};
    use crate::engine::testing::{RecordingStream, ScriptedStream};
    use std::f64::consts::LN_2;

    // Moving particle 0 of a straight chain by -0.25 along x stretches bond (0, 1) by
    // 0.25 and keeps every angle straight, so delta = k/2 * 0.0625 = ln 2.
    const STRETCH_DRAWS_2D: [f64; 2] = [0.25, 0.5];

    fn five_particle_chain() -> (Topology, NeighborIndex, Vec<Position>) {
        let topology = Topology::build(TopologyKind::Chain { num_particles: 5 }).unwrap();
        let index = NeighborIndex::build(&topology).unwrap();
        let positions = (0..5).map(|i| Position::new(i as f64, 0.0, 0.0)).collect();
        (topology, index, positions)
    }

    fn ln2_params() -> ModelParams {
        ModelParams {
            displacement: 0.5,
            bond_coeff: 2.0 * LN_2 / (0.25 * 0.25),
            angle_coeff: 3.0,
            equilibrium_length: 1.0,
        }
    }

    #[test]
    fn uphill_move_is_rejected_when_draw_exceeds_boltzmann_factor() {
        let (_, index, mut positions) = five_particle_chain();
        let boundary = Boundary::open();
        let engine = MoveEngine::new(&index, &boundary, &HarmonicCosine, Dimension::Two, ln2_params());
        let original = positions.clone();

        let mut rng = ScriptedStream::new(&[STRETCH_DRAWS_2D[0], STRETCH_DRAWS_2D[1], 0.99], &[]);
        let outcome = engine.try_move_traced(&mut positions, 0, &mut rng);

        assert!((outcome.delta - LN_2).abs() < 1e-12);
        assert!(((-outcome.delta).exp() - 0.5).abs() < 1e-12);
        assert!(!outcome.accepted);
        assert_eq!(positions, original);
        assert_eq!(rng.real_draws, 3);
    }

    #[test]
    fn uphill_move_is_accepted_when_draw_is_below_boltzmann_factor() {
        let (_, index, mut positions) = five_particle_chain();
        let boundary = Boundary::open();
        let engine = MoveEngine::new(&index, &boundary, &HarmonicCosine, Dimension::Two, ln2_params());

        let mut rng = ScriptedStream::new(&[STRETCH_DRAWS_2D[0], STRETCH_DRAWS_2D[1], 0.1], &[]);
        let accepted = engine.try_move(&mut positions, 0, &mut rng);

        assert!(accepted);
        assert_eq!(positions[0], Position::new(-0.25, 0.0, 0.0));
        assert_eq!(positions[1], Position::new(1.0, 0.0, 0.0));
        assert_eq!(rng.real_draws, 3);
    }

    #[test]
    fn downhill_move_is_accepted_without_an_acceptance_draw() {
        let (_, index, mut positions) = five_particle_chain();
        positions[0] = Position::new(-0.5, 0.0, 0.0);
        let boundary = Boundary::open();
        let engine = MoveEngine::new(&index, &boundary, &HarmonicCosine, Dimension::Two, ln2_params());

        // +0.25 along x relaxes the stretched bond.
        let mut rng = ScriptedStream::new(&[0.75, 0.5], &[]);
        let outcome = engine.try_move_traced(&mut positions, 0, &mut rng);

        assert!(outcome.delta < 0.0);
        assert!(outcome.accepted);
        assert_eq!(positions[0], Position::new(-0.25, 0.0, 0.0));
        assert_eq!(rng.real_draws, 2);
        assert_eq!(rng.remaining_reals(), 0);
    }

    #[test]
    fn three_dimensional_moves_draw_one_real_per_axis() {
        let (_, index, mut positions) = five_particle_chain();
        let boundary = Boundary::open();
        let engine = MoveEngine::new(&index, &boundary, &HarmonicCosine, Dimension::Three, ln2_params());

        let mut rng = ScriptedStream::new(&[0.5, 0.5, 0.75, 0.0], &[]);
        let accepted = engine.try_move(&mut positions, 2, &mut rng);

        assert!(accepted);
        assert_eq!(positions[2], Position::new(2.0, 0.0, 0.25));
        assert_eq!(rng.real_draws, 4);
    }

    #[test]
    fn two_dimensional_moves_never_displace_z() {
        let (_, index, mut positions) = five_particle_chain();
        let boundary = Boundary::open();
        let params = ModelParams {
            bond_coeff: 0.0,
            angle_coeff: 0.0,
            ..ln2_params()
        };
        let engine = MoveEngine::new(&index, &boundary, &HarmonicCosine, Dimension::Two, params);
        let mut rng = RngStream::seeded(5);

        for step in 0..200 {
            engine.try_move(&mut positions, step % 5, &mut rng);
        }
        assert!(positions.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn candidate_position_is_wrapped_into_periodic_box() {
        let (_, index, mut positions) = five_particle_chain();
        let boundary = Boundary::periodic(Vector3::new(10.0, 10.0, 10.0)).unwrap();
        let params = ModelParams {
            bond_coeff: 0.0,
            angle_coeff: 0.0,
            ..ln2_params()
        };
        let engine = MoveEngine::new(&index, &boundary, &HarmonicCosine, Dimension::Two, params);

        // -0.5 along x and y from the origin; zero energy change is accepted on any draw < 1.
        let mut rng = ScriptedStream::new(&[0.0, 0.0, 0.5], &[]);
        assert!(engine.try_move(&mut positions, 0, &mut rng));
        assert_eq!(positions[0], Position::new(9.5, 9.5, 0.0));
    }

    #[test]
    fn acceptance_decisions_follow_the_metropolis_criterion() {
        let (_, index, mut positions) = five_particle_chain();
        let boundary = Boundary::open();
        let params = ModelParams {
            displacement: 0.3,
            bond_coeff: 20.0,
            angle_coeff: 2.0,
            equilibrium_length: 1.0,
        };
        let engine = MoveEngine::new(&index, &boundary, &HarmonicCosine, Dimension::Two, params);
        let mut rng = RecordingStream::new(RngStream::seeded(2024));

        let mut saw_accept = false;
        let mut saw_reject = false;
        for step in 0..2_000 {
            let drawn_before = rng.reals.len();
            let outcome = engine.try_move_traced(&mut positions, step % 5, &mut rng);
            let drawn = rng.reals.len() - drawn_before;

            if outcome.delta < 0.0 {
                assert!(outcome.accepted);
                assert_eq!(drawn, 2);
            } else {
                assert_eq!(drawn, 3);
                let u = rng.reals[rng.reals.len() - 1];
                assert_eq!(outcome.accepted, u < (-outcome.delta).exp());
            }
            saw_accept |= outcome.accepted;
            saw_reject |= !outcome.accepted;
        }
        assert!(saw_accept && saw_reject);
    }

    #[test]
    fn rejected_moves_restore_position_and_total_energy_exactly() {
        let (topology, index, mut positions) = five_particle_chain();
        positions[1] = Position::new(1.1, 0.2, 0.0);
        positions[3] = Position::new(2.9, -0.1, 0.0);
        let boundary = Boundary::open();
        let params = ModelParams {
            displacement: 1.0,
            bond_coeff: 500.0,
            angle_coeff: 50.0,
            equilibrium_length: 1.0,
        };
        let engine = MoveEngine::new(&index, &boundary, &HarmonicCosine, Dimension::Two, params);
        let mut rng = RngStream::seeded(99);

        let mut rejections = 0;
        for step in 0..500 {
            let id = step % 5;
            let before = positions.clone();
            let energy_before = system_energy(&before, &topology, &HarmonicCosine, &boundary, &params);

            if !engine.try_move(&mut positions, id, &mut rng) {
                rejections += 1;
                assert_eq!(positions, before);
                let energy_after =
                    system_energy(&positions, &topology, &HarmonicCosine, &boundary, &params);
                assert_eq!(energy_after, energy_before);
            } else {
                for other in (0..5).filter(|&j| j != id) {
                    assert_eq!(positions[other], before[other]);
                }
            }
        }
        assert!(rejections > 0);
    }

    #[test]
    fn huge_energy_increase_underflows_to_rejection() {
        let mut rng = ScriptedStream::new(&[0.0], &[]);
        assert!(!metropolis_accepts(1e6, &mut rng));
        assert_eq!(rng.real_draws, 1);
    }

    #[test]
    fn nan_delta_is_rejected() {
        let mut rng = ScriptedStream::new(&[0.0], &[]);
        assert!(!metropolis_accepts(f64::NAN, &mut rng));
    }

    #[test]
    fn zero_delta_consumes_a_draw_and_accepts_below_one() {
        let mut rng = ScriptedStream::new(&[0.999], &[]);
        assert!(metropolis_accepts(0.0, &mut rng));
        assert_eq!(rng.real_draws, 1);
    }
}
