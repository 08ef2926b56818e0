use super::evaluator::LocalEnergyEvaluator;
use super::params::ModelParams;
use super::term::EnergyTerm;
use crate::core::boundary::BoundaryPolicy;
use crate::core::models::ids::ParticleId;
use crate::core::models::system::Position;
use crate::core::topology::graph::{Angle, Bond, Topology};
use crate::core::topology::neighbors::NeighborIndex;

/// Energy of every term that references `id`, using current positions.
///
/// Terms not involving `id` are unaffected by moving it and are not visited.
#[inline]
pub fn local_energy<E, B>(
    positions: &[Position],
    id: ParticleId,
    index: &NeighborIndex,
    evaluator: &E,
    boundary: &B,
    params: &ModelParams,
) -> EnergyTerm
where
    E: LocalEnergyEvaluator,
    B: BoundaryPolicy,
{
    let record = index.record(id);
    EnergyTerm {
        bond: bond_sum(positions, record.bonds(), evaluator, boundary, params),
        angle: angle_sum(positions, record.angles(), evaluator, boundary, params),
    }
}

/// Energy of the whole system, each term counted once.
pub fn system_energy<E, B>(
    positions: &[Position],
    topology: &Topology,
    evaluator: &E,
    boundary: &B,
    params: &ModelParams,
) -> EnergyTerm
where
    E: LocalEnergyEvaluator,
    B: BoundaryPolicy,
{
    EnergyTerm {
        bond: bond_sum(positions, topology.bonds(), evaluator, boundary, params),
        angle: angle_sum(positions, topology.angles(), evaluator, boundary, params),
    }
}

#[inline]
fn bond_sum<E, B>(
    positions: &[Position],
    bonds: &[Bond],
    evaluator: &E,
    boundary: &B,
    params: &ModelParams,
) -> f64
where
    E: LocalEnergyEvaluator,
    B: BoundaryPolicy,
{
    bonds
        .iter()
        .map(|bond| {
            evaluator.bond_energy(
                &positions[bond.i0],
                &positions[bond.i1],
                params.bond_coeff,
                params.equilibrium_length,
                boundary,
            )
        })
        .sum()
}

#[inline]
fn angle_sum<E, B>(
    positions: &[Position],
    angles: &[Angle],
    evaluator: &E,
    boundary: &B,
    params: &ModelParams,
) -> f64
where
    E: LocalEnergyEvaluator,
    B: BoundaryPolicy,
{
    angles
        .iter()
        .map(|angle| {
            evaluator.angle_energy(
                &positions[angle.i0],
                &positions[angle.i1],
                &positions[angle.i2],
                params.angle_coeff,
                boundary,
            )
        })
        .sum()
}
