use super::TopologyError;
use super::graph::{Angle, Bond, NeighborCapacity, Topology};
use crate::core::models::ids::ParticleId;
use tracing::debug;

/// Bonds and angles a single particle participates in, in topology order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborRecord {
    bonds: Vec<Bond>,
    angles: Vec<Angle>,
}

impl NeighborRecord {
    #[inline]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    #[inline]
    pub fn angles(&self) -> &[Angle] {
        &self.angles
    }
}

/// Per-particle lookup of the energy terms affected by moving that particle.
///
/// The capacity invariant (no record holds more terms than the topology kind allows)
/// is checked once in [`NeighborIndex::build`]; lookups never re-check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborIndex {
    records: Vec<NeighborRecord>,
    capacity: NeighborCapacity,
}

impl NeighborIndex {
    pub fn build(topology: &Topology) -> Result<Self, TopologyError> {
        let capacity = topology.kind().capacity();
        let mut records = vec![NeighborRecord::default(); topology.num_particles()];

        for bond in topology.bonds() {
            for id in distinct(&[bond.i0, bond.i1]) {
                push_bounded(&mut records[id].bonds, *bond, id, "bond", capacity.bonds)?;
            }
        }
        for angle in topology.angles() {
            for id in distinct(&[angle.i0, angle.i1, angle.i2]) {
                push_bounded(&mut records[id].angles, *angle, id, "angle", capacity.angles)?;
            }
        }

        debug!(
            "Built neighbor index for {} particles (capacity {} bonds / {} angles).",
            records.len(),
            capacity.bonds,
            capacity.angles
        );
        Ok(Self { records, capacity })
    }

    #[inline]
    pub fn record(&self, id: ParticleId) -> &NeighborRecord {
        &self.records[id]
    }

    #[inline]
    pub fn bonds_of(&self, id: ParticleId) -> &[Bond] {
        self.records[id].bonds()
    }

    #[inline]
    pub fn angles_of(&self, id: ParticleId) -> &[Angle] {
        self.records[id].angles()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> NeighborCapacity {
        self.capacity
    }

    /// Largest bond and angle counts over all records.
    pub fn max_occupancy(&self) -> NeighborCapacity {
        self.records
            .iter()
            .fold(NeighborCapacity { bonds: 0, angles: 0 }, |acc, r| {
                NeighborCapacity {
                    bonds: acc.bonds.max(r.bonds.len()),
                    angles: acc.angles.max(r.angles.len()),
                }
            })
    }
}

// A particle lists a term at most once, even when the term names it twice.
fn distinct(ids: &[ParticleId]) -> Vec<ParticleId> {
    let mut unique = Vec::with_capacity(ids.len());
    for &id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

fn push_bounded<T>(
    list: &mut Vec<T>,
    item: T,
    id: ParticleId,
    term: &'static str,
    capacity: usize,
) -> Result<(), TopologyError> {
    if list.len() >= capacity {
        return Err(TopologyError::CapacityExceeded { id, term, capacity });
    }
    list.push(item);
    Ok(())
}
