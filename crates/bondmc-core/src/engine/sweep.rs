use super::error::EngineError;
use super::moves::MoveEngine;
use crate::core::boundary::{BoundaryKind, BoundaryPolicy};
use crate::core::forcefield::evaluator::LocalEnergyEvaluator;
use crate::core::models::ids::ParticleId;
use crate::core::models::system::Position;
use crate::core::random::RandomStream;
use std::ops::RangeInclusive;
use tracing::instrument;

/// Tally of one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepStats {
    pub attempted: usize,
    pub accepted: usize,
}

impl SweepStats {
    #[inline]
    pub fn acceptance_ratio(&self) -> f64 {
        self.accepted as f64 / self.attempted as f64
    }
}

/// Ids eligible for trial moves.
///
/// Under a periodic boundary the first and last particles are held fixed as anchors;
/// under an open boundary every particle may move.
pub fn movable_range(
    num_particles: usize,
    kind: BoundaryKind,
) -> Result<RangeInclusive<ParticleId>, EngineError> {
    let empty = EngineError::EmptyMovableRange {
        num_particles,
        kind,
    };
    match kind {
        BoundaryKind::Periodic if num_particles >= 3 => Ok(1..=num_particles - 2),
        BoundaryKind::Open if num_particles >= 1 => Ok(0..=num_particles - 1),
        _ => Err(empty),
    }
}

/// Runs sweeps of `N` trial moves, `N` being the particle count.
///
/// Each attempt draws a fresh id uniformly from the movable range, so a sweep may visit
/// some particles several times and others not at all.
#[derive(Debug, Clone, Copy)]
pub struct SweepDriver<'a, B, E> {
    engine: MoveEngine<'a, B, E>,
    num_particles: usize,
    id_lo: ParticleId,
    id_hi: ParticleId,
}

impl<'a, B, E> SweepDriver<'a, B, E>
where
    B: BoundaryPolicy,
    E: LocalEnergyEvaluator,
{
    /// Validates the particle count against the neighbor index and the boundary mode.
    pub fn new(engine: MoveEngine<'a, B, E>, num_particles: usize) -> Result<Self, EngineError> {
        let indexed = engine.index().len();
        if indexed != num_particles {
            return Err(EngineError::ParticleCountMismatch {
                positions: num_particles,
                indexed,
            });
        }
        let range = movable_range(num_particles, engine.boundary().kind())?;
        Ok(Self {
            engine,
            num_particles,
            id_lo: *range.start(),
            id_hi: *range.end(),
        })
    }

    pub fn engine(&self) -> &MoveEngine<'a, B, E> {
        &self.engine
    }

    pub fn num_particles(&self) -> usize {
        self.num_particles
    }

    pub fn movable_range(&self) -> RangeInclusive<ParticleId> {
        self.id_lo..=self.id_hi
    }

    /// Performs one sweep and returns the fraction of accepted moves.
    #[inline]
    pub fn sweep(&self, positions: &mut [Position], rng: &mut impl RandomStream) -> f64 {
        self.sweep_with_stats(positions, rng).acceptance_ratio()
    }

    #[instrument(level = "trace", skip_all, fields(num_particles = self.num_particles))]
    pub fn sweep_with_stats(
        &self,
        positions: &mut [Position],
        rng: &mut impl RandomStream,
    ) -> SweepStats {
        debug_assert_eq!(positions.len(), self.num_particles);

        let mut accepted = 0;
        for _ in 0..self.num_particles {
            let id = rng.uniform_int_in_range(self.id_lo, self.id_hi);
            if self.engine.try_move(positions, id, rng) {
                accepted += 1;
            }
        }
        SweepStats {
            attempted: self.num_particles,
            accepted,
        }
    }
}
