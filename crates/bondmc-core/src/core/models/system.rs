use super::dimension::Dimension;
use super::ids::ParticleId;
use crate::core::boundary::BoundaryPolicy;
use crate::core::topology::graph::TopologyKind;
use nalgebra::Point3;

pub type Position = Point3<f64>;

/// Positions of every particle in the simulation, indexed by [`ParticleId`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSystem {
    positions: Vec<Position>,
    dimension: Dimension,
}

impl ParticleSystem {
    pub fn new(positions: Vec<Position>, dimension: Dimension) -> Self {
        Self {
            positions,
            dimension,
        }
    }

    /// Lays particles out at rest: a chain along `x`, a mesh in the `xy` plane, neighbours
    /// `spacing` apart, then wraps every position into the domain.
    pub fn relaxed_layout(
        kind: TopologyKind,
        spacing: f64,
        dimension: Dimension,
        boundary: &impl BoundaryPolicy,
    ) -> Self {
        let mut positions: Vec<Position> = match kind {
            TopologyKind::Chain { num_particles } => (0..num_particles)
                .map(|i| Position::new(i as f64 * spacing, 0.0, 0.0))
                .collect(),
            TopologyKind::Mesh { nx, ny } => (0..ny)
                .flat_map(|iy| (0..nx).map(move |ix| (ix, iy)))
                .map(|(ix, iy)| Position::new(ix as f64 * spacing, iy as f64 * spacing, 0.0))
                .collect(),
        };
        positions.iter_mut().for_each(|p| boundary.wrap(p));
        Self::new(positions, dimension)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn position(&self, id: ParticleId) -> Option<&Position> {
        self.positions.get(id)
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [Position] {
        &mut self.positions
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }
}
