use super::TopologyError;
use crate::core::models::ids::ParticleId;
use std::fmt;

/// Two bonded particles, in the order they are passed to the bond potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i0: ParticleId,
    pub i1: ParticleId,
}

impl Bond {
    pub const fn new(i0: ParticleId, i1: ParticleId) -> Self {
        Self { i0, i1 }
    }

    #[inline]
    pub fn contains(&self, id: ParticleId) -> bool {
        self.i0 == id || self.i1 == id
    }

    fn ids(&self) -> [ParticleId; 2] {
        [self.i0, self.i1]
    }
}

/// Three particles forming an angle; `i1` is the vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Angle {
    pub i0: ParticleId,
    pub i1: ParticleId,
    pub i2: ParticleId,
}

impl Angle {
    pub const fn new(i0: ParticleId, i1: ParticleId, i2: ParticleId) -> Self {
        Self { i0, i1, i2 }
    }

    #[inline]
    pub fn contains(&self, id: ParticleId) -> bool {
        self.i0 == id || self.i1 == id || self.i2 == id
    }

    fn ids(&self) -> [ParticleId; 3] {
        [self.i0, self.i1, self.i2]
    }
}

/// Maximum number of bonds and angles a single particle can take part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborCapacity {
    pub bonds: usize,
    pub angles: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyKind {
    /// Linear chain; bonds and angles between consecutive particles, no ring closure.
    Chain { num_particles: usize },
    /// Rectangular `nx` by `ny` sheet with particle id `iy * nx + ix`.
    Mesh { nx: usize, ny: usize },
}

impl TopologyKind {
    pub fn num_particles(&self) -> usize {
        match *self {
            TopologyKind::Chain { num_particles } => num_particles,
            TopologyKind::Mesh { nx, ny } => nx * ny,
        }
    }

    pub const fn capacity(&self) -> NeighborCapacity {
        match self {
            TopologyKind::Chain { .. } => NeighborCapacity {
                bonds: 2,
                angles: 3,
            },
            TopologyKind::Mesh { .. } => NeighborCapacity {
                bonds: 4,
                angles: 6,
            },
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyKind::Chain { num_particles } => write!(f, "chain of {}", num_particles),
            TopologyKind::Mesh { nx, ny } => write!(f, "{}x{} mesh", nx, ny),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    kind: TopologyKind,
    bonds: Vec<Bond>,
    angles: Vec<Angle>,
}

impl Topology {
    pub fn build(kind: TopologyKind) -> Result<Self, TopologyError> {
        let (bonds, angles) = match kind {
            TopologyKind::Chain { num_particles } => {
                if num_particles == 0 {
                    return Err(TopologyError::Empty);
                }
                chain_terms(num_particles)
            }
            TopologyKind::Mesh { nx, ny } => {
                if nx == 0 || ny == 0 {
                    return Err(TopologyError::InvalidMesh { nx, ny });
                }
                mesh_terms(nx, ny)
            }
        };
        Self::from_parts(kind, bonds, angles)
    }

    /// Assembles a topology from explicit terms, checking every referenced id.
    pub fn from_parts(
        kind: TopologyKind,
        bonds: Vec<Bond>,
        angles: Vec<Angle>,
    ) -> Result<Self, TopologyError> {
        let num_particles = kind.num_particles();
        if num_particles == 0 {
            return Err(TopologyError::Empty);
        }
        let bond_ids = bonds.iter().flat_map(|b| b.ids()).map(|id| (id, "bond"));
        let angle_ids = angles.iter().flat_map(|a| a.ids()).map(|id| (id, "angle"));
        if let Some((id, term)) = bond_ids.chain(angle_ids).find(|&(id, _)| id >= num_particles) {
            return Err(TopologyError::IndexOutOfRange {
                id,
                term,
                num_particles,
            });
        }
        Ok(Self {
            kind,
            bonds,
            angles,
        })
    }

    pub fn kind(&self) -> TopologyKind {
        self.kind
    }

    pub fn num_particles(&self) -> usize {
        self.kind.num_particles()
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn angles(&self) -> &[Angle] {
        &self.angles
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} particles, {} bonds, {} angles",
            self.kind,
            self.num_particles(),
            self.bonds.len(),
            self.angles.len()
        )
    }
}

fn chain_terms(n: usize) -> (Vec<Bond>, Vec<Angle>) {
    let bonds = (0..n.saturating_sub(1)).map(|i| Bond::new(i, i + 1)).collect();
    let angles = (0..n.saturating_sub(2))
        .map(|i| Angle::new(i, i + 1, i + 2))
        .collect();
    (bonds, angles)
}

fn mesh_terms(nx: usize, ny: usize) -> (Vec<Bond>, Vec<Angle>) {
    let id = |ix: usize, iy: usize| iy * nx + ix;
    let mut bonds = Vec::new();
    let mut angles = Vec::new();

    for iy in 0..ny {
        for ix in 0..nx {
            if ix + 1 < nx {
                bonds.push(Bond::new(id(ix, iy), id(ix + 1, iy)));
            }
            if iy + 1 < ny {
                bonds.push(Bond::new(id(ix, iy), id(ix, iy + 1)));
            }
        }
    }
    for iy in 0..ny {
        for ix in 0..nx {
            if ix + 2 < nx {
                angles.push(Angle::new(id(ix, iy), id(ix + 1, iy), id(ix + 2, iy)));
            }
            if iy + 2 < ny {
                angles.push(Angle::new(id(ix, iy), id(ix, iy + 1), id(ix, iy + 2)));
            }
        }
    }
    (bonds, angles)
}
