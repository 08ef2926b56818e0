use nalgebra::{Point3, Vector3};
use std::fmt;
use thiserror::Error;

/// Classification of the simulation domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Wrap-around domain; positions are folded back into the box.
    Periodic,
    /// Unbounded domain; positions are never modified.
    Open,
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryKind::Periodic => write!(f, "periodic"),
            BoundaryKind::Open => write!(f, "open"),
        }
    }
}

/// Domain policy consulted by the sampler and the bonded potentials.
pub trait BoundaryPolicy {
    fn kind(&self) -> BoundaryKind;

    /// Maps `position` back into the valid domain. Must be idempotent for positions
    /// already inside it.
    fn wrap(&self, position: &mut Point3<f64>);

    /// Vector pointing from `a` to `b` as seen through the boundary.
    fn separation(&self, a: &Point3<f64>, b: &Point3<f64>) -> Vector3<f64>;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoundaryError {
    #[error("Box length along axis {axis} must be finite and positive, got {value}")]
    InvalidBoxLength { axis: usize, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    Open,
    Periodic { box_lengths: Vector3<f64> },
}

impl Boundary {
    pub fn open() -> Self {
        Boundary::Open
    }

    pub fn periodic(box_lengths: impl Into<Vector3<f64>>) -> Result<Self, BoundaryError> {
        let box_lengths = box_lengths.into();
        for (axis, &value) in box_lengths.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(BoundaryError::InvalidBoxLength { axis, value });
            }
        }
        Ok(Boundary::Periodic { box_lengths })
    }
}

impl BoundaryPolicy for Boundary {
    #[inline]
    fn kind(&self) -> BoundaryKind {
        match self {
            Boundary::Open => BoundaryKind::Open,
            Boundary::Periodic { .. } => BoundaryKind::Periodic,
        }
    }

    #[inline]
    fn wrap(&self, position: &mut Point3<f64>) {
        if let Boundary::Periodic { box_lengths } = self {
            for axis in 0..3 {
                let length = box_lengths[axis];
                let wrapped = position[axis].rem_euclid(length);
                // rem_euclid can round up to exactly `length` for tiny negative inputs.
                position[axis] = if wrapped >= length { 0.0 } else { wrapped };
            }
        }
    }

    #[inline]
    fn separation(&self, a: &Point3<f64>, b: &Point3<f64>) -> Vector3<f64> {
        let mut dr = b - a;
        if let Boundary::Periodic { box_lengths } = self {
            for axis in 0..3 {
                let length = box_lengths[axis];
                dr[axis] -= length * (dr[axis] / length).round();
            }
        }
        dr
    }
}
