/// Index of a particle in the position array and the neighbor index.
///
/// Ids are dense, `0..N`, and stable for the whole run.
pub type ParticleId = usize;
