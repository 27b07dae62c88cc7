/// Identifier for a particle in a [`crate::field::ParticleField`].
///
/// This is an index into `ParticleField::particles`, and is only meaningful
/// until the next population change (a wrap that spawns or removes).
pub type ParticleId = usize;
