//! Field geometry and coordinate conventions shared by simulation and rendering.

pub mod coordinates;
pub mod space;
