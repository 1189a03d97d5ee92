pub mod boundary;
pub mod forces;
pub mod procgen;
