pub mod bootstrap;
pub mod geometry;
pub mod layout;
pub mod logic;
pub mod sweep;
