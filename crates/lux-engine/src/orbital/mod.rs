//! Canvas orbital illustration with phase lighting.

pub mod geometry;
pub mod kinematics;
pub mod lighting;
pub mod palette;
pub mod render;
pub mod system;

pub use geometry::ViewportGeometry;
pub use kinematics::{body_position, AngularVelocity, OrbitalState};
pub use lighting::{brightness, map_range, shadow_stop, PhaseShading};
pub use palette::Palette;
pub use render::draw_frame;
pub use system::OrbitalSystem;
