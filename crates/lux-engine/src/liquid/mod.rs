pub mod mesh;
pub mod panel;
pub mod shader;

pub use mesh::{view_projection, PlaneMesh, PlaneVertex};
pub use panel::{LiquidPanel, LiquidUniforms};
