//! Headless [`Surface`] that records every draw as a command list.
//!
//! Mirrors canvas state semantics (save/restore stack, translate, current
//! shadow) so assertions can check what a fill was actually drawn with.

use glam::DVec2;

use super::color::Color;
use super::traits::{FillStyle, Surface};
use crate::api::error::Result;
use crate::api::types::Size;

/// One arc segment of the current path, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathArc {
    pub center: DVec2,
    pub radius: f64,
}

/// A recorded draw call with the state that applied to it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { x: f64, y: f64, width: f64, height: f64 },
    Fill {
        path: Vec<PathArc>,
        style: FillStyle,
        shadow_color: Color,
        shadow_blur: f64,
    },
    Stroke {
        path: Vec<PathArc>,
        color: Color,
        line_width: f64,
        dash: Vec<f64>,
    },
}

#[derive(Debug, Clone)]
struct State {
    fill: FillStyle,
    stroke: Color,
    line_width: f64,
    dash: Vec<f64>,
    shadow_color: Color,
    shadow_blur: f64,
    offset: DVec2,
}

impl Default for State {
    fn default() -> Self {
        Self {
            fill: FillStyle::default(),
            stroke: Color::BLACK,
            line_width: 1.0,
            dash: Vec::new(),
            shadow_color: Color::TRANSPARENT,
            shadow_blur: 0.0,
            offset: DVec2::ZERO,
        }
    }
}

/// Recording surface of a fixed CSS size.
#[derive(Debug)]
pub struct RecordingSurface {
    size: Size,
    scale: f64,
    state: State,
    stack: Vec<State>,
    path: Vec<PathArc>,
    commands: Vec<DrawCommand>,
    gradient_fills: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            scale: 1.0,
            state: State::default(),
            stack: Vec::new(),
            path: Vec::new(),
            commands: Vec::new(),
            gradient_fills: 0,
        }
    }

    /// Change the size reported on the next `resize`, as a host element would.
    pub fn set_element_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping canvas state.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of fills that used a radial gradient since creation.
    pub fn gradient_fills(&self) -> usize {
        self.gradient_fills
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Save/restore depth; zero once every `save` has been matched.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Fill { .. }))
    }

    pub fn strokes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Stroke { .. }))
    }
}

impl Surface for RecordingSurface {
    fn backend(&self) -> &'static str {
        "recording"
    }

    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, scale: f64) -> Size {
        // Resizing a canvas resets its whole context state.
        self.scale = scale;
        self.state = State::default();
        self.stack.clear();
        self.path.clear();
        self.size
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn arc(&mut self, center: DVec2, radius: f64, _start: f64, _end: f64) -> Result<()> {
        self.path.push(PathArc {
            center: center + self.state.offset,
            radius,
        });
        Ok(())
    }

    fn set_fill_style(&mut self, style: &FillStyle) -> Result<()> {
        self.state.fill = style.clone();
        Ok(())
    }

    fn fill(&mut self) {
        if matches!(self.state.fill, FillStyle::Radial(_)) {
            self.gradient_fills += 1;
        }
        self.commands.push(DrawCommand::Fill {
            path: self.path.clone(),
            style: self.state.fill.clone(),
            shadow_color: self.state.shadow_color.clone(),
            shadow_blur: self.state.shadow_blur,
        });
    }

    fn set_stroke_style(&mut self, color: &Color) {
        self.state.stroke = color.clone();
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_line_dash(&mut self, segments: &[f64]) -> Result<()> {
        self.state.dash = segments.to_vec();
        Ok(())
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke {
            path: self.path.clone(),
            color: self.state.stroke.clone(),
            line_width: self.state.line_width,
            dash: self.state.dash.clone(),
        });
    }

    fn set_shadow_color(&mut self, color: &Color) {
        self.state.shadow_color = color.clone();
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.state.shadow_blur = blur;
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, offset: DVec2) {
        self.state.offset += offset;
    }
}
