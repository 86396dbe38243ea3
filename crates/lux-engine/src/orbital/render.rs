use glam::DVec2;

use super::kinematics::OrbitalState;
use super::lighting::draw_lit_body;
use super::palette::Palette;
use crate::api::error::Result;
use crate::renderer::color::Color;
use crate::renderer::traits::{FillStyle, Surface};

/// Dash pattern of the inner orbit guide.
pub const INNER_DASH: [f64; 2] = [2.0, 8.0];
/// Dash pattern of the outer orbit guide.
pub const OUTER_DASH: [f64; 2] = [2.0, 10.0];
pub const GUIDE_LINE_WIDTH: f64 = 1.0;

pub const SUN_GLOW_FILL: Color = Color::WHITE;
pub const SUN_GLOW_COLOR: Color = Color::rgba(255, 255, 255, 0.8);
pub const SUN_GLOW_BLUR: f64 = 40.0;

/// Redraw the whole scene for the current state.
///
/// Draw order: clear, guides, core, lit body, light source.
pub fn draw_frame(surface: &mut dyn Surface, state: &OrbitalState, palette: &Palette) -> Result<()> {
    let geometry = &state.geometry;
    surface.clear_rect(0.0, 0.0, geometry.size.width, geometry.size.height);

    let center = geometry.center();
    let sun = state.sun_position();
    let moon = state.moon_position();

    draw_guides(surface, center, state, &palette.orbit)?;
    draw_core(surface, center, state.core_radius, &palette.core)?;
    draw_lit_body(surface, moon, state.satellite_radius, sun, palette, geometry)?;
    draw_sun(surface, sun, state.satellite_radius, palette)
}

fn draw_guides(surface: &mut dyn Surface, center: DVec2, state: &OrbitalState, color: &Color) -> Result<()> {
    surface.set_stroke_style(color);
    surface.set_line_width(GUIDE_LINE_WIDTH);

    surface.circle_path(center, state.geometry.inner_radius)?;
    surface.set_line_dash(&INNER_DASH)?;
    surface.stroke();

    surface.circle_path(center, state.geometry.outer_radius)?;
    surface.set_line_dash(&OUTER_DASH)?;
    surface.stroke();
    surface.set_line_dash(&[])
}

fn draw_core(surface: &mut dyn Surface, center: DVec2, radius: f64, color: &Color) -> Result<()> {
    surface.save();
    surface.translate(center);
    let filled = surface.fill_circle(DVec2::ZERO, radius, &FillStyle::Solid(color.clone()));
    surface.restore();
    filled
}

/// Light source: flat off the dark theme, glowing on it. The blur is reset
/// right after the fill so it never reaches later draws.
fn draw_sun(surface: &mut dyn Surface, pos: DVec2, radius: f64, palette: &Palette) -> Result<()> {
    if !palette.is_dark() {
        return surface.fill_circle(pos, radius, &FillStyle::Solid(palette.flat.clone()));
    }
    surface.circle_path(pos, radius)?;
    surface.set_fill_style(&FillStyle::Solid(SUN_GLOW_FILL))?;
    surface.set_shadow_color(&SUN_GLOW_COLOR);
    surface.set_shadow_blur(SUN_GLOW_BLUR);
    surface.fill();
    surface.set_shadow_blur(0.0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::OrbitalConfig;
    use crate::api::types::Size;
    use crate::orbital::geometry::ViewportGeometry;
    use crate::renderer::recorder::{DrawCommand, RecordingSurface};
    use crate::theme::kind::Theme;

    fn setup(theme: Theme) -> (RecordingSurface, OrbitalState, Palette) {
        let geometry = ViewportGeometry::new(Size::new(500.0, 500.0), 2.0);
        let state = OrbitalState::new(&OrbitalConfig::default(), geometry);
        let palette = Palette {
            theme,
            core: Color::gray(0xf5),
            orbit: Color::rgba(255, 255, 255, 0.08),
            flat: Color::gray(0xf5),
        };
        (RecordingSurface::new(500.0, 500.0), state, palette)
    }

    #[test]
    fn frame_starts_with_a_full_clear() {
        let (mut surface, state, palette) = setup(Theme::Light);
        draw_frame(&mut surface, &state, &palette).unwrap();
        assert_eq!(
            surface.commands()[0],
            DrawCommand::Clear { x: 0.0, y: 0.0, width: 500.0, height: 500.0 }
        );
    }

    #[test]
    fn guides_are_dashed_rings() {
        let (mut surface, state, palette) = setup(Theme::Dark);
        draw_frame(&mut surface, &state, &palette).unwrap();
        let strokes: Vec<_> = surface.strokes().collect();
        assert_eq!(strokes.len(), 2);
        match (strokes[0], strokes[1]) {
            (
                DrawCommand::Stroke { path: inner, dash: d0, color, line_width, .. },
                DrawCommand::Stroke { path: outer, dash: d1, .. },
            ) => {
                assert_eq!(inner[0].radius, 107.5);
                assert_eq!(outer[0].radius, 215.0);
                assert_eq!(d0.as_slice(), &INNER_DASH);
                assert_eq!(d1.as_slice(), &OUTER_DASH);
                assert_eq!(*color, palette.orbit);
                assert_eq!(*line_width, 1.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn core_dot_is_centered() {
        let (mut surface, state, palette) = setup(Theme::Light);
        draw_frame(&mut surface, &state, &palette).unwrap();
        match surface.fills().next() {
            Some(DrawCommand::Fill { path, style, .. }) => {
                assert_eq!(path[0].center, DVec2::new(250.0, 250.0));
                assert_eq!(path[0].radius, 5.0);
                assert_eq!(*style, FillStyle::Solid(palette.core.clone()));
            }
            other => panic!("expected core fill, got {other:?}"),
        }
        assert_eq!(surface.stack_depth(), 0);
    }

    #[test]
    fn dark_sun_glows_and_blur_is_reset() {
        let (mut surface, state, palette) = setup(Theme::Dark);
        draw_frame(&mut surface, &state, &palette).unwrap();
        let fills: Vec<_> = surface.fills().collect();
        match fills.last() {
            Some(DrawCommand::Fill { path, style, shadow_blur, shadow_color }) => {
                assert_eq!(path[0].center, DVec2::new(465.0, 250.0));
                assert_eq!(*style, FillStyle::Solid(SUN_GLOW_FILL));
                assert_eq!(*shadow_blur, SUN_GLOW_BLUR);
                assert_eq!(*shadow_color, SUN_GLOW_COLOR);
            }
            other => panic!("expected sun fill, got {other:?}"),
        }

        // Anything drawn afterwards carries no blur.
        surface.fill_circle(DVec2::ZERO, 1.0, &Color::WHITE.into()).unwrap();
        match surface.commands().last() {
            Some(DrawCommand::Fill { shadow_blur, .. }) => assert_eq!(*shadow_blur, 0.0),
            other => panic!("expected fill, got {other:?}"),
        }
    }

    #[test]
    fn light_frame_is_all_flat() {
        let (mut surface, state, palette) = setup(Theme::Light);
        draw_frame(&mut surface, &state, &palette).unwrap();
        assert_eq!(surface.gradient_fills(), 0);
        for cmd in surface.fills() {
            if let DrawCommand::Fill { shadow_blur, .. } = cmd {
                assert_eq!(*shadow_blur, 0.0);
            }
        }
        assert_eq!(surface.fills().count(), 3);
    }
}
