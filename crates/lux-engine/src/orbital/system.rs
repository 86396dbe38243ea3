use std::cell::RefCell;
use std::rc::Rc;

use super::geometry::ViewportGeometry;
use super::kinematics::OrbitalState;
use super::palette::Palette;
use super::render::draw_frame;
use crate::api::config::OrbitalConfig;
use crate::api::error::Result;
use crate::core::lifecycle::Lifecycle;
use crate::renderer::traits::Surface;
use crate::theme::bus::{SubscriptionId, ThemeBus};
use crate::theme::style::StyleSource;

/// The orbital illustration: owns its surface, state and palette.
///
/// Created with its dependencies injected; subscribes to theme changes once
/// at construction and unsubscribes in [`OrbitalSystem::dispose`]. The host
/// drives it by calling [`OrbitalSystem::tick`] once per animation frame.
pub struct OrbitalSystem<S> {
    surface: Option<S>,
    state: OrbitalState,
    palette: Rc<RefCell<Palette>>,
    style: Rc<dyn StyleSource>,
    bus: ThemeBus,
    subscription: Option<SubscriptionId>,
    lifecycle: Lifecycle,
    pixel_scale: f64,
}

impl<S: Surface> OrbitalSystem<S> {
    pub fn new(mut surface: S, style: Rc<dyn StyleSource>, bus: ThemeBus, config: &OrbitalConfig) -> Self {
        let size = surface.resize(config.pixel_scale);
        let geometry = ViewportGeometry::new(size, config.pixel_scale);
        let palette = Rc::new(RefCell::new(Palette::sample_or_inherit(bus.current(), &*style)));

        let subscription = {
            let palette = Rc::clone(&palette);
            let style = Rc::clone(&style);
            bus.subscribe(move |event| {
                *palette.borrow_mut() = Palette::sample_or_inherit(event.current, &*style);
            })
        };

        log::info!(
            "orbital: {}x{} on {}, outer radius {}",
            size.width,
            size.height,
            surface.backend(),
            geometry.outer_radius
        );

        Self {
            surface: Some(surface),
            state: OrbitalState::new(config, geometry),
            palette,
            style,
            bus,
            subscription: Some(subscription),
            lifecycle: Lifecycle::Idle,
            pixel_scale: config.pixel_scale,
        }
    }

    pub fn start(&mut self) -> bool {
        let changed = self.lifecycle.start();
        if changed {
            log::debug!("orbital: started");
        }
        changed
    }

    pub fn stop(&mut self) -> bool {
        let changed = self.lifecycle.stop();
        if changed {
            log::debug!("orbital: stopped");
        }
        changed
    }

    /// Stop for good: unsubscribe from theme changes and release the surface.
    pub fn dispose(&mut self) -> Option<S> {
        if !self.lifecycle.dispose() {
            return None;
        }
        if let Some(id) = self.subscription.take() {
            self.bus.unsubscribe(id);
        }
        log::debug!("orbital: disposed");
        self.surface.take()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Re-measure the surface and replace the geometry in one step.
    pub fn resize(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            let size = surface.resize(self.pixel_scale);
            self.state.set_geometry(ViewportGeometry::new(size, self.pixel_scale));
        }
    }

    /// Advance one frame and redraw. Returns `Ok(false)` when not running.
    pub fn tick(&mut self) -> Result<bool> {
        if !self.lifecycle.is_running() {
            return Ok(false);
        }
        let Some(surface) = self.surface.as_mut() else {
            return Ok(false);
        };
        self.state.advance();
        let palette = self.palette.borrow();
        draw_frame(surface, &self.state, &palette)?;
        Ok(true)
    }

    /// The palette subsequent frames will use.
    pub fn current_palette(&self) -> Palette {
        self.palette.borrow().clone()
    }

    /// Re-sample the palette for the bus's current theme and install it.
    pub fn refresh_palette(&self) -> Palette {
        let palette = Palette::sample_or_inherit(self.bus.current(), &*self.style);
        *self.palette.borrow_mut() = palette.clone();
        palette
    }

    pub fn state(&self) -> &OrbitalState {
        &self.state
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }
}

impl<S> Drop for OrbitalSystem<S> {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.bus.unsubscribe(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::color::Color;
    use crate::renderer::recorder::{DrawCommand, RecordingSurface};
    use crate::renderer::traits::FillStyle;
    use crate::orbital::render::SUN_GLOW_BLUR;
    use crate::theme::controller::ThemeController;
    use crate::theme::kind::Theme;
    use crate::theme::store::MemoryStore;
    use crate::theme::style::{StaticStyle, TEXT_PRIMARY};
    use crate::theme::THEME_KEY;

    fn controller(theme: Theme) -> ThemeController {
        ThemeController::load(Box::new(MemoryStore::new().with(THEME_KEY, theme.as_str())))
    }

    fn system(controller: &ThemeController, w: f64, h: f64) -> OrbitalSystem<RecordingSurface> {
        let style: Rc<dyn StyleSource> = Rc::new(StaticStyle::new().with(TEXT_PRIMARY, "#1a1a1a"));
        OrbitalSystem::new(
            RecordingSurface::new(w, h),
            style,
            controller.bus(),
            &OrbitalConfig::default(),
        )
    }

    fn last_fill(surface: &RecordingSurface) -> DrawCommand {
        surface.fills().last().cloned().expect("a fill")
    }

    #[test]
    fn does_not_draw_until_started() {
        let c = controller(Theme::Light);
        let mut sys = system(&c, 500.0, 500.0);
        assert!(!sys.tick().unwrap());
        assert!(sys.surface().unwrap().commands().is_empty());

        sys.start();
        assert!(sys.tick().unwrap());
        assert!(!sys.surface().unwrap().commands().is_empty());
    }

    #[test]
    fn stop_freezes_phases() {
        let c = controller(Theme::Light);
        let mut sys = system(&c, 500.0, 500.0);
        sys.start();
        sys.tick().unwrap();
        let phase = sys.state().outer_phase;
        sys.stop();
        sys.tick().unwrap();
        assert_eq!(sys.state().outer_phase, phase);
    }

    #[test]
    fn resize_keeps_inner_at_half_outer() {
        let c = controller(Theme::Light);
        let mut sys = system(&c, 500.0, 500.0);
        assert_eq!(sys.state().geometry.outer_radius, 215.0);
        for (w, h) in [(800.0, 600.0), (300.0, 900.0), (71.0, 71.0)] {
            sys.surface_mut().unwrap().set_element_size(w, h);
            sys.resize();
            let g = sys.state().geometry;
            assert_eq!(g.inner_radius, 0.5 * g.outer_radius);
            assert_eq!(g.outer_radius, f64::min(w, h) / 2.0 - 35.0);
        }
        assert_eq!(sys.surface().unwrap().scale(), 2.0);
    }

    #[test]
    fn theme_toggle_switches_sun_to_glow_on_next_frame() {
        let mut c = controller(Theme::Light);
        let mut sys = system(&c, 500.0, 500.0);
        sys.start();

        sys.tick().unwrap();
        match last_fill(sys.surface().unwrap()) {
            DrawCommand::Fill { style, shadow_blur, .. } => {
                assert_eq!(style, FillStyle::Solid(Color::gray(0x1a)));
                assert_eq!(shadow_blur, 0.0);
            }
            _ => unreachable!(),
        }
        assert_eq!(sys.surface().unwrap().gradient_fills(), 0);

        c.toggle_main();
        assert!(sys.current_palette().is_dark());
        sys.surface_mut().unwrap().take_commands();
        sys.tick().unwrap();

        match last_fill(sys.surface().unwrap()) {
            DrawCommand::Fill { style, shadow_blur, .. } => {
                assert_eq!(style, FillStyle::Solid(Color::WHITE));
                assert_eq!(shadow_blur, SUN_GLOW_BLUR);
            }
            _ => unreachable!(),
        }
        assert_eq!(sys.surface().unwrap().gradient_fills(), 1);

        // The next frame's first fill (the core) must not inherit the glow.
        sys.surface_mut().unwrap().take_commands();
        sys.tick().unwrap();
        match sys.surface().unwrap().fills().next().cloned() {
            Some(DrawCommand::Fill { shadow_blur, .. }) => assert_eq!(shadow_blur, 0.0),
            other => panic!("expected fill, got {other:?}"),
        };
    }

    #[test]
    fn refresh_palette_is_idempotent() {
        let c = controller(Theme::Dark);
        let sys = system(&c, 500.0, 500.0);
        let a = sys.refresh_palette();
        let b = sys.refresh_palette();
        assert_eq!(a, b);
        assert_eq!(a, sys.current_palette());
    }

    #[test]
    fn dispose_unsubscribes_and_releases_surface() {
        let c = controller(Theme::Light);
        let bus = c.bus();
        let mut sys = system(&c, 500.0, 500.0);
        assert_eq!(bus.subscriber_count(), 1);

        sys.start();
        let surface = sys.dispose();
        assert!(surface.is_some());
        assert_eq!(bus.subscriber_count(), 0);
        assert!(sys.dispose().is_none());
        assert!(!sys.tick().unwrap());
        assert!(!sys.start());
    }

    #[test]
    fn dropping_unsubscribes() {
        let c = controller(Theme::Light);
        let bus = c.bus();
        drop(system(&c, 500.0, 500.0));
        assert_eq!(bus.subscriber_count(), 0);
    }
}
