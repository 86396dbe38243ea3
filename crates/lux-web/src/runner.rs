use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use lux_engine::scroll::{Marquee, NavVisibility, RevealGroup, RevealPreset, RevealSet, ScrollToOptions, SmartNavbar};
use lux_engine::theme::SubscriptionId;
use lux_engine::ui::{CursorFollower, IntroEvent, IntroSequence, IntroTargets, MagneticButton, ProjectSheet};
use lux_engine::{ElementId, FrameClock, PageContext, SharedScroll, SiteConfig, StyleSource, Theme};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent, WheelEvent, Window};

use crate::dom::{self, js_error, query, query_all, rect, set_class, Elements, Listener};
use crate::frame_loop::FrameLoop;
use crate::host::{bind_theme_attribute, ComputedStyle, LocalStore};
#[cfg(feature = "liquid")]
use crate::liquid::LiquidMount;
use crate::orbital::OrbitalMount;
use crate::sheet::{project_data, SheetDom};
use crate::split::split_title;

const MAGNETIC_SELECTOR: &str = ".btn-rounded, .nav-pill, .view-all";
const HOVER_SELECTOR: &str = "a, button, .hoverable, .contact-item";
const TITLE_SELECTOR: &str = ".projects-title, .about-title, .contact-title";

/// State shared by the page frame loop and every DOM event handler.
pub struct PageState {
    pub ctx: PageContext,
    pub elements: Elements,
    clock: FrameClock,
    navbar: Option<(HtmlElement, SmartNavbar)>,
    marquee: Option<(HtmlElement, Marquee)>,
    reveals: RevealSet,
    intro: Option<IntroSequence>,
    loader: Option<HtmlElement>,
    cursor: Option<CursorFollower>,
    sheet: Option<ProjectSheet>,
}

impl PageState {
    fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            elements: Elements::default(),
            clock: FrameClock::new(),
            navbar: None,
            marquee: None,
            reveals: RevealSet::new(),
            intro: None,
            loader: None,
            cursor: None,
            sheet: None,
        }
    }

    /// Register a DOM element for animation and return its id.
    fn track(&mut self, element: HtmlElement) -> ElementId {
        let id = self.ctx.next_id();
        self.elements.insert(id, element);
        id
    }

    /// One page frame: scroll, scroll-driven effects, tweens, style flush.
    fn frame(&mut self, time_ms: f64, window: &Window) -> Result<(), JsValue> {
        let time = self.clock.tick(time_ms);

        let scroll = self.ctx.scroll();
        let animated = scroll.borrow_mut().raf(time_ms);
        if let Some(y) = animated {
            window.scroll_to_with_x_and_y(0.0, y);
        }
        let y = window.scroll_y()?;
        {
            let mut scroll = scroll.borrow_mut();
            if !scroll.is_scrolling() && (y - scroll.position()).abs() > 0.5 {
                scroll.sync(y);
            }
        }

        if let Some((nav, navbar)) = self.navbar.as_mut() {
            if let Some(visibility) = navbar.update(y) {
                set_class(nav, "nav-hidden", visibility == NavVisibility::Hidden)?;
            }
        }

        let vh = dom::viewport_height(window);
        let PageState {
            ctx,
            elements,
            reveals,
            marquee,
            intro,
            loader,
            ..
        } = self;

        reveals.update(|id| elements.get(id).map(|el| rect(el)), vh, &mut ctx.tweens);
        if let Some((trigger, marquee)) = marquee.as_ref() {
            marquee.update(&rect(trigger), vh, &mut ctx.styles);
        }
        if let Some(intro) = intro.as_mut() {
            for event in intro.tick(time.dt as f32, &mut ctx.tweens, &mut ctx.styles) {
                match event {
                    IntroEvent::LoaderExit => {
                        if let Some(loader) = loader.as_ref() {
                            set_class(loader, "exit", true)?;
                        }
                    }
                    IntroEvent::HeroReveal => log::debug!("intro: hero revealed"),
                }
            }
        }

        ctx.animate(time.dt as f32);
        elements.flush(&mut ctx.styles)
    }
}

type Shared = Rc<RefCell<PageState>>;

/// Owns every page component, its listeners and frame loops.
///
/// Lives in a `thread_local!` slot in the crate root because wasm-bindgen
/// exports free functions, not structs with lifetimes.
pub struct PageRunner {
    state: Shared,
    window: Window,
    document: Document,
    theme_binding: Option<SubscriptionId>,
    orbital: Option<OrbitalMount>,
    #[cfg(feature = "liquid")]
    liquid: Option<LiquidMount>,
    frame: Option<FrameLoop>,
    listeners: Vec<Listener>,
}

impl PageRunner {
    pub fn new(config: SiteConfig) -> Result<Self, JsValue> {
        let window = dom::window()?;
        let document = dom::document()?;
        let root = document.document_element().ok_or("no document element")?;
        let body: Element = document.body().ok_or("no body")?.into();
        let style: Rc<dyn StyleSource> = Rc::new(ComputedStyle::new(window.clone(), body));

        let mut ctx = PageContext::new(config, Box::new(LocalStore::open(&window)));

        // The attribute writer goes first so later subscribers read the new styles.
        let icon = document
            .get_element_by_id("theme-toggle")
            .and_then(|button| button.query_selector("svg").ok().flatten());
        let theme_binding = bind_theme_attribute(&ctx.bus(), root, icon);
        ctx.theme.apply_current();

        let bus = ctx.bus();
        let orbital_config = ctx.config.orbital;
        #[cfg(feature = "liquid")]
        let liquid_config = ctx.config.liquid;

        let mut runner = Self {
            state: Rc::new(RefCell::new(PageState::new(ctx))),
            window,
            document,
            theme_binding: Some(theme_binding),
            orbital: None,
            #[cfg(feature = "liquid")]
            liquid: None,
            frame: None,
            listeners: Vec::new(),
        };

        runner.wire_theme_buttons()?;
        runner.wire_smooth_scroll()?;
        runner.wire_anchors()?;
        runner.wire_navbar()?;
        runner.wire_reveals()?;
        runner.wire_marquee()?;
        runner.wire_magnetic()?;
        runner.wire_cursor()?;
        runner.wire_sheet()?;
        runner.wire_intro()?;

        runner.orbital = OrbitalMount::mount(
            &runner.window,
            &runner.document,
            bus.clone(),
            Rc::clone(&style),
            &orbital_config,
        )?;
        #[cfg(feature = "liquid")]
        {
            runner.liquid = match LiquidMount::mount(&runner.window, &runner.document, bus, style, &liquid_config) {
                Ok(mount) => mount,
                Err(err) => {
                    log::warn!("liquid: disabled: {err:?}");
                    None
                }
            };
        }

        log::info!(
            "page: {} animated elements, {} listeners",
            runner.state.borrow().elements.len(),
            runner.listeners.len()
        );
        Ok(runner)
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.frame.is_some() {
            return Ok(());
        }
        {
            let mut state = self.state.borrow_mut();
            let limit = dom::scroll_limit(&self.window, &self.document);
            state.ctx.scroll().borrow_mut().set_limit(limit);
            let PageState { ctx, intro, .. } = &mut *state;
            if let Some(intro) = intro.as_mut() {
                intro.begin(&mut ctx.tweens, &mut ctx.styles);
            }
        }

        let state = Rc::clone(&self.state);
        let window = self.window.clone();
        self.frame = Some(FrameLoop::start(move |time| {
            if let Err(err) = state.borrow_mut().frame(time, &window) {
                log::error!("page frame: {err:?}");
            }
            true
        })?);

        if let Some(orbital) = self.orbital.as_mut() {
            orbital.start()?;
        }
        #[cfg(feature = "liquid")]
        if let Some(liquid) = self.liquid.as_mut() {
            liquid.start()?;
        }
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        self.state.borrow().ctx.theme.theme()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.borrow_mut().ctx.theme.set_theme(theme);
    }

    pub fn scroll(&self) -> SharedScroll {
        self.state.borrow().ctx.scroll()
    }

    /// Tear everything down: frame loops, listeners, subscriptions.
    pub fn dispose(&mut self) {
        self.frame = None;
        self.listeners.clear();
        if let Some(mut orbital) = self.orbital.take() {
            orbital.dispose();
        }
        #[cfg(feature = "liquid")]
        if let Some(mut liquid) = self.liquid.take() {
            liquid.dispose();
        }
        if let Some(id) = self.theme_binding.take() {
            self.state.borrow().ctx.bus().unsubscribe(id);
        }
        log::debug!("page: disposed");
    }

    // -- Wiring --

    fn listen<F>(&mut self, target: &web_sys::EventTarget, event: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(Listener::new(target, event, handler)?);
        Ok(())
    }

    fn wire_theme_buttons(&mut self) -> Result<(), JsValue> {
        if let Some(button) = self.document.get_element_by_id("theme-toggle") {
            let state = Rc::clone(&self.state);
            self.listen(button.as_ref(), "click", move |_| {
                state.borrow_mut().ctx.theme.toggle_main();
            })?;
        } else {
            log::warn!("theme: no #theme-toggle");
        }
        if let Some(button) = self.document.get_element_by_id("blue-mode-toggle") {
            let state = Rc::clone(&self.state);
            self.listen(button.as_ref(), "click", move |_| {
                state.borrow_mut().ctx.theme.toggle_blue();
            })?;
        }
        Ok(())
    }

    fn wire_smooth_scroll(&mut self) -> Result<(), JsValue> {
        let scroll = self.scroll();

        {
            let scroll = Rc::clone(&scroll);
            let state = Rc::clone(&self.state);
            self.listeners.push(Listener::active(self.window.as_ref(), "wheel", move |event| {
                let captured = state
                    .borrow()
                    .sheet
                    .as_ref()
                    .is_some_and(|sheet| sheet.captures_scroll());
                if captured {
                    return;
                }
                if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                    if scroll.borrow_mut().on_wheel(wheel.delta_y()) {
                        event.prevent_default();
                    }
                }
            })?);
        }

        let last_touch = Rc::new(Cell::new(None::<f64>));
        {
            let last_touch = Rc::clone(&last_touch);
            self.listen(self.window.clone().as_ref(), "touchstart", move |event| {
                last_touch.set(touch_y(&event));
            })?;
        }
        {
            let scroll = Rc::clone(&scroll);
            self.listeners.push(Listener::active(self.window.as_ref(), "touchmove", move |event| {
                let Some(y) = touch_y(&event) else { return };
                let delta = last_touch.get().map(|last| last - y).unwrap_or(0.0);
                last_touch.set(Some(y));
                if scroll.borrow_mut().on_touch(delta) {
                    event.prevent_default();
                }
            })?);
        }

        for event in ["resize", "load"] {
            let scroll = Rc::clone(&scroll);
            let window = self.window.clone();
            let document = self.document.clone();
            self.listen(self.window.clone().as_ref(), event, move |_| {
                scroll.borrow_mut().set_limit(dom::scroll_limit(&window, &document));
            })?;
        }
        Ok(())
    }

    fn wire_anchors(&mut self) -> Result<(), JsValue> {
        let scroll = self.scroll();
        for anchor in query_all(&self.document, "a[href^=\"#\"]")? {
            let scroll = Rc::clone(&scroll);
            let document = self.document.clone();
            let window = self.window.clone();
            let link = anchor.clone();
            self.listen(anchor.as_ref(), "click", move |event| {
                event.prevent_default();
                let Some(href) = link.get_attribute("href") else { return };
                if href == "#" {
                    return;
                }
                let Ok(Some(target)) = document.query_selector(&href) else { return };
                let top = rect(&target).top + window.scroll_y().unwrap_or(0.0);
                let mut scroll = scroll.borrow_mut();
                let options = ScrollToOptions::anchor(scroll.config());
                scroll.scroll_to(top, options);
            })?;
        }
        Ok(())
    }

    fn wire_navbar(&mut self) -> Result<(), JsValue> {
        let Some(nav) = query(&self.document, ".nav")? else {
            log::debug!("navbar: no .nav");
            return Ok(());
        };
        let mut state = self.state.borrow_mut();
        let navbar = SmartNavbar::new(&state.ctx.config.navbar);
        state.navbar = Some((nav, navbar));
        Ok(())
    }

    fn wire_reveals(&mut self) -> Result<(), JsValue> {
        let mut state = self.state.borrow_mut();
        let state = &mut *state;

        for block in query_all(&self.document, ".reveal")? {
            let id = state.track(block);
            arm(state, &RevealPreset::BLOCK, id, &[id])?;
        }

        let groups = [
            (".projects-list", ".project-item", RevealPreset::PROJECTS),
            (".contact-links-grid", ".contact-item", RevealPreset::CONTACT),
        ];
        for (trigger, items, preset) in groups {
            let Some(trigger) = query(&self.document, trigger)? else { continue };
            let trigger = state.track(trigger);
            let items: Vec<ElementId> = query_all(&self.document, items)?
                .into_iter()
                .map(|item| state.track(item))
                .collect();
            arm(state, &preset, trigger, &items)?;
        }

        for title in query_all(&self.document, TITLE_SELECTOR)? {
            let PageState { ctx, elements, .. } = &mut *state;
            let chars = split_title(&self.document, &title, ctx.ids_mut(), elements)?;
            let trigger = state.track(title);
            arm(state, &RevealPreset::TITLE_CHARS, trigger, &chars)?;
        }

        log::debug!("reveals: {} groups armed", state.reveals.len());
        Ok(())
    }

    fn wire_marquee(&mut self) -> Result<(), JsValue> {
        let (Some(trigger), Some(track)) = (
            query(&self.document, ".marquee")?,
            query(&self.document, ".marquee-track")?,
        ) else {
            return Ok(());
        };
        let mut state = self.state.borrow_mut();
        let track = state.track(track);
        state.marquee = Some((trigger, Marquee::new(track).map_err(js_error)?));
        Ok(())
    }

    fn wire_magnetic(&mut self) -> Result<(), JsValue> {
        for element in query_all(&self.document, MAGNETIC_SELECTOR)? {
            let button = MagneticButton::new(self.state.borrow_mut().track(element.clone()));
            {
                let state = Rc::clone(&self.state);
                let target = element.clone();
                self.listen(element.as_ref(), "mousemove", move |event| {
                    let Some(mouse) = event.dyn_ref::<MouseEvent>() else { return };
                    let pointer = Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32);
                    let mut state = state.borrow_mut();
                    let ctx = &mut state.ctx;
                    button.on_move(pointer, &rect(&target), &mut ctx.tweens, &mut ctx.styles);
                })?;
            }
            let state = Rc::clone(&self.state);
            self.listen(element.as_ref(), "mouseleave", move |_| {
                let mut state = state.borrow_mut();
                let ctx = &mut state.ctx;
                button.on_leave(&mut ctx.tweens, &mut ctx.styles);
            })?;
        }
        Ok(())
    }

    fn wire_cursor(&mut self) -> Result<(), JsValue> {
        let (Some(root), Some(dot), Some(circle)) = (
            query(&self.document, ".cursor")?,
            query(&self.document, ".cursor-dot")?,
            query(&self.document, ".cursor-circle")?,
        ) else {
            log::debug!("cursor: markup missing, skipping");
            return Ok(());
        };
        {
            let mut state = self.state.borrow_mut();
            let dot = state.track(dot);
            let circle = state.track(circle);
            state.cursor = Some(CursorFollower::new(dot, circle));
        }

        let state = Rc::clone(&self.state);
        self.listen(self.window.clone().as_ref(), "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else { return };
            let pointer = Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32);
            let mut state = state.borrow_mut();
            let PageState { ctx, cursor, .. } = &mut *state;
            if let Some(cursor) = cursor.as_ref() {
                cursor.on_move(pointer, &mut ctx.tweens, &mut ctx.styles);
            }
        })?;

        for target in query_all(&self.document, HOVER_SELECTOR)? {
            for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
                let state = Rc::clone(&self.state);
                let root = root.clone();
                self.listen(target.as_ref(), event, move |_| {
                    let mut state = state.borrow_mut();
                    let PageState { ctx, cursor, .. } = &mut *state;
                    let Some(cursor) = cursor.as_mut() else { return };
                    let changed = if hovering {
                        cursor.on_hover_enter(&mut ctx.tweens, &mut ctx.styles)
                    } else {
                        cursor.on_hover_leave(&mut ctx.tweens, &mut ctx.styles)
                    };
                    if changed {
                        if let Err(err) = set_class(&root, "hover", hovering) {
                            log::warn!("cursor: {err:?}");
                        }
                    }
                })?;
            }
        }
        Ok(())
    }

    fn wire_sheet(&mut self) -> Result<(), JsValue> {
        let Some(dom) = SheetDom::find(&self.document)? else {
            return Ok(());
        };
        let dom = Rc::new(dom);
        {
            let mut state = self.state.borrow_mut();
            let scroll = state.ctx.scroll();
            state.sheet = Some(ProjectSheet::new(scroll));
        }

        for trigger in query_all(&self.document, ".project-trigger")? {
            let state = Rc::clone(&self.state);
            let dom = Rc::clone(&dom);
            let element: Element = trigger.clone().into();
            self.listen(trigger.as_ref(), "click", move |_| {
                let data = match project_data(&element) {
                    Ok(Some(data)) => data,
                    Ok(None) => return,
                    Err(err) => {
                        log::warn!("sheet: {err:?}");
                        return;
                    }
                };
                let Some(view) = state.borrow_mut().sheet.as_mut().map(|sheet| sheet.open(&data)) else {
                    return;
                };
                if let Err(err) = dom.render(&view).and_then(|_| dom.set_visible(true)) {
                    log::warn!("sheet: {err:?}");
                }
            })?;
        }

        let closers: Vec<HtmlElement> = dom.close.iter().cloned().chain([dom.overlay.clone()]).collect();
        for closer in closers {
            let state = Rc::clone(&self.state);
            let dom = Rc::clone(&dom);
            self.listen(closer.as_ref(), "click", move |_| {
                let closed = state.borrow_mut().sheet.as_mut().is_some_and(|sheet| sheet.close());
                if closed {
                    if let Err(err) = dom.set_visible(false) {
                        log::warn!("sheet: {err:?}");
                    }
                }
            })?;
        }

        {
            let state = Rc::clone(&self.state);
            let dom = Rc::clone(&dom);
            self.listen(self.document.clone().as_ref(), "keydown", move |event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key()) else { return };
                let closed = state.borrow_mut().sheet.as_mut().is_some_and(|sheet| sheet.on_key(&key));
                if closed {
                    if let Err(err) = dom.set_visible(false) {
                        log::warn!("sheet: {err:?}");
                    }
                }
            })?;
        }

        // Keep the sheet's own scrolling native.
        for event in ["wheel", "touchmove"] {
            self.listeners
                .push(Listener::active(dom.sheet.as_ref(), event, |event| event.stop_propagation())?);
        }
        Ok(())
    }

    fn wire_intro(&mut self) -> Result<(), JsValue> {
        let loader = query(&self.document, ".loader")?;
        let letters = query_all(&self.document, ".loader-name span")?;
        let lines = query_all(&self.document, ".hero-title-line span")?;
        let details = query_all(&self.document, ".hero-description, .hero-cta, .hero-scroll")?;
        if loader.is_none() && lines.is_empty() {
            log::debug!("intro: no loader or hero, skipping");
            return Ok(());
        }

        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        let targets = IntroTargets {
            letters: letters.into_iter().map(|el| state.track(el)).collect(),
            title_lines: lines.into_iter().map(|el| state.track(el)).collect(),
            details: details.into_iter().map(|el| state.track(el)).collect(),
        };
        state.intro = Some(IntroSequence::new(targets, &mut state.ctx.styles));
        state.loader = loader;
        Ok(())
    }
}

impl Drop for PageRunner {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn arm(state: &mut PageState, preset: &RevealPreset, trigger: ElementId, targets: &[ElementId]) -> Result<(), JsValue> {
    let ctx = &mut state.ctx;
    let group = RevealGroup::arm(preset, trigger, targets, &mut ctx.tweens, &mut ctx.styles).map_err(js_error)?;
    state.reveals.push(group);
    Ok(())
}

fn touch_y(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(touch.client_y() as f64)
}
