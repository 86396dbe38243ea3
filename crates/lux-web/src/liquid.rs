use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use lux_engine::liquid::shader::{
    A_POSITION, A_UV, FRAGMENT_SHADER, U_COLOR, U_HOVER, U_MOUSE, U_TIME, U_VIEW_PROJECTION, VERTEX_SHADER,
};
use lux_engine::liquid::{view_projection, LiquidPanel, PlaneMesh, PlaneVertex};
use lux_engine::theme::SubscriptionId;
use lux_engine::{LiquidConfig, StyleSource, ThemeBus};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlCanvasElement, HtmlElement, MouseEvent, WebGl2RenderingContext as GL, WebGlProgram,
    WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject, Window,
};

use crate::dom::{rect, Listener};
use crate::frame_loop::FrameLoop;

pub const CONTAINER_ID: &str = "liquid-container";

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(kind).ok_or("unable to create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(JsValue::from_str(&format!("shader compile failed: {info}")))
    }
}

fn link_program(gl: &GL, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram, JsValue> {
    let program = gl.create_program().ok_or("unable to create program")?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);
    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(JsValue::from_str(&format!("program link failed: {info}")))
    }
}

struct Uniforms {
    view_projection: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    mouse: Option<WebGlUniformLocation>,
    hover: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
}

/// GL resources plus the panel model they draw.
struct LiquidGl {
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    index_count: i32,
    uniforms: Uniforms,
    view_projection: [f32; 16],
    panel: LiquidPanel,
}

impl LiquidGl {
    fn new(gl: GL, panel: LiquidPanel, backing: i32) -> Result<Self, JsValue> {
        let vertex = compile_shader(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let fragment = compile_shader(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vertex, &fragment)?;

        let size = panel.config().size as f32;
        let mesh = PlaneMesh::new(size, panel.config().segments);

        let vao = gl.create_vertex_array().ok_or("unable to create vertex array")?;
        gl.bind_vertex_array(Some(&vao));

        let vbo = gl.create_buffer().ok_or("unable to create vertex buffer")?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vbo));
        gl.buffer_data_with_u8_array(GL::ARRAY_BUFFER, mesh.vertex_bytes(), GL::STATIC_DRAW);

        let stride = PlaneVertex::STRIDE_BYTES as i32;
        gl.enable_vertex_attrib_array(A_POSITION);
        gl.vertex_attrib_pointer_with_i32(A_POSITION, 3, GL::FLOAT, false, stride, 0);
        gl.enable_vertex_attrib_array(A_UV);
        gl.vertex_attrib_pointer_with_i32(A_UV, 2, GL::FLOAT, false, stride, PlaneVertex::UV_OFFSET_BYTES as i32);

        let ibo = gl.create_buffer().ok_or("unable to create index buffer")?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&ibo));
        gl.buffer_data_with_u8_array(
            GL::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(&mesh.indices),
            GL::STATIC_DRAW,
        );
        gl.bind_vertex_array(None);

        gl.viewport(0, 0, backing, backing);
        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

        let uniforms = Uniforms {
            view_projection: gl.get_uniform_location(&program, U_VIEW_PROJECTION),
            time: gl.get_uniform_location(&program, U_TIME),
            mouse: gl.get_uniform_location(&program, U_MOUSE),
            hover: gl.get_uniform_location(&program, U_HOVER),
            color: gl.get_uniform_location(&program, U_COLOR),
        };

        Ok(Self {
            gl,
            program,
            vao,
            index_count: mesh.indices.len() as i32,
            uniforms,
            view_projection: view_projection(size).to_cols_array(),
            panel,
        })
    }

    fn draw(&mut self, now_ms: f64) {
        let u = self.panel.frame(now_ms);
        let gl = &self.gl;

        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.use_program(Some(&self.program));

        gl.uniform_matrix4fv_with_f32_array(self.uniforms.view_projection.as_ref(), false, &self.view_projection);
        gl.uniform1f(self.uniforms.time.as_ref(), u.time);
        gl.uniform2f(self.uniforms.mouse.as_ref(), u.mouse.x, u.mouse.y);
        gl.uniform1f(self.uniforms.hover.as_ref(), u.hover);
        gl.uniform3f(self.uniforms.color.as_ref(), u.color[0], u.color[1], u.color[2]);

        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_elements_with_i32(GL::TRIANGLES, self.index_count, GL::UNSIGNED_SHORT, 0);
        gl.bind_vertex_array(None);
    }
}

/// The liquid grid panel inside `#liquid-container`.
pub struct LiquidMount {
    inner: Rc<RefCell<LiquidGl>>,
    frame: Option<FrameLoop>,
    listeners: Vec<Listener>,
    bus: ThemeBus,
    subscription: Option<SubscriptionId>,
}

impl LiquidMount {
    /// Returns `Ok(None)` when the page has no liquid container.
    pub fn mount(
        window: &Window,
        document: &Document,
        bus: ThemeBus,
        style: Rc<dyn StyleSource>,
        config: &LiquidConfig,
    ) -> Result<Option<Self>, JsValue> {
        let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
            log::debug!("liquid: no #{CONTAINER_ID}, skipping");
            return Ok(None);
        };
        let container = container.dyn_into::<HtmlElement>()?;

        let mut panel = LiquidPanel::new(*config);
        panel.refresh_color(&*style);
        let ratio = panel.pixel_ratio(window.device_pixel_ratio());
        let backing = (config.size * ratio).round() as u32;

        let canvas = document.create_element("canvas")?.dyn_into::<HtmlCanvasElement>()?;
        canvas.set_width(backing);
        canvas.set_height(backing);
        let css = canvas.style();
        css.set_property("width", &format!("{}px", config.size))?;
        css.set_property("height", &format!("{}px", config.size))?;
        container.insert_before(&canvas, container.first_child().as_ref())?;

        let gl = canvas
            .get_context("webgl2")?
            .ok_or("WebGL2 not supported")?
            .dyn_into::<GL>()?;
        let inner = Rc::new(RefCell::new(LiquidGl::new(gl, panel, backing as i32)?));

        let mut listeners = Vec::with_capacity(2);
        {
            let inner = Rc::clone(&inner);
            let target = container.clone();
            listeners.push(Listener::new(container.as_ref(), "mousemove", move |event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    let pointer = Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32);
                    inner.borrow_mut().panel.on_pointer_move(pointer, &rect(&target));
                }
            })?);
        }
        {
            let inner = Rc::clone(&inner);
            listeners.push(Listener::new(container.as_ref(), "mouseleave", move |_| {
                inner.borrow_mut().panel.on_pointer_leave();
            })?);
        }

        let subscription = {
            let inner = Rc::clone(&inner);
            bus.subscribe(move |_| inner.borrow_mut().panel.refresh_color(&*style))
        };

        log::info!("liquid: {}px panel at {}x pixel ratio", config.size, ratio);
        Ok(Some(Self {
            inner,
            frame: None,
            listeners,
            bus,
            subscription: Some(subscription),
        }))
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.frame.is_some() {
            return Ok(());
        }
        let inner = Rc::clone(&self.inner);
        self.frame = Some(FrameLoop::start(move |time| {
            inner.borrow_mut().draw(time);
            true
        })?);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(frame) = self.frame.take() {
            frame.cancel();
        }
    }

    pub fn dispose(&mut self) {
        self.stop();
        self.listeners.clear();
        if let Some(id) = self.subscription.take() {
            self.bus.unsubscribe(id);
        }
    }
}

impl Drop for LiquidMount {
    fn drop(&mut self) {
        self.dispose();
    }
}
