// liquid/shader.rs
//
// GLSL ES 3.00 sources for the liquid panel.
// Vertex: ripples the plane along z around the pointer while hovered.
// Fragment: an 18-cell grid masked to a disc.

pub const U_VIEW_PROJECTION: &str = "uViewProjection";
pub const U_TIME: &str = "uTime";
pub const U_MOUSE: &str = "uMouse";
pub const U_HOVER: &str = "uHover";
pub const U_COLOR: &str = "uColor";

pub const A_POSITION: u32 = 0;
pub const A_UV: u32 = 1;

pub const VERTEX_SHADER: &str = r#"#version 300 es
layout(location = 0) in vec3 position;
layout(location = 1) in vec2 uv;

uniform mat4 uViewProjection;
uniform float uTime;
uniform vec2 uMouse;
uniform float uHover;

out vec2 vUv;

void main() {
    vUv = uv;
    vec3 pos = position;
    float dist = distance(uv, uMouse);
    float wave = sin(dist * 12.0 - uTime * 2.5) * (1.0 - smoothstep(0.0, 1.0, dist));
    pos.z += wave * uHover * 30.0;
    gl_Position = uViewProjection * vec4(pos, 1.0);
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;

in vec2 vUv;
uniform vec3 uColor;

out vec4 fragColor;

void main() {
    vec2 grid = fract(vUv * 18.0);
    float line = step(0.92, grid.x) + step(0.92, grid.y);
    float dist = distance(vUv, vec2(0.5));
    float mask = 1.0 - smoothstep(0.48, 0.5, dist);
    fragColor = vec4(uColor, line * mask * 0.6);
}
"#;
