//! WebGL 1 renderer for the cloth preview.
//!
//! One program, three buffers (positions, normals, indices). Shading is a
//! Lambert term plus a broad Blinn-Phong lobe whose width and strength come
//! from roughness and metalness. Both faces are lit so orbiting behind the
//! cloth does not make it vanish.

use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as Gl, WebGlShader,
    WebGlUniformLocation,
};

use super::{ClothScene, Mat4, OrbitControls, PlaneGeometry};
use crate::error::SceneError;

const VERTEX_SHADER: &str = r#"
attribute vec3 a_position;
attribute vec3 a_normal;

uniform mat4 u_projection;
uniform mat4 u_view;
uniform mat4 u_model;

varying vec3 v_normal;
varying vec3 v_world;

void main() {
    vec4 world = u_model * vec4(a_position, 1.0);
    v_world = world.xyz;
    // model is a pure rotation, so it also transforms normals
    v_normal = (u_model * vec4(a_normal, 0.0)).xyz;
    gl_Position = u_projection * u_view * world;
}
"#;

const FRAGMENT_SHADER: &str = r#"
precision mediump float;

uniform vec3 u_color;
uniform vec3 u_eye;
uniform vec3 u_to_light;
uniform float u_ambient;
uniform float u_directional;
uniform float u_roughness;
uniform float u_metalness;

varying vec3 v_normal;
varying vec3 v_world;

void main() {
    vec3 n = normalize(v_normal);
    if (!gl_FrontFacing) {
        n = -n;
    }
    vec3 v = normalize(u_eye - v_world);
    vec3 h = normalize(u_to_light + v);

    float diffuse = max(dot(n, u_to_light), 0.0);
    float r4 = pow(max(u_roughness, 0.05), 4.0);
    float shininess = max(2.0 / r4 - 2.0, 1.0);
    float specular = pow(max(dot(n, h), 0.0), shininess) * (shininess + 2.0) / 8.0;
    vec3 f0 = mix(vec3(0.04), u_color, u_metalness);

    vec3 albedo = u_color * (1.0 - u_metalness);
    vec3 lit = albedo * (u_ambient + u_directional * diffuse)
        + f0 * specular * u_directional * diffuse;

    gl_FragColor = vec4(pow(lit, vec3(1.0 / 2.2)), 1.0);
}
"#;

struct Uniforms {
    projection: WebGlUniformLocation,
    view: WebGlUniformLocation,
    model: WebGlUniformLocation,
    color: WebGlUniformLocation,
    eye: WebGlUniformLocation,
    to_light: WebGlUniformLocation,
    ambient: WebGlUniformLocation,
    directional: WebGlUniformLocation,
    roughness: WebGlUniformLocation,
    metalness: WebGlUniformLocation,
}

impl Uniforms {
    fn locate(gl: &Gl, program: &WebGlProgram) -> Result<Self, SceneError> {
        let find = |name: &'static str| {
            gl.get_uniform_location(program, name)
                .ok_or(SceneError::Uniform(name))
        };
        Ok(Self {
            projection: find("u_projection")?,
            view: find("u_view")?,
            model: find("u_model")?,
            color: find("u_color")?,
            eye: find("u_eye")?,
            to_light: find("u_to_light")?,
            ambient: find("u_ambient")?,
            directional: find("u_directional")?,
            roughness: find("u_roughness")?,
            metalness: find("u_metalness")?,
        })
    }
}

/// Owns every GL object of the preview; dropping it releases them.
pub struct ClothRenderer {
    gl: Gl,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    positions: WebGlBuffer,
    normals: WebGlBuffer,
    indices: WebGlBuffer,
    index_count: i32,
    position_attrib: u32,
    normal_attrib: u32,
    uniforms: Uniforms,
    geometry: PlaneGeometry,
    scene: ClothScene,
}

impl ClothRenderer {
    /// Acquire a WebGL context on `canvas` and upload the plane.
    pub fn new(canvas: HtmlCanvasElement, scene: ClothScene) -> Result<Self, SceneError> {
        let gl = canvas
            .get_context("webgl")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<Gl>().ok())
            .ok_or(SceneError::ContextUnavailable)?;

        let vertex = compile_shader(&gl, Gl::VERTEX_SHADER, VERTEX_SHADER)?;
        let fragment = compile_shader(&gl, Gl::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vertex, &fragment)?;
        // The linked program keeps its own copy
        gl.delete_shader(Some(&vertex));
        gl.delete_shader(Some(&fragment));

        let uniforms = Uniforms::locate(&gl, &program)?;
        let position_attrib = attrib(&gl, &program, "a_position")?;
        let normal_attrib = attrib(&gl, &program, "a_normal")?;

        let geometry = scene.geometry();
        let usage = if scene.motion.is_animated() {
            Gl::DYNAMIC_DRAW
        } else {
            Gl::STATIC_DRAW
        };
        let positions = create_buffer(&gl, "position")?;
        upload_f32(&gl, &positions, &geometry.positions, usage);
        let normals = create_buffer(&gl, "normal")?;
        upload_f32(&gl, &normals, &geometry.normals, usage);

        let indices = create_buffer(&gl, "index")?;
        gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&indices));
        gl.buffer_data_with_array_buffer_view(
            Gl::ELEMENT_ARRAY_BUFFER,
            &js_sys::Uint16Array::from(geometry.indices.as_slice()),
            Gl::STATIC_DRAW,
        );

        gl.enable(Gl::DEPTH_TEST);
        let [r, g, b] = scene.background;
        gl.clear_color(r, g, b, 1.0);

        tracing::debug!(
            vertices = geometry.vertex_count(),
            indices = geometry.indices.len(),
            "cloth preview initialised"
        );

        Ok(Self {
            index_count: geometry.indices.len() as i32,
            gl,
            canvas,
            program,
            positions,
            normals,
            indices,
            position_attrib,
            normal_attrib,
            uniforms,
            geometry,
            scene,
        })
    }

    /// Draw one frame. `t` is the time in seconds since the loop started.
    pub fn draw(&mut self, orbit: &OrbitControls, t: f32) {
        let gl = &self.gl;
        let (width, height) = self.fit_canvas();
        gl.viewport(0, 0, width as i32, height as i32);
        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);

        if self.scene.motion.is_animated() {
            self.geometry.animate(self.scene.motion, t);
            upload_f32(gl, &self.positions, &self.geometry.positions, Gl::DYNAMIC_DRAW);
            upload_f32(gl, &self.normals, &self.geometry.normals, Gl::DYNAMIC_DRAW);
        }

        gl.use_program(Some(&self.program));
        bind_attrib(gl, &self.positions, self.position_attrib);
        bind_attrib(gl, &self.normals, self.normal_attrib);
        gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&self.indices));

        let camera = &self.scene.camera;
        let aspect = if height > 0 { width as f32 / height as f32 } else { 1.0 };
        let projection =
            Mat4::perspective(camera.fov_y_degrees.to_radians(), aspect, camera.near, camera.far);
        let eye = orbit.eye();
        let view = Mat4::look_at(eye, orbit.target(), super::Vec3::UP);

        let u = &self.uniforms;
        gl.uniform_matrix4fv_with_f32_array(Some(&u.projection), false, &projection.0);
        gl.uniform_matrix4fv_with_f32_array(Some(&u.view), false, &view.0);
        gl.uniform_matrix4fv_with_f32_array(Some(&u.model), false, &self.scene.model_matrix().0);
        gl.uniform3fv_with_f32_array(Some(&u.color), &self.scene.material.linear_rgb());
        gl.uniform3fv_with_f32_array(Some(&u.eye), &eye.to_array());
        gl.uniform3fv_with_f32_array(Some(&u.to_light), &self.scene.lighting.to_light().to_array());
        gl.uniform1f(Some(&u.ambient), self.scene.lighting.ambient_intensity);
        gl.uniform1f(Some(&u.directional), self.scene.lighting.directional_intensity);
        gl.uniform1f(Some(&u.roughness), self.scene.material.roughness);
        gl.uniform1f(Some(&u.metalness), self.scene.material.metalness);

        gl.draw_elements_with_i32(Gl::TRIANGLES, self.index_count, Gl::UNSIGNED_SHORT, 0);
    }

    /// Match the drawing buffer to the CSS size times the device pixel ratio.
    fn fit_canvas(&self) -> (u32, u32) {
        let ratio = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let width = (f64::from(self.canvas.client_width()) * ratio).round() as u32;
        let height = (f64::from(self.canvas.client_height()) * ratio).round() as u32;
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
        (width, height)
    }
}

impl Drop for ClothRenderer {
    fn drop(&mut self) {
        let gl = &self.gl;
        gl.delete_buffer(Some(&self.positions));
        gl.delete_buffer(Some(&self.normals));
        gl.delete_buffer(Some(&self.indices));
        gl.delete_program(Some(&self.program));
        tracing::debug!("cloth preview released");
    }
}

fn compile_shader(gl: &Gl, kind: u32, source: &str) -> Result<WebGlShader, SceneError> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| SceneError::ShaderCompile("createShader returned null".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown error".into());
        gl.delete_shader(Some(&shader));
        Err(SceneError::ShaderCompile(log))
    }
}

fn link_program(
    gl: &Gl,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, SceneError> {
    let program = gl
        .create_program()
        .ok_or_else(|| SceneError::ProgramLink("createProgram returned null".into()))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown error".into());
        gl.delete_program(Some(&program));
        Err(SceneError::ProgramLink(log))
    }
}

fn attrib(gl: &Gl, program: &WebGlProgram, name: &'static str) -> Result<u32, SceneError> {
    let location = gl.get_attrib_location(program, name);
    u32::try_from(location).map_err(|_| SceneError::ProgramLink(format!("attribute {name} missing")))
}

fn create_buffer(gl: &Gl, what: &'static str) -> Result<WebGlBuffer, SceneError> {
    gl.create_buffer().ok_or(SceneError::Buffer(what))
}

fn upload_f32(gl: &Gl, buffer: &WebGlBuffer, data: &[f32], usage: u32) {
    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(buffer));
    gl.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &js_sys::Float32Array::from(data), usage);
}

fn bind_attrib(gl: &Gl, buffer: &WebGlBuffer, location: u32) {
    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(buffer));
    gl.vertex_attrib_pointer_with_i32(location, 3, Gl::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(location);
}
