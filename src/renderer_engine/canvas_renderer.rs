use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use gl::types::*;
use log::info;
use memoffset::offset_of;
use std::mem;

use crate::cstr;
use crate::renderer_engine::{
    config::RendererConfig,
    pixel_canvas::PixelCanvas,
    r#trait::{Canvas, RendererEngine},
    tools::compile_shader_program,
};

/// Sommet du quad plein écran.
///
/// | Location | Type   | Champ |
/// |:--------:|:-------|:------|
/// | `0`      | `vec2` | `pos` (NDC) |
/// | `1`      | `vec2` | `uv`  |
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct QuadVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
}

/// Triangle strip couvrant tout l'écran.
/// La surface CPU a son origine en haut : le `v` est inversé ici plutôt
/// que de retourner l'image à chaque upload.
pub const FULLSCREEN_QUAD: [QuadVertex; 4] = [
    QuadVertex { pos: [-1.0, -1.0], uv: [0.0, 1.0] },
    QuadVertex { pos: [1.0, -1.0], uv: [1.0, 1.0] },
    QuadVertex { pos: [-1.0, 1.0], uv: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0], uv: [1.0, 0.0] },
];

const VERTEX_SRC: &str = r#"
    #version 330 core
    layout(location = 0) in vec2 aPos;
    layout(location = 1) in vec2 aUv;
    out vec2 vUv;
    void main() {
        vUv = aUv;
        gl_Position = vec4(aPos, 0.0, 1.0);
    }
"#;

const FRAGMENT_SRC: &str = r#"
    #version 330 core
    in vec2 vUv;
    out vec4 FragColor;
    uniform sampler2D uCanvas;
    void main() {
        FragColor = texture(uCanvas, vUv);
    }
"#;

/// Affiche la `PixelCanvas` des confettis par-dessus le reste de la frame.
pub struct CanvasRenderer {
    vao: u32,
    vbo: u32,
    texture_id: u32,
    shader_program: u32,
    loc_canvas: i32,

    texture_size: (u32, u32),
    window_size: (i32, i32),
    background: [f32; 4],
}

impl CanvasRenderer {
    /// Nécessite un contexte OpenGL courant (voir `GlfwWindowEngine::init`).
    pub fn new(width: i32, height: i32, config: &RendererConfig) -> Result<Self> {
        let shader_program = unsafe { compile_shader_program(VERTEX_SRC, FRAGMENT_SRC)? };
        let loc_canvas = unsafe { gl::GetUniformLocation(shader_program, cstr!("uCanvas")) };

        let (mut vao, mut vbo, mut texture_id) = (0u32, 0u32, 0u32);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            let bytes: &[u8] = bytemuck::cast_slice(&FULLSCREEN_QUAD);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            let stride = mem::size_of::<QuadVertex>() as GLsizei;
            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(QuadVertex, pos) as *const _,
            );
            gl::EnableVertexAttribArray(0);
            gl::VertexAttribPointer(
                1,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(QuadVertex, uv) as *const _,
            );
            gl::EnableVertexAttribArray(1);
            gl::BindVertexArray(0);

            gl::GenTextures(1, &mut texture_id);
            gl::BindTexture(gl::TEXTURE_2D, texture_id);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as i32);
            gl::BindTexture(gl::TEXTURE_2D, 0);
        }

        info!("✅ Canvas renderer ready ({} x {})", width, height);

        Ok(Self {
            vao,
            vbo,
            texture_id,
            shader_program,
            loc_canvas,
            texture_size: (0, 0),
            window_size: (width, height),
            background: config.background,
        })
    }

    /// Copie les pixels de la surface dans la texture.
    /// Réalloue la texture si la surface a changé de taille.
    fn upload(&mut self, canvas: &PixelCanvas) {
        let (width, height) = canvas.size();
        if width == 0 || height == 0 {
            return;
        }
        let data = canvas.image().as_raw();

        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, self.texture_id);
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            if self.texture_size != (width, height) {
                gl::TexImage2D(
                    gl::TEXTURE_2D,
                    0,
                    gl::RGBA as i32,
                    width as i32,
                    height as i32,
                    0,
                    gl::RGBA,
                    gl::UNSIGNED_BYTE,
                    data.as_ptr() as *const _,
                );
                self.texture_size = (width, height);
            } else {
                gl::TexSubImage2D(
                    gl::TEXTURE_2D,
                    0,
                    0,
                    0,
                    width as i32,
                    height as i32,
                    gl::RGBA,
                    gl::UNSIGNED_BYTE,
                    data.as_ptr() as *const _,
                );
            }
            gl::BindTexture(gl::TEXTURE_2D, 0);
        }
    }
}

impl RendererEngine for CanvasRenderer {
    fn set_window_size(&mut self, width: i32, height: i32) {
        self.window_size = (width, height);
        unsafe {
            gl::Viewport(0, 0, width, height);
        }
    }

    fn begin_frame(&mut self) {
        let [r, g, b, a] = self.background;
        unsafe {
            gl::Viewport(0, 0, self.window_size.0, self.window_size.1);
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn present_canvas(&mut self, canvas: &PixelCanvas, dirty: bool) {
        if dirty || self.texture_size != canvas.size() {
            self.upload(canvas);
        }
        if self.texture_size.0 == 0 || self.texture_size.1 == 0 {
            return;
        }

        unsafe {
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
            gl::UseProgram(self.shader_program);
            gl::ActiveTexture(gl::TEXTURE0);
            gl::BindTexture(gl::TEXTURE_2D, self.texture_id);
            gl::Uniform1i(self.loc_canvas, 0);
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLE_STRIP, 0, FULLSCREEN_QUAD.len() as i32);
            gl::BindVertexArray(0);
            gl::BindTexture(gl::TEXTURE_2D, 0);
            gl::UseProgram(0);
        }
    }

    fn close(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.texture_id);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteProgram(self.shader_program);
        }
        info!("🧹 Canvas renderer closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_vertex_layout() {
        assert_eq!(mem::size_of::<QuadVertex>(), 16);
        assert_eq!(offset_of!(QuadVertex, uv), 8);
        let bytes: &[u8] = bytemuck::cast_slice(&FULLSCREEN_QUAD);
        assert_eq!(bytes.len(), 64);
    }

    #[test]
    fn test_quad_uv_flips_vertically() {
        // bas de l'écran (NDC y = -1) -> dernière ligne de l'image (v = 1)
        for v in FULLSCREEN_QUAD {
            assert_eq!(v.uv[1], if v.pos[1] < 0.0 { 1.0 } else { 0.0 });
        }
    }
}
