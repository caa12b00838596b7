use anyhow::{anyhow, Result};
use gl::types::*;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::ffi::{CStr, CString};
use std::os::raw::c_void;
use std::ptr;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGED_IDS: Mutex<HashSet<u32>> = Mutex::new(HashSet::new());
}

#[macro_export]
macro_rules! cstr {
    ($s:expr) => {
        concat!($s, "\0").as_ptr() as *const i8
    };
}

unsafe fn gl_string(name: GLenum) -> String {
    let raw = gl::GetString(name);
    if raw.is_null() {
        return "Unknown".into();
    }
    CStr::from_ptr(raw as *const i8)
        .to_string_lossy()
        .into_owned()
}

/// Affiche les informations OpenGL / GPU du contexte actuel
/// # Safety
///
/// L'appelant doit s'assurer que le contexte OpenGL est valide et actif.
pub unsafe fn show_opengl_context_info() {
    info!("🖥 OpenGL context info:");
    info!("  Vendor   : {}", gl_string(gl::VENDOR));
    info!("  Renderer : {}", gl_string(gl::RENDERER));
    info!("  OpenGL   : {}", gl_string(gl::VERSION));
    info!("  GLSL     : {}", gl_string(gl::SHADING_LANGUAGE_VERSION));

    let mut num_ext = 0;
    gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut num_ext);
    debug!("  Extensions: {} extensions detected", num_ext);

    // Consommer le glerror si nécessaire
    let err = gl::GetError();
    if err != gl::NO_ERROR {
        warn!("glerror consumed after getting context info: 0x{:X}", err);
    }
}

/// Filtre des messages de debug : `true` si le message doit être logué.
/// Chaque ID n'est logué qu'une fois.
fn should_log_debug_message(id: GLuint, severity: GLenum) -> bool {
    if severity == gl::DEBUG_SEVERITY_NOTIFICATION {
        return false;
    }

    match LOGGED_IDS.lock() {
        Ok(mut logged) => logged.insert(id),
        Err(_) => false,
    }
}

extern "system" fn gl_debug_callback(
    source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    _length: GLsizei,
    message: *const i8,
    _user_param: *mut c_void,
) {
    if !should_log_debug_message(id, severity) {
        return;
    }

    // Unsafe uniquement pour lire le C string
    let msg = unsafe { CStr::from_ptr(message).to_string_lossy() };

    let src_str = match source {
        gl::DEBUG_SOURCE_API => "API",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "Window System",
        gl::DEBUG_SOURCE_SHADER_COMPILER => "Shader Compiler",
        gl::DEBUG_SOURCE_APPLICATION => "Application",
        _ => "Other",
    };

    let sev_str = match severity {
        gl::DEBUG_SEVERITY_HIGH => "High",
        gl::DEBUG_SEVERITY_MEDIUM => "Medium",
        gl::DEBUG_SEVERITY_LOW => "Low",
        _ => "Unknown",
    };

    warn!(
        "[OpenGL Debug] id: {:X}, source: {}, type: 0x{:X}, severity: {}, message: {}",
        id, src_str, type_, sev_str, msg
    );
}

/// Configure le debug OpenGL via `glDebugMessageCallback`.
///
/// # Safety
///
/// Le contexte OpenGL doit être actif. Sans `GL_KHR_debug` (contexte 3.3
/// sur certains pilotes), l'appel est ignoré.
pub unsafe fn setup_opengl_debug() {
    if !gl::DebugMessageCallback::is_loaded() {
        debug!("glDebugMessageCallback unavailable, GL debug output disabled");
        return;
    }
    gl::Enable(gl::DEBUG_OUTPUT);
    gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
    gl::DebugMessageCallback(Some(gl_debug_callback), ptr::null());
}

unsafe fn compile_shader(src: &str, ty: GLenum) -> Result<u32> {
    let shader = gl::CreateShader(ty);
    let c_str = CString::new(src)?;
    gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut success = gl::FALSE as GLint;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let mut len = 0;
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(0) as usize];
        gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
        gl::DeleteShader(shader);

        let log = String::from_utf8_lossy(&buf);
        return Err(anyhow!(
            "Shader compilation failed:\n{}",
            log.trim_matches(char::from(0))
        ));
    }
    Ok(shader)
}

/// Compile et lie un programme vertex + fragment.
///
/// # Safety
/// Cette fonction est unsafe car elle interagit directement avec des pointeurs OpenGL.
pub unsafe fn compile_shader_program(vertex_src: &str, fragment_src: &str) -> Result<u32> {
    let vs = compile_shader(vertex_src, gl::VERTEX_SHADER)?;
    let fs = match compile_shader(fragment_src, gl::FRAGMENT_SHADER) {
        Ok(fs) => fs,
        Err(e) => {
            gl::DeleteShader(vs);
            return Err(e);
        }
    };

    let program = gl::CreateProgram();
    gl::AttachShader(program, vs);
    gl::AttachShader(program, fs);
    gl::LinkProgram(program);
    gl::DeleteShader(vs);
    gl::DeleteShader(fs);

    let mut success = gl::FALSE as GLint;
    gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let mut len = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(0) as usize];
        gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
        gl::DeleteProgram(program);
        return Err(anyhow!(
            "Shader link failed:\n{}",
            String::from_utf8_lossy(&buf)
        ));
    }
    Ok(program)
}
