use log::info;

/// Version injectée par `build.rs`, ou "Unknown".
pub fn dependency_version(version: Option<&'static str>) -> &'static str {
    match version {
        Some(v) if !v.is_empty() => v,
        _ => "Unknown",
    }
}

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    // Info système (Rust version, OS)
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    info!("Rust core dependancies");
    info!("  GL    version: {}", dependency_version(option_env!("GL")));
    info!("  GLFW  version: {}", dependency_version(option_env!("GLFW")));
    info!("  IMGUI version: {}", dependency_version(option_env!("IMGUI")));
}
