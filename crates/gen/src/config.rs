//! Driver configuration (spec §6 "External interfaces", "CLI surface").
//!
//! Mirrors the CLI's flat flag set rather than a config file format: the
//! spec names no manifest or TOML schema, so `CompilerConfig` is built
//! either directly in-process or from parsed CLI arguments.

use std::path::PathBuf;

/// Configuration threaded from the CLI (or from an embedding caller) down
/// into the driver.
#[derive(Debug, Clone, Default)]
pub struct CompilerConfig {
    /// `-n`: optional namespace/prefix string. The spec notes this is
    /// used by backends that need one and ignored by the JS backend, but
    /// it's still carried so the driver surface matches other targets.
    pub namespace: Option<String>,

    /// `-D`: preprocessor-style define symbols. Consumed upstream of code
    /// generation (by conditional-compilation resolution), but recorded
    /// here since the CLI accepts them before a backend is chosen.
    pub defines: Vec<String>,

    /// `-r`: reference-only files, not translated, only consulted by the
    /// resolver for cross-file symbol lookup.
    pub reference_paths: Vec<PathBuf>,

    /// `-I`: resource search directories. Resource bytes are loaded
    /// verbatim from files under these directories (spec §6 "Resource
    /// format").
    pub resource_dirs: Vec<PathBuf>,
}

impl CompilerConfig {
    pub fn new() -> Self {
        CompilerConfig::default()
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_define(mut self, symbol: impl Into<String>) -> Self {
        self.defines.push(symbol.into());
        self
    }

    pub fn with_reference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_paths.push(path.into());
        self
    }

    pub fn with_resource_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.resource_dirs.push(path.into());
        self
    }

    /// Loads a named resource by searching `resource_dirs` in order,
    /// returning the first match (spec §6: "bytes are loaded verbatim
    /// from files under `-I` directories").
    pub fn load_resource(&self, relative_name: &str) -> std::io::Result<Vec<u8>> {
        for dir in &self.resource_dirs {
            let candidate = dir.join(relative_name);
            if candidate.is_file() {
                return std::fs::read(candidate);
            }
        }
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("resource '{relative_name}' not found under any -I directory"),
        ))
    }
}
