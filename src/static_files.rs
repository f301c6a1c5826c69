//! # Archivos Estáticos
//! src/static_files.rs
//!
//! Traduce el target de un request a un archivo dentro del directorio raíz
//! y lo carga en memoria junto con su Content-Type y ETag.
//!
//! ## Reglas de resolución
//!
//! - Se descarta la query (`?...`) y el fragmento (`#...`)
//! - `/` o cualquier target terminado en `/` sirve el archivo índice
//! - Un componente `..` nunca sale del directorio raíz: es `Forbidden`

use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Errores al buscar o leer un archivo
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Forbidden path: {0}")]
    Forbidden(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Archivo cargado y listo para enviar
#[derive(Debug, Clone)]
pub struct StaticFile {
    pub content: Vec<u8>,
    pub content_type: &'static str,
    pub etag: String,
}

/// Resolver de archivos bajo un directorio raíz
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    index: String,
}

impl StaticFiles {
    /// Crea un resolver para `root` usando `index` como archivo por defecto
    pub fn new(root: impl Into<PathBuf>, index: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            index: index.into(),
        }
    }

    /// Resuelve un target a la ruta de un archivo existente
    ///
    /// # Ejemplo
    /// ```no_run
    /// use http_static_server::static_files::StaticFiles;
    ///
    /// let files = StaticFiles::new("static", "index.html");
    /// let path = files.resolve("/").unwrap();
    /// assert!(path.ends_with("index.html"));
    /// ```
    pub fn resolve(&self, target: &str) -> Result<PathBuf, FileError> {
        // Quitar query y fragmento
        let path_part = target
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();

        let mut relative = PathBuf::new();
        for component in Path::new(path_part.trim_start_matches('/')).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(FileError::Forbidden(target.to_string()));
                }
            }
        }

        if path_part.is_empty() || path_part.ends_with('/') {
            relative.push(&self.index);
        }

        let full_path = self.root.join(relative);
        if !full_path.is_file() {
            return Err(FileError::NotFound(target.to_string()));
        }

        Ok(full_path)
    }

    /// Resuelve y lee el archivo completo
    pub fn load(&self, target: &str) -> Result<StaticFile, FileError> {
        let path = self.resolve(target)?;
        let content = fs::read(&path)?;

        Ok(StaticFile {
            content_type: content_type(&path),
            etag: etag(&content),
            content,
        })
    }
}

/// Content-Type según la extensión del archivo
pub fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "txt" => "text/plain",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// ETag fuerte: SHA256 del contenido entre comillas
fn etag(content: &[u8]) -> String {
    format!("\"{:x}\"", Sha256::digest(content))
}
