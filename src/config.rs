//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor con soporte para
//! argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./http_static_server --port 8080 --directory ./static
//! ```
//!
//! Con un puerto distinto de 80 los clientes envían `Host: host:puerto`, que el
//! parser rechaza (un solo ':' por header). Ver el módulo `server`.
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 STATIC_DIR=./public ./http_static_server
//! ```

use clap::Parser;

/// Configuración del servidor de archivos estáticos
#[derive(Debug, Clone, Parser)]
#[command(name = "http_static_server")]
#[command(about = "Servidor HTTP/1.x de archivos estáticos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor (0 = puerto efímero)
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio raíz de los archivos servidos
    #[arg(short, long, default_value = "static", env = "STATIC_DIR")]
    pub directory: String,

    /// Archivo servido para `/` y para targets terminados en `/`
    #[arg(long, default_value = "index.html", env = "INDEX_FILE")]
    pub index: String,

    // === Límites ===

    /// Máximo de bytes leídos del request antes de responder 413
    #[arg(long = "max-request-bytes", default_value = "8192", env = "MAX_REQUEST_BYTES")]
    pub max_request_bytes: usize,

    /// Timeout de lectura del socket en milisegundos
    #[arg(long = "read-timeout-ms", default_value = "5000", env = "READ_TIMEOUT_MS")]
    pub read_timeout_ms: u64,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use http_static_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.directory.trim().is_empty() {
            return Err("Static directory must not be empty".to_string());
        }

        if self.index.trim().is_empty() || self.index.contains('/') {
            return Err("Index file must be a plain file name".to_string());
        }

        if self.max_request_bytes == 0 {
            return Err("Max request bytes must be >= 1".to_string());
        }

        if self.read_timeout_ms == 0 {
            return Err("Read timeout must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            directory: "static".to_string(),
            index: "index.html".to_string(),
            max_request_bytes: 8192,
            read_timeout_ms: 5_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.directory, "static");
        assert_eq!(config.index, "index.html");
    }

    #[test]
    fn test_address_custom() {
        let mut config = Config::default();
        config.host = "127.0.0.1".to_string();
        config.port = 3000;
        assert_eq!(config.address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_validate_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_directory() {
        let mut config = Config::default();
        config.directory = " ".to_string();
        assert!(config.validate().unwrap_err().contains("Static directory"));
    }

    #[test]
    fn test_validate_index_with_slash() {
        let mut config = Config::default();
        config.index = "sub/index.html".to_string();
        assert!(config.validate().unwrap_err().contains("Index file"));
    }

    #[test]
    fn test_validate_zero_request_bytes() {
        let mut config = Config::default();
        config.max_request_bytes = 0;
        assert!(config.validate().unwrap_err().contains("Max request bytes"));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.read_timeout_ms = 0;
        assert!(config.validate().unwrap_err().contains("Read timeout"));
    }

    // ==================== CLI ====================

    #[test]
    fn test_parse_cli_args() {
        let config = Config::try_parse_from([
            "http_static_server",
            "--port",
            "9000",
            "--directory",
            "/srv/www",
            "--index",
            "home.html",
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.directory, "/srv/www");
        assert_eq!(config.index, "home.html");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_cli_short_flags() {
        let config = Config::try_parse_from(["http_static_server", "-p", "81", "-d", "www"]).unwrap();

        assert_eq!(config.port, 81);
        assert_eq!(config.directory, "www");
    }

    #[test]
    fn test_parse_cli_invalid_port() {
        assert!(Config::try_parse_from(["http_static_server", "--port", "abc"]).is_err());
    }
}
