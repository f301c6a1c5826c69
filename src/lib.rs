//! # HTTP Static Server
//! src/lib.rs
//!
//! Modelo de mensajes HTTP/1.x implementado desde cero (parser de requests
//! y writer de responses) más un servidor TCP mínimo que sirve archivos
//! estáticos sobre ese modelo.
//!
//! ## Arquitectura
//!
//! - `http`: Parsing de requests, escritura de responses, códigos de estado
//! - `static_files`: Resolución de targets a archivos del directorio raíz
//! - `router`: Decide la respuesta para cada request
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http_static_server::config::Config;
//! use http_static_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod http;
pub mod router;
pub mod server;
pub mod static_files;
