//! # Módulo HTTP
//!
//! Este módulo implementa el modelo de mensajes HTTP/1.x desde cero, sin
//! usar librerías de alto nivel. Incluye:
//!
//! - Parsing de requests desde texto
//! - Escritura de responses a texto
//! - Códigos de estado que usa el servidor
//!
//! Ambas operaciones son funciones puras: no hacen I/O ni guardan estado
//! entre llamadas, así que se pueden invocar desde varios threads a la vez.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /index.html HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! body opcional
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 404 Not Found
//! Header-Name: Value
//! body opcional
//! ```

pub mod error;     // Taxonomía de errores
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Escritura de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use error::{ErrorKind, HttpError};
pub use request::Request;
pub use response::{LineEnding, Response};
pub use status::StatusCode;

/// Resultado de las operaciones de parsing y escritura
pub type Result<T> = std::result::Result<T, HttpError>;
