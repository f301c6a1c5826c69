//! # Escritura de Respuestas HTTP
//!
//! Este módulo define el modelo de una respuesta HTTP y su serialización a
//! texto.
//!
//! ## Formato producido
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: text/html
//! Content-Length: 13
//! <body opcional>
//! ```
//!
//! La status line no lleva terminador propio: cada header y el body se
//! anteponen con un salto de línea. El body se emite tal cual, sin escapar
//! ni recortar. La línea vacía que separa headers de un payload binario la
//! agrega quien envía la respuesta por el socket.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http_static_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::NotFound).with_body("missing");
//! assert_eq!(response.write().unwrap(), "HTTP/1.1 404 Not Found\nmissing");
//! ```

use super::{HttpError, Result, StatusCode};
use serde::Serialize;
use std::collections::HashMap;

/// Protocolo por defecto de las respuestas que arma el servidor
pub const DEFAULT_PROTOCOL: &str = "HTTP/1.1";

/// Terminador de línea usado al serializar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// "\n"
    Lf,

    /// "\r\n", lo que espera un cliente HTTP real
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Protocolo (ej: "HTTP/1.1")
    protocol: String,

    /// Código de estado; cualquier entero es aceptado
    status_code: i32,

    /// Texto de estado (ej: "OK")
    status_text: String,

    /// Headers HTTP. `None` representa un mapa ausente, que es un error al
    /// escribir; un mapa vacío es válido.
    headers: Option<HashMap<String, String>>,

    /// Cuerpo de texto opcional
    body: Option<String>,
}

impl Response {
    /// Crea una respuesta HTTP/1.1 con el código y su reason phrase
    ///
    /// Por defecto no tiene headers ni body.
    pub fn new(status: StatusCode) -> Self {
        Self::from_parts(
            DEFAULT_PROTOCOL,
            i32::from(status.as_u16()),
            status.reason_phrase(),
            Some(HashMap::new()),
            None,
        )
    }

    /// Construye una respuesta a partir de todas sus partes
    ///
    /// No valida nada: la validación ocurre en [`Response::write`].
    pub fn from_parts(
        protocol: impl Into<String>,
        status_code: i32,
        status_text: impl Into<String>,
        headers: Option<HashMap<String, String>>,
        body: Option<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            status_code,
            status_text: status_text.into(),
            headers,
            body,
        }
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe. Si el mapa estaba ausente,
    /// se crea.
    ///
    /// # Ejemplo
    /// ```
    /// use http_static_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_header("Content-Type", "text/plain");
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Establece el cuerpo de texto de la respuesta
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Serializa la respuesta usando "\n" como terminador de línea
    ///
    /// # Errores
    ///
    /// En orden, el primero que aplique:
    /// - `MissingProtocol` si el protocolo está vacío
    /// - `MissingStatusText` si el texto de estado está vacío
    /// - `MissingHeaders` si el mapa de headers está ausente
    pub fn write(&self) -> Result<String> {
        self.write_with(LineEnding::Lf)
    }

    /// Serializa la respuesta con el terminador de línea indicado
    ///
    /// # Ejemplo
    /// ```
    /// use http_static_server::http::{LineEnding, Response, StatusCode};
    ///
    /// let text = Response::new(StatusCode::Ok)
    ///     .with_header("Server", "x")
    ///     .write_with(LineEnding::Crlf)
    ///     .unwrap();
    /// assert_eq!(text, "HTTP/1.1 200 OK\r\nServer: x");
    /// ```
    pub fn write_with(&self, line_ending: LineEnding) -> Result<String> {
        if self.protocol.trim().is_empty() {
            return Err(HttpError::MissingProtocol(
                "response protocol is required".to_string(),
            ));
        }

        if self.status_text.trim().is_empty() {
            return Err(HttpError::MissingStatusText(format!(
                "status text is required for status {}",
                self.status_code
            )));
        }

        let headers = self.headers.as_ref().ok_or_else(|| {
            HttpError::MissingHeaders("response headers must not be absent".to_string())
        })?;

        let eol = line_ending.as_str();

        // 1. Status line: HTTP/x.y StatusCode StatusText
        let mut text = format!("{} {} {}", self.protocol, self.status_code, self.status_text);

        // 2. Headers, cada uno en su propia línea
        for (name, value) in headers {
            text.push_str(eol);
            text.push_str(name);
            text.push_str(": ");
            text.push_str(value);
        }

        // 3. Body tal cual
        if let Some(body) = &self.body {
            text.push_str(eol);
            text.push_str(body);
        }

        Ok(text)
    }

    /// Obtiene el protocolo
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    /// Obtiene el texto de estado
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> Option<&HashMap<String, String>> {
        self.headers.as_ref()
    }

    /// Obtiene un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|headers| headers.get(name))
            .map(|s| s.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
