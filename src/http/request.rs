//! # Parsing de Requests HTTP/1.x
//! src/http/request.rs
//!
//! Este módulo implementa un parser de requests HTTP desde cero.
//!
//! ## Formato de un Request
//!
//! ```text
//! GET /index.html HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! body opcional
//! ```
//!
//! ## Reglas
//!
//! 1. **Request Line**: exactamente 3 tokens separados por espacios:
//!    `METHOD TARGET PROTOCOL`. El target debe contener '/', el protocolo
//!    debe empezar por "HTTP" (sin importar mayúsculas).
//! 2. **Headers**: `Name: Value`, con exactamente un ':' por línea.
//!    Un nombre repetido sobrescribe el valor anterior.
//! 3. **Línea vacía**: separa headers del body.
//! 4. **Body**: todas las líneas restantes unidas con '\n'.
//!
//! Los saltos de línea se normalizan reemplazando "\r\n" por "\n" antes de
//! separar. Un '\r' suelto NO es un salto de línea.

use super::{HttpError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Representa un request HTTP parseado
///
/// Es un valor inmutable: solo se construye a través de [`Request::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    /// Método HTTP tal como llegó (ej: "GET")
    method: String,

    /// Target de la petición (ej: "/index.html")
    target: String,

    /// Protocolo (ej: "HTTP/1.1")
    protocol: String,

    /// Headers HTTP (ej: {"Host": "localhost:8080"})
    headers: HashMap<String, String>,

    /// Body del request, ausente si no hay contenido
    body: Option<String>,
}

impl Request {
    /// Parsea un request HTTP desde bytes
    ///
    /// Si los bytes no son UTF-8 válido retorna `InvalidArgument`.
    pub fn from_bytes(buffer: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(buffer).map_err(|e| {
            HttpError::InvalidArgument(format!("request text is not valid UTF-8: {}", e))
        })?;

        Self::parse(text)
    }

    /// Parsea un request HTTP desde texto
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado exitosamente
    /// * `Err(HttpError)` - La primera regla violada
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_static_server::http::Request;
    ///
    /// let raw = "GET /index.html HTTP/1.1\r\nHost: x\r\n\r\nhello";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.target(), "/index.html");
    /// assert_eq!(request.header("Host"), Some("x"));
    /// assert_eq!(request.body(), Some("hello"));
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(HttpError::InvalidArgument(
                "request text is empty".to_string(),
            ));
        }

        // Normalizar CRLF -> LF y separar solo por LF
        let normalized = raw.replace("\r\n", "\n");
        let lines: Vec<&str> = normalized.split('\n').collect();

        // 1. Request line
        let (method, target, protocol) = Self::parse_request_line(lines[0])?;

        // 2. Headers, hasta la primera línea vacía
        let (headers, body_start) = Self::parse_headers(&lines)?;

        // 3. Body
        let body = body_start.and_then(|start| Self::parse_body(&lines[start..]));

        Ok(Request {
            method,
            target,
            protocol,
            headers,
            body,
        })
    }

    /// Parsea la request line (primera línea del request)
    ///
    /// Formato: `GET /path HTTP/1.1`
    fn parse_request_line(line: &str) -> Result<(String, String, String)> {
        // Solo el espacio separa tokens; los espacios repetidos se descartan
        let parts: Vec<&str> = line.trim().split(' ').filter(|p| !p.is_empty()).collect();

        if parts.len() != 3 {
            return Err(HttpError::MalformedRequestLine(format!(
                "expected 3 tokens, found {}: '{}'",
                parts.len(),
                line
            )));
        }

        let (method, target, protocol) = (parts[0], parts[1], parts[2]);

        if method.trim().is_empty() {
            return Err(HttpError::MissingMethod(format!("'{}'", line)));
        }

        if target.trim().is_empty() || !target.contains('/') {
            return Err(HttpError::InvalidTarget(format!(
                "target must contain '/': '{}'",
                target
            )));
        }

        let has_http_prefix = protocol
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("HTTP"));
        if protocol.trim().is_empty() || !has_http_prefix {
            return Err(HttpError::InvalidProtocol(format!(
                "protocol must start with 'HTTP': '{}'",
                protocol
            )));
        }

        Ok((method.to_string(), target.to_string(), protocol.to_string()))
    }

    /// Parsea los headers HTTP a partir de la línea 1
    ///
    /// Retorna el mapa y el índice donde empieza el body. El índice es
    /// `None` si nunca apareció la línea vacía.
    fn parse_headers(lines: &[&str]) -> Result<(HashMap<String, String>, Option<usize>)> {
        let mut headers = HashMap::new();

        for (i, line) in lines.iter().enumerate().skip(1) {
            // La línea vacía marca el fin de los headers
            if line.is_empty() {
                return Ok((headers, Some(i + 1)));
            }

            let (name, value) = Self::parse_header_line(line)?;
            headers.insert(name, value);
        }

        Ok((headers, None))
    }

    /// Parsea una línea `Name: Value`
    fn parse_header_line(line: &str) -> Result<(String, String)> {
        let colon = match line.find(':') {
            Some(pos) if pos > 0 => pos,
            _ => {
                return Err(HttpError::MalformedHeader(format!(
                    "missing name or ':': '{}'",
                    line
                )))
            }
        };

        // Solo se permite un ':' por línea
        if line[colon + 1..].contains(':') {
            return Err(HttpError::MalformedHeader(format!(
                "more than one ':': '{}'",
                line
            )));
        }

        let name = line[..colon].trim();
        let value = line[colon + 1..].trim();

        if name.is_empty() || value.is_empty() {
            return Err(HttpError::MalformedHeader(format!(
                "empty name or value: '{}'",
                line
            )));
        }

        Ok((name.to_string(), value.to_string()))
    }

    /// Une las líneas restantes; un body vacío se considera ausente
    fn parse_body(lines: &[&str]) -> Option<String> {
        if lines.is_empty() {
            return None;
        }

        let body = lines.join("\n");
        if body.is_empty() {
            None
        } else {
            Some(body)
        }
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el target del request
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene el protocolo
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (el nombre se compara literalmente)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
