//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Decide qué responder a un request ya parseado.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → StaticFiles → Reply (Response + payload)
//! ```
//!
//! Solo se soportan GET y HEAD. El payload binario viaja aparte de la
//! `Response`, que solo describe la status line y los headers.

use crate::http::{Request, Response, StatusCode};
use crate::static_files::{FileError, StaticFiles};

/// Métodos que acepta el servidor
pub const ALLOWED_METHODS: &[&str] = &["GET", "HEAD"];

/// Nombre que se anuncia en el header `Server`
pub const SERVER_NAME: &str = "http_static_server";

/// Respuesta lista para enviar: headers + bytes del cuerpo
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub response: Response,
    pub payload: Vec<u8>,
}

impl Reply {
    /// Respuesta de error con una página HTML mínima
    pub fn error(status: StatusCode) -> Self {
        let payload = format!("<html><body><h1>{}</h1></body></html>", status).into_bytes();
        let response = Response::new(status)
            .with_header("Content-Type", "text/html")
            .with_header("Content-Length", &payload.len().to_string());

        Self { status, response, payload }.with_common_headers()
    }

    /// 400 para requests que no se pudieron parsear
    pub fn bad_request() -> Self {
        Self::error(StatusCode::BadRequest)
    }

    /// Agrega headers comunes a todas las respuestas
    fn with_common_headers(mut self) -> Self {
        self.response = self
            .response
            .with_header("Server", SERVER_NAME)
            .with_header("Connection", "close");
        self
    }

    /// Código de estado de la respuesta
    pub fn status_code(&self) -> i32 {
        self.response.status_code()
    }
}

/// Router de archivos estáticos
pub struct Router {
    files: StaticFiles,
}

impl Router {
    /// Crea un router que sirve archivos desde `files`
    pub fn new(files: StaticFiles) -> Self {
        Self { files }
    }

    /// Genera la respuesta para un request
    ///
    /// # Ejemplo
    /// ```no_run
    /// use http_static_server::http::Request;
    /// use http_static_server::router::Router;
    /// use http_static_server::static_files::StaticFiles;
    ///
    /// let router = Router::new(StaticFiles::new("static", "index.html"));
    /// let request = Request::parse("GET / HTTP/1.1\r\n\r\n").unwrap();
    /// let reply = router.route(&request);
    /// ```
    pub fn route(&self, request: &Request) -> Reply {
        let mut reply = self.dispatch(request);

        // HEAD: mismos headers (incluido Content-Length), nunca cuerpo
        if request.method() == "HEAD" {
            reply.payload.clear();
        }

        reply
    }

    fn dispatch(&self, request: &Request) -> Reply {
        let method = request.method();
        if !ALLOWED_METHODS.contains(&method) {
            let mut reply = Reply::error(StatusCode::MethodNotAllowed);
            reply.response = reply.response.with_header("Allow", &ALLOWED_METHODS.join(", "));
            return reply;
        }

        let file = match self.files.load(request.target()) {
            Ok(file) => file,
            Err(FileError::NotFound(_)) => return Reply::error(StatusCode::NotFound),
            Err(FileError::Forbidden(_)) => return Reply::error(StatusCode::Forbidden),
            Err(FileError::Io(_)) => return Reply::error(StatusCode::InternalServerError),
        };

        // El cliente ya tiene esta versión
        if request.header("If-None-Match") == Some(file.etag.as_str()) {
            let response = Response::new(StatusCode::NotModified).with_header("ETag", &file.etag);
            return Reply {
                status: StatusCode::NotModified,
                response,
                payload: Vec::new(),
            }
            .with_common_headers();
        }

        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", file.content_type)
            .with_header("Content-Length", &file.content.len().to_string())
            .with_header("ETag", &file.etag);

        Reply {
            status: StatusCode::Ok,
            response,
            payload: file.content,
        }
        .with_common_headers()
    }
}
