//! # Errores del modelo de mensajes HTTP
//! src/http/error.rs
//!
//! Cada regla violada durante el parsing o la escritura aborta la operación
//! completa con un único error. No hay resultados parciales.

/// Errores del parser de requests y del writer de responses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    /// Texto vacío, solo espacios o no decodificable como UTF-8
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// La request line no tiene exactamente 3 tokens
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    #[error("Missing method: {0}")]
    MissingMethod(String),

    /// Target vacío o sin '/'
    #[error("Invalid request target: {0}")]
    InvalidTarget(String),

    /// Protocolo vacío o que no empieza por "HTTP"
    #[error("Invalid protocol: {0}")]
    InvalidProtocol(String),

    /// Header sin ':', con ':' al inicio, con más de un ':' o con nombre/valor vacío
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Missing protocol: {0}")]
    MissingProtocol(String),

    #[error("Missing status text: {0}")]
    MissingStatusText(String),

    #[error("Missing headers: {0}")]
    MissingHeaders(String),
}

/// Tipo de error sin mensaje, útil para decidir sin inspeccionar el texto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    MalformedRequestLine,
    MissingMethod,
    InvalidTarget,
    InvalidProtocol,
    MalformedHeader,
    MissingProtocol,
    MissingStatusText,
    MissingHeaders,
}

impl HttpError {
    /// Retorna el tipo de error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HttpError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            HttpError::MalformedRequestLine(_) => ErrorKind::MalformedRequestLine,
            HttpError::MissingMethod(_) => ErrorKind::MissingMethod,
            HttpError::InvalidTarget(_) => ErrorKind::InvalidTarget,
            HttpError::InvalidProtocol(_) => ErrorKind::InvalidProtocol,
            HttpError::MalformedHeader(_) => ErrorKind::MalformedHeader,
            HttpError::MissingProtocol(_) => ErrorKind::MissingProtocol,
            HttpError::MissingStatusText(_) => ErrorKind::MissingStatusText,
            HttpError::MissingHeaders(_) => ErrorKind::MissingHeaders,
        }
    }
}
