//! # Códigos de Estado HTTP
//!
//! Códigos que el servidor de archivos estáticos emite. El writer de
//! responses acepta cualquier entero como código; este enum solo cubre los
//! que el servidor produce por sí mismo.
//!
//! - **2xx**: Éxito (200 OK)
//! - **3xx**: 304 cuando el ETag del cliente coincide
//! - **4xx**: Error del cliente (400, 403, 404, 405, 413)
//! - **5xx**: Error del servidor (500)

/// Representa los códigos de estado HTTP que emite nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - El archivo existe y se envía
    Ok = 200,

    /// 304 Not Modified - El cliente ya tiene la versión actual
    NotModified = 304,

    /// 400 Bad Request - Request malformado
    BadRequest = 400,

    /// 403 Forbidden - El target intenta salir del directorio raíz
    Forbidden = 403,

    /// 404 Not Found - Archivo no encontrado
    NotFound = 404,

    /// 405 Method Not Allowed - Solo se soportan GET y HEAD
    MethodNotAllowed = 405,

    /// 413 Payload Too Large - El request supera el límite configurado
    PayloadTooLarge = 413,

    /// 500 Internal Server Error - Error de I/O al leer el archivo
    InternalServerError = 500,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use http_static_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use http_static_server::http::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotModified => "Not Modified",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::PayloadTooLarge => "Payload Too Large",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// Verifica si el código indica error (4xx o 5xx)
    pub fn is_error(&self) -> bool {
        self.as_u16() >= 400
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
