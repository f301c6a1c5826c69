//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes (un thread por conexión)
//! 3. Lee y parsea el request HTTP
//! 4. Genera y envía la response, y cierra la conexión
//!
//! Nota: el parser acepta un solo ':' por header, así que `Host: localhost:8080`
//! se rechaza con 400. Clientes reales (curl, navegadores) deben apuntar al
//! puerto 80 o enviar el header `Host` sin puerto.

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
