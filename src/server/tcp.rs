//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio thread,
//! atiende un único request y se cierra (sin keep-alive).

use crate::config::Config;
use crate::http::{LineEnding, Request, StatusCode};
use crate::router::{Reply, Router};
use crate::static_files::StaticFiles;
use std::io::{self, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Tamaño de cada lectura del socket
const READ_CHUNK: usize = 4096;

/// Resultado de leer el encabezado de un request
#[derive(Debug, PartialEq, Eq)]
enum Incoming {
    /// El cliente cerró sin enviar nada
    Closed,

    /// Bytes leídos hasta la línea vacía (o hasta EOF)
    Complete(Vec<u8>),

    /// Se superó el límite sin encontrar la línea vacía
    TooLarge,

    /// Venció el timeout de lectura antes de la línea vacía
    TimedOut,
}

/// Límites aplicados a cada conexión
#[derive(Debug, Clone, Copy)]
struct Limits {
    max_request_bytes: usize,
    read_timeout: Duration,
}

/// Servidor HTTP de archivos estáticos
pub struct Server {
    config: Config,
    router: Arc<Router>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let files = StaticFiles::new(config.directory.clone(), config.index.clone());

        Self {
            config,
            router: Arc::new(Router::new(files)),
        }
    }

    /// Abre el listener en la dirección configurada
    pub fn bind(&self) -> io::Result<TcpListener> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;

        tracing::info!(
            address = %listener.local_addr()?,
            directory = %self.config.directory,
            "Listening for connections"
        );

        if !std::path::Path::new(&self.config.directory).is_dir() {
            tracing::warn!(
                directory = %self.config.directory,
                "Static directory does not exist, every request will get 404"
            );
        }

        Ok(listener)
    }

    /// Acepta conexiones para siempre, un thread por conexión
    pub fn serve(&self, listener: TcpListener) -> io::Result<()> {
        let limits = Limits {
            max_request_bytes: self.config.max_request_bytes,
            read_timeout: Duration::from_millis(self.config.read_timeout_ms),
        };

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, &router, limits) {
                            tracing::error!(error = %e, "Connection failed");
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to accept connection");
                }
            }
        }

        Ok(())
    }

    /// Bind + serve
    pub fn run(&self) -> io::Result<()> {
        let listener = self.bind()?;
        self.serve(listener)
    }

    fn handle_connection(mut stream: TcpStream, router: &Router, limits: Limits) -> io::Result<()> {
        let start = Instant::now();
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        stream.set_read_timeout(Some(limits.read_timeout))?;

        let incoming = match read_request(&mut stream, limits.max_request_bytes) {
            Ok(incoming) => incoming,
            // Cliente lento: se le responde 400 en vez de cortar en silencio
            Err(e) if is_timeout(&e) => {
                tracing::warn!(
                    %peer,
                    timeout_ms = limits.read_timeout.as_millis() as u64,
                    "Request read timed out"
                );
                Incoming::TimedOut
            }
            Err(e) => {
                tracing::debug!(%peer, error = %e, "Connection dropped while reading request");
                return Ok(());
            }
        };

        let (reply, target) = match incoming {
            Incoming::Closed => {
                tracing::debug!(%peer, "Connection closed without data");
                return Ok(());
            }
            Incoming::TimedOut => (Reply::bad_request(), None),
            Incoming::TooLarge => {
                tracing::warn!(%peer, limit = limits.max_request_bytes, "Request too large");
                (Reply::error(StatusCode::PayloadTooLarge), None)
            }
            Incoming::Complete(raw) => match Request::from_bytes(&raw) {
                Ok(request) => {
                    tracing::debug!(
                        %peer,
                        request = %serde_json::to_string(&request).unwrap_or_default(),
                        "Parsed request"
                    );
                    let target = format!("{} {}", request.method(), request.target());
                    (router.route(&request), Some(target))
                }
                Err(e) => {
                    tracing::warn!(%peer, kind = ?e.kind(), error = %e, "Rejected malformed request");
                    (Reply::bad_request(), None)
                }
            },
        };

        send_reply(&mut stream, &reply)?;

        let request = target.as_deref().unwrap_or("-");
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        if reply.status.is_error() {
            tracing::warn!(%peer, request, status = reply.status_code(), elapsed_ms, "Request failed");
        } else {
            tracing::info!(
                %peer,
                request,
                status = reply.status_code(),
                bytes = reply.payload.len(),
                elapsed_ms,
                "Request served"
            );
        }

        Ok(())
    }
}

/// Lee del socket hasta la línea vacía que cierra los headers
fn read_request(stream: &mut impl Read, max_bytes: usize) -> io::Result<Incoming> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let bytes_read = stream.read(&mut chunk)?;
        if bytes_read == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..bytes_read]);

        if has_blank_line(&buffer) {
            break;
        }
        if buffer.len() > max_bytes {
            return Ok(Incoming::TooLarge);
        }
    }

    if buffer.is_empty() {
        Ok(Incoming::Closed)
    } else {
        Ok(Incoming::Complete(buffer))
    }
}

/// El timeout de lectura aparece como WouldBlock en Unix y TimedOut en Windows
fn is_timeout(error: &io::Error) -> bool {
    matches!(error.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut)
}

fn has_blank_line(buffer: &[u8]) -> bool {
    buffer.windows(4).any(|w| w == b"\r\n\r\n") || buffer.windows(2).any(|w| w == b"\n\n")
}

/// Envía status line + headers, la línea vacía y luego el payload binario
fn send_reply(stream: &mut impl Write, reply: &Reply) -> io::Result<()> {
    let head = reply
        .response
        .write_with(LineEnding::Crlf)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    stream.write_all(head.as_bytes())?;
    stream.write_all(b"\r\n\r\n")?;
    stream.write_all(&reply.payload)?;
    stream.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::net::Shutdown;
    use tempfile::TempDir;

    fn limits() -> Limits {
        Limits {
            max_request_bytes: 1024,
            read_timeout: Duration::from_secs(5),
        }
    }

    /// Atiende una conexión en un thread y retorna lo que recibió el cliente
    fn roundtrip(router: Router, raw: &[u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            Server::handle_connection(stream, &router, limits()).unwrap();
        });

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(raw).unwrap();
        client.shutdown(Shutdown::Write).unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        server.join().unwrap();

        String::from_utf8_lossy(&buf).into_owned()
    }

    fn empty_router() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let router = Router::new(StaticFiles::new(dir.path(), "index.html"));
        (dir, router)
    }

    #[test]
    fn test_read_request_stops_at_blank_line() {
        let mut input = Cursor::new(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n".to_vec());
        let incoming = read_request(&mut input, 1024).unwrap();

        assert_eq!(incoming, Incoming::Complete(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n".to_vec()));
    }

    #[test]
    fn test_read_request_lf_only() {
        let mut input = Cursor::new(b"GET / HTTP/1.1\n\n".to_vec());
        assert!(matches!(read_request(&mut input, 1024).unwrap(), Incoming::Complete(_)));
    }

    #[test]
    fn test_read_request_eof_without_blank_line() {
        let mut input = Cursor::new(b"GET / HTTP/1.1".to_vec());
        assert_eq!(
            read_request(&mut input, 1024).unwrap(),
            Incoming::Complete(b"GET / HTTP/1.1".to_vec())
        );
    }

    #[test]
    fn test_read_request_empty() {
        let mut input = Cursor::new(Vec::new());
        assert_eq!(read_request(&mut input, 1024).unwrap(), Incoming::Closed);
    }

    #[test]
    fn test_read_request_too_large() {
        let mut input = Cursor::new(vec![b'a'; 10_000]);
        assert_eq!(read_request(&mut input, 1024).unwrap(), Incoming::TooLarge);
    }

    #[test]
    fn test_send_reply_layout() {
        let reply = Reply::error(StatusCode::NotFound);
        let mut out = Vec::new();
        send_reply(&mut out, &reply).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.contains("Content-Type: text/html\r\n"));
        assert!(text.ends_with("\r\n\r\n<html><body><h1>404 Not Found</h1></body></html>"));
    }

    #[test]
    fn test_handle_connection_serves_file() {
        let (dir, router) = empty_router();
        std::fs::write(dir.path().join("index.html"), "hola").unwrap();

        let text = roundtrip(router, b"GET / HTTP/1.1\r\n\r\n");

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Length: 4"));
        assert!(text.ends_with("\r\n\r\nhola"));
    }

    #[test]
    fn test_handle_connection_parse_error() {
        let (_dir, router) = empty_router();
        let text = roundtrip(router, b"\x00\x01\x02\x03garbage");

        assert!(text.starts_with("HTTP/1.1 400 Bad Request"));
    }

    #[test]
    fn test_handle_connection_malformed_header() {
        let (_dir, router) = empty_router();
        let text = roundtrip(router, b"GET / HTTP/1.1\r\nHost: localhost:8080\r\n\r\n");

        assert!(text.starts_with("HTTP/1.1 400 Bad Request"));
    }

    #[test]
    fn test_handle_connection_slow_client_gets_bad_request() {
        let (_dir, router) = empty_router();
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let limits = Limits {
                max_request_bytes: 1024,
                read_timeout: Duration::from_millis(200),
            };
            Server::handle_connection(stream, &router, limits).unwrap();
        });

        // Request incompleto: nunca llega la línea vacía ni el EOF
        let mut client = TcpStream::connect(addr).unwrap();
        client.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        client.write_all(b"GET / HTTP/1.1\r\nHost: x\r\n").unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        server.join().unwrap();

        let text = String::from_utf8_lossy(&buf);
        assert!(text.starts_with("HTTP/1.1 400 Bad Request"), "got: {}", text);
    }

    #[test]
    fn test_is_timeout() {
        assert!(is_timeout(&io::Error::from(io::ErrorKind::WouldBlock)));
        assert!(is_timeout(&io::Error::from(io::ErrorKind::TimedOut)));
        assert!(!is_timeout(&io::Error::from(io::ErrorKind::ConnectionReset)));
    }

    #[test]
    fn test_handle_connection_peer_closed_immediately() {
        let (_dir, router) = empty_router();
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            // El read retorna 0 y la función debe terminar Ok(())
            Server::handle_connection(stream, &router, limits()).unwrap();
        });

        drop(TcpStream::connect(addr).unwrap());
        server.join().unwrap();
    }
}
