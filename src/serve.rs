//! Local preview server for the generated site.
//!
//! Serves the output directory over HTTP with `tiny_http`. Each request is
//! handled independently; the server keeps no state between requests.
//!
//! Resolution order for a request path:
//!
//! 1. Any `..` segment → 404
//! 2. Existing file → that file
//! 3. Directory containing `index.html` → the index
//! 4. Otherwise → 404

use std::fs;
use std::io::Cursor;
use std::net::{IpAddr, SocketAddr};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tiny_http::{Header, Request, Response, Server, StatusCode};
use tracing::{debug, info, warn};

/// Successive ports tried when the configured one is taken.
const MAX_PORT_RETRIES: u16 = 10;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid interface address {0:?}")]
    Interface(String),
    #[error("failed to bind after {attempts} attempts (ports {first}-{last}): {reason}")]
    Bind {
        attempts: u16,
        first: u16,
        last: u16,
        reason: String,
    },
}

/// Serve `root` until the process is interrupted.
pub fn serve(root: &Path, interface: &str, port: u16) -> Result<(), ServeError> {
    let ip: IpAddr = interface
        .parse()
        .map_err(|_| ServeError::Interface(interface.to_string()))?;
    let (server, addr) = bind(ip, port)?;
    println!("Serving {} at http://{}", root.display(), addr);

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, root) {
            warn!("request error: {e}");
        }
    }
    Ok(())
}

/// Bind to `port`, or the next free one.
fn bind(ip: IpAddr, port: u16) -> Result<(Server, SocketAddr), ServeError> {
    let mut last_error = String::new();
    let mut last_port = port;
    for offset in 0..MAX_PORT_RETRIES {
        let Some(candidate) = port.checked_add(offset) else {
            break;
        };
        last_port = candidate;
        let addr = SocketAddr::new(ip, candidate);
        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    info!("port {port} in use, using {candidate} instead");
                }
                return Ok((server, addr));
            }
            Err(e) => {
                debug!(port = candidate, "bind failed: {e}");
                last_error = e.to_string();
            }
        }
    }
    Err(ServeError::Bind {
        attempts: MAX_PORT_RETRIES,
        first: port,
        last: last_port,
        reason: last_error,
    })
}

/// Map a request URL onto a file under `root`, if one should be served.
pub fn resolve_path(root: &Path, url: &str) -> Option<PathBuf> {
    // query and fragment come off before decoding so %3F / %23 stay in the name
    let raw = url.split(['?', '#']).next().unwrap_or_default();
    let path = urlencoding::decode(raw).ok()?;
    let relative = Path::new(path.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }

    let local = root.join(relative);
    if local.is_file() {
        return Some(local);
    }
    let index = local.join("index.html");
    index.is_file().then_some(index)
}

fn handle_request(request: Request, root: &Path) -> Result<(), ServeError> {
    let url = request.url().to_string();
    match resolve_path(root, &url) {
        Some(path) => {
            debug!(%url, file = %path.display(), "200");
            let content = fs::read(&path)?;
            let response = Response::from_data(content).with_header(content_type(&path));
            request.respond(response)?;
        }
        None => {
            debug!(%url, "404");
            let body = "404 Not Found";
            let response = Response::new(
                StatusCode(404),
                vec![text_header("text/plain; charset=utf-8")],
                Cursor::new(body),
                Some(body.len()),
                None,
            );
            request.respond(response)?;
        }
    }
    Ok(())
}

fn text_header(value: &'static str) -> Header {
    Header::from_bytes(&b"Content-Type"[..], value.as_bytes())
        .expect("static header is valid ASCII")
}

fn content_type(path: &Path) -> Header {
    text_header(guess_content_type(path))
}

/// MIME type from file extension; `application/octet-stream` when unknown.
pub fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
