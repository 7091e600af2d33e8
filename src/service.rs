//! Fixed-route HTTP backend.
//!
//! `route` is the whole request handling logic and does no I/O; `serve`
//! only moves requests between tiny_http and `route`.

use anyhow::{anyhow, Context, Result};
use tiny_http::{Header, Method, Response, Server};
use tracing::{info, warn};

pub const GREETING: &str = "Hello World depuis Spring Boot ! (port 8080) - Deploye sur EKS";
pub const HEALTH: &str = "UP";
pub const INFO: &str = "Spring Boot 3.2.0 - AT2 Exam";

pub const NOT_FOUND: &str = "404 Not Found";
pub const METHOD_NOT_ALLOWED: &str = "405 Method Not Allowed";

/// Path and body of every route answered with 200.
pub static ROUTES: [(&str, &str); 3] = [("/", GREETING), ("/health", HEALTH), ("/info", INFO)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: &'static str,
}

impl Reply {
    fn ok(body: &'static str) -> Self { Self { status: 200, body } }
}

/// GET answers known paths, HEAD answers them with an empty body, any other
/// method on a known path is 405. Unknown paths are 404 whatever the method.
pub fn route(method: &Method, url: &str) -> Reply {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let Some((_, body)) = ROUTES.iter().find(|(p, _)| *p == path) else {
        return Reply { status: 404, body: NOT_FOUND };
    };
    match method {
        Method::Get => Reply::ok(*body),
        Method::Head => Reply::ok(""),
        _ => Reply { status: 405, body: METHOD_NOT_ALLOWED },
    }
}

/// Binds `addr` and answers requests until the process is stopped.
pub fn serve(addr: &str) -> Result<()> {
    let server = Server::http(addr)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "backend listening");

    let content_type = Header::from_bytes(&b"Content-Type"[..], &b"text/plain; charset=utf-8"[..])
        .map_err(|_| anyhow!("invalid content-type header"))?;

    for request in server.incoming_requests() {
        let reply = route(request.method(), request.url());
        info!(method = %request.method(), url = %request.url(), status = reply.status, "request");
        let response = Response::from_string(reply.body)
            .with_status_code(reply.status)
            .with_header(content_type.clone());
        if let Err(e) = request.respond(response) {
            warn!(error = %e, "failed to send response");
        }
    }
    Ok(())
}
