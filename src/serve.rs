//! Development server.
//!
//! Renders every request on demand from the current config, so edits to
//! `seokit.toml` show up on the next reload without a rebuild.
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │   Main Thread   │     │  Watcher Thread  │
//! │  (HTTP Server)  │     │  (seokit.toml)   │
//! └────────┬────────┘     └────────┬─────────┘
//!          │                       │
//!          ▼                       ▼
//!   Route::resolve()         reload_config()
//!   Route::render()                │
//!          ▲                       │
//!          └──────── cfg() ◄───────┘
//! ```

use crate::{
    config::{SiteConfig, cfg},
    log,
    router::{Response as Rendered, Route},
    watch::watch_config_blocking,
};
use anyhow::{Context, Result, anyhow};
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

/// Start the server and block until Ctrl+C.
pub fn serve_site() -> Result<()> {
    let c = cfg();
    let interface: IpAddr = c.serve.interface.parse()?;

    let (server, addr) = try_bind_port(interface, c.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    if c.serve.watch {
        std::thread::spawn(move || {
            if let Err(err) = watch_config_blocking() {
                log!("watch"; "{err}");
            }
        });
    }

    for request in server.incoming_requests() {
        // picks up hot-reloaded config
        if let Err(e) = handle_request(request, &cfg()) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }
    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    let head_only = match request.method() {
        Method::Get => false,
        Method::Head => true,
        _ => {
            return respond(request, plain(405, "405 Method Not Allowed"), false);
        }
    };

    let route = Route::resolve(request.url(), config);
    let rendered = route.render(config).unwrap_or_else(|e| {
        log!("error"; "{}: {:#}", request.url(), e);
        plain(500, "500 Internal Server Error")
    });

    if rendered.status != 200 {
        log!("request"; "{} {}", rendered.status, request.url());
    }
    respond(request, rendered, head_only)
}

fn plain(status: u16, body: &str) -> Rendered {
    Rendered {
        status,
        content_type: "text/plain; charset=utf-8",
        body: body.into(),
    }
}

fn respond(request: Request, rendered: Rendered, head_only: bool) -> Result<()> {
    let header = Header::from_bytes("Content-Type", rendered.content_type)
        .map_err(|()| anyhow!("invalid content type `{}`", rendered.content_type))?;
    let body = if head_only { String::new() } else { rendered.body };

    let response = Response::from_string(body)
        .with_status_code(StatusCode(rendered.status))
        .with_header(header);
    request.respond(response)?;
    Ok(())
}
