//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! dispatch, and CORS injection into every outgoing response.

use crate::api;
use crate::config::Config;
use crate::handler::static_files;
use crate::http::{self, cors};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let is_head = method == Method::HEAD;

    let mut response = match check_http_method(&method) {
        Some(early) => early,
        None => dispatch(&path, is_head, &config).await,
    };

    // Every response leaves with the CORS headers, whatever its status
    cors::apply(response.headers_mut());

    if config.logging.access_log {
        logger::log_access(method.as_str(), &path, response.status().as_u16());
    }

    Ok(response)
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route the request to the info endpoint or the static file tree
async fn dispatch(path: &str, is_head: bool, config: &Config) -> Response<Full<Bytes>> {
    if path == "/api/program-info" {
        return api::program_info_response(&config.banner, is_head);
    }

    static_files::serve(
        path,
        &config.server.root_dir,
        &config.server.index_files,
        is_head,
    )
    .await
}
