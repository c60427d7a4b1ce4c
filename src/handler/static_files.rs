//! Static file serving module
//!
//! Maps request paths onto the served root directory, with index file
//! resolution, directory listings and a traversal guard.

use crate::http::{self, mime, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of mapping a request path onto the filesystem
enum Resolved {
    File(PathBuf),
    Listing(PathBuf),
    Redirect(String),
    NotFound,
}

/// Serve a request path from the root directory.
pub async fn serve(
    path: &str,
    root: &str,
    index_files: &[String],
    is_head: bool,
) -> Response<Full<Bytes>> {
    match resolve(root, path, index_files).await {
        Resolved::File(file_path) => serve_resolved_file(&file_path, is_head).await,
        Resolved::Listing(dir_path) => serve_listing(&dir_path, path, is_head).await,
        Resolved::Redirect(target) => http::build_redirect_response(&target),
        Resolved::NotFound => http::build_404_response(),
    }
}

/// Map a request path onto the served directory.
///
/// Directory targets resolve to the first present index file, or to a
/// listing when none exists. Directory URLs without their trailing slash
/// are redirected so relative links on the listing page hold.
async fn resolve(root: &str, request_path: &str, index_files: &[String]) -> Resolved {
    let Some(relative) = sanitize_path(request_path) else {
        logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
        return Resolved::NotFound;
    };

    let root_canonical = match Path::new(root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Served directory not found or inaccessible '{root}': {e}"
            ));
            return Resolved::NotFound;
        }
    };

    let target = root_canonical.join(relative);

    if target.is_dir() {
        if !request_path.ends_with('/') {
            return Resolved::Redirect(format!("{request_path}/"));
        }
        for index_file in index_files {
            let index_path = target.join(index_file);
            if index_path.is_file() {
                return Resolved::File(index_path);
            }
        }
        return Resolved::Listing(target);
    }

    // Missing files are the common 404 case, nothing to log
    let Ok(canonical) = target.canonicalize() else {
        return Resolved::NotFound;
    };
    if !canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path escapes served directory: {} -> {}",
            request_path,
            canonical.display()
        ));
        return Resolved::NotFound;
    }

    Resolved::File(canonical)
}

/// Strip the leading slash and reject traversal segments.
fn sanitize_path(path: &str) -> Option<&str> {
    let relative = path.trim_start_matches('/');
    if relative.split('/').any(|segment| segment == "..") {
        return None;
    }
    Some(relative)
}

async fn serve_resolved_file(file_path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(file_path).await {
        Ok(content) => {
            response::build_file_response(content, mime::content_type_for(file_path), is_head)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            http::build_404_response()
        }
    }
}

async fn serve_listing(dir_path: &Path, request_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match list_entries(dir_path).await {
        Ok(entries) => {
            response::build_html_response(render_listing(request_path, &entries), is_head)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to list directory '{}': {}",
                dir_path.display(),
                e
            ));
            http::build_404_response()
        }
    }
}

/// Collect entry names, directories marked with a trailing slash.
async fn list_entries(dir_path: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = Vec::new();
    let mut reader = fs::read_dir(dir_path).await?;
    while let Some(entry) = reader.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();
    Ok(entries)
}

/// Render the listing page for a directory without an index file.
fn render_listing(request_path: &str, entries: &[String]) -> String {
    let items: String = entries
        .iter()
        .map(|name| format!("        <li><a href=\"{name}\">{name}</a></li>\n"))
        .collect();

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Index of {request_path}</title>\n\
         </head>\n\
         <body>\n\
         <h1>Index of {request_path}</h1>\n\
         <hr>\n\
         <ul>\n\
         {items}\
         </ul>\n\
         <hr>\n\
         </body>\n\
         </html>\n"
    )
}
