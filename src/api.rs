//! Deployment info endpoint module
//!
//! `GET /api/program-info` returns a JSON summary of the on-chain
//! program the test page talks to, so the page can display what it is
//! wired against without hardcoding it twice.

use crate::config::BannerConfig;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProgramInfo {
    pub program_id: String,
    pub network: String,
    pub status: &'static str,
    pub explorer: String,
}

impl ProgramInfo {
    pub fn new(banner: &BannerConfig) -> Self {
        Self {
            program_id: banner.program_id.clone(),
            network: banner.network.clone(),
            status: "deployed",
            explorer: format!(
                "https://explorer.solana.com/address/{}?cluster=devnet",
                banner.program_id
            ),
        }
    }
}

/// Build the `/api/program-info` response
pub fn program_info_response(banner: &BannerConfig, is_head: bool) -> Response<Full<Bytes>> {
    let info = ProgramInfo::new(banner);

    let json = match serde_json::to_string_pretty(&info) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize program info: {e}"));
            return Response::builder()
                .status(500)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"error":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    let content_length = json.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(json)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build program info response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner() -> BannerConfig {
        BannerConfig {
            program_id: "4bdQ9U3yXD9EY2SxxMVasPmp5gw7RLtnc8yTkFZovmRR".to_string(),
            network: "Solana Devnet".to_string(),
            test_page: "/test-interface.html".to_string(),
        }
    }

    #[test]
    fn test_program_info_fields() {
        let info = ProgramInfo::new(&banner());
        assert_eq!(
            info.program_id,
            "4bdQ9U3yXD9EY2SxxMVasPmp5gw7RLtnc8yTkFZovmRR"
        );
        assert_eq!(info.network, "Solana Devnet");
        assert_eq!(info.status, "deployed");
        assert!(info.explorer.contains(&info.program_id));
        assert!(info.explorer.ends_with("?cluster=devnet"));
    }

    #[test]
    fn test_response_is_json() {
        let response = program_info_response(&banner(), false);
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ProgramInfo::new(&banner())).unwrap();
        assert_eq!(json["status"], "deployed");
        assert_eq!(json["network"], "Solana Devnet");
        assert!(json["explorer"]
            .as_str()
            .unwrap()
            .starts_with("https://explorer.solana.com/address/"));
    }
}
