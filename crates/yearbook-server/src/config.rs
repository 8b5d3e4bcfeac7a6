use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Runtime configuration, read once at startup and handed to each component.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub cors_origins: Origins,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origins {
    Any,
    List(Vec<String>),
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = var_or("YEARBOOK_HOST", "0.0.0.0");
        let port: u16 = var_or("YEARBOOK_PORT", "8001").parse()?;
        let data_dir = PathBuf::from(var_or("YEARBOOK_DATA_DIR", "./data"));
        let cors_origins = Origins::parse(&var_or("CORS_ORIGINS", "*"));

        Ok(Self { host, port, data_dir, cors_origins })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

impl Origins {
    /// Comma-separated origins. Any `*` entry, or an empty list, means all.
    pub fn parse(raw: &str) -> Self {
        let entries: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if entries.is_empty() || entries.iter().any(|o| o == "*") {
            Origins::Any
        } else {
            Origins::List(entries)
        }
    }

    /// Credentials are allowed, so `*` cannot be sent literally; the request
    /// origin is echoed back instead.
    pub fn cors_layer(&self) -> CorsLayer {
        let origin = match self {
            Origins::Any => AllowOrigin::mirror_request(),
            Origins::List(list) => {
                let values: Vec<HeaderValue> = list
                    .iter()
                    .filter_map(|o| match HeaderValue::from_str(o) {
                        Ok(v) => Some(v),
                        Err(_) => {
                            warn!("Ignoring invalid CORS origin {:?}", o);
                            None
                        }
                    })
                    .collect();
                AllowOrigin::list(values)
            }
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    #[test]
    fn parse_origins() {
        assert_eq!(Origins::parse("*"), Origins::Any);
        assert_eq!(Origins::parse(""), Origins::Any);
        assert_eq!(Origins::parse("https://a.example,*"), Origins::Any);
        assert_eq!(
            Origins::parse(" https://a.example , ,https://b.example"),
            Origins::List(vec!["https://a.example".into(), "https://b.example".into()])
        );
    }

    async fn preflight(origins: &Origins, origin: &str) -> Option<String> {
        let app = Router::new()
            .route("/api/login", get(|| async { "ok" }))
            .layer(origins.cors_layer());
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/api/login")
            .header("origin", origin)
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        resp.headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn wildcard_echoes_origin() {
        let got = preflight(&Origins::Any, "https://yearbook.example").await;
        assert_eq!(got.as_deref(), Some("https://yearbook.example"));
    }

    #[tokio::test]
    async fn list_only_allows_members() {
        let origins = Origins::parse("https://yearbook.example");
        assert_eq!(
            preflight(&origins, "https://yearbook.example").await.as_deref(),
            Some("https://yearbook.example")
        );
        assert_eq!(preflight(&origins, "https://evil.example").await, None);
    }
}
