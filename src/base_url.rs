//! Resolution of the backend base URL, decided once at startup.

use std::env;
use strum_macros::Display;

/// Optional hook supplied by an embedding application that knows the
/// production backend URL directly. When it returns `Some`, its value wins
/// over any configured base path or port substitution.
pub type BackendUrlFn = fn() -> Option<String>;

/// Default base path used for local development, pointing at the dev server.
pub const DEFAULT_BASE_PATH: &str = "http://localhost:5173";
/// Default port the local dev server listens on.
pub const DEFAULT_CLIENT_PORT: &str = "5173";
/// Default port the local backend listens on.
pub const DEFAULT_BACKEND_PORT: &str = "8000";

/// Inputs for [`resolve_base_url`].
pub struct BaseUrlConfig {
    /// Configured base path, usually the address of the local dev server.
    pub base_path: String,
    /// Port of the local dev server, substituted away for local backends.
    pub client_port: String,
    /// Port of the local backend.
    pub backend_port: String,
    /// Host-provided resolver for the production backend URL.
    pub backend_url_fn: Option<BackendUrlFn>,
}

impl BaseUrlConfig {
    /// Builds a config from the `CASES_BASE_URL`, `CASES_CLIENT_PORT` and
    /// `CASES_BACKEND_PORT` environment variables, with localhost defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_path: env::var("CASES_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_PATH.to_string()),
            client_port: env::var("CASES_CLIENT_PORT")
                .unwrap_or_else(|_| DEFAULT_CLIENT_PORT.to_string()),
            backend_port: env::var("CASES_BACKEND_PORT")
                .unwrap_or_else(|_| DEFAULT_BACKEND_PORT.to_string()),
            backend_url_fn: None,
        }
    }
}

#[derive(Debug, Display)]
pub enum BaseUrlError {
    /// No resolution path produced a non-empty URL.
    Unresolved,
    /// The resolved value is not an absolute http(s) URL.
    Invalid(String),
}

impl std::error::Error for BaseUrlError {}

/// Resolves the base URL all API requests are issued against.
///
/// Precedence: a host-provided `backend_url_fn` wins outright; otherwise the
/// configured base path is rewritten by substituting the first occurrence of
/// the client port with the backend port. The result must parse as an
/// absolute http(s) URL, so a misconfigured environment fails here instead of
/// surfacing as opaque request errors later.
pub fn resolve_base_url(config: &BaseUrlConfig) -> Result<String, BaseUrlError> {
    let resolved = match config.backend_url_fn.and_then(|resolver| resolver()) {
        Some(url) => url,
        None if config.client_port.is_empty() => config.base_path.clone(),
        None => config.base_path.replacen(&config.client_port, &config.backend_port, 1),
    };

    if resolved.trim().is_empty() {
        return Err(BaseUrlError::Unresolved);
    }
    let parsed =
        reqwest::Url::parse(&resolved).map_err(|_| BaseUrlError::Invalid(resolved.clone()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(BaseUrlError::Invalid(resolved));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str, client: &str, backend: &str) -> BaseUrlConfig {
        BaseUrlConfig {
            base_path: base.to_string(),
            client_port: client.to_string(),
            backend_port: backend.to_string(),
            backend_url_fn: None,
        }
    }

    #[test]
    fn host_resolver_wins_over_port_substitution() {
        let mut cfg = config("http://localhost:5173", "5173", "8080");
        cfg.backend_url_fn = Some(|| Some("https://prod.example/api".to_string()));
        assert_eq!(resolve_base_url(&cfg).unwrap(), "https://prod.example/api");
    }

    #[test]
    fn host_resolver_returning_none_falls_back() {
        let mut cfg = config("http://localhost:5173", "5173", "8080");
        cfg.backend_url_fn = Some(|| None);
        assert_eq!(resolve_base_url(&cfg).unwrap(), "http://localhost:8080");
    }

    #[test]
    fn substitutes_client_port_with_backend_port() {
        let cfg = config("http://localhost:5173", "5173", "8080");
        assert_eq!(resolve_base_url(&cfg).unwrap(), "http://localhost:8080");
    }

    #[test]
    fn substitutes_first_occurrence_only() {
        let cfg = config("http://5173.example:5173", "5173", "8080");
        assert_eq!(resolve_base_url(&cfg).unwrap(), "http://8080.example:5173");
    }

    #[test]
    fn empty_base_path_fails_fast() {
        let cfg = config("", "5173", "8080");
        assert!(matches!(resolve_base_url(&cfg), Err(BaseUrlError::Unresolved)));
    }

    #[test]
    fn relative_base_path_fails_fast() {
        let cfg = config("/webapps/cases", "5173", "8080");
        assert!(matches!(resolve_base_url(&cfg), Err(BaseUrlError::Invalid(_))));
    }

    #[test]
    fn non_http_scheme_fails_fast() {
        let mut cfg = config("http://localhost:5173", "5173", "8080");
        cfg.backend_url_fn = Some(|| Some("ftp://prod.example/api".to_string()));
        assert!(matches!(resolve_base_url(&cfg), Err(BaseUrlError::Invalid(_))));
    }
}
