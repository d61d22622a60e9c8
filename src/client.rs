/// Typed HTTP client for the extension backend
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::extension_data::{ActionOutcome, Catalog, Extension};

/// Thin client over the backend's four GET endpoints.
///
/// Every operation either returns the decoded JSON body or an `Err` that the
/// caller surfaces as a single connection-error notification. Single attempt,
/// no retries.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: &str) -> ApiClient {
        ApiClient {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// GET `{base}{path}` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = format!("{}{}", self.base, path);

        let response = Request::get(&url).send().await.map_err(|e| {
            log::error!("Request to {} failed: {}", url, e);
            format!("Request to {} failed: {}", url, e)
        })?;

        response.json::<T>().await.map_err(|e| {
            log::error!("Bad response from {}: {}", url, e);
            format!("Bad response from {}: {}", url, e)
        })
    }

    pub async fn list_installed(&self) -> Result<Vec<Extension>, String> {
        self.get_json("/extensions").await
    }

    /// Fetch the remote catalog. The user-supplied catalog URL is forwarded
    /// to the backend, which decides whether to honor it.
    pub async fn list_remote(&self, catalog_url: &str) -> Result<Catalog, String> {
        self.get_json(&remote_path(catalog_url)).await
    }

    pub async fn install(&self, name: &str, source_url: &str) -> Result<ActionOutcome, String> {
        self.get_json(&install_path(name, source_url)).await
    }

    pub async fn delete(&self, name: &str) -> Result<ActionOutcome, String> {
        self.get_json(&delete_path(name)).await
    }
}

/// Gate for the user-supplied catalog URL: empty or whitespace-only input
/// is rejected before any network call is made.
pub fn validate_catalog_url(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn remote_path(catalog_url: &str) -> String {
    if catalog_url.is_empty() {
        "/remote".to_string()
    } else {
        format!("/remote?url={}", encode(catalog_url))
    }
}

fn install_path(name: &str, source_url: &str) -> String {
    format!("/install/{}?url={}", encode(name), encode(source_url))
}

fn delete_path(name: &str) -> String {
    format!("/delete/{}", encode(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.base, "http://localhost:5000/api");
    }

    #[test]
    fn test_install_path_encodes_source_url() {
        assert_eq!(
            install_path("bar", "http://x/y?v=1"),
            "/install/bar?url=http%3A%2F%2Fx%2Fy%3Fv%3D1"
        );
    }

    #[test]
    fn test_delete_path_embeds_name() {
        assert_eq!(delete_path("foo"), "/delete/foo");
    }

    #[test]
    fn test_paths_encode_extension_name() {
        assert_eq!(delete_path("my ext/v2"), "/delete/my+ext%2Fv2");
        assert_eq!(
            install_path("a?b", "http://x/y"),
            "/install/a%3Fb?url=http%3A%2F%2Fx%2Fy"
        );
    }

    #[test]
    fn test_validate_catalog_url_rejects_blank_input() {
        assert_eq!(validate_catalog_url(""), None);
        assert_eq!(validate_catalog_url("   "), None);
        assert_eq!(validate_catalog_url("\t\n"), None);
    }

    #[test]
    fn test_validate_catalog_url_trims_valid_input() {
        assert_eq!(
            validate_catalog_url("  https://example.com/list.json "),
            Some("https://example.com/list.json")
        );
    }

    #[test]
    fn test_remote_path_forwards_catalog_url() {
        assert_eq!(remote_path(""), "/remote");
        assert_eq!(
            remote_path("https://example.com/list.json"),
            "/remote?url=https%3A%2F%2Fexample.com%2Flist.json"
        );
    }
}
