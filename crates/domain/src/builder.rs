//! Request assembly
//!
//! Pure construction of a [`RequestSpec`] from an operation's parameter
//! declarations and the user's draft values. No I/O, no view state: the
//! session layer passes plain values in and gets a plain value back.

use thiserror::Error;

use crate::draft::RequestDraft;
use crate::method::HttpMethod;
use crate::request::RequestSpec;
use crate::spec::ParameterSet;

/// Default content type attached when the draft does not override it.
const DEFAULT_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

/// Errors raised while assembling a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The raw body text is not valid JSON. Propagated to the caller
    /// rather than dispatched as a malformed body.
    #[error("request body is not valid JSON: {0}")]
    InvalidBodyJson(String),
}

/// Joins a server URL and a path template.
///
/// A trailing `/` on the server is trimmed and a leading `/` on the path
/// is ensured, so `https://host/` + `pods` and `https://host` + `/pods`
/// both yield `https://host/pods`.
#[must_use]
pub fn join_server_and_path(server_url: &str, path: &str) -> String {
    let server = server_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{server}{path}")
    } else {
        format!("{server}/{path}")
    }
}

/// Assembles a dispatchable request from declarations and draft values.
///
/// - Every declared path parameter's `{name}` token is substituted
///   verbatim by its supplied value; declared parameters without a
///   supplied value leave the literal placeholder in the path. Encoding
///   is delegated to whatever constructs the final URL.
/// - Declared query parameters with non-empty values become query pairs;
///   empty values are omitted entirely.
/// - Declared header parameters with non-empty values are merged; a
///   `Content-Type: application/json` default is present unless a
///   supplied header overrides it case-insensitively.
/// - Non-empty body text must parse as JSON.
///
/// # Errors
///
/// Returns [`BuildError::InvalidBodyJson`] when the draft body is
/// non-empty and not valid JSON.
pub fn build_request(
    path: &str,
    method: HttpMethod,
    declarations: &ParameterSet,
    draft: &RequestDraft,
) -> Result<RequestSpec, BuildError> {
    let mut substituted = path.to_string();
    for declaration in &declarations.path {
        if let Some(value) = draft.param(&declaration.name)
            && !value.is_empty()
        {
            substituted = substituted.replace(&format!("{{{}}}", declaration.name), value);
        }
    }

    let query: Vec<(String, String)> = declarations
        .query
        .iter()
        .filter_map(|declaration| {
            draft
                .param(&declaration.name)
                .filter(|value| !value.is_empty())
                .map(|value| (declaration.name.clone(), value.to_string()))
        })
        .collect();

    let mut headers: Vec<(String, String)> = declarations
        .header
        .iter()
        .filter_map(|declaration| {
            draft
                .headers
                .get(&declaration.name)
                .filter(|value| !value.is_empty())
                .map(|value| (declaration.name.clone(), value.clone()))
        })
        .collect();

    let has_content_type = headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case(DEFAULT_CONTENT_TYPE.0));
    if !has_content_type {
        headers.insert(
            0,
            (
                DEFAULT_CONTENT_TYPE.0.to_string(),
                DEFAULT_CONTENT_TYPE.1.to_string(),
            ),
        );
    }

    let body = if draft.body.is_empty() {
        None
    } else {
        Some(
            serde_json::from_str(&draft.body)
                .map_err(|e| BuildError::InvalidBodyJson(e.to_string()))?,
        )
    };

    Ok(RequestSpec {
        method,
        url: join_server_and_path(&draft.server_url, &substituted),
        query,
        headers,
        body,
    })
}
