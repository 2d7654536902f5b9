//! Listing query-parameter gate.
//!
//! Validates the filter and sort parameters of listing requests before any
//! handler runs. Valid requests continue with their query variables attached;
//! invalid ones are redirected to the canonical query string, so a listing
//! page never renders with unvalidated parameters.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::catalog::{QueryVariables, SearchParams, build_query_variables};
use crate::state::AppState;

/// Validated listing parameters for the current request.
///
/// Stored in request extensions by [`canonicalize_listing_params`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    pub params: SearchParams,
    pub variables: QueryVariables,
}

/// Middleware that validates listing parameters or redirects to the
/// canonical URL.
pub async fn canonicalize_listing_params(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let params = SearchParams::parse(request.uri().query().unwrap_or_default());

    match build_query_variables(&params) {
        Ok(variables) => {
            state.metrics().listing_requests.inc();
            request
                .extensions_mut()
                .insert(ListingRequest { params, variables });
            next.run(request).await
        }
        Err(redirect) => {
            let location = redirect.location(request.uri().path());
            let invalid: Vec<&str> = redirect.invalid.iter().map(|d| d.key()).collect();
            debug!(
                path = %request.uri().path(),
                invalid = ?invalid,
                location = %location,
                "redirecting to canonical listing URL"
            );
            state.metrics().record_redirect(&redirect.invalid);
            redirect_response(state.config().listing_redirect_status, &location)
        }
    }
}

/// Client redirect to `location` with the configured status.
pub fn redirect_response(status: u16, location: &str) -> Response {
    let status = match status {
        302 => StatusCode::FOUND,
        303 => StatusCode::SEE_OTHER,
        308 => StatusCode::PERMANENT_REDIRECT,
        _ => StatusCode::TEMPORARY_REDIRECT,
    };

    // Header values must not contain CR or LF.
    let location: String = location
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .collect();

    (status, [(header::LOCATION, location)]).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping() {
        assert_eq!(redirect_response(302, "/").status(), StatusCode::FOUND);
        assert_eq!(redirect_response(303, "/").status(), StatusCode::SEE_OTHER);
        assert_eq!(
            redirect_response(307, "/").status(),
            StatusCode::TEMPORARY_REDIRECT
        );
        assert_eq!(
            redirect_response(308, "/").status(),
            StatusCode::PERMANENT_REDIRECT
        );
    }

    #[test]
    fn location_header_is_sanitized() {
        let response = redirect_response(307, "/search?\r\nX-Injected: value");
        let location = response.headers().get(header::LOCATION).unwrap();
        assert_eq!(location, "/search?X-Injected: value");
    }
}
