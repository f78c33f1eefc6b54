//! Query string extractor with structured rejections.

use crate::errors::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::Query;
use serde::de::DeserializeOwned;

/// Like [`axum_extra::extract::Query`] (repeated keys collect into a `Vec`),
/// but a malformed query string is rejected with a 400 `INVALID_QUERY` body.
///
/// ```ignore
/// use axum_helpers::extractors::QueryParams;
///
/// async fn list(QueryParams(params): QueryParams<ListParams>) -> String {
///     format!("page {:?}", params.page)
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Params {
        page: Option<u64>,
        #[serde(default)]
        sort: Vec<String>,
    }

    async fn echo(QueryParams(params): QueryParams<Params>) -> String {
        format!("{:?} {}", params.page, params.sort.join("|"))
    }

    async fn get_uri(uri: &str) -> (StatusCode, Vec<u8>) {
        let app = Router::new().route("/", get(echo));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_repeated_keys() {
        let (status, body) = get_uri("/?page=2&sort=name&sort=price,desc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Some(2) name|price,desc");
    }

    #[tokio::test]
    async fn test_malformed_query_renders_error_response() {
        let (status, body) = get_uri("/?page=-1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "INVALID_QUERY");
        assert_eq!(body["code"], 1006);
    }
}
