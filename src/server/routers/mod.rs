use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::{header, Method, Request, Response, StatusCode};
use serde::Serialize;

use crate::components::{catalog::TokenCatalog, prices::PriceService};
use crate::models::response::ApiResponse;

mod price;
mod tokens;

pub async fn route<B>(
    req: Request<B>,
    catalog: Arc<TokenCatalog>,
    prices: Arc<PriceService>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    match (req.method(), req.uri().path()) {
        (&Method::GET, "/tokens/list") => tokens::handle_list(req, catalog).await,
        (&Method::GET, "/tokens/price") => price::handle_price(req, prices).await,
        (_, "/tokens/list") | (_, "/tokens/price") => Ok(json_error(
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed",
        )),
        _ => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Full::new(Bytes::from("Not Found")))
            .unwrap()),
    }
}

// Successful payloads carry a shared-cache lifetime so intermediaries can
// reuse them.
pub(crate) fn json_success<T: Serialize>(data: T, cache_max_age: u64) -> Response<Full<Bytes>> {
    let body = serde_json::to_string(&ApiResponse::ok(data)).unwrap();

    Response::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .header(
            header::CACHE_CONTROL,
            format!("s-maxage={}, stale-while-revalidate", cache_max_age),
        )
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

pub(crate) fn json_error(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::to_string(&ApiResponse::<()>::err(message)).unwrap();

    Response::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .status(status)
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}
