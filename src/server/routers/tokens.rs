use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Request, Response};

use super::json_success;
use crate::components::catalog::TokenCatalog;
use crate::config::tokens::TOKENS_CACHE_TTL;

pub async fn handle_list<B>(
    _req: Request<B>,
    catalog: Arc<TokenCatalog>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    Ok(json_success(catalog.list(), TOKENS_CACHE_TTL))
}
