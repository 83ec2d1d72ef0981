use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Request, Response, StatusCode};
use log::error;

use super::{json_error, json_success};
use crate::components::prices::PriceService;
use crate::config::tokens::PRICE_CACHE_TTL;

const MISSING_PARAMS: &str = "Missing required parameters: address and chainId";

pub async fn handle_price<B>(
    req: Request<B>,
    prices: Arc<PriceService>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let (address, chain_id) = match parse_price_query(req.uri().query()) {
        Ok(params) => params,
        Err(message) => return Ok(json_error(StatusCode::BAD_REQUEST, message)),
    };

    match prices.get_price(&address, chain_id).await {
        Ok(quote) => Ok(json_success(quote, PRICE_CACHE_TTL)),
        Err(err) => {
            // The provider error stays in the server log; callers only learn
            // that the lookup failed.
            error!("price fetch for {} on chain {}: {}", address, chain_id, err);

            Ok(json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch token price",
            ))
        }
    }
}

fn parse_price_query(query: Option<&str>) -> Result<(String, u64), &'static str> {
    let mut address = None;
    let mut chain_id = None;

    for (key, value) in url::form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
        match key.as_ref() {
            "address" => address = Some(value.into_owned()),
            "chainId" => chain_id = Some(value.into_owned()),
            _ => {}
        }
    }

    let address = address.filter(|a| !a.is_empty()).ok_or(MISSING_PARAMS)?;
    let chain_id = chain_id
        .and_then(|raw| raw.parse::<u64>().ok())
        .ok_or(MISSING_PARAMS)?;

    Ok((address, chain_id))
}
