use std::sync::Arc;
use std::{io, net::SocketAddr};

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use log::{error, info};
use tokio::net::TcpListener;

use routers::route;

use crate::components::{catalog::TokenCatalog, prices::PriceService};

mod routers;

pub async fn run_server(
    catalog: Arc<TokenCatalog>,
    prices: Arc<PriceService>,
    port: u16,
) -> Result<(), io::Error> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(&addr).await?;

    info!("Listening on http://{}", addr);

    loop {
        let (stream, _) = listener.accept().await?;
        let catalog = Arc::clone(&catalog);
        let prices = Arc::clone(&prices);

        tokio::task::spawn(async move {
            let service =
                service_fn(move |req| route(req, Arc::clone(&catalog), Arc::clone(&prices)));

            if let Err(err) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                error!("Failed to serve connection: {:?}", err);
            }
        });
    }
}
