mod api;
mod blockchain;
mod config;
mod consensus;
mod error;
mod transaction;

use actix_web::{App, HttpServer, middleware::Logger, web};
use clap::Parser;
use dotenvy::dotenv;
use log::info;
use std::io;
use std::sync::Arc;

use api::AppState;
use blockchain::{Ledger, ProofOfWork};
use config::NodeConfig;
use consensus::HttpChainFetcher;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = NodeConfig::parse();
    let node_id = cfg.identity();
    let pow = ProofOfWork::new(cfg.difficulty);
    let fetcher = HttpChainFetcher::new(cfg.peer_timeout()).map_err(io::Error::other)?;

    println!(
        "⛓️ Starting ledger node {node_id} at http://{}:{}",
        cfg.host, cfg.port
    );
    info!(
        "difficulty={} peer_timeout={}s",
        pow.difficulty(),
        cfg.peer_timeout_secs
    );

    let state = web::Data::new(AppState::new(Ledger::new(pow), node_id, Arc::new(fetcher)));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((cfg.host.as_str(), cfg.port))?
    .run()
    .await
}
