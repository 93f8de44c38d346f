use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, info, warn};

use super::models::{AppState, RegisterNodesRequest, RegisterNodesResponse, ResolveResponse};
use crate::consensus::resolve_conflicts;

/// Add peer nodes, normalized to `host:port`.
#[post("/nodes/register")]
pub async fn register_nodes(
    state: web::Data<AppState>,
    body: web::Json<RegisterNodesRequest>,
) -> impl Responder {
    let Some(nodes) = body.into_inner().nodes else {
        warn!("POST /nodes/register - rejected: no node list");
        return HttpResponse::BadRequest().body("Error: Please supply a valid list of nodes");
    };

    let mut peers = state.peers.lock().expect("mutex poisoned");
    if let Err(e) = peers.register_all(nodes.as_slice()) {
        warn!("POST /nodes/register - rejected: {}", e);
        return HttpResponse::BadRequest().body(e.to_string());
    }
    info!(
        "POST /nodes/register - {} submitted, {} known",
        nodes.len(),
        peers.len()
    );

    HttpResponse::Created().json(RegisterNodesResponse {
        message: "New nodes have been added",
        total_nodes: peers.to_vec(),
    })
}

/// Run the longest-chain rule against every registered peer.
#[get("/nodes/resolve")]
pub async fn resolve(state: web::Data<AppState>) -> impl Responder {
    let peers = {
        let peers = state.peers.lock().expect("mutex poisoned");
        if peers.is_empty() {
            debug!("GET /nodes/resolve - no peers registered");
        }
        peers.to_vec()
    };

    let replaced = resolve_conflicts(&state.ledger, &peers, state.fetcher.as_ref()).await;

    let chain = state.ledger.lock().expect("mutex poisoned").chain().to_vec();
    let resp = if replaced {
        ResolveResponse::Replaced {
            message: "Our chain was replaced",
            new_chain: chain,
        }
    } else {
        ResolveResponse::Authoritative {
            message: "Our chain is authoritative",
            chain,
        }
    };
    HttpResponse::Ok().json(resp)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;

    use crate::api::{AppState, init_routes};
    use crate::blockchain::{Ledger, ProofOfWork, miner::forge_block};
    use crate::consensus::fetch::PeerChain;
    use crate::consensus::testing::StaticFetcher;

    fn state_with(fetcher: StaticFetcher) -> web::Data<AppState> {
        web::Data::new(AppState::new(
            Ledger::new(ProofOfWork::new(2)),
            "test-node",
            Arc::new(fetcher),
        ))
    }

    #[actix_web::test]
    async fn registers_normalized_addresses() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(StaticFetcher::default()))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/nodes/register")
            .set_json(json!({
                "nodes": ["http://127.0.0.1:5001", "127.0.0.1:5001", "http://10.0.0.2:5000/"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "New nodes have been added");
        assert_eq!(body["total_nodes"], json!(["10.0.0.2:5000", "127.0.0.1:5001"]));
    }

    #[actix_web::test]
    async fn missing_node_list_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(StaticFetcher::default()))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/nodes/register")
            .set_json(json!({"peers": ["127.0.0.1:5001"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body(resp).await;
        assert_eq!(body, "Error: Please supply a valid list of nodes");
    }

    #[actix_web::test]
    async fn resolve_without_longer_peer_keeps_local_chain() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(StaticFetcher::default()))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/nodes/resolve").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Our chain is authoritative");
        assert_eq!(body["chain"].as_array().map(Vec::len), Some(1));
        assert!(body.get("new_chain").is_none());
    }

    #[actix_web::test]
    async fn resolve_adopts_longer_peer_chain() {
        let pow = ProofOfWork::new(2);
        let mut remote = Ledger::new(pow);
        for _ in 0..3 {
            forge_block(&mut remote, &pow, "remote").unwrap();
        }
        let mut fetcher = StaticFetcher::default();
        fetcher.insert(
            "10.0.0.9:5000",
            PeerChain {
                chain: remote.chain().to_vec(),
                length: remote.len(),
            },
        );

        let data = state_with(fetcher);
        let app =
            test::init_service(App::new().app_data(data.clone()).configure(init_routes)).await;

        let req = test::TestRequest::post()
            .uri("/nodes/register")
            .set_json(json!({"nodes": ["http://10.0.0.9:5000"]}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/nodes/resolve").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Our chain was replaced");
        assert_eq!(body["new_chain"].as_array().map(Vec::len), Some(4));
        assert_eq!(data.ledger.lock().unwrap().chain(), remote.chain());
    }
}
