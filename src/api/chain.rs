use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use super::models::{AppState, ChainResponse, MineResponse, ValidateResponse};
use crate::blockchain::{is_valid_chain, miner::forge_block};

/// Get the full chain.
#[get("/chain")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ChainResponse {
        chain: ledger.chain(),
        length: ledger.len(),
    })
}

/// Validate the local chain.
#[get("/validate")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let pow = ledger.pow();
    HttpResponse::Ok().json(ValidateResponse {
        valid: is_valid_chain(ledger.chain(), &pow),
        length: ledger.len(),
        difficulty: pow.difficulty(),
    })
}

/// Mine a new block rewarding this node.
///
/// The proof search runs on the blocking pool with the ledger locked. This
/// handler's own worker stays free, but every other handler that touches the
/// ledger waits on the mutex (blocking its worker thread) until the block is
/// sealed. A transaction submitted meanwhile lands in the pool afterwards.
#[get("/mine")]
pub async fn mine(state: web::Data<AppState>) -> impl Responder {
    let worker = state.clone();
    let forged = web::block(move || {
        let mut ledger = worker.ledger.lock().expect("mutex poisoned");
        let pow = ledger.pow();
        forge_block(&mut ledger, &pow, &worker.node_id)
    })
    .await;

    match forged {
        Ok(Ok(block)) => HttpResponse::Ok().json(MineResponse {
            message: "New Block Forged",
            index: block.index,
            transactions: block.transactions,
            proof: block.proof,
            previous_hash: block.previous_hash,
        }),
        Ok(Err(e)) => {
            error!("GET /mine - ledger error: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
        Err(e) => {
            error!("GET /mine - mining task failed: {}", e);
            HttpResponse::InternalServerError().body("mining task failed")
        }
    }
}
