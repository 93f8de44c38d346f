use actix_web::{HttpResponse, Responder, post, web};
use log::{error, info, warn};

use super::models::{AppState, MessageResponse, NewTransactionRequest};

/// Queue a transaction for the next mined block.
#[post("/transactions/new")]
pub async fn new_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTransactionRequest>,
) -> impl Responder {
    let NewTransactionRequest {
        sender: Some(sender),
        recipient: Some(recipient),
        amount: Some(amount),
    } = body.into_inner()
    else {
        warn!("POST /transactions/new - rejected: missing fields");
        return HttpResponse::BadRequest().body("Missing values");
    };

    let queued = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger
            .new_transaction(sender, recipient, amount)
            .map(|index| (index, ledger.pending().len()))
    };

    match queued {
        Ok((index, pool_size)) => {
            info!(
                "POST /transactions/new - queued for block #{} (pool size {})",
                index, pool_size
            );
            HttpResponse::Created().json(MessageResponse {
                message: format!("Transaction will be added to Block {index}"),
            })
        }
        Err(e) => {
            error!("POST /transactions/new - ledger error: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}
