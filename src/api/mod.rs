mod chain;
pub mod models;
mod nodes;
mod tx;

use actix_web::web::ServiceConfig;

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(chain::get_chain)
        .service(chain::validate_chain)
        .service(chain::mine)
        .service(tx::new_transaction)
        .service(nodes::register_nodes)
        .service(nodes::resolve);
}
