use actix_web::web;

use crate::handlers::legal;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/legal/{doc_type}")
            .route(web::get().to(legal::get_legal_doc))
            .route(web::put().to(legal::update_legal_doc))
    );
}
