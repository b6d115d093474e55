use actix_web::web;

use crate::handlers::contact;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contact")
            .service(
                web::resource("")
                    .route(web::post().to(contact::submit_contact_message))
                    .route(web::get().to(contact::list_contact_messages))
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(contact::get_contact_message))
                    .route(web::put().to(contact::update_contact_status))
                    .route(web::delete().to(contact::delete_contact_message))
            )
    );
}
