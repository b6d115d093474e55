use actix_web::web;

use crate::handlers::skills;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .service(
                web::resource("")
                    .route(web::get().to(skills::list_skills))
                    .route(web::post().to(skills::create_skill))
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(skills::get_skill))
                    .route(web::put().to(skills::update_skill))
                    .route(web::delete().to(skills::delete_skill))
            )
    );
}
