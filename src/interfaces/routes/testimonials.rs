use actix_web::web;

use crate::handlers::testimonials;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/testimonials")
            .service(
                web::resource("")
                    .route(web::get().to(testimonials::list_testimonials))
                    .route(web::post().to(testimonials::create_testimonial))
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(testimonials::get_testimonial))
                    .route(web::put().to(testimonials::update_testimonial))
                    .route(web::delete().to(testimonials::delete_testimonial))
            )
    );
}
