use actix_web::web;

pub mod questions;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api").service(
            web::scope("/questions")
                .route("", web::get().to(questions::index))
                .route("", web::post().to(questions::create))
                .service(
                    web::scope("/{id}")
                        .route("", web::get().to(questions::detail))
                        .route("", web::delete().to(questions::delete))
                        .route("/results", web::get().to(questions::results))
                        .route("/vote", web::post().to(questions::vote)),
                ),
        ),
    );
}
