#[macro_use]
extern crate validator_derive;

use std::env;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;

mod routes;
mod tests;
mod validate;

use crate::routes::routes;
use errors::ErrorResponse;

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::new_pool();

    HttpServer::new(move || {
        let client_host =
            env::var("CLIENT_HOST").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let cors = Cors::default()
            .allowed_origin(&client_host)
            .allow_any_method()
            .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}
