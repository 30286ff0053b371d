use actix_web::web::{block, Data, Json};
use chrono::Utc;

use db::{get_conn, models::Question, PgPool};
use errors::Error;

/// Published questions only, latest `pub_date` first.
pub async fn index(pool: Data<PgPool>) -> Result<Json<Vec<Question>>, Error> {
    let questions = block(move || {
        let conn = get_conn(&pool)?;
        Question::published(&conn, Utc::now())
    })
    .await??;

    Ok(Json(questions))
}
