use actix_web::{
    web::{block, Data, Path},
    HttpResponse,
};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

/// Administrative deletion; cascades to the question's choices.
pub async fn delete(pool: Data<PgPool>, question_id: Path<i32>) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();

    block(move || {
        let conn = get_conn(&pool)?;
        Question::delete(&conn, question_id)
    })
    .await??;

    Ok(HttpResponse::Ok().json(()))
}
