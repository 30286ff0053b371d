use actix_web::web::{block, Data, Json, Path};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

#[derive(Clone, Deserialize, Serialize)]
pub struct VoteParams {
    pub choice_id: i32,
}

/// Accepts one vote for a choice of a published question. The question is
/// resolved through the same published-only lookup as detail/results, so a
/// future-dated question is a 404 before any choice is considered. A choice
/// id that belongs to a different question is also a 404; in both cases
/// nothing is written.
pub async fn vote(
    pool: Data<PgPool>,
    question_id: Path<i32>,
    params: Json<VoteParams>,
) -> Result<Json<Choice>, Error> {
    let question_id = question_id.into_inner();

    let choice = block(move || {
        let conn = get_conn(&pool)?;
        let question = Question::find_published(&conn, question_id, Utc::now())?;
        Choice::record_vote(&conn, question.id, params.choice_id)
    })
    .await??;

    Ok(Json(choice))
}
