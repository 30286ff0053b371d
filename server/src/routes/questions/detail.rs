use actix_web::web::{block, Data, Json, Path};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionDetail {
    pub question: Question,
    pub choices: Vec<Choice>,
}

pub async fn detail(
    pool: Data<PgPool>,
    question_id: Path<i32>,
) -> Result<Json<QuestionDetail>, Error> {
    let question_id = question_id.into_inner();

    let detail = block(move || {
        let conn = get_conn(&pool)?;
        let question = Question::find_published(&conn, question_id, Utc::now())?;
        let choices = Choice::for_question(&conn, question.id)?;

        Ok::<_, Error>(QuestionDetail { question, choices })
    })
    .await??;

    Ok(Json(detail))
}
