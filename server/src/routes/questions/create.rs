use actix_web::web::{block, Data, Json};
use chrono::{DateTime, Utc};
use diesel::Connection;
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

use super::detail::QuestionDetail;
use crate::validate::validate;

#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct CreateQuestionParams {
    #[validate(length(min = "1", message = "question_text is required"))]
    pub question_text: String,
    // Defaults to the current time, matching "publish immediately".
    pub pub_date: Option<DateTime<Utc>>,
    pub choices: Vec<String>,
}

/// Administrative input path. Question and choices are inserted in one
/// transaction; a failed choice insert leaves nothing behind.
pub async fn create(
    pool: Data<PgPool>,
    params: Json<CreateQuestionParams>,
) -> Result<Json<QuestionDetail>, Error> {
    validate(&params)?;
    if params.choices.iter().any(|text| text.trim().is_empty()) {
        return Err(Error::ValidationError(vec![
            "choice_text is required".to_string()
        ]));
    }

    let detail = block(move || {
        let conn = get_conn(&pool)?;

        conn.transaction::<_, Error, _>(|| {
            let question = Question::create(
                &conn,
                params.question_text.clone(),
                params.pub_date.unwrap_or_else(Utc::now),
            )?;
            let mut choices = Vec::with_capacity(params.choices.len());
            for choice_text in &params.choices {
                choices.push(Choice::create(&conn, question.id, choice_text.clone())?);
            }

            Ok(QuestionDetail { question, choices })
        })
    })
    .await??;

    Ok(Json(detail))
}
