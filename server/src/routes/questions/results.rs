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
pub struct QuestionResults {
    pub question: Question,
    pub choices: Vec<Choice>,
}

/// Same visibility rules as `detail`, with choices ordered by tally.
pub async fn results(
    pool: Data<PgPool>,
    question_id: Path<i32>,
) -> Result<Json<QuestionResults>, Error> {
    let question_id = question_id.into_inner();

    let results = block(move || {
        let conn = get_conn(&pool)?;
        let question = Question::find_published(&conn, question_id, Utc::now())?;
        let choices = Choice::by_votes(&conn, question.id)?;

        Ok::<_, Error>(QuestionResults { question, choices })
    })
    .await??;

    Ok(Json(results))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};

    use db::{
        get_conn,
        models::{Choice, Question},
        new_pool,
        schema::{choices, questions},
    };
    use errors::ErrorResponse;

    use super::QuestionResults;
    use crate::tests::helpers::tests::test_get;

    #[actix_rt::test]
    async fn test_results_ordered_by_votes() {
        let pool = new_pool();
        let conn = get_conn(&pool).unwrap();

        let question = Question::create(
            &conn,
            "Who takes the tournament?".to_string(),
            Utc::now() - Duration::days(1),
        )
        .unwrap();
        let trailing = Choice::create(&conn, question.id, "Maru".to_string()).unwrap();
        let leading = Choice::create(&conn, question.id, "Serral".to_string()).unwrap();

        Choice::record_vote(&conn, question.id, leading.id).unwrap();
        Choice::record_vote(&conn, question.id, leading.id).unwrap();
        Choice::record_vote(&conn, question.id, trailing.id).unwrap();

        let (status, body): (u16, QuestionResults) =
            test_get(&format!("/api/questions/{}/results", question.id)).await;

        assert_eq!(status, 200);
        assert_eq!(body.question.id, question.id);
        assert_eq!(body.choices.len(), 2);
        assert_eq!(body.choices[0].id, leading.id);
        assert_eq!(body.choices[0].votes, 2);
        assert_eq!(body.choices[1].id, trailing.id);
        assert_eq!(body.choices[1].votes, 1);

        diesel::delete(choices::table.filter(choices::dsl::question_id.eq(question.id)))
            .execute(&conn)
            .unwrap();
        diesel::delete(questions::table.filter(questions::dsl::id.eq(question.id)))
            .execute(&conn)
            .unwrap();
    }

    #[actix_rt::test]
    async fn test_results_hidden_for_future_questions() {
        let pool = new_pool();
        let conn = get_conn(&pool).unwrap();

        let question = Question::create(
            &conn,
            "Unpublished results".to_string(),
            Utc::now() + Duration::days(30),
        )
        .unwrap();

        let (status, _): (u16, ErrorResponse) =
            test_get(&format!("/api/questions/{}/results", question.id)).await;
        assert_eq!(status, 404);

        diesel::delete(questions::table.filter(questions::dsl::id.eq(question.id)))
            .execute(&conn)
            .unwrap();
    }
}
