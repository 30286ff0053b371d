use chrono::{DateTime, Duration, Utc};
use diesel::{self, Connection, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

#[derive(Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn create(
        conn: &PgConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    /// Questions visible at `now`, most recently published first.
    pub fn published(conn: &PgConnection, now: DateTime<Utc>) -> Result<Vec<Question>, Error> {
        use questions::dsl::{pub_date, questions as questions_table};

        let results = questions_table
            .filter(pub_date.le(now))
            .order(pub_date.desc())
            .get_results(conn)?;

        Ok(results)
    }

    /// A future-dated question behaves like a missing row here, so direct
    /// lookups cannot leak unpublished questions.
    pub fn find_published(
        conn: &PgConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use questions::dsl::{id, pub_date, questions as questions_table};

        let question = questions_table
            .filter(id.eq(question_id))
            .filter(pub_date.le(now))
            .first(conn)?;

        Ok(question)
    }

    /// Removes the question and all of its choices in one transaction.
    pub fn delete(conn: &PgConnection, question_id: i32) -> Result<(), Error> {
        use crate::schema::choices::dsl::{choices, question_id as choice_question_id};
        use questions::dsl::{id, questions as questions_table};

        conn.transaction::<_, Error, _>(|| {
            diesel::delete(choices.filter(choice_question_id.eq(question_id))).execute(conn)?;
            let deleted =
                diesel::delete(questions_table.filter(id.eq(question_id))).execute(conn)?;
            if deleted == 0 {
                return Err(Error::NotFound("Record not found".to_string()));
            }

            Ok(())
        })
    }

    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now && self.pub_date >= now - Duration::days(1)
    }
}
