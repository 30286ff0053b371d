use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{
    get_conn,
    models::{Choice, Question},
    new_pool,
};

fn main() {
    dotenv().ok();

    let pool = new_pool();
    let conn = get_conn(&pool).unwrap();

    let now = Utc::now();
    let questions: Vec<(&str, i64, Vec<&str>)> = vec![
        (
            "What's the best series of the year?",
            72,
            vec!["The platform one", "The space one", "The heist one"],
        ),
        (
            "Which release are you most excited for?",
            12,
            vec!["The sequel", "The reboot"],
        ),
        (
            "Who should host next year's ceremony?",
            2,
            vec!["Last year's host", "Someone new"],
        ),
    ];

    for (question_text, hours_ago, choice_texts) in questions {
        let question = Question::create(
            &conn,
            question_text.to_string(),
            now - Duration::hours(hours_ago),
        )
        .unwrap();

        for choice_text in choice_texts {
            Choice::create(&conn, question.id, choice_text.to_string()).unwrap();
        }
    }
}
