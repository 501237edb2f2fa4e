pub mod content_handler;
pub mod quiz_handler;
pub mod topic_handler;

use actix_web::web;

pub use content_handler::{create_detailed_explanation, create_example, create_explanation};
pub use quiz_handler::{check_answer, create_exam_prep_quiz, create_quiz};
pub use topic_handler::{banner_animation, health_check, list_topics, periodic_table};

/// Registers every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(list_topics)
        .service(periodic_table)
        .service(banner_animation)
        .service(create_explanation)
        .service(create_detailed_explanation)
        .service(create_example)
        .service(create_quiz)
        .service(create_exam_prep_quiz)
        .service(check_answer);
}
