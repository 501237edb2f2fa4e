use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::{CheckOutcome, Operation},
        dto::{
            request::{CheckAnswerRequest, ExamPrepRequest, TopicSelectionRequest},
            response::{CheckAnswerResponse, GenerationResponse},
        },
    },
    services::{
        answer_checker,
        http_helpers::{optional_json, success_json},
    },
};

#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<TopicSelectionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state
        .content_generator
        .generate_for_selection(Operation::Quiz, &request.topic)
        .await?
        .map(|result| {
            GenerationResponse::new(Operation::Quiz, request.topic.trim(), result.rendered_markdown)
        });

    Ok(optional_json(response))
}

/// Quiz on a topic typed in by the student rather than picked from the list.
#[post("/api/quizzes/exam-prep")]
pub async fn create_exam_prep_quiz(
    state: web::Data<AppState>,
    request: web::Json<ExamPrepRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let result = state.content_generator.make_quiz(&request.topic).await?;

    Ok(success_json(GenerationResponse::new(
        Operation::Quiz,
        request.topic.trim(),
        result.rendered_markdown,
    )))
}

#[post("/api/quizzes/check")]
pub async fn check_answer(
    state: web::Data<AppState>,
    request: web::Json<CheckAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let answer = answer_checker::evaluate(&request.quiz_text, &request.answer);
    let outcome = answer.outcome();
    log::info!("Quiz answer checked: {:?}", outcome);

    let animation = if outcome == CheckOutcome::Correct {
        state.animation_service.celebration().await
    } else {
        None
    };

    Ok(success_json(CheckAnswerResponse::new(answer, animation)))
}
