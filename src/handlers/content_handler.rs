use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::Operation,
        dto::{
            request::{
                DetailedExplanationRequest, ExplanationRequest, MarkdownFormat,
                TopicSelectionRequest,
            },
            response::GenerationResponse,
        },
    },
    services::{
        http_helpers::{optional_json, success_json},
        markdown::format_as_bullets,
    },
};

#[post("/api/explanations")]
pub async fn create_explanation(
    state: web::Data<AppState>,
    request: web::Json<ExplanationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state
        .content_generator
        .generate_for_selection(Operation::Explanation, &request.topic)
        .await?
        .map(|result| {
            let markdown = match request.format {
                MarkdownFormat::Plain => result.rendered_markdown,
                MarkdownFormat::Bullets => format_as_bullets(&result.rendered_markdown),
            };
            GenerationResponse::new(Operation::Explanation, request.topic.trim(), markdown)
        });

    Ok(optional_json(response))
}

/// Free-text help for whatever the student is struggling with.
#[post("/api/explanations/detailed")]
pub async fn create_detailed_explanation(
    state: web::Data<AppState>,
    request: web::Json<DetailedExplanationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let result = state
        .content_generator
        .explain_detailed(&request.description)
        .await?;

    Ok(success_json(GenerationResponse::new(
        Operation::DetailedExplanation,
        request.description.trim(),
        result.rendered_markdown,
    )))
}

#[post("/api/examples")]
pub async fn create_example(
    state: web::Data<AppState>,
    request: web::Json<TopicSelectionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state
        .content_generator
        .generate_for_selection(Operation::Example, &request.topic)
        .await?
        .map(|result| {
            GenerationResponse::new(
                Operation::Example,
                request.topic.trim(),
                result.rendered_markdown,
            )
        });

    Ok(optional_json(response))
}
