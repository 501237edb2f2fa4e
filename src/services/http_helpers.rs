use actix_web::HttpResponse;

/// Creates a success JSON response
pub fn success_json<T: serde::Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(data)
}

/// 200 with the body when present, 204 when there is nothing to show
pub fn optional_json<T: serde::Serialize>(data: Option<T>) -> HttpResponse {
    match data {
        Some(data) => success_json(data),
        None => HttpResponse::NoContent().finish(),
    }
}
