use crate::types::error::AppError;
use actix_web::{http::header, HttpResponse, Responder};

/// What a page handler hands back: a rendered document or a redirect after a form post.
pub enum PageResponse {
    Html(String),
    SeeOther(String),
}

impl Responder for PageResponse {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            PageResponse::Html(body) => HttpResponse::Ok()
                .content_type(header::ContentType::html())
                .body(body),
            PageResponse::SeeOther(location) => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish(),
        }
    }
}

pub type PageResult = Result<PageResponse, AppError>;
