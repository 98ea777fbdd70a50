use actix_web::{http::{header::ContentType, StatusCode}, HttpResponse, ResponseError};
use sea_orm::DbErr;
use thiserror::Error;

use crate::templates::render_error_page;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("not found")]
    NotFound,
    #[error("validation error: {0}")]
    Validation(String),

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
    #[error(transparent)]
    Template(#[from] minijinja::Error),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "Not Found",
            Self::Validation(_) => "Invalid Input",
            Self::Db(_) | Self::Template(_) => "Internal Server Error",
        }
    }

    /// Text shown to the client. Infra errors never leak their details.
    fn public_message(&self) -> String {
        match self {
            Self::NotFound => "The requested user does not exist.".to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::Db(_) | Self::Template(_) => "Something went wrong.".to_string(),
        }
    }

    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Db(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self, Self::Db(_) | Self::Template(_)) {
            tracing::error!(error = %self, "request failed");
        }
        let body = render_error_page(
            self.status_code().as_u16(),
            self.kind(),
            &self.public_message(),
        );
        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(body)
    }
}
