use actix_web::get;

use crate::types::response::PageResponse;

#[get("/")]
async fn index() -> PageResponse {
    PageResponse::SeeOther("/users".to_string())
}
