use actix_web::{get, HttpResponse};

#[get("")]
async fn health(
    _req: actix_web::HttpRequest
) -> HttpResponse {
    HttpResponse::Ok().body("ok")
}
