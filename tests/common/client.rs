use actix_web::{body::MessageBody, dev::ServiceResponse, http::header, web, App};
use std::sync::Arc;
use blogly::{
    db::database_service::DatabaseService,
    templates::Templates,
};

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(
                Templates::new().expect("Failed to compile templates"),
            ))
            .configure(blogly::routes::configure_routes)
    }
}

/// The `Location` header of a redirect, panicking if there is none.
pub fn location<B: MessageBody>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .expect("response has no Location header")
        .to_str()
        .expect("Location header is not ASCII")
        .to_string()
}

pub async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = actix_web::test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body is not UTF-8")
}
