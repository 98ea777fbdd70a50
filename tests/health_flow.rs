mod common;

use actix_web::{test, http::StatusCode};
use common::{TestContext, client::{body_text, location, TestClient}};

#[actix_web::test]
async fn test_health_check_flow_success() {
    println!("\n\n[+] Running test: test_health_check_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    println!("[+] Actix web app initialized.");

    println!("[>] Sending GET request to /health");
    let req = test::TestRequest::get()
        .uri("/health")
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "ok");
    println!("[/] Test passed: Health check successful.");
}

#[actix_web::test]
async fn test_health_check_flow_wrong_http_method() {
    println!("\n\n[+] Running test: test_health_check_flow_wrong_http_method");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Sending POST request to /health (expecting failure)");
    let req = test::TestRequest::post()
        .uri("/health")
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    // Should return not found.
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: Correctly returned NOT_FOUND for wrong HTTP method.");
}

#[actix_web::test]
async fn test_root_redirects_to_user_list() {
    println!("\n\n[+] Running test: test_root_redirects_to_user_list");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/users");
    println!("[/] Test passed: / redirects to /users.");
}
