use actix_web::{get, web};
use minijinja::context;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::templates::Templates;
use crate::types::response::{PageResponse, PageResult};
use crate::types::user::UserView;

#[get("")]
async fn list(
    db: web::Data<Arc<DatabaseService>>,
    templates: web::Data<Templates>,
) -> PageResult {
    let users: Vec<UserView> = db
        .list_users()
        .await?
        .into_iter()
        .map(UserView::from)
        .collect();

    Ok(PageResponse::Html(
        templates.render("users/list.html", context! { users })?,
    ))
}
