use actix_web::{get, web};
use minijinja::context;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::templates::Templates;
use crate::types::response::{PageResponse, PageResult};
use crate::types::user::UserView;

#[get("/{id}")]
async fn show(
    db: web::Data<Arc<DatabaseService>>,
    templates: web::Data<Templates>,
    path: web::Path<i32>,
) -> PageResult {
    let user = UserView::from(db.get_user_by_id(path.into_inner()).await?);

    Ok(PageResponse::Html(
        templates.render("users/show.html", context! { user })?,
    ))
}
