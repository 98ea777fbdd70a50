use actix_web::{get, post, web};
use minijinja::context;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::templates::Templates;
use crate::types::response::{PageResponse, PageResult};
use crate::types::user::{DBUserCreate, RUserForm};

#[get("/new")]
async fn new_form(templates: web::Data<Templates>) -> PageResult {
    Ok(PageResponse::Html(templates.render(
        "users/form.html",
        context! {
            heading => "Create a user",
            action => "/users/new",
            cancel => "/users",
            submit => "Add",
            first_name => "",
            last_name => "",
            image_url => "",
        },
    )?))
}

#[post("/new")]
async fn create(
    db: web::Data<Arc<DatabaseService>>,
    form: web::Form<RUserForm>,
) -> PageResult {
    let payload = DBUserCreate::from_form(form.into_inner())?;
    db.create_user(payload).await?;

    Ok(PageResponse::SeeOther("/users".to_string()))
}
