use actix_web::{get, post, web};
use minijinja::context;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::templates::Templates;
use crate::types::response::{PageResponse, PageResult};
use crate::types::user::{DBUserCreate, RUserForm};

#[get("/{id}/edit")]
async fn edit_form(
    db: web::Data<Arc<DatabaseService>>,
    templates: web::Data<Templates>,
    path: web::Path<i32>,
) -> PageResult {
    let user = db.get_user_by_id(path.into_inner()).await?;

    Ok(PageResponse::Html(templates.render(
        "users/form.html",
        context! {
            heading => "Edit a user",
            action => format!("/users/{}/edit", user.id),
            cancel => format!("/users/{}", user.id),
            submit => "Save",
            first_name => user.first_name,
            last_name => user.last_name,
            image_url => user.image_url,
        },
    )?))
}

#[post("/{id}/edit")]
async fn edit(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    form: web::Form<RUserForm>,
) -> PageResult {
    let id = path.into_inner();
    let payload = DBUserCreate::from_form(form.into_inner())?;
    db.update_user(id, payload).await?;

    Ok(PageResponse::SeeOther(format!("/users/{id}")))
}
