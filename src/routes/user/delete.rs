use actix_web::{post, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{PageResponse, PageResult};

#[post("/{id}/delete")]
async fn delete(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> PageResult {
    db.delete_user(path.into_inner()).await?;

    Ok(PageResponse::SeeOther("/users".to_string()))
}
