use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, user::DBUserCreate};
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};
use tracing::info;

impl DatabaseService {
    /// Every user, ordered by last then first name.
    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn find_user(&self, id: i32) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let user = UserActive {
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            image_url: Set(payload.image_url),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!(user_id = user.id, "created user");
        Ok(user)
    }

    pub async fn update_user(&self, id: i32, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(id).await?.into();
        am.first_name = Set(payload.first_name);
        am.last_name = Set(payload.last_name);
        am.image_url = Set(payload.image_url);
        let user = am.update(&self.db).await?;

        info!(user_id = user.id, "updated user");
        Ok(user)
    }

    /// Removes the row for good. A missing id is `NotFound` and changes nothing.
    pub async fn delete_user(&self, id: i32) -> Result<(), AppError> {
        let res = User::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        info!(user_id = id, "deleted user");
        Ok(())
    }
}
