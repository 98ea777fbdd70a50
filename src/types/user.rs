use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

/// Image shown for users who did not supply one.
pub const DEFAULT_IMAGE_URL: &str = "https://cdn-icons-png.flaticon.com/512/149/149071.png";

/// Column width of `first_name` / `last_name`.
pub const MAX_NAME_LEN: usize = 50;

/// Raw add/edit form body. Every field defaults to empty so a missing field
/// reaches validation instead of failing extraction.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct RUserForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A validated user ready to be written. Non-blank values are kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DBUserCreate {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl DBUserCreate {
    pub fn from_form(form: RUserForm) -> Result<Self, AppError> {
        let first_name = required_name("first_name", form.first_name)?;
        let last_name = required_name("last_name", form.last_name)?;
        let image_url = match form.image_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_IMAGE_URL.to_string(),
        };

        Ok(DBUserCreate { first_name, last_name, image_url })
    }
}

fn required_name(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(value)
}

/// What the templates see for one user.
#[derive(Serialize, Debug)]
pub struct UserView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub image_url: String,
}

impl From<entity::user::Model> for UserView {
    fn from(user: entity::user::Model) -> Self {
        UserView {
            full_name: user.full_name(),
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            image_url: user.image_url,
        }
    }
}
