#![allow(dead_code)]

use std::sync::Arc;
use blogly::db::database_service::DatabaseService;
use blogly::types::user::DEFAULT_IMAGE_URL;
use entity::user::Model as UserModel;
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::testcontainers::{runners::AsyncRunner, ContainerAsync};

pub mod client;

/// One isolated database per test, wiped and seeded with a single user.
pub struct TestContext {
    pub db: Arc<DatabaseService>,
    pub seeded: UserModel,
    pub _container: Option<ContainerAsync<Postgres>>,
}

impl TestContext {
    /// Fresh in-memory SQLite database.
    pub async fn new() -> TestContext {
        let db = Arc::new(
            DatabaseService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize DatabaseService")
        );

        Self::seed(db, None).await
    }

    /// Throwaway Postgres container. Needs a Docker daemon.
    pub async fn postgres() -> TestContext {
        let postgres = Postgres::default().with_db_name("test_blogly_db");
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/test_blogly_db", host, port);

        let db = Arc::new(
            DatabaseService::new(&db_url)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        Self::seed(db, Some(container)).await
    }

    async fn seed(db: Arc<DatabaseService>, container: Option<ContainerAsync<Postgres>>) -> TestContext {
        db.reset().await.expect("Failed to reset schema");

        let seeded = db
            .create_user(test_data::user("Mathew", "Stevens", DEFAULT_IMAGE_URL))
            .await
            .expect("Failed to seed user");

        TestContext {
            db,
            seeded,
            _container: container,
        }
    }
}

pub mod test_data {
    use blogly::types::user::DBUserCreate;

    pub fn user(first_name: &str, last_name: &str, image_url: &str) -> DBUserCreate {
        DBUserCreate {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            image_url: image_url.to_string(),
        }
    }

    /// Url-encoded body of the add/edit form.
    pub fn form(first_name: &str, last_name: &str, image_url: &str) -> Vec<(&'static str, String)> {
        vec![
            ("first_name", first_name.to_string()),
            ("last_name", last_name.to_string()),
            ("image_url", image_url.to_string()),
        ]
    }
}
