use actix_web::web;

pub mod health;
pub mod root;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(root::index);
    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/users")
            .service(user::list::list)
            // `/new` has to be registered ahead of `/{id}`.
            .service(user::create::new_form)
            .service(user::create::create)
            .service(user::show::show)
            .service(user::edit::edit_form)
            .service(user::edit::edit)
            .service(user::delete::delete)
    );
}
