use std::sync::{Arc, OnceLock};

use minijinja::{context, Environment, HtmlEscape};
use serde::Serialize;

use crate::types::error::AppError;

const TEMPLATES: [(&str, &str); 5] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("error.html", include_str!("../../templates/error.html")),
    ("users/list.html", include_str!("../../templates/users/list.html")),
    ("users/show.html", include_str!("../../templates/users/show.html")),
    ("users/form.html", include_str!("../../templates/users/form.html")),
];

/// Compiled page templates, shared by every worker.
#[derive(Clone)]
pub struct Templates {
    env: Arc<Environment<'static>>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env: Arc::new(env) })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, AppError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}

// Error responses are built without access to app data, so they get their own copy.
static ERROR_TEMPLATES: OnceLock<Option<Templates>> = OnceLock::new();

/// Renders `error.html`, falling back to a bare heading if that fails.
pub fn render_error_page(status: u16, kind: &str, message: &str) -> String {
    ERROR_TEMPLATES
        .get_or_init(|| Templates::new().ok())
        .as_ref()
        .and_then(|templates| {
            templates
                .render("error.html", context! { status, kind, message })
                .ok()
        })
        .unwrap_or_else(|| format!("<h1>{status} {}</h1>", HtmlEscape(kind)))
}
