//! Askama templates for the web frontend.

use askama::Template;

use super::dto::SessionView;

/// The trip clock page: both pickers and the computed difference.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub view: SessionView,
}
