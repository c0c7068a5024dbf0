//! Static form pages.

use crate::templates::{HomeTemplate, HtmlTemplate, LoginTemplate, RegisterTemplate};

pub async fn home() -> HtmlTemplate<HomeTemplate> {
    HtmlTemplate(HomeTemplate)
}

pub async fn login_form() -> HtmlTemplate<LoginTemplate> {
    HtmlTemplate(LoginTemplate)
}

pub async fn register_form() -> HtmlTemplate<RegisterTemplate> {
    HtmlTemplate(RegisterTemplate)
}
