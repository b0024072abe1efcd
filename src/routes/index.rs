use axum::response::IntoResponse;

use crate::site::{ACTIVITIES, Activity, HOURS, Hours, PRICES, Price};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub activities: &'static [Activity],
    pub prices: &'static [Price],
    pub hours: &'static [Hours],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        activities: ACTIVITIES,
        prices: PRICES,
        hours: HOURS,
    })
}
