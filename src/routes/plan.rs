use axum::{
    Json,
    extract::Form,
    response::IntoResponse,
};
use meadowbrook_planner::{
    DayPlan, Group, InterestFlag, Interests, PreferenceForm, PreferenceInput, PreferenceRequest,
    Vibe, normalize_form, normalize_request, select_recommendations,
};
use serde::Deserialize;
use strum::VariantArray;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "plan.html")]
pub struct PlanTemplate {
    pub name: String,
    pub vibe: Vibe,
    pub group: Group,
    pub interests: Interests,
    pub vibes: &'static [Vibe],
    pub groups: &'static [Group],
    pub flags: &'static [InterestFlag],
    pub plan: Option<DayPlan>,
}

impl PlanTemplate {
    fn new(input: PreferenceInput, plan: Option<DayPlan>) -> Self {
        Self {
            name: input.name,
            vibe: input.vibe,
            group: input.group,
            interests: input.interests,
            vibes: Vibe::VARIANTS,
            groups: Group::VARIANTS,
            flags: InterestFlag::CANONICAL_ORDER,
            plan,
        }
    }

    fn is_vibe(&self, vibe: &Vibe) -> bool {
        self.vibe == *vibe
    }

    fn is_group(&self, group: &Group) -> bool {
        self.group == *group
    }

    fn is_checked(&self, flag: &InterestFlag) -> bool {
        self.interests.contains(*flag)
    }
}

fn plan_for(input: &PreferenceInput) -> DayPlan {
    tracing::debug!(
        vibe = %input.vibe,
        group = %input.group,
        interests = input.interests.len(),
        "building day plan"
    );

    select_recommendations(input)
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(PlanTemplate::new(PreferenceInput::default(), None))
}

pub async fn action(
    template: Template,
    Form(pairs): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    let input = normalize_form(&PreferenceForm::from_pairs(pairs));
    let plan = plan_for(&input);

    template.render(PlanTemplate::new(input, Some(plan)))
}

pub async fn api(Json(body): Json<serde_json::Value>) -> Json<DayPlan> {
    // anything that is not an object is treated as an empty request
    let request = PreferenceRequest::deserialize(body).unwrap_or_default();
    let input = normalize_request(&request);

    Json(plan_for(&input))
}
