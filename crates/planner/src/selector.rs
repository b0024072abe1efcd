use serde::Serialize;

use crate::{
    InterestFlag, PreferenceInput,
    catalog::{self, Recommendation},
};

pub const MIXED_ACTIVITIES: &str = "a mix of activities";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    pub summary: String,
    /// Render in this order; the vibe bonus, when present, comes first.
    pub recommendations: Vec<&'static Recommendation>,
}

pub fn select_recommendations(input: &PreferenceInput) -> DayPlan {
    let mut recommendations = Vec::with_capacity(InterestFlag::CANONICAL_ORDER.len() + 1);

    if let Some(bonus) = catalog::vibe_bonus(input.vibe) {
        recommendations.push(bonus);
    }

    if input.interests.is_empty() {
        recommendations.extend(catalog::fallback());
    } else {
        recommendations.extend(
            InterestFlag::CANONICAL_ORDER
                .iter()
                .filter(|flag| input.interests.contains(**flag))
                .map(|flag| catalog::lookup(*flag)),
        );
    }

    DayPlan {
        summary: summarize(input),
        recommendations,
    }
}

fn summarize(input: &PreferenceInput) -> String {
    let interests = if input.interests.is_empty() {
        MIXED_ACTIVITIES.to_owned()
    } else {
        input
            .interests
            .iter()
            .map(InterestFlag::label)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "A {} day for {}, including {interests}.",
        input.vibe, input.group
    )
}
