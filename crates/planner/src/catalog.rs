//! Static recommendation records shown by the day planner.
//!
//! Every interest flag maps to exactly one record. The catalog is fixed at
//! compile time and never mutated.

use serde::Serialize;

use crate::{InterestFlag, Vibe};

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    /// Page section the visitor can jump to. Passed through untouched.
    pub link: Option<&'static str>,
}

pub static TRAIL_HEAD: Recommendation = Recommendation {
    title: "Trail Head",
    description: "Follow the orchard loop up to the ridge. Maps and walking poles wait at the barn door.",
    link: Some("/#trails"),
};

pub static SWIMMING_POOL: Recommendation = Recommendation {
    title: "Swimming Pool",
    description: "The spring-fed pool by the meadow is open to day guests from late May through September.",
    link: Some("/#pool"),
};

pub static FARM_MARKET: Recommendation = Recommendation {
    title: "Farm Market",
    description: "Pick up cheese, honey and seasonal produce from the Saturday market in the old dairy.",
    link: Some("/#market"),
};

pub static CELEBRATION_LAWN: Recommendation = Recommendation {
    title: "Celebration Lawn",
    description: "A sheltered lawn with string lights and a covered stage for birthdays and get-togethers.",
    link: Some("/#events"),
};

pub static PICNIC_SPOTS: Recommendation = Recommendation {
    title: "Picnic Spots",
    description: "Shaded tables along the creek. Baskets can be ordered from the farm kitchen the day before.",
    link: Some("/#picnics"),
};

pub static PARTY_READY_SPACES: Recommendation = Recommendation {
    title: "Party-Ready Spaces",
    description: "The hay barn and courtyard come set up for parties, with catering and music on request.",
    link: Some("/contact"),
};

static FALLBACK: [&Recommendation; 3] = [&CELEBRATION_LAWN, &TRAIL_HEAD, &PICNIC_SPOTS];

static ALL: [&Recommendation; 6] = [
    &TRAIL_HEAD,
    &SWIMMING_POOL,
    &FARM_MARKET,
    &CELEBRATION_LAWN,
    &PICNIC_SPOTS,
    &PARTY_READY_SPACES,
];

pub fn lookup(flag: InterestFlag) -> &'static Recommendation {
    match flag {
        InterestFlag::Hiking => &TRAIL_HEAD,
        InterestFlag::Swimming => &SWIMMING_POOL,
        InterestFlag::Market => &FARM_MARKET,
        InterestFlag::FestiveParty => &CELEBRATION_LAWN,
        InterestFlag::RelaxedPicnic => &PICNIC_SPOTS,
    }
}

/// Shown when no interest was selected, in this order.
pub fn fallback() -> &'static [&'static Recommendation; 3] {
    &FALLBACK
}

pub fn vibe_bonus(vibe: Vibe) -> Option<&'static Recommendation> {
    match vibe {
        Vibe::Celebratory => Some(&PARTY_READY_SPACES),
        Vibe::Relaxing | Vibe::Adventurous => None,
    }
}

pub fn all() -> &'static [&'static Recommendation] {
    &ALL
}
