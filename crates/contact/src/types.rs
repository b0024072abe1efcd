use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum Subject {
    #[default]
    #[serde(rename = "General Inquiry")]
    #[strum(serialize = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Farm Stay")]
    #[strum(serialize = "Farm Stay")]
    FarmStay,
    #[serde(rename = "Event Booking")]
    #[strum(serialize = "Event Booking")]
    EventBooking,
    #[serde(rename = "Group Visit")]
    #[strum(serialize = "Group Visit")]
    GroupVisit,
    Other,
}

/// Where submissions are addressed. Nothing is sent; the address is
/// recorded alongside each logged submission.
#[derive(Clone, Debug)]
pub struct ContactSettings {
    pub inbox_address: String,
}
