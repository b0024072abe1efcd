//! Venue information shown on the home page.

pub struct Activity {
    pub anchor: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub struct Price {
    pub item: &'static str,
    pub amount: &'static str,
    pub note: Option<&'static str>,
}

pub struct Hours {
    pub days: &'static str,
    pub times: &'static str,
}

pub const ACTIVITIES: &[Activity] = &[
    Activity {
        anchor: "trails",
        name: "Orchard & ridge trails",
        description: "Three marked loops from an easy orchard stroll to the ridge climb.",
    },
    Activity {
        anchor: "pool",
        name: "Spring-fed pool",
        description: "Open late May through September, lifeguarded at weekends.",
    },
    Activity {
        anchor: "market",
        name: "Saturday farm market",
        description: "Local cheese, honey, bread and whatever the garden gave us this week.",
    },
    Activity {
        anchor: "events",
        name: "Celebrations & events",
        description: "Barn, courtyard and lawn for birthdays, reunions and team days.",
    },
    Activity {
        anchor: "picnics",
        name: "Creekside picnics",
        description: "Shaded tables by the water, with baskets from the farm kitchen.",
    },
];

pub const PRICES: &[Price] = &[
    Price {
        item: "Day pass (adult)",
        amount: "$18",
        note: Some("Children under 12 half price"),
    },
    Price {
        item: "Family day pass",
        amount: "$50",
        note: Some("Two adults and up to three children"),
    },
    Price {
        item: "Farm stay, per night",
        amount: "from $140",
        note: Some("Breakfast included"),
    },
    Price {
        item: "Event space hire",
        amount: "on request",
        note: None,
    },
];

pub const HOURS: &[Hours] = &[
    Hours {
        days: "Tuesday to Friday",
        times: "9:00 to 17:00",
    },
    Hours {
        days: "Saturday and Sunday",
        times: "8:00 to 18:00",
    },
    Hours {
        days: "Monday",
        times: "Closed, except for booked events",
    },
];
