//! Copy text for the boarding pass and dashboard.

use yew_icons::IconData;

pub const FLIGHT_CODE: &str = "BGA-044";
pub const FLIGHT_NAME: &str = "Flight 44";
pub const AIRLINE: &str = "Best Group Airfares";
pub const PASSENGER: &str = "DANIEL";
pub const DESTINATION: &str = "YEAR 44";

pub const WELCOME: &str = "Welcome aboard, Captain. You have successfully navigated 43 years of \
    turbulence, clear skies, and long-haul flights.";
pub const CLEARED: &str = "Flight 44 is now cleared for takeoff.";

pub const MILESTONE: &str = "Daniel has logged over 376,000 hours of life experience. Expert \
    rating in navigating \"Family Logistics\" and \"Business Strategy.\"";

/// One row of the "CEO Performance Data" panel.
#[derive(Clone, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u8,
    pub color: &'static str,
    pub icon: IconData,
    /// Shown as "MAX CAPACITY" instead of a percentage.
    pub maxed: bool,
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            label: "Group Booking Mastery",
            value: 100,
            color: "bar-blue",
            icon: IconData::LUCIDE_GLOBE,
            maxed: false,
        },
        Stat {
            label: "Deal Closing Velocity",
            value: 98,
            color: "bar-emerald",
            icon: IconData::LUCIDE_WIND,
            maxed: false,
        },
        Stat {
            label: "Turbulence Resistance",
            value: 95,
            color: "bar-indigo",
            icon: IconData::LUCIDE_CLOUD,
            maxed: false,
        },
        Stat {
            label: "Jet Fuel (Coffee) Capacity",
            value: 90,
            color: "bar-coffee",
            icon: IconData::LUCIDE_COFFEE,
            maxed: false,
        },
        Stat {
            label: "Dad Joke Altitude",
            value: 100,
            color: "bar-yellow",
            icon: IconData::LUCIDE_AWARD,
            maxed: true,
        },
    ]
}

/// Accent used by a perk card's left border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Indigo,
    Emerald,
    Amber,
}

impl Accent {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Indigo => "accent-indigo",
            Self::Emerald => "accent-emerald",
            Self::Amber => "accent-amber",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Perk {
    pub title: &'static str,
    pub desc: &'static str,
    pub accent: Accent,
}

pub fn perks() -> Vec<Perk> {
    vec![
        Perk {
            title: "Chief Executive Aura",
            desc: "Enter any room like it's a first-class lounge. Authority +50.",
            accent: Accent::Blue,
        },
        Perk {
            title: "Auto-Pilot Mode",
            desc: "Ability to sleep anywhere, anytime, including during movies.",
            accent: Accent::Indigo,
        },
        Perk {
            title: "Global Network",
            desc: "Knows a guy who knows a guy in almost every time zone.",
            accent: Accent::Emerald,
        },
        Perk {
            title: "Priority Boarding",
            desc: "Skip the line at the fridge. Reserved access to the best snacks.",
            accent: Accent::Amber,
        },
    ]
}

pub const CREW_NAME: &str = "Cris";
pub const CREW_ROLE: &str = "Crew Member";
pub const CREW_MESSAGE: &str = "Happy Birthday, boss! Wishing you a fantastic day filled with \
    laughter, good company, and of course some cake. May this year bring you continued success, \
    good health (time to train hard!), new adventures, and plenty of reasons to smile. Thanks for \
    everything you do, especially all those 'approved by Daniel' days off. We truly appreciate you";

pub const TOWER_NAME: &str = "Control Tower";
pub const TOWER_MESSAGE: &str = "We're forecasting clear skies, smooth sailing, and \
    record-breaking profits in happiness for the year ahead. Keep soaring, Captain!";

pub const FOOTER_COPYRIGHT: &str = "© 2024 Best Group Airfares Birthday Corp. All Rights Reserved.";
pub const FOOTER_GATE: &str = "Flight BGA-044 • Terminal 4 • Gate 4";
