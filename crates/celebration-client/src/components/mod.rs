//! UI Components for the Flight 44 card.

mod boarding_pass;
mod comms_panel;
mod confetti;
mod footer;
mod header;
mod metrics_panel;
mod perks_panel;
mod preflight;
mod tab_nav;

pub use boarding_pass::BoardingPass;
pub use comms_panel::CommsPanel;
pub use confetti::Confetti;
pub use footer::Footer;
pub use header::DashboardHeader;
pub use metrics_panel::MetricsPanel;
pub use perks_panel::PerksPanel;
pub use preflight::Preflight;
pub use tab_nav::TabNav;
