//! Main application component.

use celebration_core::{ActiveTab, FlightStatus};
use yew::prelude::*;

use crate::components::{
    BoardingPass, CommsPanel, Confetti, DashboardHeader, Footer, MetricsPanel, PerksPanel,
    Preflight, TabNav,
};
use crate::hooks::{use_celebration_config, use_session, SessionHandle};

fn action(session: &SessionHandle, f: fn(&SessionHandle)) -> Callback<()> {
    let session = session.clone();
    Callback::from(move |()| f(&session))
}

/// Root component. Shows the pre-flight screen until airborne, then the
/// dashboard for the rest of the session.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_celebration_config();
    let session = use_session(config);
    let snapshot = session.snapshot();

    if snapshot.status != FlightStatus::Airborne {
        return html! {
            <Preflight
                status={snapshot.status}
                on_initiate={action(&session, SessionHandle::initiate_flight)}
            />
        };
    }

    let on_select = {
        let session = session.clone();
        Callback::from(move |tab: ActiveTab| session.select_tab(tab))
    };

    let panel = match snapshot.active_tab {
        ActiveTab::Metrics => html! { <MetricsPanel /> },
        ActiveTab::Perks => html! { <PerksPanel /> },
        ActiveTab::Comms => html! {
            <CommsPanel on_acknowledge={action(&session, SessionHandle::acknowledge)} />
        },
    };

    html! {
        <div class="dashboard">
            <Confetti particles={snapshot.particles.clone()} />
            <DashboardHeader
                celebrating={snapshot.celebrating}
                on_toggle={action(&session, SessionHandle::toggle_celebration)}
            />

            <main class="dashboard-main">
                <BoardingPass />

                <div class="dashboard-grid">
                    <TabNav active={snapshot.active_tab} on_select={on_select} />
                    <div class="tab-content">
                        { panel }
                    </div>
                </div>
            </main>

            <Footer />
        </div>
    }
}
