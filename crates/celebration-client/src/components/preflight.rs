//! Pre-flight screen shown while grounded or taxiing.

use celebration_core::FlightStatus;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::content;

/// Props for the Preflight component.
#[derive(Properties, PartialEq)]
pub struct PreflightProps {
    pub status: FlightStatus,
    pub on_initiate: Callback<()>,
}

/// "Preparing for takeoff" screen with the runway progress bar.
#[function_component(Preflight)]
pub fn preflight(props: &PreflightProps) -> Html {
    let taxiing = props.status == FlightStatus::Taxiing;

    let on_click = {
        let on_initiate = props.on_initiate.clone();
        Callback::from(move |_: MouseEvent| on_initiate.emit(()))
    };

    html! {
        <div class="preflight">
            <div class="preflight-sky">
                <Icon data={IconData::LUCIDE_CLOUD} class="cloud cloud-left" />
                <Icon data={IconData::LUCIDE_CLOUD} class="cloud cloud-right" />
            </div>

            <div class="preflight-content">
                <div class="preflight-heading">
                    <div class="flight-badge">{ format!("FLIGHT {}", content::FLIGHT_CODE) }</div>
                    <h1>{ "PREPARING FOR TAKEOFF" }</h1>
                    <p class="preflight-subtitle">
                        { "Captain Daniel, please report to the flight deck." }
                    </p>
                </div>

                <div class="runway">
                    <div class="runway-markings" />
                    <div class={classes!("runway-progress", taxiing.then_some("rolling"))}>
                        <Icon
                            data={IconData::LUCIDE_PLANE}
                            class={if taxiing { "runway-plane pulse" } else { "runway-plane" }}
                        />
                    </div>
                </div>

                { if taxiing {
                    html! {
                        <div class="spooling">
                            <div class="spooling-title">{ "Engines Spooling Up..." }</div>
                            <p class="spooling-checklist">
                                { "Checking Flaps... Loading Cargo... Closing Deals..." }
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <button class="btn initiate-btn" onclick={on_click}>
                            <span>{ "INITIATE FLIGHT 44" }</span>
                            <Icon data={IconData::LUCIDE_PLANE} class="initiate-icon" />
                        </button>
                    }
                }}
            </div>
        </div>
    }
}
