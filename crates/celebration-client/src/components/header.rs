//! Sticky dashboard header with the celebration-mode toggle.

use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::content;

/// Props for the DashboardHeader component.
#[derive(Properties, PartialEq)]
pub struct DashboardHeaderProps {
    /// Whether confetti is currently falling.
    pub celebrating: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(DashboardHeader)]
pub fn dashboard_header(props: &DashboardHeaderProps) -> Html {
    let on_click = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <header class="dashboard-header">
            <div class="header-inner">
                <div class="header-brand">
                    <div class="brand-logo">
                        <Icon data={IconData::LUCIDE_GLOBE} class="brand-icon" />
                    </div>
                    <div>
                        <h1 class="brand-name">{ content::AIRLINE }</h1>
                        <div class="brand-meta">
                            <span class="access-badge">{ "CEO ACCESS" }</span>
                            <span>{ content::FLIGHT_NAME }</span>
                        </div>
                    </div>
                </div>
                <button
                    class={classes!("celebrate-toggle", props.celebrating.then_some("active"))}
                    onclick={on_click}
                    title="Celebration Mode"
                >
                    <Icon data={IconData::LUCIDE_PARTY_POPPER} class="celebrate-icon" />
                </button>
            </div>
        </header>
    }
}
