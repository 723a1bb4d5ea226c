//! "Crew Comms" tab - birthday messages and the celebrate button.

use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::content;

/// Props for the CommsPanel component.
#[derive(Properties, PartialEq)]
pub struct CommsPanelProps {
    /// Fired by "Acknowledge & Celebrate".
    pub on_acknowledge: Callback<()>,
}

#[function_component(CommsPanel)]
pub fn comms_panel(props: &CommsPanelProps) -> Html {
    let on_click = {
        let on_acknowledge = props.on_acknowledge.clone();
        Callback::from(move |_: MouseEvent| on_acknowledge.emit(()))
    };

    html! {
        <div class="tab-panel fade-in">
            <div class="panel-heading">
                <h3>
                    <Icon data={IconData::LUCIDE_MESSAGE_CIRCLE} class="panel-icon" />
                    { "Incoming Transmissions" }
                </h3>
                <span class="panel-tag panel-tag-new">{ "2 NEW" }</span>
            </div>

            <div class="message-list">
                <div class="message crew-message">
                    <div class="message-sender">
                        <div class="avatar">
                            <Icon data={IconData::LUCIDE_USER} width="40px" height="40px" />
                        </div>
                        <div class="sender-name">{ content::CREW_NAME }</div>
                        <div class="sender-role">{ content::CREW_ROLE }</div>
                    </div>
                    <div class="speech-bubble">
                        <p>{ format!("\"{}\"", content::CREW_MESSAGE) }</p>
                    </div>
                </div>

                <div class="message tower-message">
                    <div class="tower-icon">
                        <Icon data={IconData::LUCIDE_WIND} width="32px" height="32px" />
                    </div>
                    <div>
                        <h4>{ content::TOWER_NAME }</h4>
                        <p>{ format!("\"{}\"", content::TOWER_MESSAGE) }</p>
                    </div>
                </div>
            </div>

            <div class="acknowledge-row">
                <button class="btn acknowledge-btn" onclick={on_click}>
                    <Icon data={IconData::LUCIDE_PARTY_POPPER} width="20px" height="20px" />
                    { "Acknowledge & Celebrate" }
                </button>
            </div>
        </div>
    }
}
