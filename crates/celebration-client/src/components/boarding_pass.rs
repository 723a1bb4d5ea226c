//! Hero boarding pass.

use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::content;

#[function_component(BoardingPass)]
pub fn boarding_pass() -> Html {
    html! {
        <section class="boarding-pass">
            <div class="pass-watermark">
                <Icon data={IconData::LUCIDE_PLANE} width="256px" height="256px" />
            </div>

            <div class="pass-header">
                <div>
                    <p class="pass-label">{ "PASSENGER NAME" }</p>
                    <h2 class="pass-passenger">{ content::PASSENGER }</h2>
                    <p class="pass-status">
                        <Icon data={IconData::LUCIDE_STAR} class="status-star" />
                        { "PLATINUM STATUS MEMBER" }
                    </p>
                </div>
                <div class="pass-destination">
                    <div class="pass-label">{ "DESTINATION" }</div>
                    <div class="destination-value">{ content::DESTINATION }</div>
                    <div class="pass-label">{ "NON-STOP SERVICE" }</div>
                </div>
            </div>

            <div class="pass-body">
                <p>
                    { content::WELCOME }
                    <span class="pass-cleared">{ " " }{ content::CLEARED }</span>
                </p>
            </div>
        </section>
    }
}
