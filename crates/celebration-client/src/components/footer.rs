use yew::prelude::*;

use crate::content;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="dashboard-footer">
            <p>{ content::FOOTER_COPYRIGHT }</p>
            <p class="footer-gate">{ content::FOOTER_GATE }</p>
        </footer>
    }
}
