//! Sidebar navigation between dashboard sections.

use celebration_core::ActiveTab;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

fn tab_icon(tab: ActiveTab) -> IconData {
    match tab {
        ActiveTab::Metrics => IconData::LUCIDE_MAP,
        ActiveTab::Perks => IconData::LUCIDE_TICKET,
        ActiveTab::Comms => IconData::LUCIDE_MESSAGE_CIRCLE,
    }
}

/// Props for the TabNav component.
#[derive(Properties, PartialEq)]
pub struct TabNavProps {
    pub active: ActiveTab,
    pub on_select: Callback<ActiveTab>,
}

#[function_component(TabNav)]
pub fn tab_nav(props: &TabNavProps) -> Html {
    html! {
        <nav class="tab-nav">
            { for ActiveTab::ALL.into_iter().map(|tab| {
                let is_active = props.active == tab;
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(tab));
                html! {
                    <button
                        key={tab.id()}
                        class={classes!("tab-btn", is_active.then_some("active"))}
                        onclick={onclick}
                    >
                        <div class="tab-label">
                            <Icon data={tab_icon(tab)} width="20px" height="20px" />
                            <span>{ tab.label() }</span>
                        </div>
                        if is_active {
                            <Icon data={IconData::LUCIDE_CHEVRON_RIGHT} width="20px" height="20px" />
                        }
                    </button>
                }
            }) }
        </nav>
    }
}
