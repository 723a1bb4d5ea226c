//! "First Class Perks" tab.

use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::content::{self, Perk};

/// Props for the PerkCard component.
#[derive(Properties, PartialEq)]
pub struct PerkCardProps {
    pub perk: Perk,
}

#[function_component(PerkCard)]
pub fn perk_card(props: &PerkCardProps) -> Html {
    html! {
        <div class={classes!("perk-card", props.perk.accent.class())}>
            <h4>{ props.perk.title }</h4>
            <p>{ props.perk.desc }</p>
        </div>
    }
}

#[function_component(PerksPanel)]
pub fn perks_panel() -> Html {
    html! {
        <div class="tab-panel fade-in">
            <h3 class="panel-title">
                <Icon data={IconData::LUCIDE_TICKET} class="panel-icon" />
                { "Upgrade Status: CONFIRMED" }
            </h3>
            <div class="perk-grid">
                { for content::perks().into_iter().map(|perk| {
                    let key = perk.title;
                    html! { <PerkCard key={key} {perk} /> }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_perk_titles_are_unique_keys() {
        let perks = content::perks();
        let keys: HashSet<_> = perks.iter().map(|perk| perk.title).collect();
        assert_eq!(keys.len(), perks.len());
    }
}
