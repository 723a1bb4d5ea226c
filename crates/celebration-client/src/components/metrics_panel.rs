//! "Flight Metrics" tab - CEO performance bars.

use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::content::{self, Stat};

/// Props for the StatBar component.
#[derive(Properties, PartialEq)]
pub struct StatBarProps {
    pub stat: Stat,
}

/// Label, value readout and filled bar for one stat.
#[function_component(StatBar)]
pub fn stat_bar(props: &StatBarProps) -> Html {
    let stat = &props.stat;
    let readout = if stat.maxed {
        "MAX CAPACITY".to_string()
    } else {
        format!("{}%", stat.value)
    };

    html! {
        <div class="stat-bar">
            <div class="stat-header">
                <div class="stat-label">
                    <span class={classes!("stat-icon", stat.color)}>
                        <Icon data={stat.icon.clone()} width="16px" height="16px" />
                    </span>
                    <span>{ stat.label }</span>
                </div>
                <span class={classes!("stat-readout", stat.maxed.then_some("maxed"))}>
                    { readout }
                </span>
            </div>
            <div class="stat-track">
                <div
                    class={classes!("stat-fill", stat.color)}
                    style={format!("width: {}%;", stat.value)}
                />
            </div>
        </div>
    }
}

#[function_component(MetricsPanel)]
pub fn metrics_panel() -> Html {
    html! {
        <div class="tab-panel fade-in">
            <div class="panel-heading">
                <h3>
                    <Icon data={IconData::LUCIDE_BRIEFCASE} class="panel-icon" />
                    { "CEO Performance Data" }
                </h3>
                <span class="panel-tag">{ "LIVE FEED" }</span>
            </div>

            <div class="stat-list">
                { for content::stats().into_iter().map(|stat| {
                    let key = stat.label;
                    html! { <StatBar key={key} {stat} /> }
                }) }
            </div>

            <div class="milestone">
                <div class="milestone-icon">
                    <Icon data={IconData::LUCIDE_STAR} width="24px" height="24px" />
                </div>
                <div>
                    <h4>{ "Career Milestone" }</h4>
                    <p>{ content::MILESTONE }</p>
                </div>
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
    fn test_stat_labels_are_unique_keys() {
        let stats = content::stats();
        let keys: HashSet<_> = stats.iter().map(|stat| stat.label).collect();
        assert_eq!(keys.len(), stats.len());
    }
}
