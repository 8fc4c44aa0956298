//! Sale status pill component.

use records::SaleStatus;
use yew::prelude::*;

/// Properties for StatusBadge component.
#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: SaleStatus,
}

/// Colored pill showing a sale's settlement state.
#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let class = format!("status-badge {}", props.status.css_class());

    html! {
        <span class={class}>{ props.status.to_string() }</span>
    }
}
