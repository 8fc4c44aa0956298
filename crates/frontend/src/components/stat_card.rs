//! Dashboard statistics card component.

use yew::prelude::*;

/// Accent color of a stat card, one per dashboard figure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatAccent {
    /// Users figure.
    #[default]
    Sky,
    /// Sales revenue figure.
    Green,
    /// Purchases figure.
    Purple,
    /// Product count figure.
    Orange,
}

impl StatAccent {
    /// CSS class carrying the accent color.
    pub fn css_class(self) -> &'static str {
        match self {
            StatAccent::Sky => "accent-sky",
            StatAccent::Green => "accent-green",
            StatAccent::Purple => "accent-purple",
            StatAccent::Orange => "accent-orange",
        }
    }
}

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: String,
    pub label: String,
    #[prop_or_default]
    pub accent: StatAccent,
    /// Secondary line under the label, e.g. a live breakdown of the
    /// figure ("2 administradores", "4 de 7 ventas").
    #[prop_or_default]
    pub detail: Option<String>,
}

/// Statistics card for a dashboard figure.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("card", "stat-card", props.accent.css_class())}>
            <div class="stat-value">{ &props.value }</div>
            <div class="stat-label">{ &props.label }</div>
            if let Some(detail) = &props.detail {
                <div class="stat-detail">{ detail }</div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_classes_are_distinct() {
        let accents = [
            StatAccent::Sky,
            StatAccent::Green,
            StatAccent::Purple,
            StatAccent::Orange,
        ];

        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a.css_class(), b.css_class());
            }
        }
    }

    #[test]
    fn test_default_accent_is_sky() {
        assert_eq!(StatAccent::default().css_class(), "accent-sky");
    }
}
