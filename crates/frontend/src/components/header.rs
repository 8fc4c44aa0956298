//! Top bar component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Top bar with the brand link and the profile chip.
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <Link<Route> to={Route::Dashboard} classes="header-brand">
                {"PET MANAGER"}
            </Link<Route>>
            <div class="header-profile">
                <span class="avatar">{"A"}</span>
            </div>
        </header>
    }
}
