//! Sidebar navigation component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Sidebar navigation component.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <aside class="sidebar">
            <Link<Route> to={Route::Dashboard} classes="nav-brand">
                {"Pet Manager"}
            </Link<Route>>
            <nav>
                <ul class="nav-links">
                    <li>
                        <Link<Route> to={Route::Dashboard}>
                            {"Dashboard"}
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Users}>
                            {"Usuarios"}
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Sales}>
                            {"Ventas"}
                        </Link<Route>>
                    </li>
                </ul>
            </nav>
            <div class="sidebar-footer">
                <Link<Route> to={Route::Login} classes="nav-logout">
                    {"Cerrar Sesión"}
                </Link<Route>>
            </div>
        </aside>
    }
}
