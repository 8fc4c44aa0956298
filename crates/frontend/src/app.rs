//! Main application component with routing.

use records::{sample_sales, sample_users};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Header, Sidebar};
use crate::pages::{
    DashboardPage, LoginPage, NewUserPage, RegisterPage, SalesPage, UsersPage,
};
use crate::state::{SalesStore, StoreState, UsersStore};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/users")]
    Users,
    #[at("/users/new")]
    NewUser,
    #[at("/sales")]
    Sales,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Users => html! { <UsersPage /> },
        Route::NewUser => html! { <NewUserPage /> },
        Route::Sales => html! { <SalesPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Página no encontrada"}</h1>
                <p>{"La página que busca no existe."}</p>
            </div>
        },
    }
}

/// Main application component.
///
/// Provides one session-scoped store per entity kind; the stores live
/// for the lifetime of the page view and are discarded on reload.
#[function_component(App)]
pub fn app() -> Html {
    let users = use_reducer(|| StoreState::seeded(sample_users()));
    let sales = use_reducer(|| StoreState::seeded(sample_sales()));

    html! {
        <BrowserRouter>
            <ContextProvider<UsersStore> context={users}>
            <ContextProvider<SalesStore> context={sales}>
                <div class="app-container">
                    <Sidebar />
                    <div class="content-area">
                        <Header />
                        <main class="main-content">
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                </div>
            </ContextProvider<SalesStore>>
            </ContextProvider<UsersStore>>
        </BrowserRouter>
    }
}
