//! Login page component.
//!
//! Mock authentication: the form never validates credentials, it just
//! logs the attempt and moves on to the dashboard.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Login page component.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let navigator = use_navigator().expect("navigator not available");

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            web_sys::console::log_1(&format!("Login attempt: {}", *username).into());
            navigator.push(&Route::Dashboard);
        })
    };

    html! {
        <div class="login-page">
            <div class="login-brand">
                <h1>{"PET MANAGER"}</h1>
            </div>

            <div class="card login-card">
                <h2>{"LOG IN TO YOUR ACCOUNT"}</h2>

                <form onsubmit={on_submit}>
                    <div class="form-field">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            value={(*username).clone()}
                            oninput={on_username_input}
                            required={true}
                        />
                    </div>

                    <div class="form-field">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                            required={true}
                        />
                    </div>

                    <button type="submit" class="btn btn-primary">
                        {"Log in"}
                    </button>

                    <div class="login-links">
                        <Link<Route> to={Route::Register}>
                            {"Create new account"}
                        </Link<Route>>
                    </div>
                </form>
            </div>
        </div>
    }
}
