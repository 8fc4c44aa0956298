//! Account registration page component.
//!
//! Like login, registration is a mock: the draft is logged and the
//! user is sent back to the login screen. The only local check is
//! that both password fields agree.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Uncommitted state of the registration form.
#[derive(Clone, Default, PartialEq)]
struct RegisterDraft {
    username: String,
    name: String,
    password: String,
    confirm_password: String,
    address: String,
    phone: String,
    email: String,
    id: String,
}

/// Build an input callback that writes one draft field.
fn bind(
    draft: &UseStateHandle<RegisterDraft>,
    apply: fn(&mut RegisterDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

/// Registration page component.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let draft = use_state(RegisterDraft::default);
    let password_error = use_state(|| None::<String>);
    let navigator = use_navigator().expect("navigator not available");

    let on_submit = {
        let draft = draft.clone();
        let password_error = password_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if draft.password != draft.confirm_password {
                password_error.set(Some("Las contraseñas no coinciden".to_string()));
                return;
            }
            password_error.set(None);
            web_sys::console::log_1(&format!("Register attempt: {}", draft.username).into());
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="card form-card">
            <h1>{"CREATE A NEW ACCOUNT"}</h1>

            <form onsubmit={on_submit}>
                <div class="form-grid">
                    <div class="form-field">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            value={draft.username.clone()}
                            oninput={bind(&draft, |d, v| d.username = v)}
                            required={true}
                        />
                    </div>
                    <div class="form-field">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            value={draft.name.clone()}
                            oninput={bind(&draft, |d, v| d.name = v)}
                            required={true}
                        />
                    </div>
                    <div class="form-field">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            value={draft.password.clone()}
                            oninput={bind(&draft, |d, v| d.password = v)}
                            required={true}
                        />
                    </div>
                    <div class="form-field">
                        <label for="confirm-password">{"Confirm Password"}</label>
                        <input
                            type="password"
                            id="confirm-password"
                            name="confirm_password"
                            value={draft.confirm_password.clone()}
                            oninput={bind(&draft, |d, v| d.confirm_password = v)}
                            required={true}
                        />
                        if let Some(msg) = (*password_error).clone() {
                            <p class="field-error">{msg}</p>
                        }
                    </div>
                    <div class="form-field">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            value={draft.email.clone()}
                            oninput={bind(&draft, |d, v| d.email = v)}
                            required={true}
                        />
                    </div>
                    <div class="form-field">
                        <label for="id">{"ID"}</label>
                        <input
                            type="text"
                            id="id"
                            name="id"
                            value={draft.id.clone()}
                            oninput={bind(&draft, |d, v| d.id = v)}
                            required={true}
                        />
                    </div>
                    <div class="form-field">
                        <label for="address">{"Address"}</label>
                        <input
                            type="text"
                            id="address"
                            name="address"
                            value={draft.address.clone()}
                            oninput={bind(&draft, |d, v| d.address = v)}
                            required={true}
                        />
                    </div>
                    <div class="form-field">
                        <label for="phone">{"Phone"}</label>
                        <input
                            type="tel"
                            id="phone"
                            name="phone"
                            value={draft.phone.clone()}
                            oninput={bind(&draft, |d, v| d.phone = v)}
                            required={true}
                        />
                    </div>
                </div>

                <div class="form-actions">
                    <Link<Route> to={Route::Login} classes="btn btn-secondary">
                        {"Cancelar"}
                    </Link<Route>>
                    <button type="submit" class="btn btn-primary">
                        {"Registrarse"}
                    </button>
                </div>
            </form>
        </div>
    }
}
