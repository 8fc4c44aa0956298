//! New-user form page component.
//!
//! Submitting validates the draft, appends to the shared users store
//! and returns to the list; validation failures keep the form open
//! with field-level messages.

use records::{Role, UserDraft, ValidationErrors};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::state::{StoreAction, UsersStore};

/// Build an input callback that writes one draft field.
fn bind(
    draft: &UseStateHandle<UserDraft>,
    apply: fn(&mut UserDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

/// New user page component.
#[function_component(NewUserPage)]
pub fn new_user_page() -> Html {
    let users = use_context::<UsersStore>().expect("users store not provided");
    let draft = use_state(UserDraft::default);
    let errors = use_state(ValidationErrors::new);
    let navigator = use_navigator().expect("navigator not available");

    let on_role_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.role = select.value();
            draft.set(next);
        })
    };

    let on_submit = {
        let users = users.clone();
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // The form collects no id; assign the next free one.
            match draft.build(users.store.next_id()) {
                Ok(user) => {
                    users.dispatch(StoreAction::Insert(user));
                    navigator.push(&Route::Users);
                }
                Err(errs) => errors.set(errs),
            }
        })
    };

    let field_error = |field: &str| -> Html {
        match errors.get(field) {
            Some(msg) => html! { <p class="field-error">{msg}</p> },
            None => html! {},
        }
    };

    html! {
        <div class="card form-card">
            <h1>{"Crear Nuevo Usuario"}</h1>

            <form onsubmit={on_submit}>
                <div class="form-field">
                    <label for="name">{"Nombre"}</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        value={draft.name.clone()}
                        oninput={bind(&draft, |d, v| d.name = v)}
                    />
                    { field_error("name") }
                </div>

                <div class="form-field">
                    <label for="email">{"Email"}</label>
                    <input
                        type="text"
                        id="email"
                        name="email"
                        value={draft.email.clone()}
                        oninput={bind(&draft, |d, v| d.email = v)}
                    />
                    { field_error("email") }
                </div>

                <div class="form-field">
                    <label for="role">{"Rol"}</label>
                    <select id="role" name="role" onchange={on_role_change}>
                        <option value="" selected={draft.role.is_empty()}>
                            {"Seleccionar rol"}
                        </option>
                        { for Role::ALL.iter().map(|role| {
                            html! {
                                <option
                                    value={role.to_string()}
                                    selected={draft.role == role.to_string()}
                                >
                                    { role.label() }
                                </option>
                            }
                        })}
                    </select>
                    { field_error("role") }
                </div>

                <div class="form-field">
                    <label for="permissions">{"Permisos"}</label>
                    <input
                        type="text"
                        id="permissions"
                        name="permissions"
                        value={draft.permissions.clone()}
                        oninput={bind(&draft, |d, v| d.permissions = v)}
                    />
                    { field_error("permissions") }
                </div>

                <div class="form-actions">
                    <Link<Route> to={Route::Users} classes="btn btn-secondary">
                        {"Cancelar"}
                    </Link<Route>>
                    <button type="submit" class="btn btn-primary">
                        {"Guardar"}
                    </button>
                </div>
            </form>
        </div>
    }
}
