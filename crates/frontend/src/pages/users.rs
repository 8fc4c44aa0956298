//! Users list page component.

use records::User;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{ConfirmDialog, Notice};
use crate::state::{StoreAction, UsersStore};

/// Users page component.
#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let users = use_context::<UsersStore>().expect("users store not provided");
    let search = use_state(String::new);
    let pending_delete = use_state(|| None::<String>);

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_delete_confirm = {
        let users = users.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| {
            if let Some(id) = (*pending_delete).clone() {
                users.dispatch(StoreAction::Remove(id));
            }
            pending_delete.set(None);
        })
    };

    let on_delete_cancel = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let on_dismiss_notice = {
        let users = users.clone();
        Callback::from(move |_: ()| users.dispatch(StoreAction::DismissNotice))
    };

    // Searchable fields for users: name and email.
    let visible: Vec<User> = users
        .store
        .filter(&search)
        .into_iter()
        .cloned()
        .collect();

    html! {
        <div>
            <div class="page-header">
                <h1>{"USUARIOS DEL SISTEMA"}</h1>
                <Link<Route> to={Route::NewUser} classes="btn btn-primary">
                    {"New user"}
                </Link<Route>>
            </div>

            if let Some(notice) = users.notice.clone() {
                <Notice message={notice} on_dismiss={on_dismiss_notice} />
            }

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Buscar usuario..."
                    value={(*search).clone()}
                    oninput={on_search_input}
                />
            </div>

            <div class="card">
                if visible.is_empty() {
                    <p>{"No se encontraron usuarios."}</p>
                } else {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Email"}</th>
                                <th>{"Role"}</th>
                                <th>{"Permissions"}</th>
                                <th class="actions-col">{"Eliminar"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for visible.iter().map(|user| {
                                let on_delete = {
                                    let pending_delete = pending_delete.clone();
                                    let id = user.id.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        pending_delete.set(Some(id.clone()));
                                    })
                                };

                                html! {
                                    <tr key={user.id.clone()}>
                                        <td>{ &user.name }</td>
                                        <td>{ &user.email }</td>
                                        <td>{ user.role.label() }</td>
                                        <td>{ &user.permissions }</td>
                                        <td class="actions-col">
                                            <button class="link-danger" onclick={on_delete}>
                                                {"Eliminar"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }

                <div class="table-footer">
                    { format!("Mostrando {} de {} usuarios", visible.len(), users.store.len()) }
                </div>
            </div>

            if let Some(id) = (*pending_delete).clone() {
                <ConfirmDialog
                    message={format!("¿Eliminar el usuario con id {id}? Esta acción no se puede deshacer.")}
                    on_confirm={on_delete_confirm}
                    on_cancel={on_delete_cancel}
                />
            }
        </div>
    }
}
