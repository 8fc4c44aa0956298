//! Sales register page component.

use records::{
    clamp_page, page_count, slice, Sale, SaleDraft, SaleStatus, StoreError, ValidationErrors,
    DEFAULT_PAGE_SIZE,
};
use yew::prelude::*;

use crate::components::{ConfirmDialog, Notice, StatusBadge};
use crate::state::{SalesStore, StoreAction};

/// Build an input callback that writes one draft field.
fn bind(
    draft: &UseStateHandle<SaleDraft>,
    apply: fn(&mut SaleDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

/// Sales page component.
#[function_component(SalesPage)]
pub fn sales_page() -> Html {
    let sales = use_context::<SalesStore>().expect("sales store not provided");
    let search = use_state(String::new);
    let page = use_state(|| 0usize);
    let pending_delete = use_state(|| None::<String>);
    let show_form = use_state(|| false);
    let draft = use_state(SaleDraft::default);
    let errors = use_state(ValidationErrors::new);
    let form_error = use_state(|| None::<String>);

    let on_search_input = {
        let search = search.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
            page.set(0);
        })
    };

    // Searchable fields for sales: customer name and id.
    let filtered: Vec<Sale> = sales
        .store
        .filter(&search)
        .into_iter()
        .cloned()
        .collect();

    // The page index is clamped, so the view stays valid when a
    // narrower filter shrinks the result.
    let current = clamp_page(*page, filtered.len(), DEFAULT_PAGE_SIZE);
    let pages = page_count(filtered.len(), DEFAULT_PAGE_SIZE);
    let visible = slice(&filtered, current, DEFAULT_PAGE_SIZE);

    let on_prev = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(current.saturating_sub(1)))
    };
    let on_next = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set((current + 1).min(pages - 1)))
    };

    let on_open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(true))
    };

    let on_cancel_form = {
        let show_form = show_form.clone();
        let draft = draft.clone();
        let errors = errors.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: MouseEvent| {
            // Cancel discards the draft.
            draft.set(SaleDraft::default());
            errors.set(ValidationErrors::new());
            form_error.set(None);
            show_form.set(false);
        })
    };

    let on_submit = {
        let sales = sales.clone();
        let show_form = show_form.clone();
        let draft = draft.clone();
        let errors = errors.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.build() {
                Ok(sale) => {
                    if sales.store.contains(&sale.id) {
                        form_error.set(Some(StoreError::DuplicateId(sale.id).to_string()));
                        return;
                    }
                    sales.dispatch(StoreAction::Insert(sale));
                    draft.set(SaleDraft::default());
                    errors.set(ValidationErrors::new());
                    form_error.set(None);
                    show_form.set(false);
                }
                Err(errs) => errors.set(errs),
            }
        })
    };

    let on_status_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.status = select.value();
            draft.set(next);
        })
    };

    let on_delete_confirm = {
        let sales = sales.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| {
            if let Some(id) = (*pending_delete).clone() {
                sales.dispatch(StoreAction::Remove(id));
            }
            pending_delete.set(None);
        })
    };

    let on_delete_cancel = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let on_dismiss_notice = {
        let sales = sales.clone();
        Callback::from(move |_: ()| sales.dispatch(StoreAction::DismissNotice))
    };

    let field_error = |field: &str| -> Html {
        match errors.get(field) {
            Some(msg) => html! { <p class="field-error">{msg}</p> },
            None => html! {},
        }
    };

    html! {
        <div>
            <div class="page-header">
                <h1>{"LISTA DE VENTAS"}</h1>
                <button class="btn btn-primary" onclick={on_open_form}>
                    {"Nueva venta"}
                </button>
            </div>

            if let Some(notice) = sales.notice.clone() {
                <Notice message={notice} on_dismiss={on_dismiss_notice} />
            }

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Registro de Ventas"}</h2>
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Buscar venta..."
                        value={(*search).clone()}
                        oninput={on_search_input}
                    />
                </div>

                if visible.is_empty() {
                    <p>{"No se encontraron ventas."}</p>
                } else {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"ID"}</th>
                                <th>{"Fecha"}</th>
                                <th>{"Cliente"}</th>
                                <th>{"Total"}</th>
                                <th>{"Estado"}</th>
                                <th class="actions-col">{"Acciones"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for visible.iter().map(|sale| {
                                let on_delete = {
                                    let pending_delete = pending_delete.clone();
                                    let id = sale.id.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        pending_delete.set(Some(id.clone()));
                                    })
                                };

                                html! {
                                    <tr key={sale.id.clone()}>
                                        <td>{ format!("#{}", sale.id) }</td>
                                        <td>{ sale.date.format("%Y-%m-%d").to_string() }</td>
                                        <td>{ &sale.customer }</td>
                                        <td>{ sale.formatted_total() }</td>
                                        <td><StatusBadge status={sale.status} /></td>
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
                    <span>
                        { format!(
                            "Mostrando {} de {} ventas",
                            visible.len(),
                            sales.store.len()
                        )}
                    </span>
                    <div class="pager">
                        <button
                            class="btn btn-secondary"
                            disabled={current == 0}
                            onclick={on_prev}
                        >
                            {"Anterior"}
                        </button>
                        { for (0..pages).map(|i| {
                            let page = page.clone();
                            let onclick = Callback::from(move |_: MouseEvent| page.set(i));
                            let class = if i == current {
                                "btn btn-primary"
                            } else {
                                "btn btn-secondary"
                            };
                            html! {
                                <button {class} {onclick}>{ (i + 1).to_string() }</button>
                            }
                        })}
                        <button
                            class="btn btn-secondary"
                            disabled={current + 1 >= pages}
                            onclick={on_next}
                        >
                            {"Siguiente"}
                        </button>
                    </div>
                </div>
            </div>

            if *show_form {
                <div class="modal-overlay">
                    <div class="modal">
                        <h2 class="modal-title">{"Nueva Venta"}</h2>

                        if let Some(msg) = (*form_error).clone() {
                            <p class="form-error">{msg}</p>
                        }

                        <form onsubmit={on_submit}>
                            <div class="form-grid">
                                <div class="form-field">
                                    <label for="sale-id">{"ID"}</label>
                                    <input
                                        type="text"
                                        id="sale-id"
                                        name="id"
                                        value={draft.id.clone()}
                                        oninput={bind(&draft, |d, v| d.id = v)}
                                    />
                                    { field_error("id") }
                                </div>
                                <div class="form-field">
                                    <label for="sale-date">{"Fecha"}</label>
                                    <input
                                        type="date"
                                        id="sale-date"
                                        name="date"
                                        value={draft.date.clone()}
                                        oninput={bind(&draft, |d, v| d.date = v)}
                                    />
                                    { field_error("date") }
                                </div>
                                <div class="form-field">
                                    <label for="sale-customer">{"Cliente"}</label>
                                    <input
                                        type="text"
                                        id="sale-customer"
                                        name="customer"
                                        value={draft.customer.clone()}
                                        oninput={bind(&draft, |d, v| d.customer = v)}
                                    />
                                    { field_error("customer") }
                                </div>
                                <div class="form-field">
                                    <label for="sale-total">{"Total"}</label>
                                    <input
                                        type="text"
                                        id="sale-total"
                                        name="total"
                                        value={draft.total.clone()}
                                        oninput={bind(&draft, |d, v| d.total = v)}
                                    />
                                    { field_error("total") }
                                </div>
                                <div class="form-field">
                                    <label for="sale-status">{"Estado"}</label>
                                    <select
                                        id="sale-status"
                                        name="status"
                                        onchange={on_status_change}
                                    >
                                        <option value="" selected={draft.status.is_empty()}>
                                            {"Seleccionar estado"}
                                        </option>
                                        { for SaleStatus::ALL.iter().map(|status| {
                                            html! {
                                                <option
                                                    value={status.to_string()}
                                                    selected={draft.status == status.to_string()}
                                                >
                                                    { status.to_string() }
                                                </option>
                                            }
                                        })}
                                    </select>
                                    { field_error("status") }
                                </div>
                            </div>

                            <div class="modal-actions">
                                <button
                                    type="button"
                                    class="btn btn-secondary"
                                    onclick={on_cancel_form}
                                >
                                    {"Cancel"}
                                </button>
                                <button type="submit" class="btn btn-primary">
                                    {"Save"}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }

            if let Some(id) = (*pending_delete).clone() {
                <ConfirmDialog
                    message={format!("¿Eliminar la venta con id {id}? Esta acción no se puede deshacer.")}
                    on_confirm={on_delete_confirm}
                    on_cancel={on_delete_cancel}
                />
            }
        </div>
    }
}
