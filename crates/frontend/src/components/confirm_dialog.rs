//! Delete confirmation dialog.
//!
//! There is no undo, so destructive actions go through this modal
//! before the store mutation is dispatched.

use yew::prelude::*;

/// Properties for ConfirmDialog component.
#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub message: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Modal asking the user to confirm a destructive action.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal modal-small">
                <h2 class="modal-title">{"Confirmar eliminación"}</h2>
                <p>{ &props.message }</p>
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                        {"Cancelar"}
                    </button>
                    <button type="button" class="btn btn-danger" onclick={on_confirm}>
                        {"Eliminar"}
                    </button>
                </div>
            </div>
        </div>
    }
}
