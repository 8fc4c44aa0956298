//! Dismissible notice banner.

use yew::prelude::*;

/// Properties for Notice component.
#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

/// Banner for local-only errors, like deleting a missing record.
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    let on_dismiss = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="notice">
            <span>{ &props.message }</span>
            <button type="button" class="notice-dismiss" onclick={on_dismiss}>
                {"×"}
            </button>
        </div>
    }
}
