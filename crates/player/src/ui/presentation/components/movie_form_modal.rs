//! Movie Form Modal - create or edit a movie

use dioxus::prelude::*;
use marquee_domain::{DraftField, MovieDraft};

use crate::presentation::state::EditDialog;

/// Props for MovieFormModal
#[derive(Props, Clone, PartialEq)]
pub struct MovieFormModalProps {
    pub title: String,
    pub dialog: EditDialog,
    pub on_edit: EventHandler<(DraftField, String)>,
    pub on_submit: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

/// Modal form bound to an [`EditDialog`]. Renders nothing while closed.
#[component]
pub fn MovieFormModal(props: MovieFormModalProps) -> Element {
    let Some(draft) = props.dialog.draft().cloned() else {
        return rsx! {};
    };
    let submitting = props.dialog.is_submitting();
    let message = props.dialog.message().map(str::to_string);
    let errors = props.dialog.errors().cloned().unwrap_or_default();

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-75 flex items-center justify-center z-[1000]",
            onclick: move |_| props.on_cancel.call(()),
            div {
                class: "bg-dark-surface rounded-lg w-[90%] max-w-[520px] flex flex-col",
                onclick: |e| e.stop_propagation(),

                div {
                    class: "flex justify-between items-center p-6 border-b border-gray-700",
                    h2 { class: "m-0 text-white text-xl", "{props.title}" }
                }

                div {
                    class: "p-6 flex flex-col gap-4",
                    if let Some(message) = message {
                        div { class: "p-3 bg-red-500 bg-opacity-10 rounded text-red-500 text-sm", "{message}" }
                    }
                    for field in DraftField::ALL {
                        DraftInput {
                            key: "{field}",
                            field,
                            draft: draft.clone(),
                            error: errors.first(field).map(str::to_string),
                            disabled: submitting,
                            on_edit: props.on_edit,
                        }
                    }
                }

                div {
                    class: "flex justify-end gap-2 p-6 border-t border-gray-700",
                    button {
                        class: "px-4 py-2 bg-gray-700 text-white rounded",
                        disabled: submitting,
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 bg-blue-500 text-white rounded disabled:opacity-50",
                        disabled: submitting,
                        onclick: move |_| props.on_submit.call(()),
                        if submitting { "Saving..." } else { "Submit" }
                    }
                }
            }
        }
    }
}

#[component]
fn DraftInput(
    field: DraftField,
    draft: MovieDraft,
    error: Option<String>,
    disabled: bool,
    on_edit: EventHandler<(DraftField, String)>,
) -> Element {
    let input_type = match field {
        DraftField::Score => "number",
        _ => "text",
    };

    rsx! {
        label {
            class: "flex flex-col gap-1 text-gray-400 text-sm",
            "{field.label()}"
            input {
                class: "p-2 bg-dark-bg border border-gray-700 rounded text-white",
                r#type: input_type,
                name: field.key(),
                value: draft.get(field).to_string(),
                disabled,
                oninput: move |e| on_edit.call((field, e.value())),
            }
            if let Some(error) = error {
                span { class: "text-red-500 text-xs", "{error}" }
            }
        }
    }
}
