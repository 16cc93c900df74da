use crate::components::ErrorMessage;
use dioxus::prelude::*;
use issue_tracker_core::form::FieldName;
use issue_tracker_core::{Issue, IssueDraft, IssueForm, IssuePriority, IssueStatus};

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent";

/// Modal form for creating an issue, or editing `issue` when one is given.
///
/// Emits the field values through `on_submit` only when the form is valid; never talks to the
/// API itself.
#[component]
pub fn IssueFormModal(
    #[props(!optional)] issue: Option<Issue>,
    #[props(!optional)] save_error: Option<String>,
    #[props(default)] saving: bool,
    on_submit: EventHandler<IssueDraft>,
    on_close: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| IssueForm::new(issue.as_ref()));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.write().submit();
        match result {
            Ok(draft) => on_submit.call(draft),
            Err(e) => tracing::debug!("Rejected issue form submission: {e}"),
        }
    };

    let (heading, submit_label) = if form.read().is_edit_mode() {
        ("Edit Issue", "Save Changes")
    } else {
        ("New Issue", "Create Issue")
    };
    let title = form.read().title().to_string();
    let status = form.read().status();
    let priority = form.read().priority();
    let assignee = form.read().assignee().to_string();
    let title_error = form.read().visible_error(FieldName::Title);

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            onclick: move |_| on_close.call(()),

            div {
                class: "bg-white rounded-lg shadow-xl p-6 w-full max-w-md mx-4",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "text-2xl font-bold text-gray-900 mb-4", "{heading}" }

                form { onsubmit: handle_submit,
                    div { class: "mb-4",
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Title" }
                        input {
                            r#type: "text",
                            placeholder: "Short summary of the issue",
                            value: "{title}",
                            oninput: move |evt: FormEvent| form.write().set_title(evt.value()),
                            onblur: move |_| form.write().touch(FieldName::Title),
                            class: INPUT_CLASS,
                            autofocus: true,
                        }
                        if let Some(message) = title_error {
                            div { class: "mt-1 text-red-600 text-sm", "{message}" }
                        }
                    }

                    div { class: "mb-4",
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Status" }
                        select {
                            class: INPUT_CLASS,
                            onchange: move |evt: FormEvent| {
                                if let Ok(status) = evt.value().parse::<IssueStatus>() {
                                    form.write().set_status(status);
                                }
                            },
                            onblur: move |_| form.write().touch(FieldName::Status),
                            for option_status in IssueStatus::ALL {
                                option {
                                    value: option_status.as_str(),
                                    selected: option_status == status,
                                    "{option_status.label()}"
                                }
                            }
                        }
                    }

                    div { class: "mb-4",
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Priority" }
                        select {
                            class: INPUT_CLASS,
                            onchange: move |evt: FormEvent| {
                                if let Ok(priority) = evt.value().parse::<IssuePriority>() {
                                    form.write().set_priority(priority);
                                }
                            },
                            onblur: move |_| form.write().touch(FieldName::Priority),
                            for option_priority in IssuePriority::ALL {
                                option {
                                    value: option_priority.as_str(),
                                    selected: option_priority == priority,
                                    "{option_priority}"
                                }
                            }
                        }
                    }

                    div { class: "mb-6",
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Assignee" }
                        input {
                            r#type: "text",
                            placeholder: "Unassigned",
                            value: "{assignee}",
                            oninput: move |evt: FormEvent| form.write().set_assignee(evt.value()),
                            onblur: move |_| form.write().touch(FieldName::Assignee),
                            class: INPUT_CLASS,
                        }
                    }

                    if let Some(message) = save_error {
                        div { class: "mb-4",
                            ErrorMessage { message, compact: true }
                        }
                    }

                    div { class: "flex space-x-3",
                        button {
                            r#type: "submit",
                            disabled: saving,
                            class: "flex-1 px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700 transition-colors font-medium disabled:opacity-50",
                            if saving { "Saving..." } else { "{submit_label}" }
                        }
                        button {
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            class: "flex-1 px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition-colors",
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
