use crate::api::HttpIssueApi;
use crate::components::{ErrorMessage, IssueFormModal, LoadingSpinner, PriorityBadge, StatusBadge};
use crate::config::ClientConfig;
use crate::Route;
use dioxus::prelude::*;
use issue_tracker_core::workflow;
use issue_tracker_core::{
    Debouncer, FormModal, Issue, IssueDraft, IssueFilter, IssueListState, IssuePriority,
    IssueStatus, RequestId,
};

const HEADER_CELL_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase";
const FILTER_INPUT_CLASS: &str = "px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent";

/// Issue list with live filtering and the create/edit modal.
#[component]
pub fn IssueList() -> Element {
    let api = use_context::<Signal<HttpIssueApi>>();
    let config = use_context::<ClientConfig>();
    let mut state = use_signal(IssueListState::new);
    let debouncer = use_signal(|| {
        Debouncer::with_initial(config.debounce_window(), IssueFilter::default())
    });
    let mut saving = use_signal(|| false);

    // Initial unfiltered load
    use_effect(move || {
        spawn(async move {
            let api = api.peek().clone();
            refresh(&api, state).await;
        });
    });

    let mut edit_filter = move |update: &dyn Fn(&mut IssueFilter)| {
        update(&mut state.write().filter);
        schedule_refresh(api, state, debouncer);
    };

    let handle_submit = move |draft: IssueDraft| {
        if saving() {
            return;
        }
        saving.set(true);
        let editing = state.peek().editing().cloned();
        spawn(async move {
            let api = api.peek().clone();
            let saved = workflow::save_issue(&api, editing.as_ref(), &draft).await;
            saving.set(false);
            match saved {
                Ok(_) => {
                    let request = state.write().save_succeeded();
                    reload(&api, state, request).await;
                }
                Err(e) => {
                    tracing::error!("Failed to save the issue: {e}");
                    state.write().save_failed(&e);
                }
            }
        });
    };

    let current = state.read();
    let filter = current.filter.clone();
    let status_value = filter.status.map(|s| s.as_str()).unwrap_or_default();
    let priority_value = filter.priority.map(|p| p.as_str()).unwrap_or_default();
    let issues = current.issues.clone();
    let loading = current.is_loading() && issues.is_empty();
    let load_error = current.load_error.clone();
    let save_error = current.save_error.clone();
    let form = current.form.clone();
    let form_visible = current.is_form_visible();
    drop(current);

    rsx! {
        div { class: "max-w-6xl mx-auto px-6 space-y-6",
            div { class: "flex justify-between items-center",
                h1 { class: "text-3xl font-bold text-gray-900", "Issues" }
                button {
                    class: "bg-purple-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-purple-700 transition-colors",
                    onclick: move |_| state.write().open_create(),
                    "New Issue"
                }
            }

            div { class: "bg-white rounded-lg shadow p-4 grid grid-cols-1 md:grid-cols-4 gap-4",
                input {
                    r#type: "search",
                    placeholder: "Search titles",
                    value: "{filter.search}",
                    class: FILTER_INPUT_CLASS,
                    oninput: move |evt: FormEvent| {
                        let value = evt.value();
                        edit_filter(&|f| f.search = value.clone());
                    },
                }
                select {
                    class: FILTER_INPUT_CLASS,
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        edit_filter(&|f| f.set_status_str(&value));
                    },
                    option { value: "", selected: status_value.is_empty(), "All statuses" }
                    for status in IssueStatus::ALL {
                        option {
                            value: status.as_str(),
                            selected: status.as_str() == status_value,
                            "{status.label()}"
                        }
                    }
                }
                select {
                    class: FILTER_INPUT_CLASS,
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        edit_filter(&|f| f.set_priority_str(&value));
                    },
                    option { value: "", selected: priority_value.is_empty(), "All priorities" }
                    for priority in IssuePriority::ALL {
                        option {
                            value: priority.as_str(),
                            selected: priority.as_str() == priority_value,
                            "{priority}"
                        }
                    }
                }
                input {
                    r#type: "text",
                    placeholder: "Assignee",
                    value: "{filter.assignee}",
                    class: FILTER_INPUT_CLASS,
                    oninput: move |evt: FormEvent| {
                        let value = evt.value();
                        edit_filter(&|f| f.assignee = value.clone());
                    },
                }
            }

            if let Some(message) = load_error {
                ErrorMessage { message }
            }

            if loading {
                LoadingSpinner { message: "Loading issues...".to_string() }
            } else if issues.is_empty() {
                EmptyIssues { filtered: !filter.is_empty() }
            } else {
                IssueTable { issues, on_edit: move |issue: Issue| state.write().open_edit(issue) }
            }

            if form_visible {
                IssueFormModal {
                    key: "{form_key(&form)}",
                    issue: match &form {
                        FormModal::Edit(issue) => Some(issue.clone()),
                        _ => None,
                    },
                    save_error,
                    saving: saving(),
                    on_submit: handle_submit,
                    on_close: move |_| state.write().close_form(),
                }
            }
        }
    }
}

fn form_key(form: &FormModal) -> String {
    match form {
        FormModal::Edit(issue) => format!("edit-{}", issue.id),
        _ => "create".to_string(),
    }
}

/// Fetches the list for the current filter and applies the response unless a newer fetch has
/// started meanwhile.
async fn refresh(api: &HttpIssueApi, mut state: Signal<IssueListState>) {
    let request = state.write().begin_fetch();
    reload(api, state, request).await;
}

/// Runs the fetch identified by `request` with whatever filter is current.
async fn reload(api: &HttpIssueApi, mut state: Signal<IssueListState>, request: RequestId) {
    let filter = state.peek().filter.clone();
    let result = workflow::fetch_issues(api, &filter).await;
    state.write().finish_fetch(request, result);
}

/// Refetches once the filter has been quiet for the debounce window and actually changed.
fn schedule_refresh(
    api: Signal<HttpIssueApi>,
    state: Signal<IssueListState>,
    mut debouncer: Signal<Debouncer<IssueFilter>>,
) {
    let ticket = debouncer.write().touch();
    let window = debouncer.peek().window();
    spawn(async move {
        gloo_timers::future::sleep(window).await;
        let filter = state.peek().filter.clone();
        if debouncer.write().settle(ticket, filter).is_some() {
            let api = api.peek().clone();
            refresh(&api, state).await;
        }
    });
}

#[component]
fn EmptyIssues(filtered: bool) -> Element {
    let message = if filtered {
        "No issues match the current filters."
    } else {
        "No issues yet. Create the first one!"
    };
    rsx! {
        div { class: "text-center py-12 text-gray-600", "{message}" }
    }
}

#[component]
fn IssueTable(issues: Vec<Issue>, on_edit: EventHandler<Issue>) -> Element {
    let nav = use_navigator();
    rsx! {
        div { class: "bg-white rounded-lg shadow overflow-hidden",
            table { class: "min-w-full divide-y divide-gray-200",
                thead { class: "bg-gray-50",
                    tr {
                        th { class: HEADER_CELL_CLASS, "Title" }
                        th { class: HEADER_CELL_CLASS, "Status" }
                        th { class: HEADER_CELL_CLASS, "Priority" }
                        th { class: HEADER_CELL_CLASS, "Assignee" }
                        th { class: HEADER_CELL_CLASS, "Updated" }
                        th { class: "px-6 py-3" }
                    }
                }
                tbody { class: "divide-y divide-gray-200",
                    for issue in issues {
                        tr {
                            key: "{issue.id}",
                            class: "issue-row hover:bg-gray-50",
                            onclick: {
                                let id = issue.id.clone();
                                move |_| {
                                    nav.push(Route::IssueDetail { id: id.clone() });
                                }
                            },
                            td { class: "px-6 py-4 font-medium text-gray-900", "{issue.title}" }
                            td { class: "px-6 py-4", StatusBadge { status: issue.status } }
                            td { class: "px-6 py-4", PriorityBadge { priority: issue.priority } }
                            td { class: "px-6 py-4 text-gray-600", "{issue.assignee_display()}" }
                            td { class: "px-6 py-4 text-gray-600 text-sm",
                                "{issue.updated_at_display()}"
                            }
                            td { class: "px-6 py-4 text-right",
                                button {
                                    class: "text-purple-700 hover:underline text-sm",
                                    onclick: {
                                        let issue = issue.clone();
                                        move |evt: MouseEvent| {
                                            // Keep the row from navigating to the detail page
                                            evt.stop_propagation();
                                            on_edit.call(issue.clone());
                                        }
                                    },
                                    "Edit"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
