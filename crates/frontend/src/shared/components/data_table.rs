//! Server-paginated entity table.
//!
//! The table owns its paging and search state, fetches
//! `{fetch_url}?page=..&size=..&sort=createdDate,desc[&search=..]` through the
//! API client and renders the rows with the supplied column descriptors. Row
//! action buttons appear only for the handlers the screen supplies. Failures
//! are reported by the API client; the table keeps its previous rows.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use contracts::domain::common::{AggregateId, ConsoleEntity};
use contracts::shared::notification::Notification;
use contracts::shared::paging::{ListQuery, PageEnvelope};
use contracts::shared::request_tracking::{Generation, GenerationGate};
use contracts::shared::search::SearchTerm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::shared::api_utils::use_api;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifier;

/// One rendered column: header text and a cell formatter
pub struct Column<T> {
    pub title: &'static str,
    pub cell: fn(&T) -> String,
}

impl<T> Column<T> {
    pub const fn new(title: &'static str, cell: fn(&T) -> String) -> Self {
        Self { title, cell }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

pub type RowFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Async delete action; the table re-fetches once the future completes.
pub struct DeleteHandler<T>(Arc<dyn Fn(T) -> RowFuture + Send + Sync>);

impl<T> DeleteHandler<T> {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> RowFuture + Send + Sync + 'static,
    {
        Self(Arc::new(handler))
    }

    pub fn call(&self, row: T) -> RowFuture {
        (self.0)(row)
    }
}

impl<T> Clone for DeleteHandler<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

/// Lets the owning screen ask the table to re-issue its current fetch.
#[derive(Clone, Copy)]
pub struct DataTableHandle {
    refresh_requests: RwSignal<u64>,
}

impl DataTableHandle {
    pub fn new() -> Self {
        Self {
            refresh_requests: RwSignal::new(0),
        }
    }

    pub fn refresh(&self) {
        self.refresh_requests.update(|n| *n += 1);
    }

    /// Refreshes requested so far
    pub fn refresh_count(&self) -> u64 {
        self.refresh_requests.get_untracked()
    }
}

impl Default for DataTableHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// `false` for superseded tickets and once the table has been unmounted
fn is_latest(gate: StoredValue<GenerationGate>, ticket: Generation) -> bool {
    gate.try_with_value(|g| g.is_current(ticket)).unwrap_or(false)
}

#[component]
pub fn DataTable<T>(
    /// Read endpoint, e.g. `/rule-library/read`
    #[prop(into)]
    fetch_url: String,
    /// Primary search field, combined with `description`
    #[prop(optional, into)]
    search_key: Option<String>,
    columns: Vec<Column<T>>,
    handle: DataTableHandle,
    #[prop(optional)]
    on_edit: Option<Callback<T>>,
    #[prop(optional)]
    on_view: Option<Callback<T>>,
    #[prop(optional)]
    on_draw: Option<Callback<T>>,
    #[prop(optional)]
    on_delete: Option<DeleteHandler<T>>,
) -> impl IntoView
where
    T: ConsoleEntity + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let api = use_api();
    let notifier = use_notifier();

    let fetch_url = StoredValue::new(fetch_url);
    let search_key = StoredValue::new(search_key.unwrap_or_else(|| "name".to_string()));
    let columns = StoredValue::new(columns);
    let on_delete = StoredValue::new(on_delete);

    let query = RwSignal::new(ListQuery::default());
    let page = RwSignal::new(PageEnvelope::<T>::default());
    let loading = RwSignal::new(false);
    let gate = StoredValue::new(GenerationGate::default());
    let search_input = RwSignal::new(String::new());
    let search_error = RwSignal::new(None::<String>);

    let fetch = move || {
        let Some(ticket) = gate.try_update_value(|g| g.issue()) else {
            return;
        };
        let url = query.with_untracked(|q| {
            search_key.with_value(|key| fetch_url.with_value(|base| q.to_url(base, key)))
        });
        loading.set(true);
        spawn_local(async move {
            let result = api.get::<PageEnvelope<T>>(&url).await;
            if !is_latest(gate, ticket) {
                log::debug!("Dropping stale response for {}", url);
                return;
            }
            match result {
                Ok(envelope) => page.set(envelope),
                Err(e) => log::warn!("Keeping previous rows, fetch failed: {}", e),
            }
            loading.set(false);
        });
    };

    // Initial fetch on mount, then once per refresh request.
    Effect::new(move |_| {
        handle.refresh_requests.track();
        fetch();
    });

    let go_to_page = move |n: usize| {
        query.update(|q| q.go_to_page(n));
        fetch();
    };

    let change_page_size = move |size: usize| {
        query.update(|q| q.change_page_size(size));
        fetch();
    };

    let on_search_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match SearchTerm::parse(&value) {
            Ok(_) => {
                search_error.set(None);
                search_input.set(value);
            }
            Err(e) => {
                search_error.set(Some(e.to_string()));
                if let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                {
                    input.set_value(&search_input.get_untracked());
                }
            }
        }
    };

    let submit_search = move || {
        if search_error.get_untracked().is_some() {
            return;
        }
        match SearchTerm::parse(&search_input.get_untracked()) {
            Ok(term) => {
                query.update(|q| q.apply_search(term));
                fetch();
            }
            Err(e) => search_error.set(Some(e.to_string())),
        }
    };

    let has_actions = on_edit.is_some()
        || on_view.is_some()
        || on_draw.is_some()
        || on_delete.with_value(|h| h.is_some());

    let render_row = move |row: T| {
        let id = row.id().as_string();
        let short_id = row.id().short();
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let text = (col.cell)(&row);
                    view! {
                        <TableCell>
                            <TableCellLayout truncate=true>{text}</TableCellLayout>
                        </TableCell>
                    }
                })
                .collect_view()
        });

        let copy_id = id.clone();
        let edit_row = row.clone();
        let view_row = row.clone();
        let draw_row = row.clone();
        let delete_row = row;

        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout>
                        <span class="data-table__id" title=id.clone()>{short_id}</span>
                        <button
                            class="data-table__icon-btn"
                            title="Copy id"
                            on:click=move |_| {
                                copy_to_clipboard_with_callback(&copy_id, move || {
                                    notifier.notify(Notification::copied())
                                })
                            }
                        >
                            {icon("copy")}
                        </button>
                    </TableCellLayout>
                </TableCell>
                {cells}
                {has_actions.then(|| view! {
                    <TableCell>
                        <div class="data-table__actions">
                            {on_view.map(|cb| {
                                let row = view_row.clone();
                                view! {
                                    <button class="data-table__icon-btn" title="View" on:click=move |_| cb.run(row.clone())>
                                        {icon("eye")}
                                    </button>
                                }
                            })}
                            {on_draw.map(|cb| {
                                let row = draw_row.clone();
                                view! {
                                    <button class="data-table__icon-btn" title="Draw" on:click=move |_| cb.run(row.clone())>
                                        {icon("draw")}
                                    </button>
                                }
                            })}
                            {on_edit.map(|cb| {
                                let row = edit_row.clone();
                                view! {
                                    <button class="data-table__icon-btn" title="Edit" on:click=move |_| cb.run(row.clone())>
                                        {icon("edit")}
                                    </button>
                                }
                            })}
                            {on_delete.get_value().map(|handler| {
                                let row = delete_row.clone();
                                view! {
                                    <button
                                        class="data-table__icon-btn data-table__icon-btn--danger"
                                        title="Delete"
                                        on:click=move |_| {
                                            let future = handler.call(row.clone());
                                            spawn_local(async move {
                                                future.await;
                                                fetch();
                                            });
                                        }
                                    >
                                        {icon("trash")}
                                    </button>
                                }
                            })}
                        </div>
                    </TableCell>
                })}
            </TableRow>
        }
    };

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <div class="data-table__search">
                    <input
                        class="data-table__search-input"
                        type="text"
                        placeholder="Search"
                        prop:value=move || search_input.get()
                        on:input=on_search_input
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit_search();
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| submit_search()
                    >
                        {icon("search")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| handle.refresh()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                    </Button>
                </div>
                {move || search_error.get().map(|msg| view! {
                    <div class="data-table__search-error">{msg}</div>
                })}
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Id"</TableHeaderCell>
                            {columns.with_value(|cols| {
                                cols.iter()
                                    .map(|col| {
                                        let title = col.title;
                                        view! { <TableHeaderCell>{title}</TableHeaderCell> }
                                    })
                                    .collect_view()
                            })}
                            {has_actions.then(|| view! { <TableHeaderCell>"Actions"</TableHeaderCell> })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || page.get().content
                            key=|row| row.id()
                            children=render_row
                        />
                    </TableBody>
                </Table>
                <Show when=move || loading.get()>
                    <div class="data-table__loading">
                        <Spinner />
                    </div>
                </Show>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || query.with(|q| q.page))
                total_pages=Signal::derive(move || {
                    let size = query.with(|q| q.size);
                    page.with(|p| p.total_pages(size))
                })
                total_count=Signal::derive(move || page.with(|p| p.total_elements))
                page_size=Signal::derive(move || query.with(|q| q.size))
                on_page_change=Callback::new(go_to_page)
                on_page_size_change=Callback::new(change_page_size)
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superseded_ticket_is_not_latest() {
        let owner = Owner::new();
        owner.with(|| {
            let gate = StoredValue::new(GenerationGate::default());
            let first = gate.try_update_value(|g| g.issue()).unwrap();
            assert!(is_latest(gate, first));
            let second = gate.try_update_value(|g| g.issue()).unwrap();
            assert!(!is_latest(gate, first));
            assert!(is_latest(gate, second));
        });
    }

    #[test]
    fn test_response_after_unmount_is_dropped() {
        let owner = Owner::new();
        let (gate, ticket) = owner.with(|| {
            let gate = StoredValue::new(GenerationGate::default());
            let ticket = gate.try_update_value(|g| g.issue()).unwrap();
            (gate, ticket)
        });
        assert!(is_latest(gate, ticket));

        drop(owner);
        assert!(!is_latest(gate, ticket));
    }

    #[test]
    fn test_refresh_bumps_request_counter() {
        let owner = Owner::new();
        owner.with(|| {
            let handle = DataTableHandle::new();
            handle.refresh();
            assert_eq!(handle.refresh_count(), 1);
        });
    }
}
