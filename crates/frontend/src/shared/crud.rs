//! Wiring shared by the entity screens: table, create/edit/view dialogs and
//! the confirm-then-delete flow, generic over the resource.

use std::marker::PhantomData;

use contracts::domain::common::{AggregateId, ConsoleEntity, ResourceMeta};
use contracts::shared::form::{FormError, FormFields};
use contracts::shared::notification::Notification;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::{DeserializeOwned, IgnoredAny};
use thaw::*;

use crate::shared::api_utils::{use_api, ApiClient};
use crate::shared::components::data_table::{Column, DataTable, DataTableHandle, DeleteHandler};
use crate::shared::components::generic_dialog::{DialogBody, DialogHandle, DialogOptions, GenericDialog};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notification::{use_notifier, Notifier};

/// Asks the browser for a yes/no answer; no window means no
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn delete_confirmation(id: &str) -> String {
    format!("Are you sure? This will permanently delete {}.", id)
}

/// DELETE path for `id`, or `None` when the user declines
pub fn confirmed_delete_path<R: ResourceMeta>(
    id: &str,
    confirm: impl FnOnce(&str) -> bool,
) -> Option<String> {
    confirm(&delete_confirmation(id)).then(|| R::delete_path(id))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit,
    View,
}

impl DialogMode {
    /// Identifier fields are fixed once the entity exists
    pub fn identity_locked(&self) -> bool {
        !matches!(self, DialogMode::Create)
    }

    pub fn read_only(&self) -> bool {
        matches!(self, DialogMode::View)
    }
}

/// Form layout and request mapping of an entity type.
pub trait EntityForm:
    ResourceMeta<Entity = Self> + ConsoleEntity + Clone + DeserializeOwned + Send + Sync + 'static
{
    /// Form controls; `id` and `name` are read-only unless creating
    fn fields(entity: Option<&Self>, mode: DialogMode) -> AnyView;

    fn create_request(fields: &FormFields) -> Result<Self::CreateRequest, FormError>;

    fn update_request(fields: &FormFields) -> Result<Self::UpdateRequest, FormError>;
}

/// Services a screen hands to its table, dialogs and delete action.
#[derive(Clone, Copy)]
pub struct CrudContext {
    pub api: ApiClient,
    pub notifier: Notifier,
    pub table: DataTableHandle,
    /// Yes/no prompt before a destructive call
    pub confirm: fn(&str) -> bool,
}

impl CrudContext {
    pub fn new() -> Self {
        Self {
            api: use_api(),
            notifier: use_notifier(),
            table: DataTableHandle::new(),
            confirm,
        }
    }

    fn reject(&self, error: FormError) {
        log::warn!("Form rejected: {}", error);
        self.notifier
            .notify(Notification::error("Invalid form", error.to_string()));
    }
}

/// Success toast first, then a single table refresh
pub fn finish_save(notify: impl FnOnce(Notification), table: DataTableHandle, done: Notification) {
    notify(done);
    table.refresh();
}

pub async fn create_entity<R: EntityForm>(ctx: CrudContext, request: R::CreateRequest) {
    match ctx
        .api
        .post::<_, IgnoredAny>(&R::create_path(), &request)
        .await
    {
        Ok(_) => finish_save(|n| ctx.notifier.notify(n), ctx.table, Notification::created()),
        Err(e) => log::error!("{} create failed: {}", R::element_name(), e),
    }
}

pub async fn update_entity<R: EntityForm>(ctx: CrudContext, request: R::UpdateRequest) {
    match ctx
        .api
        .patch::<_, IgnoredAny>(&R::update_path(), &request)
        .await
    {
        Ok(_) => finish_save(|n| ctx.notifier.notify(n), ctx.table, Notification::edited()),
        Err(e) => log::error!("{} update failed: {}", R::element_name(), e),
    }
}

/// Confirms, deletes and notifies; the table re-fetches afterwards
pub fn delete_handler<R: EntityForm>(ctx: CrudContext) -> DeleteHandler<R> {
    DeleteHandler::new(move |row: R| {
        Box::pin(async move {
            let id = row.id().as_string();
            let Some(path) = confirmed_delete_path::<R>(&id, ctx.confirm) else {
                return;
            };
            match ctx.api.delete(&path).await {
                Ok(()) => ctx.notifier.notify(Notification::deleted()),
                Err(e) => log::error!("{} delete failed: {}", R::element_name(), e),
            }
        })
    })
}

/// Dialog body driving create, edit or view of one entity type.
pub struct CrudDialog<R> {
    mode: DialogMode,
    ctx: CrudContext,
    _resource: PhantomData<fn() -> R>,
}

impl<R> CrudDialog<R> {
    pub fn new(mode: DialogMode, ctx: CrudContext) -> Self {
        Self {
            mode,
            ctx,
            _resource: PhantomData,
        }
    }
}

impl<R: EntityForm> DialogBody for CrudDialog<R> {
    type Entity = R;

    fn render(&self, entity: Option<R>) -> AnyView {
        R::fields(entity.as_ref(), self.mode)
    }

    fn submit(&self, fields: FormFields) {
        let ctx = self.ctx;
        match self.mode {
            DialogMode::Create => match R::create_request(&fields) {
                Ok(request) => spawn_local(create_entity::<R>(ctx, request)),
                Err(e) => ctx.reject(e),
            },
            DialogMode::Edit => match R::update_request(&fields) {
                Ok(request) => spawn_local(update_entity::<R>(ctx, request)),
                Err(e) => ctx.reject(e),
            },
            DialogMode::View => {}
        }
    }
}

/// Table plus create and edit dialogs for one entity type.
///
/// `viewable` adds a read-only view dialog reachable from each row.
#[component]
pub fn EntityScreen<R>(
    columns: Vec<Column<R>>,
    #[prop(optional)]
    viewable: bool,
) -> impl IntoView
where
    R: EntityForm,
{
    let ctx = CrudContext::new();
    let element = R::element_name();

    let create_dialog = DialogHandle::<R>::new();
    let edit_dialog = DialogHandle::<R>::new();
    let view_dialog = DialogHandle::<R>::new();

    let open_create = move |_: leptos::ev::MouseEvent| {
        create_dialog.show(
            DialogOptions::new(format!("Add {}", element))
                .content(format!("Fill in the fields to create a new {}.", element.to_lowercase()))
                .submit_text("Create"),
            None,
        )
    };

    let on_edit = Callback::new(move |row: R| {
        edit_dialog.show(
            DialogOptions::new(format!("Edit {}", element))
                .content(format!("Update the {} details.", element.to_lowercase()))
                .submit_text("Save"),
            Some(row),
        )
    });

    let on_view = viewable.then(|| {
        Callback::new(move |row: R| {
            view_dialog.show(
                DialogOptions::new(format!("View {}", element))
                    .content(row.name().to_string())
                    .submit_text("Close")
                    .cancel_text("Back"),
                Some(row),
            )
        })
    });

    view! {
        <PageHeader title=R::list_name()>
            <Button appearance=ButtonAppearance::Primary on_click=open_create>
                {icon("plus")}
                " Add New"
            </Button>
        </PageHeader>

        <div class="page__content">
            {match on_view {
                Some(on_view) => view! {
                    <DataTable
                        fetch_url=R::read_path()
                        search_key=R::search_key()
                        columns=columns
                        handle=ctx.table
                        on_edit=on_edit
                        on_view=on_view
                        on_delete={delete_handler::<R>(ctx)}
                    />
                }.into_any(),
                None => view! {
                    <DataTable
                        fetch_url=R::read_path()
                        search_key=R::search_key()
                        columns=columns
                        handle=ctx.table
                        on_edit=on_edit
                        on_delete={delete_handler::<R>(ctx)}
                    />
                }.into_any(),
            }}
        </div>

        <GenericDialog handle=create_dialog body={CrudDialog::<R>::new(DialogMode::Create, ctx)} />
        <GenericDialog handle=edit_dialog body={CrudDialog::<R>::new(DialogMode::Edit, ctx)} />
        {viewable.then(|| view! {
            <GenericDialog handle=view_dialog body={CrudDialog::<R>::new(DialogMode::View, ctx)} />
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_rule_library::RuleLibrary;
    use std::cell::{Cell, RefCell};

    const ID: &str = "6f1c3d1e-0a1b-4c2d-9e3f-112233445566";

    #[test]
    fn test_delete_confirmation_text() {
        assert_eq!(
            delete_confirmation("6f1c3d1e-0a1b-4c2d-9e3f-112233445566"),
            "Are you sure? This will permanently delete 6f1c3d1e-0a1b-4c2d-9e3f-112233445566."
        );
    }

    #[test]
    fn test_declined_delete_issues_no_call() {
        let prompts = Cell::new(0);
        let path = confirmed_delete_path::<RuleLibrary>(ID, |message| {
            prompts.set(prompts.get() + 1);
            assert_eq!(message, delete_confirmation(ID));
            false
        });
        assert_eq!(path, None);
        assert_eq!(prompts.get(), 1);
    }

    #[test]
    fn test_confirmed_delete_targets_row() {
        let path = confirmed_delete_path::<RuleLibrary>(ID, |_| true);
        assert_eq!(path, Some(format!("/rule-library/delete/{}", ID)));
    }

    #[test]
    fn test_save_notifies_then_refreshes_once() {
        let owner = Owner::new();
        owner.with(|| {
            let table = DataTableHandle::new();
            let seen = RefCell::new(Vec::new());
            finish_save(
                |n| {
                    assert_eq!(table.refresh_count(), 0);
                    seen.borrow_mut().push(n);
                },
                table,
                Notification::created(),
            );
            assert_eq!(table.refresh_count(), 1);
            assert_eq!(*seen.borrow(), vec![Notification::created()]);
        });
    }

    #[test]
    fn test_dialog_modes() {
        assert!(!DialogMode::Create.identity_locked());
        assert!(DialogMode::Edit.identity_locked());
        assert!(!DialogMode::Edit.read_only());
        assert!(DialogMode::View.read_only());
    }
}
