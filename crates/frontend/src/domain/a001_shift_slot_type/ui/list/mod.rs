pub mod state;

use self::state::{list_filter_schema, list_query, IS_ACTIVE, PAGE, SEARCH, STATUS_OPTIONS};
use crate::domain::a001_shift_slot_type::api;
use crate::domain::a001_shift_slot_type::ui::details::ShiftSlotTypeDetails;
use crate::shared::api_utils::show_result;
use crate::shared::components::{EmptyState, ErrorAlert, PaginationControls};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::url_state::{use_url_filters, FilterValue};
use contracts::domain::a001_shift_slot_type::ShiftSlotType;
use contracts::shared::pagination::PaginatedResponse;
use leptos::prelude::*;
use thaw::*;

/// Which form is open over the list
#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    New,
    Existing(String),
}

#[component]
#[allow(non_snake_case)]
pub fn ShiftSlotTypeList() -> impl IntoView {
    let filters = use_url_filters(list_filter_schema());
    let query = Memo::new(move |_| {
        filters
            .state()
            .with(|state| list_query(state, config().page_size))
    });

    let (page, set_page) = signal(None::<PaginatedResponse<ShiftSlotType>>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (editor, set_editor) = signal(Editor::Closed);

    let fetch = move || {
        let current = query.get_untracked();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_page(&current).await;
            // Filters moved on while this page was loading
            if query.get_untracked() != current {
                return;
            }
            if let Err(e) = &result {
                log::error!("Failed to load shift slot types: {}", e);
            }
            show_result(result, set_page, set_error);
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        let _ = query.get();
        fetch();
    });

    let delete_item = move |slot: ShiftSlotType| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!("Delete shift slot type \"{}\"?", slot.name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(&slot.id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(format!("Failed to delete: {}", e))),
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        set_editor.set(Editor::Closed);
        fetch();
    });
    let on_cancel = Callback::new(move |_| set_editor.set(Editor::Closed));

    let search_value = Signal::derive(move || {
        filters
            .state()
            .with(|s| s.get_string(SEARCH).unwrap_or_default())
    });

    let status_value = move || match filters.state().with(|s| s.get_bool(IS_ACTIVE)) {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    };

    let items = move || page.with(|p| p.as_ref().map(|p| p.data.clone()).unwrap_or_default());
    let current_page = Signal::derive(move || query.with(|q| q.page));
    let total_pages = Signal::derive(move || page.with(|p| p.as_ref().map_or(0, |p| p.meta.page_count())));
    let total_count = Signal::derive(move || page.with(|p| p.as_ref().map_or(0, |p| p.meta.total)));

    view! {
        <div class="content">
            <div class="header">
                <h2>"Shift slot types"</h2>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| set_editor.set(Editor::New)>
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="filter-panel">
                <input
                    type="search"
                    class="filter-panel__input"
                    placeholder="Search by name or code"
                    prop:value=search_value
                    on:change=move |ev| {
                        filters.set_many(vec![
                            (SEARCH.to_string(), Some(FilterValue::Str(event_target_value(&ev)))),
                            (PAGE.to_string(), None),
                        ]);
                    }
                />
                <select
                    class="filter-panel__select"
                    prop:value=status_value
                    on:change=move |ev| {
                        let value = match event_target_value(&ev).as_str() {
                            "true" => Some(FilterValue::Bool(true)),
                            "false" => Some(FilterValue::Bool(false)),
                            _ => None,
                        };
                        filters.set_many(vec![
                            (IS_ACTIVE.to_string(), value),
                            (PAGE.to_string(), None),
                        ]);
                    }
                >
                    {STATUS_OPTIONS
                        .into_iter()
                        .map(|(label, value)| {
                            let value = value.map(|v| v.to_string()).unwrap_or_default();
                            view! { <option value=value>{label}</option> }
                        })
                        .collect_view()}
                </select>
                <button
                    class="filter-panel__clear"
                    on:click=move |_| filters.clear_all()
                    disabled=move || filters.state().with(|s| s.active_count() <= 1 && s.get_number(PAGE) == Some(1.0))
                >
                    {icon("x")}
                    " Clear"
                </button>
            </div>

            {move || error.get().map(|err| view! {
                <ErrorAlert message=err on_retry=Callback::new(move |_| fetch()) />
            })}

            {move || loading.get().then(|| view! { <Spinner /> })}

            <Show
                when=move || !items().is_empty()
                fallback=move || view! {
                    <Show when=move || !loading.get() && error.get().is_none()>
                        <EmptyState message="No shift slot types found" />
                    </Show>
                }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Code"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Time"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For each=items key=|slot| slot.id.clone() let:slot>
                            {
                                let edit_id = slot.id.clone();
                                let to_delete = slot.clone();
                                let swatch = format!(
                                    "background: {};",
                                    slot.color.clone().unwrap_or_else(|| "transparent".to_string())
                                );
                                let time = if slot.is_overnight() {
                                    format!("{} (overnight)", slot.time_range())
                                } else {
                                    slot.time_range()
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="color-swatch" style=swatch></span>
                                                {slot.name.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{slot.code.clone().unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{time}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if slot.is_active {
                                                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge> }.into_any()
                                                } else {
                                                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"Inactive"</Badge> }.into_any()
                                                }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <button
                                                    class="icon-btn"
                                                    title="Edit"
                                                    on:click=move |_| set_editor.set(Editor::Existing(edit_id.clone()))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="icon-btn icon-btn--danger"
                                                    title="Delete"
                                                    on:click=move |_| delete_item(to_delete.clone())
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        </For>
                    </TableBody>
                </Table>
            </Show>

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                on_page_change=Callback::new(move |p: u64| {
                    filters.set(PAGE, Some(FilterValue::Number(p as f64)));
                })
            />

            {move || {
                let id = match editor.get() {
                    Editor::Closed => return None,
                    Editor::New => None,
                    Editor::Existing(id) => Some(id),
                };
                Some(view! {
                    <div class="modal-overlay">
                        <div class="modal-surface">
                            <ShiftSlotTypeDetails id=id on_saved=on_saved on_cancel=on_cancel />
                        </div>
                    </div>
                })
            }}
        </div>
    }
}
