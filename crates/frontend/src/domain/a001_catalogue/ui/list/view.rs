use super::row::CatalogueRow;
use super::state::StatusFilter;
use super::view_model::CatalogueListViewModel;
use crate::domain::a001_catalogue::ui::details::CatalogueDetails;
use crate::shared::components::message_box::{MessageBanner, MessageService};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::client_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::a001_catalogue::aggregate::{Catalogue, CatalogueId};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CatalogueList() -> impl IntoView {
    let messages =
        use_context::<MessageService>().expect("MessageService not found in context");
    let vm = CatalogueListViewModel::new(client_config().list.page_size, messages);

    let confirm_delete = move |id: CatalogueId| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete catalogue {}?", id))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if confirmed {
            vm.delete(id);
        }
    };

    vm.reload();

    view! {
        <PageFrame page_id=page_id(&Catalogue::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Catalogue::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <div class="search-box">
                        <input
                            type="number"
                            min="1"
                            id="search-id"
                            class="search-box__input"
                            placeholder="Catalogue ID"
                            prop:value=move || vm.search_input.get()
                            on:input=move |ev| vm.search_input.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    vm.search_by_id();
                                }
                            }
                        />
                        <button class="button button--secondary" id="btn-search-id" on:click=move |_| vm.search_by_id()>
                            {icon("search")}
                            {"Search"}
                        </button>
                    </div>
                    <button class="button button--primary" id="btn-show-form" on:click=move |_| vm.open_new()>
                        {icon("plus")}
                        {"New catalogue"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| vm.reload()
                        disabled=move || vm.is_loading()
                    >
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <MessageBanner service=messages />

            {move || vm.form.get().map(|target| view! {
                <CatalogueDetails
                    id=target.id()
                    on_saved=Callback::new(move |message: String| vm.on_saved(message))
                    on_cancel=Callback::new(move |_| vm.close_form())
                />
            })}

            <div class="filters">
                {StatusFilter::ALL.into_iter().map(|filter| view! {
                    <button
                        class="button filter"
                        class:active=move || vm.is_filter_selected(filter)
                        on:click=move |_| vm.set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }).collect_view()}
                <Show when=move || vm.is_searching()>
                    <button class="button button--secondary" on:click=move |_| vm.clear_search()>
                        {icon("cancel")}
                        {"Back to list"}
                    </button>
                </Show>
            </div>

            <div class="table">
                <table class="table__data table--striped" id="catalogue-table">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"ID"}</th>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Description"}</th>
                            <th class="table__header-cell">{"Start date"}</th>
                            <th class="table__header-cell">{"End date"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || vm.rows().into_iter().map(|row| {
                            catalogue_row(row, move |id| vm.open_edit(id), confirm_delete)
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || vm.is_empty() && !vm.is_loading()>
                    <div class="table__empty">{"No catalogues to show"}</div>
                </Show>
            </div>

            <Show when=move || vm.show_pagination()>
                <PaginationControls
                    label=Signal::derive(move || vm.page_label())
                    has_previous=Signal::derive(move || vm.has_previous_page())
                    has_next=Signal::derive(move || vm.has_next_page())
                    on_previous=Callback::new(move |_| vm.previous_page())
                    on_next=Callback::new(move |_| vm.next_page())
                />
            </Show>
        </PageFrame>
    }
}

fn catalogue_row(
    row: CatalogueRow,
    on_edit: impl Fn(CatalogueId) + 'static,
    on_delete: impl Fn(CatalogueId) + 'static,
) -> impl IntoView {
    let id = row.id;
    view! {
        <tr class="table__row">
            <td class="table__cell">{row.id_label}</td>
            <td class="table__cell">{row.name}</td>
            <td class="table__cell">{row.description}</td>
            <td class="table__cell">{row.start_date}</td>
            <td class="table__cell">{row.end_date}</td>
            <td class="table__cell">
                <StatusBadge status_class=row.status_class>{row.status}</StatusBadge>
            </td>
            <td class="table__cell table__cell--actions">
                <button class="button button--secondary tooltip" data-tooltip="Edit" on:click=move |_| on_edit(id)>
                    {icon("edit")}
                </button>
                <button class="button button--secondary tooltip" data-tooltip="Delete" on:click=move |_| on_delete(id)>
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
}
