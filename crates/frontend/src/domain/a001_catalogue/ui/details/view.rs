use super::view_model::CatalogueDetailsViewModel;
use crate::shared::config::client_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use contracts::domain::a001_catalogue::aggregate::{Catalogue, CatalogueId, CatalogueStatus};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

#[component]
pub fn CatalogueDetails(
    id: Option<CatalogueId>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CatalogueDetailsViewModel::new(client_config().messages.timeout_ms);
    vm.load_if_needed(id);

    view! {
        <PageFrame page_id=page_id(&Catalogue::full_name(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <form
                class="details-container catalogue-details"
                id="catalogue-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            >
                <div class="details-header">
                    <h3>
                        {move || if vm.is_edit_mode() {
                            format!("Edit {}", Catalogue::element_name().to_lowercase())
                        } else {
                            format!("New {}", Catalogue::element_name().to_lowercase())
                        }}
                    </h3>
                </div>

                {move || vm.error.current().map(|m| view! { <div class=m.kind.css_class() id="form-msg">{m.text}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            required=true
                            prop:value=move || vm.form.get().name
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                            placeholder="Letters and spaces only"
                        />
                    </div>

                    <div class="form-group">
                        <label for="description">{"Description"}</label>
                        <textarea
                            id="description"
                            required=true
                            rows="3"
                            prop:value=move || vm.form.get().description
                            on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="start_date">{"Start date"}</label>
                        <input
                            type="date"
                            id="start_date"
                            required=true
                            prop:value=move || vm.form.get().start_date
                            on:input=move |ev| vm.form.update(|f| f.start_date = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="end_date">{"End date"}</label>
                        <input
                            type="date"
                            id="end_date"
                            required=true
                            prop:value=move || vm.form.get().end_date
                            on:input=move |ev| vm.form.update(|f| f.end_date = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="status">{"Status"}</label>
                        <select
                            id="status"
                            prop:value=move || vm.form.get().status
                            on:change=move |ev| vm.form.update(|f| f.status = event_target_value(&ev))
                        >
                            {CatalogueStatus::ALL.into_iter().map(|status| view! {
                                <option value=status.as_str()>{status.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || !vm.is_form_valid() || vm.is_saving.get()
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { "Save" } else { "Create" }}
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        id="btn-cancel"
                        on:click=move |_| on_cancel.run(())
                    >
                        {icon("cancel")}
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </PageFrame>
    }
}
