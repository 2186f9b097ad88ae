use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous/next pager with a "Page X of Y" label
#[component]
pub fn PaginationControls(
    /// Text between the buttons
    #[prop(into)]
    label: Signal<String>,

    #[prop(into)]
    has_previous: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    on_previous: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls" id="pagination">
            <button
                class="pagination-btn"
                id="prev-page"
                on:click=move |_| on_previous.run(())
                disabled=move || !has_previous.get()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info" id="page-info">
                {move || label.get()}
            </span>
            <button
                class="pagination-btn"
                id="next-page"
                on:click=move |_| on_next.run(())
                disabled=move || !has_next.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
