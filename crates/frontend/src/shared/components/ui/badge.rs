use leptos::prelude::*;

/// Status badge, colour comes from the `status-*` class
#[component]
pub fn StatusBadge(
    /// e.g. "status-active" or "status-inactive"
    status_class: &'static str,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!("badge badge--status {}", status_class)>
            {children()}
        </span>
    }
}
