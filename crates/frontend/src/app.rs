use crate::domain::a001_catalogue::ui::list::CatalogueList;
use crate::shared::components::message_box::MessageService;
use crate::shared::config::client_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = client_config();
    log::debug!("Client config: {:?}", config);

    // One banner for the whole page, shared by the list and the form
    provide_context(MessageService::new(config.messages.timeout_ms));

    view! {
        <main class="app">
            <CatalogueList />
        </main>
    }
}
