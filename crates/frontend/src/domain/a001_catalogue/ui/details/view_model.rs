use crate::domain::a001_catalogue::api;
use crate::shared::components::message_box::MessageService;
use crate::shared::config::MessagesConfig;
use contracts::domain::a001_catalogue::aggregate::{CatalogueDto, CatalogueId};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the catalogue create/edit form
#[derive(Clone, Copy)]
pub struct CatalogueDetailsViewModel {
    pub form: RwSignal<CatalogueDto>,
    pub editing_id: RwSignal<Option<CatalogueId>>,
    /// Form-level error, hides itself like the page banner
    pub error: MessageService,
    pub is_saving: RwSignal<bool>,
}

impl CatalogueDetailsViewModel {
    pub fn new(message_timeout_ms: u32) -> Self {
        Self {
            form: RwSignal::new(CatalogueDto::default()),
            editing_id: RwSignal::new(None),
            error: MessageService::new(message_timeout_ms),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.get().is_some()
    }

    /// Required fields are filled; the full check runs on save
    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| {
            !f.name.trim().is_empty()
                && !f.description.trim().is_empty()
                && !f.start_date.trim().is_empty()
                && !f.end_date.trim().is_empty()
                && !f.status.trim().is_empty()
        })
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<CatalogueId>) {
        self.editing_id.set(id);
        let Some(existing_id) = id else {
            return;
        };

        let form = self.form;
        let error = self.error;
        spawn_local(async move {
            match api::fetch_by_id(existing_id).await {
                Ok(catalogue) => form.set(CatalogueDto::from(&catalogue)),
                Err(e) => {
                    log::error!("Failed to load catalogue {}: {}", existing_id, e);
                    error.error("Error loading catalogue data");
                }
            }
        });
    }

    /// Validate and send the form: PUT for an existing catalogue, POST otherwise
    pub fn save_command(&self, on_saved: Callback<String>) {
        let current = self.form.get_untracked().trimmed();
        self.error.clear();

        if let Err(e) = current.validate() {
            self.error.error(e);
            return;
        }

        let id = self.editing_id.get_untracked();
        let error = self.error;
        let is_saving = self.is_saving;
        is_saving.set(true);
        spawn_local(async move {
            let result = api::save(id, &current).await;
            is_saving.set(false);
            match result {
                Ok(body) => {
                    let message = body.text().map(str::to_string).unwrap_or_else(|| {
                        if id.is_some() {
                            "Catalogue updated successfully".to_string()
                        } else {
                            "Catalogue created successfully".to_string()
                        }
                    });
                    on_saved.run(message);
                }
                Err(e) => {
                    log::error!("Failed to save catalogue: {}", e);
                    error.error(e.user_message("Failed to save", "Request failed"));
                }
            }
        });
    }
}

impl Default for CatalogueDetailsViewModel {
    fn default() -> Self {
        Self::new(MessagesConfig::default().timeout_ms)
    }
}
