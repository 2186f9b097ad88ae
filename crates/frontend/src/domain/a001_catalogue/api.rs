//! REST calls for `/api/catalogues`

use contracts::domain::a001_catalogue::aggregate::{Catalogue, CatalogueDto, CatalogueId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_message::ApiMessage;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;
use crate::shared::error::ApiError;

fn collection_url() -> String {
    api_url(&format!("/api/{}", Catalogue::collection_name()))
}

fn item_url(id: CatalogueId) -> String {
    format!("{}/{}", collection_url(), id)
}

/// Разбор ответа: 2xx → тело как `T`, иначе `{"error": ...}` в `ApiError::Rejected`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ApiMessage>()
            .await
            .ok()
            .and_then(|m| m.text().map(str::to_string));
        return Err(ApiError::Rejected { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET /api/catalogues
pub async fn fetch_all() -> Result<Vec<Catalogue>, ApiError> {
    let response = Request::get(&collection_url()).send().await?;
    read_json(response).await
}

/// GET /api/catalogues/{id}
pub async fn fetch_by_id(id: CatalogueId) -> Result<Catalogue, ApiError> {
    let response = Request::get(&item_url(id)).send().await?;
    read_json(response).await
}

/// POST /api/catalogues
pub async fn create(dto: &CatalogueDto) -> Result<ApiMessage, ApiError> {
    let response = Request::post(&collection_url())
        .json(dto)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    read_json(response).await
}

/// PUT /api/catalogues/{id}
pub async fn update(id: CatalogueId, dto: &CatalogueDto) -> Result<ApiMessage, ApiError> {
    let response = Request::put(&item_url(id))
        .json(dto)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    read_json(response).await
}

/// DELETE /api/catalogues/{id}
pub async fn delete(id: CatalogueId) -> Result<ApiMessage, ApiError> {
    let response = Request::delete(&item_url(id)).send().await?;
    read_json(response).await
}

/// POST when `id` is `None`, PUT otherwise
pub async fn save(id: Option<CatalogueId>, dto: &CatalogueDto) -> Result<ApiMessage, ApiError> {
    match id {
        Some(id) => update(id, dto).await,
        None => create(dto).await,
    }
}
