//! Typed service calls for the products-page endpoints.

use crate::shared::api_utils::api_url;
use contracts::domain::products_page::aggregate::{ProductsPage, ProductsPageDto};
use contracts::shared::pagination::{ListQuery, PagedResponse};
use gloo_net::http::Request;

const API_BASE: &str = "/api/products-pages";

pub(crate) fn list_path(query: &ListQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", API_BASE, qs),
        _ => API_BASE.to_string(),
    }
}

pub async fn list(query: &ListQuery) -> Result<PagedResponse<ProductsPage>, String> {
    let response = Request::get(&api_url(&list_path(query)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get(id: &str) -> Result<ProductsPage, String> {
    let response = Request::get(&api_url(&format!("{}/{}", API_BASE, id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create(dto: &ProductsPageDto) -> Result<ProductsPage, String> {
    let response = Request::post(&api_url(API_BASE))
        .json(dto)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update(id: &str, dto: &ProductsPageDto) -> Result<ProductsPage, String> {
    let response = Request::put(&api_url(&format!("{}/{}", API_BASE, id)))
        .json(dto)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("{}/{}", API_BASE, id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

pub async fn toggle_active(id: &str) -> Result<ProductsPage, String> {
    let response = Request::post(&api_url(&format!("{}/{}/toggle-activation", API_BASE, id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_path_includes_paging() {
        let q = ListQuery::new(0, 100).with_active_only(true);
        assert_eq!(
            list_path(&q),
            "/api/products-pages?page=0&pageSize=100&activeOnly=true"
        );
    }
}
