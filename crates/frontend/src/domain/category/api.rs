//! Typed service calls for the category endpoints.

use crate::shared::api_utils::api_url;
use contracts::domain::category::aggregate::{Category, CategoryDto};
use contracts::shared::pagination::{ListQuery, PagedResponse};
use gloo_net::http::Request;

const API_BASE: &str = "/api/categories";

/// Path + query string for the list endpoint; pure so it can be unit-tested.
pub(crate) fn list_path(query: &ListQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", API_BASE, qs),
        _ => API_BASE.to_string(),
    }
}

/// Fetch one page of categories
pub async fn list(query: &ListQuery) -> Result<PagedResponse<Category>, String> {
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

/// Fetch a category by ID
pub async fn get(id: &str) -> Result<Category, String> {
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

/// Create a new category
pub async fn create(dto: &CategoryDto) -> Result<Category, String> {
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

/// Update an existing category
pub async fn update(id: &str, dto: &CategoryDto) -> Result<Category, String> {
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

/// Delete a category
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

/// Flip the activation flag via the dedicated endpoint
pub async fn toggle_active(id: &str) -> Result<Category, String> {
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
        let q = ListQuery::new(2, 50);
        assert_eq!(list_path(&q), "/api/categories?page=2&pageSize=50");
    }

    #[test]
    fn list_path_includes_filters() {
        let q = ListQuery::new(0, 25).with_active_only(true).with_search("tea");
        assert_eq!(
            list_path(&q),
            "/api/categories?page=0&pageSize=25&activeOnly=true&search=tea"
        );
    }

    #[test]
    fn list_path_omits_unset_filters() {
        let q = ListQuery::default();
        assert_eq!(list_path(&q), "/api/categories?page=0&pageSize=50");
    }
}
