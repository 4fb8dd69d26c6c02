//! Shift slot type endpoints

use crate::shared::api_utils::{api_url, auth_header, ensure_ok, read_json, ApiError};
use contracts::domain::a001_shift_slot_type::{
    CreateShiftSlotTypeDto, ShiftSlotType, ShiftSlotTypeListQuery, UpdateShiftSlotTypeDto,
};
use contracts::shared::pagination::PaginatedResponse;
use gloo_net::http::Request;

const API_PATH: &str = "/shift-slot-types";

pub fn list_path(query: &ShiftSlotTypeListQuery) -> Result<String, ApiError> {
    let query_string =
        serde_qs::to_string(query).map_err(|e| ApiError::Serialize(e.to_string()))?;
    Ok(format!("{}?{}", API_PATH, query_string))
}

fn item_path(id: &str) -> String {
    format!("{}/{}", API_PATH, urlencoding::encode(id))
}

/// One page of slot types
pub async fn fetch_page(
    query: &ShiftSlotTypeListQuery,
) -> Result<PaginatedResponse<ShiftSlotType>, ApiError> {
    let response = Request::get(&api_url(&list_path(query)?))
        .header("Authorization", &auth_header()?)
        .send()
        .await?;
    read_json(response).await
}

/// Every slot type, unpaginated (pickers)
pub async fn fetch_all() -> Result<Vec<ShiftSlotType>, ApiError> {
    let response = Request::get(&api_url(&format!("{}/all", API_PATH)))
        .header("Authorization", &auth_header()?)
        .send()
        .await?;
    read_json(response).await
}

pub async fn fetch_by_id(id: &str) -> Result<ShiftSlotType, ApiError> {
    let response = Request::get(&api_url(&item_path(id)))
        .header("Authorization", &auth_header()?)
        .send()
        .await?;
    read_json(response).await
}

pub async fn create(dto: &CreateShiftSlotTypeDto) -> Result<ShiftSlotType, ApiError> {
    let response = Request::post(&api_url(API_PATH))
        .header("Authorization", &auth_header()?)
        .json(dto)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await?;
    read_json(response).await
}

pub async fn update(id: &str, dto: &UpdateShiftSlotTypeDto) -> Result<ShiftSlotType, ApiError> {
    let response = Request::patch(&api_url(&item_path(id)))
        .header("Authorization", &auth_header()?)
        .json(dto)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await?;
    read_json(response).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&item_path(id)))
        .header("Authorization", &auth_header()?)
        .send()
        .await?;
    ensure_ok(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path() {
        let query = ShiftSlotTypeListQuery {
            page: 2,
            search: Some("night".into()),
            is_active: Some(false),
            ..Default::default()
        };
        assert_eq!(
            list_path(&query).unwrap(),
            "/shift-slot-types?page=2&limit=20&search=night&isActive=false"
        );
        assert_eq!(
            list_path(&ShiftSlotTypeListQuery::default()).unwrap(),
            "/shift-slot-types?page=1&limit=20"
        );
    }

    #[test]
    fn test_item_path_escapes_id() {
        assert_eq!(item_path("a/b"), "/shift-slot-types/a%2Fb");
    }
}
