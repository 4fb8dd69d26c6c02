//! Public invoice / warranty lookup

use crate::shared::api_utils::{api_url, read_json, ApiError};
use contracts::domain::a002_warranty::{Invoice, InvoiceLookupRequest};
use gloo_net::http::Request;

const API_PATH: &str = "/kiotviet/invoices";

/// Normalise the lookup term; blank input never reaches the network
pub fn lookup_request(term: &str) -> Result<InvoiceLookupRequest, ApiError> {
    let term = term.trim();
    if term.is_empty() {
        return Err(ApiError::Validation(
            "Enter a phone number or serial number".to_string(),
        ));
    }
    Ok(InvoiceLookupRequest {
        phone_or_serial: term.to_string(),
    })
}

/// Invoices matching a phone number or serial. Sent without credentials.
pub async fn lookup_invoices(term: &str) -> Result<Vec<Invoice>, ApiError> {
    let body = lookup_request(term)?;
    let response = Request::post(&api_url(API_PATH))
        .json(&body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_request_trims() {
        assert_eq!(
            lookup_request("  SN-0042 \n").unwrap().phone_or_serial,
            "SN-0042"
        );
    }

    #[test]
    fn test_blank_term_rejected() {
        assert!(matches!(lookup_request("   "), Err(ApiError::Validation(_))));
        assert!(matches!(lookup_request(""), Err(ApiError::Validation(_))));
    }
}
