//! Stateless HTTP request builder and response parser for the PuppyBowl API.
//!
//! # Design
//! `RosterClient` holds only a `base_url` (API root joined with the cohort)
//! and carries no mutable state between calls. Each operation is split into
//! a `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Any 2xx status is accepted; the JSON
//! envelope's `success` flag is then checked so that an in-band failure
//! surfaces as `ApiError::Rejected` instead of being mistaken for success.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Entry, EntryDraft, Envelope, PlayerData, PlayersData};

/// Synchronous, stateless client for the PuppyBowl API.
#[derive(Debug, Clone)]
pub struct RosterClient {
    base_url: String,
}

impl RosterClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_entries(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/players", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_entry(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/players/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_entry(&self, draft: &EntryDraft) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(draft).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/players", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_entry(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/players/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Entries in server order.
    pub fn parse_list_entries(&self, response: HttpResponse) -> Result<Vec<Entry>, ApiError> {
        let data: PlayersData = parse_envelope(response)?;
        Ok(data.players)
    }

    pub fn parse_get_entry(&self, response: HttpResponse) -> Result<Entry, ApiError> {
        let data: PlayerData = parse_envelope(response)?;
        Ok(data.player)
    }

    pub fn parse_create_entry(&self, response: HttpResponse) -> Result<Entry, ApiError> {
        let data: PlayerData = parse_envelope(response)?;
        Ok(data.player)
    }

    /// Succeeds only when the body reports `success: true`.
    pub fn parse_delete_entry(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        let envelope: Envelope<serde_json::Value> = decode(&response.body)?;
        check_success(&envelope)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn check_success<T>(envelope: &Envelope<T>) -> Result<(), ApiError> {
    if envelope.success {
        return Ok(());
    }
    let message = envelope
        .error
        .as_ref()
        .and_then(|e| e.message.clone())
        .unwrap_or_else(|| "server reported failure".to_string());
    Err(ApiError::Rejected { message })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn parse_envelope<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    let envelope: Envelope<T> = decode(&response.body)?;
    check_success(&envelope)?;
    envelope
        .data
        .ok_or_else(|| ApiError::DeserializationError("response envelope has no data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RosterClient {
        RosterClient::new("http://localhost:3000/api/test")
    }

    fn draft() -> EntryDraft {
        EntryDraft {
            name: "Rex".to_string(),
            breed: "Lab".to_string(),
            status: "field".to_string(),
            image_url: "http://x/y.png".to_string(),
            team_id: Some(3),
        }
    }

    #[test]
    fn build_list_entries_produces_correct_request() {
        let req = client().build_list_entries();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/test/players");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_entry_produces_correct_request() {
        let req = client().build_get_entry(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/test/players/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_entry_produces_correct_request() {
        let req = client().build_create_entry(&draft()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/api/test/players");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Rex",
                "breed": "Lab",
                "status": "field",
                "imageUrl": "http://x/y.png",
                "teamId": 3
            })
        );
    }

    #[test]
    fn build_delete_entry_produces_correct_request() {
        let req = client().build_delete_entry(9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/api/test/players/9");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_entries_keeps_server_order() {
        let response = HttpResponse::new(
            200,
            r#"{"success":true,"error":null,"data":{"players":[
                {"id":5,"name":"Zed","breed":"Pug","imageUrl":"a"},
                {"id":2,"name":"Amy","breed":"Lab","imageUrl":"b"}]}}"#,
        );
        let entries = client().parse_list_entries(response).unwrap();
        let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 2]);
    }

    #[test]
    fn parse_list_entries_server_error() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_list_entries(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_list_entries_bad_json() {
        let response = HttpResponse::new(200, "not json");
        let err = client().parse_list_entries(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_list_entries_missing_data() {
        let response = HttpResponse::new(200, r#"{"success":true,"data":null}"#);
        let err = client().parse_list_entries(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_get_entry_not_found() {
        let response = HttpResponse::new(404, r#"{"success":false}"#);
        let err = client().parse_get_entry(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_entry_success() {
        let response = HttpResponse::new(
            200,
            r#"{"success":true,"data":{"player":{"id":11,"name":"Rex","breed":"Lab","status":"field","imageUrl":"http://x/y.png","teamId":null,"team":null}}}"#,
        );
        let entry = client().parse_create_entry(response).unwrap();
        assert_eq!(entry.id, 11);
        assert_eq!(entry.status.as_deref(), Some("field"));
    }

    #[test]
    fn parse_create_entry_rejected_in_band() {
        let response = HttpResponse::new(
            200,
            r#"{"success":false,"error":{"name":"ValidationError","message":"name is required"},"data":null}"#,
        );
        let err = client().parse_create_entry(response).unwrap_err();
        match err {
            ApiError::Rejected { message } => assert_eq!(message, "name is required"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn parse_delete_entry_success() {
        let response = HttpResponse::new(200, r#"{"success":true,"error":null,"data":null}"#);
        assert!(client().parse_delete_entry(response).is_ok());
    }

    #[test]
    fn parse_delete_entry_success_false_is_rejection() {
        let response = HttpResponse::new(200, r#"{"success":false}"#);
        let err = client().parse_delete_entry(response).unwrap_err();
        assert!(err.is_rejection());
    }

    #[test]
    fn parse_delete_entry_not_found() {
        let response = HttpResponse::new(404, String::new());
        let err = client().parse_delete_entry(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = RosterClient::new("http://localhost:3000/api/test/");
        let req = client.build_list_entries();
        assert_eq!(req.path, "http://localhost:3000/api/test/players");
    }
}
