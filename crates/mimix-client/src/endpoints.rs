//! API endpoint paths and their request/response shapes.

use mimix_core::{RecordId, User};
use serde::{Deserialize, Serialize};

pub const LOGIN: &str = "login";
pub const CREATE_USER: &str = "create_user";
pub const OBJ_SEARCH: &str = "obj/search";
pub const OBJ_REQ_SEARCH: &str = "obj_req/search";
pub const ADD_MIMIX_OBJ: &str = "add_mimix_obj";
pub const CREATE_OBJ_REQ: &str = "create_obj_req";

pub fn update_obj_info(id: &RecordId) -> String {
    format!("update_mimix_obj_info/{}", id)
}

pub fn delete_obj(id: &RecordId) -> String {
    format!("delete_mimix_obj/{}", id)
}

pub fn add_obj_to_req(id: &RecordId) -> String {
    format!("add_obj_to_obj_req/{}", id)
}

pub fn update_req_info(id: &RecordId) -> String {
    format!("update_obj_req_info/{}", id)
}

pub fn delete_req(id: &RecordId) -> String {
    format!("delete_obj_req/{}", id)
}

pub fn convert_req(id: &RecordId) -> String {
    format!("convert_obj_req/{}", id)
}

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub pass: &'a str,
}

/// Response from login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// Request body for user registration.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub job: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Response from user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub user: User,
}

/// Error body shape: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}
