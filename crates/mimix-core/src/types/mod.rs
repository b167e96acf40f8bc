//! Validated identifier and URL types.

mod api_url;
mod record_id;

pub use api_url::ApiUrl;
pub use record_id::RecordId;
