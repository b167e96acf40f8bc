//! mimix-core - Core types for the Mimix promotion tracker client.
//!
//! This crate holds everything that does not touch the network: the wire
//! data model, the unified error type, `dd/mm/yyyy` date conversion, and
//! the paginated table controller with its inline-edit state machine.

pub mod credentials;
pub mod dates;
pub mod error;
pub mod model;
pub mod table;
pub mod tokens;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use model::{
    MimixObject, MimixStatus, NewObject, NewRequest, ObjectPatch, ObjectRequest, PromoteStatus,
    ReqStatus, RequestPatch, User,
};
pub use tokens::AccessToken;
pub use types::{ApiUrl, RecordId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
