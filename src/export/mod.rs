//! Export and submission of compiled specifications.
//!
//! Three ways out of the editor, all serializing the same canonical
//! `{ "request": ... }` document:
//!
//! - copy to clipboard ([`ExportGateway::copy_to_clipboard`])
//! - file download ([`ExportGateway::download`])
//! - create query on the API service ([`QueryApi::create_query`])

mod clipboard;
mod error;
mod gateway;
mod submit;

pub use clipboard::{Clipboard, CommandClipboard, MemoryClipboard};
pub use error::{ExportError, ExportResult, SubmitError};
pub use gateway::{canonical_json, default_file_name, ExportGateway};
pub use submit::{
    CreateQueryRequest, HttpQueryApi, QueryApi, QueryPayload, GENERIC_FAILURE, SUCCESS_MESSAGE,
};
