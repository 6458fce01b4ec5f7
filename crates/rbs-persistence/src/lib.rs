//! Import and export of ruleset documents.
//!
//! A ruleset document is a UTF-8 JSON object mapping ruleset name to
//! `{ "rules": [ ... ] }`:
//!
//! ```text
//! {
//!   "orders": {
//!     "rules": [
//!       {
//!         "field": "amount",
//!         "conditions": [
//!           {
//!             "condition": "amount > 0",
//!             "error_message": { "code": "E1", "error_type": "error", "message": "must be positive" },
//!             "action": { "type": "", "value": "" }
//!           }
//!         ]
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! The only structural check on import is that every top-level value has an
//! array-typed `rules` property. Exports are pretty-printed with two-space
//! indentation and written atomically.
//!
//! # Architecture
//!
//! - `codec` - text <-> [`RulesetCollection`] conversion and shape checks
//! - `io/` - file reads and writes, blocking and async
//! - `error` - error types with user-facing messages

mod codec;
mod error;
mod io;

pub use codec::{parse_collection, to_json_string};
pub use error::{PersistenceError, Result};
pub use io::{
    DEFAULT_FILE_NAME, export_collection, export_collection_async, import_collection,
    import_collection_async,
};

pub use rbs_model::RulesetCollection;
