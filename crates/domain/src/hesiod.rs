//! Value types of the `hnsd.` Hesiod pseudo-zone.
mod field;
mod question;
mod record;
mod response;

pub use field::{HesiodField, MatchResult};
pub use question::HesiodQuestion;
pub use record::HesiodRecord;
pub use response::{HesiodResponse, ResponseStatus};
