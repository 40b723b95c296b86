//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_id;
mod asset_status;
mod delete_policy;
mod fields;
mod side;

pub use asset_id::AssetId;
pub use asset_status::AssetStatus;
pub use delete_policy::DeletePolicy;
pub use fields::{
    check_amount, check_weight, parse_amount, parse_date, parse_weight, require_text,
    ALLOCATION_TOLERANCE,
};
pub use side::Side;
