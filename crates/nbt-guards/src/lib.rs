mod aggregate;
mod check;
pub mod checks;
mod extract;
mod gatekeeper;
mod registry;
mod threshold;

pub use aggregate::{check_all, MAX_LIST_LEN};
pub use check::NbtCheck;
pub use checks::default_registry;
pub use extract::{extract_item_nbt, COMPONENTS_KEY, LEGACY_ITEM_KEY, MODERN_ITEM_KEY};
pub use gatekeeper::{
    check_inbound, check_outbound, select_inbound, select_outbound, Direction, NbtRejection,
};
pub use registry::CheckRegistry;
pub use threshold::tag_meets_key_threshold;
