//! Human-facing derivations: display name and masked address.

mod mask;
mod name;

pub use mask::{MASK, mask_email};
pub use name::extract_name_from_email;
