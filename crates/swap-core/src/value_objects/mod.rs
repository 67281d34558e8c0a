//! Value objects - immutable types that represent domain concepts

mod id;
mod scale;
mod skill_type;
mod swap_status;

pub use id::{Id, IdParseError};
pub use scale::{Proficiency, Rating};
pub use skill_type::SkillType;
pub use swap_status::SwapStatus;
