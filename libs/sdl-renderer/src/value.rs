//! Small value types shared by every renderer in the crate.

mod constant;
mod text;

pub(crate) use constant::Constant;
pub(crate) use text::Text;
