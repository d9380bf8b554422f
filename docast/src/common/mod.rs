mod constants;
pub(crate) mod util;
mod value;
mod value_serde;

pub use constants::*;
pub use value::*;
