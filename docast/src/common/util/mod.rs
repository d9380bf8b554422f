mod date_utils;
mod path_utils;

pub(crate) use date_utils::*;
pub(crate) use path_utils::*;
