pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{is_data_url, resolve_url, url_path};
