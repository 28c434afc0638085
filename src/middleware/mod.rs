pub mod json_body;
pub mod params;

pub use json_body::{JsonBody, RawBody};
pub use params::ApiPath;
