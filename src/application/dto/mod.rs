pub mod article;
pub mod response;

pub use response::{Response, ResponseCode};
