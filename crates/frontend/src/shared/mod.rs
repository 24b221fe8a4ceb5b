pub mod api_utils;
pub mod config;
pub mod http;
pub mod icons;
pub mod page_frame;
