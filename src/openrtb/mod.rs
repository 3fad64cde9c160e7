//! OpenRTB 2.5 wire model and request construction.

pub mod builder;
pub mod request;
pub mod response;
