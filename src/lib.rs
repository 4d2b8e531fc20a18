pub mod common;
pub mod dashboard;
pub mod flow;
pub mod gates;
pub mod test_utils;
pub mod wallet;
