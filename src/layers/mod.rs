pub mod gateway;
pub mod sink;
