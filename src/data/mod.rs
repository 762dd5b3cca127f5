pub mod parser;
pub mod request;
