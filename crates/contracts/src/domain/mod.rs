pub mod a001_catalogue;
pub mod common;
