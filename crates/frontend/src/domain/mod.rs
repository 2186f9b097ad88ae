pub mod a001_catalogue;
