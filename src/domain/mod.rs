pub mod catalog;
pub mod joya;
