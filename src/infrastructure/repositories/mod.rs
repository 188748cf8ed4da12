pub mod joya_repository;
