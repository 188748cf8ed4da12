pub mod health;
pub mod joyas;
