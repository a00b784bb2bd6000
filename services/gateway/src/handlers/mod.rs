pub mod health;
pub mod vendor;
