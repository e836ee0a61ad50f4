pub mod cases;
pub mod gates;
pub mod health;
pub mod scoring;
