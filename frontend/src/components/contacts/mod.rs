pub mod add;
pub mod detail;
