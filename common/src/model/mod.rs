pub mod contact;
pub mod photo;
