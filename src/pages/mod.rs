//! Page components, grouped by audience

pub mod admin;
pub mod home;
pub mod login;
pub mod member;
pub mod register_member;
pub mod register_trainer;
pub mod trainer;
