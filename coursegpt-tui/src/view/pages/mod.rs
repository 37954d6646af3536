//! 页面视图

pub mod about;
pub mod home;
pub mod lessons;
pub mod modules;
pub mod not_found;
