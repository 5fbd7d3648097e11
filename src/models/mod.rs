// src/models/mod.rs

pub mod bookmark;
pub mod category;
pub mod page;
pub mod question;
pub mod quiz;
pub mod result;
pub mod user;
