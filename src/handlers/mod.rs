// src/handlers/mod.rs

pub mod admin;
pub mod auth;
pub mod bookmark;
pub mod category;
pub mod quiz;
pub mod result;
pub mod user;
