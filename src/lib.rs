//! Todo UI
//!
//! Client-side rendered to-do list with a dashboard, built on Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod routes;
pub mod seed;
pub mod store;
pub mod todos;
pub mod virtual_list;

pub use app::App;
