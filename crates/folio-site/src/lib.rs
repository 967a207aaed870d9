//! Single-page portfolio site for Folio
//!
//! This crate provides a Dioxus desktop application that shows an animated
//! loading splash and then reveals a page built from a TOML site config.

pub mod components;
pub mod error;
pub mod site_config;
