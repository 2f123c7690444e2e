// SPDX-License-Identifier: MPL-2.0
//! `repo_lens` is a GitHub repository search client built with the Iced GUI
//! framework.
//!
//! It provides paginated repository search and demonstrates internationalization
//! with Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/repo_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
