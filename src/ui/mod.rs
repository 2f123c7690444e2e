// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`search_page`] - Repository search with the results table and pagination
//! - [`settings`] - Application preferences and configuration
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error banner)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with the screen switcher

pub mod components;
pub mod design_tokens;
pub mod navbar;
pub mod search_page;
pub mod settings;
pub mod theming;
