// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! These components encapsulate common UI patterns that appear in different
//! parts of the application, promoting consistency and reducing duplication.
//!
//! # Components
//!
//! - [`error_banner`] - Consistent inline error presentation with severity
//!   levels and i18n-friendly free-form text

pub mod error_banner;
