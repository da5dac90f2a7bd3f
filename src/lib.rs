// SPDX-License-Identifier: MPL-2.0
//! `firelight` is a streaming-storefront showcase built with the Iced GUI framework.
//!
//! It renders a social clip-sharing storefront over static demo data and
//! demonstrates view composition, internationalization with Fluent, and
//! user preference management. There is no server and no domain
//! persistence; everything except UI preferences resets on relaunch.

pub mod app;
pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod i18n;
pub mod social;
pub mod ui;
