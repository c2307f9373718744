//! Core application modules for Prompt Forge.
//!
//! # Module Organization
//!
//! - [`draft`] - The in-memory prompt draft: user-editable fields, fixed tone
//!   presets, and the option vocabularies offered by the form
//! - [`composer`] - Deterministic composition of the final prompt text from a
//!   draft
//! - [`forgeui`] - Complete user interface implementation with window
//!   management
//!
//! # Architecture
//!
//! The application follows a simple layered architecture: [`draft`] holds the
//! transient document state, [`composer`] turns it into the deliverable text,
//! and [`forgeui`] coordinates the form, the output panel, and the floating
//! windows.

pub mod composer;
pub mod draft;
pub mod forgeui;

pub use forgeui::app::ForgeApp;
