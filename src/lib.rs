//! Prompt Forge - Creative Brief Composer for Romantic Game Concepts
//!
//! Prompt Forge is a desktop application for shaping a vivid creative brief
//! ready for any AI copilot. A single-page form collects the emotional arcs,
//! interactive mechanics, and atmospheric details of a romantic game concept
//! and composes them into one production-ready prompt that can be copied
//! straight into ChatGPT, Claude, Gemini, or any other chat tool.
//!
//! # Architecture Overview
//!
//! The application follows a layered architecture with clear separation of
//! concerns:
//!
//! - **UI Layer** ([`app::forgeui`]): egui-based desktop interface with window
//!   management
//! - **Draft Model** ([`app::draft`]): the in-memory [`app::draft::PromptDraft`]
//!   record plus the fixed tone presets and option vocabularies
//! - **Composer** ([`app::composer`]): deterministic mapping from a draft to
//!   the final prompt text
//!
//! ## Key Architectural Patterns
//!
//! - **Trait-based Window System**: floating windows implement
//!   [`app::forgeui::window_focus::FocusableWindow`] and are coordinated by a
//!   [`app::forgeui::window_focus::WindowFocusManager`]
//! - **Pure Composition Core**: [`app::composer::compose_prompt`] is a total
//!   function over the draft with no I/O, so every behavior of the output text
//!   is unit-testable
//! - **Transient Document State**: the draft lives only in memory for the
//!   lifetime of the process; only the UI theme choice is persisted
//!
//! # Getting Started
//!
//! The main application entry point is [`ForgeApp`], which owns the draft,
//! the composed output, and all windows.

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::ForgeApp;
