// Components module - the building blocks of the chat screen
//
// - Title bar: App name, busy spinner, exchange count
// - Transcript: Loading placeholder and exchanges, newest first
// - Input bar: Draft editor with the submit action
// - Status bar: Key hints, API endpoint
// - Logs panel: Captured tracing output
// - Toast: Stacked notifications over everything
//
// Each component is a focused, single-responsibility module.

pub mod formatters;
pub mod input_bar;
pub mod logs_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
pub mod transcript;
