// crates/themekit-hooks/src/lib.rs
// ============================================================================
// Module: Themekit Hooks Library
// Description: Hook registration modeling for theme bootstrap code.
// Purpose: Queue hook and asset registrations and replay them on a host.
// Dependencies: themekit-core, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! `themekit-hooks` models the registration surface a theme presents to its
//! host runtime. [`HookLoader`] queues action and filter registrations and
//! replays them against a [`HookHost`]. [`Theme`] is a fluent builder for the
//! common bootstrap directives (styles, scripts, feature support, image
//! sizes, text domains) which are replayed phase by phase against a
//! [`ThemeHost`]. The library never calls into a real runtime; hosts
//! implement the seams.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod loader;
pub mod theme;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use loader::CallbackId;
pub use loader::DEFAULT_ACCEPTED_ARGS;
pub use loader::DEFAULT_PRIORITY;
pub use loader::HookHost;
pub use loader::HookLoader;
pub use loader::HostEvent;
pub use loader::RecordingHost;
pub use loader::safe_remove_action;
pub use theme::MIN_SUPPORTED_HOST_VERSION;
pub use theme::Phase;
pub use theme::RecordingThemeHost;
pub use theme::Script;
pub use theme::Style;
pub use theme::Theme;
pub use theme::ThemeError;
pub use theme::ThemeEvent;
pub use theme::ThemeHost;
