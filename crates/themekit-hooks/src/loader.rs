// crates/themekit-hooks/src/loader.rs
// ============================================================================
// Module: Hook Loader
// Description: Registration queue replayed against a host callback registry.
// Purpose: Collect hook registrations during setup and apply them at run.
// Dependencies: tracing, std
// ============================================================================

//! ## Overview
//! Theme setup code queues hook registrations on a [`HookLoader`] without
//! touching the host. [`HookLoader::run`] replays the queue against a
//! [`HookHost`]: filters first, then actions, each in insertion order.
//! Callbacks are referenced by identifier; the host owns the mapping from
//! identifiers to concrete functions.
//!
//! Invariants:
//! - The queue is append-only; `run` does not consume it and may be replayed
//!   against multiple hosts.
//! - Safe-remove entries only remove a callback the host reports registered.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default hook priority.
pub const DEFAULT_PRIORITY: u32 = 10;

/// Default number of accepted callback arguments.
pub const DEFAULT_ACCEPTED_ARGS: u8 = 1;

// ============================================================================
// SECTION: Callback Identifier
// ============================================================================

/// Identifier of a host-registered callback.
///
/// # Invariants
/// - Opaque UTF-8 string; the host resolves it to a concrete function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallbackId(String);

impl CallbackId {
    /// Creates a new callback identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for CallbackId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Hook Host
// ============================================================================

/// Host-side callback registry the loader replays against.
pub trait HookHost {
    /// Registers an action callback on a hook.
    fn add_action(&mut self, hook: &str, callback: &CallbackId, priority: u32, accepted_args: u8);

    /// Registers a filter callback on a hook.
    fn add_filter(&mut self, hook: &str, callback: &CallbackId, priority: u32, accepted_args: u8);

    /// Returns the priority a callback is registered at on a hook, if any.
    fn has_action(&self, hook: &str, callback: &CallbackId) -> Option<u32>;

    /// Removes a callback from a hook at the given priority.
    fn remove_action(&mut self, hook: &str, callback: &CallbackId, priority: u32);
}

/// Removes an action only when the host reports it registered, using the
/// registered priority.
pub fn safe_remove_action(host: &mut dyn HookHost, hook: &str, callback: &CallbackId) {
    if let Some(priority) = host.has_action(hook, callback) {
        host.remove_action(hook, callback, priority);
    }
}

// ============================================================================
// SECTION: Hook Loader
// ============================================================================

/// One queued hook registration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HookEntry {
    /// Hook name.
    hook: String,
    /// Callback identifier.
    callback: CallbackId,
    /// Hook priority.
    priority: u32,
    /// Accepted callback arguments.
    accepted_args: u8,
    /// Whether this entry removes the callback instead of adding it.
    safe_remove: bool,
}

/// Registration queue for theme hooks.
#[derive(Debug, Clone, Default)]
pub struct HookLoader {
    /// Queued action registrations and removals.
    actions: Vec<HookEntry>,
    /// Queued filter registrations.
    filters: Vec<HookEntry>,
}

impl HookLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an action registration with default priority and argument
    /// count.
    pub fn add_action(&mut self, hook: impl Into<String>, callback: impl Into<CallbackId>) {
        self.add_action_with(hook, callback, DEFAULT_PRIORITY, DEFAULT_ACCEPTED_ARGS);
    }

    /// Queues an action registration.
    pub fn add_action_with(
        &mut self,
        hook: impl Into<String>,
        callback: impl Into<CallbackId>,
        priority: u32,
        accepted_args: u8,
    ) {
        self.actions.push(HookEntry {
            hook: hook.into(),
            callback: callback.into(),
            priority,
            accepted_args,
            safe_remove: false,
        });
    }

    /// Queues a safe removal of an action callback.
    pub fn remove_action(&mut self, hook: impl Into<String>, callback: impl Into<CallbackId>) {
        self.actions.push(HookEntry {
            hook: hook.into(),
            callback: callback.into(),
            priority: DEFAULT_PRIORITY,
            accepted_args: DEFAULT_ACCEPTED_ARGS,
            safe_remove: true,
        });
    }

    /// Queues a filter registration with default priority and argument
    /// count.
    pub fn add_filter(&mut self, hook: impl Into<String>, callback: impl Into<CallbackId>) {
        self.add_filter_with(hook, callback, DEFAULT_PRIORITY, DEFAULT_ACCEPTED_ARGS);
    }

    /// Queues a filter registration.
    pub fn add_filter_with(
        &mut self,
        hook: impl Into<String>,
        callback: impl Into<CallbackId>,
        priority: u32,
        accepted_args: u8,
    ) {
        self.filters.push(HookEntry {
            hook: hook.into(),
            callback: callback.into(),
            priority,
            accepted_args,
            safe_remove: false,
        });
    }

    /// Replays the queue against a host: filters first, then actions, each in
    /// insertion order.
    pub fn run(&self, host: &mut dyn HookHost) {
        for entry in &self.filters {
            host.add_filter(&entry.hook, &entry.callback, entry.priority, entry.accepted_args);
        }
        for entry in &self.actions {
            if entry.safe_remove {
                safe_remove_action(host, &entry.hook, &entry.callback);
            } else {
                host.add_action(&entry.hook, &entry.callback, entry.priority, entry.accepted_args);
            }
        }
        tracing::debug!(
            filters = self.filters.len(),
            actions = self.actions.len(),
            "replayed hook registrations"
        );
    }
}

// ============================================================================
// SECTION: Recording Host
// ============================================================================

/// Event observed by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// An action was registered.
    ActionAdded {
        /// Hook name.
        hook: String,
        /// Callback identifier.
        callback: CallbackId,
        /// Hook priority.
        priority: u32,
        /// Accepted callback arguments.
        accepted_args: u8,
    },
    /// A filter was registered.
    FilterAdded {
        /// Hook name.
        hook: String,
        /// Callback identifier.
        callback: CallbackId,
        /// Hook priority.
        priority: u32,
        /// Accepted callback arguments.
        accepted_args: u8,
    },
    /// An action was removed.
    ActionRemoved {
        /// Hook name.
        hook: String,
        /// Callback identifier.
        callback: CallbackId,
        /// Priority it was removed at.
        priority: u32,
    },
}

/// [`HookHost`] reference implementation that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    /// Observed events in call order.
    events: Vec<HostEvent>,
}

impl RecordingHost {
    /// Creates an empty recording host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the observed events in call order.
    #[must_use]
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }
}

impl HookHost for RecordingHost {
    fn add_action(&mut self, hook: &str, callback: &CallbackId, priority: u32, accepted_args: u8) {
        self.events.push(HostEvent::ActionAdded {
            hook: hook.to_string(),
            callback: callback.clone(),
            priority,
            accepted_args,
        });
    }

    fn add_filter(&mut self, hook: &str, callback: &CallbackId, priority: u32, accepted_args: u8) {
        self.events.push(HostEvent::FilterAdded {
            hook: hook.to_string(),
            callback: callback.clone(),
            priority,
            accepted_args,
        });
    }

    fn has_action(&self, hook: &str, callback: &CallbackId) -> Option<u32> {
        self.events.iter().rev().find_map(|event| match event {
            HostEvent::ActionAdded {
                hook: added_hook,
                callback: added_callback,
                priority,
                ..
            } if added_hook == hook && added_callback == callback => Some(*priority),
            _ => None,
        })
    }

    fn remove_action(&mut self, hook: &str, callback: &CallbackId, priority: u32) {
        self.events.push(HostEvent::ActionRemoved {
            hook: hook.to_string(),
            callback: callback.clone(),
            priority,
        });
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::*;

    #[test]
    fn run_replays_filters_before_actions() {
        let mut loader = HookLoader::new();
        loader.add_action("init", "setup_theme");
        loader.add_filter("body_class", "extend_body_class");

        let mut host = RecordingHost::new();
        loader.run(&mut host);

        assert!(matches!(host.events()[0], HostEvent::FilterAdded { .. }));
        assert!(matches!(host.events()[1], HostEvent::ActionAdded { .. }));
    }

    #[test]
    fn run_preserves_insertion_order_within_kind() {
        let mut loader = HookLoader::new();
        loader.add_action_with("init", "first", 20, 2);
        loader.add_action("init", "second");

        let mut host = RecordingHost::new();
        loader.run(&mut host);

        let HostEvent::ActionAdded { callback, priority, accepted_args, .. } = &host.events()[0]
        else {
            panic!("expected an action");
        };
        assert_eq!(callback.as_str(), "first");
        assert_eq!(*priority, 20);
        assert_eq!(*accepted_args, 2);
        let HostEvent::ActionAdded { callback, .. } = &host.events()[1] else {
            panic!("expected an action");
        };
        assert_eq!(callback.as_str(), "second");
    }

    #[test]
    fn safe_remove_uses_registered_priority() {
        let mut host = RecordingHost::new();
        host.add_action("init", &CallbackId::new("legacy"), 42, 1);

        safe_remove_action(&mut host, "init", &CallbackId::new("legacy"));

        assert!(matches!(
            host.events().last(),
            Some(HostEvent::ActionRemoved { priority: 42, .. })
        ));
    }

    #[test]
    fn safe_remove_is_a_no_op_for_unregistered_callbacks() {
        let mut host = RecordingHost::new();
        safe_remove_action(&mut host, "init", &CallbackId::new("ghost"));
        assert!(host.events().is_empty());
    }

    #[test]
    fn queued_safe_remove_replays_through_run() {
        let mut loader = HookLoader::new();
        loader.remove_action("init", "legacy");

        let mut host = RecordingHost::new();
        host.add_action("init", &CallbackId::new("legacy"), 7, 1);
        loader.run(&mut host);

        assert!(matches!(
            host.events().last(),
            Some(HostEvent::ActionRemoved { priority: 7, .. })
        ));
    }

    #[test]
    fn run_can_replay_against_multiple_hosts() {
        let mut loader = HookLoader::new();
        loader.add_action("init", "setup_theme");

        let mut first = RecordingHost::new();
        let mut second = RecordingHost::new();
        loader.run(&mut first);
        loader.run(&mut second);

        assert_eq!(first.events(), second.events());
    }
}
