// crates/themekit-hooks/src/theme.rs
// ============================================================================
// Module: Theme Builder
// Description: Fluent builder queueing theme bootstrap directives.
// Purpose: Collect asset and feature registrations and replay them per phase.
// Dependencies: themekit-core, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! A [`Theme`] collects bootstrap directives (styles, scripts, feature
//! support, image sizes, text domains) through a fluent API and replays them
//! against a [`ThemeHost`]. Directives are grouped into phases mirroring the
//! host's bootstrap lifecycle: setup directives replay before any asset
//! enqueue directives, and within a phase entries replay by priority, then
//! insertion order.
//!
//! Construction gates on the host runtime version: a host older than the
//! requested minimum (never below [`MIN_SUPPORTED_HOST_VERSION`]) is an
//! error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use serde_json::Value;
use themekit_core::Version;
use themekit_core::VersionError;
use thiserror::Error;

use crate::loader::DEFAULT_PRIORITY;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Oldest host runtime version the builder supports.
pub const MIN_SUPPORTED_HOST_VERSION: &str = "7.1";

// ============================================================================
// SECTION: Theme Errors
// ============================================================================

/// Theme construction errors.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The host runtime is older than the required minimum version.
    #[error("host version {actual} is below the required minimum {required}")]
    UnsupportedHost {
        /// Required minimum version.
        required: Version,
        /// Reported host version.
        actual: Version,
    },
    /// A version string could not be parsed.
    #[error(transparent)]
    Version(#[from] VersionError),
}

// ============================================================================
// SECTION: Assets
// ============================================================================

/// A stylesheet registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Style handle.
    pub handle: String,
    /// Style source URL.
    pub src: String,
    /// Handles this style depends on.
    pub deps: Vec<String>,
    /// Optional asset version string.
    pub version: Option<String>,
    /// Media selector.
    pub media: String,
    /// Enqueue priority.
    pub priority: u32,
}

impl Style {
    /// Creates a style with default dependencies, media, and priority.
    #[must_use]
    pub fn new(handle: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            src: src.into(),
            deps: Vec::new(),
            version: None,
            media: "all".to_string(),
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the dependency handles.
    #[must_use]
    pub fn with_deps(mut self, deps: Vec<String>) -> Self {
        self.deps = deps;
        self
    }

    /// Sets the asset version string.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the media selector.
    #[must_use]
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = media.into();
        self
    }

    /// Sets the enqueue priority.
    #[must_use]
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }
}

/// A script registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// Script handle.
    pub handle: String,
    /// Script source URL.
    pub src: String,
    /// Handles this script depends on.
    pub deps: Vec<String>,
    /// Optional asset version string.
    pub version: Option<String>,
    /// Whether the script loads in the page footer.
    pub in_footer: bool,
}

impl Script {
    /// Creates a script with default dependencies loading in the header.
    #[must_use]
    pub fn new(handle: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            src: src.into(),
            deps: Vec::new(),
            version: None,
            in_footer: false,
        }
    }

    /// Sets the dependency handles.
    #[must_use]
    pub fn with_deps(mut self, deps: Vec<String>) -> Self {
        self.deps = deps;
        self
    }

    /// Sets the asset version string.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Loads the script in the page footer.
    #[must_use]
    pub fn in_footer(mut self) -> Self {
        self.in_footer = true;
        self
    }
}

// ============================================================================
// SECTION: Phases and Directives
// ============================================================================

/// Bootstrap phase a directive replays in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Theme setup: feature support, image sizes, text domains.
    AfterSetup,
    /// Front-end asset enqueueing.
    EnqueueAssets,
    /// Admin asset enqueueing.
    AdminAssets,
    /// Block editor asset enqueueing.
    EditorAssets,
}

/// Replay order of phases.
const PHASE_ORDER: [Phase; 4] =
    [Phase::AfterSetup, Phase::EnqueueAssets, Phase::AdminAssets, Phase::EditorAssets];

/// One queued bootstrap directive.
#[derive(Debug, Clone, PartialEq)]
enum Directive {
    /// Enqueue a stylesheet.
    EnqueueStyle(Style),
    /// Enqueue a script.
    EnqueueScript(Script),
    /// Dequeue and deregister a stylesheet.
    DequeueStyle(String),
    /// Dequeue and deregister a script.
    DequeueScript(String),
    /// Declare feature support.
    AddSupport {
        /// Feature name.
        feature: String,
        /// Optional feature options.
        options: Option<Value>,
    },
    /// Withdraw feature support.
    RemoveSupport(String),
    /// Register an image size.
    AddImageSize {
        /// Size name.
        name: String,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// Whether to crop to exact dimensions.
        crop: bool,
    },
    /// Remove an image size.
    RemoveImageSize(String),
    /// Load a translation text domain.
    LoadTextDomain {
        /// Text domain name.
        domain: String,
        /// Optional path to the domain files.
        path: Option<PathBuf>,
    },
}

/// A directive with its replay scheduling.
#[derive(Debug, Clone, PartialEq)]
struct QueuedDirective {
    /// Phase the directive replays in.
    phase: Phase,
    /// Priority within the phase.
    priority: u32,
    /// Directive payload.
    directive: Directive,
}

// ============================================================================
// SECTION: Theme Host
// ============================================================================

/// Host runtime surface the theme builder delegates to.
pub trait ThemeHost {
    /// Enqueues a stylesheet.
    fn enqueue_style(&mut self, style: &Style);

    /// Enqueues a script.
    fn enqueue_script(&mut self, script: &Script);

    /// Dequeues and deregisters a stylesheet.
    fn dequeue_style(&mut self, handle: &str);

    /// Dequeues and deregisters a script.
    fn dequeue_script(&mut self, handle: &str);

    /// Declares feature support.
    fn add_support(&mut self, feature: &str, options: Option<&Value>);

    /// Withdraws feature support.
    fn remove_support(&mut self, feature: &str);

    /// Registers an image size.
    fn add_image_size(&mut self, name: &str, width: u32, height: u32, crop: bool);

    /// Removes an image size.
    fn remove_image_size(&mut self, name: &str);

    /// Loads a translation text domain.
    fn load_text_domain(&mut self, domain: &str, path: Option<&Path>);
}

// ============================================================================
// SECTION: Theme Builder
// ============================================================================

/// Fluent theme bootstrap builder.
///
/// # Invariants
/// - Directives replay grouped by [`Phase`] in [`PHASE_ORDER`], sorted by
///   priority (stable) within each phase.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme slug.
    slug: String,
    /// Queued directives in insertion order.
    directives: Vec<QueuedDirective>,
}

impl Theme {
    /// Creates a theme builder, gating on the host runtime version.
    ///
    /// The requested minimum is clamped up to
    /// [`MIN_SUPPORTED_HOST_VERSION`].
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] when either version string is invalid or the
    /// host version is below the effective minimum.
    pub fn new(
        slug: impl Into<String>,
        min_host_version: &str,
        host_version: &str,
    ) -> Result<Self, ThemeError> {
        let baseline = Version::parse(MIN_SUPPORTED_HOST_VERSION)?;
        let requested = Version::parse(min_host_version)?;
        let required = if requested > baseline { requested } else { baseline };
        let actual = Version::parse(host_version)?;
        if !actual.is_at_least(&required) {
            return Err(ThemeError::UnsupportedHost { required, actual });
        }
        Ok(Self {
            slug: slug.into(),
            directives: Vec::new(),
        })
    }

    /// Returns the theme slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Queues a front-end stylesheet.
    #[must_use]
    pub fn add_style(self, style: Style) -> Self {
        let priority = style.priority;
        self.queue(Phase::EnqueueAssets, priority, Directive::EnqueueStyle(style))
    }

    /// Queues removal of a front-end stylesheet.
    #[must_use]
    pub fn remove_style(self, handle: impl Into<String>) -> Self {
        self.queue(Phase::EnqueueAssets, DEFAULT_PRIORITY, Directive::DequeueStyle(handle.into()))
    }

    /// Queues a front-end script.
    #[must_use]
    pub fn add_script(self, script: Script) -> Self {
        self.queue(Phase::EnqueueAssets, DEFAULT_PRIORITY, Directive::EnqueueScript(script))
    }

    /// Queues a front-end script only when `cond` holds.
    #[must_use]
    pub fn add_script_if(self, script: Script, cond: bool) -> Self {
        if cond { self.add_script(script) } else { self }
    }

    /// Queues removal of a front-end script.
    #[must_use]
    pub fn remove_script(self, handle: impl Into<String>) -> Self {
        self.queue(Phase::EnqueueAssets, DEFAULT_PRIORITY, Directive::DequeueScript(handle.into()))
    }

    /// Queues an admin stylesheet.
    #[must_use]
    pub fn add_admin_style(self, style: Style) -> Self {
        let priority = style.priority;
        self.queue(Phase::AdminAssets, priority, Directive::EnqueueStyle(style))
    }

    /// Queues an admin script.
    #[must_use]
    pub fn add_admin_script(self, script: Script) -> Self {
        self.queue(Phase::AdminAssets, DEFAULT_PRIORITY, Directive::EnqueueScript(script))
    }

    /// Queues an editor stylesheet.
    #[must_use]
    pub fn add_editor_style(self, style: Style) -> Self {
        let priority = style.priority;
        self.queue(Phase::EditorAssets, priority, Directive::EnqueueStyle(style))
    }

    /// Queues a feature support declaration.
    #[must_use]
    pub fn add_support(self, feature: impl Into<String>, options: Option<Value>) -> Self {
        self.queue(
            Phase::AfterSetup,
            DEFAULT_PRIORITY,
            Directive::AddSupport {
                feature: feature.into(),
                options,
            },
        )
    }

    /// Queues a feature support withdrawal.
    #[must_use]
    pub fn remove_support(self, feature: impl Into<String>) -> Self {
        self.queue(Phase::AfterSetup, DEFAULT_PRIORITY, Directive::RemoveSupport(feature.into()))
    }

    /// Queues an image size registration.
    #[must_use]
    pub fn add_image_size(
        self,
        name: impl Into<String>,
        width: u32,
        height: u32,
        crop: bool,
    ) -> Self {
        self.queue(
            Phase::AfterSetup,
            DEFAULT_PRIORITY,
            Directive::AddImageSize {
                name: name.into(),
                width,
                height,
                crop,
            },
        )
    }

    /// Queues an image size removal.
    #[must_use]
    pub fn remove_image_size(self, name: impl Into<String>) -> Self {
        self.queue(Phase::AfterSetup, DEFAULT_PRIORITY, Directive::RemoveImageSize(name.into()))
    }

    /// Queues loading a translation text domain.
    #[must_use]
    pub fn load_text_domain(self, domain: impl Into<String>, path: Option<PathBuf>) -> Self {
        self.queue(
            Phase::AfterSetup,
            DEFAULT_PRIORITY,
            Directive::LoadTextDomain {
                domain: domain.into(),
                path,
            },
        )
    }

    /// Replays all queued directives against the host, phase by phase.
    pub fn apply(&self, host: &mut dyn ThemeHost) {
        for phase in PHASE_ORDER {
            let mut batch: Vec<&QueuedDirective> =
                self.directives.iter().filter(|queued| queued.phase == phase).collect();
            batch.sort_by_key(|queued| queued.priority);
            for queued in batch {
                Self::replay(host, &queued.directive);
            }
        }
        tracing::debug!(theme = %self.slug, directives = self.directives.len(), "applied theme directives");
    }

    /// Replays one directive against the host.
    fn replay(host: &mut dyn ThemeHost, directive: &Directive) {
        match directive {
            Directive::EnqueueStyle(style) => host.enqueue_style(style),
            Directive::EnqueueScript(script) => host.enqueue_script(script),
            Directive::DequeueStyle(handle) => host.dequeue_style(handle),
            Directive::DequeueScript(handle) => host.dequeue_script(handle),
            Directive::AddSupport { feature, options } => {
                host.add_support(feature, options.as_ref());
            }
            Directive::RemoveSupport(feature) => host.remove_support(feature),
            Directive::AddImageSize { name, width, height, crop } => {
                host.add_image_size(name, *width, *height, *crop);
            }
            Directive::RemoveImageSize(name) => host.remove_image_size(name),
            Directive::LoadTextDomain { domain, path } => {
                host.load_text_domain(domain, path.as_deref());
            }
        }
    }

    /// Appends a directive to the queue.
    fn queue(mut self, phase: Phase, priority: u32, directive: Directive) -> Self {
        self.directives.push(QueuedDirective {
            phase,
            priority,
            directive,
        });
        self
    }
}

// ============================================================================
// SECTION: Recording Theme Host
// ============================================================================

/// Event observed by [`RecordingThemeHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeEvent {
    /// A stylesheet was enqueued.
    StyleEnqueued(Style),
    /// A script was enqueued.
    ScriptEnqueued(Script),
    /// A stylesheet was dequeued.
    StyleDequeued(String),
    /// A script was dequeued.
    ScriptDequeued(String),
    /// Feature support was declared.
    SupportAdded {
        /// Feature name.
        feature: String,
        /// Optional feature options.
        options: Option<Value>,
    },
    /// Feature support was withdrawn.
    SupportRemoved(String),
    /// An image size was registered.
    ImageSizeAdded {
        /// Size name.
        name: String,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// Whether to crop to exact dimensions.
        crop: bool,
    },
    /// An image size was removed.
    ImageSizeRemoved(String),
    /// A text domain was loaded.
    TextDomainLoaded {
        /// Text domain name.
        domain: String,
        /// Optional path to the domain files.
        path: Option<PathBuf>,
    },
}

/// [`ThemeHost`] reference implementation that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingThemeHost {
    /// Observed events in call order.
    events: Vec<ThemeEvent>,
}

impl RecordingThemeHost {
    /// Creates an empty recording host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the observed events in call order.
    #[must_use]
    pub fn events(&self) -> &[ThemeEvent] {
        &self.events
    }
}

impl ThemeHost for RecordingThemeHost {
    fn enqueue_style(&mut self, style: &Style) {
        self.events.push(ThemeEvent::StyleEnqueued(style.clone()));
    }

    fn enqueue_script(&mut self, script: &Script) {
        self.events.push(ThemeEvent::ScriptEnqueued(script.clone()));
    }

    fn dequeue_style(&mut self, handle: &str) {
        self.events.push(ThemeEvent::StyleDequeued(handle.to_string()));
    }

    fn dequeue_script(&mut self, handle: &str) {
        self.events.push(ThemeEvent::ScriptDequeued(handle.to_string()));
    }

    fn add_support(&mut self, feature: &str, options: Option<&Value>) {
        self.events.push(ThemeEvent::SupportAdded {
            feature: feature.to_string(),
            options: options.cloned(),
        });
    }

    fn remove_support(&mut self, feature: &str) {
        self.events.push(ThemeEvent::SupportRemoved(feature.to_string()));
    }

    fn add_image_size(&mut self, name: &str, width: u32, height: u32, crop: bool) {
        self.events.push(ThemeEvent::ImageSizeAdded {
            name: name.to_string(),
            width,
            height,
            crop,
        });
    }

    fn remove_image_size(&mut self, name: &str) {
        self.events.push(ThemeEvent::ImageSizeRemoved(name.to_string()));
    }

    fn load_text_domain(&mut self, domain: &str, path: Option<&Path>) {
        self.events.push(ThemeEvent::TextDomainLoaded {
            domain: domain.to_string(),
            path: path.map(Path::to_path_buf),
        });
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
