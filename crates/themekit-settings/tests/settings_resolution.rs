// crates/themekit-settings/tests/settings_resolution.rs
// ============================================================================
// Module: Settings Resolution Tests
// Description: Validate document loading, caching, and invalidation on disk.
// Purpose: Ensure the resolver contract holds over OS-backed storage.
// Dependencies: themekit-core, themekit-settings, serde_json, tempfile
// ============================================================================

//! ## Overview
//! Exercises the settings resolver against documents on a real filesystem:
//! sanitization on first access, memoization across file changes, explicit
//! invalidation, and the parent-directory schema marker fallback.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only resolution validation uses panic-based assertions."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;

use serde_json::json;
use tempfile::TempDir;
use themekit_core::OsThemeFs;
use themekit_core::ThemeDirs;
use themekit_settings::SettingsResolver;
use themekit_settings::SettingsSchema;

type TestResult = Result<(), String>;

fn schema() -> SettingsSchema {
    SettingsSchema::leaf().with_child(
        "color",
        SettingsSchema::leaf().with_child("palette", SettingsSchema::leaf()),
    )
}

fn theme_with_settings(contents: &str) -> Result<(TempDir, SettingsResolver<OsThemeFs>), String> {
    let theme = TempDir::new().map_err(|err| err.to_string())?;
    fs::write(theme.path().join("theme-settings.json"), contents).map_err(|err| err.to_string())?;
    let resolver = SettingsResolver::new(OsThemeFs, ThemeDirs::standalone(theme.path()));
    Ok((theme, resolver))
}

#[test]
fn sanitized_document_survives_the_round_trip_from_disk() -> TestResult {
    let (_theme, mut resolver) = theme_with_settings(
        r##"{
            "version": 2,
            "settings": {
                "color": { "palette": ["#fff"], "gradient": ["linear"] },
                "typography": { "size": 12 }
            },
            "unexpected_key": true
        }"##,
    )?;
    let document = resolver.theme_settings(&schema(), &[]);
    let settings = document
        .raw_data()
        .get("settings")
        .ok_or("settings subtree should survive sanitization")?;
    if settings.get("color").and_then(|color| color.get("palette")) != Some(&json!(["#fff"])) {
        return Err("palette should pass through unchanged".to_string());
    }
    if settings.get("typography").is_some() {
        return Err("typography is not in the schema and must be dropped".to_string());
    }
    if document.raw_data().contains_key("unexpected_key") {
        return Err("unexpected top-level keys must be dropped".to_string());
    }
    Ok(())
}

#[test]
fn hex_color_values_pass_through_with_options_augmentation() -> TestResult {
    let (_theme, mut resolver) = theme_with_settings(
        r##"{
            "settings": {
                "color": { "palette": ["#0a0a0a"], "background": "#fff" },
                "options": { "on": true, "off": false }
            }
        }"##,
    )?;
    let document = resolver.theme_settings(&schema(), &[]);
    let settings = document
        .raw_data()
        .get("settings")
        .ok_or("settings subtree should survive sanitization")?;
    if settings.get("color").and_then(|color| color.get("palette")) != Some(&json!(["#0a0a0a"])) {
        return Err("hex palette entries should pass through unchanged".to_string());
    }
    if settings.get("color").and_then(|color| color.get("background")).is_some() {
        return Err("background is not in the schema and must be dropped".to_string());
    }
    if settings.get("options").and_then(|options| options.get("on")) != Some(&json!(true)) {
        return Err("the synthesized options node should keep the on toggle".to_string());
    }
    if settings.get("options").and_then(|options| options.get("off")).is_some() {
        return Err("option names outside the valid set must be dropped".to_string());
    }
    Ok(())
}

#[test]
fn branches_left_empty_by_pruning_are_removed_on_disk() -> TestResult {
    let (_theme, mut resolver) = theme_with_settings(
        r##"{
            "version": 1,
            "settings": { "color": { "gradient": ["#111"] } }
        }"##,
    )?;
    let document = resolver.theme_settings(&schema(), &[]);
    if document.raw_data().contains_key("settings") {
        return Err("settings with no surviving keys must be absent, not empty".to_string());
    }
    if document.version() != Some(&json!(1)) {
        return Err("version should survive alongside the removed subtree".to_string());
    }
    Ok(())
}

#[test]
fn cache_ignores_file_changes_until_invalidated() -> TestResult {
    let (theme, mut resolver) = theme_with_settings(r#"{ "version": 1 }"#)?;
    if resolver.theme_settings(&schema(), &[]).version() != Some(&json!(1)) {
        return Err("first access should read version 1".to_string());
    }

    fs::write(theme.path().join("theme-settings.json"), r#"{ "version": 2 }"#)
        .map_err(|err| err.to_string())?;
    if resolver.theme_settings(&schema(), &[]).version() != Some(&json!(1)) {
        return Err("memoized document must ignore the rewritten file".to_string());
    }

    resolver.invalidate();
    if resolver.theme_settings(&schema(), &[]).version() != Some(&json!(2)) {
        return Err("invalidation must pick up the rewritten file".to_string());
    }
    Ok(())
}

#[test]
fn missing_document_on_disk_degrades_to_empty() -> TestResult {
    let theme = TempDir::new().map_err(|err| err.to_string())?;
    let mut resolver = SettingsResolver::new(OsThemeFs, ThemeDirs::standalone(theme.path()));
    if !resolver.theme_settings(&schema(), &[]).raw_data().is_empty() {
        return Err("missing settings file should produce an empty document".to_string());
    }
    Ok(())
}

#[test]
fn schema_marker_in_parent_theme_enables_support() -> TestResult {
    let child = TempDir::new().map_err(|err| err.to_string())?;
    let parent = TempDir::new().map_err(|err| err.to_string())?;
    fs::write(parent.path().join("theme.json"), "{}").map_err(|err| err.to_string())?;

    let mut resolver =
        SettingsResolver::new(OsThemeFs, ThemeDirs::new(child.path(), parent.path()));
    if !resolver.has_schema_support() {
        return Err("marker in the parent theme should enable schema support".to_string());
    }
    Ok(())
}

#[test]
fn schema_support_flag_is_invalidated_with_the_document() -> TestResult {
    let theme = TempDir::new().map_err(|err| err.to_string())?;
    let mut resolver = SettingsResolver::new(OsThemeFs, ThemeDirs::standalone(theme.path()));
    if resolver.has_schema_support() {
        return Err("no marker file should mean no schema support".to_string());
    }

    fs::write(theme.path().join("theme.json"), "{}").map_err(|err| err.to_string())?;
    if resolver.has_schema_support() {
        return Err("memoized flag must ignore the new marker file".to_string());
    }

    resolver.invalidate();
    if !resolver.has_schema_support() {
        return Err("invalidation must pick up the new marker file".to_string());
    }
    Ok(())
}
