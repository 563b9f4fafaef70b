//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the editor UI and rendering.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Scene Colors
// ============================================================================

/// White clear color behind the ground plane
pub const BACKGROUND_COLOR: Color = Color::WHITE;

/// Light grey grid lines
pub const GRID_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);

// ============================================================================
// Polygon Colors
// ============================================================================

/// Black boundary outline around every completed polygon
pub const OUTLINE_COLOR: Color = Color::BLACK;

/// Black live line from the draft vertices to the pointer
pub const PREVIEW_COLOR: Color = Color::BLACK;

/// Dark grey markers on committed draft vertices
pub const DRAFT_VERTEX_COLOR: Color = Color::srgb(0.3, 0.3, 0.3);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Dark grey panel background (toolbar)
    pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// Dark grey border around color swatches
    pub const SWATCH_BORDER: egui::Color32 = egui::Color32::DARK_GRAY;
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32 (fully opaque)
pub fn bevy_to_egui_opaque(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
        255,
    )
}
