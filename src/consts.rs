//! Shared constants for the document model.

// ── History ─────────────────────────────────────────────────────

/// Number of undo steps kept before the oldest entries are evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

// ── Canvas ──────────────────────────────────────────────────────

/// Default canvas width in world units.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1000.0;

/// Default canvas height in world units.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 1000.0;

/// Edge length used for visuals whose renderer has no registered defaults.
pub const DEFAULT_SHAPE_SIZE: f64 = 100.0;

/// Edge length of a freshly added icon.
pub const ICON_SIZE: f64 = 40.0;

/// Line height multiplier used when text drives the height of a shape.
pub const TEXT_LINE_HEIGHT: f64 = 1.2;

// ── Renderers ───────────────────────────────────────────────────

/// Renderer name for icon glyphs.
pub const ICON_RENDERER: &str = "Icon";

/// Renderer name for raster images.
pub const IMAGE_RENDERER: &str = "Raster";

// ── Schema ──────────────────────────────────────────────────────

/// Schema version written by the serializer.
pub const CURRENT_SCHEMA_VERSION: u64 = 3;

/// Id given to the single diagram of a version 1 document.
pub const IMPLICIT_DIAGRAM_ID: &str = "default";

// ── Appearance keys ─────────────────────────────────────────────

pub const BACKGROUND_COLOR: &str = "BACKGROUND_COLOR";
pub const FONT_SIZE: &str = "FONT_SIZE";
pub const FOREGROUND_COLOR: &str = "FOREGROUND_COLOR";
pub const ICON_FONT_FAMILY: &str = "ICON_FONT_FAMILY";
pub const IMAGE_SOURCE: &str = "IMAGE_SOURCE";
pub const OPACITY: &str = "OPACITY";
pub const STROKE_COLOR: &str = "STROKE_COLOR";
pub const STROKE_THICKNESS: &str = "STROKE_THICKNESS";
pub const TEXT: &str = "TEXT";
pub const TEXT_ALIGNMENT: &str = "TEXT_ALIGNMENT";

// ── Appearance defaults ─────────────────────────────────────────

pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_FONT_SIZE: f64 = 14.0;
pub const DEFAULT_FOREGROUND_COLOR: &str = "#000000";
pub const DEFAULT_OPACITY: f64 = 1.0;
pub const DEFAULT_STROKE_COLOR: &str = "#333333";
pub const DEFAULT_STROKE_THICKNESS: f64 = 1.0;
pub const DEFAULT_TEXT_ALIGNMENT: &str = "center";
