//! Per-renderer defaults for shapes created by add actions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collections::ImmutableList;
use crate::consts;
use crate::geometry::{Rotation, Transform, Vec2};
use crate::model::{Appearance, Configurable, Constraint, ItemId, Shape, ShapeProps};

/// What a renderer contributes to a freshly added shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeDefaults {
    pub size: Vec2,
    pub appearance: Appearance,
    pub configurables: Vec<Configurable>,
    pub constraints: Vec<Constraint>,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            size: Vec2::new(consts::DEFAULT_SHAPE_SIZE, consts::DEFAULT_SHAPE_SIZE),
            appearance: Appearance::empty(),
            configurables: Vec::new(),
            constraints: Vec::new(),
        }
    }
}

/// Renderer name to shape defaults.
///
/// The rendering backends live outside this crate; they register what their
/// shapes start out as. Unknown renderers fall back to [`ShapeDefaults::default`].
#[derive(Debug, Clone, Default)]
pub struct RendererRegistry {
    renderers: HashMap<String, ShapeDefaults>,
}

impl RendererRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in icon and image renderers.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(consts::ICON_RENDERER, ShapeDefaults {
            size: Vec2::new(consts::ICON_SIZE, consts::ICON_SIZE),
            constraints: vec![Constraint::MinSize],
            ..ShapeDefaults::default()
        });
        registry.register(consts::IMAGE_RENDERER, ShapeDefaults::default());
        registry
    }

    pub fn register(&mut self, renderer: impl Into<String>, defaults: ShapeDefaults) {
        self.renderers.insert(renderer.into(), defaults);
    }

    #[must_use]
    pub fn get(&self, renderer: &str) -> Option<&ShapeDefaults> {
        self.renderers.get(renderer)
    }

    #[must_use]
    pub fn contains(&self, renderer: &str) -> bool {
        self.renderers.contains_key(renderer)
    }

    /// New shape centered at `position`, sized and styled by the renderer defaults.
    ///
    /// `appearance` is layered over the default appearance.
    #[must_use]
    pub fn create_shape(&self, id: ItemId, renderer: &str, position: Vec2, appearance: &Appearance) -> Shape {
        let fallback = ShapeDefaults::default();
        let defaults = self.get(renderer).unwrap_or(&fallback);
        let appearance = defaults.appearance.merge(appearance);
        let size = Constraint::apply_all(&defaults.constraints, defaults.size, &appearance);
        Shape::new(ShapeProps {
            id,
            renderer: renderer.to_owned(),
            appearance,
            transform: Transform::new(position, size, Rotation::ZERO),
            configurables: ImmutableList::of(defaults.configurables.iter().cloned()),
            constraints: ImmutableList::of(defaults.constraints.iter().cloned()),
            locked: false,
        })
    }

    /// Icon glyph rendered with `font_family`.
    #[must_use]
    pub fn create_icon(&self, id: ItemId, text: &str, font_family: &str, position: Vec2) -> Shape {
        let appearance = Appearance::of([
            (consts::TEXT.to_owned(), Value::from(text)),
            (consts::ICON_FONT_FAMILY.to_owned(), Value::from(font_family)),
        ]);
        self.create_shape(id, consts::ICON_RENDERER, position, &appearance)
    }

    /// Raster image. A zero size falls back to the renderer default.
    #[must_use]
    pub fn create_image(&self, id: ItemId, source: &str, position: Vec2, size: Vec2) -> Shape {
        let appearance = Appearance::of([(consts::IMAGE_SOURCE.to_owned(), Value::from(source))]);
        let shape = self.create_shape(id, consts::IMAGE_RENDERER, position, &appearance);
        if size.x > 0.0 && size.y > 0.0 { shape.resize_to(size) } else { shape }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_renderer_uses_fallback_defaults() {
        let shape = RendererRegistry::new().create_shape("a".into(), "Mystery", Vec2::ZERO, &Appearance::empty());
        assert_eq!(shape.transform().size(), Vec2::new(100.0, 100.0));
        assert!(shape.appearance().is_empty());
        assert_eq!(shape.renderer(), "Mystery");
    }

    #[test]
    fn registered_defaults_seed_new_shapes() {
        let mut registry = RendererRegistry::new();
        registry.register("Button", ShapeDefaults {
            size: Vec2::new(100.0, 30.0),
            appearance: Appearance::of([(consts::TEXT.to_owned(), json!("Button"))]),
            configurables: vec![Configurable::Color { name: consts::BACKGROUND_COLOR.into(), label: "Fill".into() }],
            constraints: vec![Constraint::Size { width: None, height: Some(30.0) }],
        });
        let custom = Appearance::of([(consts::TEXT.to_owned(), json!("OK"))]);
        let shape = registry.create_shape("b".into(), "Button", Vec2::new(50.0, 50.0), &custom);
        assert_eq!(shape.appearance().text(), "OK");
        assert_eq!(shape.configurables().len(), 1);
        assert_eq!(shape.resize_to(Vec2::new(200.0, 90.0)).transform().size(), Vec2::new(200.0, 30.0));
    }

    #[test]
    fn icons_and_images_use_builtin_renderers() {
        let registry = RendererRegistry::with_builtins();
        let icon = registry.create_icon("i".into(), "\u{f007}", "FontAwesome", Vec2::ZERO);
        assert_eq!(icon.renderer(), consts::ICON_RENDERER);
        assert_eq!(icon.transform().size(), Vec2::new(40.0, 40.0));
        assert_eq!(icon.appearance().string(consts::ICON_FONT_FAMILY), Some("FontAwesome"));

        let image = registry.create_image("m".into(), "logo.png", Vec2::ZERO, Vec2::new(64.0, 32.0));
        assert_eq!(image.transform().size(), Vec2::new(64.0, 32.0));
        let fallback = registry.create_image("n".into(), "logo.png", Vec2::ZERO, Vec2::ZERO);
        assert_eq!(fallback.transform().size(), Vec2::new(100.0, 100.0));
    }
}
