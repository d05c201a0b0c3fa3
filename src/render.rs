//! Draws a [`Scene`] with raylib.

use raylib::prelude::*;

use crate::constants::{GRID_SPACING, RENDER_HEIGHT, RENDER_WIDTH};
use crate::layout::{Fit, PanelFill, Rect};
use crate::scene::{Layer, Node, NodeKind, Scene};
use crate::texture_loader::TextureCache;

// Default raylib font advance is a bit over half the font size per glyph.
const GLYPH_ADVANCE: f32 = 0.6;
const HEADING_COLOR: (u8, u8, u8) = (0x1f, 0x29, 0x37);

fn with_opacity((r, g, b): (u8, u8, u8), opacity: f32) -> Color {
    Color::new(r, g, b, (opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Source crop and destination for drawing a `width` x `height` texture into `bounds`.
///
/// `Cover` fills the bounds and crops the overflow evenly. `Contain` fits the
/// whole texture and centers it. `zoom` above 1 crops further into the center.
pub fn fit_rects(width: f32, height: f32, bounds: Rect, fit: Fit, zoom: f32) -> (Rect, Rect) {
    if width <= 0.0 || height <= 0.0 || bounds.width <= 0.0 || bounds.height <= 0.0 {
        return (Rect::new(0.0, 0.0, width, height), bounds);
    }
    let zoom = zoom.max(1.0);
    let (source, dest) = match fit {
        Fit::Cover => {
            let scale = (bounds.width / width).max(bounds.height / height);
            let (sw, sh) = (bounds.width / scale, bounds.height / scale);
            (Rect::new((width - sw) / 2.0, (height - sh) / 2.0, sw, sh), bounds)
        }
        Fit::Contain => {
            let scale = (bounds.width / width).min(bounds.height / height);
            let (dw, dh) = (width * scale, height * scale);
            let dest = Rect::new(
                bounds.x + (bounds.width - dw) / 2.0,
                bounds.y + (bounds.height - dh) / 2.0,
                dw,
                dh,
            );
            (Rect::new(0.0, 0.0, width, height), dest)
        }
    };
    (source.scale_about_center(1.0 / zoom), dest)
}

fn rectangle(r: Rect) -> Rectangle {
    Rectangle::new(r.x, r.y, r.width, r.height)
}

pub struct Renderer<'a> {
    textures: &'a TextureCache,
}

impl<'a> Renderer<'a> {
    pub fn new(textures: &'a TextureCache) -> Self {
        Self { textures }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, scene: &Scene) {
        let backdrop = scene.backdrop;
        d.clear_background(with_opacity(backdrop.background, 1.0));
        self.draw_grid(d, backdrop.grid_opacity);

        for layer in Layer::ALL {
            for node in scene.layer(layer).filter(|n| n.is_visible()) {
                match node.kind {
                    NodeKind::Image { asset, fit, zoom } => self.draw_image(d, node, asset, fit, zoom),
                    NodeKind::Panel { fill } => self.draw_panel(d, node, fill),
                    NodeKind::Text { text, size } => self.draw_text(d, node, text, size),
                }
            }
        }
    }

    fn draw_grid(&self, d: &mut RaylibDrawHandle, opacity: f32) {
        let color = with_opacity((0, 0, 0), opacity);
        for x in (0..=RENDER_WIDTH).step_by(GRID_SPACING as usize) {
            d.draw_line(x, 0, x, RENDER_HEIGHT, color);
        }
        for y in (0..=RENDER_HEIGHT).step_by(GRID_SPACING as usize) {
            d.draw_line(0, y, RENDER_WIDTH, y, color);
        }
    }

    fn draw_image(&self, d: &mut RaylibDrawHandle, node: &Node, asset: &str, fit: Fit, zoom: f32) {
        let Some(texture) = self.textures.get(asset) else {
            self.draw_placeholder(d, node);
            return;
        };
        let (source, dest) = fit_rects(texture.width() as f32, texture.height() as f32, node.bounds, fit, zoom);

        // Rotate around the node center, not the fitted rect
        let center = node.bounds.center();
        let origin = Vector2::new(center.x - dest.x, center.y - dest.y);
        d.draw_texture_pro(
            texture,
            rectangle(source),
            Rectangle::new(center.x, center.y, dest.width, dest.height),
            origin,
            node.rotation,
            with_opacity((255, 255, 255), node.opacity),
        );
    }

    fn draw_placeholder(&self, d: &mut RaylibDrawHandle, node: &Node) {
        let b = node.bounds;
        let center = b.center();
        d.draw_rectangle_pro(
            Rectangle::new(center.x, center.y, b.width, b.height),
            Vector2::new(b.width / 2.0, b.height / 2.0),
            node.rotation,
            with_opacity((0x9c, 0xa3, 0xaf), node.opacity * 0.6),
        );
        let edge = with_opacity((0x4b, 0x55, 0x63), node.opacity);
        d.draw_line_v(Vector2::new(b.x, b.y), Vector2::new(b.x + b.width, b.y + b.height), edge);
        d.draw_line_v(Vector2::new(b.x + b.width, b.y), Vector2::new(b.x, b.y + b.height), edge);
    }

    fn draw_panel(&self, d: &mut RaylibDrawHandle, node: &Node, fill: PanelFill) {
        let rgb = match fill {
            PanelFill::Black => (0, 0, 0),
            PanelFill::White => (255, 255, 255),
        };
        let b = node.bounds;
        d.draw_rectangle_pro(
            Rectangle::new(b.x + b.width / 2.0, b.y + b.height / 2.0, b.width, b.height),
            Vector2::new(b.width / 2.0, b.height / 2.0),
            node.rotation,
            with_opacity(rgb, node.opacity),
        );
    }

    fn draw_text(&self, d: &mut RaylibDrawHandle, node: &Node, text: &str, size: i32) {
        let width = text.chars().count() as f32 * size as f32 * GLYPH_ADVANCE;
        // Text is not squashed, so hide it once its box is narrower than the text
        if node.bounds.width < width {
            return;
        }
        let center = node.bounds.center();
        d.draw_text(
            text,
            (center.x - width / 2.0).round() as i32,
            (center.y - size as f32 / 2.0).round() as i32,
            size,
            with_opacity(HEADING_COLOR, node.opacity),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near_rect(a: Rect, b: Rect) -> bool {
        [(a.x, b.x), (a.y, b.y), (a.width, b.width), (a.height, b.height)]
            .iter()
            .all(|(x, y)| (x - y).abs() < 1e-3)
    }

    #[test]
    fn cover_crops_the_long_side() {
        let bounds = Rect::new(10.0, 20.0, 100.0, 100.0);
        let (source, dest) = fit_rects(400.0, 200.0, bounds, Fit::Cover, 1.0);
        assert_eq!(dest, bounds);
        assert!(near_rect(source, Rect::new(100.0, 0.0, 200.0, 200.0)));
    }

    #[test]
    fn contain_letterboxes() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
        let (source, dest) = fit_rects(400.0, 200.0, bounds, Fit::Contain, 1.0);
        assert!(near_rect(source, Rect::new(0.0, 0.0, 400.0, 200.0)));
        assert!(near_rect(dest, Rect::new(0.0, 50.0, 200.0, 100.0)));
    }

    #[test]
    fn zoom_crops_into_the_center() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let (source, dest) = fit_rects(100.0, 100.0, bounds, Fit::Cover, 2.0);
        assert_eq!(dest, bounds);
        assert!(near_rect(source, Rect::new(25.0, 25.0, 50.0, 50.0)));
    }

    #[test]
    fn empty_texture_is_passed_through() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let (source, dest) = fit_rects(0.0, 0.0, bounds, Fit::Cover, 1.0);
        assert_eq!(source, Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(dest, bounds);
    }

    #[test]
    fn opacity_maps_to_alpha() {
        assert_eq!(with_opacity((1, 2, 3), 0.5).a, 128);
        assert_eq!(with_opacity((1, 2, 3), 2.0).a, 255);
    }
}
