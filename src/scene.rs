//! Renderer independent description of one frame.

use crate::layout::{Fit, PanelFill, Rect};
use crate::page::Page;
use crate::theme::{Backdrop, ColorScheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Cloud,
    Tab,
    Notebook,
    Spread,
}

impl Layer {
    /// Back to front.
    pub const ALL: [Layer; 4] = [Layer::Cloud, Layer::Tab, Layer::Notebook, Layer::Spread];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    Image {
        asset: &'static str,
        fit: Fit,
        /// Content zoom inside the bounds, 1.0 shows the whole fitted image.
        zoom: f32,
    },
    Panel {
        fill: PanelFill,
    },
    Text {
        text: &'static str,
        size: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub layer: Layer,
    pub kind: NodeKind,
    /// Render space, before rotation.
    pub bounds: Rect,
    /// Clockwise degrees around the bounds center.
    pub rotation: f32,
    pub opacity: f32,
    pub z: i32,
}

impl Node {
    pub fn image(layer: Layer, asset: &'static str, fit: Fit, bounds: Rect) -> Self {
        Self {
            layer,
            kind: NodeKind::Image { asset, fit, zoom: 1.0 },
            bounds,
            rotation: 0.0,
            opacity: 1.0,
            z: 0,
        }
    }

    pub fn asset(&self) -> Option<&'static str> {
        match self.kind {
            NodeKind::Image { asset, .. } => Some(asset),
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.bounds.width > 0.5 && self.bounds.height > 0.0
    }
}

/// Everything the renderer needs for one frame, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub scheme: ColorScheme,
    pub backdrop: Backdrop,
    pub page: Page,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.layer == layer)
    }

    #[cfg(test)]
    pub fn spread_assets(&self) -> Vec<&'static str> {
        self.layer(Layer::Spread).filter_map(Node::asset).collect()
    }
}

/// Projects rotation around the vertical axis through `origin_x` onto the
/// plane: horizontal distances from the axis shrink by `cos(angle)`.
pub fn project_turn(bounds: Rect, origin_x: f32, angle_degrees: f32) -> Rect {
    let squash = angle_degrees.to_radians().cos().max(0.0);
    Rect::new(
        origin_x + (bounds.x - origin_x) * squash,
        bounds.y,
        bounds.width * squash,
        bounds.height,
    )
}
