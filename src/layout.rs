use crate::page::Page;

pub mod assets {
    pub const CYSEC: &str = "/images/gallery/cysec.jpeg";
    pub const EXPO_2024: &str = "/images/gallery/expo2024.jpeg";
    pub const TECHNICAL_WRITING: &str = "/images/gallery/technical-writing.jpeg";
    pub const STORY: &str = "/images/gallery/story.jpeg";
    pub const CLUBCON: &str = "/images/gallery/clubcon1.jpeg";

    pub const FRAME_1: &str = "/images/gallery/frame1.png";
    pub const FRAME_2: &str = "/images/gallery/frame2.png";
    pub const FRAME_3: &str = "/images/gallery/frame3.png";
    pub const FRAME_4: &str = "/images/gallery/frame4.png";

    pub const GALLERY_FLAG: &str = "/images/gallery/flag.png";
    pub const GALLERY_HEART: &str = "/images/gallery/heart.png";
    pub const GALLERY_STAR: &str = "/images/gallery/star.png";
    pub const CAMERA: &str = "/images/gallery/image.png";
    pub const FILM_STRIP: &str = "/images/gallery/static.png";
    pub const COLLAGE_STRIP: &str = "/images/gallery/static2.png";
    pub const FILM_STRIP_VERTICAL: &str = "/images/gallery/filmstrip1.png";

    pub const STAR_ICON: &str = "/starIcon.png";
    pub const LEAF_ICON: &str = "/leafIcon.png";
    pub const FLAG: &str = "/flag.png";
    pub const HEART: &str = "/heart.svg";
    pub const MUSHROOM: &str = "/mushroom.svg";
    pub const PLANE: &str = "/plane.svg";

    pub const NOTEBOOK: &str = "/images/gallery/notebook.png";
    pub const TAB_ARROW: &str = "/images/gallery/arrow.png";
    pub const CLOUD: &str = "/images/cloud1.png";

    /// Book furniture that is not part of any spread.
    pub const CHROME: [&str; 3] = [NOTEBOOK, TAB_ARROW, CLOUD];
}

use assets::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }

    pub fn scale_about_center(&self, factor: f32) -> Self {
        let c = self.center();
        let w = self.width * factor;
        let h = self.height * factor;
        Self::new(c.x - w * 0.5, c.y - h * 0.5, w, h)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    Photo,
    Frame,
    Sticker,
    Overlay,
}

/// How an image fills its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Fill the bounds, cropping the overflow.
    Cover,
    /// Fit inside the bounds, keeping the whole image visible.
    Contain,
}

/// Target transform reached while the pointer hovers an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverEffect {
    pub scale: f32,
    /// Added to the resting rotation (degrees).
    pub rotation: f32,
    pub offset: Point,
    /// Zoom of the image content inside its (clipped) bounds.
    pub zoom: f32,
    /// z-order while hovered.
    pub raise: Option<i32>,
    /// Seconds to ease the transform in or out.
    pub duration: f32,
}

impl HoverEffect {
    pub const NONE: HoverEffect = HoverEffect {
        scale: 1.0,
        rotation: 0.0,
        offset: Point::new(0.0, 0.0),
        zoom: 1.0,
        raise: None,
        duration: crate::constants::HOVER_DURATION,
    };

    pub fn is_none(&self) -> bool {
        self.scale == 1.0 && self.rotation == 0.0 && self.offset == Point::default() && self.zoom == 1.0 && self.raise.is_none()
    }

    const fn grow(scale: f32) -> Self {
        Self { scale, ..Self::NONE }
    }

    const fn tilt(scale: f32, rotation: f32) -> Self {
        Self { scale, rotation, ..Self::NONE }
    }

    const fn zoom(zoom: f32) -> Self {
        Self { zoom, ..Self::NONE }
    }

    const fn drift(dx: f32, dy: f32) -> Self {
        Self {
            offset: Point::new(dx, dy),
            duration: crate::constants::HOVER_SLIDE_DURATION,
            ..Self::NONE
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSlot {
    pub asset: &'static str,
    pub role: SlotRole,
    pub fit: Fit,
    pub bounds: Rect,
    pub rotation: f32,
    pub z: i32,
    pub hover: HoverEffect,
    /// Area that triggers the hover effect, the slot bounds when `None`.
    pub hover_area: Option<Rect>,
}

impl ImageSlot {
    fn new(asset: &'static str, role: SlotRole, fit: Fit, bounds: Rect) -> Self {
        Self {
            asset,
            role,
            fit,
            bounds,
            rotation: 0.0,
            z: 10,
            hover: HoverEffect::NONE,
            hover_area: None,
        }
    }

    fn photo(asset: &'static str, bounds: Rect) -> Self {
        Self::new(asset, SlotRole::Photo, Fit::Cover, bounds)
    }

    fn frame(asset: &'static str, bounds: Rect) -> Self {
        Self::new(asset, SlotRole::Frame, Fit::Contain, bounds)
    }

    fn sticker(asset: &'static str, bounds: Rect) -> Self {
        Self::new(asset, SlotRole::Sticker, Fit::Contain, bounds).z(40)
    }

    fn overlay(asset: &'static str, bounds: Rect) -> Self {
        Self::new(asset, SlotRole::Overlay, Fit::Contain, bounds)
    }

    fn z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    fn on_hover(mut self, hover: HoverEffect) -> Self {
        self.hover = hover;
        self
    }

    fn hover_over(mut self, area: Rect) -> Self {
        self.hover_area = Some(area);
        self
    }

    pub fn hit_area(&self) -> Rect {
        self.hover_area.unwrap_or(self.bounds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFill {
    Black,
    White,
}

/// Solid backing rectangle: photo borders and polaroid cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub fill: PanelFill,
    pub bounds: Rect,
    pub rotation: f32,
    pub z: i32,
}

impl Panel {
    fn black(bounds: Rect) -> Self {
        Self { fill: PanelFill::Black, bounds, rotation: 0.0, z: 10 }
    }

    fn white(bounds: Rect) -> Self {
        Self { fill: PanelFill::White, bounds, rotation: 0.0, z: 10 }
    }

    fn z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heading {
    pub text: &'static str,
    /// Text is centered horizontally in this box.
    pub bounds: Rect,
    pub size: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpreadLayout {
    pub page: Page,
    pub headings: Vec<Heading>,
    pub panels: Vec<Panel>,
    pub slots: Vec<ImageSlot>,
}

impl SpreadLayout {
    #[cfg(test)]
    pub fn photos(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().filter(|s| s.role == SlotRole::Photo).map(|s| s.asset)
    }

    pub fn assets(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().map(|s| s.asset)
    }
}

// --- Spread-local pixels, left page is x < 440; items may hang over the edges ---
pub fn spread(page: Page) -> SpreadLayout {
    match page {
        Page::One => page_one(),
        Page::Two => page_two(),
        Page::Three => page_three(),
    }
}

/// Every asset any spread or the book furniture references, deduplicated.
pub fn all_assets() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    let spreads = Page::ALL.map(spread);
    for asset in spreads.iter().flat_map(|s| s.assets()).chain(CHROME) {
        if !out.contains(&asset) {
            out.push(asset);
        }
    }
    out
}

const TITLE: &str = "GALLERY";

/// A photo sitting in decorative frame artwork. The whole group lifts on hover.
fn framed_photo(frame: &'static str, photo: &'static str, bounds: Rect, z: i32) -> [ImageSlot; 2] {
    let inner = Rect::new(
        bounds.x + bounds.width * 0.10,
        bounds.y + bounds.height * 0.08,
        bounds.width * 0.80,
        bounds.height * 0.65,
    );
    let lift = HoverEffect { scale: 1.05, raise: Some(50), ..HoverEffect::NONE };
    [
        ImageSlot::frame(frame, bounds).z(z).on_hover(lift),
        ImageSlot::photo(photo, inner)
            .z(z + 1)
            .on_hover(HoverEffect { zoom: 1.1, raise: Some(51), ..lift })
            .hover_over(bounds),
    ]
}

/// A photo with a black border of `border` pixels.
fn bordered(photo: &'static str, bounds: Rect, border: f32, z: i32) -> (Panel, ImageSlot) {
    (Panel::black(bounds).z(z), ImageSlot::photo(photo, bounds.inset(border)).z(z + 1))
}

fn page_one() -> SpreadLayout {
    let mut panels = Vec::new();
    let mut slots = Vec::new();

    // Left page: four framed photos scattered around the title
    slots.extend(framed_photo(FRAME_1, CYSEC, Rect::new(16.0, 128.0, 160.0, 208.0), 10));
    slots.extend(framed_photo(FRAME_2, EXPO_2024, Rect::new(200.0, 136.0, 160.0, 208.0), 10));
    slots.extend(framed_photo(FRAME_3, TECHNICAL_WRITING, Rect::new(32.0, 312.0, 176.0, 224.0), 20));
    slots.extend(framed_photo(FRAME_4, STORY, Rect::new(208.0, 332.0, 176.0, 224.0), 20));
    slots.push(ImageSlot::sticker(GALLERY_FLAG, Rect::new(311.0, 128.0, 64.0, 32.0)).z(20).on_hover(HoverEffect::grow(1.1)));
    slots.push(ImageSlot::sticker(GALLERY_HEART, Rect::new(217.0, 504.0, 40.0, 40.0)).z(20).on_hover(HoverEffect::tilt(1.1, 12.0)));
    slots.push(ImageSlot::sticker(GALLERY_STAR, Rect::new(28.0, 286.0, 48.0, 48.0)).z(20).on_hover(HoverEffect::tilt(1.1, -12.0)));

    // Right page, top: single photo in a thick cut frame
    panels.push(Panel::black(Rect::new(511.3, 54.5, 147.8, 147.8)).z(20));
    slots.push(
        ImageSlot::photo(CLUBCON, Rect::new(519.3, 62.5, 131.8, 131.8))
            .z(21)
            .on_hover(HoverEffect { duration: crate::constants::HOVER_ZOOM_DURATION, ..HoverEffect::zoom(1.1) }),
    );
    slots.push(ImageSlot::sticker(STAR_ICON, Rect::new(627.7, 41.5, 40.0, 40.0)).rotated(-12.0).on_hover(HoverEffect::grow(1.1)));

    // Right page, bottom: four photo collage
    panels.push(Panel::black(Rect::new(506.0, 336.0, 299.2, 228.0)).z(20));
    for (asset, cell) in [
        (CYSEC, Rect::new(513.0, 343.0, 156.9, 102.7)),
        (EXPO_2024, Rect::new(678.4, 343.0, 119.8, 102.7)),
        (TECHNICAL_WRITING, Rect::new(513.0, 450.0, 142.6, 107.0)),
        (STORY, Rect::new(641.3, 445.7, 156.9, 111.3)),
    ] {
        slots.push(ImageSlot::photo(asset, cell.inset(2.0)).z(22));
    }
    slots.push(ImageSlot::sticker(MUSHROOM, Rect::new(784.3, 506.9, 48.0, 48.0)).rotated(8.0).on_hover(HoverEffect::tilt(1.0, 6.0)));

    // Film strip hanging over the top edge
    slots.push(ImageSlot::overlay(FILM_STRIP, Rect::new(726.0, -150.0, 184.8, 690.0)).z(30).rotated(6.0));
    slots.push(ImageSlot::sticker(PLANE, Rect::new(843.1, 319.2, 64.0, 64.0)).rotated(18.0).on_hover(HoverEffect::drift(12.0, -8.0)));

    SpreadLayout {
        page: Page::One,
        headings: vec![Heading { text: TITLE, bounds: Rect::new(16.0, 32.0, 408.0, 40.0), size: 36 }],
        panels,
        slots,
    }
}

fn page_two() -> SpreadLayout {
    let mut panels = Vec::new();
    let mut slots = Vec::new();

    // Left page: big photo, then the wide collage strip
    let (panel, photo) = bordered(EXPO_2024, Rect::new(-22.0, 0.0, 352.0, 330.0), 4.0, 10);
    panels.push(panel);
    slots.push(photo);
    slots.push(ImageSlot::sticker(PLANE, Rect::new(-46.0, -24.0, 56.0, 56.0)).rotated(-12.0));
    slots.push(ImageSlot::sticker(MUSHROOM, Rect::new(306.0, 306.0, 48.0, 48.0)).rotated(8.0));
    slots.push(ImageSlot::overlay(COLLAGE_STRIP, Rect::new(-150.0, 370.0, 652.0, 217.3)));
    slots.push(ImageSlot::sticker(FLAG, Rect::new(-55.0, 564.0, 64.0, 40.0)));

    // Right page: stacked pair next to a film strip
    for (asset, bounds) in [
        (CYSEC, Rect::new(511.0, 84.0, 227.4, 135.5)),
        (TECHNICAL_WRITING, Rect::new(511.0, 235.5, 227.4, 135.5)),
    ] {
        let (panel, photo) = bordered(asset, bounds, 4.0, 10);
        panels.push(panel);
        slots.push(photo);
    }
    slots.push(ImageSlot::sticker(LEAF_ICON, Rect::new(493.0, 204.5, 40.0, 40.0)).rotated(-8.0));
    slots.push(ImageSlot::overlay(FILM_STRIP_VERTICAL, Rect::new(762.4, 84.0, 149.0, 287.0)).z(30));

    // Right page, bottom pair sharing one border
    panels.push(Panel::black(Rect::new(511.0, 403.0, 392.0, 143.5)));
    slots.push(ImageSlot::photo(STORY, Rect::new(515.0, 407.0, 190.0, 135.5)).z(11));
    slots.push(ImageSlot::photo(CLUBCON, Rect::new(709.0, 407.0, 190.0, 135.5)).z(11));
    slots.push(ImageSlot::sticker(STAR_ICON, Rect::new(879.0, 387.0, 40.0, 40.0)).rotated(12.0));
    slots.push(ImageSlot::sticker(HEART, Rect::new(495.0, 530.5, 32.0, 32.0)));

    SpreadLayout {
        page: Page::Two,
        headings: vec![Heading { text: TITLE, bounds: Rect::new(464.0, 24.0, 392.0, 36.0), size: 30 }],
        panels,
        slots,
    }
}

const POLAROID_TILT: [f32; 4] = [-8.0, 4.0, -6.0, 7.0];

fn page_three() -> SpreadLayout {
    let mut panels = Vec::new();
    let mut slots = Vec::new();

    // Left page: 2x2 grid
    for (i, asset) in [CYSEC, EXPO_2024, TECHNICAL_WRITING, STORY].into_iter().enumerate() {
        let column = (i % 2) as f32;
        let row = (i / 2) as f32;
        let cell = Rect::new(8.8 + column * 184.0, 125.0 + row * 205.0, 160.0, 181.0);
        let (panel, photo) = bordered(asset, cell, 4.0, 10);
        panels.push(panel);
        slots.push(photo);
    }

    // Polaroid stack, alternating offsets
    for (i, asset) in [CLUBCON, CYSEC, EXPO_2024, TECHNICAL_WRITING].into_iter().enumerate() {
        let x = if i % 2 == 0 { 262.5 } else { 271.7 };
        let card = Rect::new(x, 108.0 + i as f32 * 86.4, 131.0, 151.0);
        let tilt = POLAROID_TILT[i];
        // Each card covers the one before it, photo included
        let z = 20 + 2 * i as i32;
        panels.push(Panel::white(card).z(z).rotated(tilt));
        slots.push(
            ImageSlot::photo(asset, Rect::new(card.x + 8.0, card.y + 8.0, 115.0, 115.0))
                .z(z + 1)
                .rotated(tilt),
        );
    }
    slots.push(ImageSlot::sticker(CAMERA, Rect::new(4.4, 511.0, 48.0, 48.0)).on_hover(HoverEffect::grow(1.1)));

    // Right page: two big photos
    for (asset, bounds) in [
        (STORY, Rect::new(506.0, 48.0, 387.2, 264.0)),
        (CLUBCON, Rect::new(506.0, 324.0, 387.2, 252.0)),
    ] {
        let (panel, photo) = bordered(asset, bounds, 4.0, 10);
        panels.push(panel);
        slots.push(photo);
    }
    slots.push(ImageSlot::sticker(FLAG, Rect::new(858.0, 42.0, 48.0, 32.0)).on_hover(HoverEffect::grow(1.1)));

    // White strip laid across the middle
    panels.push(Panel::white(Rect::new(593.2, 119.6, 204.0, 360.8)).z(30));
    for (i, asset) in [CYSEC, EXPO_2024, TECHNICAL_WRITING, STORY].into_iter().enumerate() {
        slots.push(ImageSlot::photo(asset, Rect::new(605.2, 143.6 + i as f32 * 81.2, 180.0, 69.2)).z(31));
    }
    slots.push(ImageSlot::sticker(FLAG, Rect::new(491.9, 556.0, 48.0, 32.0)).on_hover(HoverEffect::grow(1.1)));
    slots.push(ImageSlot::sticker(MUSHROOM, Rect::new(850.5, 528.0, 48.0, 48.0)).rotated(6.0).on_hover(HoverEffect::tilt(1.0, 6.0)));

    SpreadLayout {
        page: Page::Three,
        headings: vec![Heading { text: TITLE, bounds: Rect::new(0.5, 24.0, 392.0, 36.0), size: 30 }],
        panels,
        slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_one_shows_nine_photos() {
        let photos: Vec<_> = spread(Page::One).photos().collect();
        assert_eq!(
            photos,
            vec![
                CYSEC,
                EXPO_2024,
                TECHNICAL_WRITING,
                STORY,
                CLUBCON,
                CYSEC,
                EXPO_2024,
                TECHNICAL_WRITING,
                STORY,
            ]
        );
    }

    #[test]
    fn page_two_shows_five_photos() {
        let photos: Vec<_> = spread(Page::Two).photos().collect();
        assert_eq!(photos, vec![EXPO_2024, CYSEC, TECHNICAL_WRITING, STORY, CLUBCON]);
    }

    #[test]
    fn page_three_shows_fourteen_photos() {
        let layout = spread(Page::Three);
        assert_eq!(layout.photos().count(), 14);
        assert_eq!(layout.photos().filter(|a| *a == CYSEC).count(), 3);
    }

    #[test]
    fn every_spread_has_a_title() {
        for page in Page::ALL {
            let layout = spread(page);
            assert_eq!(layout.page, page);
            assert_eq!(layout.headings.len(), 1);
            assert_eq!(layout.headings[0].text, "GALLERY");
        }
    }

    #[test]
    fn lookups_are_stable() {
        for page in Page::ALL {
            assert_eq!(spread(page), spread(page));
        }
    }

    #[test]
    fn framed_photo_sits_inside_and_above_its_frame() {
        let layout = spread(Page::One);
        let frame = layout.slots.iter().find(|s| s.asset == FRAME_1).expect("frame1");
        let photo = layout.slots.iter().find(|s| s.asset == CYSEC).expect("cysec");
        assert!(photo.z > frame.z);
        assert!(frame.bounds.contains(Point::new(photo.bounds.x, photo.bounds.y)));
        assert_eq!(photo.hit_area(), frame.bounds);
        assert_eq!(photo.hover.raise, Some(51));
    }

    #[test]
    fn polaroids_follow_their_tilts() {
        let layout = spread(Page::Three);
        let cards: Vec<f32> = layout
            .panels
            .iter()
            .filter(|p| p.fill == PanelFill::White && p.z < 30)
            .map(|p| p.rotation)
            .collect();
        assert_eq!(cards, POLAROID_TILT.to_vec());
    }

    #[test]
    fn asset_list_is_deduplicated_and_complete() {
        let all = all_assets();
        for asset in CHROME {
            assert!(all.contains(&asset));
        }
        assert_eq!(all.iter().filter(|a| **a == CYSEC).count(), 1);
        assert!(all.contains(&PLANE));
    }

    #[test]
    fn rect_helpers() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
        assert_eq!(r.inset(5.0), Rect::new(15.0, 25.0, 90.0, 40.0));
        assert_eq!(r.scale_about_center(2.0), Rect::new(-40.0, -5.0, 200.0, 100.0));
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(!r.contains(Point::new(111.0, 20.0)));
    }
}
