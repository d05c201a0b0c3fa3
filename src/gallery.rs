//! The gallery book: page selection, page turns, floating clouds, theme and
//! hover state, assembled into a [`Scene`] every frame.

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::*;
use crate::float::{DriftingOrnament, CLOUDS};
use crate::hover::{approach, HoverTracker};
use crate::layout::{self, assets, Fit, Point, Rect, SpreadLayout};
use crate::page::{Page, PageSelector, PAGE_COUNT};
use crate::scene::{project_turn, Layer, Node, NodeKind, Scene};
use crate::theme::{Backdrop, ThemePort, ThemeWatcher};
use crate::ticker::{TickSubscription, Ticker};
use crate::transition::PageTurn;

const TAB_SIZE: f32 = 96.0;
const TAB_X: f32 = NOTEBOOK_X + 956.8;
const TAB_Y: f32 = NOTEBOOK_Y + 84.0;
const TAB_STEP: f32 = TAB_SIZE + 16.0;
const TAB_SELECTED_SHIFT: f32 = 16.0;
const TAB_HOVER_SHIFT: f32 = 8.0;

/// Resting bounds of the tab for `page`, in render space.
pub fn tab_bounds(page: Page) -> Rect {
    Rect::new(TAB_X, TAB_Y + page.index() as f32 * TAB_STEP, TAB_SIZE, TAB_SIZE)
}

/// Part of a tab sticking out from under the notebook, the only clickable part.
fn tab_hit_area(page: Page, shift: f32) -> Rect {
    let notebook_right = NOTEBOOK_X + NOTEBOOK_WIDTH;
    let tab = tab_bounds(page).translate(shift, 0.0);
    let right = tab.x + tab.width;
    Rect::new(notebook_right, tab.y, (right - notebook_right).max(0.0), tab.height)
}

pub struct Gallery {
    spreads: Vec<SpreadLayout>,
    selector: PageSelector,
    turn: PageTurn,

    ornaments: Vec<Rc<RefCell<DriftingOrnament>>>,
    subscriptions: Vec<TickSubscription>,
    theme: ThemeWatcher,

    hover: HoverTracker,
    hover_page: Page,
    tab_shift: [f32; PAGE_COUNT],
    pointer: Option<Point>,
}

impl Gallery {
    pub fn new(initial: Page) -> Self {
        Self {
            spreads: Page::ALL.iter().map(|p| layout::spread(*p)).collect(),
            selector: PageSelector::new(initial),
            turn: PageTurn::new(initial),
            ornaments: CLOUDS
                .iter()
                .map(|c| Rc::new(RefCell::new(DriftingOrnament::new(*c))))
                .collect(),
            subscriptions: Vec::new(),
            theme: ThemeWatcher::default(),
            hover: HoverTracker::default(),
            hover_page: initial,
            tab_shift: Page::ALL.map(|p| if p == initial { TAB_SELECTED_SHIFT } else { 0.0 }),
            pointer: None,
        }
    }

    /// Start the cloud drift and begin following the color scheme.
    pub fn mount(&mut self, ticker: &mut Ticker, theme: &mut dyn ThemePort) {
        if !self.is_mounted() {
            self.subscriptions = self
                .ornaments
                .iter()
                .map(|o| ticker.subscribe(o.clone()))
                .collect();
        }
        self.theme.mount(theme);
        tracing::debug!(clouds = self.subscriptions.len(), scheme = ?self.theme.scheme(), "gallery mounted");
    }

    /// Cancel every tick subscription and stop following the color scheme.
    pub fn unmount(&mut self, theme: &mut dyn ThemePort) {
        for subscription in self.subscriptions.drain(..) {
            subscription.cancel();
        }
        self.theme.unmount(theme);
        tracing::debug!("gallery unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.subscriptions.iter().any(TickSubscription::is_active)
    }

    /// Spring the opening page in instead of showing it flat.
    pub fn play_intro(&mut self) {
        self.turn.play_intro();
    }

    /// Selected page. May differ from the page on screen while a turn plays.
    pub fn current_page(&self) -> Page {
        self.selector.current()
    }

    pub fn shown_page(&self) -> Page {
        self.turn.shown()
    }

    #[cfg(test)]
    pub fn is_turning(&self) -> bool {
        !self.turn.is_resting()
    }

    #[cfg(test)]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Select page `number`; out-of-range numbers clamp to the nearest page.
    pub fn select_page(&mut self, number: i64) -> bool {
        if !self.selector.select(number) {
            return false;
        }
        let page = self.selector.current();
        tracing::info!(%page, "turning to page");
        self.turn.request(page)
    }

    /// Select the neighbouring page, staying put at either cover.
    pub fn step_page(&mut self, forward: bool) -> bool {
        let current = self.current_page();
        let target = if forward { current.next() } else { current.previous() };
        self.select_page(i64::from(target.number()))
    }

    /// Pointer position in render space, `None` when outside the window.
    pub fn pointer_moved(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    /// Handle a click at `p`. Returns `true` when it selected a page.
    pub fn click(&mut self, p: Point) -> bool {
        let hit = Page::ALL
            .into_iter()
            .find(|page| tab_hit_area(*page, self.tab_shift[page.index()]).contains(p));
        match hit {
            Some(page) => self.select_page(i64::from(page.number())),
            None => false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.turn.update(dt);

        let shown = self.turn.shown();
        if shown != self.hover_page {
            self.hover_page = shown;
            self.hover.reset(self.spreads[shown.index()].slots.len());
        }
        // Hit areas are flat, so nothing reacts while the page is squashed
        let local = self
            .pointer
            .filter(|_| self.turn.is_resting())
            .map(|p| Point::new(p.x - SPREAD_X, p.y - SPREAD_Y));
        self.hover.update(&self.spreads[shown.index()].slots, local, dt);

        let current = self.selector.current();
        for page in Page::ALL {
            let shift = self.tab_shift[page.index()];
            let target = if page == current {
                TAB_SELECTED_SHIFT
            } else if self.pointer.is_some_and(|p| tab_hit_area(page, shift).contains(p)) {
                TAB_HOVER_SHIFT
            } else {
                0.0
            };
            let span = TAB_SELECTED_SHIFT;
            self.tab_shift[page.index()] = approach(shift / span, target / span, dt, HOVER_DURATION) * span;
        }
    }

    /// Current top-left corner of each cloud, drift and bob included.
    pub fn cloud_positions(&self) -> Vec<Point> {
        self.ornaments
            .iter()
            .map(|o| {
                let o = o.borrow();
                Point::new(o.left(), o.top() + o.bob())
            })
            .collect()
    }

    pub fn scene(&self) -> Scene {
        let scheme = self.theme.scheme();
        let mut nodes = Vec::new();

        for pos in self.cloud_positions() {
            let mut cloud = Node::image(
                Layer::Cloud,
                assets::CLOUD,
                Fit::Contain,
                Rect::new(pos.x, pos.y, CLOUD_WIDTH, CLOUD_HEIGHT),
            );
            cloud.opacity = CLOUD_OPACITY;
            cloud.z = 5;
            nodes.push(cloud);
        }

        for page in Page::ALL {
            let bounds = tab_bounds(page).translate(self.tab_shift[page.index()], 0.0);
            nodes.push(Node::image(Layer::Tab, assets::TAB_ARROW, Fit::Contain, bounds));
        }

        let mut notebook = Node::image(
            Layer::Notebook,
            assets::NOTEBOOK,
            Fit::Contain,
            Rect::new(NOTEBOOK_X, NOTEBOOK_Y, NOTEBOOK_WIDTH, NOTEBOOK_HEIGHT),
        );
        notebook.z = 10;
        nodes.push(notebook);

        nodes.extend(self.spread_nodes());

        Scene {
            scheme,
            backdrop: Backdrop::for_scheme(scheme),
            page: self.turn.shown(),
            nodes,
        }
    }

    fn spread_nodes(&self) -> Vec<Node> {
        let visual = self.turn.visual();
        let spread = &self.spreads[visual.page.index()];
        let to_render = |r: Rect| project_turn(r.translate(SPREAD_X, SPREAD_Y), SPREAD_X, visual.rotate_y);
        let mut nodes = Vec::with_capacity(spread.panels.len() + spread.slots.len() + spread.headings.len());

        for panel in &spread.panels {
            nodes.push(Node {
                layer: Layer::Spread,
                kind: NodeKind::Panel { fill: panel.fill },
                bounds: to_render(panel.bounds),
                rotation: panel.rotation,
                opacity: visual.opacity,
                z: panel.z,
            });
        }

        for (i, slot) in spread.slots.iter().enumerate() {
            let state = self.hover.state(i);
            let t = state.eased_transform();
            let hover = slot.hover;
            let bounds = slot
                .bounds
                .scale_about_center(1.0 + (hover.scale - 1.0) * t)
                .translate(hover.offset.x * t, hover.offset.y * t);
            let z = match hover.raise {
                Some(raised) if state.transform > 0.0 => raised,
                _ => slot.z,
            };
            nodes.push(Node {
                layer: Layer::Spread,
                kind: NodeKind::Image {
                    asset: slot.asset,
                    fit: slot.fit,
                    zoom: 1.0 + (hover.zoom - 1.0) * state.eased_zoom(),
                },
                bounds: to_render(bounds),
                rotation: slot.rotation + hover.rotation * t,
                opacity: visual.opacity,
                z,
            });
        }

        for heading in &spread.headings {
            nodes.push(Node {
                layer: Layer::Spread,
                kind: NodeKind::Text { text: heading.text, size: heading.size },
                bounds: to_render(heading.bounds),
                rotation: 0.0,
                opacity: visual.opacity,
                z: 0,
            });
        }

        // Stable: equal z keeps declaration order
        nodes.sort_by_key(|n| n.z);
        nodes
    }
}
