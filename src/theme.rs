use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    /// Reads the OS preference. Detection errors and unspecified modes count as light.
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => ColorScheme::Dark,
            Ok(_) => ColorScheme::Light,
            Err(e) => {
                tracing::debug!(error = %e, "color scheme detection failed");
                ColorScheme::Light
            }
        }
    }
}

/// Theme selection from settings and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

pub type ListenerId = u64;

pub type SchemeListener = Box<dyn FnMut(ColorScheme)>;

/// Host capability reporting the preferred color scheme.
pub trait ThemePort {
    fn preference(&self) -> ColorScheme;

    fn subscribe(&mut self, listener: SchemeListener) -> ListenerId;

    /// Returns `false` when `id` was not subscribed.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;

    /// Per-frame hook for ports that have to look for changes themselves.
    fn refresh(&mut self, _dt: f32) {}
}

/// Listener bookkeeping shared by the port implementations.
#[derive(Default)]
pub struct Listeners {
    next_id: ListenerId,
    entries: Vec<(ListenerId, SchemeListener)>,
}

impl Listeners {
    pub fn add(&mut self, listener: SchemeListener) -> ListenerId {
        self.next_id += 1;
        self.entries.push((self.next_id, listener));
        self.next_id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, scheme: ColorScheme) {
        for (_, listener) in self.entries.iter_mut() {
            listener(scheme);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

const MIN_POLL_SECONDS: f32 = 0.05;

// --- OS preference, sampled on a background thread ---
pub struct SystemTheme {
    current: ColorScheme,
    updates: Receiver<ColorScheme>,
    listeners: Listeners,
}

impl SystemTheme {
    pub fn new(poll_interval: f32) -> Self {
        let (sender, updates) = mpsc::channel();
        let interval = Duration::try_from_secs_f32(poll_interval.max(MIN_POLL_SECONDS))
            .unwrap_or(Duration::from_secs(1));

        // Detection can block (D-Bus on Linux), keep it off the frame loop.
        // The thread ends once the port, and with it the receiver, is dropped.
        let spawned = thread::Builder::new().name("theme-detect".into()).spawn(move || {
            loop {
                thread::sleep(interval);
                if sender.send(ColorScheme::detect()).is_err() {
                    break;
                }
            }
        });
        if let Err(e) = spawned {
            tracing::warn!(error = %e, "could not start color scheme detection, scheme stays fixed");
        }

        Self::with_updates(ColorScheme::detect(), updates)
    }

    fn with_updates(current: ColorScheme, updates: Receiver<ColorScheme>) -> Self {
        Self { current, updates, listeners: Listeners::default() }
    }

    /// Apply the samples that arrived since the last call. Never blocks.
    pub fn poll(&mut self) {
        while let Ok(scheme) = self.updates.try_recv() {
            self.apply(scheme);
        }
    }

    fn apply(&mut self, scheme: ColorScheme) {
        if scheme != self.current {
            tracing::info!(?scheme, "system color scheme changed");
            self.current = scheme;
            self.listeners.notify(scheme);
        }
    }
}

impl ThemePort for SystemTheme {
    fn preference(&self) -> ColorScheme {
        self.current
    }

    fn subscribe(&mut self, listener: SchemeListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn refresh(&mut self, _dt: f32) {
        self.poll();
    }
}

/// A scheme forced by configuration. Never changes.
pub struct FixedTheme {
    scheme: ColorScheme,
    listeners: Listeners,
}

impl FixedTheme {
    pub fn new(scheme: ColorScheme) -> Self {
        Self { scheme, listeners: Listeners::default() }
    }
}

impl ThemePort for FixedTheme {
    fn preference(&self) -> ColorScheme {
        self.scheme
    }

    fn subscribe(&mut self, listener: SchemeListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

/// Port for the configured mode.
pub fn port_for(mode: ThemeMode, poll_interval: f32) -> Box<dyn ThemePort> {
    match mode {
        ThemeMode::Light => Box::new(FixedTheme::new(ColorScheme::Light)),
        ThemeMode::Dark => Box::new(FixedTheme::new(ColorScheme::Dark)),
        ThemeMode::System => Box::new(SystemTheme::new(poll_interval)),
    }
}

/// Mirrors a port's preference into a flag owned by the gallery.
#[derive(Debug, Default)]
pub struct ThemeWatcher {
    scheme: Rc<Cell<ColorScheme>>,
    listener: Option<ListenerId>,
}

impl ThemeWatcher {
    pub fn mount(&mut self, port: &mut dyn ThemePort) {
        if self.is_mounted() {
            return;
        }
        self.scheme.set(port.preference());
        let scheme = Rc::clone(&self.scheme);
        self.listener = Some(port.subscribe(Box::new(move |s| scheme.set(s))));
    }

    pub fn unmount(&mut self, port: &mut dyn ThemePort) {
        if let Some(id) = self.listener.take() {
            port.unsubscribe(id);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme.get()
    }

    #[cfg(test)]
    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }
}

/// Page colors for a scheme, as `(r, g, b)` plus grid opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub background: (u8, u8, u8),
    pub grid_opacity: f32,
}

impl Backdrop {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        if scheme.is_dark() {
            // slate-900
            Self { background: (0x0f, 0x17, 0x2a), grid_opacity: 0.10 }
        } else {
            // blue-100
            Self { background: (0xdb, 0xea, 0xfe), grid_opacity: 0.20 }
        }
    }
}
