use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Refreshes since the ticker was created, starting at 1.
    pub frame: u64,
    pub dt: f32,
}

pub trait TickListener {
    fn on_tick(&mut self, tick: &Tick);
}

struct Entry {
    alive: Rc<Cell<bool>>,
    listener: Rc<RefCell<dyn TickListener>>,
}

// --- One tick per display refresh; a listener is ticked while its handle lives ---
#[derive(Default)]
pub struct Ticker {
    frame: u64,
    entries: Vec<Entry>,
}

/// Handle to a live subscription.
#[must_use = "dropping the subscription cancels it"]
#[derive(Debug)]
pub struct TickSubscription {
    alive: Rc<Cell<bool>>,
}

impl TickSubscription {
    pub fn is_active(&self) -> bool {
        self.alive.get()
    }

    pub fn cancel(self) {}
}

impl Drop for TickSubscription {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Rc<RefCell<dyn TickListener>>) -> TickSubscription {
        let alive = Rc::new(Cell::new(true));
        self.entries.push(Entry { alive: Rc::clone(&alive), listener });
        TickSubscription { alive }
    }

    pub fn active(&self) -> usize {
        self.entries.iter().filter(|e| e.alive.get()).count()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    // Returns the number of listeners notified
    pub fn tick(&mut self, dt: f32) -> usize {
        self.entries.retain(|e| e.alive.get());
        self.frame += 1;
        let tick = Tick { frame: self.frame, dt };
        for entry in &self.entries {
            // A listener may cancel another one from inside its callback
            if entry.alive.get() {
                entry.listener.borrow_mut().on_tick(&tick);
            }
        }
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        ticks: u32,
        last_frame: u64,
    }

    impl TickListener for Counter {
        fn on_tick(&mut self, tick: &Tick) {
            self.ticks += 1;
            self.last_frame = tick.frame;
        }
    }

    #[test]
    fn listeners_receive_every_tick() {
        let mut ticker = Ticker::new();
        let counter = Rc::new(RefCell::new(Counter::default()));
        let _sub = ticker.subscribe(counter.clone());

        for _ in 0..5 {
            ticker.tick(1.0 / 60.0);
        }
        assert_eq!(counter.borrow().ticks, 5);
        assert_eq!(counter.borrow().last_frame, 5);
    }

    #[test]
    fn cancelled_listener_gets_no_more_ticks() {
        let mut ticker = Ticker::new();
        let counter = Rc::new(RefCell::new(Counter::default()));
        let sub = ticker.subscribe(counter.clone());

        ticker.tick(1.0 / 60.0);
        sub.cancel();
        assert_eq!(ticker.active(), 0);

        assert_eq!(ticker.tick(1.0 / 60.0), 0);
        assert_eq!(counter.borrow().ticks, 1);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let mut ticker = Ticker::new();
        let counter = Rc::new(RefCell::new(Counter::default()));
        {
            let sub = ticker.subscribe(counter.clone());
            assert!(sub.is_active());
            ticker.tick(1.0 / 60.0);
        }
        ticker.tick(1.0 / 60.0);
        assert_eq!(counter.borrow().ticks, 1);
    }

    #[test]
    fn independent_subscriptions() {
        let mut ticker = Ticker::new();
        let a = Rc::new(RefCell::new(Counter::default()));
        let b = Rc::new(RefCell::new(Counter::default()));
        let sub_a = ticker.subscribe(a.clone());
        let _sub_b = ticker.subscribe(b.clone());

        ticker.tick(1.0 / 60.0);
        drop(sub_a);
        assert_eq!(ticker.active(), 1);
        ticker.tick(1.0 / 60.0);

        assert_eq!(a.borrow().ticks, 1);
        assert_eq!(b.borrow().ticks, 2);
        assert_eq!(ticker.frame(), 2);
    }
}
