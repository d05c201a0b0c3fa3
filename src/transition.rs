use raylib::prelude::*;

use crate::constants::*;
use crate::page::Page;
use crate::state::TurnState;

/// What the page region should look like this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageVisual {
    pub page: Page,
    /// Rotation around the vertical axis through the spread's left edge (degrees).
    pub rotate_y: f32,
    pub opacity: f32,
}

/// Damped spring integrated with small fixed substeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    stiffness: f32,
    damping: f32,
    mass: f32,
}

const SPRING_SUBSTEP: f32 = 1.0 / 600.0;

impl Spring {
    pub fn new(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }

    /// Advance the spring towards `target` by `dt` seconds.
    pub fn step(&mut self, dt: f32, target: f32) -> f32 {
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP);
            let force = -self.stiffness * (self.position - target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        self.position
    }

    pub fn at_rest(&self, target: f32) -> bool {
        (self.position - target).abs() < SPRING_REST_DELTA && self.velocity.abs() < SPRING_REST_SPEED
    }
}

pub struct PageTurn {
    shown: Page,
    target: Page,
    state: TurnState,

    timer: f32,
    angle: f32,
    opacity: f32,

    tween_exit_angle: ease::Tween,
    tween_exit_opacity: ease::Tween,
    spring: Spring,
}

impl PageTurn {
    pub fn new(page: Page) -> Self {
        Self {
            shown: page,
            target: page,
            state: TurnState::Resting,
            timer: 0.0,
            angle: 0.0,
            opacity: 1.0,
            tween_exit_angle: ease::Tween::new(ease::cubic_out, 0.0, PAGE_TURN_ANGLE, PAGE_EXIT_DURATION),
            tween_exit_opacity: ease::Tween::new(ease::cubic_out, 1.0, 0.0, PAGE_EXIT_DURATION),
            spring: Spring::new(-PAGE_TURN_ANGLE),
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Page currently on screen (possibly mid-animation).
    pub fn shown(&self) -> Page {
        self.shown
    }

    pub fn is_resting(&self) -> bool {
        self.state == TurnState::Resting
    }

    pub fn visual(&self) -> PageVisual {
        PageVisual {
            page: self.shown,
            rotate_y: self.angle,
            opacity: self.opacity,
        }
    }

    /// Request `page`. Returns `false` when it is already the target.
    pub fn request(&mut self, page: Page) -> bool {
        if page == self.target {
            return false;
        }
        self.target = page;
        match self.state {
            TurnState::Resting | TurnState::Entering => self.start_exit(),
            // The exit keeps running, whichever page was asked for last enters.
            TurnState::Exiting => {}
        }
        true
    }

    /// Spring the shown page in from the edge, as on first appearance.
    pub fn play_intro(&mut self) {
        self.start_entry();
    }

    fn start_entry(&mut self) {
        self.spring = Spring::new(-PAGE_TURN_ANGLE);
        self.angle = -PAGE_TURN_ANGLE;
        self.opacity = 0.0;
        self.timer = 0.0;
        self.state = TurnState::Entering;
    }

    // Exit then entry. A request during the exit only swaps the entering page,
    // one during the entry turns the page back out from where it is.
    fn start_exit(&mut self) {
        self.tween_exit_angle = ease::Tween::new(ease::cubic_out, self.angle, PAGE_TURN_ANGLE, PAGE_EXIT_DURATION);
        self.tween_exit_opacity = ease::Tween::new(ease::cubic_out, self.opacity, 0.0, PAGE_EXIT_DURATION);
        self.timer = 0.0;
        self.state = TurnState::Exiting;
    }

    pub fn update(&mut self, dt: f32) {
        match self.state {
            TurnState::Resting => {}
            TurnState::Exiting => {
                self.timer += dt;
                self.angle = self.tween_exit_angle.apply(dt);
                self.opacity = self.tween_exit_opacity.apply(dt);

                if self.timer >= PAGE_EXIT_DURATION {
                    self.shown = self.target;
                    self.start_entry();
                }
            }
            TurnState::Entering => {
                self.timer += dt;
                self.angle = self.spring.step(dt, 0.0);
                self.opacity = (self.timer / PAGE_ENTER_DURATION).min(1.0);

                if self.timer >= PAGE_ENTER_DURATION && self.spring.at_rest(0.0) {
                    self.angle = 0.0;
                    self.opacity = 1.0;
                    self.timer = 0.0;
                    self.state = TurnState::Resting;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(turn: &mut PageTurn, seconds: f32) {
        let frames = (seconds / FRAME_TIME).ceil() as usize;
        for _ in 0..frames {
            turn.update(FRAME_TIME);
        }
    }

    #[test]
    fn resting_page_is_fully_visible() {
        let turn = PageTurn::new(Page::Two);
        let visual = turn.visual();
        assert_eq!(visual.page, Page::Two);
        assert_eq!(visual.rotate_y, 0.0);
        assert_eq!(visual.opacity, 1.0);
        assert!(turn.is_resting());
    }

    #[test]
    fn requesting_the_shown_page_does_nothing() {
        let mut turn = PageTurn::new(Page::One);
        assert!(!turn.request(Page::One));
        assert!(!turn.request(Page::One));
        assert_eq!(turn.state(), TurnState::Resting);
    }

    #[test]
    fn exit_rotates_out_then_entry_springs_in() {
        let mut turn = PageTurn::new(Page::One);
        assert!(turn.request(Page::Two));
        assert_eq!(turn.state(), TurnState::Exiting);

        run(&mut turn, 0.2);
        let halfway = turn.visual();
        assert_eq!(halfway.page, Page::One);
        assert!(halfway.rotate_y > 0.0 && halfway.rotate_y < PAGE_TURN_ANGLE);
        assert!(halfway.opacity < 1.0);

        run(&mut turn, 0.25);
        assert_eq!(turn.state(), TurnState::Entering);
        assert_eq!(turn.shown(), Page::Two);
        assert!(turn.visual().rotate_y < 0.0);

        run(&mut turn, 3.0);
        assert!(turn.is_resting());
        assert_eq!(turn.visual(), PageVisual { page: Page::Two, rotate_y: 0.0, opacity: 1.0 });
    }

    #[test]
    fn repeated_request_does_not_restart_the_exit() {
        let mut turn = PageTurn::new(Page::One);
        turn.request(Page::Three);
        run(&mut turn, 0.3);
        let before = turn.visual();
        assert!(!turn.request(Page::Three));
        assert_eq!(turn.visual(), before);
        assert_eq!(turn.state(), TurnState::Exiting);
    }

    #[test]
    fn last_request_during_exit_wins() {
        let mut turn = PageTurn::new(Page::One);
        turn.request(Page::Two);
        run(&mut turn, 0.1);
        turn.request(Page::Three);

        for _ in 0..240 {
            turn.update(FRAME_TIME);
            assert_ne!(turn.shown(), Page::Two);
        }
        assert!(turn.is_resting());
        assert_eq!(turn.shown(), Page::Three);
    }

    #[test]
    fn request_during_entry_turns_the_page_back_out() {
        let mut turn = PageTurn::new(Page::One);
        turn.request(Page::Two);
        run(&mut turn, 0.5);
        assert_eq!(turn.state(), TurnState::Entering);
        let entering = turn.visual();

        turn.request(Page::Three);
        assert_eq!(turn.state(), TurnState::Exiting);
        assert_eq!(turn.shown(), Page::Two);
        assert_eq!(turn.visual().rotate_y, entering.rotate_y);

        run(&mut turn, 4.0);
        assert!(turn.is_resting());
        assert_eq!(turn.shown(), Page::Three);
    }

    #[test]
    fn intro_springs_the_first_page_in() {
        let mut turn = PageTurn::new(Page::One);
        turn.play_intro();
        assert_eq!(turn.state(), TurnState::Entering);
        assert_eq!(turn.visual(), PageVisual { page: Page::One, rotate_y: -PAGE_TURN_ANGLE, opacity: 0.0 });

        run(&mut turn, 0.3);
        let visual = turn.visual();
        assert!(visual.rotate_y > -PAGE_TURN_ANGLE);
        assert!(visual.opacity > 0.0 && visual.opacity < 1.0);

        run(&mut turn, 3.0);
        assert!(turn.is_resting());
        assert_eq!(turn.visual(), PageVisual { page: Page::One, rotate_y: 0.0, opacity: 1.0 });
    }

    #[test]
    fn spring_settles_with_small_overshoot() {
        let mut spring = Spring::new(-PAGE_TURN_ANGLE);
        let mut peak = f32::MIN;
        for _ in 0..180 {
            peak = peak.max(spring.step(FRAME_TIME, 0.0));
        }
        assert!(spring.at_rest(0.0));
        assert!(peak > 0.0, "underdamped spring should overshoot");
        assert!(peak < 10.0, "overshoot too large: {peak}");
    }
}
