pub const RENDER_WIDTH: i32 = 1280;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 800;           // Height of the render texture
pub const FPS: u32 = 60;                      // Nominal display refresh rate
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

// Notebook background, centered in the render texture
pub const NOTEBOOK_WIDTH: f32 = 1000.0;
pub const NOTEBOOK_HEIGHT: f32 = 700.0;
pub const NOTEBOOK_X: f32 = (RENDER_WIDTH as f32 - NOTEBOOK_WIDTH) * 0.5;
pub const NOTEBOOK_Y: f32 = (RENDER_HEIGHT as f32 - NOTEBOOK_HEIGHT) * 0.5;

// Double page spread inside the notebook (percentage padding resolves against the width)
pub const SPREAD_X: f32 = NOTEBOOK_X + 60.0;
pub const SPREAD_Y: f32 = NOTEBOOK_Y + 50.0;
pub const SPREAD_WIDTH: f32 = 880.0;
pub const SPREAD_HEIGHT: f32 = 600.0;

pub const PAGE_EXIT_DURATION: f32 = 0.4;      // Outgoing page rotate + fade (seconds)
pub const PAGE_ENTER_DURATION: f32 = 0.6;     // Incoming page fade in (seconds)
pub const PAGE_TURN_ANGLE: f32 = 90.0;        // Degrees around the left edge

pub const SPRING_STIFFNESS: f32 = 50.0;
pub const SPRING_DAMPING: f32 = 10.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 0.5;       // Degrees
pub const SPRING_REST_SPEED: f32 = 2.0;       // Degrees per second

pub const HOVER_DURATION: f32 = 0.3;          // Scale / raise / tab slide (seconds)
pub const HOVER_ZOOM_DURATION: f32 = 0.5;     // Photo zoom inside its frame (seconds)
pub const HOVER_SLIDE_DURATION: f32 = 0.7;    // Paper plane drift (seconds)

pub const CLOUD_WIDTH: f32 = 200.0;
pub const CLOUD_HEIGHT: f32 = 120.0;
pub const CLOUD_OPACITY: f32 = 0.8;
pub const CLOUD_BOB_HEIGHT: f32 = 10.0;       // Extra bob on top of the sine drift (pixels)
pub const CLOUD_BOB_PERIOD: f32 = 3.0;        // Seconds for 0 -> 10 -> 0

pub const GRID_SPACING: i32 = 40;             // Background grid cell (pixels)
