use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the page framebuffer
pub const RENDER_HEIGHT: i32 = 1080;          // Height of one section (one viewport)
pub const FPS: u32 = 60;                      // Frames per second

pub const SETTLE_DELAY: Duration = Duration::from_millis(300);        // Debounce after a user slide
pub const TEXT_TICK_PERIOD: Duration = Duration::from_millis(2500);   // Tagline auto-advance period
pub const TEXT_SCROLL_DURATION: Duration = Duration::from_millis(700); // Tagline vertical slide

pub const AT_TOP_THRESHOLD: f32 = 50.0;       // Logo shown below this scroll (pixels)
pub const VISIBILITY_THRESHOLD: f32 = 0.3;    // Visible fraction that shows indicators
pub const VISIBILITY_ROOT_MARGIN: f32 = 0.1;  // Viewport shrink, top and bottom
