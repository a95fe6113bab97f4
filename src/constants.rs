//! Page tuning constants: timings, camera, glitch parameters and the DOM /
//! asset contract.
//!
//! These constants express intended behavior and keep magic numbers out of
//! the code. The scroll/rotation curves have their own constants next to the
//! pure functions in `core`.

// Hidden-frame flash timing
pub const FLASH_TOGGLE_MS: i32 = 42;
pub const FLASH_COOLDOWN_MS: i32 = 10_000;
pub const FLASH_COUNT: u32 = 1; // full on/off cycles per flash

// VHS overlay
pub const VHS_REDRAW_MS: i32 = 50; // post-transition redraw period
pub const SCANLINE_PITCH_PX: u32 = 3;
pub const SCANLINE_ALPHA: f32 = 0.1; // scaled by intensity
pub const VHS_FADE_TRANSITION: &str = "opacity 0.5s linear";
pub const TRANSITION_FADE_TRANSITION: &str = "opacity 2s linear";

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_Z_NEAR: f32 = 0.1;
pub const CAMERA_Z_FAR: f32 = 1000.0;

// Initial depth offset of the tape inside its cover
pub const TAPE_Z_OFFSET: f32 = -0.5;

// Glitch post pass (continuous, full-screen)
pub const GLITCH_LOOP_SEC: f32 = 0.6;
pub const GLITCH_SHAKE_VELOCITY: f32 = 15.0; // shake cycles per loop
pub const GLITCH_SHAKE_AMPLITUDE: f32 = 0.005; // of the screen, per axis
pub const GLITCH_SLICE_MIN_HEIGHT: f32 = 0.002;
pub const GLITCH_SLICE_MAX_HEIGHT: f32 = 0.01;

// DOM contract (see web/index.html)
pub const GLITCH_WRAPPER_SELECTOR: &str = ".glitch-wrapper";
pub const FIRST_RULE_SELECTOR: &str = ".first-rule-is";
pub const ANSWER_BUTTON_SELECTOR: &str = ".answer-button";
pub const TAPE_BACKGROUND_SELECTOR: &str = ".tape-background";
pub const HIDDEN_FRAMES_CONTAINER_ID: &str = "hidden-frames-container";
pub const HIDDEN_FRAME_CLASS: &str = "hidden-frame";
pub const HIDDEN_FRAME_VISIBLE_CLASS: &str = "visible";

// Asset paths, relative to the served page
pub const MODEL_COVER_URL: &str = "models/cover.glb";
pub const MODEL_TAPE_URL: &str = "models/tape.glb";
pub const HIDDEN_FRAME_IMAGES: [&str; 3] = [
    "images/shot_01.png",
    "images/shot_02.png",
    "images/shot_03.png",
];
