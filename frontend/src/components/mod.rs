pub mod back_to_top;
pub mod carousel;
pub mod count_up;
pub mod in_view;
pub mod language_toggle;
pub mod loading_screen;
pub mod logo_slider;
pub mod mobile_menu;
pub mod navbar;

/// Tick length for timer-driven animations, roughly one frame at 60 Hz.
pub const FRAME_MS: u32 = 16;
