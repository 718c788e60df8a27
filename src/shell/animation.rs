//! Tick-driven animations: the loading spinner and the result highlight
//!
//! Both advance only when the UI loop calls `tick`, one step per
//! `FRAME_INTERVAL`, and stop by being disabled rather than interrupted.

use std::fmt;
use std::time::Duration;

/// Interval between animation frames
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Degrees the spinner arc advances per frame
pub const SPINNER_STEP_DEGREES: u16 = 12;

/// Sweep of the spinner arc
pub const SPINNER_EXTENT_DEGREES: u16 = 120;

/// Highlight colour applied to fresh results
pub const HIGHLIGHT_COLOUR: Rgb = Rgb::new(0xd6, 0xea, 0xf8);

/// Base background of the output panes
pub const BASE_COLOUR: Rgb = Rgb::new(0xec, 0xf0, 0xf1);

/// Frames from full highlight to base colour (0.05 per frame)
const FADE_FRAMES: u32 = 20;

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend; `t = 0` is `self`, `t = 1` is `other`
    pub fn interpolate(&self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Rotating arc shown while a request is in flight
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    angle: u16,
    running: bool,
}

impl Spinner {
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start angle of the arc, in degrees
    pub fn angle(&self) -> u16 {
        self.angle
    }

    /// Advance one frame; no-op when stopped
    pub fn tick(&mut self) {
        if self.running {
            self.angle = (self.angle + SPINNER_STEP_DEGREES) % 360;
        }
    }
}

/// Highlight laid over fresh results that decays to the base colour
#[derive(Debug, Clone, Default)]
pub struct HighlightFade {
    frame: u32,
    active: bool,
}

impl HighlightFade {
    /// Restart the fade at full highlight
    pub fn start(&mut self) {
        self.frame = 0;
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current background colour
    pub fn colour(&self) -> Rgb {
        if self.active {
            let progress = self.frame as f32 / FADE_FRAMES as f32;
            HIGHLIGHT_COLOUR.interpolate(BASE_COLOUR, progress)
        } else {
            BASE_COLOUR
        }
    }

    /// Advance one frame; returns false once the fade has finished
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.frame += 1;
        if self.frame >= FADE_FRAMES {
            self.active = false;
        }
        self.active
    }

    /// Number of frames from start to finish
    pub fn total_frames() -> u32 {
        FADE_FRAMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_display() {
        assert_eq!(HIGHLIGHT_COLOUR.to_string(), "#d6eaf8");
        assert_eq!(BASE_COLOUR.to_string(), "#ecf0f1");
    }

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(HIGHLIGHT_COLOUR.interpolate(BASE_COLOUR, 0.0), HIGHLIGHT_COLOUR);
        assert_eq!(HIGHLIGHT_COLOUR.interpolate(BASE_COLOUR, 1.0), BASE_COLOUR);
        assert_eq!(HIGHLIGHT_COLOUR.interpolate(BASE_COLOUR, 7.0), BASE_COLOUR);
    }

    #[test]
    fn test_spinner_rotates_only_while_running() {
        let mut spinner = Spinner::default();
        spinner.tick();
        assert_eq!(spinner.angle(), 0);

        spinner.start();
        spinner.tick();
        spinner.tick();
        assert_eq!(spinner.angle(), 24);

        for _ in 0..30 {
            spinner.tick();
        }
        assert_eq!(spinner.angle(), (24 + 30 * 12) % 360);

        spinner.stop();
        let angle = spinner.angle();
        spinner.tick();
        assert_eq!(spinner.angle(), angle);
    }

    #[test]
    fn test_fade_decays_to_base() {
        let mut fade = HighlightFade::default();
        assert_eq!(fade.colour(), BASE_COLOUR);

        fade.start();
        assert_eq!(fade.colour(), HIGHLIGHT_COLOUR);

        let mut frames = 0;
        while fade.tick() {
            frames += 1;
            assert!(frames < 100, "fade never finished");
        }
        assert_eq!(frames + 1, HighlightFade::total_frames());
        assert!(!fade.is_active());
        assert_eq!(fade.colour(), BASE_COLOUR);
    }

    #[test]
    fn test_fade_restart() {
        let mut fade = HighlightFade::default();
        fade.start();
        fade.tick();
        fade.start();
        assert_eq!(fade.colour(), HIGHLIGHT_COLOUR);
    }
}
