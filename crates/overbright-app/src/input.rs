use overbright_core::pattern::SourcePattern;

// ---------------------------------------------------------------------------
// Key — windowing-library-independent key representation
// ---------------------------------------------------------------------------

/// A keyboard key, independent of any windowing library.
///
/// `main.rs` maps `winit::keyboard::PhysicalKey` to `Key`; everything else
/// in the input pipeline works purely with this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Space,
    R,
    Q,
    Escape,
}

// ---------------------------------------------------------------------------
// InputAction — what the app does in response to input
// ---------------------------------------------------------------------------

/// High-level action produced by a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    LoadPattern(SourcePattern),
    CycleNextPattern,
    /// Restart the draw clock at zero.
    ResetClock,
    Quit,
}

// ---------------------------------------------------------------------------
// InputState
// ---------------------------------------------------------------------------

pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Translate a `Key` press into an `InputAction`, if the key is mapped.
    pub fn on_key(&self, key: Key) -> Option<InputAction> {
        match key {
            Key::Digit1 => Some(InputAction::LoadPattern(SourcePattern::HorizontalGradient)),
            Key::Digit2 => Some(InputAction::LoadPattern(SourcePattern::Checkerboard)),
            Key::Digit3 => Some(InputAction::LoadPattern(SourcePattern::Scanlines)),
            Key::Digit4 => Some(InputAction::LoadPattern(SourcePattern::NoiseField)),
            Key::Space => Some(InputAction::CycleNextPattern),
            Key::R => Some(InputAction::ResetClock),
            Key::Q | Key::Escape => Some(InputAction::Quit),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
