//! Keyboard snapshot to directional command mapping
//!
//! The platform hands over one `KeyboardState` per frame; the simulation only
//! ever sees the single `Direction` it resolves to.

/// Number of physical key slots in a snapshot
pub const NUM_SCANCODES: usize = 512;

/// Discrete command for the human paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

/// Physical key codes the game cares about (USB HID usage ids)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Scancode {
    Right = 79,
    Left = 80,
    Down = 81,
    Up = 82,
}

impl Scancode {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Per-frame record of which physical keys are held
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardState {
    keys: Vec<bool>,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self {
            keys: vec![false; NUM_SCANCODES],
        }
    }
}

impl KeyboardState {
    /// Snapshot with nothing pressed
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with exactly the given keys pressed
    pub fn with_pressed(pressed: &[Scancode]) -> Self {
        let mut state = Self::default();
        for &code in pressed {
            state.press(code);
        }
        state
    }

    /// Build from a raw byte array indexed by scancode (non-zero = pressed).
    /// Codes past the end of `raw` read as released.
    pub fn from_raw(raw: &[u8]) -> Self {
        let mut state = Self::default();
        for (slot, &byte) in state.keys.iter_mut().zip(raw) {
            *slot = byte != 0;
        }
        state
    }

    pub fn press(&mut self, code: Scancode) {
        self.keys[code.index()] = true;
    }

    pub fn release(&mut self, code: Scancode) {
        self.keys[code.index()] = false;
    }

    #[inline]
    pub fn is_pressed(&self, code: Scancode) -> bool {
        self.keys[code.index()]
    }
}

/// Resolve the held keys to one command: Up > Down > Left > Right > None
pub fn get_direction(keys: &KeyboardState) -> Direction {
    if keys.is_pressed(Scancode::Up) {
        Direction::Up
    } else if keys.is_pressed(Scancode::Down) {
        Direction::Down
    } else if keys.is_pressed(Scancode::Left) {
        Direction::Left
    } else if keys.is_pressed(Scancode::Right) {
        Direction::Right
    } else {
        Direction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_pressed() {
        assert_eq!(get_direction(&KeyboardState::new()), Direction::None);
    }

    #[test]
    fn test_single_keys() {
        let cases = [
            (Scancode::Up, Direction::Up),
            (Scancode::Down, Direction::Down),
            (Scancode::Left, Direction::Left),
            (Scancode::Right, Direction::Right),
        ];
        for (code, expected) in cases {
            let keys = KeyboardState::with_pressed(&[code]);
            assert_eq!(get_direction(&keys), expected, "{:?}", code);
        }
    }

    #[test]
    fn test_priority_order() {
        let keys = KeyboardState::with_pressed(&[Scancode::Left, Scancode::Up]);
        assert_eq!(get_direction(&keys), Direction::Up);

        let keys = KeyboardState::with_pressed(&[Scancode::Right, Scancode::Down]);
        assert_eq!(get_direction(&keys), Direction::Down);

        let keys = KeyboardState::with_pressed(&[Scancode::Right, Scancode::Left]);
        assert_eq!(get_direction(&keys), Direction::Left);

        let mut keys = KeyboardState::with_pressed(&[Scancode::Right, Scancode::Left]);
        keys.press(Scancode::Down);
        keys.press(Scancode::Up);
        assert_eq!(get_direction(&keys), Direction::Up);
    }

    #[test]
    fn test_from_raw() {
        let mut raw = vec![0u8; 100];
        raw[Scancode::Down.index()] = 1;
        raw[Scancode::Right.index()] = 1;
        let keys = KeyboardState::from_raw(&raw);
        assert_eq!(get_direction(&keys), Direction::Down);

        // Short arrays leave the arrow keys released
        let keys = KeyboardState::from_raw(&[1, 1, 1]);
        assert_eq!(get_direction(&keys), Direction::None);
    }

    #[test]
    fn test_release() {
        let mut keys = KeyboardState::with_pressed(&[Scancode::Up, Scancode::Down]);
        keys.release(Scancode::Up);
        assert_eq!(get_direction(&keys), Direction::Down);
    }
}
