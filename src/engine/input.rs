// Per-tick input sampling
//
// The core consumes one `InputFrame` per player per fixed step. Edge
// detection for the pickup toggle happens inside the player body (it needs
// to persist across ticks), so a frame is just the raw held state.

/// Input vector for one player, sampled once per fixed step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub pickup: bool,
}

impl InputFrame {
    /// No buttons held
    pub const IDLE: InputFrame = InputFrame {
        left: false,
        right: false,
        jump: false,
        pickup: false,
    };

    pub fn left() -> Self {
        InputFrame {
            left: true,
            ..Default::default()
        }
    }

    pub fn right() -> Self {
        InputFrame {
            right: true,
            ..Default::default()
        }
    }

    pub fn jump() -> Self {
        InputFrame {
            jump: true,
            ..Default::default()
        }
    }

    pub fn pickup() -> Self {
        InputFrame {
            pickup: true,
            ..Default::default()
        }
    }

    /// Combine two frames (button held if held in either)
    pub fn merge(self, other: InputFrame) -> InputFrame {
        InputFrame {
            left: self.left || other.left,
            right: self.right || other.right,
            jump: self.jump || other.jump,
            pickup: self.pickup || other.pickup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_frame() {
        let frame = InputFrame::IDLE;
        assert!(!frame.left && !frame.right && !frame.jump && !frame.pickup);
    }

    #[test]
    fn test_merge() {
        let frame = InputFrame::right().merge(InputFrame::jump());
        assert!(frame.right);
        assert!(frame.jump);
        assert!(!frame.left);
    }
}
