use serde::{Deserialize, Serialize};
use std::fmt;

/// 境界ハンドル（左マージン／右マージン）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveSide {
    #[default]
    Left,
    Right,
}

impl ActiveSide {
    pub fn opposite(self) -> Self {
        match self {
            ActiveSide::Left => ActiveSide::Right,
            ActiveSide::Right => ActiveSide::Left,
        }
    }
}

impl fmt::Display for ActiveSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveSide::Left => write!(f, "left"),
            ActiveSide::Right => write!(f, "right"),
        }
    }
}

/// 最後に掴まれた境界を記録する
#[derive(Debug, Clone, Default)]
pub struct ActiveSideTracker {
    active: ActiveSide,
}

impl ActiveSideTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// ハンドルが掴まれた（無条件に上書き）
    pub fn engage(&mut self, side: ActiveSide) {
        if self.active != side {
            log::debug!("Active side changed: {} -> {}", self.active, side);
        }
        self.active = side;
    }

    pub fn current(&self) -> ActiveSide {
        self.active
    }
}
