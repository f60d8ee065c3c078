use crate::pane::ActiveSide;
use serde::{Deserialize, Serialize};

/// 全体幅に対するパーセンテージの合計
pub const FULL: f32 = 100.0;

/// 浮動小数点誤差の許容範囲
pub const TOLERANCE: f32 = 1e-3;

/// ペインの矩形領域（ピクセル）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// 3ペインの幅の割合 (left, center, right)
///
/// Committed layouts always satisfy `left == right` and sum to 100.
/// Reports coming from the panel group use [`RawLayoutReport`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pub left: f32,
    pub center: f32,
    pub right: f32,
}

/// ドラッグ中にパネルグループが報告する補正前のレイアウト（非対称でもよい）
pub type RawLayoutReport = LayoutState;

impl LayoutState {
    pub const fn new(left: f32, center: f32, right: f32) -> Self {
        Self { left, center, right }
    }

    /// 中央を全幅に広げたレイアウト (0, 100, 0)
    pub const fn centered() -> Self {
        Self::new(0.0, FULL, 0.0)
    }

    /// 指定された側のマージン幅
    pub fn get(&self, side: ActiveSide) -> f32 {
        match side {
            ActiveSide::Left => self.left,
            ActiveSide::Right => self.right,
        }
    }

    /// Re-summed in f32, so equal to 100 only within [`TOLERANCE`] for fractional margins
    pub fn total(&self) -> f32 {
        self.left + self.center + self.right
    }

    pub fn is_symmetric(&self) -> bool {
        (self.left - self.right).abs() <= TOLERANCE
    }

    /// 各値が非負で合計が100になっているか
    pub fn is_well_formed(&self) -> bool {
        self.left >= 0.0
            && self.center >= 0.0
            && self.right >= 0.0
            && (self.total() - FULL).abs() <= TOLERANCE
    }

    /// 2本の境界ハンドルの位置（パーセント）
    pub fn boundaries(&self) -> (f32, f32) {
        (self.left, FULL - self.right)
    }

    /// ウィンドウ矩形を左・中央・右の3つに分割する
    ///
    /// The margins are rounded independently and the center takes the
    /// remainder, so the three rects always tile `window` exactly.
    pub fn region_rects(&self, window: Rect) -> [Rect; 3] {
        let left_width = percent_of(window.width, self.left);
        let right_width = percent_of(window.width, self.right).min(window.width - left_width);
        let center_width = window.width - left_width - right_width;

        [
            Rect::new(window.x, window.y, left_width, window.height),
            Rect::new(window.x + left_width, window.y, center_width, window.height),
            Rect::new(
                window.x + left_width + center_width,
                window.y,
                right_width,
                window.height,
            ),
        ]
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::centered()
    }
}

fn percent_of(total: u32, percent: f32) -> u32 {
    let px = (total as f32 * percent / FULL).round();
    // NaN and negative widths both collapse to zero
    if px > 0.0 { (px as u32).min(total) } else { 0 }
}
