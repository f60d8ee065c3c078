use crate::pane::host::PanelHost;
use crate::pane::layout::{FULL, LayoutState, RawLayoutReport, Rect};
use crate::pane::ActiveSide;

/// 3ペインのリサイズ可能なパネルグループ（ピクセル座標）
///
/// Owns the committed layout and turns pointer or keyboard movement of a
/// single boundary into raw, usually asymmetric, layout reports.
pub struct PanelGroup {
    layout: LayoutState,
    window_rect: Rect,
    grab_tolerance: u32,
}

impl PanelGroup {
    pub fn new(initial: LayoutState, window_rect: Rect, grab_tolerance: u32) -> Self {
        Self {
            layout: initial,
            window_rect,
            grab_tolerance,
        }
    }

    pub fn window_rect(&self) -> Rect {
        self.window_rect
    }

    /// ウィンドウサイズ変更（割合はそのまま）
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_rect = Rect::new(self.window_rect.x, self.window_rect.y, width, height);
        log::debug!("Panel group resized to {}x{}", width, height);
    }

    /// 左・中央・右の矩形
    pub fn region_rects(&self) -> [Rect; 3] {
        self.layout.region_rects(self.window_rect)
    }

    /// 境界ハンドルのx座標（ピクセル）
    pub fn handle_positions(&self) -> (u32, u32) {
        let [left, _, right] = self.region_rects();
        (left.x + left.width, right.x)
    }

    pub fn handle_position(&self, side: ActiveSide) -> u32 {
        let (left_x, right_x) = self.handle_positions();
        match side {
            ActiveSide::Left => left_x,
            ActiveSide::Right => right_x,
        }
    }

    /// 指定位置にある境界ハンドルを探す（両方が近い場合は近い方、同距離なら左）
    pub fn handle_at(&self, x: f64) -> Option<ActiveSide> {
        let (left_x, right_x) = self.handle_positions();
        let tolerance = self.grab_tolerance as f64;
        let left_distance = (x - left_x as f64).abs();
        let right_distance = (x - right_x as f64).abs();

        match (left_distance <= tolerance, right_distance <= tolerance) {
            (true, true) if right_distance < left_distance => Some(ActiveSide::Right),
            (true, _) => Some(ActiveSide::Left),
            (false, true) => Some(ActiveSide::Right),
            (false, false) => None,
        }
    }

    /// ドラッグ中のポインタ位置から補正前のレイアウトを作る
    pub fn drag_report(&self, side: ActiveSide, x: f64) -> RawLayoutReport {
        let width = self.window_rect.width;
        if width == 0 {
            return self.layout;
        }

        let position = (x - self.window_rect.x as f64) * FULL as f64 / width as f64;
        self.move_boundary(side, position as f32)
    }

    /// キーボードで境界を `delta` パーセント動かす
    pub fn nudge_report(&self, side: ActiveSide, delta: f32) -> RawLayoutReport {
        let (left, right) = self.layout.boundaries();
        let current = match side {
            ActiveSide::Left => left,
            ActiveSide::Right => right,
        };
        self.move_boundary(side, current + delta)
    }

    /// 片方の境界だけを動かす。もう片方を越えた場合はそれも押し出す
    fn move_boundary(&self, side: ActiveSide, position: f32) -> RawLayoutReport {
        let position = position.clamp(0.0, FULL);
        let (left, right) = self.layout.boundaries();

        match side {
            ActiveSide::Left => {
                let right = right.max(position);
                LayoutState::new(position, right - position, FULL - right)
            }
            ActiveSide::Right => {
                let left = left.min(position);
                LayoutState::new(left, position - left, FULL - position)
            }
        }
    }
}

impl PanelHost for PanelGroup {
    fn initial_layout(&self) -> LayoutState {
        self.layout
    }

    fn set_layout(&mut self, layout: LayoutState) {
        log::debug!(
            "Committed layout ({:.2}, {:.2}, {:.2})",
            layout.left,
            layout.center,
            layout.right
        );
        self.layout = layout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::host::MirroredPanels;
    use crate::pane::mirror::OvershootPolicy;

    fn group(layout: LayoutState) -> PanelGroup {
        PanelGroup::new(layout, Rect::new(0, 0, 1000, 500), 6)
    }

    #[test]
    fn test_handle_positions() {
        let g = group(LayoutState::new(20.0, 60.0, 20.0));
        assert_eq!(g.handle_positions(), (200, 800));
    }

    #[test]
    fn test_handle_position_by_side() {
        let g = group(LayoutState::new(10.0, 80.0, 10.0));
        assert_eq!(g.handle_position(ActiveSide::Left), 100);
        assert_eq!(g.handle_position(ActiveSide::Right), 900);
    }

    #[test]
    fn test_handle_at() {
        let g = group(LayoutState::new(20.0, 60.0, 20.0));
        assert_eq!(g.handle_at(203.0), Some(ActiveSide::Left));
        assert_eq!(g.handle_at(795.0), Some(ActiveSide::Right));
        assert_eq!(g.handle_at(500.0), None);
        assert_eq!(g.handle_at(190.0), None);
    }

    #[test]
    fn test_handle_at_when_handles_overlap() {
        let g = group(LayoutState::new(50.0, 0.0, 50.0));
        assert_eq!(g.handle_at(500.0), Some(ActiveSide::Left));
        assert_eq!(g.handle_at(497.0), Some(ActiveSide::Left));
    }

    #[test]
    fn test_handle_at_window_edges() {
        let g = group(LayoutState::centered());
        assert_eq!(g.handle_at(2.0), Some(ActiveSide::Left));
        assert_eq!(g.handle_at(999.0), Some(ActiveSide::Right));
    }

    #[test]
    fn test_drag_report_moves_one_boundary() {
        let g = group(LayoutState::new(20.0, 60.0, 20.0));
        assert_eq!(
            g.drag_report(ActiveSide::Left, 300.0),
            LayoutState::new(30.0, 50.0, 20.0)
        );
        assert_eq!(
            g.drag_report(ActiveSide::Right, 900.0),
            LayoutState::new(20.0, 70.0, 10.0)
        );
    }

    #[test]
    fn test_drag_report_pushes_other_boundary() {
        let g = group(LayoutState::new(20.0, 60.0, 20.0));
        assert_eq!(
            g.drag_report(ActiveSide::Left, 900.0),
            LayoutState::new(90.0, 0.0, 10.0)
        );
        assert_eq!(
            g.drag_report(ActiveSide::Right, 100.0),
            LayoutState::new(10.0, 0.0, 90.0)
        );
    }

    #[test]
    fn test_drag_report_clamps_to_window() {
        let g = group(LayoutState::new(20.0, 60.0, 20.0));
        assert_eq!(
            g.drag_report(ActiveSide::Left, -50.0),
            LayoutState::new(0.0, 80.0, 20.0)
        );
        assert_eq!(
            g.drag_report(ActiveSide::Right, 1200.0),
            LayoutState::new(20.0, 80.0, 0.0)
        );
    }

    #[test]
    fn test_nudge_report() {
        let g = group(LayoutState::new(20.0, 60.0, 20.0));
        assert_eq!(
            g.nudge_report(ActiveSide::Left, 5.0),
            LayoutState::new(25.0, 55.0, 20.0)
        );
        assert_eq!(
            g.nudge_report(ActiveSide::Right, 5.0),
            LayoutState::new(20.0, 65.0, 15.0)
        );
    }

    #[test]
    fn test_resize_keeps_percentages() {
        let mut g = group(LayoutState::new(25.0, 50.0, 25.0));
        g.resize(400, 300);
        assert_eq!(g.initial_layout(), LayoutState::new(25.0, 50.0, 25.0));
        assert_eq!(g.handle_positions(), (100, 300));
    }

    #[test]
    fn test_drag_through_mirrored_panels() {
        let mut panels = MirroredPanels::new(group(LayoutState::centered()), OvershootPolicy::Mirror);

        // grab the left edge and pull it in
        let side = panels.host().handle_at(0.0).unwrap();
        panels.on_handle_engaged(side);
        for x in [100.0, 200.0, 250.0] {
            let raw = panels.host().drag_report(side, x);
            panels.on_layout_changed(raw);
        }
        assert_eq!(panels.layout(), LayoutState::new(25.0, 50.0, 25.0));
        assert_eq!(panels.host().handle_positions(), (250, 750));

        // the right handle follows its own drag, mirrored onto the left
        let side = panels.host().handle_at(752.0).unwrap();
        assert_eq!(side, ActiveSide::Right);
        panels.on_handle_engaged(side);
        let raw = panels.host().drag_report(side, 900.0);
        assert_eq!(raw, LayoutState::new(25.0, 65.0, 10.0));
        panels.on_layout_changed(raw);
        assert_eq!(panels.layout(), LayoutState::new(10.0, 80.0, 10.0));
    }

    #[test]
    fn test_drag_past_midpoint_folds() {
        let mut panels = MirroredPanels::new(group(LayoutState::centered()), OvershootPolicy::Mirror);
        panels.on_handle_engaged(ActiveSide::Left);
        let raw = panels.host().drag_report(ActiveSide::Left, 700.0);
        assert_eq!(raw, LayoutState::new(70.0, 30.0, 0.0));
        panels.on_layout_changed(raw);
        assert_eq!(panels.layout(), LayoutState::new(30.0, 40.0, 30.0));
    }
}
