use crate::pane::layout::{FULL, LayoutState, RawLayoutReport};
use crate::pane::ActiveSide;
use serde::{Deserialize, Serialize};

/// マージンの最大値（全幅の半分）
pub const HALF: f32 = FULL / 2.0;

/// 境界が中央を越えてドラッグされたときの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OvershootPolicy {
    /// 中央を越えた分を反対側から測った距離として折り返す (v > 50 => 100 - v)
    #[default]
    Mirror,
    /// 50で止める
    Clamp,
}

/// 非対称なレイアウト報告を左右対称なレイアウトに変換する
pub fn reconcile(raw: RawLayoutReport, side: ActiveSide) -> LayoutState {
    reconcile_with(raw, side, OvershootPolicy::Mirror)
}

/// Only `raw[side]` is read; the other two fields are discarded without
/// validation. Negative or NaN magnitudes pass through unchanged.
pub fn reconcile_with(raw: RawLayoutReport, side: ActiveSide, policy: OvershootPolicy) -> LayoutState {
    let v = fold(raw.get(side), policy);
    LayoutState::new(v, FULL - 2.0 * v, v)
}

fn fold(v: f32, policy: OvershootPolicy) -> f32 {
    if v > HALF {
        match policy {
            OvershootPolicy::Mirror => FULL - v,
            OvershootPolicy::Clamp => HALF,
        }
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::layout::TOLERANCE;

    fn raw(left: f32, center: f32, right: f32) -> RawLayoutReport {
        LayoutState::new(left, center, right)
    }

    #[test]
    fn test_boundary_cases() {
        assert_eq!(
            reconcile(raw(0.0, 100.0, 0.0), ActiveSide::Left),
            LayoutState::new(0.0, 100.0, 0.0)
        );
        assert_eq!(
            reconcile(raw(50.0, 50.0, 0.0), ActiveSide::Left),
            LayoutState::new(50.0, 0.0, 50.0)
        );
        assert_eq!(
            reconcile(raw(70.0, 10.0, 20.0), ActiveSide::Left),
            LayoutState::new(30.0, 40.0, 30.0)
        );
        assert_eq!(
            reconcile(raw(10.0, 10.0, 80.0), ActiveSide::Right),
            LayoutState::new(20.0, 60.0, 20.0)
        );
    }

    #[test]
    fn test_symmetry_for_either_side() {
        for step in 0..=100 {
            let v = step as f32;
            let reports = [
                raw(v, FULL - v, 0.0),
                raw(0.0, FULL - v, v),
                raw(v, 0.0, FULL - v),
            ];
            for report in reports {
                for side in [ActiveSide::Left, ActiveSide::Right] {
                    let layout = reconcile(report, side);
                    assert_eq!(layout.left, layout.right);
                    assert!(layout.left >= 0.0 && layout.left <= HALF, "v = {}", v);
                }
            }
        }
    }

    #[test]
    fn test_right_side_folds_like_left() {
        for step in 0..=100 {
            let v = step as f32;
            let from_left = reconcile(raw(v, FULL - v, 0.0), ActiveSide::Left);
            let from_right = reconcile(raw(0.0, FULL - v, v), ActiveSide::Right);
            assert_eq!(from_left, from_right, "v = {}", v);
        }
    }

    #[test]
    fn test_mirror_fold() {
        for step in 0..=100 {
            let v = step as f32;
            let a = reconcile(raw(v, FULL - v, 0.0), ActiveSide::Left);
            let b = reconcile(raw(FULL - v, v, 0.0), ActiveSide::Left);
            assert_eq!(a, b, "v = {}", v);
        }
    }

    #[test]
    fn test_conservation_ignores_inconsistent_fields() {
        // fields do not sum to 100, only raw.left matters
        let layout = reconcile(raw(25.0, 3.0, 91.0), ActiveSide::Left);
        assert_eq!(layout, LayoutState::new(25.0, 50.0, 25.0));
        assert_eq!(layout.total(), 100.0);

        for step in 0..=200 {
            let v = step as f32 * 0.5;
            let layout = reconcile(raw(v, 0.0, 0.0), ActiveSide::Left);
            assert_eq!(layout.total(), FULL, "v = {}", v);
        }

        // arbitrary fractions only re-sum to 100 within f32 rounding
        for step in 0..10_000 {
            let v = step as f32 * 0.01 + 0.003;
            let layout = reconcile(raw(v, 0.0, 0.0), ActiveSide::Left);
            assert!(layout.is_well_formed(), "v = {}", v);
            assert!((layout.total() - FULL).abs() <= TOLERANCE, "v = {}", v);
        }
    }

    #[test]
    fn test_side_selects_authoritative_value() {
        // a stale left value is ignored once the right side is active
        let report = raw(40.0, 50.0, 10.0);
        assert_eq!(reconcile(report, ActiveSide::Left), LayoutState::new(40.0, 20.0, 40.0));
        assert_eq!(reconcile(report, ActiveSide::Right), LayoutState::new(10.0, 80.0, 10.0));
    }

    #[test]
    fn test_out_of_contract_values_propagate() {
        let layout = reconcile(raw(-10.0, 110.0, 0.0), ActiveSide::Left);
        assert_eq!(layout, LayoutState::new(-10.0, 120.0, -10.0));

        // 130 folds to -30, it is not clamped
        let layout = reconcile(raw(130.0, -30.0, 0.0), ActiveSide::Left);
        assert_eq!(layout, LayoutState::new(-30.0, 160.0, -30.0));
    }

    #[test]
    fn test_clamp_policy() {
        let layout = reconcile_with(raw(70.0, 10.0, 20.0), ActiveSide::Left, OvershootPolicy::Clamp);
        assert_eq!(layout, LayoutState::new(50.0, 0.0, 50.0));

        let layout = reconcile_with(raw(10.0, 10.0, 80.0), ActiveSide::Left, OvershootPolicy::Clamp);
        assert_eq!(layout, LayoutState::new(10.0, 80.0, 10.0));
    }
}
