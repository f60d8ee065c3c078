use crate::pane::layout::{LayoutState, RawLayoutReport};
use crate::pane::mirror::{reconcile, reconcile_with, OvershootPolicy};
use crate::pane::side::{ActiveSide, ActiveSideTracker};

/// 3ペインを描画するパネルグループ側のインターフェース
pub trait PanelHost {
    /// マウント時の初期レイアウト
    fn initial_layout(&self) -> LayoutState {
        LayoutState::default()
    }

    /// 補正済みレイアウトを反映する
    fn set_layout(&mut self, layout: LayoutState);
}

/// ハンドル操作とレイアウト報告を受け取り、左右対称なレイアウトをホストへ反映する
pub struct MirroredPanels<H: PanelHost> {
    host: H,
    tracker: ActiveSideTracker,
    policy: OvershootPolicy,
    layout: LayoutState,
}

impl<H: PanelHost> MirroredPanels<H> {
    pub fn new(host: H, policy: OvershootPolicy) -> Self {
        let layout = host.initial_layout();
        log::debug!(
            "Mirrored panels mounted with layout ({}, {}, {}), overshoot: {:?}",
            layout.left,
            layout.center,
            layout.right,
            policy
        );

        Self {
            host,
            tracker: ActiveSideTracker::new(),
            policy,
            layout,
        }
    }

    /// ユーザーが境界ハンドルを掴んだ
    pub fn on_handle_engaged(&mut self, side: ActiveSide) {
        self.tracker.engage(side);
    }

    /// ドラッグ中のレイアウト報告を補正してホストへ反映する
    pub fn on_layout_changed(&mut self, raw: RawLayoutReport) -> LayoutState {
        let side = self.tracker.current();
        log::trace!(
            "Raw layout ({}, {}, {}) from {} handle",
            raw.left,
            raw.center,
            raw.right,
            side
        );

        let layout = match self.policy {
            OvershootPolicy::Mirror => reconcile(raw, side),
            policy => reconcile_with(raw, side, policy),
        };
        self.layout = layout;
        self.host.set_layout(layout);
        layout
    }

    /// 最後に反映したレイアウト
    pub fn layout(&self) -> LayoutState {
        self.layout
    }

    pub fn active_side(&self) -> ActiveSide {
        self.tracker.current()
    }

    pub fn policy(&self) -> OvershootPolicy {
        self.policy
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
