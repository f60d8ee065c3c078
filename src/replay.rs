use crate::pane::{ActiveSide, LayoutState, MirroredPanels, OvershootPolicy, PanelHost, RawLayoutReport};
use crate::utils::{Result, TriPaneError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ReplayEvent {
    Engage { side: ActiveSide },
    Report(RawLayoutReport),
}

/// ハンドル操作とレイアウト報告の記録。報告ごとに1フレーム出力する
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Overrides the configured initial layout
    #[serde(default)]
    pub initial: Option<LayoutState>,

    pub events: Vec<ReplayEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayFrame {
    pub step: usize,
    pub side: ActiveSide,
    pub raw: RawLayoutReport,
    pub committed: LayoutState,
}

/// コミットされたレイアウトを記録するホスト
struct RecordingHost {
    initial: LayoutState,
    commits: Vec<LayoutState>,
}

impl PanelHost for RecordingHost {
    fn initial_layout(&self) -> LayoutState {
        self.initial
    }

    fn set_layout(&mut self, layout: LayoutState) {
        self.commits.push(layout);
    }
}

pub fn parse_script(content: &str) -> Result<ReplayScript> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn load_script(path: &Path) -> Result<ReplayScript> {
    if !path.exists() {
        return Err(TriPaneError::replay(format!(
            "Script not found: {}",
            path.display()
        )));
    }

    log::info!("Loading replay script from: {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_script(&content)
}

/// スクリプトを順に適用し、報告ごとのフレームを返す
pub fn replay(script: &ReplayScript, initial: LayoutState, policy: OvershootPolicy) -> Vec<ReplayFrame> {
    let host = RecordingHost {
        initial: script.initial.unwrap_or(initial),
        commits: Vec::new(),
    };
    let mut panels = MirroredPanels::new(host, policy);
    let mut frames = Vec::new();

    for (index, event) in script.events.iter().enumerate() {
        match *event {
            ReplayEvent::Engage { side } => panels.on_handle_engaged(side),
            ReplayEvent::Report(raw) => {
                let committed = panels.on_layout_changed(raw);
                frames.push(ReplayFrame {
                    step: index + 1,
                    side: panels.active_side(),
                    raw,
                    committed,
                });
            }
        }
    }

    log::info!(
        "Replayed {} events, {} layouts committed",
        script.events.len(),
        panels.host().commits.len()
    );
    frames
}
