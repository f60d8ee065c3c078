use winit::keyboard::{KeyCode, ModifiersState};

/// ショートカットアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// 左の境界ハンドルを掴む
    EngageLeft,
    /// 右の境界ハンドルを掴む
    EngageRight,
    /// アクティブな境界を左へ動かす
    NudgeLeft,
    /// アクティブな境界を右へ動かす
    NudgeRight,
    /// 終了
    Quit,
}

/// ショートカットハンドラー
pub struct ShortcutHandler;

impl ShortcutHandler {
    pub fn new() -> Self {
        Self
    }

    /// キー入力がショートカットに一致するか判定
    pub fn match_shortcut(
        &self,
        key_code: KeyCode,
        modifiers: ModifiersState,
    ) -> Option<ShortcutAction> {
        if modifiers.control_key() {
            match key_code {
                KeyCode::KeyQ => Some(ShortcutAction::Quit),
                _ => None,
            }
        } else if modifiers.alt_key() || modifiers.super_key() {
            None
        } else {
            match key_code {
                KeyCode::BracketLeft => Some(ShortcutAction::EngageLeft),
                KeyCode::BracketRight => Some(ShortcutAction::EngageRight),
                KeyCode::ArrowLeft => Some(ShortcutAction::NudgeLeft),
                KeyCode::ArrowRight => Some(ShortcutAction::NudgeRight),
                _ => None,
            }
        }
    }
}

impl Default for ShortcutHandler {
    fn default() -> Self {
        Self::new()
    }
}
