use crate::config::Config;
use crate::input::{ShortcutAction, ShortcutHandler};
use crate::pane::{ActiveSide, LayoutState, MirroredPanels, OvershootPolicy, PanelGroup, Rect};
use crate::renderer::{Color, RenderBackend, SoftbufferBackend};
use crate::utils::{Result, TriPaneError};
use std::rc::Rc;
use winit::keyboard::{ModifiersState, PhysicalKey};
use winit::window::Window;

/// 描画色
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub margin: Color,
    pub center: Color,
    pub handle: Color,
    pub active_handle: Color,
}

impl Theme {
    pub fn from_config(config: &Config) -> Result<Self> {
        let theme = &config.theme;
        Ok(Self {
            background: parse_color("background", &theme.background)?,
            margin: parse_color("margin", &theme.margin)?,
            center: parse_color("center", &theme.center)?,
            handle: parse_color("handle", &theme.handle)?,
            active_handle: parse_color("active_handle", &theme.active_handle)?,
        })
    }
}

fn parse_color(name: &str, value: &str) -> Result<Color> {
    Color::from_hex(value)
        .ok_or_else(|| TriPaneError::config(format!("theme.{}: expected #rrggbb, got {:?}", name, value)))
}

/// Central application state
pub struct App {
    pub config: Config,
    panels: MirroredPanels<PanelGroup>,
    renderer: Box<dyn RenderBackend>,
    shortcuts: ShortcutHandler,
    theme: Theme,
    dragging: Option<ActiveSide>,
}

impl App {
    pub fn new(config: Config, window: Rc<Window>, overshoot: OvershootPolicy) -> Result<Self> {
        let size = window.inner_size();
        let theme = Theme::from_config(&config)?;
        let renderer: Box<dyn RenderBackend> = Box::new(SoftbufferBackend::new(window)?);

        let group = PanelGroup::new(
            config.layout.initial,
            Rect::new(0, 0, size.width, size.height),
            config.layout.grab_tolerance,
        );
        let panels = MirroredPanels::new(group, overshoot);

        log::info!(
            "App initialized: {}x{} px, overshoot: {:?}",
            size.width,
            size.height,
            panels.policy()
        );

        Ok(Self {
            config,
            panels,
            renderer,
            shortcuts: ShortcutHandler::new(),
            theme,
            dragging: None,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.panels.host_mut().resize(width, height);
        self.renderer.resize(width, height)?;
        Ok(())
    }

    pub fn render(&mut self) -> Result<()> {
        draw_panels(
            self.renderer.as_mut(),
            self.panels.host(),
            &self.theme,
            self.panels.active_side(),
            self.config.layout.handle_width,
        )?;
        self.renderer.present()
    }

    /// Handle a key press, returning the shortcut that was applied
    pub fn handle_keyboard_input(&mut self, key: &PhysicalKey, modifiers: ModifiersState) -> Option<ShortcutAction> {
        let PhysicalKey::Code(key_code) = key else {
            return None;
        };

        let action = self.shortcuts.match_shortcut(*key_code, modifiers)?;
        self.handle_shortcut_action(action);
        Some(action)
    }

    fn handle_shortcut_action(&mut self, action: ShortcutAction) {
        let step = self.config.layout.nudge_step;

        match action {
            ShortcutAction::EngageLeft => {
                self.panels.on_handle_engaged(ActiveSide::Left);
                log::info!("Engaged left handle from keyboard");
            }
            ShortcutAction::EngageRight => {
                self.panels.on_handle_engaged(ActiveSide::Right);
                log::info!("Engaged right handle from keyboard");
            }
            ShortcutAction::NudgeLeft => self.nudge(-step),
            ShortcutAction::NudgeRight => self.nudge(step),
            ShortcutAction::Quit => {
                log::info!("Quit requested");
            }
        }
    }

    fn nudge(&mut self, delta: f32) {
        let side = self.panels.active_side();
        let raw = self.panels.host().nudge_report(side, delta);
        let layout = self.panels.on_layout_changed(raw);
        log::debug!("Nudged {} boundary by {}: margins now {:.2}", side, delta, layout.left);
    }

    /// Handle mouse button press
    pub fn handle_mouse_press(&mut self, x: f64, y: f64) -> bool {
        match self.panels.host().handle_at(x) {
            Some(side) => {
                log::info!("Started dragging {} handle at ({}, {})", side, x, y);
                self.panels.on_handle_engaged(side);
                self.dragging = Some(side);
                true
            }
            None => {
                log::debug!("Mouse press at ({}, {}) not on a handle", x, y);
                false
            }
        }
    }

    /// Handle mouse button release
    pub fn handle_mouse_release(&mut self) {
        if let Some(side) = self.dragging.take() {
            log::info!("Stopped dragging {} handle", side);
        }
    }

    /// Handle mouse movement, returns true when a new layout was committed
    pub fn handle_mouse_move(&mut self, x: f64) -> bool {
        let Some(side) = self.dragging else {
            return false;
        };

        let raw = self.panels.host().drag_report(side, x);
        let previous = self.panels.layout();
        self.panels.on_layout_changed(raw) != previous
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn layout(&self) -> LayoutState {
        self.panels.layout()
    }

    pub fn active_side(&self) -> ActiveSide {
        self.panels.active_side()
    }

    pub fn base_title(&self) -> &str {
        &self.config.window.title
    }
}

/// 3ペインと2本の境界ハンドルを描画する
pub fn draw_panels(
    backend: &mut dyn RenderBackend,
    group: &PanelGroup,
    theme: &Theme,
    active: ActiveSide,
    handle_width: u32,
) -> Result<()> {
    backend.clear(theme.background)?;

    let [left, center, right] = group.region_rects();
    for (rect, color) in [(left, theme.margin), (center, theme.center), (right, theme.margin)] {
        backend.fill_rect(rect.x as i32, rect.y as i32, rect.width, rect.height, color)?;
    }

    let window = group.window_rect();
    let half = (handle_width / 2) as i32;
    // the active handle is drawn last so it stays visible when both overlap
    let handles = [
        (group.handle_position(active.opposite()), theme.handle),
        (group.handle_position(active), theme.active_handle),
    ];
    for (x, color) in handles {
        backend.fill_rect(x as i32 - half, window.y as i32, handle_width, window.height, color)?;
    }

    Ok(())
}
