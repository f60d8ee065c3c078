mod app;
mod config;
mod input;
mod pane;
mod renderer;
mod replay;
mod utils;

use anyhow::Context;
use app::App;
use clap::{Parser, ValueEnum};
use config::{init_config, load_config};
use input::ShortcutAction;
use pane::{ActiveSide, LayoutState, OvershootPolicy};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// tripane - symmetric three-pane layout with draggable margins
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path (default: ~/.config/tripane/config.yaml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Replay a gesture script headlessly and print the committed layouts as YAML
    #[arg(short, long, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Override how a boundary dragged past the midpoint is handled
    #[arg(long, value_enum)]
    overshoot: Option<OvershootArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OvershootArg {
    Mirror,
    Clamp,
}

impl From<OvershootArg> for OvershootPolicy {
    fn from(arg: OvershootArg) -> Self {
        match arg {
            OvershootArg::Mirror => OvershootPolicy::Mirror,
            OvershootArg::Clamp => OvershootPolicy::Clamp,
        }
    }
}

struct TriPaneApp {
    window: Option<Rc<Window>>,
    app: Option<App>,
    modifiers: winit::keyboard::ModifiersState,
    config_path: Option<PathBuf>,
    overshoot: Option<OvershootPolicy>,
    cursor_position: (f64, f64),
}

impl ApplicationHandler for TriPaneApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        // Load config
        let config = match init_config(self.config_path.clone()) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("Failed to load config: {}", e);
                event_loop.exit();
                return;
            }
        };

        // Create window
        let mut window_attrs = Window::default_attributes().with_title(&config.window.title);

        // Set window size or maximize
        if config.window.maximize {
            window_attrs = window_attrs.with_maximized(true);
            log::info!("Creating maximized window");
        } else {
            window_attrs = window_attrs.with_inner_size(winit::dpi::PhysicalSize::new(
                config.window.width,
                config.window.height,
            ));
            log::info!("Creating window with size {}x{}", config.window.width, config.window.height);
        }

        let window = match event_loop.create_window(window_attrs) {
            Ok(w) => Rc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let overshoot = self.overshoot.unwrap_or(config.layout.overshoot);
        let app = match App::new(config, window.clone(), overshoot) {
            Ok(a) => a,
            Err(e) => {
                log::error!("Failed to create app: {}", e);
                event_loop.exit();
                return;
            }
        };

        update_window_title(&app, &window);
        window.request_redraw();

        self.window = Some(window);
        self.app = Some(app);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Nothing animates, sleep until the next event
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(app) = &mut self.app else {
            return;
        };

        let Some(window) = &self.window else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Err(e) = app.resize(size.width, size.height) {
                    log::error!("Failed to resize: {}", e);
                }
                window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = app.render() {
                    log::error!("Failed to render: {}", e);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    match app.handle_keyboard_input(&event.physical_key, self.modifiers) {
                        Some(ShortcutAction::Quit) => event_loop.exit(),
                        Some(_) => {
                            update_window_title(app, window);
                            window.request_redraw();
                        }
                        None => {}
                    }
                }
            }

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                let (x, y) = self.cursor_position;
                match state {
                    ElementState::Pressed => {
                        if app.handle_mouse_press(x, y) {
                            window.request_redraw();
                        }
                        update_window_title(app, window);
                    }
                    ElementState::Released => {
                        app.handle_mouse_release();
                        update_window_title(app, window);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = (position.x, position.y);

                // Every move while dragging is a new layout report
                if app.handle_mouse_move(position.x) {
                    update_window_title(app, window);
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

/// Update window title with the current margins and active handle
fn update_window_title(app: &App, window: &Window) {
    let title = window_title(app.base_title(), app.layout(), app.active_side(), app.is_dragging());
    log::debug!("Setting window title to: {:?}", title);
    window.set_title(&title);
}

fn window_title(base: &str, layout: LayoutState, side: ActiveSide, dragging: bool) -> String {
    let mut title = format!(
        "{} - {:.0}% | {:.0}% | {:.0}% [{}]",
        base, layout.left, layout.center, layout.right, side
    );
    if dragging {
        title.push_str(" [DRAG]");
    }
    title
}

fn run_replay(script_path: &Path, config_path: Option<PathBuf>, overshoot: Option<OvershootPolicy>) -> anyhow::Result<()> {
    let config = load_config(config_path).context("failed to load config")?;
    let script = replay::load_script(script_path)
        .with_context(|| format!("failed to load replay script {}", script_path.display()))?;

    let policy = overshoot.unwrap_or(config.layout.overshoot);
    let frames = replay::replay(&script, config.layout.initial, policy);

    let yaml = serde_yaml::to_string(&frames).context("failed to serialize frames")?;
    print!("{}", yaml);
    Ok(())
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting tripane");
    if let Some(ref config_path) = args.config {
        log::info!("Using config file: {}", config_path.display());
    }

    let overshoot = args.overshoot.map(OvershootPolicy::from);

    if let Some(script_path) = args.replay {
        if let Err(e) = run_replay(&script_path, args.config, overshoot) {
            log::error!("Replay failed: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    // Create event loop
    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            eprintln!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = TriPaneApp {
        window: None,
        app: None,
        modifiers: winit::keyboard::ModifiersState::empty(),
        config_path: args.config,
        overshoot,
        cursor_position: (0.0, 0.0),
    };

    // Run event loop
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
