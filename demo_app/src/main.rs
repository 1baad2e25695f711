//! Tabs demo application
//!
//! Runs the overlay headless against a recording backend and a scripted
//! pointer. A main window holds three tab buttons that switch groups, a click
//! counter that spawns a reset button, and a checkbox. Run with
//! `RUST_LOG=debug` to follow focus, drag and close transitions.
//!
//! An optional first argument names a `.toml` or `.ron` overlay config.

use std::cell::Cell;
use std::rc::Rc;

use frost_ui::prelude::*;
use frost_ui::ui::widgets::ElementDesc;

const TABS: [&str; 3] = ["tab_1", "tab_2", "tab_3"];

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("overlay setup failed: {0}")]
    Ui(#[from] UIError),

    #[error("could not load overlay config: {0}")]
    Config(#[from] frost_ui::config::ConfigError),
}

/// One scripted frame of pointer activity
#[derive(Debug, Clone, Copy)]
enum Step {
    Move(f32, f32),
    Press(f32, f32),
    Release(f32, f32),
}

struct TabsDemoApp {
    ui: UIManager,
    renderer: UIRenderData,
    input: UIInputProcessor,
    clicks: Rc<Cell<u32>>,
}

impl TabsDemoApp {
    fn new(config: UIConfig) -> Result<Self, DemoError> {
        log::info!("Creating tabs demo...");
        let mut ui = UIManager::new(config);
        let clicks = Rc::new(Cell::new(0));

        ui.create_window("main", Vec2::new(50.0, 50.0), Vec2::new(400.0, 300.0), "Frost UI")?;
        ui.set_active_window("main")?;

        for (index, tab) in TABS.iter().enumerate() {
            ui.add_group(*tab)?;
            #[allow(clippy::cast_precision_loss)]
            let x = index as f32 * 80.0;
            let label = format!("Tab {}", index + 1);
            ui.add_button(*tab, label, Vec2::new(x, 0.0), Vec2::new(75.0, 20.0), || {})?;
        }

        ui.set_active_group("tab_1")?;
        let counter = clicks.clone();
        let count_click = move || counter.set(counter.get() + 1);
        let size = Vec2::new(100.0, 20.0);
        ui.add_button("counter", "Click me", Vec2::new(10.0, 40.0), size, count_click)?;
        ui.add_label("count", "Clicks: 0", Vec2::new(120.0, 45.0))?;

        ui.set_active_group("tab_2")?;
        ui.add_checkbox("fullscreen", "Fullscreen", Vec2::new(10.0, 40.0), Vec2::new(16.0, 16.0))?
            .set_checkbox_orientation("right");

        ui.set_active_group("tab_3")?;
        ui.add_label("about", "Frost UI overlay", Vec2::new(10.0, 40.0))?
            .scale_text(Vec2::new(2.0, 2.0));

        ui.set_active_group("tab_1")?;
        ui.clear_active_window();

        ui.add_label("hud", "Headless demo", Vec2::new(5.0, 5.0))?;

        Ok(Self {
            ui,
            renderer: UIRenderData::new(),
            input: UIInputProcessor::new(),
            clicks,
        })
    }

    /// Feed one scripted step, run a frame and react to its events
    fn frame(&mut self, step: Step) -> Result<(), DemoError> {
        match step {
            Step::Move(x, y) => self.input.update_mouse_position(x, y),
            Step::Press(x, y) => {
                self.input.update_mouse_position(x, y);
                self.input.update_mouse_button(MouseButton::Left, true);
            }
            Step::Release(x, y) => {
                self.input.update_mouse_position(x, y);
                self.input.update_mouse_button(MouseButton::Left, false);
            }
        }

        self.renderer.clear();
        self.ui.run(&mut self.renderer, &self.input);
        self.input.end_frame();

        for event in self.ui.dispatch_events() {
            self.handle_event(&event)?;
        }

        log::info!(
            "Frame {}: {} draw calls, active group {:?}",
            self.ui.frame_count(),
            self.renderer.commands.len(),
            self.ui.active_group()
        );
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) -> Result<(), DemoError> {
        match event.event_type {
            EventType::ButtonClicked => match event.get_element_id() {
                Some(tab) if TABS.contains(&tab) => {
                    log::info!("Switching to {tab}");
                    self.ui.set_active_group(tab)?;
                }
                Some("counter") => self.on_counter_clicked()?,
                Some("reset") => {
                    self.clicks.set(0);
                    self.update_count_label();
                }
                _ => {}
            },
            EventType::CheckboxToggled => {
                log::info!("Fullscreen: {:?}", self.ui.element_value("fullscreen"));
            }
            EventType::WindowMoved => {
                log::info!("Window moved to {:?}", event.get_position());
            }
            EventType::WindowClosed => {
                log::info!("Window {:?} closed", event.get_window_id());
            }
            EventType::ButtonToggled | EventType::WindowFocused => {}
        }
        Ok(())
    }

    fn on_counter_clicked(&mut self) -> Result<(), DemoError> {
        self.update_count_label();

        if !self.ui.contains_element("reset") {
            let reset = Vec2::new(10.0, 70.0);
            self.ui.add_element(
                ElementDesc::button("reset", "Reset", reset, Vec2::new(100.0, 20.0), || {})
                    .parent("main")
                    .group("tab_1"),
            )?;
        }
        Ok(())
    }

    fn update_count_label(&mut self) {
        let text = format!("Clicks: {}", self.clicks.get());
        if let Some(label) = self.ui.find_element_mut("count") {
            label.set_text(text);
        }
    }

    /// Click the counter twice, reset, visit every tab, drag the window and close it
    fn run(&mut self) -> Result<(), DemoError> {
        let click = |x, y| [Step::Press(x, y), Step::Release(x, y)];

        let mut script = vec![Step::Move(100.0, 120.0)];
        script.extend(click(100.0, 120.0));
        script.extend(click(100.0, 120.0));
        script.extend(click(100.0, 150.0));
        script.extend(click(170.0, 80.0));
        script.extend(click(70.0, 115.0));
        script.extend(click(250.0, 80.0));
        script.extend([
            Step::Press(150.0, 60.0),
            Step::Move(200.0, 110.0),
            Step::Move(250.0, 160.0),
        ]);
        script.push(Step::Release(250.0, 160.0));
        script.extend(click(530.0, 160.0));

        for step in script {
            self.frame(step)?;
        }

        let main = self.ui.find_window("main");
        log::info!(
            "Done: clicks {}, fullscreen {:?}, window closed {:?}",
            self.clicks.get(),
            self.ui.element_value("fullscreen"),
            main.map(UIWindow::is_closed)
        );
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    frost_ui::foundation::logging::init_with_default_filter("info");
    log::info!("Starting Frost UI tabs demo");

    let config = match std::env::args().nth(1) {
        Some(path) => UIConfig::load_from_file(path).map_err(DemoError::from)?,
        None => UIConfig::default(),
    };

    let mut app = TabsDemoApp::new(config)?;
    app.run()?;

    log::info!("Demo finished");
    Ok(())
}
