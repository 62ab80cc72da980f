/// Terminal host for the island component
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use isle3d_core::{
    normalize_angle, InputEvent, Island, IslandHandle, IslandHost, IslandProps, Key,
    PointerPosition, Stage,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod config;
pub mod dial;

pub use config::{AppConfig, TerminalConfig};
pub use dial::DialRenderer;

/// Parent-side state the island reports into
#[derive(Debug, Default)]
pub struct TerminalHost {
    pub is_rotating: bool,
    pub current_stage: Option<Stage>,
    pub stage_reports: u64,
}

impl IslandHost for TerminalHost {
    fn is_rotating(&self) -> bool {
        self.is_rotating
    }

    fn set_is_rotating(&mut self, rotating: bool) {
        self.is_rotating = rotating;
    }

    fn set_current_stage(&mut self, stage: Option<Stage>) {
        self.current_stage = stage;
        self.stage_reports += 1;
    }
}

/// Map a crossterm event onto the component's input model.
///
/// Terminal columns stand in for client X coordinates. Resize and quit keys
/// are handled by the app, not here.
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(KeyEvent { code, kind, .. }) => {
            let key = match code {
                KeyCode::Left => Key::ArrowLeft,
                KeyCode::Right => Key::ArrowRight,
                _ => return None,
            };
            Some(match kind {
                KeyEventKind::Press | KeyEventKind::Repeat => InputEvent::KeyDown(key),
                KeyEventKind::Release => InputEvent::KeyUp(key),
            })
        }
        Event::Mouse(MouseEvent { kind, column, .. }) => {
            let position = PointerPosition::mouse(*column as f64);
            match kind {
                MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown(position)),
                MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp),
                MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                    Some(InputEvent::PointerMove(position))
                }
                MouseEventKind::ScrollDown => Some(InputEvent::Wheel { delta_y: 1.0 }),
                MouseEventKind::ScrollUp => Some(InputEvent::Wheel { delta_y: -1.0 }),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Main application struct for the terminal island viewer
pub struct TerminalApp {
    island: Island<TerminalHost>,
    handle: IslandHandle,
    renderer: DialRenderer,
    config: TerminalConfig,
    running: bool,
    key_release_events: bool,
    held_arrow: Option<(Key, Instant)>,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let (width, height) = terminal::size()?;
        Self::with_size(config, width, height)
    }

    /// Build for a known screen size without querying the terminal
    pub fn with_size(config: AppConfig, width: u16, height: u16) -> anyhow::Result<Self> {
        let props = IslandProps {
            viewport_width: width as f64,
            ..IslandProps::default()
        };
        let (island, handle) = Island::new(props, config.motion, TerminalHost::default())?;

        Ok(Self {
            island,
            handle,
            renderer: DialRenderer::new(width as usize, height as usize),
            config: config.terminal,
            running: true,
            key_release_events: false,
            held_arrow: None,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        self.key_release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if self.key_release_events {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        log::info!(
            "terminal host started, key release events: {}",
            self.key_release_events
        );

        let result = self.main_loop();

        // Cleanup
        if self.key_release_events {
            execute!(stdout(), PopKeyboardEnhancementFlags)?;
        }
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / self.config.fps.max(1) as u64);

        while self.running {
            let frame_start = Instant::now();

            // Drain pending input
            while event::poll(Duration::from_millis(0))? {
                let event = event::read()?;
                self.handle_event(&event, Instant::now());
            }
            self.release_stale_arrow(frame_start);

            // Update
            self.island.on_frame();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                kind: KeyEventKind::Press,
                ..
            }) => {
                self.running = false;
                return;
            }
            Event::Resize(width, height) => {
                self.island.set_viewport_width(*width as f64);
                self.renderer.resize(*width as usize, *height as usize);
                return;
            }
            _ => {}
        }

        if let Some(input) = translate_event(event) {
            match input {
                InputEvent::KeyDown(key) => self.held_arrow = Some((key, now)),
                InputEvent::KeyUp(_) => self.held_arrow = None,
                _ => {}
            }
            self.island.on_event(input);
        }
    }

    /// Without key release reporting, treat a quiet arrow key as released
    fn release_stale_arrow(&mut self, now: Instant) {
        if self.key_release_events {
            return;
        }
        let timeout = Duration::from_millis(self.config.key_release_ms);
        if let Some((key, pressed_at)) = self.held_arrow {
            if now.duration_since(pressed_at) >= timeout {
                self.held_arrow = None;
                self.island.on_event(InputEvent::KeyUp(key));
            }
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        self.renderer.render_dial(self.handle.rotation_y());

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        // Status line
        let state = self.island.rotation();
        let host = self.island.host();
        let stage = host
            .current_stage
            .map(|stage| stage.to_string())
            .unwrap_or_else(|| "no stage".to_string());
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Isle3D | FPS: {:.1} | heading {:.3} rad | velocity {:+.5} | {}{} | \u{2190}/\u{2192} drag scroll = rotate, Q = quit",
                self.fps,
                normalize_angle(state.angle),
                state.velocity,
                stage,
                if host.is_rotating { " | rotating" } else { "" },
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
