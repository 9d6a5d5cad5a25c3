use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, EventStream, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};
use tracing::{error, info};

use nd_api::HeadlinesProvider;
use nd_core::{Error, Result};

use crate::event::{convert_event, Event};
use crate::layout::{DropdownHit, FrameLayout};
use crate::render::Renderer;
use crate::state::{FetchOutcome, FetchRequest, ViewState};

/// One-time cosmetic warmup before the selector first renders.
pub const CATEGORY_WARMUP: Duration = Duration::from_secs(1);

const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Interactive runtime: owns the view state and drives it from terminal
/// input, the warmup timer, and fetch completions. One task mutates
/// state; spawned tasks only report back over the event channel.
pub struct Shell {
    provider: Arc<dyn HeadlinesProvider>,
    state: ViewState,
    renderer: Renderer,
    layout: FrameLayout,
    events_tx: mpsc::Sender<Event>,
    events_rx: mpsc::Receiver<Event>,
    // Mirrors dropdown visibility; the input pump reads it to discard
    // mouse events that race the capture toggle.
    mouse_enabled: Arc<AtomicBool>,
    mouse_captured: bool,
    should_quit: bool,
}

impl Shell {
    pub fn new(provider: Arc<dyn HeadlinesProvider>) -> Self {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            provider,
            state: ViewState::new(),
            renderer: Renderer::new(),
            layout: FrameLayout::compute(false),
            events_tx,
            events_rx,
            mouse_enabled: Arc::new(AtomicBool::new(false)),
            mouse_captured: false,
            should_quit: false,
        }
    }

    /// Runs the interactive loop until the user quits. The terminal is
    /// restored on every exit path, mouse capture included.
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().map_err(|e| Error::Terminal(e.to_string()))?;
        execute!(std::io::stdout(), EnterAlternateScreen)
            .map_err(|e| Error::Terminal(e.to_string()))?;

        let result = self.run_inner().await;

        if self.mouse_captured {
            let _ = execute!(std::io::stdout(), DisableMouseCapture);
        }
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();

        result
    }

    async fn run_inner(&mut self) -> Result<()> {
        self.spawn_input_pump();
        self.spawn_warmup();
        let request = self.state.start_initial_fetch();
        self.spawn_fetch(request);
        self.redraw()?;

        while let Some(event) = self.events_rx.recv().await {
            self.handle_event(event);
            if self.should_quit {
                break;
            }
            self.sync_mouse_capture()?;
            self.redraw()?;
        }
        Ok(())
    }

    fn spawn_input_pump(&self) {
        let tx = self.events_tx.clone();
        let mouse_enabled = self.mouse_enabled.clone();
        tokio::spawn(async move {
            let mut stream = EventStream::new();
            while let Some(Ok(raw)) = stream.next().await {
                if let Some(event) = convert_event(raw, mouse_enabled.load(Ordering::Relaxed)) {
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
            }
        });
    }

    fn spawn_warmup(&self) {
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            sleep(CATEGORY_WARMUP).await;
            let _ = tx.send(Event::CategoriesReady).await;
        });
    }

    /// Issues the fetch for `request` on a background task. Errors stop
    /// here: logged, then reported as a plain failure event.
    fn spawn_fetch(&self, request: FetchRequest) {
        let provider = self.provider.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = match provider.top_headlines(request.selection).await {
                Ok(articles) => {
                    info!(
                        "📰 fetched {} articles for {}",
                        articles.len(),
                        request.selection.label()
                    );
                    FetchOutcome::Success(articles)
                }
                Err(e) => {
                    error!("failed to fetch headlines: {}", e);
                    FetchOutcome::Failure
                }
            };
            let _ = tx
                .send(Event::FetchDone {
                    generation: request.generation,
                    outcome,
                })
                .await;
        });
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, _) => {}
            Event::CategoriesReady => self.state.categories_ready(),
            Event::FetchDone {
                generation,
                outcome,
            } => self.state.apply_fetch(generation, outcome),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.state.dropdown_open {
                    self.state.close_dropdown();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Enter => {
                if self.state.dropdown_open {
                    if let Some(request) = self.state.choose_highlighted() {
                        self.spawn_fetch(request);
                    }
                } else {
                    self.state.toggle_dropdown();
                }
            }
            KeyCode::Up => self.state.highlight_prev(),
            KeyCode::Down => self.state.highlight_next(),
            _ => {}
        }
    }

    /// Mouse input only exists while the dropdown is open. A press on a
    /// row selects it, on the button closes it, anywhere else is an
    /// outside interaction and closes it too.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let MouseEventKind::Down(button) = mouse.kind else {
            return;
        };
        if !self.state.dropdown_open {
            return;
        }
        match self.layout.hit_dropdown(mouse.column, mouse.row) {
            Some(DropdownHit::Selector) if button == MouseButton::Left => {
                self.state.toggle_dropdown();
            }
            Some(DropdownHit::Row(index)) if button == MouseButton::Left => {
                if let Some(request) = self.state.select_index(index) {
                    self.spawn_fetch(request);
                }
            }
            Some(_) => {}
            None => self.state.close_dropdown(),
        }
    }

    /// Keeps terminal mouse capture scoped to dropdown visibility:
    /// enabled the moment it opens, released the moment it closes.
    fn sync_mouse_capture(&mut self) -> Result<()> {
        if self.state.dropdown_open == self.mouse_captured {
            return Ok(());
        }
        self.mouse_captured = self.state.dropdown_open;
        self.mouse_enabled
            .store(self.mouse_captured, Ordering::Relaxed);
        if self.mouse_captured {
            execute!(std::io::stdout(), EnableMouseCapture)
        } else {
            execute!(std::io::stdout(), DisableMouseCapture)
        }
        .map_err(|e| Error::Terminal(e.to_string()))
    }

    fn redraw(&mut self) -> Result<()> {
        self.layout = self.renderer.render(&self.state)?;
        Ok(())
    }
}
