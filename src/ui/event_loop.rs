use std::{
    error::Error,
    time::{Duration, Instant},
};

use ratatui::crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::core::config::Config;
use crate::ui::app::UiApp;
use crate::ui::keybindings::KeyMap;
use crate::ui::lifecycle::{restore_terminal, setup_terminal, UiTerminal};
use crate::ui::renderer::ui;
use crate::ui::theme::Theme;
use crate::utils::color::detect_color_depth;

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

const MAX_FPS: u64 = 60;
const IDLE_SLEEP: Duration = Duration::from_millis(8);
const READER_POLL: Duration = Duration::from_millis(50);

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !event_tx.is_closed() {
            match event::poll(READER_POLL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        debug!(%err, "failed to read terminal event");
                    }
                },
                Ok(false) => {}
                Err(err) => {
                    debug!(%err, "terminal event poll failed");
                    break;
                }
            }
        }
    })
}

#[derive(Debug, Default)]
struct EventProcessingOutcome {
    events_processed: bool,
    request_redraw: bool,
}

fn process_ui_events(
    app: &mut UiApp,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    keymap: &KeyMap,
    now: Instant,
) -> EventProcessingOutcome {
    let mut outcome = EventProcessingOutcome::default();

    while let Ok(ev) = event_rx.try_recv() {
        outcome.events_processed = true;
        match ev {
            UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(action) = keymap.action_for(&key) {
                    outcome.request_redraw |= app.handle_action(action, now);
                }
            }
            UiEvent::Crossterm(Event::Mouse(mouse))
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
            {
                outcome.request_redraw |= app.handle_click(mouse.column, mouse.row, now);
            }
            UiEvent::Crossterm(Event::Resize(_, _)) => {
                outcome.request_redraw = true;
            }
            UiEvent::Crossterm(_) => {}
        }
        if app.exit_requested {
            break;
        }
    }

    outcome
}

async fn drive(
    app: &mut UiApp,
    terminal: &mut UiTerminal,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
) -> Result<(), Box<dyn Error>> {
    let keymap = KeyMap::default();
    let frame_duration = Duration::from_millis(1000 / MAX_FPS);
    let mut last_draw: Option<Instant> = None;
    let mut request_redraw = true;

    loop {
        let now = Instant::now();
        if app.advance(now) {
            request_redraw = true;
        }

        let frame_due = last_draw.is_none_or(|last| now.duration_since(last) >= frame_duration);
        if request_redraw && frame_due {
            terminal.draw(|f| ui(f, app))?;
            last_draw = Some(now);
            request_redraw = false;
        }

        let outcome = process_ui_events(app, event_rx, &keymap, now);
        if app.exit_requested {
            return Ok(());
        }
        if outcome.request_redraw {
            request_redraw = true;
        }

        if !outcome.events_processed {
            tokio::time::sleep(IDLE_SLEEP).await;
        }
    }
}

/// Run the interactive UI until the user quits. The terminal is restored
/// even when drawing fails.
pub async fn run_ui(config: Config, theme_name: &str) -> Result<(), Box<dyn Error>> {
    let depth = detect_color_depth();
    let theme = Theme::from_name(theme_name);
    let mut app = UiApp::new(&config, theme, depth, Instant::now());
    info!(theme = theme_name, ?depth, "starting interactive session");

    let mut terminal = setup_terminal()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let reader = spawn_event_reader(event_tx);

    let result = drive(&mut app, &mut terminal, &mut event_rx).await;

    drop(event_rx);
    let restored = restore_terminal(&mut terminal);
    if let Err(err) = reader.await {
        debug!(%err, "event reader did not shut down cleanly");
    }
    info!("interactive session ended");

    result?;
    restored
}
