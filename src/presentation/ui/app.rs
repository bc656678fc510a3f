//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use tachyonfx::{Effect, Interpolation, fx};
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

use crate::application::services::content::TAGLINE;
use crate::application::services::{DeckSession, RevealScheduler};
use crate::domain::entities::{DeckConfigUpdate, RevealStep, SlideEntry};
use crate::domain::keybinding::Action;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, FooterButtons, HeaderBar, HeaderBarStyle, ProgressBar, SlideView,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);
const TRANSITION_MS: u32 = 400;

/// Owns the session, the reveal timer and the terminal loop.
pub struct App {
    session: DeckSession,
    scheduler: RevealScheduler,
    step_rx: mpsc::UnboundedReceiver<RevealStep>,
    host_rx: Option<mpsc::UnboundedReceiver<DeckConfigUpdate>>,
    events: EventHandler,
    theme: Theme,
    animations: bool,
    transition: Option<Effect>,
    animation_ticks: Option<Interval>,
    pending_duration: Duration,
    buttons: FooterButtons,
    exiting: bool,
}

impl App {
    #[must_use]
    pub fn new(session: DeckSession, reveal_interval: Duration) -> Self {
        let (step_tx, step_rx) = mpsc::unbounded_channel();
        Self {
            session,
            scheduler: RevealScheduler::new(reveal_interval, step_tx),
            step_rx,
            host_rx: None,
            events: EventHandler::default(),
            theme: Theme::default(),
            animations: true,
            transition: None,
            animation_ticks: None,
            pending_duration: Duration::ZERO,
            buttons: FooterButtons::default(),
            exiting: false,
        }
    }

    /// Receives partial updates forwarded by a host listener.
    #[must_use]
    pub fn with_host_updates(mut self, rx: mpsc::UnboundedReceiver<DeckConfigUpdate>) -> Self {
        self.host_rx = Some(rx);
        self
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub const fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        self
    }

    #[must_use]
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.events = self.events.with_mouse(enabled);
        self
    }

    #[must_use]
    pub const fn session(&self) -> &DeckSession {
        &self.session
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.start();
        self.run_event_loop(terminal).await?;
        self.scheduler.cancel();
        info!("Application exiting normally");
        Ok(())
    }

    /// Enters the first slide. Its reveal sequence starts like any other visit.
    fn start(&mut self) {
        let entry = self.session.current_entry();
        self.enter(entry);
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            let host_future = match &mut self.host_rx {
                Some(rx) => futures_util::future::Either::Left(rx.recv()),
                None => futures_util::future::Either::Right(std::future::pending()),
            };
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(step) = self.step_rx.recv() => {
                    if self.handle_reveal_step(step) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                update = host_future => {
                    if let Some(update) = update {
                        self.handle_host_update(&update);
                    } else {
                        debug!("Host listener closed");
                        self.host_rx = None;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                () = next_frame(&mut self.animation_ticks) => {
                    self.advance_animation();
                    terminal.draw(|frame| self.render(frame))?;
                }

                input = terminal_event => {
                    self.handle_terminal_input(input)?;
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    /// Handles one item of the terminal event stream. A closed stream ends the loop.
    fn handle_terminal_input(
        &mut self,
        input: Option<std::io::Result<Event>>,
    ) -> color_eyre::Result<()> {
        match input {
            Some(Ok(event)) => self.handle_terminal_event(&event),
            Some(Err(e)) => return Err(e.into()),
            None => {
                warn!("Terminal event stream closed");
                self.exiting = true;
            }
        }
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) {
        match self.events.handle(event, &self.buttons) {
            EventResult::Exit => self.exiting = true,
            EventResult::Navigate(action) => self.navigate(action),
            EventResult::Continue | EventResult::Redraw => {}
        }
    }

    fn navigate(&mut self, action: Action) {
        if let Some(entry) = self.session.handle_action(action) {
            self.enter(entry);
        }
    }

    fn enter(&mut self, entry: SlideEntry) {
        debug!(slide = entry.slide, visit = %entry.visit, "Entered slide");
        self.scheduler.schedule(entry);
        if self.animations {
            self.transition = Some(fx::coalesce((TRANSITION_MS, Interpolation::CircOut)));
            self.animation_ticks = Some(animation_interval());
            self.pending_duration = Duration::ZERO;
        }
    }

    fn advance_animation(&mut self) {
        self.pending_duration = self.pending_duration.saturating_add(ANIMATION_TICK_RATE);
    }

    fn handle_reveal_step(&mut self, step: RevealStep) -> bool {
        self.session.apply_reveal_step(step)
    }

    fn handle_host_update(&mut self, update: &DeckConfigUpdate) {
        if self.session.apply_config_update(update) {
            let config = self.session.config();
            info!(
                course_title = %config.course_title,
                company_name = %config.company_name,
                "Applied host config update"
            );
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header, progress, meta, _, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let snapshot = self.session.snapshot();
        let config = self.session.config();

        frame.render_widget(
            HeaderBar::new(&config.company_name).style(HeaderBarStyle::from_theme(&self.theme)),
            header,
        );
        frame.render_widget(
            ProgressBar::new(snapshot.current, snapshot.total).theme(&self.theme),
            progress,
        );
        self.render_meta(frame, meta, snapshot.position(), snapshot.total);

        let body = inset(body);
        if let Some(slide) = self.session.current_slide() {
            frame.render_widget(
                SlideView::new(slide)
                    .reveal_cursor(snapshot.cursor)
                    .theme(self.theme),
                body,
            );
        }
        self.process_transition(frame, body);

        self.buttons = FooterButtons::layout(footer);
        frame.render_widget(
            FooterBar::new(self.events.keybindings())
                .position(snapshot.current, snapshot.total)
                .style(FooterBarStyle::from_theme(&self.theme)),
            footer,
        );
    }

    fn render_meta(&self, frame: &mut Frame, area: Rect, position: usize, total: usize) {
        let area = inset(area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                TAGLINE.to_uppercase(),
                self.theme.label_style,
            ))),
            area,
        );
        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled(
                    format!("Slide {position} de {total}"),
                    self.theme.dimmed_style,
                ))
                .right_aligned(),
            ),
            area,
        );
    }

    fn process_transition(&mut self, frame: &mut Frame, area: Rect) {
        let Some(effect) = &mut self.transition else {
            return;
        };
        let duration = std::mem::take(&mut self.pending_duration);
        let overflow = effect.process(duration.into(), frame.buffer_mut(), area);
        if overflow.is_some() {
            self.transition = None;
            self.animation_ticks = None;
        }
    }
}

/// Frame clock of one transition. It starts with the transition, and late ticks
/// are delayed rather than replayed so the effect always spans real time.
fn animation_interval() -> Interval {
    let mut ticks = interval_at(Instant::now() + ANIMATION_TICK_RATE, ANIMATION_TICK_RATE);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticks
}

/// Resolves on the next animation frame. Pends forever while no transition runs.
async fn next_frame(ticks: &mut Option<Interval>) {
    match ticks {
        Some(ticks) => {
            ticks.tick().await;
        }
        None => std::future::pending().await,
    }
}

/// Horizontal padding around slide content.
fn inset(area: Rect) -> Rect {
    let pad = if area.width > 20 { 2 } else { 0 };
    Rect::new(area.x + pad, area.y, area.width - 2 * pad, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DeckConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    const D: Duration = Duration::from_millis(280);

    fn app() -> App {
        App::new(DeckSession::new(DeckConfig::default()), D).with_animations(false)
    }

    fn press(app: &mut App, code: KeyCode) {
        let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        app.handle_terminal_event(&event);
    }

    /// Lets due timer tasks run and applies every step they sent.
    async fn drain_steps(app: &mut App) {
        tokio::time::sleep(Duration::from_millis(1)).await;
        while let Ok(step) = app.step_rx.try_recv() {
            app.handle_reveal_step(step);
        }
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test(start_paused = true)]
    async fn test_arrow_keys_step_and_reveal() {
        let mut app = app();
        app.start();

        for _ in 0..3 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.session().snapshot().current, 3);
        assert_eq!(app.session().snapshot().cursor, None);

        drain_steps(&mut app).await;
        assert_eq!(app.session().snapshot().cursor, Some(0));

        tokio::time::advance(D * 2).await;
        drain_steps(&mut app).await;
        assert_eq!(app.session().snapshot().cursor, Some(2));
        assert!(app.session().snapshot().fully_revealed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_slide_discards_pending_steps() {
        let mut app = app();
        app.start();
        for _ in 0..3 {
            press(&mut app, KeyCode::Right);
        }
        drain_steps(&mut app).await;

        press(&mut app, KeyCode::Right);
        tokio::time::advance(D * 5).await;
        drain_steps(&mut app).await;

        let snapshot = app.session().snapshot();
        assert_eq!(snapshot.current, 4);
        assert_eq!(snapshot.revealable_count, 0);
        assert_eq!(snapshot.cursor, None);
        assert!(snapshot.fully_revealed());
    }

    async fn drive_transition(app: &mut App, terminal: &mut Terminal<TestBackend>) {
        terminal.draw(|frame| app.render(frame)).unwrap();
        for _ in 0..100 {
            if app.transition.is_none() {
                return;
            }
            next_frame(&mut app.animation_ticks).await;
            app.advance_animation();
            terminal.draw(|frame| app.render(frame)).unwrap();
        }
        panic!("transition never finished");
    }

    #[tokio::test(start_paused = true)]
    async fn test_transition_after_idle_spans_its_duration() {
        let mut app = App::new(DeckSession::new(DeckConfig::default()), D);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        app.start();
        drive_transition(&mut app, &mut terminal).await;
        assert!(app.animation_ticks.is_none());

        tokio::time::sleep(Duration::from_secs(2)).await;

        press(&mut app, KeyCode::Right);
        assert!(app.transition.is_some());
        let started = Instant::now();
        drive_transition(&mut app, &mut terminal).await;

        let elapsed = started.elapsed();
        let full = Duration::from_millis(u64::from(TRANSITION_MS));
        assert!(
            elapsed >= full - ANIMATION_TICK_RATE && elapsed <= full + ANIMATION_TICK_RATE * 2,
            "transition took {elapsed:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_event_stream_exits() {
        let mut app = app();
        app.handle_terminal_input(None).unwrap();
        assert!(app.exiting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_stream_error_is_propagated() {
        let mut app = app();
        let result = app.handle_terminal_input(Some(Err(std::io::Error::other("tty gone"))));
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_key_stops_loop() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.exiting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_host_update_keeps_position() {
        let mut app = app();
        app.start();
        press(&mut app, KeyCode::Right);

        app.handle_host_update(&DeckConfigUpdate {
            course_title: Some("Curso ao vivo".to_string()),
            ..DeckConfigUpdate::default()
        });

        assert_eq!(app.session().snapshot().current, 1);
        assert_eq!(app.session().config().course_title, "Curso ao vivo");
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_shows_chrome_and_title() {
        let mut app = app();
        app.start();
        press(&mut app, KeyCode::Right);

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let text = screen_text(terminal.backend().buffer());
        assert!(text.contains("CRESCER"));
        assert!(text.contains("Slide 2 de 13"));
        assert!(text.contains("Inteligência Artificial para Análise de Dados"));
        assert!(text.contains("Próximo ▶"));
        assert!(!app.buttons.next.is_empty());
    }
}
