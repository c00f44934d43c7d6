use crate::engine::{
    Card, DEFAULT_REVEAL_DELAY, Outcome, PairCount, RevertToken, Session, TrackerState,
};
use crate::error::AppError;
use crate::i18n::{self, Catalog, Lang, Translate};
use clap::Args;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::env;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

const TICK_MS: u64 = 33;
const GRID_COLUMNS: usize = 4;
const LANG_ENV: &str = "MEMORY_LANG";

const PRIMARY: Rgb = Rgb { r: 124, g: 77, b: 255 };
const SECONDARY: Rgb = Rgb { r: 255, g: 64, b: 129 };
const SUCCESS: Rgb = Rgb { r: 0, g: 230, b: 118 };
const INFO: Rgb = Rgb { r: 41, g: 121, b: 255 };
const MUTED: Rgb = Rgb { r: 140, g: 140, b: 140 };

#[derive(Clone, Copy, PartialEq, Eq)]
struct Rgb
{
    r: u8,
    g: u8,
    b: u8,
}

struct TerminalGuard
{
    stdout: Stdout,
}

impl TerminalGuard
{
    fn enter() -> io::Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self { stdout })
    }

    fn stdout(&mut self) -> &mut Stdout
    {
        &mut self.stdout
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Args, Debug, Default)]
pub struct MemoryArgs
{
    /// Pairs on the board: 4, 6 or 8
    #[arg(long, value_parser = parse_pairs)]
    pairs: Option<PairCount>,

    /// Interface language (fr, en, vi, es, ko, hi, it, zh, ar). Defaults to $MEMORY_LANG, then fr
    #[arg(long, value_parser = parse_lang)]
    lang: Option<Lang>,

    /// How long a mismatched pair stays visible, in milliseconds
    #[arg(long, value_name = "MS")]
    reveal_ms: Option<u64>,

    /// Seed for a reproducible deal
    #[arg(long)]
    seed: Option<u64>,

    /// Go straight to pair selection
    #[arg(long)]
    skip_intro: bool,
}

pub struct MemoryConfig
{
    pairs: PairCount,
    lang: Lang,
    reveal_delay: Duration,
    seed: Option<u64>,
    skip_intro: bool,
}

impl MemoryConfig
{
    pub fn from_args(args: MemoryArgs) -> Self
    {
        let lang = match args.lang {
            Some(lang) => lang,
            None => lang_from_setting(env::var(LANG_ENV).ok()),
        };
        Self {
            pairs: args.pairs.unwrap_or_default(),
            lang,
            reveal_delay: args
                .reveal_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_REVEAL_DELAY),
            seed: args.seed,
            skip_intro: args.skip_intro,
        }
    }
}

pub fn parse_pairs(value: &str) -> Result<PairCount, AppError>
{
    value
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(PairCount::from_count)
        .ok_or_else(|| AppError::UnsupportedPairs(value.to_string()))
}

pub fn parse_lang(value: &str) -> Result<Lang, AppError>
{
    Lang::from_code(value.trim()).ok_or_else(|| AppError::UnknownLanguage(value.to_string()))
}

fn lang_from_setting(value: Option<String>) -> Lang
{
    let Some(value) = value else {
        return Lang::default();
    };
    match Lang::from_code(&value) {
        Some(lang) => lang,
        None => {
            eprintln!(
                "Warning: {LANG_ENV}='{value}' is not a supported language. Using {}.",
                i18n::FALLBACK.code()
            );
            i18n::FALLBACK
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen
{
    Presentation,
    Menu,
    Board,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action
{
    Quit,
    Continue,
    CycleLanguage,
    Previous,
    Next,
    Choose(PairCount),
    Up,
    Down,
    Left,
    Right,
    Flip,
    NewGame,
}

struct App
{
    screen: Screen,
    session: Session,
    catalog: Catalog,
    choice: PairCount,
    cursor: usize,
    reverts: Vec<RevertToken>,
}

impl App
{
    fn new(config: &MemoryConfig) -> Self
    {
        let session = match config.seed {
            Some(seed) => Session::seeded(seed, config.reveal_delay),
            None => Session::new(config.reveal_delay),
        };
        Self {
            screen: if config.skip_intro {
                Screen::Menu
            } else {
                Screen::Presentation
            },
            session,
            catalog: Catalog::new(config.lang),
            choice: config.pairs,
            cursor: 0,
            reverts: Vec::new(),
        }
    }

    /// Hides mismatched pairs whose reveal time is over.
    ///
    /// Tokens left over from an abandoned board are rejected by the session.
    fn tick(&mut self, now: Instant)
    {
        let (due, waiting): (Vec<RevertToken>, Vec<RevertToken>) =
            self.reverts.iter().partition(|token| token.due() <= now);
        self.reverts = waiting;
        for token in due {
            self.session.apply_revert(token);
        }
    }

    /// Returns true when the player asked to quit.
    fn apply(&mut self, action: Action, now: Instant) -> bool
    {
        match (self.screen, action) {
            (_, Action::Quit) => return true,
            (_, Action::CycleLanguage) => {
                let next = self.catalog.lang().next();
                self.catalog.set_lang(next);
            }
            (Screen::Presentation, Action::Continue) => self.screen = Screen::Menu,
            (Screen::Menu, Action::Previous) => self.choice = step_choice(self.choice, false),
            (Screen::Menu, Action::Next) => self.choice = step_choice(self.choice, true),
            (Screen::Menu, Action::Choose(pairs)) => self.choice = pairs,
            (Screen::Menu, Action::Continue) => {
                self.session.start_game(self.choice.pairs());
                self.cursor = 0;
                self.screen = Screen::Board;
            }
            (Screen::Board, Action::Up | Action::Down | Action::Left | Action::Right) => {
                self.cursor = move_cursor(self.cursor, self.session.cards().len(), action);
            }
            (Screen::Board, Action::Flip) => {
                if let Some(card) = self.session.cards().get(self.cursor) {
                    let id = card.id;
                    if let Outcome::Mismatched(token) = self.session.select_card(id, now) {
                        self.reverts.push(token);
                    }
                }
            }
            (Screen::Board, Action::NewGame) => {
                self.session.end_game();
                self.screen = Screen::Menu;
            }
            _ => {}
        }
        false
    }
}

pub fn run_with_config(config: MemoryConfig) -> Result<(), AppError>
{
    let mut term = TerminalGuard::enter()?;
    let mut app = App::new(&config);
    let mut last_tick: Option<Instant> = None;

    loop {
        let now = Instant::now();
        app.tick(now);

        if handle_input(&mut app, now)? {
            break;
        }

        if last_tick.is_none_or(|tick| tick.elapsed() >= Duration::from_millis(TICK_MS)) {
            draw_ui(term.stdout(), &render(&app, &app.catalog))?;
            last_tick = Some(Instant::now());
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    Ok(())
}

fn handle_input(app: &mut App, now: Instant) -> Result<bool, AppError>
{
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(action) = action_for(app.screen, key) {
                if app.apply(action, now) {
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}

fn action_for(screen: Screen, key: KeyEvent) -> Option<Action>
{
    let KeyEvent { code, modifiers, .. } = key;
    match code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Action::Quit)
        }
        KeyCode::Char('l') | KeyCode::Char('L') => return Some(Action::CycleLanguage),
        _ => {}
    }

    match screen {
        Screen::Presentation => match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Continue),
            _ => None,
        },
        Screen::Menu => match code {
            KeyCode::Left | KeyCode::Up => Some(Action::Previous),
            KeyCode::Right | KeyCode::Down => Some(Action::Next),
            KeyCode::Char(ch @ '1'..='3') => {
                let idx = ch as usize - '1' as usize;
                Some(Action::Choose(PairCount::ALL[idx]))
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Continue),
            _ => None,
        },
        Screen::Board => match code {
            KeyCode::Up => Some(Action::Up),
            KeyCode::Down => Some(Action::Down),
            KeyCode::Left => Some(Action::Left),
            KeyCode::Right => Some(Action::Right),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Flip),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NewGame),
            _ => None,
        },
    }
}

fn step_choice(current: PairCount, forward: bool) -> PairCount
{
    let idx = PairCount::ALL
        .iter()
        .position(|pairs| *pairs == current)
        .unwrap_or(0);
    let next = if forward {
        (idx + 1).min(PairCount::ALL.len() - 1)
    } else {
        idx.saturating_sub(1)
    };
    PairCount::ALL[next]
}

fn move_cursor(cursor: usize, len: usize, action: Action) -> usize
{
    if len == 0 {
        return 0;
    }
    let cursor = cursor.min(len - 1);
    let col = cursor % GRID_COLUMNS;
    match action {
        Action::Left if col > 0 => cursor - 1,
        Action::Right if col + 1 < GRID_COLUMNS && cursor + 1 < len => cursor + 1,
        Action::Up if cursor >= GRID_COLUMNS => cursor - GRID_COLUMNS,
        Action::Down if cursor + GRID_COLUMNS < len => cursor + GRID_COLUMNS,
        _ => cursor,
    }
}

fn render(app: &App, tr: &dyn Translate) -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push(format!(
        "{}   {}: {}",
        paint(&tr.text("title"), PRIMARY),
        tr.text("language"),
        app.catalog.lang().native_name()
    ));
    lines.push(String::new());

    match app.screen {
        Screen::Presentation => render_presentation(&mut lines, tr),
        Screen::Menu => render_menu(&mut lines, tr, app.choice),
        Screen::Board => render_board(&mut lines, tr, &app.session, app.cursor),
    }

    let hint = match app.screen {
        Screen::Presentation => "hint.presentation",
        Screen::Menu => "hint.menu",
        Screen::Board => "hint.board",
    };
    lines.push(String::new());
    lines.push(paint(&tr.text(hint), MUTED));
    lines
}

fn render_presentation(lines: &mut Vec<String>, tr: &dyn Translate)
{
    lines.push(paint(&tr.text("presentation.welcome"), SECONDARY));
    lines.push(tr.text("presentation.description"));
    lines.push(String::new());

    lines.push(paint(&tr.text("presentation.howToPlay"), INFO));
    for key in [
        "presentation.rule1",
        "presentation.rule2",
        "presentation.rule3",
        "presentation.rule4",
    ] {
        lines.push(format!("  • {}", tr.text(key)));
    }
    lines.push(String::new());

    lines.push(paint(&tr.text("presentation.features"), INFO));
    for key in [
        "presentation.feature1",
        "presentation.feature2",
        "presentation.feature3",
        "presentation.feature4",
    ] {
        lines.push(format!("  • {}", tr.text(key)));
    }
    lines.push(String::new());

    lines.push(button(&tr.text("presentation.letsPlay")));
}

fn render_menu(lines: &mut Vec<String>, tr: &dyn Translate, choice: PairCount)
{
    lines.push(paint(&tr.text("choosePairs"), INFO));
    lines.push(String::new());
    for (idx, pairs) in PairCount::ALL.iter().enumerate() {
        let label = format!(
            "{}. {} / {}",
            idx + 1,
            tr.count("pairs", pairs.pairs() as u64),
            tr.count("cards", pairs.cards() as u64)
        );
        if *pairs == choice {
            lines.push(format!("> {}", paint(&label, SECONDARY)));
        } else {
            lines.push(format!("  {}", label));
        }
    }
    lines.push(String::new());
    lines.push(button(&tr.text("startGame")));
}

fn render_board(lines: &mut Vec<String>, tr: &dyn Translate, session: &Session, cursor: usize)
{
    let total = session.pair_count().map(PairCount::pairs).unwrap_or(0);
    lines.push(format!(
        "{}   {}/{}",
        paint(&tr.count("moves", session.moves() as u64), INFO),
        session.matched_pairs(),
        total
    ));
    if session.is_won() {
        lines.push(paint(&tr.count("victory", session.moves() as u64), SECONDARY));
    }
    lines.push(String::new());

    let waiting = match session.tracker_state() {
        TrackerState::OneSelected(id) => Some(id),
        _ => None,
    };
    for (row_idx, row) in session.cards().chunks(GRID_COLUMNS).enumerate() {
        let mut line = String::new();
        for (col, card) in row.iter().enumerate() {
            let selected = row_idx * GRID_COLUMNS + col == cursor;
            line.push_str(&render_card(card, selected, waiting == Some(card.id)));
        }
        lines.push(line);
        lines.push(String::new());
    }
}

/// `waiting` marks the first card of a pair that still needs its partner.
fn render_card(card: &Card, selected: bool, waiting: bool) -> String
{
    let (face, background) = if card.matched {
        (card.symbol, SUCCESS)
    } else if waiting {
        (card.symbol, SECONDARY)
    } else if card.face_up {
        (card.symbol, INFO)
    } else {
        ("? ", PRIMARY)
    };
    let (open, close) = if selected {
        (paint("[", SECONDARY), paint("]", SECONDARY))
    } else {
        (" ".to_string(), " ".to_string())
    };
    format!("{open}{} {face} \x1b[0m{close}", ansi_background(background))
}

fn button(label: &str) -> String
{
    format!("{} {} \x1b[0m", ansi_background(PRIMARY), label)
}

fn paint(text: &str, color: Rgb) -> String
{
    format!("{}{}\x1b[0m", ansi_color(color), text)
}

fn ansi_color(color: Rgb) -> String
{
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

fn ansi_background(color: Rgb) -> String
{
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

fn draw_ui(stdout: &mut Stdout, lines: &[String]) -> Result<(), AppError>
{
    let output = format!("{}\r\n", lines.join("\r\n"));
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn config(skip_intro: bool) -> MemoryConfig
    {
        MemoryConfig {
            pairs: PairCount::Four,
            lang: Lang::En,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            seed: Some(99),
            skip_intro,
        }
    }

    fn key(code: KeyCode) -> KeyEvent
    {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn strip_ansi(line: &str) -> String
    {
        let mut out = String::new();
        let mut chars = line.chars();
        while let Some(ch) = chars.next() {
            if ch == '\x1b' {
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    fn screen_text(app: &App) -> String
    {
        render(app, &app.catalog)
            .iter()
            .map(|line| strip_ansi(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn parses_pair_counts()
    {
        assert_eq!(parse_pairs("4").unwrap(), PairCount::Four);
        assert_eq!(parse_pairs(" 8 ").unwrap(), PairCount::Eight);
        assert!(matches!(parse_pairs("5"), Err(AppError::UnsupportedPairs(_))));
        assert!(matches!(parse_pairs("six"), Err(AppError::UnsupportedPairs(_))));
    }

    #[test]
    fn parses_languages()
    {
        assert_eq!(parse_lang("vi").unwrap(), Lang::Vi);
        assert!(matches!(parse_lang("klingon"), Err(AppError::UnknownLanguage(_))));
    }

    #[test]
    fn environment_language_falls_back_to_french()
    {
        assert_eq!(lang_from_setting(None), Lang::Fr);
        assert_eq!(lang_from_setting(Some("it_IT.UTF-8".to_string())), Lang::It);
        assert_eq!(lang_from_setting(Some("xx".to_string())), Lang::Fr);
    }

    #[test]
    fn args_fill_in_defaults()
    {
        let config = MemoryConfig::from_args(MemoryArgs {
            lang: Some(Lang::Ko),
            reveal_ms: Some(750),
            ..MemoryArgs::default()
        });
        assert_eq!(config.pairs, PairCount::Six);
        assert_eq!(config.lang, Lang::Ko);
        assert_eq!(config.reveal_delay, Duration::from_millis(750));
        assert_eq!(config.seed, None);
        assert!(!config.skip_intro);
    }

    #[test]
    fn keys_map_to_actions_per_screen()
    {
        assert_eq!(action_for(Screen::Board, key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            action_for(Screen::Menu, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            action_for(Screen::Presentation, key(KeyCode::Char('L'))),
            Some(Action::CycleLanguage)
        );
        assert_eq!(
            action_for(Screen::Presentation, key(KeyCode::Enter)),
            Some(Action::Continue)
        );
        assert_eq!(
            action_for(Screen::Menu, key(KeyCode::Char('3'))),
            Some(Action::Choose(PairCount::Eight))
        );
        assert_eq!(action_for(Screen::Board, key(KeyCode::Char(' '))), Some(Action::Flip));
        assert_eq!(action_for(Screen::Board, key(KeyCode::Char('n'))), Some(Action::NewGame));
        assert_eq!(action_for(Screen::Presentation, key(KeyCode::Char('n'))), None);
    }

    #[test]
    fn cursor_stays_on_the_grid()
    {
        assert_eq!(move_cursor(0, 8, Action::Left), 0);
        assert_eq!(move_cursor(0, 8, Action::Up), 0);
        assert_eq!(move_cursor(3, 8, Action::Right), 3);
        assert_eq!(move_cursor(3, 8, Action::Down), 7);
        assert_eq!(move_cursor(7, 8, Action::Down), 7);
        assert_eq!(move_cursor(5, 8, Action::Up), 1);
        assert_eq!(move_cursor(10, 12, Action::Right), 11);
        assert_eq!(move_cursor(4, 0, Action::Right), 0);
    }

    #[test]
    fn menu_choice_is_clamped()
    {
        assert_eq!(step_choice(PairCount::Four, false), PairCount::Four);
        assert_eq!(step_choice(PairCount::Four, true), PairCount::Six);
        assert_eq!(step_choice(PairCount::Eight, true), PairCount::Eight);
    }

    #[test]
    fn screens_flow_from_intro_to_board_and_back()
    {
        let now = Instant::now();
        let mut app = App::new(&config(false));
        assert_eq!(app.screen, Screen::Presentation);

        assert!(!app.apply(Action::Continue, now));
        assert_eq!(app.screen, Screen::Menu);

        app.apply(Action::Next, now);
        assert_eq!(app.choice, PairCount::Six);
        app.apply(Action::Continue, now);
        assert_eq!(app.screen, Screen::Board);
        assert_eq!(app.session.cards().len(), 12);

        app.apply(Action::NewGame, now);
        assert_eq!(app.screen, Screen::Menu);
        assert!(!app.session.is_started());

        assert!(app.apply(Action::Quit, now));
    }

    #[test]
    fn flipping_goes_through_the_session()
    {
        let now = Instant::now();
        let mut app = App::new(&config(true));
        app.apply(Action::Continue, now);
        app.apply(Action::Right, now);
        app.apply(Action::Flip, now);

        let id = app.session.cards()[1].id;
        assert!(app.session.cards()[1].face_up);
        assert_eq!(app.session.tracker_state(), TrackerState::OneSelected(id));
    }

    fn flip_at(app: &mut App, cursor: usize, now: Instant)
    {
        app.cursor = cursor;
        app.apply(Action::Flip, now);
    }

    fn mismatched_positions(app: &App) -> (usize, usize)
    {
        let cards = app.session.cards();
        let other = cards
            .iter()
            .position(|card| card.symbol != cards[0].symbol)
            .unwrap();
        (0, other)
    }

    fn hidden_on_screen(app: &App) -> usize
    {
        screen_text(app).matches('?').count()
    }

    #[test]
    fn mismatched_pair_is_hidden_again_after_the_delay()
    {
        let now = Instant::now();
        let mut app = App::new(&config(true));
        app.apply(Action::Continue, now);
        assert_eq!(hidden_on_screen(&app), 8);

        let (a, b) = mismatched_positions(&app);
        flip_at(&mut app, a, now);
        flip_at(&mut app, b, now);
        assert_eq!(app.reverts.len(), 1);
        assert_eq!(hidden_on_screen(&app), 6);

        app.tick(now + DEFAULT_REVEAL_DELAY - Duration::from_millis(1));
        assert_eq!(hidden_on_screen(&app), 6);

        app.tick(now + DEFAULT_REVEAL_DELAY);
        assert_eq!(hidden_on_screen(&app), 8);
        assert!(app.reverts.is_empty());
    }

    #[test]
    fn reverts_from_an_abandoned_board_do_not_touch_the_new_one()
    {
        let now = Instant::now();
        let mut app = App::new(&config(true));
        app.apply(Action::Continue, now);
        let (a, b) = mismatched_positions(&app);
        flip_at(&mut app, a, now);
        flip_at(&mut app, b, now);
        assert_eq!(app.reverts.len(), 1);

        app.apply(Action::NewGame, now);
        app.apply(Action::Continue, now);
        flip_at(&mut app, 0, now);

        app.tick(now + DEFAULT_REVEAL_DELAY * 5);
        assert!(app.reverts.is_empty());
        assert!(app.session.cards()[0].face_up);
        assert_eq!(hidden_on_screen(&app), 7);
    }

    #[test]
    fn board_header_leaves_key_hints_to_the_footer()
    {
        let now = Instant::now();
        let mut app = App::new(&config(true));
        app.apply(Action::Continue, now);
        let text = screen_text(&app);
        let header = text.lines().find(|line| line.contains("0 moves")).unwrap();
        assert_eq!(header.trim(), "0 moves   0/4");
        assert_eq!(text.matches("N: new game").count(), 1);
    }

    #[test]
    fn first_pick_is_highlighted_until_its_partner_is_chosen()
    {
        let now = Instant::now();
        let mut app = App::new(&config(true));
        app.apply(Action::Continue, now);
        let waiting = ansi_background(SECONDARY);
        assert!(!render(&app, &app.catalog).iter().any(|line| line.contains(&waiting)));

        let (a, b) = mismatched_positions(&app);
        flip_at(&mut app, a, now);
        let card = &app.session.cards()[a];
        assert!(render_card(card, false, true).contains(&waiting));
        assert!(render(&app, &app.catalog).iter().any(|line| line.contains(&waiting)));

        flip_at(&mut app, b, now);
        assert!(!render(&app, &app.catalog).iter().any(|line| line.contains(&waiting)));
    }

    #[test]
    fn language_cycles_on_every_screen()
    {
        let now = Instant::now();
        let mut app = App::new(&config(true));
        app.apply(Action::CycleLanguage, now);
        assert_eq!(app.catalog.lang(), Lang::Vi);
        app.apply(Action::Continue, now);
        app.apply(Action::CycleLanguage, now);
        assert_eq!(app.catalog.lang(), Lang::Es);
    }

    #[test]
    fn board_shows_moves_and_victory()
    {
        let now = Instant::now();
        let mut app = App::new(&config(true));
        app.apply(Action::Continue, now);
        assert!(screen_text(&app).contains("0 moves"));
        assert!(!screen_text(&app).contains("Congratulations"));

        for symbol in PairCount::Four.symbols() {
            let ids: Vec<_> = app
                .session
                .cards()
                .iter()
                .filter(|card| card.symbol == *symbol)
                .map(|card| card.id)
                .collect();
            app.session.select_card(ids[0], now);
            app.session.select_card(ids[1], now);
        }

        let text = screen_text(&app);
        assert!(text.contains("4 moves"));
        assert!(text.contains("Congratulations! You won in 4 moves!"));
    }

    #[test]
    fn menu_lists_translated_sizes()
    {
        let mut app = App::new(&config(true));
        app.catalog.set_lang(Lang::Fr);
        let text = screen_text(&app);
        assert!(text.contains("4 paires / 8 cartes"));
        assert!(text.contains("8 paires / 16 cartes"));
        assert!(text.contains("Commencer la partie"));
    }

    #[test]
    fn presentation_lists_rules_and_features()
    {
        let app = App::new(&config(false));
        let text = screen_text(&app);
        assert!(text.contains("Welcome to the Memory Game!"));
        assert!(text.contains("Flip two cards each turn."));
        assert!(text.contains("Nine languages available"));
        assert!(text.contains("Let's play!"));
    }
}
