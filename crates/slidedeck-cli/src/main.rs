use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use slidedeck_config::{Config, SyntaxConfig};
use slidedeck_engine::{ContentBlock, LoadedDeck, Slide, Syntax, load_deck, to_html, to_source};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    View,
    Html,
    Source,
    InitConfig,
}

impl Mode {
    fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "--html" => Some(Mode::Html),
            "--source" => Some(Mode::Source),
            "--init-config" => Some(Mode::InitConfig),
            _ => None,
        }
    }
}

fn parse_args(args: &[String]) -> Result<(Option<PathBuf>, Mode), String> {
    let mut deck = None;
    let mut mode = Mode::View;
    for arg in args {
        if let Some(flag_mode) = Mode::from_flag(arg) {
            if mode != Mode::View {
                return Err("--html, --source and --init-config are exclusive".into());
            }
            mode = flag_mode;
            continue;
        }
        match arg.as_str() {
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            path if deck.is_none() => deck = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument {extra}")),
        }
    }
    Ok((deck, mode))
}

fn usage(program: &str) -> String {
    format!("Usage: {program} [deck-file] [--html | --source]\n       {program} --init-config")
}

fn syntax_from_config(config: &SyntaxConfig) -> Syntax {
    Syntax {
        delimiter: config.delimiter.clone(),
        directive_prefix: config.directive_prefix.clone(),
        notes_heading: config.notes_heading.clone(),
        notes_directive: (!config.notes_directive.is_empty())
            .then(|| config.notes_directive.clone()),
    }
}

/// Plain-text rendering of one slide for the content panel.
fn slide_lines(slide: &Slide, show_notes: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(title) = &slide.title {
        lines.push(title.clone());
        lines.push("=".repeat(title.chars().count()));
        lines.push(String::new());
    }

    for block in slide.blocks() {
        match block {
            ContentBlock::Paragraph(text) => {
                lines.extend(text.lines().map(str::to_string));
                lines.push(String::new());
            }
            ContentBlock::Heading { level, text } => {
                lines.push(format!("{} {}", "#".repeat(*level as usize), text));
                lines.push(String::new());
            }
            ContentBlock::CodeBlock { language, text } => {
                lines.push(format!("```{}", language.as_deref().unwrap_or("")));
                lines.extend(text.lines().map(str::to_string));
                lines.push("```".to_string());
                lines.push(String::new());
            }
            ContentBlock::MediaEmbed(media) => {
                let mut label = format!("[{}: {}", media.kind.tag(), media.source);
                if let Some(alt) = media.attribute("alt") {
                    label.push_str(&format!(" \"{alt}\""));
                }
                if media.has_attribute("controls") {
                    label.push_str(" (controls)");
                }
                label.push(']');
                lines.push(label);
                lines.push(String::new());
            }
            ContentBlock::List { ordered, items } => {
                // One running number per nesting depth.
                let mut counters: Vec<usize> = Vec::new();
                for item in items {
                    let depth = item.depth as usize;
                    counters.truncate(depth + 1);
                    counters.resize(depth + 1, 0);
                    counters[depth] += 1;
                    let indent = "  ".repeat(depth);
                    let marker = if *ordered {
                        format!("{}.", counters[depth])
                    } else {
                        "•".to_string()
                    };
                    let mut text_lines = item.text.lines();
                    let first = text_lines.next().unwrap_or("");
                    lines.push(format!("{indent}{marker} {first}"));
                    for rest in text_lines {
                        lines.push(format!("{indent}  {rest}"));
                    }
                }
                lines.push(String::new());
            }
        }
    }

    if show_notes && let Some(notes) = &slide.presenter_notes {
        lines.push("--- presenter notes ---".to_string());
        lines.extend(notes.lines().map(str::to_string));
    }

    lines
}

struct App {
    deck: LoadedDeck,
    slide_list_state: ListState,
    show_notes: bool,
}

impl App {
    fn new(deck: LoadedDeck) -> Self {
        let mut slide_list_state = ListState::default();
        if !deck.document.is_empty() {
            slide_list_state.select(Some(0));
        }
        Self {
            deck,
            slide_list_state,
            show_notes: false,
        }
    }

    fn next_slide(&mut self) {
        let last = self.deck.document.len().saturating_sub(1);
        let i = match self.slide_list_state.selected() {
            Some(i) => (i + 1).min(last),
            None => 0,
        };
        self.slide_list_state.select(Some(i));
    }

    fn previous_slide(&mut self) {
        let i = self
            .slide_list_state
            .selected()
            .map_or(0, |i| i.saturating_sub(1));
        self.slide_list_state.select(Some(i));
    }

    fn toggle_notes(&mut self) {
        self.show_notes = !self.show_notes;
    }

    fn current_slide(&self) -> Option<&Slide> {
        self.slide_list_state
            .selected()
            .and_then(|i| self.deck.document.get(i))
    }
}

fn init_logging(mode: Mode) {
    // The viewer owns the terminal, so keep stderr quiet unless asked.
    let level = match mode {
        Mode::View => log::LevelFilter::Warn,
        Mode::Html | Mode::Source | Mode::InitConfig => log::LevelFilter::Info,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("slidedeck-cli", String::as_str);

    let (deck_arg, mode) = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(program));
            process::exit(1);
        }
    };

    init_logging(mode);

    let config_path = Config::config_path();
    if mode == Mode::InitConfig {
        return init_config(&config_path);
    }

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let Some(deck_path) = deck_arg.or_else(|| config.deck_path.clone()) else {
        eprintln!("Error: No deck file provided and no deck_path in config");
        eprintln!("{}", usage(program));
        eprintln!("Or set deck_path in {}", config_path.display());
        process::exit(1);
    };

    let syntax = syntax_from_config(&config.syntax);
    let deck = load_deck(&deck_path, &syntax)
        .with_context(|| format!("Deck '{}' could not be loaded", deck_path.display()))?;

    match mode {
        Mode::Html => print!("{}", to_html(&deck.document)),
        Mode::Source => print!("{}", to_source(&deck.document, &deck.source)),
        Mode::View => run_viewer(deck)?,
        Mode::InitConfig => {}
    }

    Ok(())
}

/// Writes a config file holding the default deck grammar.
fn init_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        anyhow::bail!("Config file {} already exists", config_path.display());
    }
    Config::default()
        .save_to_path(config_path)
        .with_context(|| format!("Config file '{}' could not be written", config_path.display()))?;
    log::info!("wrote default config to {}", config_path.display());
    println!("Wrote {}", config_path.display());
    Ok(())
}

fn run_viewer(deck: LoadedDeck) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(deck);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char(' ') => {
                    app.next_slide()
                }
                KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.previous_slide(),
                KeyCode::Char('n') => app.toggle_notes(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Slide list panel
    let slide_items: Vec<ListItem> = app
        .deck
        .document
        .titles()
        .into_iter()
        .enumerate()
        .map(|(i, title)| {
            let title = title.unwrap_or("(untitled)");
            ListItem::new(Line::from(format!("{:>3}. {title}", i + 1)))
        })
        .collect();

    let deck_name = app
        .deck
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Slides".to_string());
    let slides_list = List::new(slide_items)
        .block(Block::default().borders(Borders::ALL).title(deck_name))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(slides_list, chunks[0], &mut app.slide_list_state);

    // Slide content panel
    let (content_title, content_text) = match app.current_slide() {
        Some(slide) => {
            let mut heading = format!("Slide {}/{}", slide.index + 1, app.deck.document.len());
            if !slide.directives.is_empty() {
                let directives: Vec<String> = slide
                    .directives
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect();
                heading.push_str(&format!(" [{}]", directives.join(", ")));
            }
            let lines = slide_lines(slide, app.show_notes)
                .into_iter()
                .map(Line::from)
                .collect::<Vec<_>>();
            (heading, lines)
        }
        None => ("Slide".to_string(), vec![Line::from("This deck has no slides")]),
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(content_title))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions
    let notes_state = if app.show_notes { "on" } else { "off" };
    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | ↓/→/j/Space: Next | ↑/←/k: Previous | "),
        Span::styled(
            format!("n: Notes ({notes_state})"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    f.render_widget(help, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slidedeck_engine::parse_str;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_deck_and_mode() {
        assert_eq!(
            parse_args(&args(&["talk.md", "--html"])),
            Ok((Some(PathBuf::from("talk.md")), Mode::Html))
        );
        assert_eq!(parse_args(&args(&[])), Ok((None, Mode::View)));
        assert_eq!(
            parse_args(&args(&["--source"])),
            Ok((None, Mode::Source))
        );
        assert_eq!(
            parse_args(&args(&["--init-config"])),
            Ok((None, Mode::InitConfig))
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(&args(&["--html", "--source"])).is_err());
        assert!(parse_args(&args(&["--init-config", "--html"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
        assert!(parse_args(&args(&["a.md", "b.md"])).is_err());
    }

    #[test]
    fn empty_notes_directive_disables_it() {
        let config = SyntaxConfig {
            notes_directive: String::new(),
            ..SyntaxConfig::default()
        };
        let syntax = syntax_from_config(&config);
        assert_eq!(syntax.notes_directive, None);
        assert_eq!(syntax_from_config(&SyntaxConfig::default()), Syntax::default());
    }

    #[test]
    fn slide_lines_hide_notes_until_toggled() {
        let doc = parse_str(
            "# Views\n\n- generic\n  - ListView\n\n```python\npass\n```\n\n# Presenter Notes\nbreathe\n",
        )
        .unwrap();
        let slide = &doc.slides[0];

        assert_eq!(
            slide_lines(slide, false),
            vec![
                "Views", "=====", "", "• generic", "  • ListView", "", "```python", "pass", "```",
                "",
            ]
        );
        let with_notes = slide_lines(slide, true);
        assert_eq!(
            with_notes[with_notes.len() - 2..],
            ["--- presenter notes ---", "breathe"]
        );
    }

    #[test]
    fn ordered_items_are_numbered_per_depth() {
        let doc = parse_str("1. a\n   1. b\n   2. c\n2. d\n").unwrap();
        assert_eq!(
            slide_lines(&doc.slides[0], false),
            vec!["1. a", "  1. b", "  2. c", "2. d", ""]
        );
    }

    #[test]
    fn media_label_shows_alt_and_controls() {
        let doc = parse_str(
            "<img src=\"menu.png\" alt=\"Menu\">\n<video src=\"demo.webm\" controls></video>\n",
        )
        .unwrap();
        assert_eq!(
            slide_lines(&doc.slides[0], false),
            vec![
                "[img: menu.png \"Menu\"]",
                "",
                "[video: demo.webm (controls)]",
                "",
            ]
        );
    }

    #[test]
    fn init_config_writes_defaults_once() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("slidedeck").join("config.toml");

        init_config(&path).unwrap();
        let loaded = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded.syntax, SyntaxConfig::default());
        assert!(init_config(&path).is_err());
    }

    #[test]
    fn navigation_stays_within_deck() {
        let doc = parse_str("# One\n---\n# Two\n").unwrap();
        let deck = LoadedDeck {
            path: PathBuf::from("deck.md"),
            source: "# One\n---\n# Two\n".into(),
            document: doc,
        };
        let mut app = App::new(deck);

        app.previous_slide();
        assert_eq!(app.slide_list_state.selected(), Some(0));
        app.next_slide();
        app.next_slide();
        assert_eq!(app.slide_list_state.selected(), Some(1));
        assert_eq!(app.current_slide().and_then(|s| s.title.as_deref()), Some("Two"));
        app.toggle_notes();
        assert!(app.show_notes);
    }
}
