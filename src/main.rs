//! # Widgetry Demo Entry Point
//!
//! Runs the widget demo: a search box and a password field above a sortable,
//! selectable table of users.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in users
//! widgetry
//!
//! # Load rows from a JSON array of objects
//! widgetry --data ./users.json
//!
//! # Keep the selection attached to rows across re-sorts
//! widgetry --identity id
//!
//! # Print the dataset sorted by a field and exit
//! widgetry --debug --sort age
//! ```
//!
//! ## Key Bindings
//!
//! ### Inputs
//! - Type to edit, `Ctrl+U` clear, `Ctrl+T` show/hide password
//! - `Tab` / `Shift+Tab` - Move focus
//! - `Esc` - Jump to the table
//!
//! ### Table
//! - `j` / `k` / `Up` / `Down` - Move the row cursor
//! - `h` / `l` / `Left` / `Right` - Move the column cursor
//! - `Enter` / `s` - Cycle sort on the current column
//! - `Space` - Toggle the current row, `a` - select/deselect all
//! - `t` - Toggle theme, `L` - Toggle loading, `?` - Help
//! - `q` / `Q` - Quit

use widgetry::logging;
use widgetry::table::{sort, CellValue, Column, Row, SortState};
use widgetry::theme::Theme;
use widgetry::ui::{self, config::Config, dataset, App};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Widgetry - input field and data table widget demo
#[derive(Parser, Debug)]
#[command(name = "widgetry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal input field and data table widget demo", long_about = None)]
struct Args {
    /// JSON file with an array of row objects (defaults to built-in users)
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Theme name (overrides the config file)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Row field used to keep selections attached to rows
    #[arg(long, value_name = "FIELD")]
    identity: Option<String>,

    /// Write logs to this file instead of the data directory
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the dataset and exit
    #[arg(long)]
    debug: bool,

    /// Field to sort by (ascending) when printing with --debug
    #[arg(long, value_name = "FIELD", requires = "debug")]
    sort: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

fn init_logging(log_file: Option<PathBuf>) {
    let path = match log_file.map_or_else(logging::default_log_path, Ok) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Warning: Could not determine log file location: {e:#}");
            return;
        }
    };
    if let Err(e) = logging::init(&path) {
        eprintln!("Warning: Logging disabled: {e:#}");
    }
}

/// Resolve the theme: the CLI flag must name a built-in theme, the config
/// file falls back to the default with a warning.
fn resolve_theme(flag: Option<&str>, config: &Config) -> Result<&'static Theme> {
    if let Some(name) = flag {
        return Theme::by_name(name).with_context(|| {
            let known: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
            format!("Unknown theme: {name} (available: {})", known.join(", "))
        });
    }
    Ok(Theme::by_name(&config.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.theme, "unknown theme in config, using default");
        Theme::default_theme()
    }))
}

fn load_dataset(data: Option<&Path>) -> Result<(Vec<Row>, Vec<Column>)> {
    match data {
        Some(path) => {
            let rows = dataset::load_rows(path)?;
            let columns = dataset::columns_for(&rows);
            Ok((rows, columns))
        }
        None => Ok((dataset::sample_users(), dataset::user_columns())),
    }
}

/// Plain-text dump of the rows, optionally sorted ascending by `field`.
fn format_rows(rows: &[Row], columns: &[Column], field: Option<&str>) -> String {
    let mut state = SortState::new();
    if let Some(field) = field {
        state.toggle(field);
    }

    let mut out = String::new();
    let titles: Vec<&str> = columns.iter().map(|c| c.title.as_str()).collect();
    out.push_str(&titles.join("\t"));
    out.push('\n');
    for row in sort::sort_rows(rows, &state) {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| row.get(&c.field))
            .map(CellValue::to_string)
            .collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

async fn run_application(args: Args) -> Result<()> {
    init_logging(args.log_file.clone());

    let mut config = Config::load();
    if let Some(field) = args.identity.clone() {
        config.row_identity = Some(field);
    }
    let theme = resolve_theme(args.theme.as_deref(), &config)?;

    let (rows, columns) = load_dataset(args.data.as_deref())?;
    if columns.is_empty() {
        anyhow::bail!("Dataset has no rows to derive columns from");
    }

    if args.debug {
        print!("{}", format_rows(&rows, &columns, args.sort.as_deref()));
        println!("\nTotal: {} rows, {} columns", rows.len(), columns.len());
        return Ok(());
    }

    tracing::info!(rows = rows.len(), theme = theme.name, "starting demo");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(rows, columns, &config, theme);
    match Config::path() {
        Ok(path) => app = app.with_config_path(path),
        Err(e) => tracing::warn!("Theme changes will not be saved: {e:#}"),
    }

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    tracing::info!("demo exited");
    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .map_err(|e| anyhow::anyhow!("Failed to draw terminal UI: {e}"))?;

        let event = match event_reader.read_event(Duration::from_millis(100))? {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            // Quit once the script runs out so the loop always ends
            Ok(Some(self.events.pop_front().unwrap_or_else(|| {
                key_event(KeyCode::Char('c'), KeyModifiers::CONTROL)
            })))
        }
    }

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn test_app() -> App {
        App::new(
            dataset::sample_users(),
            dataset::user_columns(),
            &Config::default(),
            Theme::default_theme(),
        )
    }

    #[tokio::test]
    async fn test_run_app_sorts_and_selects_through_keys() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = test_app();
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Esc, KeyModifiers::empty()), // focus table
            key_event(KeyCode::Enter, KeyModifiers::empty()), // sort by name asc
            key_event(KeyCode::Char('j'), KeyModifiers::empty()),
            key_event(KeyCode::Char(' '), KeyModifiers::empty()), // select row 2
            key_event(KeyCode::Char('q'), KeyModifiers::empty()),
        ]);

        run_app(&mut terminal, &mut app, &mut reader).await.unwrap();

        assert!(app.should_quit);
        let selected = app.selected_rows();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].get("name").to_string(), "Bob");
    }

    #[tokio::test]
    async fn test_run_app_quits_on_ctrl_c() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = test_app();
        let mut reader = MockEventReader::new(Vec::new());

        run_app(&mut terminal, &mut app, &mut reader).await.unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_resolve_theme_flag_must_exist() {
        let config = Config::default();
        let err = resolve_theme(Some("Nope"), &config).unwrap_err();
        assert!(err.to_string().contains("Unknown theme: Nope"));
        assert_eq!(resolve_theme(Some("nord"), &config).unwrap().name, "Nord");
    }

    #[test]
    fn test_resolve_theme_bad_config_falls_back() {
        let config = Config {
            theme: "Nope".to_string(),
            ..Config::default()
        };
        assert_eq!(
            resolve_theme(None, &config).unwrap().name,
            Theme::default_theme().name
        );
    }

    #[test]
    fn test_format_rows_sorted_by_field() {
        let rows = dataset::sample_users();
        let columns = dataset::user_columns();
        let text = format_rows(&rows, &columns, Some("age"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name\tEmail\tAge");
        assert!(lines[1].starts_with("Charlie"));
        assert!(lines[3].starts_with("Bob"));
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let err = load_dataset(Some(Path::new("/nonexistent/users.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read data file"));
    }

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["widgetry", "--debug", "--sort", "age", "-t", "Nord"]);
        assert!(args.debug);
        assert_eq!(args.sort.as_deref(), Some("age"));
        assert_eq!(args.theme.as_deref(), Some("Nord"));
        assert!(Args::try_parse_from(["widgetry", "--sort", "age"]).is_err());
    }
}
