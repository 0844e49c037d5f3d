//! cellgrid - render one frame of a demo grid to stdout

use cellgrid::config::{self, ResolvedConfig};
use cellgrid::logging;
use cellgrid::model::error::AppError;
use cellgrid::model::{Point, Rect};
use cellgrid::pane::GridPane;
use cellgrid::render::{buffer_lines, BufferSurface};
use cellgrid::space::{Grid, Range};
use cellgrid::view::{Layout, Selection, ViewFill, ViewSelection, ViewText};
use clap::Parser;
use ratatui::buffer::Buffer;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::info;

/// cellgrid - draws a grid through the viewport cache into the terminal
#[derive(Parser, Debug)]
#[command(name = "cellgrid")]
#[command(version)]
#[command(about = "Render one frame of a demo grid through the viewport cache")]
pub struct Args {
    /// Number of rows in the demo grid
    #[arg(long, default_value = "1000")]
    pub rows: usize,

    /// Number of columns in the demo grid
    #[arg(long, default_value = "26")]
    pub columns: usize,

    /// Row height in pixels (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub row_height: Option<u32>,

    /// Column width in pixels (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub column_width: Option<u32>,

    /// Output width in terminal columns
    #[arg(long, default_value = "80", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Output height in terminal rows
    #[arg(long, default_value = "24", value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Horizontal scroll offset in pixels
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(i32).range(0..))]
    pub scroll_x: i32,

    /// Vertical scroll offset in pixels
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(i32).range(0..))]
    pub scroll_y: i32,

    /// Highlight a column as selected
    #[arg(long)]
    pub select_column: Option<usize>,

    /// Log level for viewport cache rebuilds (overrides config)
    #[arg(long, value_parser = ["off", "error", "warn", "info", "debug", "trace"])]
    pub cache_log_level: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

fn run(args: &Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(
            with_env,
            args.row_height,
            args.column_width,
            args.cache_log_level.clone(),
        )
    };

    let filter = logging::filter(&config.log_filter, config.cache_log_level.as_deref())?;
    logging::init(&config.log_file_path, filter)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let lines = render_frame(args, &config);

    let mut stdout = std::io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{}", line)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Demo grid: background, selection highlight and "Item [r, c]" text.
fn demo_pane(args: &Args, config: &ResolvedConfig) -> GridPane {
    let selection = Selection::shared();
    if let Some(column) = args.select_column {
        selection.borrow_mut().set_selection(Range::Column(column));
    }

    let mut grid = Grid::with_sizes(args.rows, args.columns, config.row_height, config.column_width);
    grid.add_schema(Range::All, Rc::new(ViewFill::background()), Layout::background());
    grid.add_schema(
        Range::All,
        Rc::new(ViewSelection::new(selection)),
        Layout::background(),
    );
    grid.add_schema(
        Range::All,
        Rc::new(ViewText::new(|cell| format!("Item {}", cell))),
        Layout::client(),
    );
    GridPane::new(grid)
}

/// Draw one frame into a `width` x `height` terminal buffer.
fn render_frame(args: &Args, config: &ResolvedConfig) -> Vec<String> {
    let ctx = config.gui_context();
    let cell_size = config.cell_size();
    let mut pane = demo_pane(args, config);

    pane.set_window(Rect::new(
        0,
        0,
        i32::from(args.width) * cell_size.width,
        i32::from(args.height) * cell_size.height,
    ));
    pane.scroll_to(Point::new(args.scroll_x, args.scroll_y));

    let mut buffer = Buffer::empty(ratatui::layout::Rect::new(0, 0, args.width, args.height));
    {
        let mut surface = BufferSurface::new(&mut buffer, cell_size);
        pane.draw(&mut surface, &ctx);
    }

    match pane.frame_bounds() {
        Some(frame) => info!(frame = %frame, cells = frame.len(), "Rendered frame"),
        None => info!("Grid is empty, nothing rendered"),
    }

    buffer_lines(&buffer)
}
