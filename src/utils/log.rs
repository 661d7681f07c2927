//! Terminal output: the `log!` macro and build progress bars.
//!
//! ```ignore
//! log!("build"; "rendered {} pages", count);
//!
//! let progress = ProgressBars::new(&[("pages", 11), ("files", 3)]);
//! progress.inc(0);
//! progress.finish();
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stdout},
    sync::{
        Mutex, OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

static TERMINAL_WIDTH: OnceLock<usize> = OnceLock::new();

/// Bar width bounds, in cells.
const BAR_MIN: usize = 10;
const BAR_MAX: usize = 40;

/// Columns taken by `[` `]` and the following space around a module name.
#[inline]
const fn prefix_width(module: &str) -> usize {
    module.len() + 3
}

fn terminal_width() -> usize {
    *TERMINAL_WIDTH.get_or_init(|| size().map_or(120, |(w, _)| w as usize))
}

/// Print a line with a colored `[module]` prefix.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

/// Write `[module] message`, cut to the terminal width.
pub fn log(module: &str, message: &str) {
    let prefix = prefix(module);
    let message = truncate_str(message, terminal_width().saturating_sub(prefix_width(module)));

    let mut out = stdout().lock();
    execute!(out, Clear(ClearType::UntilNewLine)).ok();
    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

fn prefix(module: &str) -> ColoredString {
    let text = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "serve" => text.bright_blue().bold(),
        "watch" => text.bright_green().bold(),
        "error" => text.bright_red().bold(),
        "request" => text.bright_magenta().bold(),
        _ => text.bright_yellow().bold(),
    }
}

/// Longest prefix of `s` within `max` bytes that ends on a char boundary.
fn truncate_str(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

// ============================================================================
// Progress bars
// ============================================================================

/// One line per task, redrawn in place while worker threads report progress.
pub struct ProgressBars {
    bars: Vec<Bar>,
    draw: Mutex<()>,
}

struct Bar {
    label: &'static str,
    total: usize,
    done: AtomicUsize,
}

impl ProgressBars {
    /// Reserve a terminal line for each `(label, total)`.
    pub fn new(tasks: &[(&'static str, usize)]) -> Self {
        let mut out = stdout().lock();
        for _ in tasks {
            writeln!(out).ok();
        }
        out.flush().ok();

        let bars = tasks
            .iter()
            .map(|&(label, total)| Bar {
                label,
                total,
                done: AtomicUsize::new(0),
            })
            .collect();
        Self {
            bars,
            draw: Mutex::new(()),
        }
    }

    /// Advance bar `index` by one. Safe to call from rayon workers.
    pub fn inc(&self, index: usize) {
        let Some(bar) = self.bars.get(index) else {
            return;
        };
        let done = bar.done.fetch_add(1, Ordering::Relaxed) + 1;
        let line = render_bar(bar.label, done, bar.total, terminal_width());

        let _guard = self.draw.lock().ok();
        let up = (self.bars.len() - index) as u16;
        let mut out = stdout().lock();
        execute!(out, cursor::MoveUp(up), Clear(ClearType::CurrentLine)).ok();
        write!(out, "{} {line}", prefix(bar.label)).ok();
        execute!(out, cursor::MoveDown(up)).ok();
        write!(out, "\r").ok();
        out.flush().ok();
    }

    /// Erase the bars and put the cursor back where they started.
    pub fn finish(&self) {
        let _guard = self.draw.lock().ok();
        let rows = self.bars.len() as u16;
        let mut out = stdout().lock();
        execute!(out, cursor::MoveUp(rows)).ok();
        for _ in &self.bars {
            execute!(out, Clear(ClearType::CurrentLine), cursor::MoveDown(1)).ok();
        }
        execute!(out, cursor::MoveUp(rows)).ok();
        out.flush().ok();
    }
}

/// `[████░░░░] 4/8` sized to fit after the `[label] ` prefix.
fn render_bar(label: &str, done: usize, total: usize, width: usize) -> String {
    let count = format!("{done}/{total}");
    let overhead = prefix_width(label) + 3 + count.len();
    let cells = width.saturating_sub(overhead).clamp(BAR_MIN, BAR_MAX);
    let filled = if total == 0 { 0 } else { (done.min(total) * cells) / total };
    format!(
        "[{}{}] {count}",
        "█".repeat(filled),
        "░".repeat(cells - filled)
    )
}
