//! Config watcher for the dev server.
//!
//! Watches the directory holding `seokit.toml` (editors often replace the
//! file instead of writing it in place) and swaps in the new config once
//! events settle.
//!
//! ```text
//! notify events ──► Debouncer (300ms) ──► reload_config() ──► cfg() readers
//! ```

use crate::{
    config::{cfg, reload_config},
    log,
};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{RecvTimeoutError, channel},
    time::{Duration, Instant},
};

const DEBOUNCE_MS: u64 = 300;

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// Batches rapid file events.
struct Debouncer {
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: FxHashSet::default(),
            last_event: None,
        }
    }

    fn add(&mut self, event: Event) {
        self.pending
            .extend(event.paths.into_iter().filter(|p| !is_temp_file(p)));
        self.last_event = Some(Instant::now());
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(60)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

const fn is_relevant(event: &Event) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
}

/// `true` if any changed path names the config file.
fn touches_config(paths: &[PathBuf], config_path: &Path) -> bool {
    let Some(name) = config_path.file_name() else {
        return false;
    };
    paths.iter().any(|p| p == config_path || p.file_name() == Some(name))
}

fn handle_changes(paths: &[PathBuf], config_path: &Path) {
    if !touches_config(paths, config_path) {
        return;
    }
    match reload_config() {
        Ok(true) => log!("watch"; "config reloaded"),
        Ok(false) => {}
        Err(e) => log!("watch"; "config not reloaded: {e:#}"),
    }
}

/// Block on config file events until the channel closes.
pub fn watch_config_blocking() -> Result<()> {
    let config_path = cfg().config_path.clone();
    let dir = config_path
        .parent()
        .context("config file has no parent directory")?
        .to_path_buf();

    let (tx, rx) = channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;
    log!("watch"; "{}", config_path.display());

    let mut debouncer = Debouncer::new();
    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) => debouncer.add(event),
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(RecvTimeoutError::Timeout) if debouncer.ready() => {
                handle_changes(&debouncer.take(), &config_path);
            }
            Err(RecvTimeoutError::Disconnected) => break,
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};

    fn event(kind: EventKind, paths: &[&str]) -> Event {
        let mut event = Event::new(kind);
        for path in paths {
            event = event.add_path(PathBuf::from(path));
        }
        event
    }

    #[test]
    fn test_is_temp_file() {
        assert!(is_temp_file(Path::new("/site/seokit.toml~")));
        assert!(is_temp_file(Path::new("/site/.seokit.toml.swp")));
        assert!(is_temp_file(Path::new("/site/seokit.toml.bak")));
        assert!(!is_temp_file(Path::new("/site/seokit.toml")));
    }

    #[test]
    fn test_is_relevant() {
        assert!(is_relevant(&Event::new(EventKind::Modify(ModifyKind::Any))));
        assert!(is_relevant(&Event::new(EventKind::Create(CreateKind::File))));
        assert!(!is_relevant(&Event::new(EventKind::Remove(RemoveKind::File))));
    }

    #[test]
    fn test_touches_config() {
        let config = Path::new("/site/seokit.toml");
        assert!(touches_config(&[PathBuf::from("/site/seokit.toml")], config));
        // symlinked or relative roots report a different prefix
        assert!(touches_config(&[PathBuf::from("/private/site/seokit.toml")], config));
        assert!(!touches_config(&[PathBuf::from("/site/notes.md")], config));
        assert!(!touches_config(&[], config));
    }

    #[test]
    fn test_debouncer_batches_and_filters() {
        let mut debouncer = Debouncer::new();
        assert!(!debouncer.ready());
        assert_eq!(debouncer.timeout(), Duration::from_secs(60));

        debouncer.add(event(
            EventKind::Modify(ModifyKind::Any),
            &["/site/seokit.toml", "/site/seokit.toml~", "/site/seokit.toml"],
        ));
        assert_eq!(debouncer.pending.len(), 1);
        assert_eq!(debouncer.timeout(), Duration::from_millis(DEBOUNCE_MS));
        // too soon after the last event
        assert!(!debouncer.ready());

        debouncer.last_event = Some(Instant::now() - Duration::from_millis(DEBOUNCE_MS + 1));
        assert!(debouncer.ready());
        assert_eq!(debouncer.take(), vec![PathBuf::from("/site/seokit.toml")]);
        assert!(!debouncer.ready());
    }
}
