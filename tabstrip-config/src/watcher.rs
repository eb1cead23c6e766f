//! Settings file watcher.
//!
//! Every open overlay re-renders when settings change, so the settings file
//! is watched and a reload event is queued after each debounced write.

use anyhow::{Context, Result};
use notify::{Config as NotifyConfig, Event, PollWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

/// The settings file changed and should be reloaded.
#[derive(Debug, Clone)]
pub struct SettingsReloadEvent {
    pub path: PathBuf,
}

/// Watches the settings file and queues reload events.
pub struct SettingsWatcher {
    /// Kept alive to keep watching
    _watcher: Box<dyn Watcher + Send>,
    events: Receiver<SettingsReloadEvent>,
}

impl std::fmt::Debug for SettingsWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsWatcher").finish_non_exhaustive()
    }
}

/// Shared state of the event handler closure.
#[derive(Clone)]
struct Filter {
    filename: OsString,
    path: PathBuf,
    debounce: Duration,
    tx: Sender<SettingsReloadEvent>,
    last_sent: Arc<Mutex<Option<Instant>>>,
}

impl Filter {
    fn handle(&self, result: std::result::Result<Event, notify::Error>) {
        let Ok(event) = result else {
            return;
        };

        // Create covers editors that save by rename
        if !matches!(
            event.kind,
            notify::EventKind::Modify(_) | notify::EventKind::Create(_)
        ) {
            return;
        }

        if !event
            .paths
            .iter()
            .any(|p| p.file_name().is_some_and(|f| f == self.filename))
        {
            return;
        }

        {
            let now = Instant::now();
            let mut last = self.last_sent.lock();
            if last.is_some_and(|t| now.duration_since(t) < self.debounce) {
                log::trace!("Debouncing settings reload event");
                return;
            }
            *last = Some(now);
        }

        log::info!("Settings file changed: {}", self.path.display());
        if let Err(e) = self.tx.send(SettingsReloadEvent {
            path: self.path.clone(),
        }) {
            log::error!("Failed to send settings reload event: {}", e);
        }
    }
}

impl SettingsWatcher {
    /// Start watching `settings_path`.
    ///
    /// Uses the native backend, falling back to a 500 ms `PollWatcher` when
    /// the native one cannot start (containers, network filesystems).
    ///
    /// # Errors
    /// Fails if the file does not exist or neither backend can watch it.
    pub fn new(settings_path: &Path, debounce_ms: u64) -> Result<Self> {
        if !settings_path.exists() {
            anyhow::bail!("Settings file not found: {}", settings_path.display());
        }

        let canonical = settings_path
            .canonicalize()
            .unwrap_or_else(|_| settings_path.to_path_buf());
        let filename = canonical
            .file_name()
            .context("Settings path has no filename")?
            .to_os_string();
        let parent_dir = canonical
            .parent()
            .context("Settings path has no parent directory")?
            .to_path_buf();

        let (tx, rx) = channel();
        let filter = Filter {
            filename,
            path: canonical.clone(),
            debounce: Duration::from_millis(debounce_ms),
            tx,
            last_sent: Arc::new(Mutex::new(None)),
        };

        let mut watcher = Self::create_watcher(filter)?;
        watcher
            .watch(&parent_dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch directory {}", parent_dir.display()))?;

        log::info!("Settings hot reload: watching {}", canonical.display());

        Ok(Self {
            _watcher: watcher,
            events: rx,
        })
    }

    fn create_watcher(filter: Filter) -> Result<Box<dyn Watcher + Send>> {
        let native = filter.clone();
        match notify::recommended_watcher(move |res| native.handle(res)) {
            Ok(w) => {
                log::debug!("Settings watcher: using native backend");
                Ok(Box::new(w))
            }
            Err(e) => {
                log::warn!(
                    "Settings watcher: native backend unavailable ({}); falling back to PollWatcher",
                    e
                );
                let poll = PollWatcher::new(
                    move |res| filter.handle(res),
                    NotifyConfig::default().with_poll_interval(Duration::from_millis(500)),
                )
                .context("Failed to create fallback PollWatcher")?;
                Ok(Box::new(poll))
            }
        }
    }

    /// Next pending reload event, if any (non-blocking)
    pub fn try_recv(&self) -> Option<SettingsReloadEvent> {
        self.events.try_recv().ok()
    }
}
