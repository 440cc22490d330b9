use kdam::{Bar, BarExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// a progress collaborator for cache builds. the builder reports each source
/// row it processes; implementations decide what to show, keeping terminal
/// concerns out of the build itself.
pub trait BuildObserver {
    /// called once per source row with the table being read and the number
    /// of rows processed so far in that table.
    fn on_row(&mut self, table: &str, rows_processed: usize);
}

/// an observer that reports nothing, for hosts without a progress surface.
#[derive(Default)]
pub struct NoopObserver;

impl BuildObserver for NoopObserver {
    fn on_row(&mut self, _table: &str, _rows_processed: usize) {}
}

/// a terminal progress bar observer, one bar per table as the build moves
/// through the store.
#[derive(Default)]
pub struct ProgressBarObserver {
    table: String,
    bar: Option<Bar>,
}

impl ProgressBarObserver {
    pub fn new() -> ProgressBarObserver {
        ProgressBarObserver {
            table: String::new(),
            bar: None,
        }
    }
}

impl BuildObserver for ProgressBarObserver {
    fn on_row(&mut self, table: &str, rows_processed: usize) {
        if self.table != table {
            self.table = String::from(table);
            self.bar = Bar::builder().desc(table).build().ok();
        }
        if let Some(bar) = self.bar.as_mut() {
            let _ = bar.update_to(rows_processed);
        }
    }
}

/// a cooperative cancellation signal checked by the builder between source
/// rows. clone freely; all clones share one flag, so a UI thread can cancel
/// a build running elsewhere.
#[derive(Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> CancellationToken {
        CancellationToken {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
