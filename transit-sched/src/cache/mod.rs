mod build_observer;
pub mod build_ops;
mod cache_registry;
mod schedule_cache;

pub use build_observer::{BuildObserver, CancellationToken, NoopObserver, ProgressBarObserver};
pub use build_ops::BuildResult;
pub use cache_registry::CacheRegistry;
pub use schedule_cache::ScheduleCache;
