mod board;
mod filter;
mod job;
mod job_feed;
mod render;
mod saved;

pub use board::{BoardView, CardView, Command, JobBoard, ModalView, Toast, JOBS_PER_PAGE};
pub use filter::{ChipGroup, FilterControls, FilterState, SortMode};
pub use job::Job;
pub use job_feed::JobFeed;
pub use render::{paint, paint_controls};
pub use saved::{FileStore, KvStore, MemStore, SavedJobs};

pub fn init_logger(default_level: log::LevelFilter) {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}
