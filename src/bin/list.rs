use jobhunt::{init_logger, FileStore, JobBoard, JobFeed, SavedJobs};

fn main() {
    init_logger(log::LevelFilter::Info);

    let feed = std::env::args()
        .nth(1)
        .map(|location| JobFeed::parse(&location))
        .unwrap_or_default();
    let jobs = feed.load();
    let saved = SavedJobs::load(FileStore::new("data"));
    let board = JobBoard::new(jobs, saved);

    jobhunt::paint(&board.view());
}
