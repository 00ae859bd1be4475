use std::time::{Duration, Instant};

use crate::{
    filter::{filter_jobs, FilterControls, FilterState, SortMode},
    job::Job,
    saved::{KvStore, SavedJobs},
};

pub const JOBS_PER_PAGE: usize = 6;

/// Card descriptions are cut off past this many characters.
const CARD_DESC_LEN: usize = 140;

const TOAST_DURATION: Duration = Duration::from_millis(2800);

/// A user action on the board. Each variant maps to one control on the
/// surface: search boxes, dropdowns, chips, page buttons, save toggles, and
/// the detail modal.
#[derive(Clone, Debug)]
pub enum Command {
    /// The hero search box. Applies the search and syncs the sidebar box.
    HeroSearch(String),
    /// The sidebar search box.
    Search(String),
    SetLocation(String),
    SetCategory(String),
    SetExperience(String),
    SetType(String),
    SetSort(SortMode),
    /// Resets every filter control to its default and refilters.
    ClearFilters,
    GoToPage(usize),
    ToggleSave(u32),
    OpenModal(u32),
    CloseModal,
}

/// The job board controller: owns the full job list, the filter controls,
/// the saved set, and the view state (page, modal target, toast). All state
/// transitions go through [`JobBoard::apply`], which returns a render-ready
/// view of the result.
pub struct JobBoard<S: KvStore> {
    jobs: Vec<Job>,
    controls: FilterControls,
    saved: SavedJobs<S>,
    /// Indices into `jobs`, recomputed wholesale on every filter change.
    filtered: Vec<usize>,
    /// 1-based.
    page: usize,
    modal_job: Option<u32>,
    toast: Option<Toast>,
}

impl<S: KvStore> JobBoard<S> {
    pub fn new(jobs: Vec<Job>, saved: SavedJobs<S>) -> Self {
        let controls = FilterControls::for_jobs(&jobs);
        let mut board = Self {
            jobs,
            controls,
            saved,
            filtered: Vec::new(),
            page: 1,
            modal_job: None,
            toast: None,
        };
        board.refilter();
        board
    }

    /// Applies one user action and returns the resulting view.
    pub fn apply(&mut self, command: Command) -> BoardView {
        match command {
            Command::HeroSearch(text) => {
                self.controls.set_hero_search(&text);
                self.refilter();
            }
            Command::Search(text) => {
                self.controls.sidebar_search = text;
                self.refilter();
            }
            Command::SetLocation(location) => {
                self.controls.location = location;
                self.refilter();
            }
            Command::SetCategory(value) => {
                self.controls.category.select(&value);
                self.refilter();
            }
            Command::SetExperience(value) => {
                self.controls.experience.select(&value);
                self.refilter();
            }
            Command::SetType(value) => {
                self.controls.job_type.select(&value);
                self.refilter();
            }
            Command::SetSort(sort) => {
                self.controls.sort = sort;
                self.refilter();
            }
            Command::ClearFilters => {
                self.controls.clear();
                self.refilter();
                self.show_toast("Filters cleared.");
            }
            Command::GoToPage(page) => {
                self.page = page.clamp(1, self.total_pages().max(1));
            }
            Command::ToggleSave(id) => self.toggle_save(id),
            Command::OpenModal(id) => {
                // Unknown ids are a no-op; the modal keeps whatever it had.
                if self.jobs.iter().any(|job| job.id == id) {
                    self.modal_job = Some(id);
                }
            }
            Command::CloseModal => self.modal_job = None,
        }
        self.view()
    }

    /// The filter controls, for painting the control surface.
    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    /// Builds the render-ready view of the current state.
    pub fn view(&self) -> BoardView {
        let start = (self.page - 1) * JOBS_PER_PAGE;
        let cards = self
            .filtered
            .iter()
            .skip(start)
            .take(JOBS_PER_PAGE)
            .map(|&index| self.card(&self.jobs[index]))
            .collect();

        BoardView {
            count_label: count_label(self.filtered.len()),
            cards,
            current_page: self.page,
            total_pages: self.total_pages(),
            modal: self.modal_job.and_then(|id| self.modal_view(id)),
            toast: self.toast.clone(),
        }
    }

    /// Recomputes the filtered view from a fresh snapshot of the controls.
    /// Always resets to page 1.
    fn refilter(&mut self) {
        let filters = FilterState::capture(&self.controls);
        self.filtered = filter_jobs(&self.jobs, &filters);
        self.page = 1;
    }

    fn toggle_save(&mut self, id: u32) {
        // Same policy as the modal: ids not in the feed are ignored.
        if !self.jobs.iter().any(|job| job.id == id) {
            return;
        }
        let now_saved = self.saved.toggle(id);
        self.show_toast(if now_saved {
            "Job saved successfully!"
        } else {
            "Job removed from saved list."
        });
    }

    fn show_toast(&mut self, message: &str) {
        self.toast = Some(Toast {
            message: message.to_string(),
            shown_at: Instant::now(),
        });
    }

    fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(JOBS_PER_PAGE)
    }

    fn card(&self, job: &Job) -> CardView {
        CardView {
            id: job.id,
            logo: job.logo.clone(),
            color: job.color.clone(),
            saved: self.saved.contains(job.id),
            title: job.title.clone(),
            company: job.company.clone(),
            tags: tags(job),
            description: truncated(&job.description, CARD_DESC_LEN),
            salary: job.salary.clone(),
            posted: job.posted.clone(),
        }
    }

    fn modal_view(&self, id: u32) -> Option<ModalView> {
        let job = self.jobs.iter().find(|job| job.id == id)?;
        let [location, experience, job_type, category] = tags(job);
        Some(ModalView {
            id: job.id,
            logo: job.logo.clone(),
            color: job.color.clone(),
            saved: self.saved.contains(job.id),
            title: job.title.clone(),
            company: job.company.clone(),
            description: job.description.clone(),
            about: job.about.clone(),
            tags: [
                location,
                experience,
                job_type,
                category,
                format!("💰 {}", job.salary),
            ],
            requirements: job.requirements.clone(),
        })
    }
}

/// Everything the renderer needs for one paint of the board.
#[derive(Clone, Debug)]
pub struct BoardView {
    pub count_label: String,
    /// The current page of cards. Empty means the empty-state placeholder.
    pub cards: Vec<CardView>,
    pub current_page: usize,
    /// Pagination buttons are shown only when this exceeds 1.
    pub total_pages: usize,
    /// When set, the detail modal covers the board.
    pub modal: Option<ModalView>,
    pub toast: Option<Toast>,
}

#[derive(Clone, Debug)]
pub struct CardView {
    pub id: u32,
    pub logo: String,
    pub color: String,
    pub saved: bool,
    pub title: String,
    pub company: String,
    /// Location, experience, type, category.
    pub tags: [String; 4],
    pub description: String,
    pub salary: String,
    pub posted: String,
}

#[derive(Clone, Debug)]
pub struct ModalView {
    pub id: u32,
    pub logo: String,
    pub color: String,
    pub saved: bool,
    pub title: String,
    pub company: String,
    pub description: String,
    pub about: String,
    /// The card tags plus a salary tag.
    pub tags: [String; 5],
    pub requirements: Vec<String>,
}

/// A transient confirmation message. At most one is live at a time; showing
/// a new one restarts the auto-hide window.
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    pub fn visible(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) < TOAST_DURATION
    }
}

fn tags(job: &Job) -> [String; 4] {
    [
        format!("📍 {}", job.location),
        capitalized(&job.experience),
        job.job_type.clone(),
        job.category.clone(),
    ]
}

/// The count label reports the per-page cap, not the cards actually
/// rendered, so it undercounts on a partial last page. Intentionally kept:
/// it is the board's long-observed behavior.
fn count_label(total: usize) -> String {
    if total == 0 {
        return "No jobs found".to_string();
    }
    let plural = if total > 1 { "s" } else { "" };
    format!(
        "Showing {} of {} job{}",
        JOBS_PER_PAGE.min(total),
        total,
        plural
    )
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn truncated(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let cut = s.chars().take(max_chars).collect::<String>();
    format!("{}…", cut.trim_end())
}
