use std::{fmt::Display, str::FromStr};

use crate::job::Job;

/// Sort order for the filtered view.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortMode {
    /// Keep feed order. The feed is assumed newest-first.
    #[default]
    Newest,
    /// Case-insensitive ordering by job title.
    Alphabetical,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "az" | "alphabetical" => Ok(Self::Alphabetical),
            _ => Err(format!("unknown sort mode `{s}` (expected `newest` or `az`)")),
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Newest => write!(f, "newest"),
            Self::Alphabetical => write!(f, "az"),
        }
    }
}

/// A mutually-exclusive group of toggle chips. One chip is always active;
/// the implicit first chip is "All", which filters nothing.
#[derive(Clone, Debug)]
pub struct ChipGroup {
    options: Vec<String>,
    active: usize,
}

impl ChipGroup {
    /// Builds a group from the distinct non-blank values in a feed, in
    /// first-seen order. "All" starts active.
    pub fn new(values: impl IntoIterator<Item = String>) -> Self {
        Self {
            options: distinct(values),
            active: 0,
        }
    }

    /// Activates the chip matching `value`. An empty value reselects "All";
    /// an unknown value leaves the group untouched.
    pub fn select(&mut self, value: &str) {
        if value.is_empty() {
            self.active = 0;
        } else if let Some(pos) = self.options.iter().position(|option| option == value) {
            self.active = pos + 1;
        }
    }

    pub fn reset(&mut self) {
        self.active = 0;
    }

    /// The active chip's filter value. "All" yields the empty string.
    pub fn value(&self) -> &str {
        if self.active == 0 {
            ""
        } else {
            &self.options[self.active - 1]
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

/// The filter control surface: two search boxes (hero and sidebar), a
/// location dropdown, three chip groups, and a sort dropdown. A snapshot of
/// these controls is taken on every filter pass; nothing here is persisted.
#[derive(Clone, Debug)]
pub struct FilterControls {
    pub hero_search: String,
    pub sidebar_search: String,
    /// The selected location, or empty for all locations.
    pub location: String,
    pub sort: SortMode,
    pub category: ChipGroup,
    pub experience: ChipGroup,
    pub job_type: ChipGroup,
    locations: Vec<String>,
}

impl FilterControls {
    /// Builds the control surface for a loaded feed. Dropdown and chip
    /// options are the distinct values present in the data.
    pub fn for_jobs(jobs: &[Job]) -> Self {
        Self {
            hero_search: String::new(),
            sidebar_search: String::new(),
            location: String::new(),
            sort: SortMode::Newest,
            category: ChipGroup::new(jobs.iter().map(|job| job.category.clone())),
            experience: ChipGroup::new(jobs.iter().map(|job| job.experience.clone())),
            job_type: ChipGroup::new(jobs.iter().map(|job| job.job_type.clone())),
            locations: distinct(jobs.iter().map(|job| job.location.clone())),
        }
    }

    /// The hero search box pushes its text down into the sidebar box. The
    /// sync is one-directional: sidebar edits never touch the hero box.
    pub fn set_hero_search(&mut self, text: &str) {
        self.hero_search = text.to_string();
        self.sidebar_search = text.to_string();
    }

    /// Resets every control to its default.
    pub fn clear(&mut self) {
        self.hero_search.clear();
        self.sidebar_search.clear();
        self.location.clear();
        self.sort = SortMode::Newest;
        self.category.reset();
        self.experience.reset();
        self.job_type.reset();
    }

    /// Options for the location dropdown.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }
}

/// A snapshot of the control surface, captured fresh on every filter pass.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FilterState {
    /// Lowercased, trimmed search text. Empty matches everything.
    pub search: String,
    pub location: String,
    pub category: String,
    pub experience: String,
    pub job_type: String,
    pub sort: SortMode,
}

impl FilterState {
    pub fn capture(controls: &FilterControls) -> Self {
        Self {
            search: controls.sidebar_search.trim().to_lowercase(),
            location: controls.location.clone(),
            category: controls.category.value().to_string(),
            experience: controls.experience.value().to_string(),
            job_type: controls.job_type.value().to_string(),
            sort: controls.sort,
        }
    }
}

/// Derives the filtered, sorted view: indices into `jobs` for every record
/// matching all five predicates, ordered by the snapshot's sort mode.
///
/// This is the single source of truth for what is visible. It is total
/// (never fails for any well-formed job) and idempotent.
pub fn filter_jobs(jobs: &[Job], filters: &FilterState) -> Vec<usize> {
    let mut view = jobs
        .iter()
        .enumerate()
        .filter(|(_, job)| matches(job, filters))
        .map(|(index, _)| index)
        .collect::<Vec<_>>();

    if filters.sort == SortMode::Alphabetical {
        view.sort_by_cached_key(|&index| jobs[index].title.to_lowercase());
    }

    view
}

/// Conjunction of the five filter predicates. An unset predicate passes.
fn matches(job: &Job, filters: &FilterState) -> bool {
    let search = filters.search.is_empty()
        || [&job.title, &job.company, &job.description, &job.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&filters.search));

    search
        && (filters.location.is_empty() || job.location == filters.location)
        && (filters.category.is_empty() || job.category == filters.category)
        && (filters.experience.is_empty() || job.experience == filters.experience)
        && (filters.job_type.is_empty() || job.job_type == filters.job_type)
}

fn distinct(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out = Vec::new();
    for value in values {
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u32, title: &str, location: &str, category: &str) -> Job {
        Job {
            id,
            title: title.to_string(),
            company: format!("Company {id}"),
            logo: "J".to_string(),
            color: "#6366f1".to_string(),
            location: location.to_string(),
            category: category.to_string(),
            experience: "mid".to_string(),
            job_type: "Full-time".to_string(),
            description: "Ship features with a small team.".to_string(),
            about: String::new(),
            salary: "$100k".to_string(),
            posted: "1 day ago".to_string(),
            requirements: Vec::new(),
        }
    }

    fn sample() -> Vec<Job> {
        vec![
            job(1, "Backend Engineer", "Remote", "Engineering"),
            job(2, "Product Designer", "Berlin", "Design"),
            job(3, "Frontend Engineer", "Berlin", "Engineering"),
            job(4, "Content Writer", "Remote", "Marketing"),
            job(5, "account manager", "London", "Sales"),
        ]
    }

    #[test]
    fn empty_filters_pass_everything_in_feed_order() {
        let jobs = sample();
        let view = filter_jobs(&jobs, &FilterState::default());
        assert_eq!(view, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let jobs = sample();
        let filters = FilterState {
            search: "engineer".to_string(),
            location: "Berlin".to_string(),
            ..Default::default()
        };
        let view = filter_jobs(&jobs, &filters);
        assert_eq!(view, vec![2]);
        for &index in &view {
            assert!(jobs[index].title.to_lowercase().contains("engineer"));
            assert_eq!(jobs[index].location, "Berlin");
        }
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let jobs = sample();
        // Matches category "Marketing" even though no title contains it.
        let filters = FilterState {
            search: "marketing".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_jobs(&jobs, &filters), vec![3]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let jobs = sample();
        let filters = FilterState {
            search: "engineer".to_string(),
            sort: SortMode::Alphabetical,
            ..Default::default()
        };
        let once = filter_jobs(&jobs, &filters)
            .into_iter()
            .map(|index| jobs[index].clone())
            .collect::<Vec<_>>();
        let twice = filter_jobs(&once, &filters);
        assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }

    #[test]
    fn alphabetical_sort_is_non_decreasing_by_title() {
        let jobs = sample();
        let filters = FilterState {
            sort: SortMode::Alphabetical,
            ..Default::default()
        };
        let view = filter_jobs(&jobs, &filters);
        let titles = view
            .iter()
            .map(|&index| jobs[index].title.to_lowercase())
            .collect::<Vec<_>>();
        assert!(titles.windows(2).all(|pair| pair[0] <= pair[1]));
        // Lowercase titles sort with the rest, not after them.
        assert_eq!(jobs[view[0]].title, "account manager");
    }

    #[test]
    fn chip_select_ignores_unknown_values() {
        let mut group = ChipGroup::new(["Design".to_string(), "Sales".to_string()]);
        group.select("Sales");
        assert_eq!(group.value(), "Sales");
        group.select("Nonsense");
        assert_eq!(group.value(), "Sales");
        group.select("");
        assert_eq!(group.value(), "");
    }

    #[test]
    fn chip_options_are_distinct_in_first_seen_order() {
        let group = ChipGroup::new(
            ["Design", "Sales", "Design", "", "Marketing"]
                .map(String::from),
        );
        assert_eq!(group.options(), ["Design", "Sales", "Marketing"]);
    }

    #[test]
    fn hero_search_syncs_to_sidebar() {
        let mut controls = FilterControls::for_jobs(&sample());
        controls.set_hero_search("writer");
        assert_eq!(controls.sidebar_search, "writer");

        controls.sidebar_search = "designer".to_string();
        assert_eq!(controls.hero_search, "writer");
    }

    #[test]
    fn capture_normalizes_search_text() {
        let mut controls = FilterControls::for_jobs(&sample());
        controls.sidebar_search = "  Backend ".to_string();
        assert_eq!(FilterState::capture(&controls).search, "backend");
    }

    #[test]
    fn clear_restores_every_default() {
        let jobs = sample();
        let mut controls = FilterControls::for_jobs(&jobs);
        controls.set_hero_search("engineer");
        controls.location = "Berlin".to_string();
        controls.category.select("Design");
        controls.sort = SortMode::Alphabetical;

        controls.clear();
        assert_eq!(FilterState::capture(&controls), FilterState::default());
        assert_eq!(filter_jobs(&jobs, &FilterState::capture(&controls)).len(), jobs.len());
    }
}
