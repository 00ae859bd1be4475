use std::{fs, path::PathBuf};

use tiny_bail::prelude::*;
use url::Url;

use crate::job::Job;

/// Where the jobs document lives: a local file or an HTTP endpoint serving
/// a JSON array of jobs.
#[derive(Clone, Debug)]
pub enum JobFeed {
    File(PathBuf),
    Http(Url),
}

impl JobFeed {
    pub const DEFAULT_FILE_PATH: &str = "data/jobs.json";

    /// Interprets a feed location. Anything that parses as an http(s) URL is
    /// fetched over the network; everything else is treated as a local path.
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Http(url),
            _ => Self::File(PathBuf::from(location)),
        }
    }

    /// Loads the jobs document. Called once at startup: any failure (I/O,
    /// network, parse) is logged and yields an empty list, with no retry.
    pub fn load(&self) -> Vec<Job> {
        let text = match self {
            Self::File(path) => r!(fs::read_to_string(path)),
            Self::Http(url) => r!(r!(reqwest::blocking::get(url.clone())).text()),
        };
        r!(serde_json::from_str(&text))
    }
}

impl Default for JobFeed {
    fn default() -> Self {
        Self::File(PathBuf::from(Self::DEFAULT_FILE_PATH))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert!(matches!(
            JobFeed::parse("https://example.com/jobs.json"),
            JobFeed::Http(_)
        ));
        assert!(matches!(JobFeed::parse("data/jobs.json"), JobFeed::File(_)));
        assert!(matches!(JobFeed::parse("/tmp/jobs.json"), JobFeed::File(_)));
    }

    #[test]
    fn loads_jobs_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "Designer"}}, {{"id": 2, "title": "Writer"}}]"#
        )
        .unwrap();

        let jobs = JobFeed::File(file.path().to_path_buf()).load();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Designer");
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let jobs = JobFeed::File(PathBuf::from("data/does_not_exist.json")).load();
        assert!(jobs.is_empty());
    }

    #[test]
    fn malformed_json_yields_empty_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "this is not json").unwrap();

        let jobs = JobFeed::File(file.path().to_path_buf()).load();
        assert!(jobs.is_empty());
    }
}
