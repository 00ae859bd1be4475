use std::io::{self, BufRead as _, Write as _};

use jobhunt::{init_logger, Command, FileStore, JobBoard, JobFeed, SavedJobs, SortMode};

fn main() {
    init_logger(log::LevelFilter::Info);

    let feed = std::env::args()
        .nth(1)
        .map(|location| JobFeed::parse(&location))
        .unwrap_or_default();
    let jobs = feed.load();
    let saved = SavedJobs::load(FileStore::new("data"));
    let mut board = JobBoard::new(jobs, saved);

    jobhunt::paint(&board.view());
    print_help();

    let stdin = io::stdin();
    loop {
        print!("\n> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "?" | "help" => {
                print_help();
                jobhunt::paint_controls(board.controls());
                continue;
            }
            "find" => Command::HeroSearch(rest.to_string()),
            "search" => Command::Search(rest.to_string()),
            "location" => Command::SetLocation(rest.to_string()),
            "category" => Command::SetCategory(rest.to_string()),
            "experience" => Command::SetExperience(rest.to_string()),
            "type" => Command::SetType(rest.to_string()),
            "sort" => match rest.parse::<SortMode>() {
                Ok(sort) => Command::SetSort(sort),
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            },
            "clear" => Command::ClearFilters,
            "page" => match rest.parse() {
                Ok(page) => Command::GoToPage(page),
                Err(_) => {
                    println!("usage: page <number>");
                    continue;
                }
            },
            "open" => match rest.parse() {
                Ok(id) => Command::OpenModal(id),
                Err(_) => {
                    println!("usage: open <job id>");
                    continue;
                }
            },
            "close" => Command::CloseModal,
            "save" => match rest.parse() {
                Ok(id) => Command::ToggleSave(id),
                Err(_) => {
                    println!("usage: save <job id>");
                    continue;
                }
            },
            _ => {
                println!("Unknown command `{verb}`. Type `help` for the list.");
                continue;
            }
        };

        jobhunt::paint(&board.apply(command));
    }
}

fn print_help() {
    println!(
        "\nCommands: find <text> | search <text> | location <value> | category <value>\n\
         | experience <value> | type <value> | sort newest|az | clear | page <n>\n\
         | open <id> | close | save <id> | help | quit"
    );
}
