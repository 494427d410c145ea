use rm_timeline::cacher::FileStore;
use rm_timeline::config::Config;
use rm_timeline::error::Result;
use rm_timeline::fetcher::Fetcher;
use rm_timeline::models::ProjectedEpisode;
use rm_timeline::month::MonthAction;
use rm_timeline::requester::Requester;
use rm_timeline::timeline::Timeline;
use std::io::{stdin, stdout, Write};
use tracing_subscriber::EnvFilter;

const LOAD_FAILED_MESSAGE: &str = "An error occurred while trying to display the episodes of Rick & Morty.\nPlease try again later or check your network connection.";

enum Command {
	Quit,
	Month(MonthAction),
	Search(String),
	ClearSearch,
}

fn parse_command(input: &str) -> Command {
	match input {
		"q" => Command::Quit,
		"n" => Command::Month(MonthAction::Next),
		"p" => Command::Month(MonthAction::Prev),
		"" => Command::ClearSearch,
		_ => {
			if let Some(rest) = input.strip_prefix("m ") {
				if let Ok(index) = rest.trim().parse() {
					return Command::Month(MonthAction::Set(index));
				}
			}
			Command::Search(input.to_owned())
		}
	}
}

fn clear_console() {
	print!("\x1B[2J\x1B[1;1H");
}

fn init_logging() {
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_ansi(false)
		.init();
}

fn render_card(episode: &ProjectedEpisode, left: bool, out: &mut impl Write) -> Result<()> {
	// Cards alternate sides down the timeline.
	let pad = if left { "" } else { "\t\t\t" };
	out.write_all(
		format!(
			"{}* {} ({})  -  {} {} {}\n{}  {}\n",
			pad,
			episode.episode_name,
			episode.episode_code,
			episode.day,
			episode.month,
			episode.year,
			pad,
			episode.characters.join(", "),
		)
		.as_bytes(),
	)?;
	Ok(())
}

fn render(timeline: &Timeline, out: &mut impl Write) -> Result<()> {
	if timeline.search().is_empty() {
		out.write_all(
			format!("=== {} ===\n", timeline.selected_month().full_name().to_uppercase())
				.as_bytes(),
		)?;
	} else {
		out.write_all(format!("=== \"{}\" ===\n", timeline.search()).as_bytes())?;
	}
	for (index, episode) in timeline.visible().iter().enumerate() {
		render_card(episode, index % 2 == 0, out)?;
	}
	out.write_all(b"\n[n]ext / [p]rev month, m <0-11>, text to search, empty line for month view, [q]uit\n")?;
	Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
	init_logging();
	let config_path = std::env::args()
		.nth(1)
		.unwrap_or_else(|| "./rm-timeline.toml".to_owned());
	let config = Config::load_or_default(&config_path)?;

	let store = FileStore::new(&config.cache_dir);
	let requester = Requester::new(&config.base_url)?;
	let fetcher = Fetcher::new(requester, store);
	let mut timeline = match Timeline::load(&fetcher).await {
		Ok(timeline) => timeline,
		Err(err) => {
			tracing::error!("load failed: {}", err);
			eprintln!("{}", LOAD_FAILED_MESSAGE);
			std::process::exit(1);
		}
	};

	let inp = stdin();
	let mut out = stdout();
	let mut notice: Option<String> = None;
	loop {
		clear_console();
		render(&timeline, &mut out)?;
		if let Some(text) = notice.take() {
			out.write_all(format!("{}\n", text).as_bytes())?;
		}
		out.write_all(b"> ")?;
		out.flush()?;
		let mut input = String::new();
		inp.read_line(&mut input)?;
		match parse_command(input.trim()) {
			Command::Quit => break,
			Command::Month(action) => {
				if let Err(err) = timeline.month_action(action) {
					notice = Some(err.to_string());
				}
			}
			Command::Search(query) => timeline.set_search(query),
			Command::ClearSearch => timeline.clear_search(),
		}
	}
	Ok(())
}
