//! Vitrine CLI — content scaffolding and headless checks.
//!
//! Commands:
//! - `init` — write a starter site content TOML
//! - `check` — validate a content file and report what it describes
//! - `script` — replay a carousel input script against a virtual clock

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use vitrine_core::carousel::{Carousel, CarouselEvent, TRANSITION_MS};
use vitrine_core::content::{default_site, SiteContent};

#[derive(Parser)]
#[command(name = "vitrine", about = "Vitrine CLI — portfolio content tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter content file.
    Init {
        /// Output path for the content TOML.
        #[arg(long, default_value = "site.toml")]
        out: PathBuf,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Validate a content file.
    Check {
        /// Path to the content TOML.
        path: PathBuf,
    },
    /// Replay a carousel input script headlessly.
    Script {
        /// Path to the content TOML; the built-in demo when omitted.
        #[arg(long)]
        content: Option<PathBuf>,

        /// Comma-separated steps: next, prev, goto:N, drag:DX, wait:MS.
        steps: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { out, force } => run_init(&out, force),
        Commands::Check { path } => run_check(&path),
        Commands::Script { content, steps } => run_script(content.as_deref(), &steps),
    }
}

fn run_init(out: &Path, force: bool) -> Result<()> {
    if out.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", out.display());
    }
    let header = format!(
        "# Vitrine site content, generated {}\n\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    let body = default_site().to_toml_string();
    std::fs::write(out, header + &body)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote starter content to {}", out.display());
    Ok(())
}

fn run_check(path: &Path) -> Result<()> {
    let content = match SiteContent::from_path(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Invalid: {err}");
            std::process::exit(1);
        }
    };
    println!(
        "OK: {} slides, {} cards in {} categories, {} stats",
        content.slides.len(),
        content.cards.len(),
        content.categories.len(),
        content.stats.len(),
    );
    Ok(())
}

/// One parsed script step.
#[derive(Debug, Clone, Copy)]
enum Step {
    Next,
    Prev,
    Goto(usize),
    Drag(f64),
    Wait(u64),
}

fn parse_steps(input: &str) -> Result<Vec<Step>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.split_once(':') {
            None if s == "next" => Ok(Step::Next),
            None if s == "prev" => Ok(Step::Prev),
            Some(("goto", n)) => Ok(Step::Goto(n.parse().context("goto index")?)),
            Some(("drag", dx)) => Ok(Step::Drag(dx.parse().context("drag delta")?)),
            Some(("wait", ms)) => Ok(Step::Wait(ms.parse().context("wait duration")?)),
            _ => bail!("unknown step {s:?} (expected next, prev, goto:N, drag:DX, wait:MS)"),
        })
        .collect()
}

fn run_script(content_path: Option<&Path>, steps: &str) -> Result<()> {
    let content = match content_path {
        Some(path) => SiteContent::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => default_site(),
    };
    let steps = parse_steps(steps)?;

    let Some(mut carousel) = Carousel::new(0, content.slides.len()) else {
        bail!("content has no slides to script against");
    };

    let mut now = 0_u64;
    for step in steps {
        let accepted = match step {
            Step::Next => carousel.next(now),
            Step::Prev => carousel.prev(now),
            Step::Goto(n) => carousel.select(now, n),
            Step::Drag(dx) => {
                carousel.drag_start(0.0);
                carousel.drag_move(dx);
                carousel.drag_end(now)
            }
            Step::Wait(ms) => {
                now += ms;
                true
            }
        };
        let events = carousel.advance(now);
        report(step, accepted, now, &carousel, &events);
    }

    // Let any in-flight transition land before the final summary.
    now += TRANSITION_MS;
    carousel.advance(now);
    println!(
        "final: slide {}/{} at t={now}ms",
        carousel.current() + 1,
        carousel.slide_count(),
    );
    Ok(())
}

fn report(step: Step, accepted: bool, now: u64, carousel: &Carousel, events: &[CarouselEvent]) {
    let outcome = if accepted { "ok" } else { "dropped" };
    let mut line = format!(
        "t={now:>6}ms {step:?}: {outcome}, indicator on {}",
        carousel.active_indicator() + 1
    );
    for event in events {
        if let CarouselEvent::TransitionFinished { current } = event {
            line.push_str(&format!(", landed on {}", current + 1));
        }
    }
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_script() {
        let steps = parse_steps("next, wait:600, drag:-70, wait:600, goto:0").unwrap();
        assert_eq!(steps.len(), 5);
        assert!(matches!(steps[2], Step::Drag(d) if d == -70.0));
    }

    #[test]
    fn rejects_unknown_steps() {
        assert!(parse_steps("sideways").is_err());
        assert!(parse_steps("goto:x").is_err());
    }

    #[test]
    fn script_replay_is_deterministic() {
        let mut carousel = Carousel::new(0, 4).unwrap();
        let mut now = 0;
        for step in parse_steps("next, wait:600, next, wait:600, prev, wait:600").unwrap() {
            match step {
                Step::Next => {
                    carousel.next(now);
                }
                Step::Prev => {
                    carousel.prev(now);
                }
                Step::Wait(ms) => now += ms,
                _ => {}
            }
            carousel.advance(now);
        }
        assert_eq!(carousel.current(), 1);
    }
}
