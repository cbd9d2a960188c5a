//! Folio application binary - composition root.
//!
//! Ties the companion together into a terminal session:
//! 1. Load configuration from TOML
//! 2. Load portfolio fixtures (JSON file or built-in)
//! 3. Build the companion widget with an OS or seeded random source
//! 4. Drive it with stdin lines and real time until /quit or Ctrl-C

mod cli;
mod commands;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;
use tracing_subscriber::EnvFilter;

use folio_chat::overlays::{MlDemo, Overlay, QuizSession, ResumeRole, FEATURE_NAMES, PROJECTIONS};
use folio_chat::{ChatError, CompanionEvent, CompanionWidget, RandomSource, RngSource};
use folio_core::config::FolioConfig;
use folio_core::fixtures::Portfolio;
use folio_core::types::Speaker;

use cli::CliArgs;
use commands::Command;

/// Sleep bound while no timer is pending; stdin wakes the loop anyway.
const IDLE_WAIT: Duration = Duration::from_secs(3600);

/// Bot messages already written to stdout.
struct Transcript {
    printed: usize,
}

impl Transcript {
    fn flush<R: RandomSource>(&mut self, widget: &CompanionWidget<R>) {
        for message in &widget.messages()[self.printed..] {
            if message.speaker == Speaker::Bot {
                println!("\nmedhasa> {}\n", message.text);
            }
        }
        self.printed = widget.messages().len();
    }
}

fn render_event<R: RandomSource>(widget: &CompanionWidget<R>, event: &CompanionEvent) {
    match event {
        CompanionEvent::OverlayOpened { overlay } => render_overlay(widget, *overlay),
        CompanionEvent::OverlayClosed { overlay } => println!("[{overlay} closed]"),
        CompanionEvent::FactShown { .. } => {
            if let Some(fact) = widget.current_fact() {
                println!("[{} {}: {}]", fact.icon, fact.title, fact.description);
            }
        }
        CompanionEvent::SkillsCloudShown => {
            let names: Vec<&str> = widget
                .portfolio()
                .skills
                .iter()
                .flat_map(|c| c.technologies.iter().map(String::as_str))
                .collect();
            println!("[skills] {}", names.join(" · "));
        }
        CompanionEvent::Replied { resolution } => {
            tracing::debug!(intent = ?resolution.intent, "Reply delivered");
        }
        CompanionEvent::Welcomed
        | CompanionEvent::FactDismissed
        | CompanionEvent::SkillsCloudDismissed
        | CompanionEvent::SuggestionInjected { .. } => {}
    }
}

fn render_overlay<R: RandomSource>(widget: &CompanionWidget<R>, overlay: Overlay) {
    println!("[{overlay} open]");
    match overlay {
        Overlay::SkillVisualizer => {
            if let Some(view) = widget.skill_view() {
                for level in view.levels(widget.portfolio()) {
                    let bar = "█".repeat(usize::from(level.proficiency) / 5);
                    println!("  {:<18} {bar} {}%", level.name, level.proficiency);
                }
            }
        }
        Overlay::ResumeGenerator => {
            for role in ResumeRole::ALL {
                println!("  /resume {:<20} {}", role.id(), role.title());
            }
        }
        Overlay::Quiz => print_question(widget.quiz()),
        Overlay::CareerPredictor => {
            for p in &PROJECTIONS {
                println!(
                    "  {} {} - {} - {}% likely ({:?})",
                    p.year,
                    p.role,
                    p.salary_label(),
                    p.probability,
                    p.tier()
                );
                println!("       {}", p.skills.join(", "));
            }
        }
        Overlay::AiDemo => {
            println!("  /genre              classify an uploaded clip");
            println!("  /sentiment <text>   analyse the mood of a sentence");
        }
        Overlay::MlDemo => print_ml_demo(widget.ml_demo()),
    }
}

fn print_ml_demo(demo: &MlDemo) {
    for (name, value) in FEATURE_NAMES.iter().zip(demo.features()) {
        println!("  {name:<18} {value:.2}");
    }
    let p = demo.prediction();
    println!(
        "  => {:?} (p = {:.3}, confidence {:.0}%)",
        p.label,
        p.probability,
        p.confidence * 100.0
    );
    for f in demo.classifier().feature_importance() {
        println!("  importance {:<18} {:.0}%", f.feature, f.importance * 100.0);
    }
    for (i, entry) in demo.history().enumerate() {
        println!(
            "  #{} [{:.2}, {:.2}, {:.2}] {:?}",
            i + 1,
            entry.features[0],
            entry.features[1],
            entry.features[2],
            entry.prediction.label
        );
    }
}

fn print_question(quiz: &QuizSession) {
    match quiz.current() {
        Some(q) => {
            let (n, total) = quiz.position();
            println!("  Question {n}/{total} [{} · {:?}]", q.category, q.difficulty);
            println!("  {}", q.question);
            for (i, option) in q.options.iter().enumerate() {
                println!("    {}. {option}", i + 1);
            }
        }
        None => println!("  Quiz complete: {} points. /reset-quiz to play again.", quiz.score()),
    }
}

/// Apply one command. Returns `Ok(false)` when the session should end.
fn apply<R: RandomSource>(
    widget: &mut CompanionWidget<R>,
    command: Command,
) -> Result<bool, ChatError> {
    match command {
        Command::Say(text) => {
            widget.submit(&text)?;
        }
        Command::Open => widget.open()?,
        Command::Close => widget.close()?,
        Command::Toggle => {
            let open = widget.toggle()?;
            println!("[companion {}]", if open { "open" } else { "closed" });
        }
        Command::Quick(index) => {
            widget.ask_quick_question(index)?;
            if let Some(text) = widget.messages().last().map(|m| m.text.clone()) {
                println!("you> {text}");
            }
        }
        Command::Visit(section) => widget.visit_section(&section)?,
        Command::Click(id) => {
            match widget.portfolio().project(&id) {
                Some(project) => println!("  {}", project.title),
                None => tracing::debug!(project_id = %id, "Click on a project outside the fixtures"),
            }
            let related = widget.click_project(&id)?;
            if related.is_empty() {
                println!("No related projects.");
            }
            for p in related {
                println!("  related: {} ({} shared)", p.title, p.shared_technologies);
            }
        }
        Command::ShowOverlay(overlay) => {
            widget.open_overlay(overlay)?;
            render_overlay(widget, overlay);
        }
        Command::CloseOverlay => {
            if let Some(overlay) = widget.close_overlay() {
                println!("[{overlay} closed]");
            }
        }
        Command::Answer(option) => {
            let outcome = widget.answer_quiz(option)?;
            let verdict = if outcome.correct { "Correct!" } else { "Not quite." };
            println!("  {verdict} {}", outcome.explanation);
            println!("  score {} · streak {}", outcome.score, outcome.streak);
            print_question(widget.quiz());
        }
        Command::ResetQuiz => {
            widget.reset_quiz();
            print_question(widget.quiz());
        }
        Command::Resume(role) => {
            let resume = widget.generate_resume(role)?;
            match serde_json::to_string_pretty(&resume) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::warn!(error = %e, "Failed to render resume"),
            }
        }
        Command::Sentiment(text) => {
            let a = widget.analyze_sentiment(&text)?;
            println!("  {:?} ({:.0}%)", a.sentiment, a.score * 100.0);
            let e = a.emotions;
            println!(
                "  joy {:.2} · sadness {:.2} · anger {:.2} · fear {:.2} · surprise {:.2}",
                e.joy, e.sadness, e.anger, e.fear, e.surprise
            );
        }
        Command::Genre => {
            let p = widget.classify_genre()?;
            println!("  {} ({:.0}% confidence)", p.genre, p.confidence * 100.0);
        }
        Command::MlSet(index, value) => {
            widget.set_ml_feature(index, value)?;
            print_ml_demo(widget.ml_demo());
        }
        Command::MlRandom => {
            widget.randomize_ml_features()?;
            print_ml_demo(widget.ml_demo());
        }
        Command::MlPredict => {
            widget.record_ml_prediction()?;
            print_ml_demo(widget.ml_demo());
        }
        Command::MlReset => {
            widget.reset_ml_demo();
            print_ml_demo(widget.ml_demo());
        }
        Command::Suggest => {
            let suggestion = widget.next_suggestion();
            match suggestion.action.target() {
                Some(target) => println!("{} (-> #{target})", suggestion.text),
                None => println!("{}", suggestion.text),
            }
        }
        Command::Session => match serde_json::to_string_pretty(widget.session()) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::warn!(error = %e, "Failed to render session"),
        },
        Command::Help => println!("{}", commands::HELP),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Fire whatever fell due since the last wake-up and print the results.
fn catch_up<R: RandomSource>(
    widget: &mut CompanionWidget<R>,
    clock: &mut Instant,
    transcript: &mut Transcript,
) {
    let now = Instant::now();
    let events = widget.advance(now.duration_since(*clock));
    *clock = now;
    transcript.flush(widget);
    for event in &events {
        render_event(widget, event);
    }
}

async fn run<R: RandomSource>(
    widget: &mut CompanionWidget<R>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut transcript = Transcript { printed: 0 };
    let mut clock = Instant::now();

    println!("{}", commands::HELP);
    widget.open()?;

    loop {
        let wait = widget.next_due().unwrap_or(IDLE_WAIT);
        tokio::select! {
            line = lines.next_line() => {
                catch_up(widget, &mut clock, &mut transcript);
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match commands::parse(&line) {
                    Ok(command) => match apply(widget, command) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => println!("! {e}"),
                    },
                    Err(message) => println!("! {message}"),
                }
                transcript.flush(widget);
            }
            _ = tokio::time::sleep(wait) => {
                catch_up(widget, &mut clock, &mut transcript);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing so its log level can apply; problems are
    // reported once the subscriber is up.
    let config_file = args.resolve_config_path();
    let (config, config_error) = if config_file.exists() {
        match FolioConfig::load(&config_file) {
            Ok(config) => (config, None),
            Err(e) => (FolioConfig::default(), Some(e)),
        }
    } else {
        (FolioConfig::default(), None)
    };

    // Tracing. RUST_LOG > --log-level > config > info.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    tracing::info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));
    match config_error {
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Invalid configuration, using defaults"
        ),
        None => tracing::info!(path = %config_file.display(), "Configuration loaded"),
    }

    // Fixtures.
    let fixtures = args.resolve_fixtures_path(&config.fixtures);
    let portfolio = Arc::new(Portfolio::load_or_builtin(fixtures.as_deref()));
    tracing::info!(
        projects = portfolio.projects.len(),
        technologies = portfolio.technology_count(),
        "Portfolio ready"
    );

    // Companion.
    let rng = match args.seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded random source");
            RngSource::seeded(seed)
        }
        None => RngSource::from_os(),
    };
    let mut widget = CompanionWidget::new(config.companion.clone(), portfolio, rng);

    let result = run(&mut widget).await;
    widget.teardown();
    result
}
