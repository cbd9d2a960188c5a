//! Terminal commands understood by the folio REPL.
//!
//! Lines starting with `/` are commands standing in for the clicks a web
//! page would deliver; anything else is a chat message.

use folio_chat::overlays::{Overlay, ResumeRole};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Say(String),
    Open,
    Close,
    Toggle,
    Quick(usize),
    Visit(String),
    Click(String),
    ShowOverlay(Overlay),
    CloseOverlay,
    Answer(usize),
    ResetQuiz,
    Resume(ResumeRole),
    Sentiment(String),
    Genre,
    MlSet(usize, f64),
    MlRandom,
    MlPredict,
    MlReset,
    Suggest,
    Session,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  /open /close /toggle        show or hide the companion
  /quick <1-8>                ask a quick question
  /visit <section>            scroll to a page section (about, projects, ...)
  /click <project-id>         click a project card
  /overlay <name>             open skills | resume | ai | ml | quiz | career
  /close-overlay              close the open overlay
  /answer <1-4>               answer the current quiz question
  /reset-quiz                 start the quiz over
  /resume <role>              ai-ml | data-analyst | software-developer
  /sentiment <text>           run the sentiment demo
  /genre                      run the genre classifier demo
  /ml-set <1-3> <0..1>        move a classifier feature slider
  /ml-random /ml-predict      randomise the sliders, record a prediction
  /ml-reset                   restore sliders and clear history
  /suggest                    show the current suggestion
  /session                    dump the session as JSON
  /help /quit
Anything else is sent as a chat message.";

/// Parse one input line. `Err` carries a message for the user.
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Command::Say(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "open" => Ok(Command::Open),
        "close" => Ok(Command::Close),
        "toggle" => Ok(Command::Toggle),
        "quick" => one_based(arg, "quick").map(Command::Quick),
        "visit" => required(arg, "visit").map(|s| Command::Visit(s.to_lowercase())),
        "click" => required(arg, "click").map(|s| Command::Click(s.to_string())),
        "overlay" => Overlay::from_name(arg)
            .map(Command::ShowOverlay)
            .ok_or_else(|| format!("unknown overlay '{arg}'")),
        "close-overlay" => Ok(Command::CloseOverlay),
        "answer" => one_based(arg, "answer").map(Command::Answer),
        "reset-quiz" => Ok(Command::ResetQuiz),
        "resume" => ResumeRole::from_id(arg)
            .map(Command::Resume)
            .ok_or_else(|| format!("unknown role '{arg}'")),
        "sentiment" => required(arg, "sentiment").map(|s| Command::Sentiment(s.to_string())),
        "genre" => Ok(Command::Genre),
        "ml-set" => ml_set(arg),
        "ml-random" => Ok(Command::MlRandom),
        "ml-predict" => Ok(Command::MlPredict),
        "ml-reset" => Ok(Command::MlReset),
        "suggest" => Ok(Command::Suggest),
        "session" => Ok(Command::Session),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '/{other}', try /help")),
    }
}

fn required<'a>(arg: &'a str, command: &str) -> Result<&'a str, String> {
    if arg.is_empty() {
        Err(format!("/{command} needs an argument"))
    } else {
        Ok(arg)
    }
}

fn ml_set(arg: &str) -> Result<Command, String> {
    let usage = || "/ml-set needs a feature number (1-3) and a value".to_string();
    let (feature, value) = arg.split_once(char::is_whitespace).ok_or_else(usage)?;
    let index = one_based(feature, "ml-set")?;
    let value = value.trim().parse::<f64>().map_err(|_| usage())?;
    Ok(Command::MlSet(index, value))
}

/// Parse a 1-based number into a 0-based index.
fn one_based(arg: &str, command: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("/{command} needs a number starting at 1")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_chat() {
        assert_eq!(
            parse("  inspire me "),
            Ok(Command::Say("inspire me".to_string()))
        );
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("/open"), Ok(Command::Open));
        assert_eq!(parse("/close-overlay"), Ok(Command::CloseOverlay));
        assert_eq!(parse("/exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_numeric_arguments_are_one_based() {
        assert_eq!(parse("/quick 1"), Ok(Command::Quick(0)));
        assert_eq!(parse("/answer 2"), Ok(Command::Answer(1)));
        assert!(parse("/quick 0").is_err());
        assert!(parse("/answer x").is_err());
    }

    #[test]
    fn test_arguments() {
        assert_eq!(parse("/visit About"), Ok(Command::Visit("about".to_string())));
        assert_eq!(parse("/click 2"), Ok(Command::Click("2".to_string())));
        assert_eq!(parse("/overlay quiz"), Ok(Command::ShowOverlay(Overlay::Quiz)));
        assert_eq!(
            parse("/resume data-analyst"),
            Ok(Command::Resume(ResumeRole::DataAnalyst))
        );
        assert!(parse("/visit").is_err());
        assert!(parse("/overlay hologram").is_err());
    }

    #[test]
    fn test_demo_commands() {
        assert_eq!(
            parse("/sentiment what a great day"),
            Ok(Command::Sentiment("what a great day".to_string()))
        );
        assert_eq!(parse("/genre"), Ok(Command::Genre));
        assert_eq!(parse("/ml-set 2 0.75"), Ok(Command::MlSet(1, 0.75)));
        assert!(parse("/ml-set 2").is_err());
        assert!(parse("/ml-set 0 0.5").is_err());
        assert!(parse("/ml-set 1 lots").is_err());
        assert_eq!(parse("/ml-predict"), Ok(Command::MlPredict));
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse("/dance").unwrap_err().contains("unknown command"));
    }
}
