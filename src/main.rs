use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, bounded};
use log::{error, info};

use career_advisor::client::AdviceClient;
use career_advisor::config::AdvisorConfig;
use career_advisor::error::AdviceError;
use career_advisor::profile::ProfileInput;
use career_advisor::quiz::{QUIZ, score_answers};
use career_advisor::{prompt, render};

const SPINNER: &[char] = &['|', '/', '-', '\\'];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = load_config()?;
    let endpoint = config.resolve_endpoint()?;
    let client = AdviceClient::new(endpoint, config.timeout_secs)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Career Advisor");
    println!("Answer a few questions and get personalised career advice.");

    // One submission per iteration: input view, loading view, result view.
    // A failed validation or a failed request drops straight back to the
    // input view; a shown result waits for an explicit restart.
    loop {
        println!();
        let profile = read_profile(&mut input)?;

        // Guard: no request is issued for an invalid profile
        if let Err(err) = profile.validate() {
            println!("{}", err);
            continue;
        }

        let prompt_text = prompt::build_prompt(&profile);
        info!("submitting profile for {}", profile.name);

        match submit(&client, prompt_text) {
            Ok(answer) => {
                let shown = if config.render_markdown {
                    render::render_markdown(&answer)
                } else {
                    answer
                };
                println!("\n{}", shown);
            }
            Err(err) => {
                error!("advice request failed: {}", err.detail());
                println!("\n{}", err);
            }
        }

        if !read_yes_no(&mut input, "\nAsk for advice again? [y/N] ")? {
            break;
        }
    }

    Ok(())
}

/// Run one request on a worker thread, spinning on the terminal until the
/// outcome arrives. The form is not re-shown until this returns, so at
/// most one request is ever in flight.
fn submit(client: &AdviceClient, prompt_text: String) -> Result<String, AdviceError> {
    let (tx, rx) = bounded(1);

    thread::scope(|scope| {
        scope.spawn(move || {
            let _ = tx.send(client.request_advice(&prompt_text));
        });

        let mut tick = 0usize;
        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(result) => {
                    // Clear the spinner line before the result view
                    print!("\r{:60}\r", "");
                    let _ = io::stdout().flush();
                    return result;
                }
                Err(RecvTimeoutError::Timeout) => {
                    print!(
                        "\rAnalyzing your profile... {}",
                        SPINNER[tick % SPINNER.len()]
                    );
                    let _ = io::stdout().flush();
                    tick += 1;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(AdviceError::Transport(
                        "request worker terminated unexpectedly".to_string(),
                    ));
                }
            }
        }
    })
}

/// Collect one profile from the terminal form
fn read_profile(input: &mut impl BufRead) -> io::Result<ProfileInput> {
    let name = read_line(input, "Your name: ")?;
    let stream = read_line(input, "Stream / education (optional): ")?;
    let marks = read_line(input, "12th marks (optional): ")?;

    let mut profile = ProfileInput::new(name).with_stream(stream).with_marks(marks);

    if read_yes_no(input, "Take the short aptitude quiz? [y/N] ")? {
        let mut answers = Vec::with_capacity(QUIZ.len());
        for question in QUIZ {
            println!("\n{}", question.prompt);
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}. {}", i + 1, option.text);
            }
            let choice = read_line(input, "Pick one: ")?;
            // Anything unparseable scores nothing for this question
            answers.push(
                choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .unwrap_or(usize::MAX),
            );
        }
        profile = profile.with_scores(score_answers(&answers));
    } else {
        let skills = read_line(input, "Your skills and interests: ")?;
        if !skills.is_empty() {
            profile = profile.with_skills(skills);
        }
    }

    Ok(profile)
}

fn read_line(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

fn read_yes_no(input: &mut impl BufRead, label: &str) -> io::Result<bool> {
    let answer = read_line(input, label)?;
    Ok(matches!(answer.as_str(), "y" | "Y" | "yes" | "Yes"))
}

/// Load configuration from the path argument, a local `advisor.yaml`, or
/// built-in defaults, in that order
fn load_config() -> Result<AdvisorConfig, AdviceError> {
    if let Some(path) = std::env::args().nth(1) {
        return AdvisorConfig::load_file(Path::new(&path));
    }

    let default = Path::new("advisor.yaml");
    if default.exists() {
        return AdvisorConfig::load_file(default);
    }

    Ok(AdvisorConfig::default())
}
