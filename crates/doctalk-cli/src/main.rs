use std::io::Write as _;
use std::path::PathBuf;

use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use doctalk_cli::config;
use doctalk_cli::terminal::{self, Command};
use doctalk_core::models::UserId;
use doctalk_quiz::Questionnaire;
use doctalk_quiz::error::QuizError;
use doctalk_quiz::questionnaires::symptom_quiz::SymptomQuiz;
use doctalk_quiz::session::{Advance, QuizSession};
use doctalk_storage::history::{FileHistoryStore, QuizHistoryStore};

const USAGE: &str = "usage: doctalk [quiz|history]";

fn init_tracing() {
    // Logs go to stderr so they never interleave with the quiz on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("DOCTALK_LOG_FORMAT").as_deref() == Ok("json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config_dir = config::config_dir()?;
    let config = config::load_or_init(&config_dir, &config::default_data_dir()?)?;
    let data_dir = std::env::var_os("DOCTALK_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());
    let store = FileHistoryStore::new(data_dir);

    match std::env::args().nth(1).as_deref() {
        None | Some("quiz") => run_quiz(&config.user_id, &store).await,
        Some("history") => show_history(&config.user_id, &store).await,
        Some(other) => Err(eyre::eyre!("unknown command '{other}'\n{USAGE}")),
    }
}

async fn run_quiz(user: &UserId, store: &impl QuizHistoryStore) -> Result<()> {
    let quiz = SymptomQuiz;
    let mut session = QuizSession::new(quiz.questions())?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n{}\n", quiz.name(), terminal::HELP);
    tracing::info!(user = %user, questionnaire = quiz.id(), "quiz started");

    loop {
        print!("\n{}> ", terminal::render_question(&session));
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            tracing::info!(step = session.step(), "input closed, quiz abandoned");
            return Ok(());
        };

        match terminal::parse_command(&line) {
            Some(Command::Select(n)) => {
                let question = session.current_question();
                match question.options.get(n - 1) {
                    Some(option) => session.select(&option.id)?,
                    None => println!("There is no option {n}."),
                }
            }
            Some(Command::Next) => match session.next() {
                Ok(Advance::Question(_)) => {}
                Ok(Advance::Completed(result)) => {
                    println!("\n{}", terminal::render_result(&result));
                    store.append(user, &result).await?;
                    return Ok(());
                }
                Err(QuizError::Unanswered { .. }) => {
                    println!("Please answer the question. Select at least one option to continue.");
                }
                Err(e) => return Err(e.into()),
            },
            Some(Command::Back) => {
                session.back();
            }
            Some(Command::Quit) => {
                tracing::info!(step = session.step(), "quiz abandoned");
                return Ok(());
            }
            None => println!("{}", terminal::HELP),
        }
    }
}

async fn show_history(user: &UserId, store: &impl QuizHistoryStore) -> Result<()> {
    let results = store.list(user).await?;
    print!("{}", terminal::render_history(&results));
    Ok(())
}
