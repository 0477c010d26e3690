//! Line-oriented driver for a `ConversationSession`.
//!
//! Reads one line at a time, runs a full turn for each question and only
//! reads the next line once the turn has resolved, so there is never more
//! than one request in flight.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tutor_ai::{CompletionClient, ConversationSession, Message, Role, SessionError};
use tutor_common::TutorError;

/// One line of user input, classified.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Blank,
    Ask(String),
    Clear,
    History,
    Usage,
    Help,
    Quit,
}

impl Command {
    /// Only the exact command words are commands. Anything else, including
    /// lines such as `/usr/bin vs /bin?`, is a question.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Command::Blank,
            "/clear" | "/reset" => Command::Clear,
            "/history" => Command::History,
            "/usage" => Command::Usage,
            "/help" | "/h" | "/?" => Command::Help,
            "/quit" | "/exit" | "/q" => Command::Quit,
            _ => Command::Ask(line.to_string()),
        }
    }
}

/// Run the loop until `/quit` or end of input.
pub async fn run<R, W>(
    session: &mut ConversationSession,
    client: &dyn CompletionClient,
    input: R,
    out: &mut W,
) -> Result<(), TutorError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    print_welcome(session, out)?;
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out, "\nBye!")?;
            break;
        };

        match Command::parse(&line) {
            Command::Blank => continue,
            Command::Ask(text) => ask(session, client, text, out).await?,
            Command::Clear => {
                session.reset();
                writeln!(out, "Conversation cleared.")?;
            }
            Command::History => print_history(session, out)?,
            Command::Usage => {
                let usage = session.usage();
                writeln!(
                    out,
                    "{} replies, {} input tokens, {} output tokens",
                    usage.call_count(),
                    usage.total().input_tokens,
                    usage.total().output_tokens
                )?;
            }
            Command::Help => print_help(out)?,
            Command::Quit => {
                writeln!(out, "Bye!")?;
                break;
            }
        }
    }

    Ok(())
}

async fn ask<W: Write>(
    session: &mut ConversationSession,
    client: &dyn CompletionClient,
    text: String,
    out: &mut W,
) -> std::io::Result<()> {
    match session.submit(client, text).await {
        Ok(reply) => {
            writeln!(out, "{}", render(&Message::assistant(reply)))?;
            writeln!(out)?;
        }
        Err(SessionError::EmptyInput) => {}
        Err(e) => writeln!(out, "Error talking to the completion service: {e}")?,
    }
    Ok(())
}

/// Format one message the way the transcript shows it.
pub fn render(message: &Message) -> String {
    let label = match message.role {
        Role::User => "Student",
        Role::Assistant => "Tutor",
        Role::System => "System",
    };
    format!("{label}: {}", message.content)
}

fn print_history<W: Write>(session: &ConversationSession, out: &mut W) -> std::io::Result<()> {
    let visible = session.visible_history();
    if visible.is_empty() {
        return writeln!(out, "(no messages yet)");
    }
    for message in visible {
        writeln!(out, "{}", render(message))?;
    }
    writeln!(out, "---")
}

fn print_welcome<W: Write>(session: &ConversationSession, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Tutor ({})", session.params().model)?;
    writeln!(
        out,
        "Ask any question about Python or general programming. Type /help for commands."
    )?;
    writeln!(out)
}

fn print_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  /help, /h, /?     - Show this help")?;
    writeln!(out, "  /clear            - Start the conversation over")?;
    writeln!(out, "  /history          - Show the conversation so far")?;
    writeln!(out, "  /usage            - Show token usage")?;
    writeln!(out, "  /quit, /exit, /q  - Exit")?;
    writeln!(out, "Any other line is sent to the tutor as a question.")
}
