//! Line-oriented terminal front end.

use std::fmt;
use std::io::Write;

use async_trait::async_trait;
use supa_ai::{ChatSurface, Role, TokenUsage, Turn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

const PROMPT: &str = "> ";
const COMMAND_HINT: &str = "/retry  /history  /quit";

/// Reads user lines from `R` and renders the conversation to `W`.
pub struct TerminalSurface<R, W> {
    input: Lines<R>,
    out: W,
    /// Shown once, before the first prompt.
    placeholder: Option<String>,
}

impl TerminalSurface<BufReader<Stdin>, std::io::Stdout> {
    pub fn stdio(placeholder: impl Into<String>) -> Self {
        Self::new(
            BufReader::new(tokio::io::stdin()),
            std::io::stdout(),
            placeholder,
        )
    }
}

impl<R, W> TerminalSurface<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(reader: R, out: W, placeholder: impl Into<String>) -> Self {
        Self {
            input: reader.lines(),
            out,
            placeholder: Some(placeholder.into()),
        }
    }

    pub fn show_header(&mut self, title: &str) {
        let rule = "─".repeat(title.chars().count().max(8));
        self.write(format_args!("💬 {title}\n{rule}\n\n"));
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn write(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.flush()) {
            warn!("terminal write failed: {e}");
        }
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "you",
        Role::Assistant => "assistant",
        Role::System => "system",
    }
}

#[async_trait]
impl<R, W> ChatSurface for TerminalSurface<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn read_next_user_input(&mut self) -> Option<String> {
        if let Some(placeholder) = self.placeholder.take() {
            self.write(format_args!("{placeholder}  ({COMMAND_HINT})\n"));
        }
        self.write(format_args!("{PROMPT}"));

        match self.input.next_line().await {
            Ok(Some(line)) => Some(line),
            Ok(None) => {
                // EOF: end the prompt line cleanly
                self.write(format_args!("\n"));
                None
            }
            Err(e) => {
                warn!("failed to read input: {e}");
                None
            }
        }
    }

    fn display_turn(&mut self, turn: &Turn) {
        let label = role_label(turn.role);
        self.write(format_args!("{label} › {}\n\n", turn.content));
    }

    fn display_history(&mut self, turns: &[Turn]) {
        if turns.is_empty() {
            return;
        }
        self.write(format_args!("── history ({} messages) ──\n", turns.len()));
        for turn in turns {
            self.display_turn(turn);
        }
    }

    fn begin_assistant_turn(&mut self) {
        let label = role_label(Role::Assistant);
        self.write(format_args!("{label} › "));
    }

    fn render_delta(&mut self, delta: &str) {
        self.write(format_args!("{delta}"));
    }

    fn end_assistant_turn(&mut self) {
        self.write(format_args!("\n\n"));
    }

    fn display_error(&mut self, message: &str) {
        self.write(format_args!("⚠️  {message}\n\n"));
    }

    fn display_usage(&mut self, usage: &TokenUsage) {
        self.write(format_args!(
            "tokens: {} in, {} out ({} total)\n\n",
            usage.input_tokens,
            usage.output_tokens,
            usage.total_tokens()
        ));
    }
}
