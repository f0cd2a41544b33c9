use super::print::render_message;
use flashcards::api::{CmdMessage, CmdResult, FlashcardsApi};
use flashcards::config::FlashcardsConfig;
use flashcards::error::{FlashcardError, Result};
use flashcards::transcript::Transcript;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
    Unknown,
}

impl Action {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "add" => Action::Add,
            "remove" => Action::Remove,
            "import" => Action::Import,
            "export" => Action::Export,
            "ask" => Action::Ask,
            "exit" => Action::Exit,
            "log" => Action::Log,
            "hardest card" => Action::HardestCard,
            "reset stats" => Action::ResetStats,
            _ => Action::Unknown,
        }
    }
}

/// Whether the loop may keep reading.
enum Flow {
    Continue,
    Stop,
}

/// Terminal side of a session. Every line shown or read ends up in the transcript.
struct Console<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn say(&mut self, message: &CmdMessage) -> Result<()> {
        writeln!(self.output, "{}", render_message(message, self.color))?;
        self.transcript.record(message.content.as_str());
        Ok(())
    }

    fn report(&mut self, result: &CmdResult) -> Result<()> {
        for message in &result.messages {
            self.say(message)?;
        }
        Ok(())
    }

    /// `None` once input is exhausted. Bytes that are not UTF-8 become U+FFFD.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        self.transcript.record(line.as_str());
        Ok(Some(line))
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.say(&CmdMessage::info(prompt))?;
        self.output.flush()?;
        self.read_line()
    }
}

/// The interactive read-eval loop over a [`FlashcardsApi`].
pub struct Session<R, W> {
    api: FlashcardsApi,
    console: Console<R, W>,
    rng: StdRng,
    import_from: Option<PathBuf>,
    export_to: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(api: FlashcardsApi, input: R, output: W, config: &FlashcardsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            api,
            console: Console {
                input,
                output,
                transcript: Transcript::new(),
                color: false,
            },
            rng,
            import_from: config.import_from.clone(),
            export_to: config.export_to.clone(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.console.color = color;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        if let Some(path) = self.import_from.clone() {
            let result = self.api.import_cards(&path)?;
            self.console.report(&result)?;
        }

        loop {
            let Some(line) = self.console.ask(MENU)? else {
                log::debug!("input closed, ending session");
                break;
            };
            let flow = match Action::parse(&line) {
                Action::Exit => Flow::Stop,
                Action::Add => self.handle_add()?,
                Action::Remove => self.handle_remove()?,
                Action::Import => self.handle_import()?,
                Action::Export => self.handle_export()?,
                Action::Ask => self.handle_ask()?,
                Action::Log => self.handle_log()?,
                Action::HardestCard => {
                    let result = self.api.hardest_card();
                    self.console.report(&result)?;
                    Flow::Continue
                }
                Action::ResetStats => {
                    let result = self.api.reset_stats();
                    self.console.report(&result)?;
                    Flow::Continue
                }
                Action::Unknown => {
                    self.console.say(&CmdMessage::error("Command not valid."))?;
                    Flow::Continue
                }
            };
            if let Flow::Stop = flow {
                break;
            }
        }

        self.finish()
    }

    fn finish(&mut self) -> Result<()> {
        self.console.say(&CmdMessage::info("Bye bye!"))?;
        if let Some(path) = self.export_to.clone() {
            let result = self.api.export_cards(&path)?;
            self.console.report(&result)?;
        }
        self.console.output.flush()?;
        Ok(())
    }

    fn handle_add(&mut self) -> Result<Flow> {
        let Some(term) = self.console.ask("The card:")? else {
            return Ok(Flow::Stop);
        };
        let check = self.api.check_term(&term);
        if check.has_errors() {
            self.console.report(&check)?;
            return Ok(Flow::Continue);
        }

        let Some(definition) = self.console.ask("The definition of the card:")? else {
            return Ok(Flow::Stop);
        };
        let result = self.api.add_card(&term, &definition)?;
        self.console.report(&result)?;
        Ok(Flow::Continue)
    }

    fn handle_remove(&mut self) -> Result<Flow> {
        let Some(term) = self.console.ask("Which card?")? else {
            return Ok(Flow::Stop);
        };
        let result = self.api.remove_card(&term)?;
        self.console.report(&result)?;
        Ok(Flow::Continue)
    }

    fn handle_import(&mut self) -> Result<Flow> {
        let Some(name) = self.console.ask("File name:")? else {
            return Ok(Flow::Stop);
        };
        let result = self.api.import_cards(Path::new(name.trim()))?;
        self.console.report(&result)?;
        Ok(Flow::Continue)
    }

    fn handle_export(&mut self) -> Result<Flow> {
        let Some(name) = self.console.ask("File name:")? else {
            return Ok(Flow::Stop);
        };
        let result = self.api.export_cards(Path::new(name.trim()))?;
        self.console.report(&result)?;
        Ok(Flow::Continue)
    }

    fn handle_log(&mut self) -> Result<Flow> {
        let Some(name) = self.console.ask("File name:")? else {
            return Ok(Flow::Stop);
        };
        let result = self
            .api
            .save_log(&self.console.transcript, Path::new(name.trim()))?;
        self.console.report(&result)?;
        Ok(Flow::Continue)
    }

    fn handle_ask(&mut self) -> Result<Flow> {
        let Some(line) = self.console.ask("How many times to ask?")? else {
            return Ok(Flow::Stop);
        };
        let times: u32 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                self.console.say(&CmdMessage::error("Invalid number."))?;
                return Ok(Flow::Continue);
            }
        };

        for _ in 0..times {
            let console = &mut self.console;
            let asked = self.api.ask(&mut self.rng, |term| {
                console
                    .ask(&format!("Print the definition of \"{}\":", term))?
                    .ok_or_else(|| {
                        FlashcardError::Io(io::Error::new(
                            io::ErrorKind::UnexpectedEof,
                            "input closed while waiting for an answer",
                        ))
                    })
            });

            let result = match asked {
                Ok(result) => result,
                Err(FlashcardError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Ok(Flow::Stop)
                }
                Err(e) => return Err(e),
            };
            self.console.report(&result)?;
            if result.outcome.is_none() {
                // nothing to ask about, no point repeating the message
                break;
            }
        }
        Ok(Flow::Continue)
    }

    #[cfg(test)]
    pub fn transcript(&self) -> &Transcript {
        &self.console.transcript
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.console.output
    }
}
