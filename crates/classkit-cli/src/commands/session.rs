//! Line-oriented shell over one in-memory Drawer and Grouper.

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::str::FromStr;

use classkit_core::{read_label_file, Config, DrawSource, Drawer, GroupMethod, Grouper};

use super::draw::join;
use super::CommandResult;

const HELP: &str = "\
commands:
  init <N>                      pool of numbers 1..=N
  names <FILE>                  pool of labels from a file
  draw <K>                      draw K entries
  pool                          show remaining entries
  history                       show every entry drawn so far
  reset                         clear pool and history
  group count|size <V> <TEXT>   group comma-separated participants
  groups                        show the latest groups
  help
  quit";

#[derive(Debug, PartialEq)]
pub enum SessionCommand {
    Init(u32),
    Names(PathBuf),
    Draw(usize),
    Pool,
    History,
    Reset,
    Group {
        method: GroupMethod,
        value: usize,
        participants: String,
    },
    Groups,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let number = |text: &str| {
            text.parse::<usize>()
                .map_err(|_| format!("expected a number, got '{text}'"))
        };

        match word {
            "init" => rest
                .parse::<u32>()
                .map(SessionCommand::Init)
                .map_err(|_| format!("expected a number, got '{rest}'")),
            "names" if !rest.is_empty() => Ok(SessionCommand::Names(PathBuf::from(rest))),
            "names" => Err("usage: names <FILE>".into()),
            "draw" => number(rest).map(SessionCommand::Draw),
            "pool" => Ok(SessionCommand::Pool),
            "history" => Ok(SessionCommand::History),
            "reset" => Ok(SessionCommand::Reset),
            "group" => {
                let mut parts = rest.splitn(3, char::is_whitespace);
                let method = match parts.next() {
                    Some("count") => GroupMethod::ByGroupCount,
                    Some("size") => GroupMethod::ByGroupSize,
                    _ => return Err("usage: group count|size <V> <TEXT>".into()),
                };
                let value = number(parts.next().unwrap_or(""))?;
                Ok(SessionCommand::Group {
                    method,
                    value,
                    participants: parts.next().unwrap_or("").to_string(),
                })
            }
            "groups" => Ok(SessionCommand::Groups),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            other => Err(format!("unknown command '{other}' (try 'help')")),
        }
    }
}

pub struct Session {
    drawer: Drawer,
    grouper: Grouper,
}

impl Session {
    pub fn new(drawer: Drawer, grouper: Grouper) -> Self {
        Self { drawer, grouper }
    }

    /// Run one command and return the text to show.
    pub fn execute(&mut self, command: SessionCommand) -> Result<String, Box<dyn std::error::Error>> {
        let unchanged = || "(no change)".to_string();
        let output = match command {
            SessionCommand::Init(total) => match self.drawer.initialize(DrawSource::Count(total)) {
                Some(_) => format!("pool ready: {} entries", self.drawer.remaining()),
                None => unchanged(),
            },
            SessionCommand::Names(path) => {
                let labels = read_label_file(path)?;
                match self.drawer.initialize(DrawSource::Labels(labels)) {
                    Some(_) => format!("pool ready: {} names", self.drawer.remaining()),
                    None => unchanged(),
                }
            }
            SessionCommand::Draw(count) => match self.drawer.draw(count) {
                Some(_) => format!(
                    "drawn: {}  (remaining {} / {})",
                    join(self.drawer.last_batch()),
                    self.drawer.remaining(),
                    self.drawer.total()
                ),
                None => unchanged(),
            },
            SessionCommand::Pool => join(self.drawer.pool()),
            SessionCommand::History => join(self.drawer.history()),
            SessionCommand::Reset => {
                self.drawer.reset();
                "lottery reset".to_string()
            }
            SessionCommand::Group {
                method,
                value,
                participants,
            } => match self.grouper.group_text(&participants, method, value) {
                Some(_) => self.grouper.latest().to_clipboard_text(),
                None => unchanged(),
            },
            SessionCommand::Groups => self.grouper.latest().to_clipboard_text(),
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => String::new(),
        };
        Ok(output)
    }
}

pub fn run() -> CommandResult {
    let config = Config::load_or_default();
    let mut session = Session::new(super::drawer(&config), super::grouper(&config));
    let interactive = std::io::stdin().is_terminal();
    let mut stdout = std::io::stdout();

    if interactive {
        println!("classkit session (type 'help')");
        print!("> ");
        stdout.flush()?;
    }
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<SessionCommand>() {
            Ok(SessionCommand::Quit) => break,
            Ok(command) => match session.execute(command) {
                Ok(output) => println!("{output}"),
                Err(e) => eprintln!("error: {e}"),
            },
            Err(message) => {
                tracing::debug!(line = %line.trim(), "unparsed session input");
                eprintln!("{message}");
            }
        }
        if interactive {
            print!("> ");
            stdout.flush()?;
        }
    }
    Ok(())
}
