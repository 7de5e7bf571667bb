use std::path::PathBuf;

use clap::Args;
use classkit_core::{parse_labels, read_label_file, Config, GroupMethod};

use super::CommandResult;

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct ParticipantArgs {
    /// Participants separated by newlines or commas
    #[arg(long, short)]
    participants: Option<String>,
    /// Participant list file
    #[arg(long, short)]
    file: Option<PathBuf>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct MethodArgs {
    /// Number of groups to form
    #[arg(long, short)]
    groups: Option<usize>,
    /// Members per group
    #[arg(long, short)]
    size: Option<usize>,
}

impl MethodArgs {
    pub fn method(&self) -> (GroupMethod, usize) {
        match (self.groups, self.size) {
            (Some(groups), _) => (GroupMethod::ByGroupCount, groups),
            (None, Some(size)) => (GroupMethod::ByGroupSize, size),
            (None, None) => (GroupMethod::ByGroupSize, 0),
        }
    }
}

#[derive(Args)]
pub struct GroupArgs {
    #[command(flatten)]
    participants: ParticipantArgs,
    #[command(flatten)]
    method: MethodArgs,
    /// Print the groups as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: GroupArgs) -> CommandResult {
    let config = Config::load_or_default();
    let mut grouper = super::grouper(&config);

    let participants = match (args.participants.participants, args.participants.file) {
        (_, Some(path)) => read_label_file(path)?,
        (Some(text), None) => parse_labels(&text),
        (None, None) => Vec::new(),
    };
    let (method, value) = args.method.method();

    if grouper.group(participants, method, value).is_none() {
        eprintln!("nothing to group: need at least one participant and a value of 1 or more");
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(grouper.latest())?);
    } else {
        println!("{}", grouper.latest().to_clipboard_text());
    }
    Ok(())
}
