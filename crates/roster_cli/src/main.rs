//! Interactive probe over `roster_core`.
//!
//! # Responsibility
//! - Wire a JSON record file and a state directory to one core session.
//! - Map stdin lines onto session commands and print the rendered surface.
//!
//! Commands:
//! - `show`
//! - `submit <name>|<email>|<age>|<status>`
//! - `edit <id>`
//! - `delete <id>`
//! - `sort name|email|age|status`
//! - `filter all|active|inactive`
//! - `quit`

use log::info;
use roster_core::{
    render_errors, render_table, Command, FileStateStore, JsonFileSource, RecordSource, Session,
    SessionError, SortField, StateStore, StatusFilter, UserDraft, UserStatus,
};
use std::error::Error;
use std::io::{BufRead, Write};

enum Flow {
    Continue,
    Quit,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: roster_cli <users.json> <state-dir>");
        std::process::exit(2);
    }

    if let Err(err) = run(&args[1], &args[2]) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(users_path: &str, state_dir: &str) -> Result<(), Box<dyn Error>> {
    let log_dir = std::env::temp_dir().join("roster-logs");
    if let Err(err) =
        roster_core::init_logging(roster_core::default_log_level(), &log_dir.to_string_lossy())
    {
        eprintln!("logging disabled: {err}");
    }

    let source = JsonFileSource::new(users_path);
    let state = FileStateStore::open(state_dir)?;
    let mut session = Session::new(source, state);

    if let Err(err) = session.load() {
        if let Some(message) = session.error_message() {
            eprintln!("{message}");
        }
        return Err(Box::new(err));
    }
    info!(
        "event=cli_start module=cli status=ok version={} users={}",
        roster_core::core_version(),
        session.users().len()
    );

    print_surface(&session);

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("{}> ", session.submit_label());
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if let Flow::Quit = handle_line(&mut session, line.trim()) {
            break;
        }
    }

    Ok(())
}

fn handle_line<S, P>(session: &mut Session<S, P>, line: &str) -> Flow
where
    S: RecordSource,
    P: StateStore,
{
    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "" => {}
        "quit" | "exit" => return Flow::Quit,
        "show" => print_surface(session),
        "submit" => match parse_draft(rest) {
            Ok(draft) => run_command(session, Command::Submit(draft)),
            Err(message) => println!("{message}"),
        },
        "edit" => match rest.parse() {
            Ok(id) => match session.begin_edit(id) {
                Some(prefill) => println!(
                    "editing {id}: {}|{}|{}|{}",
                    prefill.name,
                    prefill.email,
                    prefill.age,
                    prefill.status.as_str()
                ),
                None => println!("user {id} not found"),
            },
            Err(_) => println!("edit expects a numeric id"),
        },
        "delete" => match rest.parse() {
            Ok(id) => run_command(session, Command::Delete(id)),
            Err(_) => println!("delete expects a numeric id"),
        },
        "sort" => match SortField::parse(rest) {
            Some(field) => run_command(session, Command::SetSort(field)),
            None => println!("sort expects name|email|age|status"),
        },
        "filter" => match StatusFilter::parse(rest) {
            Some(status) => run_command(session, Command::SetFilter(status)),
            None => println!("filter expects all|active|inactive"),
        },
        other => println!("unknown command: {other}"),
    }

    Flow::Continue
}

fn run_command<S, P>(session: &mut Session<S, P>, command: Command)
where
    S: RecordSource,
    P: StateStore,
{
    match session.dispatch(command) {
        Ok(()) => print_surface(session),
        Err(SessionError::Validation(errors)) => print!("{}", render_errors(&errors)),
        Err(err) => println!("{err}"),
    }
}

fn parse_draft(input: &str) -> Result<UserDraft, String> {
    let parts: Vec<&str> = input.split('|').collect();
    if parts.len() != 4 {
        return Err("submit expects <name>|<email>|<age>|<status>".to_string());
    }
    let status = UserStatus::parse(parts[3].trim())
        .ok_or_else(|| "status must be active or inactive".to_string())?;
    Ok(UserDraft {
        name: parts[0].trim().to_string(),
        email: parts[1].trim().to_string(),
        age: parts[2].trim().to_string(),
        status,
    })
}

fn print_surface<S, P>(session: &Session<S, P>)
where
    S: RecordSource,
    P: StateStore,
{
    if let Some(message) = session.error_message() {
        println!("! {message}");
    }
    print!("{}", render_table(&session.rows(), session.view()));
    println!("[{}]", session.submit_label());
}
