use std::io::{self, BufRead, Write};

use clap::Parser;
use todo_cli::session::Session;
use todo_cli::view;

/// Interactive terminal frontend for the todo service.
#[derive(Parser)]
#[command(name = "todo", version, about = "Interactive todo client")]
struct Args {
    /// Base URL of the todo API, including the route prefix
    #[arg(long, env = "TODO_BASE_URL", default_value = "http://127.0.0.1:5120/api")]
    base_url: String,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut session = Session::new(&args.base_url);

    // Initial load. A failure lands in the store and shows up in the
    // dashboard's error banner, so the result itself is not needed here.
    let _ = session.fetch_todos();
    println!("{}", view::render_dashboard(session.store()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "help" => {
                println!("{}", view::HELP);
                continue;
            }
            "quit" | "exit" => break,
            "list" => {
                let _ = session.fetch_todos();
            }
            "add" => {
                if rest.is_empty() {
                    println!("usage: add <title>");
                    continue;
                }
                let _ = session.create_todo(rest);
            }
            "toggle" => match rest.parse::<i64>() {
                Ok(id) => {
                    let _ = session.toggle_todo(id);
                }
                Err(_) => {
                    println!("usage: toggle <id>");
                    continue;
                }
            },
            "rm" => match rest.parse::<i64>() {
                Ok(id) => {
                    let _ = session.remove_todo(id);
                }
                Err(_) => {
                    println!("usage: rm <id>");
                    continue;
                }
            },
            other => {
                println!("unknown command: {other} (try `help`)");
                continue;
            }
        }

        println!("{}", view::render_dashboard(session.store()));
    }

    Ok(())
}
