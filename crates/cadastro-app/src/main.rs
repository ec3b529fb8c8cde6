use std::io::Write;

use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

use cadastro_api::service::HttpCustomerService;
use cadastro_app::config;
use cadastro_app::render;
use cadastro_app::session::{DeleteOutcome, LoadOutcome, SubmitOutcome};
use cadastro_core::dates::DateStyle;
use cadastro_core::form::Field;
use cadastro_core::models::customer::CustomerId;

const HELP: &str = "\
commands:
  list                 show registered customers
  reload               fetch the list again from the service
  form                 show the current form inputs
  set <field> <value>  set one input (name, address, city, date_of_birth, phone, email)
  add                  fill in every input, then submit
  submit               submit the form
  delete <id>          delete a customer
  clear                empty the form
  json                 dump the session state as JSON
  quit                 leave
";

type Session = cadastro_app::session::Session<HttpCustomerService>;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = config::resolve_config()?;

    if std::env::args().nth(1).as_deref() == Some("init") {
        config::save_config(&config)?;
        println!("config written to {}", config::config_dir()?.display());
        return Ok(());
    }

    let style = config.date_style();
    let service = HttpCustomerService::new(&config.api_config())?;
    println!("cadastro: {}", service.base_url());

    let session = Session::new(service);
    report_load(session.load().await);
    print_list(&session, style).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Some(line) = prompt(&mut lines, "> ").await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((line, ""));

        match command {
            "help" | "?" => print!("{HELP}"),
            "list" | "ls" => print_list(&session, style).await,
            "reload" => {
                report_load(session.load().await);
                print_list(&session, style).await;
            }
            "form" => print!("{}", render::form(&session.view().await)),
            "set" => set_field(&session, rest).await,
            "add" => {
                if !fill_form(&session, &mut lines).await? {
                    break;
                }
                report_submit(&session, session.submit().await, style).await;
            }
            "submit" => report_submit(&session, session.submit().await, style).await,
            "delete" | "rm" => {
                if rest.is_empty() {
                    println!("usage: delete <id>");
                    continue;
                }
                let outcome = session.delete(&CustomerId::new(rest)).await;
                report_delete(outcome);
            }
            "clear" => {
                if !session.clear_form().await {
                    println!("a submit is in flight; try again");
                }
            }
            "json" => println!("{}", serde_json::to_string_pretty(&session.view().await)?),
            "quit" | "exit" | "q" => break,
            other => println!("unknown command {other:?}; type `help`"),
        }
    }

    session.close().await;
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    // stdout belongs to the interactive prompt
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, text: &str) -> Result<Option<String>> {
    print!("{text}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

/// Ask for every input in form order. Returns false on end of input.
async fn fill_form(session: &Session, lines: &mut Lines<BufReader<Stdin>>) -> Result<bool> {
    for field in Field::ALL {
        let hint = if field == Field::DateOfBirth {
            " (YYYY-MM-DD)"
        } else {
            ""
        };
        let Some(value) = prompt(lines, &format!("{}{hint}: ", field.label())).await? else {
            return Ok(false);
        };
        session.set_field(field, value.trim()).await;
    }
    Ok(true)
}

async fn set_field(session: &Session, args: &str) {
    let (name, value) = args
        .split_once(char::is_whitespace)
        .map(|(n, v)| (n, v.trim()))
        .unwrap_or((args, ""));
    match name.parse::<Field>() {
        Ok(field) => {
            if !session.set_field(field, value).await {
                println!("a submit is in flight; edit ignored");
            }
        }
        Err(e) => println!("{e}"),
    }
}

async fn print_list(session: &Session, style: DateStyle) {
    let view = session.view().await;
    print!("{}", render::records(&view.records, style));
    println!("-- {}", render::status(&view));
}

fn report_load(outcome: LoadOutcome) {
    match outcome {
        LoadOutcome::Loaded(n) => println!("loaded {n} customer(s)"),
        LoadOutcome::Failed(message) => println!("{message}"),
        LoadOutcome::Busy => println!("already busy; try again"),
        LoadOutcome::Discarded => {}
    }
}

async fn report_submit(session: &Session, outcome: SubmitOutcome, style: DateStyle) {
    match outcome {
        SubmitOutcome::Created(record) => {
            println!("saved:");
            print!("{}", render::record(&record, style));
        }
        SubmitOutcome::Invalid(_) => {
            println!("some fields are empty:");
            print!("{}", render::form(&session.view().await));
        }
        SubmitOutcome::Failed(message) => println!("{message} (inputs kept)"),
        SubmitOutcome::Busy => println!("a submit is already in flight"),
        SubmitOutcome::Discarded => {}
    }
}

fn report_delete(outcome: DeleteOutcome) {
    match outcome {
        DeleteOutcome::Deleted => println!("deleted"),
        DeleteOutcome::Failed(message) => println!("{message}"),
        DeleteOutcome::Busy => println!("already busy; try again"),
        DeleteOutcome::Discarded => {}
    }
}
