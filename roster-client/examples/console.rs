//! Interactive employee console
//!
//! Minimal terminal front-end over [`Console`]. Point it at a running
//! roster-server:
//!
//! ```text
//! cargo run -p roster-client --example console -- http://localhost:5000
//! ```
//!
//! Commands: list | search <term> | add | edit <id> | del <id> | quit

use std::io::{BufRead, Write};

use roster_client::{ClientConfig, Console, View, phone_display};

fn prompt(label: &str) -> String {
    print!("{label}: ");
    std::io::stdout().flush().ok();
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).ok();
    line.trim().to_string()
}

fn render(console: &Console) {
    if let Some(err) = console.error() {
        println!("! {err}");
    }
    println!("{:<5} {:<20} {:<28} {:<14} {:>12}", "ID", "NAME", "EMAIL", "PHONE", "SALARY");
    for emp in console.filtered() {
        println!(
            "{:<5} {:<20} {:<28} {:<14} {:>12.2}",
            emp.id,
            emp.name,
            emp.email,
            phone_display(emp),
            emp.salary
        );
    }
}

fn fill_form(console: &mut Console) {
    let form = console.form_mut();
    form.name = prompt("Name");
    form.email = prompt("Email");
    form.phone = prompt("Phone (optional)");
    form.salary = prompt("Salary");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_client=info".into()),
        )
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:5000".to_string());

    let client = ClientConfig::new(base_url)
        .build_http_client()
        .expect("failed to build HTTP client");
    let mut console = Console::new(client);

    println!("Loading employees...");
    console.load().await;
    render(&console);

    loop {
        let line = prompt("\n> ");
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("list"), _) => {
                console.set_search("");
                render(&console);
            }
            (Some("search"), Some(term)) => {
                console.set_search(term);
                render(&console);
            }
            (Some("add"), _) => {
                console.open_create();
                fill_form(&mut console);
                if console.submit().await {
                    println!("Employee saved.");
                } else {
                    console.cancel();
                }
                render(&console);
            }
            (Some("edit"), Some(id)) => {
                let Ok(id) = id.parse() else {
                    println!("Not an id: {id}");
                    continue;
                };
                if !console.open_edit(id) {
                    println!("No employee with id {id}");
                    continue;
                }
                fill_form(&mut console);
                if console.submit().await {
                    println!("Employee saved.");
                } else {
                    console.cancel();
                }
                render(&console);
            }
            (Some("del"), Some(id)) => {
                let Ok(id) = id.parse() else {
                    println!("Not an id: {id}");
                    continue;
                };
                if console.delete(id).await {
                    println!("Employee deleted.");
                }
                render(&console);
            }
            (Some("quit"), _) | (Some("exit"), _) => break,
            _ => println!("Commands: list | search <term> | add | edit <id> | del <id> | quit"),
        }

        debug_assert_eq!(console.view(), View::Ready);
    }
}
