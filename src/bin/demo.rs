//! Terminal stand-in for the portfolio page's database demo: lists the
//! projects, optionally appends one, and refreshes the panel a moment after
//! a successful append.

use std::time::Duration;

use folio::client::{ApiClient, render_cards};
use folio::models::NewProject;

/// Matches the page demo: refresh unconditionally, a fixed delay after the
/// append, whether or not anything newer is in flight.
const REFRESH_DELAY: Duration = Duration::from_millis(1500);

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let base_url =
        std::env::var("FOLIO_API_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let client = ApiClient::new(&base_url);

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("add") => {
            let title = match args.next() {
                Some(t) => t,
                None => {
                    eprintln!("usage: demo add <title> [description]");
                    std::process::exit(2);
                }
            };
            let project = NewProject {
                title,
                description: args.next().unwrap_or_default(),
                image: String::new(),
                demo_url: String::new(),
                github_url: String::new(),
                tags: vec![],
                featured: false,
            };

            println!("Adding project...");
            match client.add_project(&project).await {
                Ok(created) => println!("Added \"{}\" (#{})", created.title, created.id),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }

            tokio::time::sleep(REFRESH_DELAY).await;
            show_projects(&client).await;
        }
        None | Some("list") => show_projects(&client).await,
        Some(other) => {
            eprintln!("unknown command: {other}\nusage: demo [list | add <title> [description]]");
            std::process::exit(2);
        }
    }
}

async fn show_projects(client: &ApiClient) {
    println!("Loading projects...");
    match client.list_projects().await {
        Ok(projects) => print!("{}", render_cards(&projects)),
        Err(e) => eprintln!("Error: {e}"),
    }
}
