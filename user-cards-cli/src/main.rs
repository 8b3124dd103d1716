use clap::{Arg, Command};
use std::fs;
use tracing::info;
use user_cards_lib::*;

fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

async fn fetch_users(client: &reqwest::Client, endpoint: &str) -> Result<Vec<User>, UserCardsError> {
    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|e| UserCardsError::Network(e.to_string()))?;

    check_status(response.status().as_u16())?;

    let body = response
        .text()
        .await
        .map_err(|e| UserCardsError::Network(e.to_string()))?;
    parse_users(&body)
}

fn load_users_file(path: &str) -> Result<Vec<User>, UserCardsError> {
    let body = fs::read_to_string(path)?;
    parse_users(&body)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let matches = Command::new("user-cards")
        .version("0.1.0")
        .about("Render the user directory page from the demo users API")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read users from a JSON file instead of the network")
                .required(false),
        )
        .arg(
            Arg::new("endpoint")
                .short('u')
                .long("endpoint")
                .value_name("URL")
                .help("Users endpoint (overrides USER_CARDS_ENDPOINT)")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (stdout if not specified)")
                .required(false),
        )
        .arg(
            Arg::new("fragment")
                .long("fragment")
                .help("Emit only the view markup, without the document shell")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let config = DirectoryConfig::from_env()
        .with_endpoint_override(matches.get_one::<String>("endpoint").cloned());
    let mut directory = UserDirectory::new(config);

    if let Some(endpoint) = directory.start() {
        let result = match matches.get_one::<String>("input") {
            Some(path) => {
                info!("Reading users from {}", path);
                load_users_file(path)
            }
            None => fetch_users(&reqwest::Client::new(), &endpoint).await,
        };
        directory.finish(result);
    }

    let page = if matches.get_flag("fragment") {
        directory.render()
    } else {
        directory.render_document()
    };

    if let Some(output_file) = matches.get_one::<String>("output") {
        fs::write(output_file, page)?;
    } else {
        println!("{}", page);
    }

    if let ViewState::Error(message) = directory.state() {
        anyhow::bail!("{}", message);
    }

    Ok(())
}
