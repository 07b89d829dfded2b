// ABOUTME: Main entry point for the anime-list application
// ABOUTME: Parses arguments, loads configuration and hands the command to the controller

use anime_cli::cli::Cli;
use anime_cli::cli_output::CliOutput;
use anime_cli::config::Config;
use anime_cli::controller::Controller;
use anyhow::Result;
use clap::Parser;
use std::io::Write;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let output = CliOutput::new(cli.no_color);
    if let Err(e) = run(cli).await {
        output.report(&e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    log::debug!("Loaded configuration: {:?}", config);

    let controller = Controller::new(config, CliOutput::new(cli.no_color))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = controller.run(cli.command, &mut out).await;
    out.flush()?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "anime-list");

        for name in ["search", "list", "add", "remove", "update", "genres", "tags"] {
            assert!(
                cli.find_subcommand(name).is_some(),
                "{name} command should exist"
            );
        }

        let search = cli
            .find_subcommand("search")
            .expect("search command should exist");
        let page = search
            .get_arguments()
            .find(|arg| arg.get_id() == "page")
            .expect("page argument should exist");
        assert!(!page.is_required_set());
    }

    #[test]
    fn test_remove_requires_an_id() {
        assert!(Cli::try_parse_from(["anime-list", "remove"]).is_err());
        assert!(Cli::try_parse_from(["anime-list", "remove", "abc"]).is_err());
        assert!(Cli::try_parse_from(["anime-list", "remove", "4"]).is_ok());
    }
}
