use crate::console::{run_nutrition, run_recommend, NutritionArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fruit_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fruit Advisor",
    about = "Serve or query the fruit nutrition advisor from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print ranked fruit recommendations for a profile
    Recommend(RecommendArgs),
    /// Print the nutrition facts stored for a fruit label
    Nutrition(NutritionArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Nutrition(args) => run_nutrition(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["fruit-advisor-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn recommend_collects_repeated_conditions() {
        let cli = Cli::try_parse_from([
            "fruit-advisor-api",
            "recommend",
            "--age",
            "64",
            "--health-condition",
            "Diabetes",
            "--health-condition",
            "Hypertension",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.age, 64);
                assert_eq!(args.health_conditions, ["Diabetes", "Hypertension"]);
                assert!(args.json);
            }
            other => panic!("expected recommend command, got {other:?}"),
        }
    }

    #[test]
    fn serve_accepts_port_override() {
        let cli = Cli::try_parse_from(["fruit-advisor-api", "serve", "--port", "8080"])
            .expect("parses");

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
