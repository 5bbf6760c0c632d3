use genst::{
    cli::{get_log_level_from_verbose, parse_cli, run, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let lvl = get_log_level_from_verbose(cli.verbose);
    env_logger::Builder::new().filter_level(lvl).init();

    let result = match cli.command {
        Commands::New(args) => run(args),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}
