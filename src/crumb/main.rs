mod cli;

fn main() {
    // Logs go to stderr and stay out of the menu UI unless RUST_LOG asks
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
