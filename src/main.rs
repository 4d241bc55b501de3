use flowdoc::cli;
use flowdoc::logger;
use flowdoc::ui;

#[tokio::main]
async fn main() {
    // Environment files are optional; a missing .env is not an error
    dotenvy::dotenv().ok();

    if let Err(e) = logger::init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    if let Err(e) = cli::main().await {
        ui::print_error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
