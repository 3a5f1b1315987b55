#[tokio::main]
async fn main() {
    if relay_server::run_with_config().await.is_err() {
        std::process::exit(1);
    }
}
