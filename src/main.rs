#[tokio::main]
async fn main() {
    dream5_be::start_server().await;
}
