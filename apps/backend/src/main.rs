#[tokio::main]
async fn main() -> anyhow::Result<()> {
    memo_practice_backend::run().await
}
