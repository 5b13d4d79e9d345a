#[tokio::main]
async fn main() -> anyhow::Result<()> {
    alvya::multicall::alvyad::run(std::env::args_os().collect()).await
}
