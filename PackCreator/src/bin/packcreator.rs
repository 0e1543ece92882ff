fn main() -> anyhow::Result<()> {
    packcreator::cli::run_cli()
}
