fn main() -> anyhow::Result<()> {
    hacker_stories::cli::run()
}
