fn main() -> anyhow::Result<()> {
    renderc::run()
}
