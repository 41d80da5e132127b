fn main() -> anyhow::Result<()> {
    solbatch_rust::run()
}
