fn main() -> anyhow::Result<()> {
    route_finder::run()
}
