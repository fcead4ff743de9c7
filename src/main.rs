use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    bikeshare_explorer::app::run()
}
