use anyhow::Result;
use todo_tui::app::App;
use todo_tui::config::Config;

fn main() -> Result<()> {
    let mut config = Config::new();
    config.load(None)?;
    App::start(config)
}
