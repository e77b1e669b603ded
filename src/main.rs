use log::warn;
use pixel_grid::Config;

#[macroquad::main("pixel-grid")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().unwrap_or_else(|err| {
        warn!("Ignoring configuration overrides: {}", err);
        Config::default()
    });

    pixel_grid::app::run(config).await;
}
