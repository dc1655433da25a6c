use std::fs::File;
use std::io;
use std::path::Path;
use std::process;
use std::sync::Arc;

use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{Config, WriteLogger};

use cli::app::App;
use cli::config::{self, Args};
use cli::state::reducers::AppAction;
use cli::state::store::Store;
use soundbar::{DeviceClient, SoundbarClient};

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = match config::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    init_logging(&config.log_file)?;

    let store = Arc::new(Store::new());
    store.dispatch(AppAction::SetDevice {
        name: config.soundbar.name.clone(),
        endpoint: format!("{}:{}", config.soundbar.host, config.soundbar.port),
    });

    let device: Option<Arc<dyn DeviceClient>> = match SoundbarClient::new(&config.soundbar) {
        Ok(client) => {
            info!("Controlling {} at {}", config.soundbar.name, client.endpoint().base_url());
            Some(Arc::new(client))
        }
        Err(e) => {
            error!("Failed to create soundbar client: {}", e);
            store.dispatch(AppAction::SetError(e.to_string()));
            None
        }
    };

    let mut terminal = ratatui::init();
    let result = App::new(store, device, config.poll_interval).run(&mut terminal).await;
    ratatui::restore();
    result
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
