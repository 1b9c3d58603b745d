use petpanel::app;

fn main() {
    env_logger::init();
    log::info!("PetPanel starting up");

    if let Err(e) = app::run() {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}
