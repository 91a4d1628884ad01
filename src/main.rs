use log::error;

fn main() {
    env_logger::init();

    if let Err(e) = ship_fleet::get_arg().and_then(ship_fleet::run) {
        error!("{e:#}");
        std::process::exit(-1);
    }
}
