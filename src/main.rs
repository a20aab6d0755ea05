use gio::prelude::*;
use log::info;

mod ui;

fn main() {
    env_logger::init();

    let application = gtk::Application::new(
        Some("com.github.brickout.window"),
        Default::default(),
    )
    .expect("Initialization failed...");

    application.connect_activate(|app| {
        ui::build_ui(app);
    });

    let status = application.run(&std::env::args().collect::<Vec<_>>());
    info!("event loop exited with status {}", status);
    std::process::exit(status);
}
