use gio::prelude::*;
use gtk::prelude::*;
use log::{debug, info};

mod shutdown;
use shutdown::QuitOnce;

const TITLE: &str = "Brickout Tutorial";
const DEFAULT_WIDTH: i32 = 640;
const DEFAULT_HEIGHT: i32 = 480;

pub fn build_ui(application: &gtk::Application) {
    let window = gtk::ApplicationWindow::new(application);

    window.set_title(TITLE);
    window.set_position(gtk::WindowPosition::Center);
    window.set_default_size(DEFAULT_WIDTH, DEFAULT_HEIGHT);
    window.set_type_hint(gdk::WindowTypeHint::Utility);

    let quit = QuitOnce::new({
        let application = application.clone();
        Box::new(move || application.quit())
    });
    window.connect_destroy(move |_| {
        info!("main window destroyed");
        quit.fire();
    });

    window.show_all();
    debug!("main window shown at {}x{}", DEFAULT_WIDTH, DEFAULT_HEIGHT);
}
