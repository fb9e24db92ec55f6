//! rDayLayout main entrypoint.

use rdaylayout::run;
use rdaylayout::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
