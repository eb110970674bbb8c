//! rTimecard main entrypoint.

use rtimecard::run;
use rtimecard::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
