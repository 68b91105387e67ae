use console::style;

mod env;
mod launcher;
mod relay;
mod target;
mod term;

use crate::launcher::Launcher;

fn main() {
    term::prepare();

    match Launcher::from_env().and_then(|launcher| launcher.run()) {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("{} {e:#}", style("error").bold().red());
            std::process::exit(1);
        }
    }
}
