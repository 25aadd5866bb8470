use clink_cmd::args::raw_command_line;
use clink_cmd::config::ShimConfig;
use clink_cmd::launch::default_launcher;
use clink_cmd::logging::init_tracing;
use clink_cmd::shim::{exit_code, run_shim_raw};

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("clink-cmd: logging disabled: {e:#}");
    }

    let config = ShimConfig::default();
    let mut launcher = default_launcher(&config);
    let result = run_shim_raw(&raw_command_line(), &config, launcher.as_mut());

    if let Err(e) = &result {
        eprintln!("clink-cmd: {e}");
    }
    std::process::exit(exit_code(&result));
}
