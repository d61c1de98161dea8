use social_duo::{launch, logging, report};
use std::process;

fn main() {
    logging::init();

    let code = match launch::dispatch(std::env::args_os().skip(1)) {
        Ok(code) => code,
        Err(err) => {
            report::fatal(&err);
            1
        }
    };
    process::exit(code);
}
