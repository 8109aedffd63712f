use std::io;

fn main() {
    liardice_cli::logging::init_logging();
    let code = liardice_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
