use promptcalc::run;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Ошибка терминала: {e}");
        std::process::exit(1);
    }
}
