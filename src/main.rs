use anyhow::Result;
use commonlib::config::Config;
use commonlib::constants::{ERROR_CONFIG_FALLBACK, ERROR_PARSE_FAILED, USAGE};
use commonlib::logger;
use commonlib::patterns::Singleton;
use commonlib::utils::{datetime, timer};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    // The logger is configured by the file being loaded, so a broken file
    // can only be reported on stderr
    if let Err(e) = Config::load() {
        eprintln!("{}: {:#}", ERROR_CONFIG_FALLBACK, e);
    }
    let config = Config::get_instance();
    logger::init(&config.logging)?;

    match args.as_slice() {
        [] => {
            let start = timer::monotonic_mark();
            println!("local: {}", datetime::current_local_text(&config.formats.datetime));
            println!("utc:   {}", datetime::current_utc_text(&config.formats.datetime));
            println!("date:  {}", datetime::current_date_text(&config.formats.date));
            println!("time:  {}", datetime::current_time_text(&config.formats.time));
            let end = timer::monotonic_mark();
            println!("took:  {:.3} µs", timer::elapsed_microseconds(start, end));
        }
        [flag, text] if flag == "--parse" => match datetime::parse(text, &config.formats.datetime) {
            Ok(timestamp) => println!("{}", timestamp.unix_seconds()),
            Err(e) => {
                eprintln!("{}: {}", ERROR_PARSE_FAILED, e);
                std::process::exit(1);
            }
        },
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}
