use abacus::config::DemoConfig;
use abacus::demo;
use abacus::options::Options;
use anyhow::{anyhow, Result};
use log::{debug, info};

fn main() {
    if std::env::var("ABACUS_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("ABACUS_LOG")
            .write_style("ABACUS_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    if let Err(err) = run() {
        eprintln!("abacus: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    // without arguments, fall back to flags from the environment
    let parsed = if args.is_empty() {
        Options::parse_from_str(&std::env::var("ABACUS_FLAGS").unwrap_or_default())
    } else {
        Options::parse_from_args(&args)
    };
    let options = match parsed {
        Ok(options) => options,
        Err(err) => {
            if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
                clap_err.exit();
            }
            return Err(anyhow!("{err}"));
        }
    };
    debug!("abacus options: {:?}", options);

    let config = DemoConfig::load_from_file(&options.config)?;
    let report = demo::run(&options, &config);
    print!("{report}");

    if let Some(path) = &options.output {
        report.save_to_file(path)?;
        info!("report written to {path}");
    }
    Ok(())
}
