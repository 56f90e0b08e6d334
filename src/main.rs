use anyhow::Result;
use clap::Parser;
use ruwords::cli::{Cli, Commands, CommonArgs};
use ruwords::dicts::ExtensionSet;
use ruwords::harvest;
use ruwords::options::{parse_headers, InputMode, Options};

fn init_logging(level: &str) {
    if level == "silent" {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_options(mode: InputMode, common: &CommonArgs) -> Result<Options> {
    let mut gzip_flag = common.gzip;
    if !gzip_flag {
        if let Some(ref p) = common.output {
            if let Some(os) = p.as_os_str().to_str() {
                if os.ends_with(".gz") {
                    gzip_flag = true;
                }
            }
        }
    }

    let opt = Options {
        mode,
        threads: common.threads,
        delay: common.delay,
        timeout: common.timeout,
        headers: parse_headers(&common.headers),
        extensions: ExtensionSet::from_flags(
            &common.filter_extensions,
            &common.exclude_extensions,
        ),
        all: common.all,
        output: common.output.clone(),
        output_type: common.output_type.clone(),
        gzip: gzip_flag,
        append: common.append,
        not_print: common.not_print,
        silent: common.silent,
        progress: !common.no_progress,
        progress_interval: common.progress_interval,
        log_level: common.log_level.clone(),
    };
    opt.check()?;
    Ok(opt)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Url(args) => {
            init_logging(&args.common.log_level);
            let opt = build_options(InputMode::Url(args.url), &args.common)?;
            harvest::run(opt).await?;
        }
        Commands::List(args) => {
            init_logging(&args.common.log_level);
            let opt = build_options(InputMode::List(args.listfile), &args.common)?;
            harvest::run(opt).await?;
        }
        Commands::File(args) => {
            init_logging(&args.common.log_level);
            let opt = build_options(InputMode::File(args.file), &args.common)?;
            harvest::run(opt).await?;
        }
        Commands::Ext(args) => {
            let set = ExtensionSet::from_flags(&args.filter_extensions, &args.exclude_extensions);
            for e in set.entries() {
                println!("{}", e);
            }
        }
    }

    Ok(())
}
