/* crate use */
use clap::{CommandFactory, Parser};

/* project use */
use fastq_stats::error;
use fastq_stats::report;
use fastq_stats::Sequential;

#[derive(clap::Parser, Debug)]
#[clap(
    name = "fastq_stats",
    version,
    about = "fastq_stats reports summary stats on fastq files.",
    long_about = "fastq_stats reports summary stats on fastq files.

You use it to get an overview of what bases were called at what quality at each
base position. Useful for seeing what difference re-calling bases made (compare
the output of this program on original fastqs to the output on re-called
fastqs)."
)]
struct Command {
    #[clap(
        value_name = "FASTQ",
        help = "gzip compressed fastq input files",
        parse(from_os_str)
    )]
    pub inputs: Vec<std::path::PathBuf>,

    #[clap(
        short = 'b',
        long = "buffer-size",
        help = "Capacity of line reader buffer",
        default_value = "16384"
    )]
    pub buffer_size: std::num::NonZeroUsize,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Increase log verbosity, can be repeat",
        parse(from_occurrences)
    )]
    pub verbosity: usize,
}

fn exit_usage(msg: &str) -> ! {
    eprintln!("ERROR: {}", msg);
    println!();

    let _ = Command::command().print_help();

    std::process::exit(1);
}

fn run(params: &Command) -> error::Result<()> {
    let mut stats = fastq_stats::Stats::new();
    for input in &params.inputs {
        stats.with_buffer_size(params.buffer_size.get(), input)?;
    }

    let stdout = std::io::stdout();
    report::write(&stats, std::io::BufWriter::new(stdout.lock()))
}

fn main() {
    let params = match Command::try_parse() {
        Ok(params) => params,
        // help and version are not error
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let msg = e.to_string();
            eprint!("ERROR: {}", msg.trim_start_matches("error: "));
            std::process::exit(1);
        }
    };

    if params.inputs.is_empty() {
        exit_usage("you must provide fastq input files");
    }

    env_logger::Builder::new()
        .filter_level(match params.verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    if let Err(e) = run(&params) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
