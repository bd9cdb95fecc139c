use bvhq_core::config;
use bvhq_core::quantization::{Quantizer, QuantizerConfig, RangePolicy};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod output;

use output::{render, OutputFormat, Record};

#[derive(Parser)]
#[command(
    name = "bvhq",
    version,
    about = "Quantize a float into conservative low/high BVH codes"
)]
struct Args {
    /// Value to quantize (floored first unless --interval is given)
    #[arg(allow_negative_numbers = true)]
    value: f64,

    /// Reject non-finite and out-of-window values instead of wrapping
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Biased exponent mapped to quantized exponent 0 (134 for boxes, 127 for rays)
    #[arg(long, default_value_t = config::DEFAULT_EXPONENT_SHIFT)]
    shift: u32,

    /// Print the signed traversal interval (lower, upper) instead of low/high codes
    #[arg(long, default_value_t = false)]
    interval: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("bvhq=warn".parse().expect("valid directive literal"))
                .add_directive("bvhq_core=warn".parse().expect("valid directive literal")),
        )
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors go to stdout with status 1; existing tooling depends on it.
            println!("{}", e.render());
            std::process::exit(1);
        }
    };

    let config = QuantizerConfig {
        exponent_shift: args.shift,
        range_policy: if args.strict {
            RangePolicy::Strict
        } else {
            RangePolicy::Wrap
        },
    };
    let quantizer = Quantizer::new(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    tracing::debug!(?config, value = args.value, "quantizer ready");

    if args.interval {
        let interval = quantizer.interval(args.value as f32);
        emit(interval, args.format)
    } else {
        let bounds = quantizer.quantize(args.value.floor() as f32);
        emit(bounds, args.format)
    }
}

fn emit<R: Record>(
    result: bvhq_core::Result<R>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match result {
        Ok(record) => {
            println!("{}", render(&record, format)?);
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = %e, "quantization rejected");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
