use clap::Args;
use tracing::{debug, warn};

use crate::cli::{OffsetArgs, OutputFormat};
use crate::core::types::PhredEncoding;
use crate::quality::{scores_to_string, string_to_array};

#[derive(Args)]
pub struct EncodeArgs {
    /// Quality scores to encode, in read order
    #[arg(required = true, allow_negative_numbers = true)]
    pub scores: Vec<i64>,

    #[command(flatten)]
    pub offset: OffsetArgs,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Quality string to decode (quote it if it contains shell metacharacters)
    #[arg(required = true, allow_hyphen_values = true)]
    pub quality: String,

    #[command(flatten)]
    pub offset: OffsetArgs,
}

pub fn encode(args: EncodeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let offset = args.offset.resolve();
    debug!("Encoding {} scores with offset {offset}", args.scores.len());

    let text = scores_to_string(Some(&args.scores), offset)?.unwrap_or_default();

    if verbose {
        eprintln!(
            "Encoded {} scores ({})",
            args.scores.len(),
            describe_offset(offset)
        );
    }

    match format {
        OutputFormat::Text => println!("{text}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "quality": text,
                "offset": offset,
                "length": args.scores.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("quality\toffset\tlength");
            println!("{text}\t{offset}\t{}", args.scores.len());
        }
    }

    Ok(())
}

pub fn decode(args: DecodeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let offset = args.offset.resolve();
    debug!(
        "Decoding {} quality characters with offset {offset}",
        args.quality.len()
    );

    let scores = string_to_array(Some(args.quality.as_str()), offset).unwrap_or_default();

    let below_offset = scores.iter().filter(|&&q| q < 0).count();
    if below_offset > 0 {
        warn!(
            "{below_offset} of {} characters fall below offset {offset}; is this the right encoding?",
            scores.len()
        );
    }

    if verbose {
        eprintln!(
            "Decoded {} scores ({})",
            scores.len(),
            describe_offset(offset)
        );
    }

    match format {
        OutputFormat::Text => {
            let line: Vec<String> = scores.iter().map(ToString::to_string).collect();
            println!("{}", line.join(" "));
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "scores": scores,
                "offset": offset,
                "length": scores.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("position\tscore");
            for (position, score) in scores.iter().enumerate() {
                println!("{position}\t{score}");
            }
        }
    }

    Ok(())
}

fn describe_offset(offset: u8) -> String {
    match PhredEncoding::from_offset(offset) {
        Some(encoding) => encoding.to_string(),
        None => format!("offset {offset}"),
    }
}
