use clap::Args;

use crate::cli::OutputFormat;
use crate::core::region::Region;
use crate::parsing::region::RegionArgs;

#[derive(Args)]
pub struct RegionCommandArgs {
    /// Region string such as chr1:101-200 (1-based, inclusive)
    pub region: Option<String>,

    /// Contig name
    #[arg(long)]
    pub contig: Option<String>,

    /// Contig name (alias for --contig)
    #[arg(long)]
    pub reference: Option<String>,

    /// 0-based inclusive start
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// 0-based exclusive stop
    #[arg(long, allow_negative_numbers = true)]
    pub stop: Option<i64>,

    /// 0-based exclusive stop (alias for --stop)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i64>,
}

impl From<RegionCommandArgs> for RegionArgs {
    fn from(args: RegionCommandArgs) -> Self {
        RegionArgs {
            contig: args.contig,
            start: args.start,
            stop: args.stop,
            region: args.region,
            reference: args.reference,
            end: args.end,
        }
    }
}

pub fn run(args: RegionCommandArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let region = RegionArgs::from(args).parse()?;

    if verbose {
        eprintln!("Region covers {} bases", region.len());
    }

    match format {
        OutputFormat::Text => print_text_region(&region),
        OutputFormat::Json => print_json_region(&region)?,
        OutputFormat::Tsv => print_tsv_region(&region),
    }

    Ok(())
}

fn print_text_region(region: &Region) {
    println!("Contig: {}", region.contig());
    println!("Start: {}", region.start());
    println!("Stop: {}", region.stop());
    println!("Region: {region}");
}

fn print_json_region(region: &Region) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "contig": region.contig(),
        "start": region.start(),
        "stop": region.stop(),
        "region": region.to_string(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_region(region: &Region) {
    println!("contig\tstart\tstop");
    println!("{}\t{}\t{}", region.contig(), region.start(), region.stop());
}
