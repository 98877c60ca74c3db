use anyhow::Result;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use igvf_metadata::config::Overrides;
use igvf_metadata::input::ReportInput;

#[derive(Parser, Debug)]
#[command(name = "igvf-metadata")]
#[command(about = "Generates a metadata workbook for an IGVF analysis set")]
#[command(group(ArgGroup::new("input").required(true).args(["accession", "infile"])))]
pub struct Cli {
    /// Accession of one analysis set
    #[arg(short, long, help = "Accession of one analysis set")]
    pub accession: Option<String>,

    /// File with one file-set path per line
    #[arg(short, long, help = "File listing one file-set path per line")]
    pub infile: Option<PathBuf>,

    /// Directory the workbook is written to
    #[arg(short, long, help = "Output directory (default: current directory)")]
    pub output_dir: Option<PathBuf>,

    /// Link hops followed from the root objects of each sheet
    #[arg(long, help = "Link hops followed from each sheet's root objects")]
    pub max_hops: Option<usize>,

    /// Portal API base URL
    #[arg(long, help = "Portal API base URL (overrides IGVF_API_URL)")]
    pub base_url: Option<String>,

    /// Log file, truncated on each run
    #[arg(long, default_value = "igvf-metadata.log", help = "Log file path")]
    pub log_file: PathBuf,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            output_dir: self.output_dir.clone(),
            max_hops: self.max_hops,
        }
    }

    pub fn report_input(&self) -> Result<ReportInput> {
        match (&self.accession, &self.infile) {
            (Some(accession), _) => ReportInput::accession(accession),
            (None, Some(infile)) => ReportInput::from_file(infile),
            (None, None) => anyhow::bail!("Either --accession or --infile is required"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accession_input() {
        let cli = Cli::try_parse_from(["igvf-metadata", "-a", "IGVFDS0000AAAA", "--max-hops", "2"]).unwrap();
        assert_eq!(
            cli.report_input().unwrap(),
            ReportInput::Accession("IGVFDS0000AAAA".to_string())
        );
        assert_eq!(cli.overrides().max_hops, Some(2));
        assert_eq!(cli.log_file, PathBuf::from("igvf-metadata.log"));
    }

    #[test]
    fn test_input_is_required_and_exclusive() {
        assert!(Cli::try_parse_from(["igvf-metadata"]).is_err());
        assert!(Cli::try_parse_from(["igvf-metadata", "-a", "IGVFDS0000AAAA", "-i", "sets.txt"]).is_err());
    }
}
