//! Command line access to the FSPS filter catalog.
//!
//! Subcommands:
//! - `find`: list filter names containing a fragment
//! - `show`: print metadata and calibration constants for one filter
//! - `list`: print the whole catalog
//! - `verify`: check the reference tables cover every filter

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use sps_filters::{FilterCatalog, FilterSummary, ReferenceConfig};

#[derive(Parser, Debug)]
#[command(name = "sps_filters")]
#[command(about = "Look up FSPS photometric filters and their solar calibration constants")]
#[command(version)]
struct Args {
    /// SPS data root (defaults to $SPS_HOME)
    #[arg(long, global = true)]
    sps_home: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List filter names containing BAND (case-insensitive)
    Find {
        /// Name fragment, e.g. "F555W"
        band: String,
    },

    /// Show one filter with its solar magnitudes and effective wavelength
    Show {
        /// Catalog name, e.g. "sdss_g"
        name: String,
    },

    /// List every filter in catalog order
    List,

    /// Check that the reference tables have a row for every filter
    Verify,
}

fn cmd_find(catalog: &FilterCatalog, band: &str, json: bool) -> Result<()> {
    let names = catalog.find(band);
    log::info!("{} filters match '{band}'", names.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

fn cmd_show(catalog: &FilterCatalog, name: &str, json: bool) -> Result<()> {
    let Some(filter) = catalog.get(name) else {
        let suggestions = catalog.find(name);
        if suggestions.is_empty() {
            bail!("Unknown filter '{name}'");
        }
        bail!(
            "Unknown filter '{name}', did you mean: {}",
            suggestions.join(", ")
        );
    };

    let summary = filter.summary()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &FilterSummary) {
    println!("Name:                 {}", summary.name);
    println!("Index:                {}", summary.index);
    println!("Description:          {}", summary.fullname);
    if let Some(ab) = summary.solar_magnitude_ab {
        println!("M_sun (AB):           {ab:.3}");
    }
    if let Some(vega) = summary.solar_magnitude_vega {
        println!("M_sun (Vega):         {vega:.3}");
    }
    if let Some(lambda) = summary.effective_wavelength {
        println!("Effective wavelength: {lambda:.1} A");
    }
}

fn cmd_list(catalog: &FilterCatalog, json: bool) -> Result<()> {
    if json {
        let metadata: Vec<FilterSummary> = catalog.iter().map(|f| f.metadata()).collect();
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        for filter in catalog {
            println!("{:4} {:<18} {}", filter.index(), filter.name(), filter.fullname());
        }
    }
    Ok(())
}

fn cmd_verify(catalog: &FilterCatalog, root: &Path) -> Result<()> {
    catalog.verify_reference_tables()?;
    println!(
        "Reference tables under {} cover all {} filters",
        root.display(),
        catalog.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = match args.sps_home {
        Some(root) => ReferenceConfig::with_root(root),
        None => ReferenceConfig::from_env(),
    };
    let root = config.root().to_path_buf();
    log::debug!("Using SPS data root {}", root.display());
    let catalog = FilterCatalog::with_config(config);

    match args.command {
        Command::Find { band } => cmd_find(&catalog, &band, args.json),
        Command::Show { name } => cmd_show(&catalog, &name, args.json),
        Command::List => cmd_list(&catalog, args.json),
        Command::Verify => cmd_verify(&catalog, &root),
    }
}
