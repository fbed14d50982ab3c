use crate::config::Config;
use crate::worms::{AphiaRecord, WormsClient};
use clap::Args;
use colored::*;
use std::time::Duration;

#[derive(Args)]
pub struct TaxonArgs {
    /// Scientific name to look up
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Use fuzzy matching instead of an exact name lookup
    #[arg(long)]
    pub fuzzy: bool,

    /// Restrict matches to marine taxa
    #[arg(long)]
    pub marine_only: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn run(args: TaxonArgs, config: &Config) -> anyhow::Result<()> {
    use crate::cli::output::*;

    let marine_only = args.marine_only || config.worms.marine_only;
    let client = WormsClient::with_base_url(
        &config.worms.base_url,
        marine_only,
        Duration::from_secs(config.worms.timeout_secs),
    )?;

    let record = if args.fuzzy {
        client.lookup_fuzzy(&args.name)?
    } else {
        client.lookup_exact(&args.name)?
    };

    match record {
        Some(record) => match args.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&record)?),
            _ => print_record(&record),
        },
        None => {
            println!(
                "{} no unambiguous match for '{}'",
                "✗".yellow(),
                args.name
            );
        }
    }

    Ok(())
}

fn print_record(record: &AphiaRecord) {
    use crate::cli::output::*;

    section_header(&record.scientificname);
    tree_item(false, "AphiaID", Some(&record.aphia_id.to_string()));
    if let Some(authority) = &record.authority {
        tree_item(false, "Authority", Some(authority));
    }
    if let Some(rank) = &record.rank {
        tree_item(false, "Rank", Some(rank));
    }
    if let Some(status) = &record.status {
        tree_item(false, "Status", Some(status));
    }
    if let Some(valid_name) = &record.valid_name {
        tree_item(false, "Valid name", Some(valid_name));
    }
    tree_item(
        true,
        "LSID",
        Some(record.lsid.as_deref().unwrap_or("-")),
    );
}
