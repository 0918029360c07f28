//! Shopfront command line
//!
//! Loads a seed, applies basket actions from the command line, and prints the catalog,
//! the promotions, and the resulting receipt.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use shopfront::prelude::*;
use tabled::{builder::Builder, settings::Style};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat, LoggingConfig};

mod config;

fn main() -> Result<()> {
    let config = Config::parse();

    init_logging(&config.logging);

    let mut storefront = match &config.seed {
        Some(path) => Storefront::from_path(path)?,
        None => Storefront::open(Seed::demo())?,
    };

    for sku in &config.disable {
        if !storefront.set_promotion_active(sku, false) {
            warn!(%sku, "no promotion to disable");
        }
    }

    for sku in &config.add {
        if storefront.item(sku).is_none() {
            warn!(%sku, "SKU is not in the catalog and will not be priced");
        }

        storefront.add_item(sku);
    }

    for sku in &config.remove {
        storefront.remove_item(sku);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_catalog(&mut handle, &storefront)?;
    write_promotions(&mut handle, &storefront)?;

    storefront.receipt()?.write_to(&mut handle)?;

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true);

    match config.log_format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn write_catalog(out: &mut impl Write, storefront: &Storefront) -> Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["SKU", "Item", "Price", "In basket"].map(String::from));

    for item in storefront.catalog() {
        builder.push_record([
            item.sku().to_string(),
            item.name().to_string(),
            format_money(item.price()),
            storefront.item_count(item.sku().as_str()).to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    writeln!(out, "Catalog\n{table}\n")?;

    Ok(())
}

fn write_promotions(out: &mut impl Write, storefront: &Storefront) -> Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Promotion", "Active"].map(String::from));

    for promotion in storefront.promotions() {
        let Some(item) = storefront.item(promotion.sku().as_str()) else {
            continue;
        };

        builder.push_record([
            item.name().to_string(),
            promotion.kind().to_string(),
            if promotion.is_active() { "yes" } else { "no" }.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    writeln!(out, "Promotions\n{table}\n")?;

    Ok(())
}
