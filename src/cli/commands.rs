use crate::exchange::ConversionDirection;
use crate::market::{FilterSpec, SortDirection, SortField};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "coinlens", about = "Wallet address scanner and crypto price tools")]
pub struct Opt {
    #[arg(
        long = "config",
        global = true,
        help = "TOML settings file (defaults to $COINLENS_CONFIG)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

/// Where a conversion rate comes from
#[derive(Args, Debug)]
pub struct RateArgs {
    #[arg(long = "rate", help = "Rate to multiply the amount by")]
    pub rate: Option<f64>,
    #[arg(
        long = "file",
        requires = "coin",
        conflicts_with = "rate",
        help = "Price list JSON to derive the rate from"
    )]
    pub file: Option<PathBuf>,
    #[arg(long = "coin", requires = "file", help = "Coin id in the price list, e.g. bitcoin")]
    pub coin: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "classify", about = "Detect the wallet type of an address")]
    Classify {
        #[arg(help = "The wallet address")]
        address: String,
    },
    #[command(name = "format", about = "Shorten an address for display")]
    Format {
        #[arg(help = "The wallet address")]
        address: String,
        #[arg(long = "length", help = "Maximum display length (minimum 8)")]
        length: Option<usize>,
    },
    #[command(name = "wallet-types", about = "List the recognised wallet types")]
    WalletTypes,
    #[command(name = "scan", about = "Process a decoded QR payload")]
    Scan {
        #[arg(help = "Decoded QR payload")]
        payload: String,
        #[arg(long = "save", help = "Keep the result in the scan history")]
        save: bool,
    },
    #[command(name = "history", about = "Print saved wallets, newest first")]
    History {
        #[arg(long = "favorites", help = "Only show favorites")]
        favorites: bool,
    },
    #[command(name = "favorite", about = "Toggle the favorite flag of a saved wallet")]
    Favorite {
        #[arg(help = "Saved wallet id")]
        id: String,
    },
    #[command(name = "notes", about = "Set the notes of a saved wallet")]
    Notes {
        #[arg(help = "Saved wallet id")]
        id: String,
        #[arg(help = "Notes text; omit to clear")]
        notes: Vec<String>,
    },
    #[command(name = "remove", about = "Delete a saved wallet")]
    Remove {
        #[arg(help = "Saved wallet id")]
        id: String,
    },
    #[command(name = "clear-history", about = "Delete every saved wallet")]
    ClearHistory,
    #[command(name = "list", about = "Print a price list from a JSON file")]
    List {
        #[arg(long = "file", help = "Price list JSON (/coins/markets shape)")]
        file: PathBuf,
        #[arg(
            long = "sort",
            default_value_t = SortField::MarketCap,
            help = "Sort field (market_cap, volume, name, price, change)"
        )]
        sort: SortField,
        #[arg(
            long = "direction",
            default_value_t = SortDirection::Desc,
            help = "Sort direction (asc, desc)"
        )]
        direction: SortDirection,
        #[arg(
            long = "filter",
            help = "Filter: positive, negative, price:MIN..MAX or price:MIN.."
        )]
        filters: Vec<FilterSpec>,
        #[arg(long = "page", default_value_t = 1, help = "1-based page number")]
        page: usize,
        #[arg(long = "per-page", default_value_t = 50, help = "Records per page")]
        per_page: usize,
    },
    #[command(name = "convert", about = "Convert an amount between crypto and fiat")]
    Convert {
        #[arg(help = "Amount to convert")]
        amount: String,
        #[arg(
            long = "direction",
            default_value_t = ConversionDirection::CryptoToFiat,
            help = "crypto-to-fiat or fiat-to-crypto"
        )]
        direction: ConversionDirection,
        #[command(flatten)]
        rate: RateArgs,
    },
}
