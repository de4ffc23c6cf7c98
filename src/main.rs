// This is my entry point for the coinlens CLI
// Every command maps onto one library operation so the app and the CLI share behaviour
use clap::Parser;
use coinlens::cli::RateArgs;
use coinlens::config::CONFIG_FILE_ENV;
use coinlens::market::effective_sort;
use coinlens::wallet::lookup;
use coinlens::{
    convert, current_timestamp, display_list, format_address, format_compact, format_number,
    format_percentage, Command, ConversionDirection, JsonFileSource, MarketQuery, Opt,
    PriceSource, RateSource, RecordRates, SavedWallet, ScanHistory, ScanResult, SledStore,
    SortSpec, WalletType, GLOBAL_CONFIG,
};
use log::{error, LevelFilter};
use std::path::PathBuf;
use std::{env, fs, process};

fn main() {
    // Info by default, RUST_LOG still wins when set
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let opt = Opt::parse();

    if let Err(e) = load_config(opt.config) {
        error!("Error: {e}");
        process::exit(1);
    }

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// The --config flag wins over $COINLENS_CONFIG; environment variables are re-applied on top
fn load_config(path: Option<PathBuf>) -> coinlens::Result<()> {
    let path = path.or_else(|| env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from));
    if let Some(path) = path {
        GLOBAL_CONFIG.load_file(&path)?;
    }
    Ok(())
}

// I keep the history in a sled database under the configured data directory
fn open_history() -> coinlens::Result<ScanHistory<SledStore>> {
    let data_dir = GLOBAL_CONFIG.get_data_dir();
    fs::create_dir_all(&data_dir)?;
    let store = SledStore::open(GLOBAL_CONFIG.history_db_path())?;
    Ok(ScanHistory::with_key(store, &GLOBAL_CONFIG.get_history_key()))
}

fn print_wallet(wallet: &SavedWallet) {
    let length = GLOBAL_CONFIG.get_address_display_length();
    let star = if wallet.is_favorite { "*" } else { " " };
    println!(
        "{star} {}  {:<4} {:<16} {}",
        wallet.id,
        wallet.wallet_type.tag(),
        wallet.wallet_type.display_name(),
        wallet.display_address(length)
    );
    if let Some(notes) = &wallet.notes {
        println!("    notes: {notes}");
    }
}

fn resolve_rate(
    direction: ConversionDirection,
    args: RateArgs,
) -> Result<Option<f64>, Box<dyn std::error::Error>> {
    if let Some(rate) = args.rate {
        return Ok(Some(rate));
    }
    match (args.file, args.coin) {
        (Some(file), Some(coin)) => {
            let vs_currency = GLOBAL_CONFIG.get_vs_currency();
            let records = JsonFileSource::new(file).load_all()?;
            let rates = RecordRates::new(records, &vs_currency);
            let rate = match direction {
                ConversionDirection::CryptoToFiat => rates.exchange_rate(&coin, &vs_currency)?,
                ConversionDirection::FiatToCrypto => rates.exchange_rate(&vs_currency, &coin)?,
            };
            Ok(rate)
        }
        _ => Err("Give either --rate or --file with --coin".into()),
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Classify { address } => {
            let wallet_type = coinlens::classify(&address);
            println!("{} ({})", wallet_type.tag(), wallet_type.display_name());
        }
        Command::Format { address, length } => {
            let length = length.unwrap_or_else(|| GLOBAL_CONFIG.get_address_display_length());
            println!("{}", format_address(&address, length));
        }
        Command::WalletTypes => {
            for wallet_type in WalletType::ALL {
                let pattern = lookup(wallet_type);
                println!(
                    "{:<8} {:<16} {}",
                    wallet_type.tag(),
                    wallet_type.display_name(),
                    pattern.rule
                );
            }
        }
        Command::Scan { payload, save } => {
            let result = ScanResult::from_payload(&payload, current_timestamp()?);
            let length = GLOBAL_CONFIG.get_address_display_length();
            println!(
                "{} ({}): {}",
                result.wallet_type.tag(),
                result.wallet_type.display_name(),
                result.display_address(length)
            );
            if save {
                let mut history = open_history()?;
                let wallet = history.add(result)?;
                println!("Saved as {}", wallet.id);
            }
        }
        Command::History { favorites } => {
            let history = open_history()?;
            let wallets = if favorites {
                history.favorites()
            } else {
                history.wallets().to_vec()
            };
            if wallets.is_empty() {
                println!("No saved wallets");
            }
            for wallet in &wallets {
                print_wallet(wallet);
            }
        }
        Command::Favorite { id } => {
            let mut history = open_history()?;
            let is_favorite = history.toggle_favorite(&id)?;
            println!("Favorite: {is_favorite}");
        }
        Command::Notes { id, notes } => {
            let mut history = open_history()?;
            history.update_notes(&id, &notes.join(" "))?;
            println!("Done!");
        }
        Command::Remove { id } => {
            let mut history = open_history()?;
            history.remove(&id)?;
            println!("Done!");
        }
        Command::ClearHistory => {
            let mut history = open_history()?;
            history.clear()?;
            println!("Done!");
        }
        Command::List {
            file,
            sort,
            direction,
            filters,
            page,
            per_page,
        } => {
            let query = MarketQuery {
                vs_currency: GLOBAL_CONFIG.get_vs_currency(),
                ..Default::default()
            }
            .with_page(page, per_page);
            let records = JsonFileSource::new(file).fetch_markets(&query)?;
            let spec = SortSpec::new(sort, direction);
            if !filters.is_empty() {
                let applied = effective_sort(&spec, &filters);
                println!("Sorted by {} ({})", applied.field.label(), applied.direction);
            }
            let currency = query.vs_currency.to_uppercase();
            for record in display_list(&records, &filters, &spec) {
                let price = record
                    .current_price
                    .map(|price| format!("{} {currency}", format_number(price, 2)))
                    .unwrap_or_else(|| "-".to_string());
                let change = record
                    .price_change_percentage_24h
                    .map(|change| format_percentage(change, 2))
                    .unwrap_or_else(|| "-".to_string());
                let market_cap = record
                    .market_cap
                    .map(|cap| format_compact(cap, 1))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<24} {:<6} {:>20} {:>9} {:>10}",
                    record.name,
                    record.symbol.to_uppercase(),
                    price,
                    change,
                    market_cap
                );
            }
        }
        Command::Convert {
            amount,
            direction,
            rate,
        } => {
            let rate = resolve_rate(direction, rate)?;
            let result = convert(&amount, direction, rate)?;
            println!("{result}");
        }
    }
    Ok(())
}
