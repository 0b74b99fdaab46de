use booth_reserve::adapters::{AnyLocation, UnavailableLocation};
use booth_reserve::core::desk::check_zone;
use booth_reserve::config::{Command, ReserveArgs};
use booth_reserve::utils::error::{BoothError, ErrorSeverity};
use booth_reserve::utils::{logger, validation::Validate};
use booth_reserve::{
    BoothConfig, CliConfig, ReservationComposer, ReservationDesk, ROUEN,
};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn load_config(path: Option<&str>) -> Result<BoothConfig, BoothError> {
    let config = match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            BoothConfig::from_file(path)?
        }
        None => BoothConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

async fn run(cli: CliConfig) -> Result<(), BoothError> {
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Packages => {
            for package in config.catalog()?.packages() {
                println!(
                    "{:>3}  {:<24} {:>6} €  {}",
                    package.id,
                    package.title,
                    package.price_amount,
                    package.prints_label()
                );
            }
        }
        Command::Map => {
            println!("{}", ROUEN.map_embed_url());
        }
        Command::CheckZone(position) => {
            let locator = position.location_source(&config)?;
            let check = check_zone(&locator, &ROUEN).await;
            if cli.json {
                println!("{}", check.to_json()?);
            } else {
                if let Some(distance) = check.distance {
                    println!("Distance : {} km", distance.display_km());
                }
                println!("{}", check.message);
            }
        }
        Command::Reserve(args) => {
            if let Some(channel) = args.channel {
                config.dispatch.channel = channel;
                config.validate()?;
            }
            reserve(&config, &args, cli.json).await?;
        }
    }

    Ok(())
}

async fn reserve(config: &BoothConfig, args: &ReserveArgs, json: bool) -> Result<(), BoothError> {
    let locator = if args.no_location {
        AnyLocation::Unavailable(UnavailableLocation)
    } else {
        args.position.location_source(config)?
    };

    let desk = ReservationDesk::new(
        locator,
        config.dispatcher()?,
        ReservationComposer::new(config.contact.recipient.clone(), ROUEN),
        config.catalog()?,
        ROUEN,
    );

    let mut request = args.to_request();
    if !args.no_location {
        let check = desk.check_zone().await;
        if !json {
            println!("{}", check.message);
        }
        request.origin_coordinate = check.origin();
        request.distance_result = check.distance;
    }

    if json {
        println!("{}", desk.prepare(&request)?.payload.to_json()?);
    }

    let receipt = desk.submit(&request).await?;
    if json {
        tracing::info!("Dispatched via {} ({})", receipt.channel, receipt.target);
    } else if receipt.launched {
        println!("✅ Demande transmise via {} ({})", receipt.channel, receipt.target);
    } else {
        println!("Ouvrez ce lien pour envoyer votre demande :");
        println!("{}", receipt.target);
    }
    Ok(())
}
