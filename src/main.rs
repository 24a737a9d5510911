use anyhow::Context;
use clap::Parser;
use small_widgets::app::pages::Route;
use small_widgets::app::sessions::{fill_form, press_tokens, run_calculator_repl};
use small_widgets::config::{Command, SignupArgs};
use small_widgets::domain::model::FieldId;
use small_widgets::utils::error::{AppError, ErrorSeverity};
use small_widgets::utils::{logger, validation::Validate};
use small_widgets::{AppConfig, CalculatorSession, CliConfig, ConsoleNotifier, RegistrationForm, SubmitOutcome};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting small-widgets");

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(&e));
        }
    };

    match &cli.command {
        Command::Calc { keys } => run_calc(&cli, &config, keys),
        Command::Signup(args) => run_signup(&cli, &config, args),
        Command::Page { path } => run_page(&cli, path),
    }
}

fn load_config(cli: &CliConfig) -> small_widgets::Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    };
    config.validate()?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn exit_code(error: &AppError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn run_calc(cli: &CliConfig, config: &AppConfig, keys: &[String]) -> anyhow::Result<()> {
    let mut session = CalculatorSession::with_format(config.display_format(), ConsoleNotifier);

    if keys.is_empty() {
        tracing::info!("🧮 Reading keys from stdin, one or more per line");
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        run_calculator_repl(&mut session, stdin.lock(), stdout.lock())
            .context("calculator input loop failed")?;
    } else {
        let skipped = press_tokens(&mut session, keys);
        if !skipped.is_empty() {
            eprintln!("⚠️ Ignored unknown key(s): {}", skipped.join(" "));
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else if !keys.is_empty() {
        if !session.expression().is_empty() {
            println!("{}", session.expression());
        }
        println!("{}", session.display());
    }
    Ok(())
}

fn run_signup(cli: &CliConfig, config: &AppConfig, args: &SignupArgs) -> anyhow::Result<()> {
    let mut form = RegistrationForm::with_rules(config.validation_rules(), ConsoleNotifier);
    fill_form(&mut form, &args.form_data(), args.touch_all);

    let snapshot = form.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        for field in FieldId::ALL {
            match form.visible_error(field) {
                Some(message) => println!("✗ {:<18} {}", field.label(), message),
                None => println!("✓ {}", field.label()),
            }
        }
    }

    if args.dry_run {
        tracing::info!("🔍 Dry run, form not submitted (valid: {})", form.is_valid());
        return Ok(());
    }

    match form.submit() {
        SubmitOutcome::Accepted(data) => {
            tracing::info!("✅ Account created for {}", data.email);
            Ok(())
        }
        SubmitOutcome::Rejected => std::process::exit(2),
    }
}

fn run_page(cli: &CliConfig, path: &str) -> anyhow::Result<()> {
    let route = Route::from_path(path);
    let page = route.page();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", page.render());
    }

    if let Route::NotFound(path) = route {
        tracing::warn!("No page at {}", path);
    }
    Ok(())
}
