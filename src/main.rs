use anyhow::Context;
use clap::Parser;
use seecure_homecare::domain::areas::{coverage_summary, SERVICE_AREAS};
use seecure_homecare::domain::catalog::{Category, SubService};
use seecure_homecare::domain::contact::CONTACT_DETAILS;
use seecure_homecare::domain::options::service_area_options;
use seecure_homecare::utils::error::ErrorSeverity;
use seecure_homecare::utils::logger;
use seecure_homecare::utils::validation::{validate_phone, Validate};
use seecure_homecare::{
    get_all_services, get_service_by_id, get_sub_service_by_id, CliConfig, Command, ContactForm,
    HomecareError, HttpSubmitter, SubmitArgs, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    // 初始化日誌（命令列旗標與設定檔取其一即啟用）
    if settings.logging.json {
        logger::init_json_logger(settings.logging.verbose);
    } else {
        logger::init_cli_logger(settings.logging.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Resolved settings: {:?}", settings);

    match &config.command {
        Command::Services { json: true } => {
            let out = serde_json::to_string_pretty(get_all_services())
                .context("failed to serialize service catalog")?;
            println!("{}", out);
        }
        Command::Services { json: false } => {
            for category in get_all_services() {
                print_category(category);
                println!();
            }
        }
        Command::Service { id, json } => match get_service_by_id(id) {
            Some(category) if *json => {
                let out = serde_json::to_string_pretty(category)
                    .with_context(|| format!("failed to serialize service '{}'", id))?;
                println!("{}", out);
            }
            Some(category) => print_category(category),
            None => not_found(&format!("Service '{}'", id)),
        },
        Command::SubService { category, id } => match get_sub_service_by_id(category, id) {
            Some(sub) => print_sub_service(sub),
            None => not_found(&format!("Sub-service '{}' in '{}'", id, category)),
        },
        Command::Areas => {
            for option in service_area_options() {
                println!("{:<16} {}", option.value, option.label);
            }
            println!(
                "\nServing North Kolkata: {} ({} areas)",
                coverage_summary(6),
                SERVICE_AREAS.len()
            );
        }
        Command::Contact => {
            println!("📞 Phone:     {}", CONTACT_DETAILS.phone_numbers.join(" / "));
            println!("✉️  Email:     {}", CONTACT_DETAILS.email);
            println!("💬 WhatsApp:  {}", CONTACT_DETAILS.whatsapp_url);
            println!("🕗 Hours:     {}", CONTACT_DETAILS.regular_hours);
            println!(
                "🚑 Emergency: {} at {}",
                CONTACT_DETAILS.emergency_hours,
                CONTACT_DETAILS.emergency_number()
            );
            println!("📍 Areas:     {}", coverage_summary(5));
        }
        Command::CheckPhone { number } => {
            match validate_phone(number) {
                Ok(()) => println!("✅ '{}' is a valid Indian phone number", number),
                Err(e) => {
                    println!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Submit(args) => {
            if let Err(e) = submit(&settings, args).await {
                tracing::error!(
                    "❌ Contact submission failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                exit_with(&e);
            }
        }
    }

    Ok(())
}

async fn submit(settings: &TomlConfig, args: &SubmitArgs) -> seecure_homecare::Result<()> {
    let submitter = HttpSubmitter::from_config(settings)?;
    tracing::info!("Submitting contact form to {}", submitter.endpoint());

    let form = ContactForm::from_config(args.variant(), submitter, settings);
    for (field, value) in args.field_values() {
        form.set_field(field, value);
    }

    let outcome = form.submit().await;
    let status = form.status();
    if let Some(banner) = status.banner() {
        println!("{}", banner);
    }
    outcome?;

    println!("📨 Sent at {}", form.status_changed_at().format("%Y-%m-%d %H:%M:%S UTC"));
    Ok(())
}

fn print_category(category: &Category) {
    println!("{} [{}]", category.name, category.id);
    println!("  {}", category.description);
    for sub in category.sub_services {
        println!("  - {:<22} {:<32} {}", sub.id, sub.name, sub.price);
    }
}

fn print_sub_service(sub: &SubService) {
    println!("{} [{}]", sub.name, sub.id);
    println!("  {}", sub.description);
    println!("  Price:    {}", sub.price);
    if let Some(duration) = sub.duration {
        println!("  Duration: {}", duration);
    }
}

fn not_found(what: &str) -> ! {
    eprintln!("❌ {} not found", what);
    std::process::exit(1);
}

fn exit_with(e: &HomecareError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 依錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
