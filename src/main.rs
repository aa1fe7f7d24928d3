//! HubDesk Admin Console
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use HubDesk::{
    config::Settings,
    utils::logging,
    api::ApiClient,
    session::TokenStore,
    screens::{
        CarouselScreen, NoticeCenter, StockScreen, TestimonialScreen, UserAdminScreen,
    },
    models::AdminLevel,
};

#[derive(Parser)]
#[command(name = "hubdesk")]
#[command(about = "Admin console for the incubation center content platform", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe backend reachability
    Health,
    /// User administration
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Carousel image administration
    Carousel {
        #[command(subcommand)]
        action: CarouselAction,
    },
    /// Testimonial administration
    Testimonials {
        #[command(subcommand)]
        action: TestimonialAction,
    },
    /// Stock inventory administration
    Stock {
        #[command(subcommand)]
        action: StockAction,
    },
    /// Export listings to CSV
    Export {
        #[command(subcommand)]
        target: ExportTarget,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// List users, one page at a time
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Search users by free text
    Search {
        query: String,
    },
    /// Set a user's admin level (0, 1 or 2)
    Promote {
        id: String,
        level: u8,
    },
}

#[derive(Subcommand)]
enum CarouselAction {
    /// Show the carousel in display order
    List,
    /// Move an image and persist the new order
    Move {
        from: usize,
        to: usize,
    },
}

#[derive(Subcommand)]
enum TestimonialAction {
    /// Show testimonials in display order
    List,
    /// Move a testimonial and persist the new order
    Move {
        from: usize,
        to: usize,
    },
}

#[derive(Subcommand)]
enum StockAction {
    /// Show the inventory
    List,
    /// Set an item's count
    Adjust {
        id: String,
        count: i64,
    },
}

#[derive(Subcommand)]
enum ExportTarget {
    /// Export the current user page to CSV
    Users,
    /// Export the stock inventory to CSV
    Stock,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting HubDesk admin console...");

    // Session token and API client
    let tokens = Arc::new(TokenStore::load(&settings.auth).await?);
    if !tokens.has_token() {
        info!("No session token stored; backend will reject admin calls");
    }
    let api = ApiClient::new(&settings, tokens)?;
    let notices = Arc::new(NoticeCenter::new(32));

    // A stored token belongs to a signed-in full admin; the backend is the
    // real authority on every call
    let level = AdminLevel::Super;

    let result = match cli.command {
        Commands::Health => {
            let health = api.health_check().await;
            if health.is_healthy() {
                println!("Backend reachable ({})", settings.api.base_url);
            } else {
                for issue in health.get_issues() {
                    println!("{}", issue);
                }
            }
            Ok(())
        }
        Commands::Users { action } => {
            let mut pagination = settings.pagination.clone();
            if let UserAction::List { limit: Some(limit), .. } = &action {
                pagination.default_limit = (*limit).min(pagination.max_limit);
            }
            let mut screen = UserAdminScreen::open(
                api.users.clone(),
                level,
                &pagination,
                &settings.search,
                notices.clone(),
            )?;
            match action {
                UserAction::List { page, .. } => {
                    screen.go_to_page(page);
                    screen.load_page().await?;
                    print_users(&screen);
                    Ok(())
                }
                UserAction::Search { query } => {
                    screen.set_query(query);
                    screen.run_search().await?;
                    print_users(&screen);
                    Ok(())
                }
                UserAction::Promote { id, level: target } => {
                    let target = AdminLevel::try_from(target)?;
                    screen.promote("console", &id, target).await?;
                    Ok(())
                }
            }
        }
        Commands::Carousel { action } => {
            let mut screen = CarouselScreen::open(api.carousel.clone(), level, notices.clone())?;
            screen.load().await?;
            match action {
                CarouselAction::List => {
                    for image in screen.images() {
                        println!("{:>3}  {}  {}", image.order, image.id, image.image_url);
                    }
                    Ok(())
                }
                CarouselAction::Move { from, to } => screen.move_image(from, to).await,
            }
        }
        Commands::Testimonials { action } => {
            let mut screen = TestimonialScreen::open(api.testimonials.clone(), level, notices.clone())?;
            screen.load().await?;
            match action {
                TestimonialAction::List => {
                    for message in screen.messages() {
                        println!("{:>3}  {}  {}", message.order, message.author, message.body);
                    }
                    Ok(())
                }
                TestimonialAction::Move { from, to } => {
                    screen.move_message(from, to).await
                }
            }
        }
        Commands::Stock { action } => {
            let mut screen = StockScreen::open(api.stock.clone(), level, notices.clone())?;
            screen.load().await?;
            match action {
                StockAction::List => {
                    for item in screen.items() {
                        println!("{:>5}  {:<12}  {}", item.count, item.kind, item.name);
                    }
                    Ok(())
                }
                StockAction::Adjust { id, count } => screen.adjust_count(&id, count).await,
            }
        }
        Commands::Export { target } => match target {
            ExportTarget::Users => {
                let mut screen = UserAdminScreen::open(
                    api.users.clone(),
                    level,
                    &settings.pagination,
                    &settings.search,
                    notices.clone(),
                )?;
                screen.load_page().await?;
                let path = screen.export_csv(&settings.export.output_dir).await?;
                println!("Wrote {}", path.display());
                Ok(())
            }
            ExportTarget::Stock => {
                let mut screen = StockScreen::open(api.stock.clone(), level, notices.clone())?;
                screen.load().await?;
                let path = screen.export_csv(&settings.export.output_dir).await?;
                println!("Wrote {}", path.display());
                Ok(())
            }
        },
    };

    // Transient banners: everything caught along the way is shown once
    for notice in notices.drain() {
        eprintln!("[{}] {}", notice.severity, notice.text);
    }

    result.map_err(Into::into)
}

/// Print the on-screen user page as a table
fn print_users(screen: &UserAdminScreen) {
    for user in screen.users() {
        println!(
            "{:<24}  {:<30}  {:<20}  {}",
            user.name,
            user.email,
            user.organization.as_deref().unwrap_or("-"),
            user.admin
        );
    }
    println!("{}", screen.pager().summary());
}
