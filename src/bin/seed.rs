use movie_booking_api::{
    config::database_url_from_env,
    db::{create_pool, run_migrations},
    seed::seed_catalog,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,movie_booking_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = create_pool(&database_url_from_env()?).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let report = seed_catalog(&pool).await?;
    println!(
        "Seed completed. Inserted {} theatres, {} movies, {} showtimes, {} seats",
        report.theatres, report.movies, report.showtimes, report.seats
    );
    Ok(())
}
