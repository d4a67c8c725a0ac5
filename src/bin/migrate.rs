use movie_booking_api::{
    config::database_url_from_env,
    db::{create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let pool = create_pool(&database_url_from_env()?).await?;
    run_migrations(&pool).await?;
    println!("Migrations applied");
    Ok(())
}
