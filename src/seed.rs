use chrono::NaiveTime;
use uuid::Uuid;

use crate::{db::DbPool, pricing::seat_layout};

const THEATRES: [&str; 3] = ["PVR Phoenix", "INOX Forum", "Cinepolis Central"];
const MOVIES: [&str; 4] = ["Interstellar", "Inception", "The Dark Knight", "Dune: Part Two"];
const SHOWTIMES: [(u32, u32); 4] = [(10, 0), (13, 30), (16, 0), (19, 45)];

/// Counts of rows inserted by a seed run; rows that already existed are not counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub theatres: u64,
    pub movies: u64,
    pub showtimes: u64,
    pub seats: u64,
}

/// Populates the fixed demo catalog. Safe to run repeatedly.
pub async fn seed_catalog(pool: &DbPool) -> anyhow::Result<SeedReport> {
    let mut report = SeedReport::default();
    let mut tx = pool.begin().await?;

    for theatre_name in THEATRES {
        let (theatre_id, created) = ensure_row(
            &mut tx,
            "SELECT id FROM theatres WHERE name = $1",
            "INSERT INTO theatres (id, name) VALUES ($1, $2)",
            theatre_name,
            None,
        )
        .await?;
        report.theatres += created as u64;

        for movie_name in MOVIES {
            let (movie_id, created) = ensure_row(
                &mut tx,
                "SELECT id FROM movies WHERE name = $1 AND theatre_id = $2",
                "INSERT INTO movies (id, name, theatre_id) VALUES ($1, $2, $3)",
                movie_name,
                Some(theatre_id),
            )
            .await?;
            report.movies += created as u64;

            for (hour, minute) in SHOWTIMES {
                let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) else {
                    continue;
                };
                let showtime_id = match sqlx::query_as::<_, (Uuid,)>(
                    "SELECT id FROM showtimes WHERE movie_id = $1 AND showtime = $2",
                )
                .bind(movie_id)
                .bind(time)
                .fetch_optional(&mut *tx)
                .await?
                {
                    Some((id,)) => id,
                    None => {
                        let id = Uuid::new_v4();
                        sqlx::query("INSERT INTO showtimes (id, movie_id, showtime) VALUES ($1, $2, $3)")
                            .bind(id)
                            .bind(movie_id)
                            .bind(time)
                            .execute(&mut *tx)
                            .await?;
                        report.showtimes += 1;
                        id
                    }
                };

                for (seat_number, seat_type) in seat_layout() {
                    let result = sqlx::query(
                        r#"
                        INSERT INTO seats (id, showtime_id, seat_number, seat_type, booked)
                        VALUES ($1, $2, $3, $4, FALSE)
                        ON CONFLICT (showtime_id, seat_number) DO NOTHING
                        "#,
                    )
                    .bind(Uuid::new_v4())
                    .bind(showtime_id)
                    .bind(&seat_number)
                    .bind(seat_type.as_str())
                    .execute(&mut *tx)
                    .await?;
                    report.seats += result.rows_affected();
                }
            }
        }
    }

    tx.commit().await?;

    tracing::info!(
        theatres = report.theatres,
        movies = report.movies,
        showtimes = report.showtimes,
        seats = report.seats,
        "catalog seeded"
    );
    Ok(report)
}

/// Finds a named row, inserting it when missing. Returns the id and whether it was created.
async fn ensure_row(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    select_sql: &str,
    insert_sql: &str,
    name: &str,
    parent_id: Option<Uuid>,
) -> anyhow::Result<(Uuid, bool)> {
    let mut select = sqlx::query_as::<_, (Uuid,)>(select_sql).bind(name);
    if let Some(parent_id) = parent_id {
        select = select.bind(parent_id);
    }
    if let Some((id,)) = select.fetch_optional(&mut **tx).await? {
        return Ok((id, false));
    }

    let id = Uuid::new_v4();
    let mut insert = sqlx::query(insert_sql).bind(id).bind(name);
    if let Some(parent_id) = parent_id {
        insert = insert.bind(parent_id);
    }
    insert.execute(&mut **tx).await?;
    tracing::debug!(%id, name, "seed row inserted");
    Ok((id, true))
}
