use movie_booking_api::routes::health::health_check;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
}

#[tokio::test]
async fn health_check_names_the_service() {
    let data = health_check().await.0.data.expect("health data");
    assert_eq!(data.service, "movie-booking-api");
    assert!(!data.version.is_empty());
}
