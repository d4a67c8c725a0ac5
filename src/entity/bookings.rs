use sea_orm::entity::prelude::*;

/// Booking rows point at theatre/movie/showtime by id only, without foreign
/// keys, so they survive catalog deletions.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub phone: String,
    pub theatre_id: Uuid,
    pub movie_id: Uuid,
    pub showtime_id: Uuid,
    pub seats_selected: Json,
    pub total_price: i64,
    pub booking_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
