use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub theatre_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::theatres::Entity",
        from = "Column::TheatreId",
        to = "super::theatres::Column::Id"
    )]
    Theatres,
    #[sea_orm(has_many = "super::showtimes::Entity")]
    Showtimes,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::theatres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Theatres.def()
    }
}

impl Related<super::showtimes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Showtimes.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
