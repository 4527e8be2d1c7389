use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "analyses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub user_id: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub disease_name: String,
    #[sea_orm(column_type = "Double")]
    pub confidence_score: f64,
    #[sea_orm(column_type = "JsonBinary")]
    pub treatment_recommendations: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub preventive_advice: Json,
    #[sea_orm(column_type = "Double", nullable)]
    pub severity_percentage: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub yield_loss_risk: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
