//! Refill station listing and creation.

use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::info;

use models::station;
use crate::errors::ServiceError;

/// Body accepted when adding a station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationInput {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Public shape of a station in list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationView {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
}

impl From<station::Model> for StationView {
    fn from(m: station::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            latitude: m.latitude,
            longitude: m.longitude,
            description: m.description,
        }
    }
}

/// All stations in insertion order.
pub async fn list_stations(db: &DatabaseConnection) -> Result<Vec<StationView>, ServiceError> {
    let rows = station::list_all(db).await?;
    Ok(rows.into_iter().map(StationView::from).collect())
}

pub async fn add_station(db: &DatabaseConnection, input: StationInput) -> Result<StationView, ServiceError> {
    let created = station::create(
        db,
        &input.name,
        input.latitude,
        input.longitude,
        input.description.as_deref(),
    )
    .await?;
    info!(station_id = created.id, name = %created.name, "station_added");
    Ok(created.into())
}
