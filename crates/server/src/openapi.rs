use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct RegisterRequest { pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginResponse { pub message: String, pub user_id: i32 }

#[derive(ToSchema)]
pub struct StationRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct StationDoc {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct RewardsResponse { pub rewards: i32 }

#[derive(ToSchema)]
pub struct PaymentRequest { pub amount: f64 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::stations::list_stations,
        crate::routes::stations::add_station,
        crate::routes::rewards::grant_reward,
        crate::routes::rewards::get_rewards,
        crate::routes::payment::process_payment,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            StationRequest,
            StationDoc,
            RewardsResponse,
            PaymentRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "stations"),
        (name = "rewards"),
        (name = "payment")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for p in ["/health", "/register", "/login", "/stations", "/reward/{user_id}", "/payment"] {
            assert!(paths.contains(&p), "missing {p}");
        }
    }
}
