use actix_files::Files;
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Compress, Logger};
use actix_web::{web, App, HttpResponse, HttpServer};
use actix_cors::Cors;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod asset;
pub mod config;
pub mod health;
pub mod store;

pub use crate::config::ServerConfig;
pub use crate::store::{AppState, FileStore};

/// Error body for every failing endpoint: a single `error` string plus the
/// HTTP status code carry the whole taxonomy.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Asset not found")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health::health_check,
        crate::asset::handlers::get_all_assets,
        crate::asset::handlers::get_asset_by_id,
        crate::asset::handlers::create_asset,
        crate::asset::handlers::update_asset,
        crate::asset::handlers::delete_asset,
        crate::asset::handlers::get_stats,
    ),
    components(
        schemas(
            asset::models::Asset,
            asset::models::AssetPayload,
            asset::models::StatsResponse,
            asset::models::MessageResponse,
            health::HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Asset Service", description = "Asset CRUD and statistics endpoints."),
        (name = "Health", description = "Service health check.")
    )
)]
pub struct ApiDoc;

/// Registers the `/api` routes on an `App` or test service.
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health::health_check)))
        .service(
            web::resource("/assets")
                .route(web::get().to(asset::handlers::get_all_assets))
                .route(web::post().to(asset::handlers::create_asset)),
        )
        .service(
            web::resource("/assets/{id}")
                .route(web::get().to(asset::handlers::get_asset_by_id))
                .route(web::put().to(asset::handlers::update_asset))
                .route(web::delete().to(asset::handlers::delete_asset)),
        )
        .service(web::resource("/stats").route(web::get().to(asset::handlers::get_stats)));
}

pub async fn run() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();
    let app_state = web::Data::new(AppState {
        store: FileStore::new(&config.data_file),
    });
    if let Err(e) = app_state.store.init().await {
        log::error!("Failed to initialize data file {}: {}", config.data_file, e);
        std::process::exit(1);
    }

    log::info!("Starting server at http://0.0.0.0:{}", config.port);

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Compress::default())
            .wrap(Cors::permissive())
            .app_data(app_state.clone())
            .service(web::scope("/api").configure(api_routes))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            // Registered last: matches everything left over, serving the
            // frontend with a JSON 404 for missing files.
            .service(
                Files::new("/", static_dir.clone())
                    .index_file("index.html")
                    .default_handler(fn_service(|req: ServiceRequest| async {
                        let (req, _) = req.into_parts();
                        let resp =
                            HttpResponse::NotFound().json(ErrorResponse::new("File not found"));
                        Ok::<ServiceResponse, actix_web::Error>(ServiceResponse::new(req, resp))
                    })),
            )
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
