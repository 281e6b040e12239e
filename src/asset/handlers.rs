use actix_web::{
    web::{self, Json, Path},
    HttpResponse, Responder,
};
use log::{error, info};

use crate::asset::models::{Asset, AssetPayload, MessageResponse, StatsResponse};
use crate::store::AppState;
use crate::ErrorResponse;

fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[utoipa::path(
    context_path = "/api",
    tag = "Asset Service",
    get,
    path = "/assets",
    responses(
        (status = 200, description = "List of all assets", body = [Asset]),
        (status = 500, description = "Failed to read asset file", body = ErrorResponse)
    )
)]
pub async fn get_all_assets(data: web::Data<AppState>) -> impl Responder {
    let _guard = data.store.lock().await;
    match data.store.load().await {
        Ok(assets) => HttpResponse::Ok().json(assets),
        Err(e) => {
            error!("Failed to load assets: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(&e.to_string()))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Asset Service",
    get,
    path = "/assets/{id}",
    responses(
        (status = 200, description = "Asset found", body = Asset),
        (status = 404, description = "Asset not found", body = ErrorResponse),
        (status = 500, description = "Failed to read asset file", body = ErrorResponse)
    ),
    params(
        ("id" = i64, Path, description = "ID of the asset to retrieve")
    )
)]
pub async fn get_asset_by_id(id: Path<i64>, data: web::Data<AppState>) -> impl Responder {
    let id = id.into_inner();
    let _guard = data.store.lock().await;
    let assets = match data.store.load().await {
        Ok(assets) => assets,
        Err(e) => {
            error!("Failed to load assets: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(&e.to_string()));
        }
    };

    match assets.into_iter().find(|a| a.id == id) {
        Some(asset) => HttpResponse::Ok().json(asset),
        None => HttpResponse::NotFound().json(ErrorResponse::new("Asset not found")),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Asset Service",
    post,
    path = "/assets",
    request_body = AssetPayload,
    responses(
        (status = 201, description = "Asset created successfully", body = Asset),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 500, description = "Failed to save", body = ErrorResponse)
    )
)]
pub async fn create_asset(req: Json<AssetPayload>, data: web::Data<AppState>) -> impl Responder {
    let payload = req.into_inner();
    if let Err(msg) = payload.validate_required() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(msg));
    }

    let _guard = data.store.lock().await;
    let mut assets = match data.store.load().await {
        Ok(assets) => assets,
        Err(e) => {
            error!("Failed to load assets: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(&e.to_string()));
        }
    };

    let now = now_iso();
    let new_asset = Asset::from_payload(data.store.next_id(), payload, now.clone(), now);
    assets.push(new_asset.clone());

    if let Err(e) = data.store.persist(&assets).await {
        error!("Failed to persist new asset: {}", e);
        return HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to save"));
    }

    info!("Created asset {}", new_asset.id);
    HttpResponse::Created().json(new_asset)
}

#[utoipa::path(
    context_path = "/api",
    tag = "Asset Service",
    put,
    path = "/assets/{id}",
    request_body = AssetPayload,
    responses(
        (status = 200, description = "Asset updated successfully", body = Asset),
        (status = 404, description = "Asset not found", body = ErrorResponse),
        (status = 500, description = "Failed to update", body = ErrorResponse)
    ),
    params(
        ("id" = i64, Path, description = "ID of the asset to update")
    )
)]
pub async fn update_asset(
    id: Path<i64>,
    req: Json<AssetPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = id.into_inner();
    let _guard = data.store.lock().await;
    let mut assets = match data.store.load().await {
        Ok(assets) => assets,
        Err(e) => {
            error!("Failed to load assets: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(&e.to_string()));
        }
    };

    let index = match assets.iter().position(|a| a.id == id) {
        Some(index) => index,
        None => return HttpResponse::NotFound().json(ErrorResponse::new("Asset not found")),
    };

    // Full replace: id comes from the path, createdAt survives from the
    // stored record (stamped now if it never had one), updatedAt refreshes.
    let created_at = assets[index].created_at.clone().unwrap_or_else(now_iso);
    let updated = Asset::from_payload(id, req.into_inner(), created_at, now_iso());
    assets[index] = updated.clone();

    if let Err(e) = data.store.persist(&assets).await {
        error!("Failed to persist updated asset {}: {}", id, e);
        return HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to update"));
    }

    info!("Updated asset {}", id);
    HttpResponse::Ok().json(updated)
}

#[utoipa::path(
    context_path = "/api",
    tag = "Asset Service",
    delete,
    path = "/assets/{id}",
    responses(
        (status = 200, description = "Asset deleted successfully", body = MessageResponse),
        (status = 404, description = "Asset not found", body = ErrorResponse),
        (status = 500, description = "Failed to delete", body = ErrorResponse)
    ),
    params(
        ("id" = i64, Path, description = "ID of the asset to delete")
    )
)]
pub async fn delete_asset(id: Path<i64>, data: web::Data<AppState>) -> impl Responder {
    let id = id.into_inner();
    let _guard = data.store.lock().await;
    let mut assets = match data.store.load().await {
        Ok(assets) => assets,
        Err(e) => {
            error!("Failed to load assets: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(&e.to_string()));
        }
    };

    let original_len = assets.len();
    assets.retain(|a| a.id != id);
    if assets.len() == original_len {
        return HttpResponse::NotFound().json(ErrorResponse::new("Asset not found"));
    }

    if let Err(e) = data.store.persist(&assets).await {
        error!("Failed to persist after deleting asset {}: {}", id, e);
        return HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to delete"));
    }

    info!("Deleted asset {}", id);
    HttpResponse::Ok().json(MessageResponse {
        message: "Deleted successfully".to_string(),
    })
}

#[utoipa::path(
    context_path = "/api",
    tag = "Asset Service",
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Collection statistics", body = StatsResponse),
        (status = 500, description = "Failed to read asset file", body = ErrorResponse)
    )
)]
pub async fn get_stats(data: web::Data<AppState>) -> impl Responder {
    let _guard = data.store.lock().await;
    match data.store.load().await {
        Ok(assets) => HttpResponse::Ok().json(StatsResponse::compute(&assets)),
        Err(e) => {
            error!("Failed to load assets for stats: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(&e.to_string()))
        }
    }
}
