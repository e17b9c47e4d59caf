use actix_multipart::{Multipart, MultipartError};
use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;

use crate::config::AppConfig;
use crate::services::receipt_service::mock_scan;

/// Read the whole upload so the connection can be reused, returning its size
async fn drain_upload(payload: &mut Multipart) -> Result<usize, MultipartError> {
    let mut total = 0;
    while let Some(mut field) = payload.try_next().await? {
        while let Some(chunk) = field.try_next().await? {
            total += chunk.len();
        }
    }
    Ok(total)
}

/*
    /api/scan-receipt
*/
pub async fn scan_receipt(config: web::Data<AppConfig>, mut payload: Multipart) -> impl Responder {
    // The image is not inspected, so an unreadable upload is not an error
    match drain_upload(&mut payload).await {
        Ok(bytes) => log::debug!("Received receipt upload of {} bytes", bytes),
        Err(err) => log::debug!("Ignoring unreadable receipt upload: {}", err),
    }

    if !config.receipt_latency.is_zero() {
        tokio::time::sleep(config.receipt_latency).await;
    }

    let items = mock_scan(&mut rand::thread_rng());
    log::info!("Scanned receipt with {} items", items.len());
    HttpResponse::Ok().json(items)
}
