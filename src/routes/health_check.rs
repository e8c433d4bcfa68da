use actix_web::HttpResponse;

/******************************************/
// Liveness route
/******************************************/
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("WaterBiz API running")
}
